// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{AthleteId, SportId, TeamId};
use crate::result::EventResult;
use crate::types::{Gender, Medal, MedalCount};
use serde::{Deserialize, Serialize};

/// An athlete competing for a national team.
///
/// Medals are never stored on their own: they are derived from the
/// non-`None` medals in the athlete's result history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    /// Tournament-wide identity.
    pub id: AthleteId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Age in years.
    pub age: u8,
    /// Nationality as displayed (e.g., "France").
    pub nationality: String,
    /// ISO-3 country code, normalized to uppercase.
    pub country_code: String,
    /// Bib number worn in competition.
    pub bib_number: u32,
    /// Gender category.
    pub gender: Gender,
    /// Sports this athlete is registered for. No duplicates.
    sport_ids: Vec<SportId>,
    /// Finalized results, in finalization order.
    results: Vec<EventResult>,
}

impl Athlete {
    /// Creates a new `Athlete` with no sports and no results.
    ///
    /// # Arguments
    ///
    /// * `id` - The athlete identity
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `age` - Age in years
    /// * `nationality` - Displayed nationality
    /// * `country_code` - ISO-3 code (will be normalized to uppercase)
    /// * `gender` - Gender category
    /// * `bib_number` - Bib number
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: AthleteId,
        first_name: &str,
        last_name: &str,
        age: u8,
        nationality: &str,
        country_code: &str,
        gender: Gender,
        bib_number: u32,
    ) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            nationality: nationality.to_string(),
            country_code: country_code.to_uppercase(),
            bib_number,
            gender,
            sport_ids: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Returns "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Registers the athlete for a sport. Returns `false` if already registered.
    pub fn add_sport(&mut self, sport_id: SportId) -> bool {
        if self.sport_ids.contains(&sport_id) {
            return false;
        }
        self.sport_ids.push(sport_id);
        true
    }

    #[must_use]
    pub fn sport_ids(&self) -> &[SportId] {
        &self.sport_ids
    }

    #[must_use]
    pub fn is_registered_for(&self, sport_id: SportId) -> bool {
        self.sport_ids.contains(&sport_id)
    }

    /// Appends a finalized result to the history.
    ///
    /// The history holds at most one entry per result id: finalizing the
    /// same event again replaces the earlier entry in place instead of
    /// appending a duplicate.
    pub fn add_result(&mut self, result: EventResult) {
        if let Some(existing) = self.results.iter_mut().find(|r| r.id() == result.id()) {
            *existing = result;
        } else {
            self.results.push(result);
        }
    }

    /// Replaces the history entry for `result` if one exists.
    ///
    /// Returns `true` if an entry was replaced.
    pub fn refresh_result(&mut self, result: &EventResult) -> bool {
        match self.results.iter_mut().find(|r| r.id() == result.id()) {
            Some(existing) => {
                *existing = result.clone();
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn results(&self) -> &[EventResult] {
        &self.results
    }

    /// Medals won, in history order.
    #[must_use]
    pub fn medals(&self) -> Vec<Medal> {
        self.results
            .iter()
            .map(EventResult::medal)
            .filter(Medal::is_medal)
            .collect()
    }

    /// Counts the medals of one type in the history.
    #[must_use]
    pub fn medal_count(&self, medal: Medal) -> u32 {
        self.medal_tally().get(medal)
    }

    /// Tallies every medal in the history.
    #[must_use]
    pub fn medal_tally(&self) -> MedalCount {
        let mut tally: MedalCount = MedalCount::default();
        for result in &self.results {
            tally.add(result.medal());
        }
        tally
    }

    #[must_use]
    pub fn total_medals(&self) -> u32 {
        self.medal_tally().total()
    }
}

impl std::fmt::Display for Athlete {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - Bib #{} - {} medal(s)",
            self.full_name(),
            self.country_code,
            self.bib_number,
            self.total_medals()
        )
    }
}

/// A national delegation and its athletes.
///
/// The medal tally is a cache. It is only accurate right after
/// [`NationalTeam::recalculate_medals`]; read it through the standings
/// functions, which always recompute first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalTeam {
    /// Team identity.
    pub id: TeamId,
    /// Country name (e.g., "Norway").
    pub country_name: String,
    /// ISO-3 country code, normalized to uppercase.
    pub country_code: String,
    /// Flag glyph used for display.
    pub flag: String,
    athletes: Vec<Athlete>,
    medals: MedalCount,
}

impl NationalTeam {
    /// Creates an empty team.
    #[must_use]
    pub fn new(id: TeamId, country_name: &str, country_code: &str, flag: &str) -> Self {
        Self {
            id,
            country_name: country_name.to_string(),
            country_code: country_code.to_uppercase(),
            flag: flag.to_string(),
            athletes: Vec::new(),
            medals: MedalCount::default(),
        }
    }

    /// Adds an athlete to the delegation. Returns `false` if the athlete
    /// (by id) is already on the team.
    pub fn add_athlete(&mut self, athlete: Athlete) -> bool {
        if self.athletes.iter().any(|a| a.id == athlete.id) {
            return false;
        }
        self.athletes.push(athlete);
        true
    }

    #[must_use]
    pub fn athletes(&self) -> &[Athlete] {
        &self.athletes
    }

    #[must_use]
    pub fn athlete(&self, id: AthleteId) -> Option<&Athlete> {
        self.athletes.iter().find(|a| a.id == id)
    }

    pub fn athlete_mut(&mut self, id: AthleteId) -> Option<&mut Athlete> {
        self.athletes.iter_mut().find(|a| a.id == id)
    }

    #[must_use]
    pub fn athlete_count(&self) -> usize {
        self.athletes.len()
    }

    /// Returns the cached medal tally.
    #[must_use]
    pub const fn medals(&self) -> MedalCount {
        self.medals
    }

    #[must_use]
    pub const fn total_medals(&self) -> u32 {
        self.medals.total()
    }

    /// Rebuilds the medal tally from every athlete's result history.
    ///
    /// The previous tally is discarded, so calling this repeatedly without
    /// new results always yields the same counts.
    pub fn recalculate_medals(&mut self) -> MedalCount {
        let mut tally: MedalCount = MedalCount::default();
        for athlete in &self.athletes {
            tally += athlete.medal_tally();
        }
        self.medals = tally;
        tally
    }
}

impl std::fmt::Display for NationalTeam {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}) - Gold:{} Silver:{} Bronze:{} | Total:{} - {} athlete(s)",
            self.flag,
            self.country_name,
            self.country_code,
            self.medals.gold,
            self.medals.silver,
            self.medals.bronze,
            self.medals.total(),
            self.athlete_count()
        )
    }
}
