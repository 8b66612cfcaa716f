// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Medal standings across delegations.
//!
//! Standings are always rebuilt from the athletes' result histories; event
//! result lists are only consulted to resolve which sport a medal belongs to.
//!
//! ## Ordering Rules (Authoritative)
//!
//! Countries are ordered by:
//! 1. Gold medals (most first)
//! 2. Silver medals (most first)
//! 3. Bronze medals (most first)
//! 4. Country name (ascending)
//!
//! Two delegations with the same name and the same tallies keep the order in
//! which they joined the tournament.

use crate::tournament::Tournament;
use podium_domain::{MedalCount, NationalTeam};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// One row of the medal table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryMedalCount {
    /// Country name.
    pub country_name: String,
    /// ISO-3 country code.
    pub country_code: String,
    /// Flag glyph.
    pub flag: String,
    /// Gold medals.
    pub gold: u32,
    /// Silver medals.
    pub silver: u32,
    /// Bronze medals.
    pub bronze: u32,
}

impl CountryMedalCount {
    /// Builds a row from a delegation's cached tally.
    #[must_use]
    pub fn from_team(team: &NationalTeam) -> Self {
        let medals: MedalCount = team.medals();
        Self {
            country_name: team.country_name.clone(),
            country_code: team.country_code.clone(),
            flag: team.flag.clone(),
            gold: medals.gold,
            silver: medals.silver,
            bronze: medals.bronze,
        }
    }

    /// Gold plus silver plus bronze.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

impl std::fmt::Display for CountryMedalCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}): {} gold, {} silver, {} bronze ({} total)",
            self.flag,
            self.country_name,
            self.country_code,
            self.gold,
            self.silver,
            self.bronze,
            self.total()
        )
    }
}

/// A medal table, one row per country code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalStandings {
    countries: Vec<CountryMedalCount>,
}

impl MedalStandings {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            countries: Vec::new(),
        }
    }

    /// Inserts a row, or replaces the row with the same country code.
    pub fn update_country(&mut self, row: CountryMedalCount) {
        match self
            .countries
            .iter_mut()
            .find(|c| c.country_code == row.country_code)
        {
            Some(existing) => *existing = row,
            None => self.countries.push(row),
        }
    }

    /// Rows in insertion order.
    #[must_use]
    pub fn countries(&self) -> &[CountryMedalCount] {
        &self.countries
    }

    #[must_use]
    pub fn country(&self, country_code: &str) -> Option<&CountryMedalCount> {
        self.countries
            .iter()
            .find(|c| c.country_code.eq_ignore_ascii_case(country_code))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Returns every row in medal-table order.
    ///
    /// The sort is stable, so rows that compare equal keep insertion order.
    #[must_use]
    pub fn ranking(&self) -> Vec<CountryMedalCount> {
        let mut rows: Vec<CountryMedalCount> = self.countries.clone();
        rows.sort_by(compare_standing);
        rows
    }

    /// Sum of every medal in the table.
    #[must_use]
    pub fn total_medals_distributed(&self) -> u32 {
        self.countries.iter().map(CountryMedalCount::total).sum()
    }
}

/// Compares two rows by medal-table position.
///
/// Returns `Ordering::Less` if `a` ranks higher.
fn compare_standing(a: &CountryMedalCount, b: &CountryMedalCount) -> Ordering {
    // 1-3. Gold, silver, bronze (most wins)
    b.gold
        .cmp(&a.gold)
        .then_with(|| b.silver.cmp(&a.silver))
        .then_with(|| b.bronze.cmp(&a.bronze))
        // 4. Country name (ascending)
        .then_with(|| a.country_name.cmp(&b.country_name))
}

/// Recomputes every delegation's medals and builds the medal table.
///
/// # Returns
///
/// One row per delegation, in the order delegations joined the tournament.
/// Use [`MedalStandings::ranking`] for medal-table order.
pub fn current_standings(tournament: &mut Tournament) -> MedalStandings {
    let mut standings: MedalStandings = MedalStandings::new();
    for team in tournament.teams_mut() {
        team.recalculate_medals();
        standings.update_country(CountryMedalCount::from_team(team));
    }
    debug!(
        countries = standings.len(),
        medals = standings.total_medals_distributed(),
        "Standings recalculated"
    );
    standings
}

/// Returns the first `count` rows of the medal table.
pub fn top_countries(tournament: &mut Tournament, count: usize) -> Vec<CountryMedalCount> {
    let mut ranking: Vec<CountryMedalCount> = current_standings(tournament).ranking();
    ranking.truncate(count);
    ranking
}

/// Recomputes one delegation's medals and returns its row.
///
/// The lookup ignores case. An unknown code logs a warning and yields `None`.
pub fn country_standing(
    tournament: &mut Tournament,
    country_code: &str,
) -> Option<CountryMedalCount> {
    let Some(team) = tournament.team_mut(country_code) else {
        warn!(country = country_code, "Country not found in standings");
        return None;
    };
    team.recalculate_medals();
    Some(CountryMedalCount::from_team(team))
}

/// Counts one delegation's medals per sport.
///
/// Each medal in an athlete's history is attributed through its event's
/// discipline to the owning sport. Medals whose event or discipline cannot be
/// resolved are skipped.
///
/// # Returns
///
/// Sport name to medal count, empty if the country is unknown.
#[must_use]
pub fn medals_by_sport(tournament: &Tournament, country_code: &str) -> BTreeMap<String, u32> {
    let mut by_sport: BTreeMap<String, u32> = BTreeMap::new();

    let Some(team) = tournament.team(country_code) else {
        warn!(country = country_code, "Country not found for per-sport breakdown");
        return by_sport;
    };

    let medalled = team
        .athletes()
        .iter()
        .flat_map(|a| a.results())
        .filter(|r| r.medal().is_medal());

    for result in medalled {
        let sport_name: Option<&str> = tournament
            .event(result.event_id())
            .and_then(|e| tournament.discipline(e.discipline_id))
            .map(|(sport, _)| sport.name.as_str());

        match sport_name {
            Some(name) => *by_sport.entry(name.to_string()).or_insert(0) += 1,
            None => debug!(
                result_id = %result.id(),
                event_id = %result.event_id(),
                "Skipping medal with unresolvable sport"
            ),
        }
    }

    by_sport
}
