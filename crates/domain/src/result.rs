// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::athlete::Athlete;
use crate::ids::{AthleteId, EventId, ResultId};
use crate::types::Medal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The raw measured outcome of a performance.
///
/// A result carries exactly one of these: an elapsed time for races,
/// or a numeric score for judged and points-based disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Performance {
    /// Elapsed time, before penalties.
    Timed(Duration),
    /// Judged or points score, before penalties.
    Scored(f64),
}

/// One athlete's recorded performance in one event, with its derived
/// rank and medal.
///
/// Rank and medal are only meaningful once the owning event has been
/// finalized. A disqualified result always has rank 0 and no medal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResult {
    id: ResultId,
    event_id: EventId,
    athlete_id: AthleteId,
    /// Athlete name at recording time, for display.
    athlete_name: String,
    /// Athlete country code at recording time, for display.
    country_code: String,
    performance: Performance,
    /// Seconds for timed results, points for scored results. Stored raw.
    penalty: f64,
    rank: u32,
    medal: Medal,
    disqualified: bool,
    disqualification_reason: String,
    notes: String,
}

impl EventResult {
    /// Creates a timed result for an athlete.
    ///
    /// # Arguments
    ///
    /// * `id` - The result identity
    /// * `event_id` - The owning event
    /// * `athlete` - The athlete who performed
    /// * `time` - The elapsed time before penalties
    /// * `penalty_seconds` - Penalty seconds added at ranking time
    #[must_use]
    pub fn timed(
        id: ResultId,
        event_id: EventId,
        athlete: &Athlete,
        time: Duration,
        penalty_seconds: f64,
    ) -> Self {
        Self::with_performance(id, event_id, athlete, Performance::Timed(time), penalty_seconds)
    }

    /// Creates a scored result for an athlete.
    ///
    /// # Arguments
    ///
    /// * `id` - The result identity
    /// * `event_id` - The owning event
    /// * `athlete` - The athlete who performed
    /// * `score` - The score before penalties
    /// * `penalty_points` - Penalty points subtracted at ranking time
    #[must_use]
    pub fn scored(
        id: ResultId,
        event_id: EventId,
        athlete: &Athlete,
        score: f64,
        penalty_points: f64,
    ) -> Self {
        Self::with_performance(id, event_id, athlete, Performance::Scored(score), penalty_points)
    }

    fn with_performance(
        id: ResultId,
        event_id: EventId,
        athlete: &Athlete,
        performance: Performance,
        penalty: f64,
    ) -> Self {
        Self {
            id,
            event_id,
            athlete_id: athlete.id,
            athlete_name: athlete.full_name(),
            country_code: athlete.country_code.clone(),
            performance,
            penalty,
            rank: 0,
            medal: Medal::None,
            disqualified: false,
            disqualification_reason: String::new(),
            notes: String::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ResultId {
        self.id
    }

    #[must_use]
    pub const fn event_id(&self) -> EventId {
        self.event_id
    }

    #[must_use]
    pub const fn athlete_id(&self) -> AthleteId {
        self.athlete_id
    }

    #[must_use]
    pub fn athlete_name(&self) -> &str {
        &self.athlete_name
    }

    #[must_use]
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    #[must_use]
    pub const fn performance(&self) -> Performance {
        self.performance
    }

    /// Returns the elapsed time if this is a timed result.
    #[must_use]
    pub const fn time(&self) -> Option<Duration> {
        match self.performance {
            Performance::Timed(time) => Some(time),
            Performance::Scored(_) => None,
        }
    }

    /// Returns the raw score if this is a scored result.
    #[must_use]
    pub const fn score(&self) -> Option<f64> {
        match self.performance {
            Performance::Scored(score) => Some(score),
            Performance::Timed(_) => None,
        }
    }

    #[must_use]
    pub const fn penalty(&self) -> f64 {
        self.penalty
    }

    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }

    #[must_use]
    pub const fn medal(&self) -> Medal {
        self.medal
    }

    #[must_use]
    pub const fn is_disqualified(&self) -> bool {
        self.disqualified
    }

    /// Returns the disqualification reason, if disqualified.
    #[must_use]
    pub fn disqualification_reason(&self) -> Option<&str> {
        self.disqualified
            .then_some(self.disqualification_reason.as_str())
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Elapsed seconds plus penalty, for timed results.
    #[must_use]
    pub fn final_seconds(&self) -> Option<f64> {
        self.time().map(|time| time.as_secs_f64() + self.penalty)
    }

    /// Score minus penalty, for scored results.
    #[must_use]
    pub fn final_score(&self) -> Option<f64> {
        self.score().map(|score| score - self.penalty)
    }

    /// Sets the final rank. Medals are left to [`crate::assign_medals`].
    ///
    /// Disqualified results stay unranked.
    pub const fn set_rank(&mut self, rank: u32) {
        if self.disqualified {
            return;
        }
        self.rank = rank;
    }

    pub(crate) const fn set_medal(&mut self, medal: Medal) {
        self.medal = medal;
    }

    /// Disqualifies this result, clearing its rank and medal.
    pub fn disqualify(&mut self, reason: impl Into<String>) {
        self.disqualified = true;
        self.disqualification_reason = reason.into();
        self.rank = 0;
        self.medal = Medal::None;
    }

    /// Formats the final performance for display.
    ///
    /// `DSQ` for disqualified results, `mm:ss.ff` for timed results
    /// (penalty included) and `N.NN pts` for scored results (penalty
    /// subtracted).
    #[must_use]
    pub fn final_performance(&self) -> String {
        if self.disqualified {
            return String::from("DSQ");
        }
        match self.performance {
            Performance::Timed(_) => format_race_time(self.final_seconds().unwrap_or_default()),
            Performance::Scored(_) => {
                format!("{:.2} pts", self.final_score().unwrap_or_default())
            }
        }
    }
}

impl std::fmt::Display for EventResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {} ({}) - {}",
            self.rank,
            self.athlete_name,
            self.country_code,
            self.final_performance()
        )?;
        if self.medal.is_medal() {
            write!(f, " [{}]", self.medal)?;
        }
        Ok(())
    }
}

/// Formats seconds as `mm:ss.ff`, rounding to the hundredth.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_race_time(seconds: f64) -> String {
    let hundredths: u64 = (seconds.max(0.0) * 100.0).round() as u64;
    let minutes: u64 = hundredths / 6000;
    let secs: u64 = (hundredths / 100) % 60;
    let fraction: u64 = hundredths % 100;
    format!("{minutes:02}:{secs:02}.{fraction:02}")
}
