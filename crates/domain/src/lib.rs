// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod athlete;
mod error;
mod event;
mod ids;
mod result;
mod scoring;
mod sport;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use athlete::{Athlete, NationalTeam};
pub use error::DomainError;
pub use event::{DEFAULT_PHASE, Event, EventDraft};
pub use ids::{AthleteId, DisciplineId, EventId, ResultId, SportId, TeamId, VenueId};
pub use result::{EventResult, Performance};
pub use scoring::{
    RankingPolicy, SUSPECT_TIME, ScoringMethod, assign_medals, calculate_final_time,
    calculate_judged_score, rank_results, validate_performance,
};
pub use sport::{DEFAULT_MAX_PARTICIPANTS, Discipline, Sport, Venue};
pub use types::{CompetitionType, EventStatus, Gender, Medal, MedalCount};
pub use validation::{validate_athlete_for_discipline, validate_country_code};
