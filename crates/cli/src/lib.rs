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

mod demo;
mod error;
mod render;
mod scenario;
mod state;

pub use demo::{DEMO_SCENARIO, demo_scenario};
pub use error::ScenarioError;
pub use render::{
    daily_schedule, event_report, medal_table, sport_breakdown, tournament_summary,
    write_medal_table_csv,
};
pub use scenario::{
    AthleteSpec, DisciplineSpec, DisqualificationSpec, EventSpec, PerformanceSpec, Scenario,
    ScenarioRun, SlotSpec, SportSpec, TeamSpec, TournamentSpec, VenueSpec,
};
pub use state::AppState;
