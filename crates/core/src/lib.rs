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

mod competition;
mod error;
mod standings;
mod tournament;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use competition::{CompetitionManager, FinalizedEvent};
pub use error::CoreError;
pub use standings::{
    CountryMedalCount, MedalStandings, country_standing, current_standings, medals_by_sport,
    top_countries,
};
pub use tournament::Tournament;
