// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use podium::CoreError;
use podium_domain::{AthleteId, DomainError, VenueId};
use thiserror::Error;

/// Errors raised while loading or running a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    /// The scenario is not valid JSON for the expected shape.
    #[error("Invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A date or time field did not match its format.
    #[error("Invalid {field} '{value}': {source}")]
    InvalidTimestamp {
        /// Which field was malformed.
        field: &'static str,
        /// The offending text.
        value: String,
        /// The parser's complaint.
        source: time::error::Parse,
    },
    /// A timed performance could not be expressed as an elapsed time.
    #[error("Event '{event}' has an invalid elapsed time of {seconds} seconds")]
    InvalidElapsedTime {
        /// The event's name.
        event: String,
        /// The rejected value.
        seconds: f64,
    },
    /// An event references a venue the scenario does not declare.
    #[error("Event '{event}' references unknown venue {venue_id}")]
    UnknownVenue {
        /// The event's name.
        event: String,
        /// The missing venue.
        venue_id: VenueId,
    },
    /// A disqualification names an athlete with no recorded performance.
    #[error("Event '{event}' has no performance by athlete {athlete_id} to disqualify")]
    NoPerformanceToDisqualify {
        /// The event's name.
        event: String,
        /// The athlete named in the disqualification.
        athlete_id: AthleteId,
    },
    /// A domain rule was violated while building the tournament.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The engine rejected an operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}
