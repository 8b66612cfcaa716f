// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::SportId;
use crate::types::Gender;
use thiserror::Error;

/// Errors that can occur during domain validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Country code is not a three-letter ISO-3 code.
    #[error("Invalid country code '{0}': expected three ASCII letters")]
    InvalidCountryCode(String),
    /// Gender string was not recognized.
    #[error("Unknown gender: {0}")]
    UnknownGender(String),
    /// Competition type string was not recognized.
    #[error("Unknown competition type: {0}")]
    UnknownCompetitionType(String),
    /// Event status string was not recognized.
    #[error("Unknown event status: {0}")]
    UnknownEventStatus(String),
    /// Medal string was not recognized.
    #[error("Unknown medal: {0}")]
    UnknownMedal(String),
    /// The athlete's gender is not accepted by the discipline.
    #[error("{athlete} ({athlete_gender}) cannot enter a {discipline_gender} discipline")]
    GenderMismatch {
        /// The athlete's full name.
        athlete: String,
        /// The athlete's gender.
        athlete_gender: Gender,
        /// The gender category of the discipline.
        discipline_gender: Gender,
    },
    /// The athlete is not registered for the discipline's sport.
    #[error("{athlete} is not registered for sport {sport_id}")]
    NotRegisteredForSport {
        /// The athlete's full name.
        athlete: String,
        /// The sport the discipline belongs to.
        sport_id: SportId,
    },
}
