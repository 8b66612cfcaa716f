// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use podium_domain::{AthleteId, DisciplineId, DomainError, EventId, ResultId};
use thiserror::Error;

/// Errors that can occur while running a competition.
///
/// None of these are fatal: the operation that returned one left the
/// tournament unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No event with this id is attached to the tournament.
    #[error("Event {0} not found")]
    EventNotFound(EventId),
    /// No athlete with this id belongs to any team.
    #[error("Athlete {0} not found")]
    AthleteNotFound(AthleteId),
    /// No event holds a result with this id.
    #[error("Result {0} not found")]
    ResultNotFound(ResultId),
    /// The event's discipline is not in the sports catalog.
    #[error("Discipline {0} not found")]
    DisciplineNotFound(DisciplineId),
    /// Finalization was requested for an event with no recorded results.
    #[error("Event {0} has no results to finalize")]
    NoResultsToFinalize(EventId),
    /// Another delegation already uses this country code.
    #[error("Country code {0} is already taken by another delegation")]
    DuplicateCountryCode(String),
    /// An athlete with this id already belongs to another delegation.
    #[error("Athlete {0} already belongs to another delegation")]
    DuplicateAthleteId(AthleteId),
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}
