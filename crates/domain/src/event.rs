// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ids::{AthleteId, DisciplineId, EventId, ResultId};
use crate::result::EventResult;
use crate::sport::Venue;
use crate::types::EventStatus;
use serde::{Deserialize, Serialize};
use time::{Date, Time};

/// Default phase label for a newly scheduled event.
pub const DEFAULT_PHASE: &str = "Final";

/// Everything needed to schedule an event, before it has an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    /// Display name (e.g., "Men's Downhill - Final").
    pub name: String,
    /// The discipline this event instantiates.
    pub discipline_id: DisciplineId,
    /// Competition day.
    pub date: Date,
    /// Start time.
    pub time: Time,
    /// Assigned venue, already cleared for conflicts.
    pub venue: Venue,
    /// Phase label (e.g., "Qualification", "Final").
    pub phase: String,
    /// Round number within the phase.
    pub round_number: u32,
}

impl EventDraft {
    /// Creates a draft for round 1 of a final.
    #[must_use]
    pub fn new(
        name: &str,
        discipline_id: DisciplineId,
        date: Date,
        time: Time,
        venue: Venue,
    ) -> Self {
        Self {
            name: name.to_string(),
            discipline_id,
            date,
            time,
            venue,
            phase: String::from(DEFAULT_PHASE),
            round_number: 1,
        }
    }

    #[must_use]
    pub fn with_phase(mut self, phase: &str, round_number: u32) -> Self {
        self.phase = phase.to_string();
        self.round_number = round_number;
        self
    }
}

/// A single scheduled competition instance of a discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event identity.
    pub id: EventId,
    /// Display name.
    pub name: String,
    /// The discipline this event instantiates.
    pub discipline_id: DisciplineId,
    /// Competition day.
    pub date: Date,
    /// Start time.
    pub time: Time,
    /// Assigned venue.
    pub venue: Venue,
    /// Phase label.
    pub phase: String,
    /// Round number within the phase.
    pub round_number: u32,
    /// Free-text weather report.
    pub weather_conditions: String,
    status: EventStatus,
    participants: Vec<AthleteId>,
    results: Vec<EventResult>,
}

impl Event {
    /// Creates a `Scheduled` event with no participants and no results.
    #[must_use]
    pub fn from_draft(id: EventId, draft: EventDraft) -> Self {
        Self {
            id,
            name: draft.name,
            discipline_id: draft.discipline_id,
            date: draft.date,
            time: draft.time,
            venue: draft.venue,
            phase: draft.phase,
            round_number: draft.round_number,
            weather_conditions: String::from("Normal"),
            status: EventStatus::Scheduled,
            participants: Vec::new(),
            results: Vec::new(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> EventStatus {
        self.status
    }

    /// Stores a new status tag. No transition rules are enforced here.
    pub const fn update_status(&mut self, status: EventStatus) {
        self.status = status;
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == EventStatus::Completed
    }

    /// Moves the event to a new slot and marks it `Postponed`.
    pub const fn reschedule(&mut self, date: Date, time: Time) {
        self.date = date;
        self.time = time;
        self.status = EventStatus::Postponed;
    }

    /// Adds a participant. Returns `false` if already registered.
    pub fn add_participant(&mut self, athlete_id: AthleteId) -> bool {
        if self.participants.contains(&athlete_id) {
            return false;
        }
        self.participants.push(athlete_id);
        true
    }

    #[must_use]
    pub fn participants(&self) -> &[AthleteId] {
        &self.participants
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Appends a result. Returns `false` if a result with the same id is
    /// already attached.
    pub fn add_result(&mut self, result: EventResult) -> bool {
        if self.results.iter().any(|r| r.id() == result.id()) {
            return false;
        }
        self.results.push(result);
        true
    }

    #[must_use]
    pub fn results(&self) -> &[EventResult] {
        &self.results
    }

    #[must_use]
    pub fn result(&self, id: ResultId) -> Option<&EventResult> {
        self.results.iter().find(|r| r.id() == id)
    }

    pub fn result_mut(&mut self, id: ResultId) -> Option<&mut EventResult> {
        self.results.iter_mut().find(|r| r.id() == id)
    }

    /// Detaches the result list, leaving the event with none.
    ///
    /// Used by finalization, which ranks the list and puts it back with
    /// [`Event::replace_results`].
    pub fn take_results(&mut self) -> Vec<EventResult> {
        std::mem::take(&mut self.results)
    }

    /// Installs a (typically ranked) result list.
    pub fn replace_results(&mut self, results: Vec<EventResult>) {
        self.results = results;
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} (Round {}) - {} {} - {} [{}]",
            self.name,
            self.phase,
            self.round_number,
            self.date,
            self.time,
            self.venue.name,
            self.status
        )
    }
}
