// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Competition lifecycle: scheduling events, registering participants,
//! recording performances, disqualifying and finalizing.
//!
//! Every operation addresses entities by id inside an explicit
//! [`Tournament`]. Operations that cannot resolve an id log a warning and
//! return an error without touching the tournament.

use crate::error::CoreError;
use crate::tournament::Tournament;
use podium_domain::{
    Athlete, AthleteId, Event, EventDraft, EventId, EventResult, EventStatus, ResultId,
    ScoringMethod, assign_medals, calculate_judged_score, rank_results,
};
use std::time::Duration;
use time::{Date, Time};
use tracing::{info, warn};

/// Issues event and result identities and drives events through their
/// lifecycle.
///
/// Identities start at 1 and only ever increase for the lifetime of the
/// manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitionManager {
    next_event_id: u32,
    next_result_id: u32,
}

/// The outcome of finalizing an event.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedEvent {
    /// The finalized event.
    pub event_id: EventId,
    /// The event's display name.
    pub event_name: String,
    /// Ranked results followed by disqualified ones.
    pub results: Vec<EventResult>,
}

impl FinalizedEvent {
    /// Returns the medal-winning results in rank order.
    pub fn medalists(&self) -> impl Iterator<Item = &EventResult> {
        self.results.iter().filter(|r| r.medal().is_medal())
    }
}

#[allow(clippy::unused_self)]
impl CompetitionManager {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_event_id: 1,
            next_result_id: 1,
        }
    }

    /// Creates a `Scheduled` event with the next event id.
    ///
    /// The event is not attached to any tournament; see
    /// [`CompetitionManager::schedule_event`].
    pub fn create_event(&mut self, draft: EventDraft) -> Event {
        let id: EventId = EventId::new(self.next_event_id);
        self.next_event_id += 1;

        let event: Event = Event::from_draft(id, draft);
        info!(
            event_id = %event.id,
            name = %event.name,
            date = %event.date,
            time = %event.time,
            "Event created"
        );
        event
    }

    /// Creates an event and attaches it to the tournament.
    ///
    /// # Returns
    ///
    /// The new event's id.
    pub fn schedule_event(&mut self, tournament: &mut Tournament, draft: EventDraft) -> EventId {
        let event: Event = self.create_event(draft);
        let id: EventId = event.id;
        tournament.add_event(event);
        id
    }

    /// Registers an athlete as a participant of an event.
    ///
    /// Registering the same athlete twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The event is not attached to the tournament
    /// - The athlete does not belong to any delegation
    pub fn register_participant(
        &self,
        tournament: &mut Tournament,
        event_id: EventId,
        athlete_id: AthleteId,
    ) -> Result<(), CoreError> {
        let Some(athlete_name) = tournament.athlete(athlete_id).map(|a| a.full_name()) else {
            warn!(
                event_id = %event_id,
                athlete_id = %athlete_id,
                "Cannot register unknown athlete"
            );
            return Err(CoreError::AthleteNotFound(athlete_id));
        };

        let Some(event) = tournament.event_mut(event_id) else {
            warn!(
                event_id = %event_id,
                athlete_id = %athlete_id,
                "Cannot register for unknown event"
            );
            return Err(CoreError::EventNotFound(event_id));
        };

        if event.add_participant(athlete_id) {
            info!(athlete = %athlete_name, event = %event.name, "Participant registered");
        }
        Ok(())
    }

    /// Records an elapsed time for an athlete in an event.
    ///
    /// # Arguments
    ///
    /// * `tournament` - The tournament holding the event and athlete
    /// * `event_id` - The event
    /// * `athlete_id` - The athlete
    /// * `time` - Elapsed time before penalties
    /// * `penalty_seconds` - Penalty seconds, stored as given
    ///
    /// # Returns
    ///
    /// A copy of the recorded result.
    ///
    /// # Errors
    ///
    /// Returns an error if the event or the athlete cannot be found.
    pub fn record_timed_performance(
        &mut self,
        tournament: &mut Tournament,
        event_id: EventId,
        athlete_id: AthleteId,
        time: Duration,
        penalty_seconds: f64,
    ) -> Result<EventResult, CoreError> {
        self.record(tournament, event_id, athlete_id, |id, athlete| {
            EventResult::timed(id, event_id, athlete, time, penalty_seconds)
        })
    }

    /// Records a judged performance for an athlete in an event.
    ///
    /// The score is the judges' mean with the single highest and lowest mark
    /// removed. With no marks the athlete is recorded with a zero score.
    ///
    /// # Errors
    ///
    /// Returns an error if the event or the athlete cannot be found.
    pub fn record_scored_performance(
        &mut self,
        tournament: &mut Tournament,
        event_id: EventId,
        athlete_id: AthleteId,
        judge_scores: &[f64],
        penalty_points: f64,
    ) -> Result<EventResult, CoreError> {
        self.record(tournament, event_id, athlete_id, |id, athlete| {
            let score: f64 = calculate_judged_score(judge_scores, true);
            EventResult::scored(id, event_id, athlete, score, penalty_points)
        })
    }

    fn record(
        &mut self,
        tournament: &mut Tournament,
        event_id: EventId,
        athlete_id: AthleteId,
        build: impl FnOnce(ResultId, &Athlete) -> EventResult,
    ) -> Result<EventResult, CoreError> {
        if tournament.event(event_id).is_none() {
            warn!(event_id = %event_id, "Cannot record performance for unknown event");
            return Err(CoreError::EventNotFound(event_id));
        }
        let Some(athlete) = tournament.athlete(athlete_id) else {
            warn!(athlete_id = %athlete_id, "Cannot record performance for unknown athlete");
            return Err(CoreError::AthleteNotFound(athlete_id));
        };

        let result: EventResult = build(ResultId::new(self.next_result_id), athlete);
        let event: &mut Event = tournament
            .event_mut(event_id)
            .ok_or(CoreError::EventNotFound(event_id))?;
        event.add_result(result.clone());
        self.next_result_id += 1;

        info!(
            result_id = %result.id(),
            athlete = result.athlete_name(),
            performance = %result.final_performance(),
            "Performance recorded"
        );
        Ok(result)
    }

    /// Disqualifies a single result.
    ///
    /// The result drops to rank 0 with no medal. If the event was already
    /// finalized, the copy in the athlete's history is updated too; other
    /// results keep their ranks.
    ///
    /// # Returns
    ///
    /// A copy of the disqualified result.
    ///
    /// # Errors
    ///
    /// Returns an error if no event holds a result with this id.
    pub fn disqualify_athlete(
        &self,
        tournament: &mut Tournament,
        result_id: ResultId,
        reason: &str,
    ) -> Result<EventResult, CoreError> {
        let Some(event_id) = tournament.event_for_result(result_id).map(|e| e.id) else {
            warn!(result_id = %result_id, "Cannot disqualify unknown result");
            return Err(CoreError::ResultNotFound(result_id));
        };

        let result: &mut EventResult = tournament
            .event_mut(event_id)
            .and_then(|e| e.result_mut(result_id))
            .ok_or(CoreError::ResultNotFound(result_id))?;
        result.disqualify(reason);
        let updated: EventResult = result.clone();

        if let Some(athlete) = tournament.athlete_mut(updated.athlete_id()) {
            athlete.refresh_result(&updated);
        }

        warn!(
            athlete = updated.athlete_name(),
            country = updated.country_code(),
            reason,
            "Athlete disqualified"
        );
        Ok(updated)
    }

    /// Ranks an event's results, awards medals and completes the event.
    ///
    /// The ranked list replaces the event's results. Each ranked result that
    /// is not disqualified is written into its athlete's history, replacing
    /// any entry left by an earlier finalization of the same result.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The event is not attached to the tournament
    /// - The event's discipline is not in the catalog
    /// - The event has no results
    pub fn finalize_event(
        &self,
        tournament: &mut Tournament,
        event_id: EventId,
    ) -> Result<FinalizedEvent, CoreError> {
        let Some(event) = tournament.event(event_id) else {
            warn!(event_id = %event_id, "Cannot finalize unknown event");
            return Err(CoreError::EventNotFound(event_id));
        };

        let Some((_, discipline)) = tournament.discipline(event.discipline_id) else {
            warn!(
                event_id = %event_id,
                discipline_id = %event.discipline_id,
                "Cannot finalize event with unknown discipline"
            );
            return Err(CoreError::DisciplineNotFound(event.discipline_id));
        };
        let method: ScoringMethod = discipline.scoring_method.clone();

        if event.results().is_empty() {
            warn!(event_id = %event_id, event = %event.name, "No results to finalize");
            return Err(CoreError::NoResultsToFinalize(event_id));
        }

        let event: &mut Event = tournament
            .event_mut(event_id)
            .ok_or(CoreError::EventNotFound(event_id))?;
        info!(event = %event.name, method = %method, "Finalizing event");

        let mut ranked: Vec<EventResult> = rank_results(event.take_results(), &method);
        assign_medals(&mut ranked);
        event.replace_results(ranked.clone());
        event.update_status(EventStatus::Completed);
        let event_name: String = event.name.clone();

        for result in ranked.iter().filter(|r| !r.is_disqualified()) {
            match tournament.athlete_mut(result.athlete_id()) {
                Some(athlete) => athlete.add_result(result.clone()),
                None => warn!(
                    athlete_id = %result.athlete_id(),
                    "Ranked result belongs to an athlete outside every delegation"
                ),
            }
        }

        info!(event = %event_name, results = ranked.len(), "Event finalized");
        Ok(FinalizedEvent {
            event_id,
            event_name,
            results: ranked,
        })
    }

    /// Stores a new status on an event. No transition rules are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not attached to the tournament.
    pub fn update_status(
        &self,
        tournament: &mut Tournament,
        event_id: EventId,
        status: EventStatus,
    ) -> Result<(), CoreError> {
        let Some(event) = tournament.event_mut(event_id) else {
            warn!(event_id = %event_id, "Cannot update status of unknown event");
            return Err(CoreError::EventNotFound(event_id));
        };
        event.update_status(status);
        info!(event = %event.name, status = %status, "Event status updated");
        Ok(())
    }

    /// Moves an event to a new date and time and marks it `Postponed`.
    ///
    /// Venue conflicts are not checked.
    ///
    /// # Errors
    ///
    /// Returns an error if the event is not attached to the tournament.
    pub fn postpone_event(
        &self,
        tournament: &mut Tournament,
        event_id: EventId,
        date: Date,
        time: Time,
    ) -> Result<(), CoreError> {
        let Some(event) = tournament.event_mut(event_id) else {
            warn!(event_id = %event_id, "Cannot postpone unknown event");
            return Err(CoreError::EventNotFound(event_id));
        };
        event.reschedule(date, time);
        info!(event = %event.name, date = %date, time = %time, "Event postponed");
        Ok(())
    }
}

impl Default for CompetitionManager {
    fn default() -> Self {
        Self::new()
    }
}
