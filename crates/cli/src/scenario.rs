// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON scenario files.
//!
//! A scenario declares a tournament (sports, venues, delegations) and the
//! events to run with their performances. Running it drives every event
//! through the competition lifecycle and leaves the finished tournament in
//! an [`AppState`].

use crate::error::ScenarioError;
use crate::state::AppState;
use podium::{CoreError, FinalizedEvent, Tournament};
use podium_domain::{
    Athlete, AthleteId, CompetitionType, DEFAULT_MAX_PARTICIPANTS, DEFAULT_PHASE, Discipline,
    DisciplineId, EventDraft, EventId, EventResult, EventStatus, Gender, NationalTeam, ResultId,
    ScoringMethod, Sport, SportId, TeamId, Venue, VenueId, validate_athlete_for_discipline,
    validate_performance,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use time::macros::format_description;
use time::{Date, Time};
use tracing::{debug, info, warn};

/// A complete tournament scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub tournament: TournamentSpec,
    #[serde(default)]
    pub sports: Vec<SportSpec>,
    #[serde(default)]
    pub venues: Vec<VenueSpec>,
    #[serde(default)]
    pub teams: Vec<TeamSpec>,
    #[serde(default)]
    pub events: Vec<EventSpec>,
}

/// Tournament header. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSpec {
    pub name: String,
    pub host_city: String,
    pub host_country: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub motto: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportSpec {
    pub id: SportId,
    pub name: String,
    /// One of `Timed`, `Scored`, `HeadToHead`, `Elimination`, `Mixed`.
    pub competition_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub disciplines: Vec<DisciplineSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisciplineSpec {
    pub id: DisciplineId,
    pub name: String,
    /// One of `Male`, `Female`, `Mixed`.
    pub gender: String,
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
    #[serde(default)]
    pub multiple_rounds: bool,
    #[serde(default = "default_scoring_method")]
    pub scoring_method: ScoringMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSpec {
    pub id: VenueId,
    pub name: String,
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub venue_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSpec {
    pub id: TeamId,
    pub country_name: String,
    pub country_code: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub athletes: Vec<AthleteSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteSpec {
    pub id: AthleteId,
    pub first_name: String,
    pub last_name: String,
    pub age: u8,
    pub gender: String,
    pub bib_number: u32,
    /// Sports the athlete is entered in.
    #[serde(default)]
    pub sports: Vec<SportId>,
}

/// One event to schedule and, when it has performances, run to completion.
///
/// Date is `YYYY-MM-DD`, time is `HH:MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSpec {
    pub name: String,
    pub discipline_id: DisciplineId,
    pub venue_id: VenueId,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub round: Option<u32>,
    #[serde(default)]
    pub performances: Vec<PerformanceSpec>,
    #[serde(default)]
    pub disqualifications: Vec<DisqualificationSpec>,
    /// Moves the event to a new slot; a postponed event is not finalized.
    #[serde(default)]
    pub postponed_to: Option<SlotSpec>,
    /// Explicit status to store instead of finalizing (e.g. `Cancelled`).
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSpec {
    pub date: String,
    pub time: String,
}

/// A recorded performance. Timed entries carry `time_seconds`, judged
/// entries carry `judge_scores`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerformanceSpec {
    Timed {
        athlete_id: AthleteId,
        time_seconds: f64,
        #[serde(default)]
        penalty: f64,
    },
    Scored {
        athlete_id: AthleteId,
        judge_scores: Vec<f64>,
        #[serde(default)]
        penalty: f64,
    },
}

impl PerformanceSpec {
    #[must_use]
    pub const fn athlete_id(&self) -> AthleteId {
        match self {
            Self::Timed { athlete_id, .. } | Self::Scored { athlete_id, .. } => *athlete_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisqualificationSpec {
    pub athlete_id: AthleteId,
    pub reason: String,
}

/// The outcome of running a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    /// The finished tournament and its competition manager.
    pub state: AppState,
    /// Every event that was finalized, in scenario order.
    pub finalized: Vec<FinalizedEvent>,
}

const fn default_max_participants() -> u32 {
    DEFAULT_MAX_PARTICIPANTS
}

const fn default_scoring_method() -> ScoringMethod {
    ScoringMethod::BestTime
}

fn parse_date(field: &'static str, value: &str) -> Result<Date, ScenarioError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|source| {
        ScenarioError::InvalidTimestamp {
            field,
            value: value.to_string(),
            source,
        }
    })
}

fn parse_time(field: &'static str, value: &str) -> Result<Time, ScenarioError> {
    Time::parse(value, format_description!("[hour]:[minute]")).map_err(|source| {
        ScenarioError::InvalidTimestamp {
            field,
            value: value.to_string(),
            source,
        }
    })
}

impl Scenario {
    /// Parses a scenario from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid scenario document.
    pub fn from_json(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let text: String = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Builds the tournament catalog and delegations, without any events.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A date, gender or competition type is malformed
    /// - A country code is not three ASCII letters
    pub fn build_tournament(&self) -> Result<Tournament, ScenarioError> {
        let header: &TournamentSpec = &self.tournament;
        let mut tournament: Tournament = Tournament::new(
            1,
            &header.name,
            &header.host_city,
            &header.host_country,
            parse_date("start_date", &header.start_date)?,
            parse_date("end_date", &header.end_date)?,
        )
        .with_motto(&header.motto);

        for spec in &self.sports {
            let sport: Sport = build_sport(spec)?;
            if !tournament.add_sport(sport) {
                warn!(sport_id = %spec.id, "Duplicate sport id ignored");
            }
        }

        for spec in &self.teams {
            let team: NationalTeam = build_team(spec)?;
            if !tournament.add_team(team)? {
                warn!(team_id = %spec.id, "Duplicate team id ignored");
            }
        }

        info!(
            tournament = %tournament.name,
            sports = tournament.sports().len(),
            teams = tournament.teams().len(),
            athletes = tournament.athlete_count(),
            "Tournament built"
        );
        Ok(tournament)
    }

    /// Builds the tournament and runs every event in order.
    ///
    /// Events with performances are finalized unless they are postponed or
    /// carry an explicit status. Events without performances stay scheduled.
    ///
    /// # Errors
    ///
    /// Returns an error if the tournament cannot be built, or an event
    /// references an unknown venue, discipline or athlete, or an athlete is
    /// not eligible for the event's discipline.
    pub fn run(&self) -> Result<ScenarioRun, ScenarioError> {
        let mut state: AppState = AppState::new(self.build_tournament()?);
        let mut finalized: Vec<FinalizedEvent> = Vec::new();

        for spec in &self.events {
            if let Some(summary) = self.run_event(&mut state, spec)? {
                finalized.push(summary);
            }
        }

        Ok(ScenarioRun { state, finalized })
    }

    fn venue(&self, spec: &EventSpec) -> Result<Venue, ScenarioError> {
        self.venues
            .iter()
            .find(|v| v.id == spec.venue_id)
            .map(|v| Venue::new(v.id, &v.name, &v.location, v.capacity, &v.venue_type))
            .ok_or_else(|| ScenarioError::UnknownVenue {
                event: spec.name.clone(),
                venue_id: spec.venue_id,
            })
    }

    fn run_event(
        &self,
        state: &mut AppState,
        spec: &EventSpec,
    ) -> Result<Option<FinalizedEvent>, ScenarioError> {
        let mut draft: EventDraft = EventDraft::new(
            &spec.name,
            spec.discipline_id,
            parse_date("date", &spec.date)?,
            parse_time("time", &spec.time)?,
            self.venue(spec)?,
        );
        if spec.phase.is_some() || spec.round.is_some() {
            let phase: &str = spec.phase.as_deref().unwrap_or(DEFAULT_PHASE);
            draft = draft.with_phase(phase, spec.round.unwrap_or(1));
        }

        let event_id: EventId = state
            .competitions
            .schedule_event(&mut state.tournament, draft);

        let discipline: Discipline = state
            .tournament
            .discipline(spec.discipline_id)
            .map(|(_, d)| d.clone())
            .ok_or(CoreError::DisciplineNotFound(spec.discipline_id))?;

        let mut recorded: Vec<(AthleteId, ResultId)> = Vec::new();
        for performance in &spec.performances {
            let result: EventResult =
                record_performance(state, event_id, &discipline, spec, performance)?;
            recorded.push((result.athlete_id(), result.id()));
        }

        for dsq in &spec.disqualifications {
            let result_id: ResultId = recorded
                .iter()
                .rev()
                .find(|(athlete_id, _)| *athlete_id == dsq.athlete_id)
                .map(|(_, result_id)| *result_id)
                .ok_or_else(|| ScenarioError::NoPerformanceToDisqualify {
                    event: spec.name.clone(),
                    athlete_id: dsq.athlete_id,
                })?;
            state
                .competitions
                .disqualify_athlete(&mut state.tournament, result_id, &dsq.reason)?;
        }

        if let Some(slot) = &spec.postponed_to {
            state.competitions.postpone_event(
                &mut state.tournament,
                event_id,
                parse_date("postponed_to.date", &slot.date)?,
                parse_time("postponed_to.time", &slot.time)?,
            )?;
            return Ok(None);
        }

        if let Some(status) = &spec.status {
            let status: EventStatus = status.parse()?;
            state
                .competitions
                .update_status(&mut state.tournament, event_id, status)?;
            return Ok(None);
        }

        if recorded.is_empty() {
            debug!(event = %spec.name, "No performances; event stays scheduled");
            return Ok(None);
        }

        let summary: FinalizedEvent = state
            .competitions
            .finalize_event(&mut state.tournament, event_id)?;
        Ok(Some(summary))
    }
}

fn record_performance(
    state: &mut AppState,
    event_id: EventId,
    discipline: &Discipline,
    spec: &EventSpec,
    performance: &PerformanceSpec,
) -> Result<EventResult, ScenarioError> {
    let athlete_id: AthleteId = performance.athlete_id();
    let athlete: &Athlete = state
        .tournament
        .athlete(athlete_id)
        .ok_or(CoreError::AthleteNotFound(athlete_id))?;
    validate_athlete_for_discipline(athlete, discipline)?;

    state
        .competitions
        .register_participant(&mut state.tournament, event_id, athlete_id)?;

    let result: EventResult = match performance {
        PerformanceSpec::Timed {
            time_seconds,
            penalty,
            ..
        } => {
            let time: Duration = Duration::try_from_secs_f64(*time_seconds).map_err(|_| {
                ScenarioError::InvalidElapsedTime {
                    event: spec.name.clone(),
                    seconds: *time_seconds,
                }
            })?;
            state.competitions.record_timed_performance(
                &mut state.tournament,
                event_id,
                athlete_id,
                time,
                *penalty,
            )?
        }
        PerformanceSpec::Scored {
            judge_scores,
            penalty,
            ..
        } => state.competitions.record_scored_performance(
            &mut state.tournament,
            event_id,
            athlete_id,
            judge_scores,
            *penalty,
        )?,
    };

    if !validate_performance(&result, &discipline.scoring_method) {
        warn!(
            event = %spec.name,
            athlete = result.athlete_name(),
            method = %discipline.scoring_method,
            "Performance does not fit the discipline's scoring method"
        );
    }
    Ok(result)
}

fn build_sport(spec: &SportSpec) -> Result<Sport, ScenarioError> {
    let competition_type: CompetitionType = spec.competition_type.parse()?;
    let mut sport: Sport = Sport::new(spec.id, &spec.name, competition_type, &spec.description);

    for discipline in &spec.disciplines {
        let gender: Gender = discipline.gender.parse()?;
        let added: bool = sport.add_discipline(
            Discipline::new(discipline.id, &discipline.name, spec.id, gender)
                .with_max_participants(discipline.max_participants)
                .with_multiple_rounds(discipline.multiple_rounds)
                .with_scoring_method(discipline.scoring_method.clone()),
        );
        if !added {
            warn!(discipline_id = %discipline.id, "Duplicate discipline id ignored");
        }
    }
    Ok(sport)
}

fn build_team(spec: &TeamSpec) -> Result<NationalTeam, ScenarioError> {
    let mut team: NationalTeam =
        NationalTeam::new(spec.id, &spec.country_name, &spec.country_code, &spec.flag);

    for athlete_spec in &spec.athletes {
        let mut athlete: Athlete = Athlete::new(
            athlete_spec.id,
            &athlete_spec.first_name,
            &athlete_spec.last_name,
            athlete_spec.age,
            &spec.country_name,
            &spec.country_code,
            athlete_spec.gender.parse()?,
            athlete_spec.bib_number,
        );
        for &sport_id in &athlete_spec.sports {
            athlete.add_sport(sport_id);
        }
        if !team.add_athlete(athlete) {
            warn!(athlete_id = %athlete_spec.id, "Duplicate athlete id ignored");
        }
    }
    Ok(team)
}
