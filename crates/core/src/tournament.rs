// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use podium_domain::{
    Athlete, AthleteId, Discipline, DisciplineId, Event, EventId, NationalTeam, ResultId, Sport,
    SportId, validate_country_code,
};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::warn;

/// A multi-sport tournament: the catalog of sports, the competing
/// delegations, and every scheduled event.
///
/// The tournament owns all entities. Lifecycle and standings operations take
/// it explicitly and address entities by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    /// Tournament identity.
    pub id: u32,
    /// Display name (e.g., "Beijing 2026").
    pub name: String,
    /// Host city.
    pub host_city: String,
    /// Host country.
    pub host_country: String,
    /// Opening day.
    pub start_date: Date,
    /// Closing day.
    pub end_date: Date,
    /// Optional motto, empty when none.
    pub motto: String,
    sports: Vec<Sport>,
    teams: Vec<NationalTeam>,
    events: Vec<Event>,
}

impl Tournament {
    /// Creates an empty tournament.
    ///
    /// # Arguments
    ///
    /// * `id` - The tournament identity
    /// * `name` - Display name
    /// * `host_city` - Host city
    /// * `host_country` - Host country
    /// * `start_date` - Opening day
    /// * `end_date` - Closing day
    #[must_use]
    pub fn new(
        id: u32,
        name: &str,
        host_city: &str,
        host_country: &str,
        start_date: Date,
        end_date: Date,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            host_city: host_city.to_string(),
            host_country: host_country.to_string(),
            start_date,
            end_date,
            motto: String::new(),
            sports: Vec::new(),
            teams: Vec::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_motto(mut self, motto: &str) -> Self {
        self.motto = motto.to_string();
        self
    }

    /// Adds a sport to the catalog. Returns `false` if a sport with the same
    /// id is already present.
    pub fn add_sport(&mut self, sport: Sport) -> bool {
        if self.sports.iter().any(|s| s.id == sport.id) {
            return false;
        }
        self.sports.push(sport);
        true
    }

    #[must_use]
    pub fn sports(&self) -> &[Sport] {
        &self.sports
    }

    #[must_use]
    pub fn sport(&self, id: SportId) -> Option<&Sport> {
        self.sports.iter().find(|s| s.id == id)
    }

    /// Adds a delegation.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the team was added
    /// * `Ok(false)` if a team with the same id is already present
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The team's country code is not three ASCII letters
    /// - Another delegation already uses the country code
    /// - One of the team's athletes already belongs to another delegation
    pub fn add_team(&mut self, team: NationalTeam) -> Result<bool, CoreError> {
        validate_country_code(&team.country_code)?;
        if self.teams.iter().any(|t| t.id == team.id) {
            return Ok(false);
        }

        if self.team(&team.country_code).is_some() {
            warn!(
                team_id = %team.id,
                country = %team.country_code,
                "Country code already taken"
            );
            return Err(CoreError::DuplicateCountryCode(team.country_code));
        }

        if let Some(clash) = team
            .athletes()
            .iter()
            .find(|a| self.athlete(a.id).is_some())
        {
            warn!(
                team_id = %team.id,
                athlete_id = %clash.id,
                "Athlete already belongs to another delegation"
            );
            return Err(CoreError::DuplicateAthleteId(clash.id));
        }

        self.teams.push(team);
        Ok(true)
    }

    #[must_use]
    pub fn teams(&self) -> &[NationalTeam] {
        &self.teams
    }

    pub fn teams_mut(&mut self) -> &mut [NationalTeam] {
        &mut self.teams
    }

    /// Looks a delegation up by country code, ignoring case.
    #[must_use]
    pub fn team(&self, country_code: &str) -> Option<&NationalTeam> {
        self.teams
            .iter()
            .find(|t| t.country_code.eq_ignore_ascii_case(country_code))
    }

    pub fn team_mut(&mut self, country_code: &str) -> Option<&mut NationalTeam> {
        self.teams
            .iter_mut()
            .find(|t| t.country_code.eq_ignore_ascii_case(country_code))
    }

    /// Attaches a scheduled event. Returns `false` if an event with the same
    /// id is already attached.
    pub fn add_event(&mut self, event: Event) -> bool {
        if self.events.iter().any(|e| e.id == event.id) {
            return false;
        }
        self.events.push(event);
        true
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn event_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }

    /// Finds the event holding a result.
    #[must_use]
    pub fn event_for_result(&self, result_id: ResultId) -> Option<&Event> {
        self.events
            .iter()
            .find(|e| e.result(result_id).is_some())
    }

    /// Returns every event scheduled on `date`, in scheduling order.
    #[must_use]
    pub fn events_on(&self, date: Date) -> Vec<&Event> {
        self.events.iter().filter(|e| e.date == date).collect()
    }

    /// Finds an athlete across all delegations.
    #[must_use]
    pub fn athlete(&self, id: AthleteId) -> Option<&Athlete> {
        self.teams.iter().find_map(|t| t.athlete(id))
    }

    pub fn athlete_mut(&mut self, id: AthleteId) -> Option<&mut Athlete> {
        self.teams.iter_mut().find_map(|t| t.athlete_mut(id))
    }

    /// Finds an athlete by name, ignoring case.
    #[must_use]
    pub fn find_athlete(&self, first_name: &str, last_name: &str) -> Option<&Athlete> {
        self.teams.iter().flat_map(NationalTeam::athletes).find(|a| {
            a.first_name.eq_ignore_ascii_case(first_name)
                && a.last_name.eq_ignore_ascii_case(last_name)
        })
    }

    /// Resolves a discipline and the sport that owns it.
    #[must_use]
    pub fn discipline(&self, id: DisciplineId) -> Option<(&Sport, &Discipline)> {
        self.sports
            .iter()
            .find_map(|s| s.discipline(id).map(|d| (s, d)))
    }

    /// Total athletes across every delegation.
    #[must_use]
    pub fn athlete_count(&self) -> usize {
        self.teams.iter().map(NationalTeam::athlete_count).sum()
    }
}

impl std::fmt::Display for Tournament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}, {} ({} to {})",
            self.name, self.host_city, self.host_country, self.start_date, self.end_date
        )
    }
}
