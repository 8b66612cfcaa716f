// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::athlete::Athlete;
use crate::ids::{DisciplineId, SportId, VenueId};
use crate::scoring::ScoringMethod;
use crate::types::{CompetitionType, Gender};
use crate::validation::validate_athlete_for_discipline;
use serde::{Deserialize, Serialize};

/// Default cap on the number of entrants in a discipline.
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 100;

/// A competitive category within a sport (e.g., men's downhill).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discipline {
    /// Discipline identity.
    pub id: DisciplineId,
    /// Display name.
    pub name: String,
    /// The sport this discipline belongs to.
    pub sport_id: SportId,
    /// Who may enter.
    pub gender: Gender,
    /// Maximum number of entrants.
    pub max_participants: u32,
    /// Whether the discipline runs over several rounds.
    pub has_multiple_rounds: bool,
    /// How results are ordered.
    pub scoring_method: ScoringMethod,
}

impl Discipline {
    /// Creates a single-round, best-time discipline with the default cap.
    #[must_use]
    pub fn new(id: DisciplineId, name: &str, sport_id: SportId, gender: Gender) -> Self {
        Self {
            id,
            name: name.to_string(),
            sport_id,
            gender,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            has_multiple_rounds: false,
            scoring_method: ScoringMethod::BestTime,
        }
    }

    #[must_use]
    pub const fn with_max_participants(mut self, max_participants: u32) -> Self {
        self.max_participants = max_participants;
        self
    }

    #[must_use]
    pub const fn with_multiple_rounds(mut self, has_multiple_rounds: bool) -> Self {
        self.has_multiple_rounds = has_multiple_rounds;
        self
    }

    #[must_use]
    pub fn with_scoring_method(mut self, scoring_method: ScoringMethod) -> Self {
        self.scoring_method = scoring_method;
        self
    }

    /// Returns whether the athlete may enter this discipline.
    #[must_use]
    pub fn accepts(&self, athlete: &Athlete) -> bool {
        validate_athlete_for_discipline(athlete, self).is_ok()
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} (Max participants: {})",
            self.name, self.gender, self.max_participants
        )
    }
}

/// A sport in the tournament catalog and its disciplines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    /// Sport identity.
    pub id: SportId,
    /// Display name (e.g., "Alpine Skiing").
    pub name: String,
    /// Informational competition format.
    pub competition_type: CompetitionType,
    /// Free-text description.
    pub description: String,
    disciplines: Vec<Discipline>,
}

impl Sport {
    #[must_use]
    pub fn new(
        id: SportId,
        name: &str,
        competition_type: CompetitionType,
        description: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            competition_type,
            description: description.to_string(),
            disciplines: Vec::new(),
        }
    }

    /// Adds a discipline. Returns `false` if one with the same id exists.
    pub fn add_discipline(&mut self, discipline: Discipline) -> bool {
        if self.disciplines.iter().any(|d| d.id == discipline.id) {
            return false;
        }
        self.disciplines.push(discipline);
        true
    }

    #[must_use]
    pub fn disciplines(&self) -> &[Discipline] {
        &self.disciplines
    }

    #[must_use]
    pub fn discipline(&self, id: DisciplineId) -> Option<&Discipline> {
        self.disciplines.iter().find(|d| d.id == id)
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) - {} discipline(s)",
            self.name,
            self.competition_type,
            self.disciplines.len()
        )
    }
}

/// Where an event takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue identity.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// City or area.
    pub location: String,
    /// Spectator capacity.
    pub capacity: u32,
    /// Kind of venue (e.g., "Ice Hockey Arena").
    pub venue_type: String,
}

impl Venue {
    #[must_use]
    pub fn new(id: VenueId, name: &str, location: &str, capacity: u32, venue_type: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            location: location.to_string(),
            capacity,
            venue_type: venue_type.to_string(),
        }
    }
}

impl std::fmt::Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {} (Capacity: {})",
            self.name, self.location, self.capacity
        )
    }
}
