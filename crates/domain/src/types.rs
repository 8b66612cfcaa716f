// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gender category of an athlete or a discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Men's competition.
    Male,
    /// Women's competition.
    Female,
    /// Mixed competition (open to every athlete).
    Mixed,
}

impl Gender {
    /// Converts this gender to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Mixed => "Mixed",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "mixed" | "x" => Ok(Self::Mixed),
            _ => Err(DomainError::UnknownGender(s.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a sport is contested.
///
/// Informational only: ranking is driven by the discipline's scoring method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionType {
    /// Against the clock (alpine skiing, speed skating).
    Timed,
    /// Judged or points based (figure skating, ski jumping).
    Scored,
    /// Two sides facing each other (ice hockey, curling).
    HeadToHead,
    /// Knock-out heats (snowboard cross).
    Elimination,
    /// A combination of formats.
    Mixed,
}

impl CompetitionType {
    /// Converts this competition type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timed => "Timed",
            Self::Scored => "Scored",
            Self::HeadToHead => "HeadToHead",
            Self::Elimination => "Elimination",
            Self::Mixed => "Mixed",
        }
    }
}

impl FromStr for CompetitionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "timed" => Ok(Self::Timed),
            "scored" => Ok(Self::Scored),
            "headtohead" => Ok(Self::HeadToHead),
            "elimination" => Ok(Self::Elimination),
            "mixed" => Ok(Self::Mixed),
            _ => Err(DomainError::UnknownCompetitionType(s.to_string())),
        }
    }
}

impl std::fmt::Display for CompetitionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents the lifecycle state of an event.
///
/// Events start `Scheduled`. Finalization moves them to `Completed` and
/// rescheduling moves them to `Postponed`. `InProgress` and `Cancelled` are
/// stored when a collaborator sets them, with no further rules attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EventStatus {
    /// Planned, not started.
    #[default]
    Scheduled,
    /// Currently running.
    InProgress,
    /// Finished with final rankings.
    Completed,
    /// Called off.
    Cancelled,
    /// Moved to a later date.
    Postponed,
}

impl EventStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Postponed => "Postponed",
        }
    }
}

impl FromStr for EventStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Scheduled" => Ok(Self::Scheduled),
            "InProgress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            "Postponed" => Ok(Self::Postponed),
            _ => Err(DomainError::UnknownEventStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Medal awarded for a ranked result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Medal {
    /// No medal.
    #[default]
    None,
    /// Third place.
    Bronze,
    /// Second place.
    Silver,
    /// First place.
    Gold,
}

impl Medal {
    /// Returns the medal that goes with a final rank.
    ///
    /// Ranks 1 to 3 earn gold, silver and bronze; every other rank
    /// (including the unranked 0) earns nothing.
    #[must_use]
    pub const fn for_rank(rank: u32) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            _ => Self::None,
        }
    }

    /// Returns whether this is an actual medal.
    #[must_use]
    pub const fn is_medal(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Converts this medal to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
        }
    }
}

impl FromStr for Medal {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "bronze" => Ok(Self::Bronze),
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            _ => Err(DomainError::UnknownMedal(s.to_string())),
        }
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gold, silver and bronze tallies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MedalCount {
    /// Number of gold medals.
    pub gold: u32,
    /// Number of silver medals.
    pub silver: u32,
    /// Number of bronze medals.
    pub bronze: u32,
}

impl MedalCount {
    /// Creates a tally from explicit counts.
    #[must_use]
    pub const fn new(gold: u32, silver: u32, bronze: u32) -> Self {
        Self {
            gold,
            silver,
            bronze,
        }
    }

    /// Adds one medal to the tally. `Medal::None` is ignored.
    pub const fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
            Medal::None => {}
        }
    }

    /// Returns the count for a single medal type.
    #[must_use]
    pub const fn get(&self, medal: Medal) -> u32 {
        match medal {
            Medal::Gold => self.gold,
            Medal::Silver => self.silver,
            Medal::Bronze => self.bronze,
            Medal::None => 0,
        }
    }

    /// Returns the total number of medals.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

impl std::ops::AddAssign for MedalCount {
    fn add_assign(&mut self, rhs: Self) {
        self.gold += rhs.gold;
        self.silver += rhs.silver;
        self.bronze += rhs.bronze;
    }
}
