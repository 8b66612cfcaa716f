// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Strongly typed identifiers for every entity in the model.
//!
//! Identities are assigned by whoever creates the entity (the catalog
//! collaborators for sports and teams, the competition manager for events
//! and results). They are plain numbers on the wire.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw identifier value.
            #[must_use]
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw identifier value.
            #[must_use]
            pub const fn value(&self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifies an athlete across the whole tournament.
    AthleteId
);
entity_id!(
    /// Identifies a national team.
    TeamId
);
entity_id!(
    /// Identifies a sport in the catalog.
    SportId
);
entity_id!(
    /// Identifies a discipline within a sport.
    DisciplineId
);
entity_id!(
    /// Identifies a scheduled competition event.
    EventId
);
entity_id!(
    /// Identifies a single recorded performance.
    ResultId
);
entity_id!(
    /// Identifies a competition venue.
    VenueId
);
