// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use podium::{CompetitionManager, Tournament};

/// Everything a run of the tool works on: the tournament and the manager
/// issuing its event and result identities.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The tournament being run.
    pub tournament: Tournament,
    /// Lifecycle manager for the tournament's events.
    pub competitions: CompetitionManager,
}

impl AppState {
    /// Wraps a tournament with a fresh competition manager.
    #[must_use]
    pub const fn new(tournament: Tournament) -> Self {
        Self {
            tournament,
            competitions: CompetitionManager::new(),
        }
    }
}
