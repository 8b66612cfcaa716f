// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ScenarioError;
use crate::scenario::Scenario;

/// The built-in demonstration: Beijing 2026 with a men's downhill, a women's
/// slalom (one time penalty) and a women's figure skating final judged by
/// nine judges.
pub const DEMO_SCENARIO: &str = include_str!("../scenarios/beijing-2026.json");

/// Parses the built-in demonstration scenario.
///
/// # Errors
///
/// Returns an error only if the embedded document is malformed.
pub fn demo_scenario() -> Result<Scenario, ScenarioError> {
    Scenario::from_json(DEMO_SCENARIO)
}
