// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Athlete, AthleteId, EventId, EventResult, Gender, ResultId, SportId};
use std::time::Duration;

pub const ALPINE: SportId = SportId::new(1);

pub fn create_test_athlete(id: u32, last_name: &str, country_code: &str) -> Athlete {
    let mut athlete: Athlete = Athlete::new(
        AthleteId::new(id),
        "Test",
        last_name,
        28,
        "Testland",
        country_code,
        Gender::Male,
        id,
    );
    athlete.add_sport(ALPINE);
    athlete
}

pub fn timed_result(id: u32, athlete: &Athlete, seconds: f64, penalty: f64) -> EventResult {
    EventResult::timed(
        ResultId::new(id),
        EventId::new(1),
        athlete,
        Duration::from_secs_f64(seconds),
        penalty,
    )
}

pub fn scored_result(id: u32, athlete: &Athlete, score: f64, penalty: f64) -> EventResult {
    EventResult::scored(ResultId::new(id), EventId::new(1), athlete, score, penalty)
}

/// Three athletes from three countries, ids 1..=3.
pub fn create_test_field() -> Vec<Athlete> {
    vec![
        create_test_athlete(1, "Pinturault", "FRA"),
        create_test_athlete(2, "Svindal", "NOR"),
        create_test_athlete(3, "Odermatt", "SUI"),
    ]
}
