// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use podium::{CoreError, CountryMedalCount, current_standings, medals_by_sport};
use podium_cli::{Scenario, ScenarioError, ScenarioRun, demo_scenario, event_report};
use podium_domain::{AthleteId, DomainError, EventStatus, Medal, VenueId};
use std::collections::BTreeMap;
use std::path::PathBuf;

const SMALL_SCENARIO: &str = r#"{
  "tournament": {
    "name": "Test Games",
    "host_city": "Oslo",
    "host_country": "Norway",
    "start_date": "2027-01-10",
    "end_date": "2027-01-20"
  },
  "sports": [
    {
      "id": 1,
      "name": "Alpine Skiing",
      "competition_type": "timed",
      "disciplines": [
        { "id": 1, "name": "Giant Slalom", "gender": "Mixed" }
      ]
    }
  ],
  "venues": [
    { "id": 1, "name": "Hafjell", "location": "Oyer", "capacity": 8000 }
  ],
  "teams": [
    {
      "id": 1, "country_name": "Norway", "country_code": "nor",
      "athletes": [
        { "id": 1, "first_name": "Henrik", "last_name": "Kristoffersen", "age": 30, "gender": "M", "bib_number": 7, "sports": [1] },
        { "id": 2, "first_name": "Ragnhild", "last_name": "Mowinckel", "age": 32, "gender": "F", "bib_number": 8, "sports": [1] }
      ]
    },
    {
      "id": 2, "country_name": "Austria", "country_code": "AUT",
      "athletes": [
        { "id": 3, "first_name": "Marco", "last_name": "Schwarz", "age": 29, "gender": "Male", "bib_number": 9, "sports": [1] }
      ]
    }
  ],
  "events": [
    {
      "name": "Giant Slalom - Final",
      "discipline_id": 1,
      "venue_id": 1,
      "date": "2027-01-12",
      "time": "09:30",
      "performances": [
        { "athlete_id": 1, "time_seconds": 121.4 },
        { "athlete_id": 2, "time_seconds": 120.9 },
        { "athlete_id": 3, "time_seconds": 122.0, "penalty": 1.5 }
      ],
      "disqualifications": [
        { "athlete_id": 2, "reason": "Straddled gate" }
      ]
    },
    {
      "name": "Giant Slalom - Rerun",
      "discipline_id": 1,
      "venue_id": 1,
      "date": "2027-01-13",
      "time": "09:30",
      "postponed_to": { "date": "2027-01-15", "time": "11:00" }
    },
    {
      "name": "Giant Slalom - Exhibition",
      "discipline_id": 1,
      "venue_id": 1,
      "date": "2027-01-14",
      "time": "12:00",
      "status": "Cancelled"
    }
  ]
}"#;

fn run_json(json: &str) -> Result<ScenarioRun, ScenarioError> {
    Scenario::from_json(json)?.run()
}

// ============================================================================
// Built-in demonstration
// ============================================================================

#[test]
fn test_demo_finalizes_every_event() {
    let run: ScenarioRun = demo_scenario().unwrap().run().unwrap();

    assert_eq!(run.finalized.len(), 3);
    assert!(
        run.state
            .tournament
            .events()
            .iter()
            .all(|e| e.status() == EventStatus::Completed)
    );
}

#[test]
fn test_demo_downhill_podium() {
    let run: ScenarioRun = demo_scenario().unwrap().run().unwrap();
    let downhill = &run.finalized[0];

    assert_eq!(downhill.results[0].athlete_name(), "Aksel Svindal");
    assert_eq!(downhill.results[0].medal(), Medal::Gold);
    assert_eq!(downhill.results[1].athlete_name(), "Alexis Pinturault");
    assert_eq!(downhill.results[1].medal(), Medal::Silver);
}

#[test]
fn test_demo_slalom_penalty_drops_goggia_to_bronze() {
    let run: ScenarioRun = demo_scenario().unwrap().run().unwrap();
    let slalom = &run.finalized[1];

    let names: Vec<&str> = slalom.results.iter().map(|r| r.athlete_name()).collect();
    assert_eq!(names, vec!["Mikaela Shiffrin", "Lara Gut-Behrami", "Sofia Goggia"]);
    assert_eq!(slalom.results[2].medal(), Medal::Bronze);
}

#[test]
fn test_demo_figure_skating_uses_trimmed_judges() {
    let run: ScenarioRun = demo_scenario().unwrap().run().unwrap();
    let skating = &run.finalized[2];

    let score: f64 = skating.results[0].score().unwrap();
    assert!((score - 9.6714).abs() < 1e-4);
    assert_eq!(skating.results[0].medal(), Medal::Gold);
}

#[test]
fn test_demo_medal_table() {
    let mut run: ScenarioRun = demo_scenario().unwrap().run().unwrap();

    let ranking: Vec<CountryMedalCount> = current_standings(&mut run.state.tournament).ranking();
    let codes: Vec<&str> = ranking.iter().map(|r| r.country_code.as_str()).collect();

    assert_eq!(codes, vec!["NOR", "RUS", "USA", "FRA", "SUI", "ITA", "JPN"]);
    assert_eq!(ranking.iter().map(CountryMedalCount::total).sum::<u32>(), 6);

    let usa: BTreeMap<String, u32> = medals_by_sport(&run.state.tournament, "USA");
    assert_eq!(usa.get("Alpine Skiing"), Some(&1));
    assert_eq!(usa.len(), 1);
}

// ============================================================================
// Scenario files
// ============================================================================

#[test]
fn test_scenario_disqualification_postponement_and_cancellation() {
    let mut run: ScenarioRun = run_json(SMALL_SCENARIO).unwrap();

    assert_eq!(run.finalized.len(), 1);
    let final_results = &run.finalized[0].results;
    assert_eq!(final_results[0].athlete_name(), "Henrik Kristoffersen");
    assert_eq!(final_results[1].athlete_name(), "Marco Schwarz");
    assert!(final_results[2].is_disqualified());
    assert_eq!(final_results[2].medal(), Medal::None);

    let statuses: Vec<EventStatus> = run
        .state
        .tournament
        .events()
        .iter()
        .map(|e| e.status())
        .collect();
    assert_eq!(
        statuses,
        vec![
            EventStatus::Completed,
            EventStatus::Postponed,
            EventStatus::Cancelled
        ]
    );

    let standings = current_standings(&mut run.state.tournament);
    assert_eq!(standings.country("NOR").unwrap().gold, 1);
    assert_eq!(standings.country("AUT").unwrap().silver, 1);
    assert_eq!(standings.total_medals_distributed(), 2);
}

#[test]
fn test_event_report_lists_disqualifications() {
    let run: ScenarioRun = run_json(SMALL_SCENARIO).unwrap();

    let report: String = event_report(&run.state.tournament.events()[0]);

    assert!(report.contains("1. Henrik Kristoffersen (NOR) - 02:01.40 [Gold]"));
    assert!(report.contains("DSQ - Ragnhild Mowinckel (NOR): Straddled gate"));
}

#[test]
fn test_scenario_load_from_file() {
    let path: PathBuf =
        std::env::temp_dir().join(format!("podium-scenario-{}.json", std::process::id()));
    std::fs::write(&path, SMALL_SCENARIO).unwrap();

    let scenario: Scenario = Scenario::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(scenario.tournament.name, "Test Games");
    assert_eq!(scenario.events.len(), 3);
}

#[test]
fn test_scenario_missing_file() {
    let result: Result<Scenario, ScenarioError> =
        Scenario::load(&PathBuf::from("/nonexistent/podium/scenario.json"));

    assert!(matches!(result, Err(ScenarioError::Io(_))));
}

#[test]
fn test_scenario_rejects_unknown_venue() {
    let json: String = SMALL_SCENARIO.replacen("\"venue_id\": 1", "\"venue_id\": 9", 1);

    let result: Result<ScenarioRun, ScenarioError> = run_json(&json);

    assert!(matches!(
        result,
        Err(ScenarioError::UnknownVenue { venue_id, .. }) if venue_id == VenueId::new(9)
    ));
}

#[test]
fn test_scenario_rejects_ineligible_athlete() {
    let json: String = SMALL_SCENARIO.replace("\"gender\": \"Mixed\"", "\"gender\": \"Male\"");

    let result: Result<ScenarioRun, ScenarioError> = run_json(&json);

    assert!(matches!(
        result,
        Err(ScenarioError::Domain(DomainError::GenderMismatch { .. }))
    ));
}

#[test]
fn test_scenario_rejects_unknown_athlete() {
    let json: String = SMALL_SCENARIO.replace(
        "{ \"athlete_id\": 3, \"time_seconds\"",
        "{ \"athlete_id\": 30, \"time_seconds\"",
    );

    let result: Result<ScenarioRun, ScenarioError> = run_json(&json);

    assert!(matches!(
        result,
        Err(ScenarioError::Core(CoreError::AthleteNotFound(id))) if id == AthleteId::new(30)
    ));
}

#[test]
fn test_scenario_rejects_malformed_date() {
    let json: String = SMALL_SCENARIO.replace("2027-01-10", "10/01/2027");

    let result: Result<ScenarioRun, ScenarioError> = run_json(&json);

    assert!(matches!(
        result,
        Err(ScenarioError::InvalidTimestamp { field: "start_date", .. })
    ));
}

#[test]
fn test_scenario_rejects_malformed_country_code() {
    let json: String = SMALL_SCENARIO.replace("\"AUT\"", "\"AU\"");

    let result: Result<ScenarioRun, ScenarioError> = run_json(&json);

    assert!(matches!(
        result,
        Err(ScenarioError::Core(CoreError::DomainViolation(
            DomainError::InvalidCountryCode(_)
        )))
    ));
}

#[test]
fn test_scenario_rejects_invalid_json() {
    assert!(matches!(
        Scenario::from_json("{ \"tournament\": 3 }"),
        Err(ScenarioError::Json(_))
    ));
}
