// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CompetitionType, DomainError, EventStatus, Gender, Medal, MedalCount, ScoringMethod,
};
use std::str::FromStr;

#[test]
fn test_medal_for_rank() {
    assert_eq!(Medal::for_rank(1), Medal::Gold);
    assert_eq!(Medal::for_rank(2), Medal::Silver);
    assert_eq!(Medal::for_rank(3), Medal::Bronze);
    assert_eq!(Medal::for_rank(4), Medal::None);
    assert_eq!(Medal::for_rank(0), Medal::None);
}

#[test]
fn test_medal_default_is_none() {
    assert_eq!(Medal::default(), Medal::None);
    assert!(!Medal::None.is_medal());
    assert!(Medal::Bronze.is_medal());
}

#[test]
fn test_medal_count_add_and_total() {
    let mut count: MedalCount = MedalCount::default();
    count.add(Medal::Gold);
    count.add(Medal::Gold);
    count.add(Medal::Bronze);
    count.add(Medal::None);

    assert_eq!(count, MedalCount::new(2, 0, 1));
    assert_eq!(count.total(), 3);
    assert_eq!(count.get(Medal::Gold), 2);
    assert_eq!(count.get(Medal::None), 0);
}

#[test]
fn test_medal_count_add_assign() {
    let mut count: MedalCount = MedalCount::new(1, 2, 3);
    count += MedalCount::new(1, 0, 1);
    assert_eq!(count, MedalCount::new(2, 2, 4));
}

#[test]
fn test_gender_parse_is_case_insensitive() {
    assert_eq!(Gender::from_str("male").unwrap(), Gender::Male);
    assert_eq!(Gender::from_str("FEMALE").unwrap(), Gender::Female);
    assert_eq!(Gender::from_str("Mixed").unwrap(), Gender::Mixed);
    assert!(matches!(
        Gender::from_str("unknown"),
        Err(DomainError::UnknownGender(_))
    ));
}

#[test]
fn test_competition_type_round_trip() {
    for kind in [
        CompetitionType::Timed,
        CompetitionType::Scored,
        CompetitionType::HeadToHead,
        CompetitionType::Elimination,
        CompetitionType::Mixed,
    ] {
        assert_eq!(CompetitionType::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn test_event_status_default_and_parse() {
    assert_eq!(EventStatus::default(), EventStatus::Scheduled);
    assert_eq!(
        EventStatus::from_str("Postponed").unwrap(),
        EventStatus::Postponed
    );
    assert!(matches!(
        EventStatus::from_str("Finished"),
        Err(DomainError::UnknownEventStatus(_))
    ));
}

#[test]
fn test_scoring_method_parse_is_case_insensitive() {
    assert_eq!(
        "besttime".parse::<ScoringMethod>().unwrap(),
        ScoringMethod::BestTime
    );
    assert_eq!(
        "FASTESTTIME".parse::<ScoringMethod>().unwrap(),
        ScoringMethod::FastestTime
    );
    assert_eq!(
        "TotalScore".parse::<ScoringMethod>().unwrap(),
        ScoringMethod::TotalScore
    );
    assert_eq!(
        "highestScore".parse::<ScoringMethod>().unwrap(),
        ScoringMethod::HighestScore
    );
    assert_eq!(
        "averagescore".parse::<ScoringMethod>().unwrap(),
        ScoringMethod::AverageScore
    );
}

#[test]
fn test_scoring_method_keeps_unrecognized_name() {
    let method: ScoringMethod = "MostGoals".parse().unwrap();
    assert_eq!(method, ScoringMethod::Unrecognized(String::from("MostGoals")));
    assert_eq!(method.to_string(), "MostGoals");
}

#[test]
fn test_scoring_method_serializes_as_name() {
    let json: String = serde_json::to_string(&ScoringMethod::TotalScore).unwrap();
    assert_eq!(json, "\"TotalScore\"");

    let parsed: ScoringMethod = serde_json::from_str("\"besttime\"").unwrap();
    assert_eq!(parsed, ScoringMethod::BestTime);

    let legacy: ScoringMethod = serde_json::from_str("\"Knockout\"").unwrap();
    assert_eq!(legacy, ScoringMethod::Unrecognized(String::from("Knockout")));
}
