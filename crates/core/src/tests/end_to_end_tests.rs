// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Full lifecycle runs from scheduling through the medal table.

use super::helpers::{
    DOWNHILL, PINTURAULT, SHIFFRIN, SINGLES, SVINDAL, create_test_tournament,
    schedule_with_participants, secs,
};
use crate::{
    CompetitionManager, CountryMedalCount, FinalizedEvent, MedalStandings, Tournament,
    current_standings,
};
use podium_domain::{EventId, EventResult, EventStatus, Medal};

#[test]
fn test_best_time_event_through_standings() {
    let mut tournament: Tournament = create_test_tournament();
    let mut manager: CompetitionManager = CompetitionManager::new();
    let event_id: EventId = schedule_with_participants(
        &mut manager,
        &mut tournament,
        DOWNHILL,
        &[PINTURAULT, SVINDAL],
    );
    let before: MedalStandings = current_standings(&mut tournament);

    manager
        .record_timed_performance(&mut tournament, event_id, PINTURAULT, secs(95.23), 0.0)
        .unwrap();
    manager
        .record_timed_performance(&mut tournament, event_id, SVINDAL, secs(94.85), 0.0)
        .unwrap();
    let finalized: FinalizedEvent = manager.finalize_event(&mut tournament, event_id).unwrap();

    assert_eq!(finalized.results[0].athlete_id(), SVINDAL);
    assert_eq!(finalized.results[0].rank(), 1);
    assert_eq!(finalized.results[0].medal(), Medal::Gold);
    assert_eq!(finalized.results[1].athlete_id(), PINTURAULT);
    assert_eq!(finalized.results[1].rank(), 2);
    assert_eq!(finalized.results[1].medal(), Medal::Silver);
    assert_eq!(
        tournament.event(event_id).unwrap().status(),
        EventStatus::Completed
    );

    let after: MedalStandings = current_standings(&mut tournament);
    let nor_before: &CountryMedalCount = before.country("NOR").unwrap();
    let fra_before: &CountryMedalCount = before.country("FRA").unwrap();
    let nor_after: &CountryMedalCount = after.country("NOR").unwrap();
    let fra_after: &CountryMedalCount = after.country("FRA").unwrap();

    assert_eq!(nor_after.gold, nor_before.gold + 1);
    assert_eq!(nor_after.silver, nor_before.silver);
    assert_eq!(fra_after.silver, fra_before.silver + 1);
    assert_eq!(fra_after.gold, fra_before.gold);
    assert_eq!(after.total_medals_distributed(), 2);
    assert_eq!(after.ranking()[0].country_code, "NOR");
}

#[test]
fn test_every_finalized_event_matches_medal_to_rank() {
    let mut tournament: Tournament = create_test_tournament();
    let mut manager: CompetitionManager = CompetitionManager::new();
    let athletes = [PINTURAULT, SVINDAL, SHIFFRIN];

    let timed: EventId =
        schedule_with_participants(&mut manager, &mut tournament, DOWNHILL, &athletes);
    let scored: EventId =
        schedule_with_participants(&mut manager, &mut tournament, SINGLES, &athletes);
    for (offset, &athlete) in athletes.iter().enumerate() {
        let delta: f64 = f64::from(u8::try_from(offset).unwrap());
        manager
            .record_timed_performance(&mut tournament, timed, athlete, secs(60.0 + delta), 0.0)
            .unwrap();
        manager
            .record_scored_performance(&mut tournament, scored, athlete, &[5.0 + delta], 0.0)
            .unwrap();
    }
    let dsq: EventResult = manager
        .record_timed_performance(&mut tournament, timed, SHIFFRIN, secs(50.0), 0.0)
        .unwrap();
    manager
        .disqualify_athlete(&mut tournament, dsq.id(), "Missed gate")
        .unwrap();

    for event_id in [timed, scored] {
        let finalized: FinalizedEvent = manager.finalize_event(&mut tournament, event_id).unwrap();
        let mut seen_disqualified: bool = false;
        for result in &finalized.results {
            if result.is_disqualified() {
                seen_disqualified = true;
                assert_eq!(result.rank(), 0);
                assert_eq!(result.medal(), Medal::None);
            } else {
                assert!(!seen_disqualified);
                assert_eq!(result.medal(), Medal::for_rank(result.rank()));
            }
        }
    }
}
