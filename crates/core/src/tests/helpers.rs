// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CompetitionManager, Tournament};
use podium_domain::{
    Athlete, AthleteId, CompetitionType, Discipline, DisciplineId, EventDraft, EventId, Gender,
    NationalTeam, ScoringMethod, Sport, SportId, TeamId, Venue, VenueId,
};
use std::time::Duration;
use time::macros::{date, time};

pub const ALPINE: SportId = SportId::new(1);
pub const SKATING: SportId = SportId::new(2);
pub const DOWNHILL: DisciplineId = DisciplineId::new(1);
pub const SINGLES: DisciplineId = DisciplineId::new(2);

pub const PINTURAULT: AthleteId = AthleteId::new(1);
pub const SVINDAL: AthleteId = AthleteId::new(2);
pub const SHIFFRIN: AthleteId = AthleteId::new(3);
pub const CHEN: AthleteId = AthleteId::new(4);

pub fn create_test_venue() -> Venue {
    Venue::new(
        VenueId::new(1),
        "National Alpine Skiing Centre",
        "Yanqing",
        5000,
        "Outdoor",
    )
}

pub fn create_test_sports() -> Vec<Sport> {
    let mut alpine: Sport = Sport::new(ALPINE, "Alpine Skiing", CompetitionType::Timed, "");
    alpine.add_discipline(Discipline::new(DOWNHILL, "Downhill", ALPINE, Gender::Mixed));

    let mut skating: Sport = Sport::new(SKATING, "Figure Skating", CompetitionType::Scored, "");
    skating.add_discipline(
        Discipline::new(SINGLES, "Singles", SKATING, Gender::Mixed)
            .with_scoring_method(ScoringMethod::TotalScore),
    );

    vec![alpine, skating]
}

fn athlete(id: AthleteId, first: &str, last: &str, code: &str, sport: SportId) -> Athlete {
    let mut athlete: Athlete =
        Athlete::new(id, first, last, 30, code, code, Gender::Male, id.value());
    athlete.add_sport(sport);
    athlete
}

/// Three delegations: France (Pinturault), Norway (Svindal) and the USA
/// (Shiffrin, Chen), with an alpine and a figure skating discipline.
pub fn create_test_tournament() -> Tournament {
    let mut tournament: Tournament = Tournament::new(
        1,
        "Test Games",
        "Beijing",
        "China",
        date!(2026 - 02 - 04),
        date!(2026 - 02 - 20),
    );
    for sport in create_test_sports() {
        tournament.add_sport(sport);
    }

    let mut fra: NationalTeam = NationalTeam::new(TeamId::new(1), "France", "FRA", "FR");
    fra.add_athlete(athlete(PINTURAULT, "Alexis", "Pinturault", "FRA", ALPINE));
    let mut nor: NationalTeam = NationalTeam::new(TeamId::new(2), "Norway", "NOR", "NO");
    nor.add_athlete(athlete(SVINDAL, "Aksel", "Svindal", "NOR", ALPINE));
    let mut usa: NationalTeam = NationalTeam::new(TeamId::new(3), "United States", "USA", "US");
    usa.add_athlete(athlete(SHIFFRIN, "Mikaela", "Shiffrin", "USA", ALPINE));
    usa.add_athlete(athlete(CHEN, "Nathan", "Chen", "USA", SKATING));

    tournament.add_team(fra).unwrap();
    tournament.add_team(nor).unwrap();
    tournament.add_team(usa).unwrap();
    tournament
}

pub fn create_test_draft(name: &str, discipline_id: DisciplineId) -> EventDraft {
    EventDraft::new(
        name,
        discipline_id,
        date!(2026 - 02 - 06),
        time!(10:00),
        create_test_venue(),
    )
}

/// Schedules an event and registers the given athletes.
pub fn schedule_with_participants(
    manager: &mut CompetitionManager,
    tournament: &mut Tournament,
    discipline_id: DisciplineId,
    athletes: &[AthleteId],
) -> EventId {
    let event_id: EventId =
        manager.schedule_event(tournament, create_test_draft("Test Event", discipline_id));
    for &athlete_id in athletes {
        manager
            .register_participant(tournament, event_id, athlete_id)
            .unwrap();
    }
    event_id
}

pub fn secs(seconds: f64) -> Duration {
    Duration::from_secs_f64(seconds)
}
