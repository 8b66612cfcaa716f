// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Gender, SportId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidCountryCode(String::from("FR"));
    assert_eq!(
        format!("{err}"),
        "Invalid country code 'FR': expected three ASCII letters"
    );

    let err: DomainError = DomainError::UnknownGender(String::from("other"));
    assert_eq!(format!("{err}"), "Unknown gender: other");

    let err: DomainError = DomainError::UnknownCompetitionType(String::from("relay"));
    assert_eq!(format!("{err}"), "Unknown competition type: relay");

    let err: DomainError = DomainError::UnknownEventStatus(String::from("Done"));
    assert_eq!(format!("{err}"), "Unknown event status: Done");

    let err: DomainError = DomainError::UnknownMedal(String::from("Platinum"));
    assert_eq!(format!("{err}"), "Unknown medal: Platinum");

    let err: DomainError = DomainError::GenderMismatch {
        athlete: String::from("Mikaela Shiffrin"),
        athlete_gender: Gender::Female,
        discipline_gender: Gender::Male,
    };
    assert_eq!(
        format!("{err}"),
        "Mikaela Shiffrin (Female) cannot enter a Male discipline"
    );

    let err: DomainError = DomainError::NotRegisteredForSport {
        athlete: String::from("Nathan Chen"),
        sport_id: SportId::new(3),
    };
    assert_eq!(format!("{err}"), "Nathan Chen is not registered for sport 3");
}
