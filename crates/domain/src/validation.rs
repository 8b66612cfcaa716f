// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::athlete::Athlete;
use crate::error::DomainError;
use crate::sport::Discipline;
use crate::types::Gender;

/// Validates that a country code is an ISO-3 style code.
///
/// # Arguments
///
/// * `code` - The country code to validate (case-insensitive)
///
/// # Errors
///
/// Returns `DomainError::InvalidCountryCode` unless the code is exactly
/// three ASCII letters.
pub fn validate_country_code(code: &str) -> Result<(), DomainError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DomainError::InvalidCountryCode(code.to_string()));
    }
    Ok(())
}

/// Validates that an athlete may enter a discipline.
///
/// This is the boundary check catalog collaborators run before handing an
/// athlete to the competition engine. The engine itself does not repeat it.
///
/// # Arguments
///
/// * `athlete` - The prospective entrant
/// * `discipline` - The discipline being entered
///
/// # Errors
///
/// Returns an error if:
/// - The discipline is gendered and the athlete's gender differs
/// - The athlete is not registered for the discipline's sport
pub fn validate_athlete_for_discipline(
    athlete: &Athlete,
    discipline: &Discipline,
) -> Result<(), DomainError> {
    // Rule: gendered disciplines only accept that gender
    if discipline.gender != Gender::Mixed && athlete.gender != discipline.gender {
        return Err(DomainError::GenderMismatch {
            athlete: athlete.full_name(),
            athlete_gender: athlete.gender,
            discipline_gender: discipline.gender,
        });
    }

    // Rule: athlete must practice the sport
    if !athlete.is_registered_for(discipline.sport_id) {
        return Err(DomainError::NotRegisteredForSport {
            athlete: athlete.full_name(),
            sport_id: discipline.sport_id,
        });
    }

    Ok(())
}
