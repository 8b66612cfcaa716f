// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text reports and CSV export.

use podium::{CountryMedalCount, Tournament};
use podium_domain::{Event, EventResult};
use serde::Serialize;
use std::collections::BTreeMap;
use time::{Date, Time};

const RULE: &str = "============================================================";

/// One medal table row as written to CSV.
#[derive(Debug, Serialize)]
struct MedalTableRecord<'a> {
    rank: usize,
    country_code: &'a str,
    country: &'a str,
    gold: u32,
    silver: u32,
    bronze: u32,
    total: u32,
}

fn clock(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Renders an event's header and its results.
///
/// Ranked results are listed by rank, disqualified results separately with
/// their reasons.
#[must_use]
pub fn event_report(event: &Event) -> String {
    let mut lines: Vec<String> = vec![
        String::from(RULE),
        format!("  {}", event.name),
        String::from(RULE),
        format!("Date: {} at {}", event.date, clock(event.time)),
        format!("Venue: {}", event.venue.name),
        format!("Phase: {} - Round {}", event.phase, event.round_number),
        format!("Status: {}", event.status()),
        format!("Participants: {}", event.participant_count()),
    ];

    if event.results().is_empty() {
        lines.push(String::from("No results recorded yet."));
        return lines.join("\n");
    }

    let mut ranked: Vec<&EventResult> = event
        .results()
        .iter()
        .filter(|r| !r.is_disqualified())
        .collect();
    ranked.sort_by_key(|r| r.rank());

    lines.push(String::new());
    lines.push(String::from("--- RESULTS ---"));
    lines.extend(ranked.iter().map(ToString::to_string));

    let disqualified: Vec<&EventResult> = event
        .results()
        .iter()
        .filter(|r| r.is_disqualified())
        .collect();
    if !disqualified.is_empty() {
        lines.push(String::new());
        lines.push(String::from("--- DISQUALIFICATIONS ---"));
        lines.extend(disqualified.iter().map(|r| {
            format!(
                "DSQ - {} ({}): {}",
                r.athlete_name(),
                r.country_code(),
                r.disqualification_reason().unwrap_or_default()
            )
        }));
    }

    lines.join("\n")
}

/// Renders the events scheduled on one day.
#[must_use]
pub fn daily_schedule(tournament: &Tournament, date: Date) -> String {
    let mut events: Vec<&Event> = tournament.events_on(date);
    events.sort_by_key(|e| e.time);

    let mut lines: Vec<String> = vec![format!("Schedule for {date}")];
    if events.is_empty() {
        lines.push(String::from("  No events."));
    }
    lines.extend(events.iter().map(|e| {
        format!(
            "  {} {} @ {} [{}]",
            clock(e.time),
            e.name,
            e.venue.name,
            e.status()
        )
    }));
    lines.join("\n")
}

/// Renders ranked medal table rows, numbering them from 1.
#[must_use]
pub fn medal_table(rows: &[CountryMedalCount]) -> String {
    let mut lines: Vec<String> = vec![
        String::from(RULE),
        String::from("  MEDAL TABLE"),
        String::from(RULE),
        format!(
            "{:<5} {:<28} {:>5} {:>6} {:>6} {:>5}",
            "Rank", "Country", "Gold", "Silver", "Bronze", "Total"
        ),
    ];

    if rows.is_empty() {
        lines.push(String::from("No delegations."));
    }

    for (index, row) in rows.iter().enumerate() {
        let country: String = format!("{} {} ({})", row.flag, row.country_name, row.country_code);
        lines.push(format!(
            "{:<5} {:<28} {:>5} {:>6} {:>6} {:>5}",
            index + 1,
            country.trim_start(),
            row.gold,
            row.silver,
            row.bronze,
            row.total()
        ));
    }

    lines.join("\n")
}

/// Renders one country's medals per sport.
#[must_use]
pub fn sport_breakdown(country_code: &str, by_sport: &BTreeMap<String, u32>) -> String {
    let mut lines: Vec<String> = vec![format!(
        "Medals by sport for {}",
        country_code.to_uppercase()
    )];
    if by_sport.is_empty() {
        lines.push(String::from("  None."));
    }
    lines.extend(
        by_sport
            .iter()
            .map(|(sport, count)| format!("  {sport}: {count}")),
    );
    lines.join("\n")
}

/// Renders the tournament header and catalog counts.
#[must_use]
pub fn tournament_summary(tournament: &Tournament) -> String {
    let mut lines: Vec<String> = vec![tournament.to_string()];
    if !tournament.motto.is_empty() {
        lines.push(format!("Motto: {}", tournament.motto));
    }
    lines.push(format!(
        "Sports: {} | Delegations: {} | Athletes: {} | Events: {}",
        tournament.sports().len(),
        tournament.teams().len(),
        tournament.athlete_count(),
        tournament.events().len()
    ));
    lines.join("\n")
}

/// Writes ranked medal table rows as CSV with a header line.
///
/// # Errors
///
/// Returns an error if a record cannot be serialized or the writer fails.
pub fn write_medal_table_csv<W: std::io::Write>(
    rows: &[CountryMedalCount],
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer: csv::Writer<W> = csv::Writer::from_writer(writer);
    for (index, row) in rows.iter().enumerate() {
        csv_writer.serialize(MedalTableRecord {
            rank: index + 1,
            country_code: &row.country_code,
            country: &row.country_name,
            gold: row.gold,
            silver: row.silver,
            bronze: row.bronze,
            total: row.total(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
