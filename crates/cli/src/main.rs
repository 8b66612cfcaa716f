// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # podium
//!
//! Runs a tournament scenario through the results engine and prints event
//! results, daily schedules and the medal table.
//!
//! - `podium demo` runs the built-in Beijing 2026 demonstration
//! - `podium run <scenario.json>` runs a scenario file
//!
//! `RUST_LOG` overrides the `-v`/`-q` verbosity when set.

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use podium::{CountryMedalCount, country_standing, current_standings, medals_by_sport};
use podium_cli::{
    AppState, Scenario, ScenarioRun, daily_schedule, demo_scenario, event_report, medal_table,
    sport_breakdown, tournament_summary, write_medal_table_csv,
};
use std::collections::BTreeSet;
use std::fs::File;
use std::path::PathBuf;
use time::Date;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(args.log_level().into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            error!("{err:?}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Number of countries to show in the medal table
    #[arg(long, global = true, default_value_t = 10)]
    top: usize,

    /// Write the full ranked medal table to this CSV file
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Print the per-sport medal breakdown for this country code
    #[arg(long, global = true, value_name = "CODE")]
    by_sport: Option<String>,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run the built-in Beijing 2026 demonstration
    #[command(visible_alias = "d")]
    Demo,

    /// Run a scenario file
    #[command(visible_alias = "r")]
    Run {
        /// Path to the scenario JSON file
        scenario: PathBuf,
    },
}

impl Args {
    fn run(&self) -> Result<()> {
        let scenario: Scenario = match &self.command {
            Command::Demo => demo_scenario().wrap_err("Failed to load the demonstration")?,
            Command::Run { scenario } => Scenario::load(scenario)
                .wrap_err_with(|| format!("Failed to load scenario {}", scenario.display()))?,
        };

        let run: ScenarioRun = scenario.run().wrap_err("Scenario run failed")?;
        info!(finalized = run.finalized.len(), "Scenario complete");
        self.report(run.state)
    }

    fn report(&self, mut state: AppState) -> Result<()> {
        println!("{}", tournament_summary(&state.tournament));

        for event in state.tournament.events() {
            println!("\n{}", event_report(event));
        }

        let dates: BTreeSet<Date> = state.tournament.events().iter().map(|e| e.date).collect();
        for date in dates {
            println!("\n{}", daily_schedule(&state.tournament, date));
        }

        let ranking: Vec<CountryMedalCount> = current_standings(&mut state.tournament).ranking();
        let shown: &[CountryMedalCount] = &ranking[..self.top.min(ranking.len())];
        println!("\n{}", medal_table(shown));

        if let Some(code) = &self.by_sport {
            match country_standing(&mut state.tournament, code) {
                Some(row) => println!("\n{row}"),
                None => println!("\nNo delegation with code {code}"),
            }
            println!(
                "{}",
                sport_breakdown(code, &medals_by_sport(&state.tournament, code))
            );
        }

        if let Some(path) = &self.csv {
            let file: File = File::create(path)
                .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
            write_medal_table_csv(&ranking, file)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), rows = ranking.len(), "Medal table written");
        }

        Ok(())
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}
