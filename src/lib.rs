pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod fetchers;
pub mod http;
pub mod query;
pub mod report;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use colored::Colorize;

use crate::cli::{Cli, Command, MatchDetailArgs, ReportArgs};
use crate::config::ScraperSettings;
use crate::domain::{FilterSet, StatsType};
use crate::fetchers::MatchDetailFetcher;
use crate::http::RateLimitedClient;
use crate::query::rolling_year_span;
use crate::report::{ReportRequest, ReportService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(args: ReportArgs) -> Result<()> {
    let settings = ScraperSettings::default();
    let request = build_request(args, Local::now().date_naive());

    let mut service = ReportService::new(settings)?;
    service.run(&request)
}

pub fn handle_match_details(args: MatchDetailArgs) -> Result<()> {
    let settings = ScraperSettings::default();
    let mut client = RateLimitedClient::from_settings(&settings)?;
    let fetcher = MatchDetailFetcher::new(
        settings.base_url,
        args.venue_selector.as_deref(),
        args.pitch_selector.as_deref(),
    )?;

    let details = fetcher.fetch(&mut client, &args.match_id)?;
    println!("{}: {}", "Ground Venue".bold(), details.venue);
    println!("{}: {}", "Pitch Report".bold(), details.pitch_report);
    Ok(())
}

/// Turn CLI arguments into a pipeline request; the date window is anchored
/// to the caller-supplied `today`, not read ambiently further down.
pub fn build_request(args: ReportArgs, today: chrono::NaiveDate) -> ReportRequest {
    let (spanmin, spanmax) = rolling_year_span(today);

    let filters = FilterSet {
        batting_position: args.batting_position,
        opposition: args.opposition,
        result: args.result.into(),
        innings: args.innings.into(),
        spanmin: Some(spanmin),
        spanmax: Some(spanmax),
    };

    let mut stats_types = Vec::new();
    if !args.skip_batting {
        stats_types.push(StatsType::Batting);
    }
    if !args.skip_bowling {
        stats_types.push(StatsType::Bowling);
    }

    let export_dir = if args.no_export {
        None
    } else {
        Some(args.out_dir)
    };

    ReportRequest {
        player_name: args.player_name,
        filters,
        stats_types,
        format: args.format.into(),
        export_dir,
    }
}
