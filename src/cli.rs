use crate::domain::{Innings, MatchResult};
use crate::report::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "IPL player performance scraper")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Scrape batting and bowling IPL career stats for a player
    Report(ReportArgs),
    /// Fetch ground venue and pitch report from a match scorecard page
    MatchDetails(MatchDetailArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ReportArgs {
    /// Player name to search for
    pub player_name: String,

    /// Batting position filter (1-7, blank for all)
    #[arg(long)]
    pub batting_position: Option<String>,

    /// Opposition team id (e.g. Mumbai Indians = 7, CSK = 4)
    #[arg(long)]
    pub opposition: Option<String>,

    /// Match result filter
    #[arg(long, value_enum, default_value = "all")]
    pub result: ResultArg,

    /// Innings number filter
    #[arg(long, value_enum, default_value = "all")]
    pub innings: InningsArg,

    /// Output format for scraped tables
    #[arg(long, value_enum, default_value = "table")]
    pub format: FormatArg,

    /// Directory for CSV exports
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Skip the batting table
    #[arg(long)]
    pub skip_batting: bool,

    /// Skip the bowling table
    #[arg(long)]
    pub skip_bowling: bool,

    /// Do not write CSV files
    #[arg(long)]
    pub no_export: bool,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct MatchDetailArgs {
    /// Match identifier from the scorecard URL
    pub match_id: String,

    /// CSS selector override for the venue element
    #[arg(long)]
    pub venue_selector: Option<String>,

    /// CSS selector override for the pitch report element
    #[arg(long)]
    pub pitch_selector: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultArg {
    All,
    Won,
    Lost,
    Draw,
}

impl From<ResultArg> for MatchResult {
    fn from(arg: ResultArg) -> Self {
        match arg {
            ResultArg::All => MatchResult::All,
            ResultArg::Won => MatchResult::Won,
            ResultArg::Lost => MatchResult::Lost,
            ResultArg::Draw => MatchResult::Draw,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InningsArg {
    All,
    #[value(name = "1")]
    First,
    #[value(name = "2")]
    Second,
}

impl From<InningsArg> for Innings {
    fn from(arg: InningsArg) -> Self {
        match arg {
            InningsArg::All => Innings::All,
            InningsArg::First => Innings::First,
            InningsArg::Second => Innings::Second,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Table,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
