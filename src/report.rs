use crate::config::{ScraperSettings, TOURNAMENT};
use crate::domain::{FilterSet, StatsTable, StatsType};
use crate::export;
use crate::fetchers::{ProfileResolver, StatsScraper};
use crate::http::RateLimitedClient;
use crate::query::{self, IdentifierExtractor};
use anyhow::Result;
use colored::Colorize;
use log::{info, warn};
use std::path::PathBuf;

/// How scraped tables are rendered on stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// One user-triggered pipeline run: name, filters, requested tables, output
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub player_name: String,
    pub filters: FilterSet,
    pub stats_types: Vec<StatsType>,
    pub format: OutputFormat,
    /// Directory for CSV exports; None disables export
    pub export_dir: Option<PathBuf>,
}

/// Runs the full pipeline for one player:
/// resolve profile, extract id, scrape each requested table, render, export.
pub struct ReportService {
    settings: ScraperSettings,
    client: RateLimitedClient,
    resolver: ProfileResolver,
    extractor: IdentifierExtractor,
    scraper: StatsScraper,
}

impl ReportService {
    pub fn new(settings: ScraperSettings) -> Result<Self> {
        let client = RateLimitedClient::from_settings(&settings)?;
        let resolver = ProfileResolver::new(settings.base_url);
        let extractor = IdentifierExtractor::new()?;

        Ok(Self {
            settings,
            client,
            resolver,
            extractor,
            scraper: StatsScraper::new(),
        })
    }

    /// Run the report. Absence at any step short-circuits the steps after it
    /// with an on-screen message; nothing here terminates the process.
    pub fn run(&mut self, request: &ReportRequest) -> Result<()> {
        info!("=== IPL Player Performance Report ===");

        let Some(profile_url) = self.resolve_profile(&request.player_name) else {
            return Ok(());
        };

        let Some(player_id) = self.extract_id(&profile_url) else {
            return Ok(());
        };
        println!("{}", format!("Found Player ID: {}", player_id).green());

        for stats_type in &request.stats_types {
            self.report_stats(request, &player_id, *stats_type)?;
        }

        Ok(())
    }

    fn resolve_profile(&mut self, player_name: &str) -> Option<String> {
        match self.resolver.resolve(&mut self.client, player_name) {
            Ok(Some(url)) => {
                info!("Resolved profile: {}", url);
                Some(url)
            }
            Ok(None) => {
                println!("{}", "Player not found. Please try with another name.".red());
                None
            }
            Err(e) => {
                warn!("Player search failed: {:#}", e);
                println!("{}", "Could not reach the search page. Try again later.".red());
                None
            }
        }
    }

    fn extract_id(&self, profile_url: &str) -> Option<String> {
        let player_id = self.extractor.extract(profile_url);
        if player_id.is_none() {
            println!("{}", "Unable to extract player ID.".red());
        }
        player_id
    }

    fn report_stats(
        &mut self,
        request: &ReportRequest,
        player_id: &str,
        stats_type: StatsType,
    ) -> Result<()> {
        let url = query::build_stats_url(
            self.settings.base_url,
            player_id,
            &request.filters,
            stats_type,
            TOURNAMENT,
        );
        info!("Fetching {} stats: {}", stats_type.as_str(), url);

        let Some(table) = self.scraper.fetch_or_absent(&mut self.client, &url) else {
            println!(
                "{}",
                format!(
                    "No {} stats found for the applied filters.",
                    stats_type.label()
                )
                .yellow()
            );
            return Ok(());
        };

        self.render(request, &table, stats_type)?;
        self.export(request, &table, stats_type)
    }

    fn render(
        &self,
        request: &ReportRequest,
        table: &StatsTable,
        stats_type: StatsType,
    ) -> Result<()> {
        let title = format!("{} Stats", stats_type.label());
        match request.format {
            OutputFormat::Table => export::print_table(&title, table),
            OutputFormat::Json => export::print_json(&title, table)?,
        }
        Ok(())
    }

    fn export(
        &self,
        request: &ReportRequest,
        table: &StatsTable,
        stats_type: StatsType,
    ) -> Result<()> {
        let Some(out_dir) = &request.export_dir else {
            return Ok(());
        };

        let path = export::write_csv(table, out_dir, &request.player_name, stats_type)?;
        println!("Saved {}", path.display());
        Ok(())
    }
}
