use crate::domain::StatsTable;
use crate::fetchers::page;
use crate::http::RateLimitedClient;
use anyhow::Result;
use log::warn;
use scraper::{Html, Selector};

/// CSS signature of the career stats table on profile pages
const STATS_TABLE_SELECTOR: &str = "table.cb-col.cb-col-100.cb-ltst-wgt-hdr";

/// Scrapes one career stats table from a fully-built query URL
pub struct StatsScraper {
    table_selector: Selector,
    row_selector: Selector,
    header_selector: Selector,
    cell_selector: Selector,
}

impl StatsScraper {
    pub fn new() -> Self {
        Self {
            table_selector: Selector::parse(STATS_TABLE_SELECTOR).expect("Valid selector"),
            row_selector: Selector::parse("tr").expect("Valid selector"),
            header_selector: Selector::parse("th").expect("Valid selector"),
            cell_selector: Selector::parse("td").expect("Valid selector"),
        }
    }

    /// Fetch a stats page and extract the target table.
    ///
    /// Ok(None) means the page has no matching table element; Err means the
    /// page could not be fetched at all.
    pub fn try_fetch(
        &self,
        client: &mut RateLimitedClient,
        url: &str,
    ) -> Result<Option<StatsTable>> {
        let document = page::fetch_document(client, url)?;
        Ok(self.extract_table(&document))
    }

    /// Like try_fetch, but downgrades failures to absence with a diagnostic.
    ///
    /// This is the one boundary where transport and parse errors are caught
    /// rather than propagated; downstream display treats both outcomes as
    /// "no stats found".
    pub fn fetch_or_absent(
        &self,
        client: &mut RateLimitedClient,
        url: &str,
    ) -> Option<StatsTable> {
        match self.try_fetch(client, url) {
            Ok(table) => table,
            Err(e) => {
                warn!("Error scraping stats from {}: {:#}", url, e);
                None
            }
        }
    }

    /// Convert the first matching table element into headers and rows.
    ///
    /// Headers come from `th` cells when present, otherwise from the first
    /// row. Data rows are rows with at least one `td` cell.
    pub fn extract_table(&self, document: &Html) -> Option<StatsTable> {
        let table = document.select(&self.table_selector).next()?;

        let mut headers: Vec<String> = table
            .select(&self.header_selector)
            .map(page::element_text)
            .collect();

        let mut rows: Vec<Vec<String>> = Vec::new();
        for row in table.select(&self.row_selector) {
            let cells: Vec<String> = row.select(&self.cell_selector).map(page::element_text).collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }

        if headers.is_empty() && !rows.is_empty() {
            headers = rows.remove(0);
        }

        Some(StatsTable { headers, rows })
    }
}

impl Default for StatsScraper {
    fn default() -> Self {
        Self::new()
    }
}
