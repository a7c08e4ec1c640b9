use crate::domain::MatchDetails;
use crate::fetchers::page;
use crate::http::RateLimitedClient;
use anyhow::Result;
use log::info;
use scraper::{Html, Selector};

/// Legacy class signature used for both fields by the original scraper.
/// The real per-field selectors are unknown; callers can override either one.
pub const DEFAULT_DETAIL_SELECTOR: &str = "div.cb-col.cb-col-100.cb-ltst-wgt-hdr";

const VENUE_FALLBACK: &str = "Not available";
const PITCH_FALLBACK: &str = "Pitch report not available";

/// Pulls ground venue and pitch report text from a scorecard page
pub struct MatchDetailFetcher {
    base_url: String,
    venue_selector: Selector,
    pitch_selector: Selector,
}

impl MatchDetailFetcher {
    /// Create a fetcher; None falls back to the legacy selector for that field
    pub fn new(base_url: &str, venue_css: Option<&str>, pitch_css: Option<&str>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.to_string(),
            venue_selector: page::parse_selector(venue_css.unwrap_or(DEFAULT_DETAIL_SELECTOR))?,
            pitch_selector: page::parse_selector(pitch_css.unwrap_or(DEFAULT_DETAIL_SELECTOR))?,
        })
    }

    /// Fetch the scorecard page for a match and extract both fields
    pub fn fetch(&self, client: &mut RateLimitedClient, match_id: &str) -> Result<MatchDetails> {
        let url = self.scorecard_url(match_id);
        info!("Fetching match details from {}", url);

        let document = page::fetch_document(client, &url)?;
        Ok(self.extract(&document))
    }

    pub fn scorecard_url(&self, match_id: &str) -> String {
        format!("{}/live-cricket-scorecard/{}", self.base_url, match_id)
    }

    /// Extract venue and pitch text, substituting placeholders when absent
    pub fn extract(&self, document: &Html) -> MatchDetails {
        let venue = page::first_text(document, &self.venue_selector)
            .unwrap_or_else(|| VENUE_FALLBACK.to_string());
        let pitch_report = page::first_text(document, &self.pitch_selector)
            .unwrap_or_else(|| PITCH_FALLBACK.to_string());

        MatchDetails {
            venue,
            pitch_report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.cricbuzz.com";

    #[test]
    fn scorecard_url_addresses_the_match() {
        let fetcher = MatchDetailFetcher::new(BASE, None, None).unwrap();
        assert_eq!(
            fetcher.scorecard_url("12345"),
            "https://www.cricbuzz.com/live-cricket-scorecard/12345"
        );
    }

    #[test]
    fn default_selectors_read_the_same_element() {
        let fetcher = MatchDetailFetcher::new(BASE, None, None).unwrap();
        let document = Html::parse_document(
            r#"<div class="cb-col cb-col-100 cb-ltst-wgt-hdr">Eden Gardens</div>"#,
        );
        let details = fetcher.extract(&document);
        assert_eq!(details.venue, "Eden Gardens");
        assert_eq!(details.pitch_report, "Eden Gardens");
    }

    #[test]
    fn distinct_selectors_read_distinct_elements() {
        let fetcher =
            MatchDetailFetcher::new(BASE, Some("div.venue"), Some("div.pitch")).unwrap();
        let document = Html::parse_document(
            r#"<div class="venue">Wankhede Stadium</div><div class="pitch">Dry, expect turn</div>"#,
        );
        let details = fetcher.extract(&document);
        assert_eq!(details.venue, "Wankhede Stadium");
        assert_eq!(details.pitch_report, "Dry, expect turn");
    }

    #[test]
    fn missing_elements_fall_back_to_placeholders() {
        let fetcher = MatchDetailFetcher::new(BASE, None, None).unwrap();
        let document = Html::parse_document("<p>scorecard unavailable</p>");
        let details = fetcher.extract(&document);
        assert_eq!(details.venue, "Not available");
        assert_eq!(details.pitch_report, "Pitch report not available");
    }

    #[test]
    fn invalid_override_selector_is_an_error() {
        assert!(MatchDetailFetcher::new(BASE, Some("div..["), None).is_err());
    }
}
