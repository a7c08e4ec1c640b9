use crate::fetchers::page;
use crate::http::RateLimitedClient;
use anyhow::Result;
use log::info;
use scraper::{Html, Selector};

/// Substring that marks a search result link as a player profile
const PROFILE_LINK_MARKER: &str = "/player/";

/// Resolves a free-text player name to a profile URL via the site search
pub struct ProfileResolver {
    base_url: String,
    link_selector: Selector,
}

impl ProfileResolver {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            link_selector: Selector::parse("a[href]").expect("Valid selector"),
        }
    }

    /// Search for a player and return the first profile link found.
    ///
    /// Returns Ok(None) when the results page has no profile link. Transport
    /// failures propagate so the caller can tell "nothing there" from
    /// "could not check".
    pub fn resolve(
        &self,
        client: &mut RateLimitedClient,
        player_name: &str,
    ) -> Result<Option<String>> {
        let url = self.search_url(player_name);
        info!("Searching for player: {}", player_name);

        let document = page::fetch_document(client, &url)?;
        Ok(self.extract_profile_link(&document))
    }

    /// Search endpoint URL, with spaces in the name encoded as `+`
    pub fn search_url(&self, player_name: &str) -> String {
        let query = urlencoding::encode(player_name).replace("%20", "+");
        format!("{}/search?q={}", self.base_url, query)
    }

    /// First hyperlink in document order whose href is a profile link
    pub fn extract_profile_link(&self, document: &Html) -> Option<String> {
        document
            .select(&self.link_selector)
            .filter_map(|element| element.value().attr("href"))
            .find(|href| href.contains(PROFILE_LINK_MARKER))
            .map(|href| self.absolutize(href))
    }

    fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}
