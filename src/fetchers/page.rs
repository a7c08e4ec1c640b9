use crate::errors;
use crate::http::RateLimitedClient;
use anyhow::{Result, anyhow, bail};
use scraper::{ElementRef, Html, Selector};

/// Fetch a URL and parse the response body as an HTML document
pub fn fetch_document(client: &mut RateLimitedClient, url: &str) -> Result<Html> {
    let response = client.get(url)?;

    if !response.status().is_success() {
        bail!("HTTP error: {}", response.status());
    }

    let body = errors::with_fetch_context(response.text(), url)?;
    Ok(Html::parse_document(&body))
}

/// Compile a CSS selector supplied at runtime
pub fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("{}: {}", errors::selector_context(css), e))
}

/// Text of the first element matching the selector, or None
pub fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(element_text)
}

/// Element text with runs of whitespace collapsed to single spaces
pub fn element_text(element: ElementRef) -> String {
    let raw: String = element.text().collect();
    collapse_whitespace(&raw)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_returns_first_match_only() {
        let html = Html::parse_document(
            "<div class='note'>first</div><div class='note'>second</div>",
        );
        let selector = parse_selector("div.note").unwrap();
        assert_eq!(first_text(&html, &selector), Some("first".to_string()));
    }

    #[test]
    fn first_text_is_none_without_match() {
        let html = Html::parse_document("<p>nothing here</p>");
        let selector = parse_selector("div.note").unwrap();
        assert_eq!(first_text(&html, &selector), None);
    }

    #[test]
    fn element_text_collapses_markup_whitespace() {
        let html = Html::parse_document("<div class='note'>\n  Eden\n  Gardens\n</div>");
        let selector = parse_selector("div.note").unwrap();
        assert_eq!(first_text(&html, &selector), Some("Eden Gardens".to_string()));
    }

    #[test]
    fn invalid_selector_is_rejected() {
        assert!(parse_selector("div..[").is_err());
    }
}
