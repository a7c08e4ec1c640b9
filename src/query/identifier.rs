use anyhow::{Context, Result};
use regex::Regex;

/// Extracts the opaque player identifier embedded in a profile URL path
pub struct IdentifierExtractor {
    pattern: Regex,
}

impl IdentifierExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"/player/([^/]+)/")
            .context("Failed to compile player identifier regex")?;
        Ok(Self { pattern })
    }

    /// The path segment immediately after `/player/`, verbatim.
    ///
    /// None when the URL does not contain the expected path shape. No
    /// validation of character set or length is applied.
    pub fn extract(&self, profile_url: &str) -> Option<String> {
        let captures = self.pattern.captures(profile_url)?;
        Some(captures.get(1)?.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> IdentifierExtractor {
        IdentifierExtractor::new().unwrap()
    }

    #[test]
    fn segment_after_player_is_the_identifier() {
        assert_eq!(
            extractor().extract("https://www.cricbuzz.com/player/kohli/batting"),
            Some("kohli".to_string())
        );
    }

    #[test]
    fn numeric_identifiers_pass_through_verbatim() {
        assert_eq!(
            extractor().extract("https://www.cricbuzz.com/player/1413/"),
            Some("1413".to_string())
        );
    }

    #[test]
    fn url_without_player_segment_is_none() {
        assert_eq!(
            extractor().extract("https://www.cricbuzz.com/teams/india"),
            None
        );
    }

    #[test]
    fn unterminated_segment_is_none() {
        // No trailing slash after the segment, so the shape does not match.
        assert_eq!(
            extractor().extract("https://www.cricbuzz.com/player/kohli"),
            None
        );
    }
}
