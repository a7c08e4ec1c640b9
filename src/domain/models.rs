use serde::{Deserialize, Serialize};

/// One scraped HTML table: column headers plus data rows, cell text verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl StatsTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which career table to request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsType {
    Batting,
    Bowling,
}

impl StatsType {
    /// Value sent as the `stats_type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsType::Batting => "batting",
            StatsType::Bowling => "bowling",
        }
    }

    /// Display heading for the scraped table
    pub fn label(&self) -> &'static str {
        match self {
            StatsType::Batting => "Batting",
            StatsType::Bowling => "Bowling",
        }
    }
}

/// Match result filter and its site-side code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    #[default]
    All,
    Won,
    Lost,
    Draw,
}

impl MatchResult {
    /// Query code; All maps to blank and is omitted from queries
    pub fn code(&self) -> &'static str {
        match self {
            MatchResult::All => "",
            MatchResult::Won => "1",
            MatchResult::Lost => "2",
            MatchResult::Draw => "3",
        }
    }
}

/// Innings number filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Innings {
    #[default]
    All,
    First,
    Second,
}

impl Innings {
    pub fn code(&self) -> &'static str {
        match self {
            Innings::All => "",
            Innings::First => "1",
            Innings::Second => "2",
        }
    }
}

/// Optional narrowing criteria for a statistics query.
///
/// Field order is the query parameter order. Blank values are omitted from
/// derived queries entirely, never sent as empty parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub batting_position: Option<String>,
    pub opposition: Option<String>,
    pub result: MatchResult,
    pub innings: Innings,
    pub spanmin: Option<String>,
    pub spanmax: Option<String>,
}

impl FilterSet {
    /// Key/value pairs in query order, blank entries dropped
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = Vec::new();
        push_entry(&mut entries, "batting_position", self.batting_position.as_deref());
        push_entry(&mut entries, "opposition", self.opposition.as_deref());
        push_entry(&mut entries, "result", Some(self.result.code()));
        push_entry(&mut entries, "innings_number", Some(self.innings.code()));
        push_entry(&mut entries, "spanmin", self.spanmin.as_deref());
        push_entry(&mut entries, "spanmax", self.spanmax.as_deref());
        entries
    }
}

fn push_entry(entries: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        if !value.trim().is_empty() {
            entries.push((key, value.to_string()));
        }
    }
}

/// Free-text venue and pitch report from a scorecard page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub venue: String,
    pub pitch_report: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_yield_no_entries() {
        let filters = FilterSet::default();
        assert!(filters.entries().is_empty());
    }

    #[test]
    fn whitespace_only_values_are_omitted() {
        let filters = FilterSet {
            batting_position: Some("  ".to_string()),
            ..FilterSet::default()
        };
        assert!(filters.entries().is_empty());
    }

    #[test]
    fn entries_preserve_field_order() {
        let filters = FilterSet {
            batting_position: Some("4".to_string()),
            opposition: Some("7".to_string()),
            result: MatchResult::Won,
            innings: Innings::Second,
            spanmin: Some("2024-01-01".to_string()),
            spanmax: Some("2025-01-01".to_string()),
        };
        let keys: Vec<&str> = filters.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![
                "batting_position",
                "opposition",
                "result",
                "innings_number",
                "spanmin",
                "spanmax"
            ]
        );
    }

    #[test]
    fn result_codes_match_site_contract() {
        assert_eq!(MatchResult::All.code(), "");
        assert_eq!(MatchResult::Won.code(), "1");
        assert_eq!(MatchResult::Lost.code(), "2");
        assert_eq!(MatchResult::Draw.code(), "3");
    }

    #[test]
    fn only_non_blank_codes_become_entries() {
        let filters = FilterSet {
            innings: Innings::First,
            ..FilterSet::default()
        };
        assert_eq!(
            filters.entries(),
            vec![("innings_number", "1".to_string())]
        );
    }
}
