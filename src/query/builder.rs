use crate::domain::{FilterSet, StatsType};

/// Build the fully-qualified career stats query URL for one player.
///
/// Pure and deterministic: the same inputs always yield the same string.
/// Filter values are concatenated verbatim, so callers must only pass
/// values that need no escaping (numeric or opaque ids, ISO dates).
pub fn build_stats_url(
    base_url: &str,
    player_id: &str,
    filters: &FilterSet,
    stats_type: StatsType,
    tournament: &str,
) -> String {
    let base = stats_path(base_url, player_id);
    let query = query_string(filters, stats_type, tournament);
    format!("{}?{}", base, query)
}

fn stats_path(base_url: &str, player_id: &str) -> String {
    format!("{}/profiles/{}/career-stats", base_url, player_id)
}

fn query_string(filters: &FilterSet, stats_type: StatsType, tournament: &str) -> String {
    let mut params = vec![
        format!("stats_type={}", stats_type.as_str()),
        format!("tournament={}", tournament),
    ];

    for (key, value) in filters.entries() {
        params.push(format!("{}={}", key, value));
    }

    params.join("&")
}
