/// The single supported tournament selector.
pub const TOURNAMENT: &str = "ipl";

pub struct ScraperSettings {
    pub base_url: &'static str,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.cricbuzz.com",
            user_agent: "IplPlayerStats/0.1",
            timeout_secs: 30,
            rate_limit_ms: 1000, // 1 request per second
        }
    }
}
