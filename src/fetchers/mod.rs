pub mod page;

mod match_details;
mod profile;
mod stats;

pub use match_details::{DEFAULT_DETAIL_SELECTOR, MatchDetailFetcher};
pub use profile::ProfileResolver;
pub use stats::StatsScraper;
