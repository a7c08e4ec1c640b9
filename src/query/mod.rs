mod builder;
mod identifier;
mod span;

pub use builder::build_stats_url;
pub use identifier::IdentifierExtractor;
pub use span::rolling_year_span;
