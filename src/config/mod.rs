mod settings;

pub use settings::{ScraperSettings, TOURNAMENT};
