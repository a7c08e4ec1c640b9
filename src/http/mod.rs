mod client;
mod rate_limiter;

pub use client::RateLimitedClient;
pub use rate_limiter::RateLimiter;
