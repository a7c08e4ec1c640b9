use std::thread::sleep;
use std::time::Duration;

/// Controls the rate of requests to prevent site throttling
pub struct RateLimiter {
    delay: Duration,
    request_count: usize,
}

impl RateLimiter {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            request_count: 0,
        }
    }

    pub fn wait(&mut self) {
        if self.should_wait() {
            sleep(self.delay);
        }
        self.increment();
    }

    pub fn reset(&mut self) {
        self.request_count = 0;
    }

    fn should_wait(&self) -> bool {
        self.request_count > 0
    }

    fn increment(&mut self) {
        self.request_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_is_not_delayed() {
        let limiter = RateLimiter::new(1000);
        assert!(!limiter.should_wait());
    }

    #[test]
    fn subsequent_requests_are_delayed() {
        let mut limiter = RateLimiter::new(0);
        limiter.wait();
        assert!(limiter.should_wait());
        limiter.reset();
        assert!(!limiter.should_wait());
    }
}
