use std::time::Duration;

/// Specifies the delay between attempts of a retried unit of work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backoff {
    /// Uses the same delay before every retry.
    Fixed(Duration),
}

/// Configuration for retrying the combined statement fetch.
///
/// The defaults are three attempts in total with a fixed one second pause
/// between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, including the first one. Zero is treated as one.
    pub max_attempts: u32,
    /// The delay strategy to use between attempts.
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Backoff::Fixed(Duration::from_secs(1)),
        }
    }
}

impl RetryConfig {
    /// A config that makes exactly one attempt.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            max_attempts: 1,
            backoff: Backoff::Fixed(Duration::ZERO),
        }
    }

    /// Number of attempts to make, never less than one.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Pause before the next attempt.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        match self.backoff {
            Backoff::Fixed(d) => d,
        }
    }
}
