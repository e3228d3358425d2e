/// Result of a substep that may degrade instead of failing.
///
/// Hard failures are expressed with `Result<T, YfError>`; an `Outcome` is what
/// a substep returns once it has already decided that the request continues.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The substep produced its full value.
    Complete(T),
    /// The substep failed and `value` is the best-effort default that replaces it.
    Fallback {
        /// Partial or empty value to use in place of the full one.
        value: T,
        /// Why the full value is unavailable.
        reason: String,
    },
}

impl<T> Outcome<T> {
    /// Degrade `res` to `default` when it is an error.
    pub fn recover<E: std::fmt::Display>(res: Result<T, E>, default: impl FnOnce() -> T) -> Self {
        match res {
            Ok(value) => Self::Complete(value),
            Err(e) => Self::Fallback {
                value: default(),
                reason: e.to_string(),
            },
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// The failure reason, if the substep degraded.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Complete(_) => None,
            Self::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Take the value, emitting one warning on stderr when it is a fallback.
    pub fn into_value_logged(self, step: &str, symbol: &str) -> T {
        match self {
            Self::Complete(value) => value,
            Self::Fallback { value, reason } => {
                tracing::warn!(symbol, "{step} degraded: {reason}");
                value
            }
        }
    }
}
