use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::core::YfError;

const MAX_SYMBOL_LEN: usize = 15;

/// A trimmed, upper-cased Yahoo ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a symbol to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `YfError::InvalidParams` for blank input, input longer than 15
    /// characters, or characters outside ASCII alphanumerics and `.`, `-`, `^`, `=`.
    pub fn parse(input: &str) -> Result<Self, YfError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(YfError::InvalidParams("symbol must not be empty".into()));
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(YfError::InvalidParams(format!(
                "symbol is {len} characters long, at most {MAX_SYMBOL_LEN} are allowed"
            )));
        }

        if let Some((index, ch)) = normalized
            .chars()
            .enumerate()
            .find(|(_, ch)| !(ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '^' | '=')))
        {
            return Err(YfError::InvalidParams(format!(
                "symbol contains invalid character {ch:?} at position {index}"
            )));
        }

        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
