use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const MAX_SYMBOL_LEN: usize = 5;

/// A ticker symbol that has passed validation.
///
/// Symbols are trimmed and uppercased, then must consist of 1 to 5 characters,
/// each an ASCII uppercase letter or a dot (e.g. `AAPL`, `BRK.B`). Holding a
/// `Symbol` is proof that validation already happened, so the data source never
/// sees malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a user-supplied symbol.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let normalized = input.trim().to_ascii_uppercase();
        let len = normalized.chars().count();

        let valid = (1..=MAX_SYMBOL_LEN).contains(&len)
            && normalized.chars().all(|ch| ch.is_ascii_uppercase() || ch == '.');
        if !valid {
            return Err(CoreError::InvalidSymbol(input.trim().to_string()));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
