use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// How far back a price history reaches. Always daily bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Interval {
    SixMonths,
    OneYear,
    FiveYears,
    Max,
}

impl Interval {
    pub const ALL: [Interval; 4] = [
        Interval::SixMonths,
        Interval::OneYear,
        Interval::FiveYears,
        Interval::Max,
    ];

    /// The provider's `range` parameter for this interval.
    pub fn as_range(&self) -> &'static str {
        match self {
            Interval::SixMonths => "6mo",
            Interval::OneYear => "1y",
            Interval::FiveYears => "5y",
            Interval::Max => "max",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interval::SixMonths => "6 months",
            Interval::OneYear => "1 year",
            Interval::FiveYears => "5 years",
            Interval::Max => "max",
        }
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_range())
    }
}

impl FromStr for Interval {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Interval::ALL
            .into_iter()
            .find(|i| i.as_range() == wanted || i.label() == wanted)
            .ok_or_else(|| CoreError::InvalidInterval(s.to_string()))
    }
}
