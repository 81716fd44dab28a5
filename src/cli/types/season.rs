//! Season identifier and season-resolution mode.

use crate::error::{FetchError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Starting year of a competition cycle, always four digits.
///
/// API-Football labels the 2024/25 campaign as season `2024`. The value is
/// written to the output metadata as a string (`"2024"`), which is what the
/// downstream consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Season(u16);

impl Season {
    /// Create a season, rejecting years that are not four digits.
    pub fn new(year: u16) -> Result<Self> {
        if (1000..=9999).contains(&year) {
            Ok(Self(year))
        } else {
            Err(FetchError::InvalidSeason {
                value: year.to_string(),
            })
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        // Latest season available on the free plan
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || FetchError::InvalidSeason {
            value: s.to_string(),
        };
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        Self::new(s.parse().map_err(|_| invalid())?)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How the season used for queries is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SeasonMode {
    /// Ask the `leagues` endpoint for the current season before fetching.
    Auto,
    /// Use the configured season as-is.
    #[default]
    Fixed,
}

impl fmt::Display for SeasonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeasonMode::Auto => "auto",
            SeasonMode::Fixed => "fixed",
        };
        write!(f, "{}", s)
    }
}
