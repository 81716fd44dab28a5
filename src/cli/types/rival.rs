//! Head-to-head opponents.

use super::ids::TeamId;
use crate::error::{FetchError, Result};
use std::fmt;
use std::str::FromStr;

/// An opponent the subject team is compared against.
///
/// `label` is the human-readable key used in the `h2h` section of the
/// output, so two rivals sharing a label end up in the same slot.
///
/// Parsed from `ID:LABEL` on the command line:
///
/// ```rust
/// use football_data_fetcher::Rival;
///
/// let rival: Rival = "529:Barcelona".parse().unwrap();
/// assert_eq!(rival.id.as_u32(), 529);
/// assert_eq!(rival.label, "Barcelona");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rival {
    pub id: TeamId,
    pub label: String,
}

impl Rival {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id: TeamId::new(id),
            label: label.into(),
        }
    }

    /// La Liga rivals compared against by default.
    pub fn defaults() -> Vec<Rival> {
        vec![
            Rival::new(529, "Barcelona"),
            Rival::new(530, "Atletico Madrid"),
            Rival::new(532, "Valencia"),
            Rival::new(536, "Sevilla"),
        ]
    }
}

impl fmt::Display for Rival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.label)
    }
}

impl FromStr for Rival {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || FetchError::InvalidRival {
            value: s.to_string(),
        };
        let (id, label) = s.split_once(':').ok_or_else(invalid)?;
        let label = label.trim();
        if label.is_empty() {
            return Err(invalid());
        }
        Ok(Self {
            id: id.parse()?,
            label: label.to_string(),
        })
    }
}
