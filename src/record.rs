//! The aggregated document written at the end of a run.

use std::{collections::BTreeMap, fs, path::Path};

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{LeagueId, Result, Season, TeamId};

/// Identifies which team, league and season the document describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub team_id: TeamId,
    pub league_id: LeagueId,
    pub season: Season,
}

/// Everything fetched in one run.
///
/// Every field starts empty and stays empty when its fetch fails, so the
/// serialized document always has the same nine keys. Field order is the
/// key order in the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateRecord {
    /// `{"team": {...}, "venue": {...}}`
    pub team_info: Map<String, Value>,
    pub players: Vec<Value>,
    pub fixtures: Vec<Value>,
    pub standings: Vec<Value>,
    pub statistics: Map<String, Value>,
    /// Match lists keyed by opponent label.
    pub h2h: BTreeMap<String, Vec<Value>>,
    pub predictions: Map<String, Value>,
    pub last_updated: Option<String>,
    pub metadata: Option<Metadata>,
}

impl AggregateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp `last_updated` and `metadata`, then write pretty-printed JSON
    /// to `path`, creating parent directories and replacing any old file.
    pub fn persist(&mut self, path: &Path, metadata: Metadata) -> Result<()> {
        self.last_updated = Some(timestamp());
        self.metadata = Some(metadata);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // serde_json leaves non-ASCII text unescaped
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Current UTC time as RFC 3339, e.g. `2026-10-19T08:30:00Z`.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests;
