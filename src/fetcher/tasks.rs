//! The fixed task list and the per-endpoint extraction rules.

use chrono::{DateTime, FixedOffset};
use log::{debug, info, warn};
use serde_json::{Map, Value};

use super::Fetcher;
use crate::{AggregateRecord, FetchError, FixtureId, Result, Rival, Season, TeamId};

/// Status code of a finished match.
pub const STATUS_FINISHED: &str = "FT";
/// Status code of a match that has not started.
pub const STATUS_NOT_STARTED: &str = "NS";

/// How many past meetings to request per rival.
pub const H2H_LAST: u32 = 10;

/// One named step of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    TeamInfo,
    Standings,
    Fixtures,
    Players,
    Statistics,
    HeadToHead(Rival),
    Predictions,
}

impl Task {
    /// The ordered task list for a run against `rivals`.
    ///
    /// Predictions come last because they read the fetched fixtures.
    pub fn standard(rivals: &[Rival]) -> Vec<Task> {
        let mut tasks = vec![
            Task::TeamInfo,
            Task::Standings,
            Task::Fixtures,
            Task::Players,
            Task::Statistics,
        ];
        tasks.extend(rivals.iter().cloned().map(Task::HeadToHead));
        tasks.push(Task::Predictions);
        tasks
    }

    pub fn name(&self) -> String {
        match self {
            Task::TeamInfo => "Team Info".to_string(),
            Task::Standings => "Standings".to_string(),
            Task::Fixtures => "Fixtures".to_string(),
            Task::Players => "Players".to_string(),
            Task::Statistics => "Statistics".to_string(),
            Task::HeadToHead(rival) => format!("H2H {}", rival.label),
            Task::Predictions => "Predictions".to_string(),
        }
    }

    pub async fn execute(&self, fetcher: &Fetcher, record: &mut AggregateRecord) -> Result<bool> {
        match self {
            Task::TeamInfo => fetcher.fetch_team_info(record).await,
            Task::Standings => fetcher.fetch_standings(record).await,
            Task::Fixtures => fetcher.fetch_fixtures(record).await,
            Task::Players => fetcher.fetch_players(record).await,
            Task::Statistics => fetcher.fetch_statistics(record).await,
            Task::HeadToHead(rival) => {
                fetcher
                    .fetch_head_to_head(record, rival.id, &rival.label)
                    .await
            }
            Task::Predictions => fetcher.fetch_predictions(record).await,
        }
    }
}

impl Fetcher {
    /// Request `endpoint` and hand back its `response` field when non-empty.
    async fn fetch_payload(&self, endpoint: &str, params: &[(&str, String)]) -> Option<Value> {
        let body = self.issue_request(endpoint, params).await?;
        let payload = take_payload(body);
        if payload.is_none() {
            warn!("⚠ {} returned no data", endpoint);
        }
        payload
    }

    fn season_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("team", self.team_id.to_string()),
            ("league", self.league_id.to_string()),
            ("season", self.season.to_string()),
        ]
    }

    pub async fn fetch_team_info(&self, record: &mut AggregateRecord) -> Result<bool> {
        info!("Fetching team info...");
        let Some(payload) = self
            .fetch_payload("teams", &[("id", self.team_id.to_string())])
            .await
        else {
            return Ok(false);
        };

        let team_info = extract_team_info(payload)?;
        if let Some(name) = team_info.get("team").and_then(|t| t.get("name")).and_then(Value::as_str) {
            info!("✓ Team: {}", name);
        }
        record.team_info = team_info;
        Ok(true)
    }

    pub async fn fetch_standings(&self, record: &mut AggregateRecord) -> Result<bool> {
        info!("Fetching standings...");
        let params = [
            ("league", self.league_id.to_string()),
            ("season", self.season.to_string()),
        ];
        let Some(payload) = self.fetch_payload("standings", &params).await else {
            return Ok(false);
        };

        let standings = extract_standings(payload)?;
        match team_rank(&standings, self.team_id) {
            Some(rank) => info!("✓ Standings: {} teams, position {}", standings.len(), rank),
            None => info!("✓ Standings: {} teams", standings.len()),
        }
        record.standings = standings;
        Ok(true)
    }

    pub async fn fetch_fixtures(&self, record: &mut AggregateRecord) -> Result<bool> {
        info!("Fetching fixtures...");
        let Some(payload) = self.fetch_payload("fixtures", &self.season_params()).await else {
            return Ok(false);
        };

        let fixtures = into_list(payload, "fixtures")?;
        info!(
            "✓ Fixtures: {} (finished: {}, upcoming: {})",
            fixtures.len(),
            count_with_status(&fixtures, STATUS_FINISHED),
            count_with_status(&fixtures, STATUS_NOT_STARTED)
        );
        record.fixtures = fixtures;
        Ok(true)
    }

    /// First page only.
    pub async fn fetch_players(&self, record: &mut AggregateRecord) -> Result<bool> {
        info!("Fetching players...");
        let mut params = self.season_params();
        params.push(("page", "1".to_string()));
        let Some(payload) = self.fetch_payload("players", &params).await else {
            return Ok(false);
        };

        let players = into_list(payload, "players")?;
        info!("✓ Players: {}", players.len());
        record.players = players;
        Ok(true)
    }

    pub async fn fetch_statistics(&self, record: &mut AggregateRecord) -> Result<bool> {
        info!("Fetching team statistics...");
        let Some(payload) = self
            .fetch_payload("teams/statistics", &self.season_params())
            .await
        else {
            return Ok(false);
        };

        record.statistics = into_object(payload, "statistics")?;
        info!("✓ Statistics fetched");
        Ok(true)
    }

    /// Last meetings against `opponent_id`, stored under `opponent_label`.
    pub async fn fetch_head_to_head(
        &self,
        record: &mut AggregateRecord,
        opponent_id: TeamId,
        opponent_label: &str,
    ) -> Result<bool> {
        info!("Fetching H2H: {}...", opponent_label);
        let params = [
            ("h2h", format!("{}-{}", self.team_id, opponent_id)),
            ("last", H2H_LAST.to_string()),
        ];
        let Some(payload) = self.fetch_payload("fixtures/headtohead", &params).await else {
            return Ok(false);
        };

        let matches = into_list(payload, "h2h")?;
        info!("✓ H2H {}: {} matches", opponent_label, matches.len());
        record.h2h.insert(opponent_label.to_string(), matches);
        Ok(true)
    }

    /// Predictions for the earliest not-started fixture in `record.fixtures`.
    pub async fn fetch_predictions(&self, record: &mut AggregateRecord) -> Result<bool> {
        info!("Fetching predictions...");
        if record.fixtures.is_empty() {
            warn!("⚠ No fixtures available, skipping predictions");
            return Ok(false);
        }

        let Some(fixture_id) = next_upcoming_fixture(&record.fixtures)? else {
            warn!("⚠ No upcoming fixtures");
            return Ok(false);
        };
        debug!("Next upcoming fixture: {}", fixture_id);

        let Some(payload) = self
            .fetch_payload("predictions", &[("fixture", fixture_id.to_string())])
            .await
        else {
            return Ok(false);
        };

        record.predictions = first_object(payload, "predictions")?;
        info!("✓ Predictions fetched for fixture {}", fixture_id);
        Ok(true)
    }
}

/// Take `body["response"]`, or `None` when it is missing or empty.
pub fn take_payload(mut body: Value) -> Option<Value> {
    let payload = body.get_mut("response")?.take();
    if is_empty(&payload) {
        None
    } else {
        Some(payload)
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Number(_) => false,
    }
}

fn into_list(payload: Value, context: &str) -> Result<Vec<Value>> {
    match payload {
        Value::Array(items) => Ok(items),
        _ => Err(FetchError::shape(format!("{}: response is not a list", context))),
    }
}

fn into_object(payload: Value, context: &str) -> Result<Map<String, Value>> {
    match payload {
        Value::Object(map) => Ok(map),
        _ => Err(FetchError::shape(format!("{}: response is not an object", context))),
    }
}

fn first_object(payload: Value, context: &str) -> Result<Map<String, Value>> {
    let first = into_list(payload, context)?
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::shape(format!("{}: empty response list", context)))?;
    into_object(first, context)
}

/// `{"team": ..., "venue": ...}` from the first `teams` entry.
pub fn extract_team_info(payload: Value) -> Result<Map<String, Value>> {
    let mut entry = first_object(payload, "team_info")?;
    let team = entry
        .remove("team")
        .filter(Value::is_object)
        .ok_or_else(|| FetchError::shape("team_info: missing team"))?;
    let venue = entry
        .remove("venue")
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(Map::new()));

    let mut info = Map::new();
    info.insert("team".to_string(), team);
    info.insert("venue".to_string(), venue);
    Ok(info)
}

/// The first standings group of the first league: `response[0].league.standings[0]`.
pub fn extract_standings(mut payload: Value) -> Result<Vec<Value>> {
    let group = payload
        .pointer_mut("/0/league/standings/0")
        .map(Value::take)
        .ok_or_else(|| FetchError::shape("standings: missing league.standings[0]"))?;
    into_list(group, "standings")
}

/// Rank of `team_id` in a standings group, if listed.
pub fn team_rank(standings: &[Value], team_id: TeamId) -> Option<u64> {
    standings
        .iter()
        .find(|row| row.pointer("/team/id").and_then(Value::as_u64) == Some(u64::from(team_id.as_u32())))
        .and_then(|row| row.get("rank").and_then(Value::as_u64))
}

pub fn fixture_status(fixture: &Value) -> Option<&str> {
    fixture.pointer("/fixture/status/short").and_then(Value::as_str)
}

pub fn count_with_status(fixtures: &[Value], status: &str) -> usize {
    fixtures
        .iter()
        .filter(|f| fixture_status(f) == Some(status))
        .count()
}

/// ID of the earliest fixture that has not started, by kick-off time.
///
/// Errors when an upcoming fixture has no parseable date or ID.
pub fn next_upcoming_fixture(fixtures: &[Value]) -> Result<Option<FixtureId>> {
    let mut upcoming: Vec<(DateTime<FixedOffset>, FixtureId)> = Vec::new();

    for fixture in fixtures
        .iter()
        .filter(|f| fixture_status(f) == Some(STATUS_NOT_STARTED))
    {
        let date = fixture
            .pointer("/fixture/date")
            .and_then(Value::as_str)
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
            .ok_or_else(|| FetchError::shape("predictions: upcoming fixture without a valid date"))?;
        let id = fixture
            .pointer("/fixture/id")
            .and_then(Value::as_u64)
            .ok_or_else(|| FetchError::shape("predictions: upcoming fixture without an id"))?;
        upcoming.push((date, FixtureId::new(id)));
    }

    upcoming.sort_by_key(|(date, _)| *date);
    Ok(upcoming.first().map(|(_, id)| *id))
}

/// Season from a `leagues?current=true` body.
///
/// Prefers the entry flagged `current`; otherwise the latest listed year.
pub fn current_season(body: &Value) -> Option<Season> {
    let seasons: Vec<&Value> = body
        .get("response")?
        .as_array()?
        .iter()
        .filter_map(|league| league.get("seasons").and_then(Value::as_array))
        .flatten()
        .collect();

    let year_of = |s: &Value| -> Option<Season> {
        s.get("year")
            .and_then(Value::as_u64)
            .and_then(|y| u16::try_from(y).ok())
            .and_then(|y| Season::new(y).ok())
    };

    seasons
        .iter()
        .copied()
        .find(|s| s.get("current").and_then(Value::as_bool) == Some(true))
        .and_then(year_of)
        .or_else(|| seasons.iter().copied().filter_map(year_of).max())
}
