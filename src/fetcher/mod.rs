//! Drives one fetch run and owns the team/league/season being fetched.

pub mod runner;
pub mod tasks;

use std::{path::Path, sync::Arc};

use log::{info, warn};
use serde_json::Value;

use crate::{
    api::{
        rate_limit::{FixedDelay, NoDelay, RateLimit},
        ApiClient,
    },
    config::FetchConfig,
    record::{AggregateRecord, Metadata},
    FetchError, LeagueId, Result, Rival, Season, SeasonMode, TeamId,
};
use runner::{run_tasks, Tally};
use tasks::{current_season, Task};

pub struct Fetcher {
    client: ApiClient,
    team_id: TeamId,
    league_id: LeagueId,
    season: Season,
    season_mode: SeasonMode,
    rivals: Vec<Rival>,
}

impl Fetcher {
    /// Build a fetcher that pauses `config.delay_ms` after each request.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let rate_limit: Arc<dyn RateLimit> = if config.delay_ms == 0 {
            Arc::new(NoDelay)
        } else {
            Arc::new(FixedDelay::from_millis(config.delay_ms))
        };
        Self::with_rate_limit(config, rate_limit)
    }

    pub fn with_rate_limit(config: &FetchConfig, rate_limit: Arc<dyn RateLimit>) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(&config.base_url, &config.api_key, rate_limit)?,
            team_id: config.team_id,
            league_id: config.league_id,
            season: config.season,
            season_mode: config.season_mode,
            rivals: config.rivals.clone(),
        })
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn metadata(&self) -> Metadata {
        Metadata {
            team_id: self.team_id,
            league_id: self.league_id,
            season: self.season,
        }
    }

    /// The ordered task list for this fetcher's rivals.
    pub fn tasks(&self) -> Vec<Task> {
        Task::standard(&self.rivals)
    }

    /// GET `endpoint`, logging the outcome. Any failure becomes `None`.
    pub async fn issue_request(&self, endpoint: &str, params: &[(&str, String)]) -> Option<Value> {
        info!("API: {}", endpoint);
        match self.client.get(endpoint, params).await {
            Ok(body) => Some(body),
            Err(FetchError::Api { errors, .. }) => {
                warn!("⚠ {} returned errors: {}", endpoint, errors);
                None
            }
            Err(e) => {
                warn!("⚠ Request to {} failed: {}", endpoint, e);
                None
            }
        }
    }

    /// Replace the season with the league's current one.
    ///
    /// Leaves the configured season in place when the lookup fails.
    pub async fn resolve_current_season(&mut self) -> bool {
        info!("Resolving current season for league {}...", self.league_id);
        let params = [
            ("id", self.league_id.to_string()),
            ("current", "true".to_string()),
        ];
        let resolved = self
            .issue_request("leagues", &params)
            .await
            .and_then(|body| current_season(&body));

        match resolved {
            Some(season) => {
                self.season = season;
                info!("✓ Season: {}/{}", season, season.as_u16() + 1);
                true
            }
            None => {
                warn!("⚠ Could not resolve current season, using {}", self.season);
                false
            }
        }
    }

    /// Run the full task list, then write the record to `output`.
    ///
    /// The record is written whatever the task outcomes; only a failed write
    /// is returned as an error.
    pub async fn run(&mut self, output: &Path) -> Result<Tally> {
        info!(
            "Fetching team {} in league {} (season mode: {})",
            self.team_id, self.league_id, self.season_mode
        );

        if self.season_mode == SeasonMode::Auto {
            self.resolve_current_season().await;
        }
        info!("Season: {}", self.season);

        let mut record = AggregateRecord::new();
        let tasks = self.tasks();
        let tally = run_tasks(self, &tasks, &mut record).await;

        info!("{}", tally);
        record.persist(output, self.metadata())?;
        info!("Saved {}", output.display());

        Ok(tally)
    }
}
