//! Runtime configuration resolved from CLI arguments and the environment.

use std::path::PathBuf;

use crate::{
    api::BASE_URL,
    cli::{FetchArgs, DEFAULT_OUTPUT_PATH},
    FetchError, LeagueId, Result, Rival, Season, SeasonMode, TeamId, API_KEY_ENV_VAR,
};

/// Everything a [`Fetcher`](crate::fetcher::Fetcher) needs for one run.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub api_key: String,
    pub base_url: String,
    pub team_id: TeamId,
    pub league_id: LeagueId,
    pub season: Season,
    pub season_mode: SeasonMode,
    pub rivals: Vec<Rival>,
    pub output: PathBuf,
    pub delay_ms: u64,
}

impl FetchConfig {
    /// Defaults for Real Madrid in La Liga, season 2024, fixed season mode.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            team_id: TeamId::new(541),
            league_id: LeagueId::new(140),
            season: Season::default(),
            season_mode: SeasonMode::Fixed,
            rivals: Rival::defaults(),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delay_ms: 500,
        }
    }

    /// Combine parsed arguments with the API key from the environment.
    pub fn from_args(args: FetchArgs) -> Result<Self> {
        let api_key = resolve_api_key(std::env::var(API_KEY_ENV_VAR).ok())?;
        Ok(Self::with_api_key(args, api_key))
    }

    pub fn with_api_key(args: FetchArgs, api_key: String) -> Self {
        let rivals = if args.rivals.is_empty() {
            Rival::defaults()
        } else {
            args.rivals
        };

        Self {
            api_key,
            base_url: args.base_url,
            team_id: args.team_id,
            league_id: args.league_id,
            season: args.season,
            season_mode: args.season_mode,
            rivals,
            output: args.output,
            delay_ms: args.delay_ms,
        }
    }
}

/// Validate the credential read from `API_FOOTBALL_KEY`.
///
/// Missing or blank values are rejected so the run stops before any request.
pub fn resolve_api_key(value: Option<String>) -> Result<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(FetchError::MissingApiKey {
            env_var: API_KEY_ENV_VAR.to_string(),
        }),
    }
}
