//! Football Data Fetcher Library
//!
//! Pulls one team's data from the API-Football v3 service and writes it to a
//! single JSON document for static sites and dashboards.
//!
//! ## What gets fetched
//!
//! - **Team info**: club and venue details
//! - **Standings**: the league table for the season
//! - **Fixtures**: every league match of the season, played and upcoming
//! - **Players**: the first page of the squad with season statistics
//! - **Statistics**: team-level season statistics
//! - **Head-to-head**: the last 10 meetings with each configured rival
//! - **Predictions**: the API's prediction for the next upcoming match
//!
//! Each step runs on its own; a failed step leaves its section empty and
//! the run carries on. A run counts as successful when at least
//! [`MIN_SUCCESSFUL_TASKS`] steps succeed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use football_data_fetcher::{FetchConfig, Fetcher};
//!
//! # async fn example() -> football_data_fetcher::Result<()> {
//! let config = FetchConfig::new("your-api-key");
//! let mut fetcher = Fetcher::new(&config)?;
//! let tally = fetcher.run(&config.output).await?;
//! println!("{}", tally);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The binary reads the API key from the environment (or a `.env` file):
//! ```bash
//! export API_FOOTBALL_KEY=your-api-key
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod record;

// Re-export commonly used types
pub use cli::types::{FixtureId, LeagueId, Rival, Season, SeasonMode, TeamId};
pub use config::FetchConfig;
pub use error::{FetchError, Result};
pub use fetcher::{
    runner::{Tally, MIN_SUCCESSFUL_TASKS},
    Fetcher,
};
pub use record::{AggregateRecord, Metadata};

pub const API_KEY_ENV_VAR: &str = "API_FOOTBALL_KEY";
