//! Type-safe wrappers for API-Football identifiers and run options.

pub mod ids;
pub mod rival;
pub mod season;

pub use ids::{FixtureId, LeagueId, TeamId};
pub use rival::Rival;
pub use season::{Season, SeasonMode};
