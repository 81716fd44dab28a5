//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;
use types::{LeagueId, Rival, Season, SeasonMode, TeamId};

use crate::api::BASE_URL;

/// Default location of the aggregated JSON document.
pub const DEFAULT_OUTPUT_PATH: &str = "data/team_data.json";

/// Fetch team info, fixtures, squad, standings, statistics, head-to-head
/// history and next-match predictions from API-Football into one JSON file.
///
/// The API key is read from the `API_FOOTBALL_KEY` environment variable
/// (a `.env` file in the working directory is honoured).
#[derive(Debug, Parser)]
#[clap(name = "football-data-fetcher", version)]
pub struct FetchArgs {
    /// Where to write the aggregated JSON document.
    #[clap(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Subject team ID (541 = Real Madrid).
    #[clap(long, default_value_t = TeamId::new(541))]
    pub team_id: TeamId,

    /// League ID (140 = La Liga).
    #[clap(long, default_value_t = LeagueId::new(140))]
    pub league_id: LeagueId,

    /// Season year (e.g. 2024). Used as-is unless `--season-mode auto`.
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// `auto` asks the API for the current season, `fixed` uses `--season`.
    #[clap(long, value_enum, default_value_t = SeasonMode::Fixed)]
    pub season_mode: SeasonMode,

    /// Head-to-head opponent as `ID:LABEL` (repeatable): `--rival 529:Barcelona`.
    /// Defaults to Barcelona, Atletico Madrid, Valencia and Sevilla.
    #[clap(long = "rival", short = 'r')]
    pub rivals: Vec<Rival>,

    /// API base URL.
    #[clap(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Pause after every successful request, in milliseconds.
    #[clap(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Log request URLs and extraction details.
    #[clap(long, short)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = FetchArgs::parse_from(["football-data-fetcher"]);

        assert_eq!(args.output, PathBuf::from("data/team_data.json"));
        assert_eq!(args.team_id, TeamId::new(541));
        assert_eq!(args.league_id, LeagueId::new(140));
        assert_eq!(args.season.to_string(), "2024");
        assert_eq!(args.season_mode, SeasonMode::Fixed);
        assert!(args.rivals.is_empty());
        assert_eq!(args.base_url, "https://v3.football.api-sports.io");
        assert_eq!(args.delay_ms, 500);
        assert!(!args.verbose);
    }

    #[test]
    fn test_overrides() {
        let args = FetchArgs::parse_from([
            "football-data-fetcher",
            "-o",
            "out/barca.json",
            "--team-id",
            "529",
            "--season",
            "2023",
            "--season-mode",
            "auto",
            "--rival",
            "541:Real Madrid",
            "-r",
            "530:Atletico Madrid",
            "--delay-ms",
            "0",
        ]);

        assert_eq!(args.output, PathBuf::from("out/barca.json"));
        assert_eq!(args.team_id.as_u32(), 529);
        assert_eq!(args.season.as_u16(), 2023);
        assert_eq!(args.season_mode, SeasonMode::Auto);
        assert_eq!(
            args.rivals,
            vec![
                Rival::new(541, "Real Madrid"),
                Rival::new(530, "Atletico Madrid")
            ]
        );
        assert_eq!(args.delay_ms, 0);
    }

    #[test]
    fn test_rejects_bad_season() {
        let result = FetchArgs::try_parse_from(["football-data-fetcher", "--season", "24"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_rival() {
        let result = FetchArgs::try_parse_from(["football-data-fetcher", "--rival", "Sevilla"]);
        assert!(result.is_err());
    }
}
