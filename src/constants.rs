//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers so cache behavior, fetch limits,
//! and formatting caps stay auditable in one place.

#![allow(dead_code)]

/// Default total timeout for a single HTTP request in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Connect timeout for a single HTTP request in seconds
pub const HTTP_CONNECT_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 20;

/// Maximum number of characters of an upstream error body kept in error messages
pub const ERROR_BODY_SNIPPET_CHARS: usize = 200;

/// Capacity of the shared upstream response cache
pub const RESPONSE_CACHE_CAPACITY: usize = 256;

/// Cache TTL (Time To Live) values in seconds, per endpoint family.
/// Live scoreboards churn every few seconds; reference data barely moves.
pub mod cache_ttl {
    /// TTL for live score endpoints (scores by week/date, live odds, live flag)
    pub const LIVE_SCORES_SECONDS: u64 = 5;

    /// TTL for season/week utility endpoints
    pub const UTILITY_SECONDS: u64 = 300;

    /// TTL for schedules and news
    pub const SCHEDULES_SECONDS: u64 = 180;

    /// TTL for standings, injuries, team stats, depth charts
    pub const STANDINGS_SECONDS: u64 = 300;

    /// TTL for reference data (teams, stadiums)
    pub const REFERENCE_SECONDS: u64 = 14400;

    /// TTL for rosters and player season stats
    pub const PLAYERS_SECONDS: u64 = 3600;

    /// TTL for bye week tables
    pub const BYE_WEEKS_SECONDS: u64 = 900;

    /// TTL for pregame odds
    pub const PREGAME_ODDS_SECONDS: u64 = 30;

    /// TTL for player props and line movement history
    pub const PROPS_SECONDS: u64 = 60;

    /// TTL for box scores of located games
    pub const BOX_SCORE_SECONDS: u64 = 60;

    /// TTL for weekly projections
    pub const PROJECTIONS_SECONDS: u64 = 300;
}

/// Defaults used when the bootstrap endpoints are unreachable. A stale
/// season/week is preferable to failing the whole question.
pub mod fallback {
    /// Season identifier assumed when the current-season endpoint fails
    pub const SEASON: &str = "2024REG";

    /// Week number assumed when the current-week endpoint fails
    pub const WEEK: u32 = 18;
}

/// How many weeks back (including the current one) to scan when locating a
/// completed game for score-id dependent endpoints.
pub const SCORE_LOOKBACK_WEEKS: u32 = 3;

/// Formatting caps that keep the assembled context bounded
pub mod limits {
    /// Maximum upcoming games shown in a schedule section
    pub const SCHEDULE_GAMES: usize = 5;

    /// Maximum completed games shown in a scores section
    pub const COMPLETED_GAMES: usize = 5;

    /// Maximum standings rows per division group
    pub const STANDINGS_PER_DIVISION: usize = 4;

    /// Maximum injury rows per team
    pub const INJURIES_PER_TEAM: usize = 10;

    /// Maximum news headlines
    pub const NEWS_ITEMS: usize = 5;

    /// Maximum rows in stat leaderboards
    pub const STAT_LEADERS: usize = 8;

    /// Maximum players listed per roster/depth-chart section
    pub const ROSTER_PLAYERS: usize = 10;

    /// Maximum player prop lines
    pub const PROP_LINES: usize = 8;

    /// Maximum sportsbooks tracked in a line movement section
    pub const LINE_MOVEMENT_BOOKS: usize = 5;

    /// Maximum rows in a projections section
    pub const PROJECTION_ROWS: usize = 8;

    /// Maximum venues listed
    pub const VENUES: usize = 6;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the upstream API key
    pub const API_KEY: &str = "SPORTSDATA_API_KEY";

    /// Environment variable for API base URL override
    pub const API_BASE_URL: &str = "SPORTSBIFF_API_BASE_URL";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "SPORTSBIFF_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "SPORTSBIFF_HTTP_TIMEOUT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ttl_constants_are_reasonable() {
        // Live data must expire faster than reference data for the cache to
        // be worth anything at all.
        assert!(cache_ttl::LIVE_SCORES_SECONDS < cache_ttl::SCHEDULES_SECONDS);
        assert!(cache_ttl::SCHEDULES_SECONDS <= cache_ttl::STANDINGS_SECONDS);
        assert!(cache_ttl::STANDINGS_SECONDS < cache_ttl::REFERENCE_SECONDS);
        assert!(cache_ttl::PREGAME_ODDS_SECONDS < cache_ttl::STANDINGS_SECONDS);
    }

    #[test]
    fn test_formatting_caps_stay_small() {
        // Every section cap should keep output in the 3-10 row band the
        // context budget assumes.
        for cap in [
            limits::SCHEDULE_GAMES,
            limits::COMPLETED_GAMES,
            limits::STANDINGS_PER_DIVISION,
            limits::INJURIES_PER_TEAM,
            limits::NEWS_ITEMS,
            limits::STAT_LEADERS,
            limits::ROSTER_PLAYERS,
            limits::PROP_LINES,
            limits::LINE_MOVEMENT_BOOKS,
            limits::PROJECTION_ROWS,
            limits::VENUES,
        ] {
            assert!((3..=10).contains(&cap), "cap {cap} outside expected band");
        }
    }

    #[test]
    fn test_lookback_covers_current_week() {
        assert!(SCORE_LOOKBACK_WEEKS >= 1);
    }

    #[test]
    fn test_timeouts_are_ordered() {
        assert!(HTTP_CONNECT_TIMEOUT_SECONDS < DEFAULT_HTTP_TIMEOUT_SECONDS);
    }
}
