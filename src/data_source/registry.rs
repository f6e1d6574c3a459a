//! Static catalog of upstream endpoints: path templates, cache TTLs, and
//! base namespaces. Loaded at compile time, never mutated.

use std::fmt;
use std::time::Duration;

use crate::constants::cache_ttl;

/// Upstream API namespace an endpoint lives under. Each maps to a URL
/// segment appended to the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiBase {
    Scores,
    Stats,
    Odds,
    Projections,
}

impl ApiBase {
    /// URL segment for this namespace
    pub fn path_segment(self) -> &'static str {
        match self {
            ApiBase::Scores => "scores",
            ApiBase::Stats => "stats",
            ApiBase::Odds => "odds",
            ApiBase::Projections => "projections",
        }
    }
}

/// Symbolic names for every upstream endpoint the pipeline can fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointName {
    // Utility - temporal context bootstrap
    CurrentSeason,
    CurrentWeek,
    UpcomingWeek,
    LastCompletedWeek,
    AreGamesInProgress,
    ByeWeeks,
    // Reference data
    TeamsActive,
    Stadiums,
    // Players
    PlayersByTeam,
    DepthChartsActive,
    InjuriesAll,
    InjuriesByTeam,
    // Schedule & scores
    Schedules,
    Standings,
    ScoresByWeek,
    ScoresByDate,
    // Statistics
    TeamGameStats,
    TeamSeasonStats,
    PlayerGameStatsWeek,
    PlayerSeasonStats,
    // Box scores
    BoxScoreV3,
    // Betting
    PregameOddsWeek,
    LiveOddsWeek,
    PlayerPropsByTeam,
    LineMovement,
    // Projections
    PlayerProjectionsWeek,
    // News
    News,
    NewsByTeam,
}

impl EndpointName {
    /// Stable snake_case name used in cache keys and logs
    pub fn as_str(self) -> &'static str {
        match self {
            EndpointName::CurrentSeason => "current_season",
            EndpointName::CurrentWeek => "current_week",
            EndpointName::UpcomingWeek => "upcoming_week",
            EndpointName::LastCompletedWeek => "last_completed_week",
            EndpointName::AreGamesInProgress => "are_games_in_progress",
            EndpointName::ByeWeeks => "bye_weeks",
            EndpointName::TeamsActive => "teams_active",
            EndpointName::Stadiums => "stadiums",
            EndpointName::PlayersByTeam => "players_by_team",
            EndpointName::DepthChartsActive => "depth_charts_active",
            EndpointName::InjuriesAll => "injuries_all",
            EndpointName::InjuriesByTeam => "injuries_by_team",
            EndpointName::Schedules => "schedules",
            EndpointName::Standings => "standings",
            EndpointName::ScoresByWeek => "scores_by_week",
            EndpointName::ScoresByDate => "scores_by_date",
            EndpointName::TeamGameStats => "team_game_stats",
            EndpointName::TeamSeasonStats => "team_season_stats",
            EndpointName::PlayerGameStatsWeek => "player_game_stats_week",
            EndpointName::PlayerSeasonStats => "player_season_stats",
            EndpointName::BoxScoreV3 => "box_score_v3",
            EndpointName::PregameOddsWeek => "pregame_odds_week",
            EndpointName::LiveOddsWeek => "live_odds_week",
            EndpointName::PlayerPropsByTeam => "player_props_by_team",
            EndpointName::LineMovement => "line_movement",
            EndpointName::PlayerProjectionsWeek => "player_projections_week",
            EndpointName::News => "news",
            EndpointName::NewsByTeam => "news_by_team",
        }
    }

    /// Parses a symbolic endpoint name. Returns `None` for unknown names so
    /// string-keyed callers can skip rather than crash.
    pub fn parse(s: &str) -> Option<Self> {
        ENDPOINTS
            .iter()
            .find(|def| def.name.as_str() == s)
            .map(|def| def.name)
    }
}

impl fmt::Display for EndpointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One endpoint definition: symbolic name, path template with `{param}`
/// placeholders, cache TTL, and base namespace.
#[derive(Debug, Clone, Copy)]
pub struct EndpointDef {
    pub name: EndpointName,
    pub path: &'static str,
    pub ttl: Duration,
    pub base: ApiBase,
}

impl EndpointDef {
    /// Whether this endpoint depends on first locating a specific game.
    /// Such endpoints are deferred by the orchestrator until a score id
    /// has been discovered.
    pub fn needs_score_id(&self) -> bool {
        self.path.contains("{scoreid}")
    }
}

/// The full endpoint catalog, in registration order.
pub static ENDPOINTS: &[EndpointDef] = &[
    // Utility
    EndpointDef {
        name: EndpointName::CurrentSeason,
        path: "/json/CurrentSeason",
        ttl: Duration::from_secs(cache_ttl::UTILITY_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::CurrentWeek,
        path: "/json/CurrentWeek",
        ttl: Duration::from_secs(cache_ttl::UTILITY_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::UpcomingWeek,
        path: "/json/UpcomingWeek",
        ttl: Duration::from_secs(cache_ttl::UTILITY_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::LastCompletedWeek,
        path: "/json/LastCompletedWeek",
        ttl: Duration::from_secs(cache_ttl::UTILITY_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::AreGamesInProgress,
        path: "/json/AreAnyGamesInProgress",
        ttl: Duration::from_secs(cache_ttl::LIVE_SCORES_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::ByeWeeks,
        path: "/json/Byes/{season}",
        ttl: Duration::from_secs(cache_ttl::BYE_WEEKS_SECONDS),
        base: ApiBase::Scores,
    },
    // Reference
    EndpointDef {
        name: EndpointName::TeamsActive,
        path: "/json/Teams",
        ttl: Duration::from_secs(cache_ttl::REFERENCE_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::Stadiums,
        path: "/json/Stadiums",
        ttl: Duration::from_secs(cache_ttl::REFERENCE_SECONDS),
        base: ApiBase::Scores,
    },
    // Players
    EndpointDef {
        name: EndpointName::PlayersByTeam,
        path: "/json/Players/{team}",
        ttl: Duration::from_secs(cache_ttl::PLAYERS_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::DepthChartsActive,
        path: "/json/DepthCharts",
        ttl: Duration::from_secs(cache_ttl::STANDINGS_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::InjuriesAll,
        path: "/json/Injuries/{season}/{week}",
        ttl: Duration::from_secs(cache_ttl::STANDINGS_SECONDS),
        base: ApiBase::Stats,
    },
    EndpointDef {
        name: EndpointName::InjuriesByTeam,
        path: "/json/Injuries/{season}/{week}/{team}",
        ttl: Duration::from_secs(cache_ttl::STANDINGS_SECONDS),
        base: ApiBase::Stats,
    },
    // Schedule & scores
    EndpointDef {
        name: EndpointName::Schedules,
        path: "/json/Schedules/{season}",
        ttl: Duration::from_secs(cache_ttl::SCHEDULES_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::Standings,
        path: "/json/Standings/{season}",
        ttl: Duration::from_secs(cache_ttl::STANDINGS_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::ScoresByWeek,
        path: "/json/ScoresByWeek/{season}/{week}",
        ttl: Duration::from_secs(cache_ttl::LIVE_SCORES_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::ScoresByDate,
        path: "/json/ScoresByDate/{date}",
        ttl: Duration::from_secs(cache_ttl::LIVE_SCORES_SECONDS),
        base: ApiBase::Scores,
    },
    // Statistics
    EndpointDef {
        name: EndpointName::TeamGameStats,
        path: "/json/TeamGameStats/{season}/{week}",
        ttl: Duration::from_secs(cache_ttl::STANDINGS_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::TeamSeasonStats,
        path: "/json/TeamSeasonStats/{season}",
        ttl: Duration::from_secs(cache_ttl::STANDINGS_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::PlayerGameStatsWeek,
        path: "/json/PlayerGameStatsByWeek/{season}/{week}",
        ttl: Duration::from_secs(cache_ttl::STANDINGS_SECONDS),
        base: ApiBase::Stats,
    },
    EndpointDef {
        name: EndpointName::PlayerSeasonStats,
        path: "/json/PlayerSeasonStats/{season}",
        ttl: Duration::from_secs(cache_ttl::PLAYERS_SECONDS),
        base: ApiBase::Stats,
    },
    // Box scores
    EndpointDef {
        name: EndpointName::BoxScoreV3,
        path: "/json/BoxScoreByScoreIDV3/{scoreid}",
        ttl: Duration::from_secs(cache_ttl::BOX_SCORE_SECONDS),
        base: ApiBase::Stats,
    },
    // Betting
    EndpointDef {
        name: EndpointName::PregameOddsWeek,
        path: "/json/GameOddsByWeek/{season}/{week}",
        ttl: Duration::from_secs(cache_ttl::PREGAME_ODDS_SECONDS),
        base: ApiBase::Odds,
    },
    EndpointDef {
        name: EndpointName::LiveOddsWeek,
        path: "/json/LiveGameOddsByWeek/{season}/{week}",
        ttl: Duration::from_secs(cache_ttl::LIVE_SCORES_SECONDS),
        base: ApiBase::Odds,
    },
    EndpointDef {
        name: EndpointName::PlayerPropsByTeam,
        path: "/json/PlayerPropsByTeam/{season}/{week}/{team}",
        ttl: Duration::from_secs(cache_ttl::PROPS_SECONDS),
        base: ApiBase::Odds,
    },
    EndpointDef {
        name: EndpointName::LineMovement,
        path: "/json/GameOddsLineMovement/{scoreid}",
        ttl: Duration::from_secs(cache_ttl::PROPS_SECONDS),
        base: ApiBase::Odds,
    },
    // Projections
    EndpointDef {
        name: EndpointName::PlayerProjectionsWeek,
        path: "/json/PlayerGameProjectionStatsByWeek/{season}/{week}",
        ttl: Duration::from_secs(cache_ttl::PROJECTIONS_SECONDS),
        base: ApiBase::Projections,
    },
    // News
    EndpointDef {
        name: EndpointName::News,
        path: "/json/News",
        ttl: Duration::from_secs(cache_ttl::SCHEDULES_SECONDS),
        base: ApiBase::Scores,
    },
    EndpointDef {
        name: EndpointName::NewsByTeam,
        path: "/json/NewsByTeam/{team}",
        ttl: Duration::from_secs(cache_ttl::SCHEDULES_SECONDS),
        base: ApiBase::Scores,
    },
];

/// Looks up an endpoint definition by symbolic name. Returns `None` for
/// names absent from the catalog; callers must check and skip, never panic.
pub fn find(name: EndpointName) -> Option<&'static EndpointDef> {
    ENDPOINTS.iter().find(|def| def.name == name)
}

/// The whole catalog, for diagnostics and tests
pub fn all() -> &'static [EndpointDef] {
    ENDPOINTS
}
