//! Topic routing: maps question text to the endpoints worth fetching.
//!
//! The catalog is an ordered table of (patterns, endpoints, context kinds)
//! rules so precedence stays auditable and each rule is unit-testable.
//! Every matching category is returned, not just the best one; redundant
//! endpoint requests across categories are deduplicated downstream and
//! absorbed by the response cache.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::data_source::registry::EndpointName;

/// Topic categories a question can route to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Schedule,
    Scores,
    GameDetails,
    LiveGame,
    Standings,
    Injuries,
    News,
    PlayerStats,
    TeamStats,
    BettingOdds,
    RosterDepth,
    ByeWeek,
    Venue,
    PlayerProps,
    LineMovement,
    Fantasy,
    Projections,
    /// Fallback when nothing matches: broad schedule + standings context
    General,
}

/// Context kinds a category needs to parameterize its endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    Teams,
    Season,
    Week,
    Date,
}

/// One matched route: category plus the endpoints it wants, in order
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub category: Category,
    pub endpoints: Vec<EndpointName>,
    pub required_context: Vec<ContextKind>,
}

struct RouteRule {
    category: Category,
    patterns: Vec<Regex>,
    endpoints: &'static [EndpointName],
    required_context: &'static [ContextKind],
}

fn rule(
    category: Category,
    patterns: &[&str],
    endpoints: &'static [EndpointName],
    required_context: &'static [ContextKind],
) -> RouteRule {
    RouteRule {
        category,
        patterns: patterns
            .iter()
            .map(|p| Regex::new(p).expect("route pattern must compile"))
            .collect(),
        endpoints,
        required_context,
    }
}

use ContextKind::{Date, Season, Teams, Week};
use EndpointName::*;

/// The ordered category catalog. Registration order is the processing
/// order; it determines section order in the assembled context.
static ROUTE_RULES: Lazy<Vec<RouteRule>> = Lazy::new(|| {
    vec![
        rule(
            Category::Schedule,
            &[
                r"(?i)when.*(play|game|next)",
                r"(?i)what time",
                r"(?i)schedule",
                r"(?i)who.*(play|face|against)",
            ],
            &[Schedules, ScoresByWeek],
            &[Teams, Season, Week],
        ),
        rule(
            Category::Scores,
            &[
                r"(?i)score",
                r"(?i)win|won|lost|lose",
                r"(?i)result",
                r"(?i)beat",
                r"(?i)final",
                r"(?i)last.*game",
                r"(?i)previous.*game",
                r"(?i)recent.*game",
                r"(?i)how did.*do",
                r"(?i)last\s+\w+\s+game",
            ],
            &[ScoresByWeek, ScoresByDate],
            &[Teams, Season, Week, Date],
        ),
        rule(
            Category::GameDetails,
            &[
                r"(?i)touchdown",
                r"(?i)\btd\b",
                r"(?i)who scored",
                r"(?i)first.*score",
                r"(?i)scoring",
                r"(?i)box score",
                r"(?i)how.*score",
                r"(?i)plays?\b",
            ],
            &[ScoresByWeek, BoxScoreV3],
            &[Teams, Season, Week],
        ),
        rule(
            Category::LiveGame,
            &[
                r"(?i)\blive\b",
                r"(?i)current.*game",
                r"(?i)right now",
                r"(?i)happening",
                r"(?i)playing now",
            ],
            &[AreGamesInProgress, ScoresByWeek],
            &[Teams, Season, Week],
        ),
        rule(
            Category::Standings,
            &[
                r"(?i)standing",
                r"(?i)record",
                r"(?i)playoff",
                r"(?i)division",
                r"(?i)conference",
                r"(?i)\brank",
            ],
            &[Standings],
            &[Teams, Season],
        ),
        rule(
            Category::Injuries,
            &[
                r"(?i)injur",
                r"(?i)hurt",
                r"(?i)\bout\b",
                r"(?i)questionable",
                r"(?i)doubtful",
                r"(?i)probable",
                r"(?i)\bir\b",
            ],
            &[InjuriesAll, InjuriesByTeam],
            &[Teams, Season, Week],
        ),
        rule(
            Category::News,
            &[
                r"(?i)news",
                r"(?i)update",
                r"(?i)latest",
                r"(?i)report",
            ],
            &[News, NewsByTeam],
            &[Teams],
        ),
        rule(
            Category::PlayerStats,
            &[
                r"(?i)passing yards",
                r"(?i)rushing yards",
                r"(?i)receiving",
                r"(?i)how many (yards|touchdowns|catches|interceptions)",
                r"(?i)stat line",
                r"(?i)qb rating",
                r"(?i)player stats",
            ],
            &[PlayerGameStatsWeek, PlayerSeasonStats],
            &[Teams, Season, Week],
        ),
        rule(
            Category::TeamStats,
            &[
                r"(?i)team stats",
                r"(?i)total yards",
                r"(?i)yards per game",
                r"(?i)points per game",
                r"(?i)(offense|defense).*(rank|stats)",
            ],
            &[TeamGameStats, TeamSeasonStats],
            &[Teams, Season, Week],
        ),
        rule(
            Category::BettingOdds,
            &[
                r"(?i)spread",
                r"(?i)moneyline",
                r"(?i)over.?under",
                r"(?i)\bodds\b",
                r"(?i)\btotal\b",
                r"(?i)\bbet\b",
                r"(?i)sportsbook",
            ],
            &[PregameOddsWeek, LiveOddsWeek],
            &[Teams, Season, Week],
        ),
        rule(
            Category::RosterDepth,
            &[
                r"(?i)depth chart",
                r"(?i)roster",
                r"(?i)starting (lineup|qb|quarterback|rb|running back)",
                r"(?i)backup",
                r"(?i)who starts",
            ],
            &[DepthChartsActive, PlayersByTeam],
            &[Teams],
        ),
        rule(
            Category::ByeWeek,
            &[r"(?i)\bbye\b"],
            &[ByeWeeks],
            &[Teams, Season],
        ),
        rule(
            Category::Venue,
            &[
                r"(?i)stadium",
                r"(?i)venue",
                r"(?i)where.*(play|game)\b",
                r"(?i)home field",
            ],
            &[Stadiums],
            &[Teams],
        ),
        rule(
            Category::PlayerProps,
            &[
                r"(?i)\bprops?\b",
                r"(?i)prop bet",
                r"(?i)anytime (td|touchdown)",
                r"(?i)player (over|under)",
            ],
            &[PlayerPropsByTeam],
            &[Teams, Season, Week],
        ),
        rule(
            Category::LineMovement,
            &[
                r"(?i)line (move|moved|movement)",
                r"(?i)opening line",
                r"(?i)where did the line open",
                r"(?i)sharp money",
            ],
            &[ScoresByWeek, LineMovement],
            &[Teams, Season, Week],
        ),
        rule(
            Category::Fantasy,
            &[
                r"(?i)fantasy",
                r"(?i)\bdfs\b",
                r"(?i)start or sit",
                r"(?i)sit or start",
            ],
            &[PlayerProjectionsWeek],
            &[Season, Week],
        ),
        rule(
            Category::Projections,
            &[
                r"(?i)project(ed|ion)",
                r"(?i)expected points",
                r"(?i)forecast",
            ],
            &[PlayerProjectionsWeek],
            &[Season, Week],
        ),
    ]
});

/// Routes a question to every matching category, in catalog order.
/// If nothing matches, returns the general fallback (schedule + standings)
/// so the pipeline always has something to fetch.
pub fn route(question: &str) -> Vec<Route> {
    let mut matched: Vec<Route> = ROUTE_RULES
        .iter()
        .filter(|rule| rule.patterns.iter().any(|p| p.is_match(question)))
        .map(|rule| Route {
            category: rule.category,
            endpoints: rule.endpoints.to_vec(),
            required_context: rule.required_context.to_vec(),
        })
        .collect();

    if matched.is_empty() {
        matched.push(Route {
            category: Category::General,
            endpoints: vec![Schedules, Standings],
            required_context: vec![Teams, Season, Week],
        });
    }

    debug!(
        "Routed question to {:?}",
        matched.iter().map(|r| r.category).collect::<Vec<_>>()
    );
    matched
}
