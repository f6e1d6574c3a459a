//! Per-endpoint formatters. All pure functions: JSON in, a plain-text
//! section out, an empty string when there is nothing worth saying.

pub mod box_score;
pub mod injuries;
pub mod misc;
pub mod news;
pub mod odds;
pub mod roster;
pub mod schedule;
pub mod scores;
pub mod standings;
pub mod stats;

use serde_json::Value;

use crate::data_source::registry::EndpointName;
use crate::query::entities::EntitySet;

/// Dispatches a payload to the formatter for its endpoint. Endpoints with
/// no displayable section (the utility lookups) format to an empty string,
/// same as a payload with the wrong shape.
pub fn format_section(endpoint: EndpointName, payload: &Value, entities: &EntitySet) -> String {
    let keys = entities.team_keys();
    match endpoint {
        EndpointName::Schedules => schedule::format_schedule(payload, &keys),
        EndpointName::ScoresByWeek | EndpointName::ScoresByDate => {
            // A scores payload answers both "who won" and "who plays next",
            // so both sections are derived from it.
            let mut out = scores::format_scores(payload, &keys);
            out.push_str(&schedule::format_schedule(payload, &keys));
            out
        }
        EndpointName::Standings => standings::format_standings(payload, &keys),
        EndpointName::InjuriesAll | EndpointName::InjuriesByTeam => {
            injuries::format_injuries(payload, &keys)
        }
        EndpointName::News | EndpointName::NewsByTeam => news::format_news(payload, &keys),
        EndpointName::BoxScoreV3 => box_score::format_box_score(payload),
        EndpointName::TeamGameStats | EndpointName::TeamSeasonStats => {
            stats::format_team_stats(payload, &keys)
        }
        EndpointName::PlayerGameStatsWeek | EndpointName::PlayerSeasonStats => {
            stats::format_player_stats(payload, &keys)
        }
        EndpointName::PlayerProjectionsWeek => stats::format_projections(payload, &keys),
        EndpointName::PregameOddsWeek | EndpointName::LiveOddsWeek => {
            odds::format_odds(payload, &keys)
        }
        EndpointName::PlayerPropsByTeam => odds::format_props(payload, &keys),
        EndpointName::LineMovement => odds::format_line_movement(payload),
        EndpointName::PlayersByTeam => roster::format_roster(payload),
        EndpointName::DepthChartsActive => roster::format_depth_chart(payload, &keys),
        EndpointName::ByeWeeks => misc::format_bye_weeks(payload, &keys),
        EndpointName::Stadiums => {
            let cities: Vec<&str> = entities.teams.iter().map(|t| t.city.as_str()).collect();
            misc::format_venues(payload, &cities)
        }
        // Utility endpoints feed the bootstrap, not the rendered context
        EndpointName::CurrentSeason
        | EndpointName::CurrentWeek
        | EndpointName::UpcomingWeek
        | EndpointName::LastCompletedWeek
        | EndpointName::AreGamesInProgress
        | EndpointName::TeamsActive => String::new(),
    }
}
