//! Temporal context bootstrap: what season and week it is right now,
//! whether games are live, and the team lookup table.
//!
//! This stage must never abort the pipeline. Every upstream failure here
//! degrades to a hardcoded default; stale context beats no answer.

use std::collections::HashMap;
use tracing::{debug, instrument, warn};

use crate::constants::fallback;
use crate::data_source::client::{ApiClient, Params};
use crate::data_source::models::Team;
use crate::data_source::registry::EndpointName;
use crate::error::AppError;

/// Read-only temporal context, rebuilt per question (the per-endpoint cache
/// keeps rebuilds cheap). Downstream stages never mutate it.
#[derive(Debug, Clone)]
pub struct TemporalContext {
    /// Season identifier, e.g. "2025REG"
    pub season: String,
    /// Current week number within the season
    pub week: u32,
    /// Whether any game is being played right now
    pub games_in_progress: bool,
    /// Active teams indexed by team code
    pub teams: HashMap<String, Team>,
}

impl TemporalContext {
    /// The hardcoded context used when the utility endpoints are down
    pub fn fallback() -> Self {
        Self {
            season: fallback::SEASON.to_string(),
            week: fallback::WEEK,
            games_in_progress: false,
            teams: HashMap::new(),
        }
    }
}

/// Resolves the current season/week/live flag and builds the team lookup.
/// Never returns an error; failures degrade to `TemporalContext::fallback`.
#[instrument(skip(client))]
pub async fn bootstrap(client: &ApiClient) -> TemporalContext {
    match try_bootstrap(client).await {
        Ok(context) => {
            debug!(
                "Bootstrapped temporal context: season={}, week={}, live={}, teams={}",
                context.season,
                context.week,
                context.games_in_progress,
                context.teams.len()
            );
            context
        }
        Err(e) => {
            warn!("Temporal bootstrap failed, using fallback context: {e}");
            TemporalContext::fallback()
        }
    }
}

async fn try_bootstrap(client: &ApiClient) -> Result<TemporalContext, AppError> {
    let no_params = Params::new();

    // Season, week, and live flag are independent lookups
    let (season_result, week_result, live_result) = tokio::join!(
        client.fetch(EndpointName::CurrentSeason, &no_params),
        client.fetch(EndpointName::CurrentWeek, &no_params),
        client.fetch(EndpointName::AreGamesInProgress, &no_params),
    );

    // The season endpoint returns the bare year; the season identifier
    // appends the regular-season suffix.
    let year = season_result?.as_i64().ok_or_else(|| {
        AppError::api_unexpected_structure("current season endpoint did not return a year")
    })?;
    let season = format!("{year}REG");

    let week = week_result?.as_u64().ok_or_else(|| {
        AppError::api_unexpected_structure("current week endpoint did not return a number")
    })? as u32;

    // A broken live flag should not sink the whole bootstrap
    let games_in_progress = match live_result {
        Ok(value) => value.as_bool().unwrap_or(false),
        Err(e) => {
            warn!("Games-in-progress check failed, assuming none: {e}");
            false
        }
    };

    Ok(TemporalContext {
        season,
        week,
        games_in_progress,
        teams: active_teams_lookup(client).await,
    })
}

/// Fetches the active team list and indexes it by team code. On failure,
/// returns an empty map; callers then get zero entity matches, not a crash.
pub async fn active_teams_lookup(client: &ApiClient) -> HashMap<String, Team> {
    let no_params = Params::new();
    match client.fetch(EndpointName::TeamsActive, &no_params).await {
        Ok(value) => match serde_json::from_value::<Vec<Team>>(value) {
            Ok(teams) => teams
                .into_iter()
                .map(|team| (team.key.clone(), team))
                .collect(),
            Err(e) => {
                warn!("Active teams payload had unexpected shape: {e}");
                HashMap::new()
            }
        },
        Err(e) => {
            warn!("Failed to fetch active teams: {e}");
            HashMap::new()
        }
    }
}
