//! Context assembly orchestrator.
//!
//! Takes one question, decides what data it needs, fetches it with
//! per-endpoint failure isolation, and renders a compact plain-text context
//! block. One failing endpoint loses one section, never the whole answer;
//! only a total fetch wipeout yields the apology fallback.

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::constants::SCORE_LOOKBACK_WEEKS;
use crate::data_source::bootstrap::{TemporalContext, bootstrap};
use crate::data_source::client::{ApiClient, Params};
use crate::data_source::models::Game;
use crate::data_source::registry::{self, EndpointDef, EndpointName};
use crate::error::AppError;
use crate::query::entities::{EntitySet, WeekReference, extract_entities};
use crate::query::router::{Route, route};
use crate::context::format::format_section;

/// Returned instead of a context block when every fetch failed
pub const FALLBACK_MESSAGE: &str = "Unable to fetch current NFL data. Please try again.";

/// One rendered section plus the endpoint that produced it
#[derive(Debug, Clone)]
pub struct Section {
    pub endpoint: EndpointName,
    pub text: String,
}

/// The assembled result: header, rendered sections, and the endpoints that
/// failed along the way.
#[derive(Debug, Clone)]
pub struct AssembledContext {
    pub header: String,
    pub sections: Vec<Section>,
    pub failed_endpoints: Vec<EndpointName>,
    pub routes: Vec<Route>,
    pub entities: EntitySet,
}

impl AssembledContext {
    /// Renders the final context block. Falls back to the apology line when
    /// nothing rendered and at least one fetch failed.
    pub fn render(&self) -> String {
        if self.sections.is_empty() && !self.failed_endpoints.is_empty() {
            return FALLBACK_MESSAGE.to_string();
        }
        let mut out = self.header.clone();
        if !self.entities.teams.is_empty() {
            out.push_str(&format!(
                "Teams mentioned: {}\n",
                self.entities.team_keys().join(", ")
            ));
        }
        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.text);
        }
        out
    }
}

/// Orchestrates the question-to-context pipeline
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    client: ApiClient,
}

impl ContextBuilder {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Builds the rendered context block for one question. The sole entry
    /// point for answer generation; never panics, never returns an error.
    pub async fn build_for_question(&self, question: &str, user_team_ids: &[String]) -> String {
        self.build_detailed(question, user_team_ids).await.render()
    }

    /// Full pipeline with the intermediate products exposed.
    #[instrument(skip(self, user_team_ids))]
    pub async fn build_detailed(
        &self,
        question: &str,
        user_team_ids: &[String],
    ) -> AssembledContext {
        let ctx = bootstrap(&self.client).await;
        let routes = route(question);
        let mut entities = extract_entities(question, &ctx.teams);

        // Default-substitution policy: a question with no team mention is
        // answered about the asker's favorite teams instead.
        if entities.teams.is_empty() {
            for key in user_team_ids {
                if let Some(team) = ctx.teams.get(key) {
                    debug!("No team mentioned, falling back to favorite team {key}");
                    entities.teams.push(team.clone());
                }
            }
        }

        let mut sections = Vec::new();
        let mut failed = Vec::new();
        let mut deferred = Vec::new();

        for name in dedupe_endpoints(&routes) {
            let Some(def) = registry::find(name) else {
                warn!("Route names unknown endpoint {name}, skipping");
                continue;
            };
            if def.needs_score_id() {
                deferred.push(def);
                continue;
            }
            for params in build_params(def, &ctx, &entities) {
                match self.fetch_payload(def, &params, &ctx).await {
                    Ok(payload) => {
                        let text = format_section(name, &payload, &entities);
                        if !text.is_empty() {
                            sections.push(Section { endpoint: name, text });
                        }
                    }
                    Err(e) => {
                        warn!("Skipping section {name}: {e}");
                        failed.push(name);
                    }
                }
            }
        }

        if !deferred.is_empty() {
            self.fetch_deferred(&deferred, &ctx, &mut entities, &mut sections, &mut failed)
                .await;
        }

        info!(
            "Assembled context: {} sections, {} failed endpoints",
            sections.len(),
            failed.len()
        );
        AssembledContext {
            header: format_header(&ctx),
            sections,
            failed_endpoints: failed,
            routes,
            entities,
        }
    }

    /// Fetches one endpoint's payload. Weekly scores additionally merge the
    /// previous week so "last game" questions spanning a week boundary
    /// still find their game.
    async fn fetch_payload(
        &self,
        def: &EndpointDef,
        params: &Params,
        ctx: &TemporalContext,
    ) -> Result<Value, AppError> {
        let payload = self.client.fetch(def.name, params).await?;
        if def.name != EndpointName::ScoresByWeek {
            return Ok(payload);
        }

        let week: u32 = params
            .get("week")
            .and_then(|w| w.parse().ok())
            .unwrap_or(ctx.week);
        if week <= 1 {
            return Ok(payload);
        }

        let mut prev_params = params.clone();
        prev_params.insert("week", (week - 1).to_string());
        match self.client.fetch(def.name, &prev_params).await {
            Ok(prev) => Ok(merge_game_arrays(prev, payload)),
            Err(e) => {
                // The current week alone is still a usable answer
                warn!("Previous-week score merge failed: {e}");
                Ok(payload)
            }
        }
    }

    /// Resolves a score id and fetches the endpoints that were waiting for
    /// one. Without a located game these sections are silently skipped;
    /// that is an absent answer, not a failure.
    async fn fetch_deferred(
        &self,
        deferred: &[&'static EndpointDef],
        ctx: &TemporalContext,
        entities: &mut EntitySet,
        sections: &mut Vec<Section>,
        failed: &mut Vec<EndpointName>,
    ) {
        if entities.score_id.is_none() {
            entities.score_id = self.locate_recent_final(ctx, entities).await;
        }
        let Some(score_id) = entities.score_id else {
            debug!("No completed game located, skipping score-id endpoints");
            return;
        };

        for def in deferred {
            let mut params = Params::new();
            params.insert("scoreid", score_id.to_string());
            match self.client.fetch(def.name, &params).await {
                Ok(payload) => {
                    let text = format_section(def.name, &payload, entities);
                    if !text.is_empty() {
                        sections.push(Section {
                            endpoint: def.name,
                            text,
                        });
                    }
                }
                Err(e) => {
                    warn!("Skipping deferred section {}: {e}", def.name);
                    failed.push(def.name);
                }
            }
        }
    }

    /// Scans recent weeks, newest first, for the latest completed game
    /// involving one of the mentioned teams.
    async fn locate_recent_final(
        &self,
        ctx: &TemporalContext,
        entities: &EntitySet,
    ) -> Option<i64> {
        if entities.teams.is_empty() {
            return None;
        }
        let keys = entities.team_keys();

        let first_week = ctx.week.saturating_sub(SCORE_LOOKBACK_WEEKS - 1).max(1);
        for week in (first_week..=ctx.week).rev() {
            let mut params = Params::new();
            params.insert("season", ctx.season.clone());
            params.insert("week", week.to_string());

            let games = match self.client.fetch(EndpointName::ScoresByWeek, &params).await {
                Ok(payload) => match serde_json::from_value::<Vec<Game>>(payload) {
                    Ok(games) => games,
                    Err(e) => {
                        warn!("Week {week} scores had unexpected shape: {e}");
                        continue;
                    }
                },
                Err(e) => {
                    warn!("Week {week} score lookup failed: {e}");
                    continue;
                }
            };

            if let Some(id) = latest_final_score_id(&games, &keys) {
                debug!("Located completed game {id} in week {week}");
                return Some(id);
            }
        }
        None
    }
}

/// Endpoints across all routes, first-seen order, no duplicates
fn dedupe_endpoints(routes: &[Route]) -> Vec<EndpointName> {
    let mut seen = Vec::new();
    for route in routes {
        for &endpoint in &route.endpoints {
            if !seen.contains(&endpoint) {
                seen.push(endpoint);
            }
        }
    }
    seen
}

/// Expands one endpoint into the param sets to fetch it with. Empty result
/// means the endpoint cannot be parameterized from this question and is
/// skipped. Team-templated endpoints fan out to one fetch per mentioned
/// team; date-templated endpoints need at least one resolved date.
fn build_params(def: &EndpointDef, ctx: &TemporalContext, entities: &EntitySet) -> Vec<Params> {
    let mut base = Params::new();
    if def.path.contains("{season}") {
        base.insert("season", ctx.season.clone());
    }
    if def.path.contains("{week}") {
        base.insert("week", effective_week(ctx.week, entities.week_reference).to_string());
    }

    if def.path.contains("{date}") {
        let Some(date) = entities.dates.first() else {
            return Vec::new();
        };
        base.insert("date", format_api_date(*date));
    }

    if def.path.contains("{team}") {
        return entities
            .teams
            .iter()
            .map(|team| {
                let mut params = base.clone();
                params.insert("team", team.key.clone());
                params
            })
            .collect();
    }

    vec![base]
}

/// Week number after applying a relative-week marker. Clamped at week 1.
fn effective_week(week: u32, reference: Option<WeekReference>) -> u32 {
    match reference {
        Some(WeekReference::Next) => week + 1,
        Some(WeekReference::Last) => week.saturating_sub(1).max(1),
        Some(WeekReference::Current) | None => week,
    }
}

/// Upstream date path segment, e.g. "2025-NOV-16"
fn format_api_date(date: chrono::NaiveDate) -> String {
    date.format("%Y-%b-%d").to_string().to_uppercase()
}

/// Concatenates two scoreboard arrays, older first. Non-array inputs pass
/// the newer payload through untouched.
fn merge_game_arrays(older: Value, newer: Value) -> Value {
    match (older, newer) {
        (Value::Array(mut a), Value::Array(b)) => {
            a.extend(b);
            Value::Array(a)
        }
        (_, newer) => newer,
    }
}

/// Score id of the most recently played final involving one of the teams
fn latest_final_score_id(games: &[Game], keys: &[&str]) -> Option<i64> {
    games
        .iter()
        .filter(|g| g.is_final() && g.involves_any(keys))
        .max_by(|a, b| a.when().cmp(b.when()))
        .and_then(|g| g.score_id)
}

/// The context block header: date, season, week, and live flag
fn format_header(ctx: &TemporalContext) -> String {
    format!(
        "CURRENT NFL CONTEXT ({})\nSeason: {}, Week: {}\nGames in progress: {}\n",
        chrono::Local::now().format("%A, %B %d, %Y"),
        ctx.season,
        ctx.week,
        if ctx.games_in_progress { "yes" } else { "no" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::models::Team;
    use serde_json::json;

    fn context_with_week(week: u32) -> TemporalContext {
        TemporalContext {
            season: "2025REG".to_string(),
            week,
            games_in_progress: false,
            teams: Default::default(),
        }
    }

    fn entities_with_teams(keys: &[&str]) -> EntitySet {
        EntitySet {
            teams: keys
                .iter()
                .map(|k| Team {
                    key: k.to_string(),
                    ..Team::default()
                })
                .collect(),
            ..EntitySet::default()
        }
    }

    #[test]
    fn test_dedupe_endpoints_first_seen_order() {
        let routes = route("what's the final score and who scored the touchdowns");
        let endpoints = dedupe_endpoints(&routes);
        // ScoresByWeek appears in both matched categories but once here
        let count = endpoints
            .iter()
            .filter(|e| **e == EndpointName::ScoresByWeek)
            .count();
        assert_eq!(count, 1);
        assert_eq!(endpoints[0], EndpointName::ScoresByWeek);
    }

    #[test]
    fn test_build_params_fills_season_and_week() {
        let def = registry::find(EndpointName::ScoresByWeek).unwrap();
        let params = build_params(def, &context_with_week(12), &EntitySet::default());
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].get("season").map(String::as_str), Some("2025REG"));
        assert_eq!(params[0].get("week").map(String::as_str), Some("12"));
    }

    #[test]
    fn test_build_params_week_reference_adjusts_week() {
        let def = registry::find(EndpointName::ScoresByWeek).unwrap();
        let mut entities = EntitySet::default();

        entities.week_reference = Some(WeekReference::Next);
        let params = build_params(def, &context_with_week(12), &entities);
        assert_eq!(params[0].get("week").map(String::as_str), Some("13"));

        entities.week_reference = Some(WeekReference::Last);
        let params = build_params(def, &context_with_week(12), &entities);
        assert_eq!(params[0].get("week").map(String::as_str), Some("11"));

        // Week 1 has no previous week to point at
        let params = build_params(def, &context_with_week(1), &entities);
        assert_eq!(params[0].get("week").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_build_params_team_endpoints_fan_out() {
        let def = registry::find(EndpointName::PlayersByTeam).unwrap();
        let params = build_params(def, &context_with_week(5), &entities_with_teams(&["KC", "PHI"]));
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].get("team").map(String::as_str), Some("KC"));
        assert_eq!(params[1].get("team").map(String::as_str), Some("PHI"));

        // No teams mentioned: team-templated endpoints are skipped entirely
        let params = build_params(def, &context_with_week(5), &EntitySet::default());
        assert!(params.is_empty());
    }

    #[test]
    fn test_build_params_date_endpoint_needs_a_date() {
        let def = registry::find(EndpointName::ScoresByDate).unwrap();
        assert!(build_params(def, &context_with_week(5), &EntitySet::default()).is_empty());

        let entities = EntitySet {
            dates: vec![chrono::NaiveDate::from_ymd_opt(2025, 11, 16).unwrap()],
            ..EntitySet::default()
        };
        let params = build_params(def, &context_with_week(5), &entities);
        assert_eq!(params[0].get("date").map(String::as_str), Some("2025-NOV-16"));
    }

    #[test]
    fn test_format_api_date_is_uppercased_month() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_api_date(date), "2025-JAN-05");
    }

    #[test]
    fn test_merge_game_arrays() {
        let merged = merge_game_arrays(json!([1, 2]), json!([3]));
        assert_eq!(merged, json!([1, 2, 3]));

        // A failed older payload shape falls back to the newer one
        let merged = merge_game_arrays(json!(null), json!([3]));
        assert_eq!(merged, json!([3]));
    }

    #[test]
    fn test_latest_final_score_id_picks_most_recent() {
        let games: Vec<Game> = serde_json::from_value(json!([
            {"HomeTeam": "KC", "AwayTeam": "DEN", "Status": "Final",
             "Date": "2025-11-09", "ScoreID": 100},
            {"HomeTeam": "LV", "AwayTeam": "KC", "Status": "Final",
             "Date": "2025-11-16", "ScoreID": 200},
            {"HomeTeam": "KC", "AwayTeam": "BUF", "Status": "Scheduled",
             "Date": "2025-11-23", "ScoreID": 300}
        ]))
        .unwrap();
        assert_eq!(latest_final_score_id(&games, &["KC"]), Some(200));
        assert_eq!(latest_final_score_id(&games, &["PHI"]), None);
    }

    #[test]
    fn test_header_carries_season_week_and_live_flag() {
        let header = format_header(&context_with_week(12));
        assert!(header.contains("Season: 2025REG, Week: 12"));
        assert!(header.contains("Games in progress: no"));
    }

    #[test]
    fn test_render_falls_back_only_on_total_failure() {
        let assembled = AssembledContext {
            header: "H\n".to_string(),
            sections: vec![],
            failed_endpoints: vec![EndpointName::Standings],
            routes: vec![],
            entities: EntitySet::default(),
        };
        assert_eq!(assembled.render(), FALLBACK_MESSAGE);

        // Empty sections without failures is a valid quiet context
        let quiet = AssembledContext {
            header: "H\n".to_string(),
            sections: vec![],
            failed_endpoints: vec![],
            routes: vec![],
            entities: EntitySet::default(),
        };
        assert_eq!(quiet.render(), "H\n");

        // A failure next to a rendered section keeps the section
        let partial = AssembledContext {
            header: "H\n".to_string(),
            sections: vec![Section {
                endpoint: EndpointName::Standings,
                text: "STANDINGS:\n- Chiefs: 9-1\n".to_string(),
            }],
            failed_endpoints: vec![EndpointName::News],
            routes: vec![],
            entities: EntitySet::default(),
        };
        assert!(partial.render().contains("Chiefs: 9-1"));
    }
}
