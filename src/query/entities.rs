//! Entity extraction: team mentions, relative dates, and week markers.
//!
//! Deliberately naive substring scanning, not NLP. A short team code that
//! collides with an ordinary word is an accepted false-positive risk.

use chrono::{Days, Local, NaiveDate};
use std::collections::HashMap;

use crate::data_source::models::Team;

/// A relative-week marker ("this week" / "next week" / "last week")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekReference {
    Current,
    Next,
    Last,
}

/// Entities detected in a single question. Built fresh per question,
/// never persisted.
#[derive(Debug, Clone, Default)]
pub struct EntitySet {
    /// Matched team records, deduplicated by team code and sorted by code
    /// so downstream output is deterministic.
    pub teams: Vec<Team>,
    /// Calendar dates resolved from "today"/"tomorrow"/"yesterday"
    pub dates: Vec<NaiveDate>,
    pub week_reference: Option<WeekReference>,
    /// Discovered game identifier, filled in later by the orchestrator
    pub score_id: Option<i64>,
}

impl EntitySet {
    /// Team codes of every matched team
    pub fn team_keys(&self) -> Vec<&str> {
        self.teams.iter().map(|t| t.key.as_str()).collect()
    }
}

/// Scans question text for team mentions, date words, and week markers.
///
/// Team matching is case-insensitive substring containment over every name
/// variant (code, city, short name, full name). A team matched through
/// several variants appears once; results are sorted by team code.
pub fn extract_entities(question: &str, teams: &HashMap<String, Team>) -> EntitySet {
    let question_lower = question.to_lowercase();

    let mut matched: Vec<Team> = teams
        .values()
        .filter(|team| {
            team.name_variants()
                .iter()
                .filter(|v| !v.is_empty())
                .any(|variant| question_lower.contains(&variant.to_lowercase()))
        })
        .cloned()
        .collect();
    matched.sort_by(|a, b| a.key.cmp(&b.key));
    matched.dedup_by(|a, b| a.key == b.key);

    let today = Local::now().date_naive();
    let mut dates = Vec::new();
    if question_lower.contains("today") {
        dates.push(today);
    }
    if question_lower.contains("tomorrow") {
        if let Some(d) = today.checked_add_days(Days::new(1)) {
            dates.push(d);
        }
    }
    if question_lower.contains("yesterday") {
        if let Some(d) = today.checked_sub_days(Days::new(1)) {
            dates.push(d);
        }
    }

    // Later markers override earlier ones, matching registration order
    let mut week_reference = None;
    if question_lower.contains("this week") {
        week_reference = Some(WeekReference::Current);
    }
    if question_lower.contains("next week") {
        week_reference = Some(WeekReference::Next);
    }
    if question_lower.contains("last week") {
        week_reference = Some(WeekReference::Last);
    }

    EntitySet {
        teams: matched,
        dates,
        week_reference,
        score_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(key: &str, city: &str, name: &str) -> Team {
        Team {
            key: key.to_string(),
            city: city.to_string(),
            name: name.to_string(),
            full_name: format!("{city} {name}"),
            conference: None,
            division: None,
        }
    }

    fn lookup(teams: Vec<Team>) -> HashMap<String, Team> {
        teams.into_iter().map(|t| (t.key.clone(), t)).collect()
    }

    #[test]
    fn test_matches_team_by_full_name() {
        let teams = lookup(vec![team("KC", "Kansas City", "Chiefs")]);
        let entities = extract_entities("What's the score of the Kansas City Chiefs game?", &teams);
        assert_eq!(entities.team_keys(), vec!["KC"]);
    }

    #[test]
    fn test_matches_team_by_short_name_case_insensitive() {
        let teams = lookup(vec![team("KC", "Kansas City", "Chiefs")]);
        let entities = extract_entities("what's the score of the chiefs game?", &teams);
        assert_eq!(entities.team_keys(), vec!["KC"]);
    }

    #[test]
    fn test_multiple_variants_yield_one_record() {
        // "Kansas City Chiefs" matches city, name, and full name; the team
        // must still appear exactly once.
        let teams = lookup(vec![team("KC", "Kansas City", "Chiefs")]);
        let entities = extract_entities("Kansas City Chiefs KC chiefs", &teams);
        assert_eq!(entities.teams.len(), 1);
    }

    #[test]
    fn test_multiple_teams_sorted_by_key() {
        let teams = lookup(vec![
            team("PHI", "Philadelphia", "Eagles"),
            team("DAL", "Dallas", "Cowboys"),
        ]);
        let entities = extract_entities("Eagles versus Cowboys, who wins?", &teams);
        assert_eq!(entities.team_keys(), vec!["DAL", "PHI"]);
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        let teams = lookup(vec![team("KC", "Kansas City", "Chiefs")]);
        let entities = extract_entities("how does the salary cap work?", &teams);
        assert!(entities.teams.is_empty());
        assert!(entities.dates.is_empty());
        assert!(entities.week_reference.is_none());
    }

    #[test]
    fn test_date_words_resolve_to_dates() {
        let teams = HashMap::new();
        let today = Local::now().date_naive();

        let entities = extract_entities("any games today?", &teams);
        assert_eq!(entities.dates, vec![today]);

        let entities = extract_entities("who plays tomorrow", &teams);
        assert_eq!(entities.dates, vec![today + Days::new(1)]);

        let entities = extract_entities("scores from yesterday", &teams);
        assert_eq!(entities.dates, vec![today - Days::new(1)]);
    }

    #[test]
    fn test_week_markers() {
        let teams = HashMap::new();
        assert_eq!(
            extract_entities("who plays this week", &teams).week_reference,
            Some(WeekReference::Current)
        );
        assert_eq!(
            extract_entities("schedule for next week", &teams).week_reference,
            Some(WeekReference::Next)
        );
        assert_eq!(
            extract_entities("how did they do last week", &teams).week_reference,
            Some(WeekReference::Last)
        );
    }

    #[test]
    fn test_substring_false_positive_is_accepted() {
        // "buffalo wings" contains "Buffalo"; naive matching flags the team.
        // That imprecision is part of the contract.
        let teams = lookup(vec![team("BUF", "Buffalo", "Bills")]);
        let entities = extract_entities("best buffalo wings near the stadium", &teams);
        assert_eq!(entities.team_keys(), vec!["BUF"]);
    }
}
