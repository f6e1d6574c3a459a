//! Serde models for upstream payloads.
//!
//! Upstream responses are fetched as raw JSON; formatters deserialize the
//! slices they need through these models and tolerate missing fields, since
//! the upstream adds and drops fields without notice.

use serde::{Deserialize, Serialize};

/// An NFL team record from the active-teams endpoint. Keyed by `key`
/// (the short code, e.g. "KC") in the temporal context lookup.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct Team {
    pub key: String,
    pub city: String,
    pub name: String,
    pub full_name: String,
    pub conference: Option<String>,
    pub division: Option<String>,
}

impl Team {
    /// All name variants a question might mention this team by
    pub fn name_variants(&self) -> [&str; 4] {
        [&self.key, &self.city, &self.name, &self.full_name]
    }
}

/// One scoreboard row (scores by week/date, schedules)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Game {
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i64>,
    pub away_score: Option<i64>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub date_time: Option<String>,
    pub quarter: Option<String>,
    pub time_remaining: Option<String>,
    pub channel: Option<String>,
    pub week: Option<u32>,
    #[serde(rename = "ScoreID")]
    pub score_id: Option<i64>,
}

impl Game {
    /// Whether the game has reached a terminal status ("Final", "F/OT", ...)
    pub fn is_final(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains("final") || s == "F/OT")
    }

    /// Whether the game is currently being played
    pub fn is_in_progress(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains("progress"))
    }

    /// Whether either side matches one of the given team keys
    pub fn involves_any(&self, keys: &[&str]) -> bool {
        keys.contains(&self.home_team.as_str()) || keys.contains(&self.away_team.as_str())
    }

    /// Best-effort kickoff timestamp for sorting and display
    pub fn when(&self) -> &str {
        self.date
            .as_deref()
            .or(self.date_time.as_deref())
            .unwrap_or("")
    }
}

/// A standings row for one team
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Standing {
    pub team: String,
    pub name: Option<String>,
    pub wins: i64,
    pub losses: i64,
    pub ties: i64,
    pub conference: Option<String>,
    pub division: Option<String>,
}

impl Standing {
    /// Record string like "11-3" or "11-3-1"
    pub fn record(&self) -> String {
        if self.ties > 0 {
            format!("{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            format!("{}-{}", self.wins, self.losses)
        }
    }
}

/// One injury report row
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Injury {
    pub name: Option<String>,
    pub player_name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub injury_status: Option<String>,
    pub body_part: Option<String>,
    pub injury: Option<String>,
}

impl Injury {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.player_name.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn display_status(&self) -> &str {
        self.status
            .as_deref()
            .or(self.injury_status.as_deref())
            .unwrap_or("Out")
    }

    pub fn display_detail(&self) -> &str {
        self.body_part
            .as_deref()
            .or(self.injury.as_deref())
            .unwrap_or("")
    }
}

/// One news item
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct NewsItem {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub source: Option<String>,
    pub team: Option<String>,
    pub updated: Option<String>,
}

impl NewsItem {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.headline.as_deref())
            .unwrap_or("")
    }
}

/// A box score response: game summary plus ordered scoring plays
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoxScore {
    pub score: Option<Game>,
    pub scoring_plays: Vec<ScoringPlay>,
}

/// One scoring play inside a box score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScoringPlay {
    pub sequence: Option<i64>,
    pub quarter: Option<String>,
    pub time_remaining: Option<String>,
    pub team: Option<String>,
    pub play_description: Option<String>,
    pub away_score: Option<i64>,
    pub home_score: Option<i64>,
}

/// A team stat line (game or season aggregate)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct TeamStat {
    pub team: String,
    pub score: Option<f64>,
    pub opponent_score: Option<f64>,
    pub total_yards: Option<f64>,
    pub passing_yards: Option<f64>,
    pub rushing_yards: Option<f64>,
    pub turnovers: Option<f64>,
}

/// A player stat line (weekly or season aggregate)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlayerStat {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub passing_yards: Option<f64>,
    pub rushing_yards: Option<f64>,
    pub receiving_yards: Option<f64>,
    pub touchdowns: Option<f64>,
    pub fantasy_points: Option<f64>,
}

impl PlayerStat {
    /// The single most relevant yardage figure for a compact stat line
    pub fn headline_yards(&self) -> Option<(&'static str, f64)> {
        let candidates = [
            ("passing", self.passing_yards),
            ("rushing", self.rushing_yards),
            ("receiving", self.receiving_yards),
        ];
        candidates
            .into_iter()
            .filter_map(|(label, v)| v.map(|y| (label, y)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Game odds across sportsbooks. Pregame and live endpoints share the shape;
/// line movement history adds an update timestamp per book entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct GameOdds {
    pub home_team: String,
    pub away_team: String,
    pub date_time: Option<String>,
    pub pregame_odds: Vec<BookOdds>,
    pub live_odds: Vec<BookOdds>,
}

impl GameOdds {
    /// All book entries regardless of pregame/live origin
    pub fn books(&self) -> impl Iterator<Item = &BookOdds> {
        self.pregame_odds.iter().chain(self.live_odds.iter())
    }

    /// The representative line: an explicitly aggregated "consensus" book
    /// when present, otherwise the first book listed.
    pub fn consensus(&self) -> Option<&BookOdds> {
        self.books()
            .find(|b| b.sportsbook.to_lowercase().contains("consensus"))
            .or_else(|| self.books().next())
    }
}

/// One sportsbook's lines for a game
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct BookOdds {
    pub sportsbook: String,
    pub home_point_spread: Option<f64>,
    pub away_point_spread: Option<f64>,
    pub home_money_line: Option<i64>,
    pub away_money_line: Option<i64>,
    pub over_under: Option<f64>,
    pub over_payout: Option<i64>,
    pub under_payout: Option<i64>,
    pub updated: Option<String>,
}

/// One depth chart row
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct DepthChartEntry {
    pub team: Option<String>,
    pub name: Option<String>,
    pub position: Option<String>,
    pub position_category: Option<String>,
    pub depth_order: Option<i64>,
}

/// One roster player
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct RosterPlayer {
    pub name: Option<String>,
    pub position: Option<String>,
    pub number: Option<i64>,
    pub status: Option<String>,
    pub experience: Option<i64>,
}

/// One bye-week row
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ByeWeek {
    pub team: String,
    pub week: Option<u32>,
}

/// One stadium record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Stadium {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub capacity: Option<i64>,
    pub playing_surface: Option<String>,
}

/// One player prop line
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlayerProp {
    pub name: Option<String>,
    pub team: Option<String>,
    pub description: Option<String>,
    pub over_under: Option<f64>,
    pub over_payout: Option<i64>,
    pub under_payout: Option<i64>,
}

/// One weekly projection row
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct Projection {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub fantasy_points: Option<f64>,
    pub passing_yards: Option<f64>,
    pub rushing_yards: Option<f64>,
    pub receiving_yards: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_deserializes_pascal_case() {
        let team: Team = serde_json::from_value(json!({
            "Key": "KC",
            "City": "Kansas City",
            "Name": "Chiefs",
            "FullName": "Kansas City Chiefs",
            "Conference": "AFC",
            "Division": "West"
        }))
        .expect("valid team");
        assert_eq!(team.key, "KC");
        assert_eq!(team.full_name, "Kansas City Chiefs");
        assert!(team.name_variants().contains(&"Kansas City"));
    }

    #[test]
    fn test_game_score_id_rename() {
        let game: Game = serde_json::from_value(json!({
            "HomeTeam": "KC",
            "AwayTeam": "DEN",
            "Status": "Final",
            "ScoreID": 19345
        }))
        .expect("valid game");
        assert_eq!(game.score_id, Some(19345));
        assert!(game.is_final());
        assert!(game.involves_any(&["KC"]));
        assert!(!game.involves_any(&["PHI"]));
    }

    #[test]
    fn test_game_tolerates_missing_fields() {
        let game: Game = serde_json::from_value(json!({"HomeTeam": "BUF", "AwayTeam": "MIA"}))
            .expect("sparse game");
        assert!(!game.is_final());
        assert!(!game.is_in_progress());
        assert_eq!(game.when(), "");
    }

    #[test]
    fn test_standing_record_with_and_without_ties() {
        let s: Standing =
            serde_json::from_value(json!({"Team": "PHI", "Wins": 11, "Losses": 3})).unwrap();
        assert_eq!(s.record(), "11-3");

        let s: Standing =
            serde_json::from_value(json!({"Team": "NYG", "Wins": 6, "Losses": 7, "Ties": 1}))
                .unwrap();
        assert_eq!(s.record(), "6-7-1");
    }

    #[test]
    fn test_consensus_prefers_labeled_aggregate() {
        let odds: GameOdds = serde_json::from_value(json!({
            "HomeTeam": "KC",
            "AwayTeam": "LV",
            "PregameOdds": [
                {"Sportsbook": "DraftKings", "HomePointSpread": -6.0},
                {"Sportsbook": "Scrambled Consensus", "HomePointSpread": -6.5}
            ]
        }))
        .unwrap();
        assert_eq!(
            odds.consensus().unwrap().sportsbook,
            "Scrambled Consensus"
        );
    }

    #[test]
    fn test_consensus_falls_back_to_first_book() {
        let odds: GameOdds = serde_json::from_value(json!({
            "HomeTeam": "KC",
            "AwayTeam": "LV",
            "PregameOdds": [
                {"Sportsbook": "FanDuel", "HomePointSpread": -3.0},
                {"Sportsbook": "DraftKings", "HomePointSpread": -3.5}
            ]
        }))
        .unwrap();
        assert_eq!(odds.consensus().unwrap().sportsbook, "FanDuel");
    }

    #[test]
    fn test_player_stat_headline_yards() {
        let stat: PlayerStat = serde_json::from_value(json!({
            "Name": "P. Mahomes",
            "PassingYards": 312.0,
            "RushingYards": 21.0
        }))
        .unwrap();
        assert_eq!(stat.headline_yards(), Some(("passing", 312.0)));

        let empty = PlayerStat::default();
        assert_eq!(empty.headline_yards(), None);
    }
}
