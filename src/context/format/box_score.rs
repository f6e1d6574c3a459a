//! Box score section: final line plus the ordered scoring plays.

use serde_json::Value;

use crate::data_source::models::BoxScore;

/// Formats one box score: the game's final line followed by its scoring
/// plays in sequence order. Empty string on wrong shape or when the payload
/// carries neither a score nor any plays.
pub fn format_box_score(payload: &Value) -> String {
    let Ok(box_score) = serde_json::from_value::<BoxScore>(payload.clone()) else {
        return String::new();
    };

    let mut out = String::new();
    if let Some(game) = &box_score.score {
        out.push_str(&format!(
            "BOX SCORE: {} {} - {} {}\n",
            game.away_team,
            game.away_score.unwrap_or(0),
            game.home_team,
            game.home_score.unwrap_or(0),
        ));
    }

    let mut plays: Vec<_> = box_score.scoring_plays.iter().collect();
    plays.sort_by_key(|p| p.sequence.unwrap_or(i64::MAX));

    if !plays.is_empty() {
        out.push_str("SCORING PLAYS:\n");
        for play in plays {
            out.push_str(&format!(
                "- Q{} {}: {}{}\n",
                play.quarter.as_deref().unwrap_or("?"),
                play.team.as_deref().unwrap_or("?"),
                play.play_description.as_deref().unwrap_or("score"),
                match (play.away_score, play.home_score) {
                    (Some(a), Some(h)) => format!(" ({a}-{h})"),
                    _ => String::new(),
                },
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_formats_score_and_plays_in_sequence_order() {
        let payload = json!({
            "Score": {"HomeTeam": "KC", "AwayTeam": "DEN",
                      "HomeScore": 27, "AwayScore": 17, "Status": "Final"},
            "ScoringPlays": [
                {"Sequence": 2, "Quarter": "2", "Team": "KC",
                 "PlayDescription": "Kelce 11 yd pass from Mahomes",
                 "AwayScore": 7, "HomeScore": 7},
                {"Sequence": 1, "Quarter": "1", "Team": "DEN",
                 "PlayDescription": "Sutton 23 yd pass",
                 "AwayScore": 7, "HomeScore": 0}
            ]
        });
        let out = format_box_score(&payload);
        assert!(out.starts_with("BOX SCORE: DEN 17 - KC 27"));
        let first = out.find("Sutton").expect("first play");
        let second = out.find("Kelce").expect("second play");
        assert!(first < second);
    }

    #[test]
    fn test_empty_payload_yields_empty() {
        assert_eq!(format_box_score(&json!({})), "");
        assert_eq!(format_box_score(&json!([1, 2, 3])), "");
    }

    #[test]
    fn test_plays_without_score_still_render() {
        let payload = json!({
            "ScoringPlays": [
                {"Quarter": "4", "Team": "KC", "PlayDescription": "FG"}
            ]
        });
        let out = format_box_score(&payload);
        assert!(out.contains("SCORING PLAYS:"));
        assert!(out.contains("Q4 KC: FG"));
    }
}
