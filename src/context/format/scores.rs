//! Scores section: completed and in-progress games with final or live
//! scores.

use serde_json::Value;

use crate::constants::limits;
use crate::data_source::models::Game;

/// Formats finished and live games from a scores payload. Live games get a
/// quarter/time annotation; finished games show the final score. Empty
/// string when the payload is not a game array or nothing matches.
pub fn format_scores(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(games) = serde_json::from_value::<Vec<Game>>(payload.clone()) else {
        return String::new();
    };

    let mut relevant: Vec<&Game> = games
        .iter()
        .filter(|g| g.is_final() || g.is_in_progress())
        .filter(|g| team_keys.is_empty() || g.involves_any(team_keys))
        .collect();
    // Finished games first, most recent leading; live games trail them
    relevant.sort_by(|a, b| {
        b.is_final()
            .cmp(&a.is_final())
            .then(b.when().cmp(a.when()))
    });
    relevant.truncate(limits::COMPLETED_GAMES);

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("GAME RESULTS:\n");
    for game in relevant {
        out.push_str(&format_line(game));
    }
    out
}

fn format_line(game: &Game) -> String {
    let away = game.away_score.unwrap_or(0);
    let home = game.home_score.unwrap_or(0);
    if game.is_in_progress() {
        let clock = match (game.quarter.as_deref(), game.time_remaining.as_deref()) {
            (Some(q), Some(t)) => format!(" (Q{q} {t})"),
            (Some(q), None) => format!(" (Q{q})"),
            _ => String::new(),
        };
        format!(
            "- LIVE: {} {} - {} {}{}\n",
            game.away_team, away, game.home_team, home, clock
        )
    } else {
        format!(
            "- FINAL: {} {} - {} {}\n",
            game.away_team, away, game.home_team, home
        )
    }
}
