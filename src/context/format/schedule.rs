//! Schedule section: upcoming games for the teams in question.

use serde_json::Value;

use crate::constants::limits;
use crate::data_source::models::Game;

/// Formats upcoming games from a schedules or scores payload. With team
/// keys present, only their games are shown; otherwise the first few
/// upcoming games league-wide. Returns an empty string when the payload
/// is not a game array or nothing qualifies.
///
/// Bye weeks appear in the schedule feed as placeholder rows with "BYE" as
/// one team code; those are not games. Games already being played belong
/// to the scores section, not here.
pub fn format_schedule(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(games) = serde_json::from_value::<Vec<Game>>(payload.clone()) else {
        return String::new();
    };

    let mut upcoming: Vec<&Game> = games
        .iter()
        .filter(|g| !g.is_final() && !g.is_in_progress())
        .filter(|g| g.home_team != "BYE" && g.away_team != "BYE")
        .filter(|g| team_keys.is_empty() || g.involves_any(team_keys))
        .collect();
    upcoming.sort_by(|a, b| a.when().cmp(b.when()));
    upcoming.truncate(limits::SCHEDULE_GAMES);

    if upcoming.is_empty() {
        return String::new();
    }

    let mut out = String::from("UPCOMING GAMES:\n");
    for game in upcoming {
        out.push_str(&format!(
            "- {} @ {}{}{}\n",
            game.away_team,
            game.home_team,
            if game.when().is_empty() {
                String::new()
            } else {
                format!(" on {}", game.when())
            },
            game.channel
                .as_deref()
                .map(|c| format!(" ({c})"))
                .unwrap_or_default(),
        ));
    }
    out
}
