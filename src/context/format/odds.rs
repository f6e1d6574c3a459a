//! Betting sections: game lines, player props, and line movement history.

use serde_json::Value;

use crate::constants::limits;
use crate::data_source::models::{GameOdds, PlayerProp};

/// American odds notation: positive prices carry an explicit plus sign
fn american(price: i64) -> String {
    if price > 0 {
        format!("+{price}")
    } else {
        price.to_string()
    }
}

/// Formats game lines from a pregame or live odds payload. One line per
/// game using the consensus book (or the first book when no consensus entry
/// exists). Empty string on wrong shape or when no game has any book.
pub fn format_odds(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(games) = serde_json::from_value::<Vec<GameOdds>>(payload.clone()) else {
        return String::new();
    };

    let relevant: Vec<&GameOdds> = games
        .iter()
        .filter(|g| {
            team_keys.is_empty()
                || team_keys.contains(&g.home_team.as_str())
                || team_keys.contains(&g.away_team.as_str())
        })
        .filter(|g| g.consensus().is_some())
        .collect();

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("BETTING LINES:\n");
    for game in relevant {
        let Some(book) = game.consensus() else {
            continue;
        };
        // The spread sign identifies the favorite: a negative home spread
        // means the home side is favored, positive means the road side.
        let spread = match book.home_point_spread {
            Some(s) if s < 0.0 => format!(
                "{} {s} ({} favored by {})",
                game.home_team,
                game.home_team,
                -s
            ),
            Some(s) if s > 0.0 => format!(
                "{} +{s} ({} favored by {s})",
                game.home_team, game.away_team
            ),
            Some(_) => format!("{} pick'em", game.home_team),
            None => "spread n/a".to_string(),
        };
        let total = book
            .over_under
            .map(|t| format!("O/U {t}"))
            .unwrap_or_else(|| "total n/a".to_string());
        let moneyline = match (book.away_money_line, book.home_money_line) {
            (Some(a), Some(h)) => format!(
                ", ML {} {} / {} {}",
                game.away_team,
                american(a),
                game.home_team,
                american(h)
            ),
            _ => String::new(),
        };
        out.push_str(&format!(
            "- {} @ {}: {spread}, {total}{moneyline} [{}]\n",
            game.away_team, game.home_team, book.sportsbook,
        ));
    }
    out
}

/// Formats player prop lines, filtered to the requested teams when given.
pub fn format_props(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(props) = serde_json::from_value::<Vec<PlayerProp>>(payload.clone()) else {
        return String::new();
    };

    let mut relevant: Vec<&PlayerProp> = props
        .iter()
        .filter(|p| p.name.is_some() && p.description.is_some())
        .filter(|p| {
            team_keys.is_empty() || p.team.as_deref().is_some_and(|t| team_keys.contains(&t))
        })
        .collect();
    relevant.truncate(limits::PROP_LINES);

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("PLAYER PROPS:\n");
    for prop in relevant {
        let payouts = match (prop.over_payout, prop.under_payout) {
            (Some(o), Some(u)) => format!(" (o{} / u{})", american(o), american(u)),
            _ => String::new(),
        };
        out.push_str(&format!(
            "- {} {}: {}{payouts}\n",
            prop.name.as_deref().unwrap_or(""),
            prop.description.as_deref().unwrap_or(""),
            prop.over_under
                .map(|l| l.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
        ));
    }
    out
}

/// Formats line movement history for one game: per sportsbook, the spread
/// trajectory from oldest to newest update. Empty string on wrong shape.
pub fn format_line_movement(payload: &Value) -> String {
    let Ok(games) = serde_json::from_value::<Vec<GameOdds>>(payload.clone()) else {
        return String::new();
    };
    let Some(game) = games.first() else {
        return String::new();
    };

    // Group spread updates per book, in payload order (oldest first)
    let mut books: Vec<(&str, Vec<f64>)> = Vec::new();
    for entry in game.books() {
        let Some(spread) = entry.home_point_spread else {
            continue;
        };
        match books.iter_mut().find(|(name, _)| *name == entry.sportsbook) {
            Some((_, spreads)) => spreads.push(spread),
            None => books.push((&entry.sportsbook, vec![spread])),
        }
    }
    books.truncate(limits::LINE_MOVEMENT_BOOKS);

    if books.is_empty() {
        return String::new();
    }

    let mut out = format!("LINE MOVEMENT: {} @ {}\n", game.away_team, game.home_team);
    for (book, spreads) in books {
        let trajectory: Vec<String> = spreads.iter().map(|s| format!("{s}")).collect();
        out.push_str(&format!(
            "- {book}: {} (home spread)\n",
            trajectory.join(" -> ")
        ));
    }
    out
}
