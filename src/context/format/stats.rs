//! Statistics sections: team stat lines, player leaderboards, and weekly
//! projections.

use serde_json::Value;

use crate::constants::limits;
use crate::data_source::models::{PlayerStat, Projection, TeamStat};

/// Formats team stat lines, filtered to the requested teams when given.
pub fn format_team_stats(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(rows) = serde_json::from_value::<Vec<TeamStat>>(payload.clone()) else {
        return String::new();
    };

    let mut relevant: Vec<&TeamStat> = rows
        .iter()
        .filter(|r| team_keys.is_empty() || team_keys.contains(&r.team.as_str()))
        .collect();
    relevant.truncate(limits::STAT_LEADERS);

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("TEAM STATS:\n");
    for row in relevant {
        out.push_str(&format!(
            "- {}: {:.0} total yds ({:.0} pass, {:.0} rush), {:.0} TO\n",
            row.team,
            row.total_yards.unwrap_or(0.0),
            row.passing_yards.unwrap_or(0.0),
            row.rushing_yards.unwrap_or(0.0),
            row.turnovers.unwrap_or(0.0),
        ));
    }
    out
}

/// Formats a player stat leaderboard sorted by fantasy points, filtered to
/// the requested teams when given.
pub fn format_player_stats(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(rows) = serde_json::from_value::<Vec<PlayerStat>>(payload.clone()) else {
        return String::new();
    };

    let mut relevant: Vec<&PlayerStat> = rows
        .iter()
        .filter(|r| r.name.is_some())
        .filter(|r| {
            team_keys.is_empty() || r.team.as_deref().is_some_and(|t| team_keys.contains(&t))
        })
        .collect();
    relevant.sort_by(|a, b| {
        b.fantasy_points
            .unwrap_or(0.0)
            .total_cmp(&a.fantasy_points.unwrap_or(0.0))
    });
    relevant.truncate(limits::STAT_LEADERS);

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("PLAYER STATS:\n");
    for row in relevant {
        let yards = row
            .headline_yards()
            .map(|(label, y)| format!("{y:.0} {label} yds, "))
            .unwrap_or_default();
        out.push_str(&format!(
            "- {} ({}{}): {}{:.0} TD\n",
            row.name.as_deref().unwrap_or(""),
            row.team.as_deref().unwrap_or("?"),
            row.position
                .as_deref()
                .map(|p| format!(", {p}"))
                .unwrap_or_default(),
            yards,
            row.touchdowns.unwrap_or(0.0),
        ));
    }
    out
}

/// Formats weekly projections sorted by projected fantasy points. Unlike
/// the stat formatters this keeps league-wide leaders when no team filter
/// applies, since projection questions are usually about lineups.
pub fn format_projections(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(rows) = serde_json::from_value::<Vec<Projection>>(payload.clone()) else {
        return String::new();
    };

    let mut relevant: Vec<&Projection> = rows
        .iter()
        .filter(|r| r.name.is_some())
        .filter(|r| {
            team_keys.is_empty() || r.team.as_deref().is_some_and(|t| team_keys.contains(&t))
        })
        .collect();
    relevant.sort_by(|a, b| {
        b.fantasy_points
            .unwrap_or(0.0)
            .total_cmp(&a.fantasy_points.unwrap_or(0.0))
    });
    relevant.truncate(limits::PROJECTION_ROWS);

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("PROJECTIONS (this week):\n");
    for row in relevant {
        out.push_str(&format!(
            "- {} ({}{}): {:.1} proj pts\n",
            row.name.as_deref().unwrap_or(""),
            row.team.as_deref().unwrap_or("?"),
            row.position
                .as_deref()
                .map(|p| format!(", {p}"))
                .unwrap_or_default(),
            row.fantasy_points.unwrap_or(0.0),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_stats_line() {
        let payload = json!([
            {"Team": "KC", "TotalYards": 398.0, "PassingYards": 301.0,
             "RushingYards": 97.0, "Turnovers": 1.0}
        ]);
        let out = format_team_stats(&payload, &["KC"]);
        assert!(out.contains("KC: 398 total yds (301 pass, 97 rush), 1 TO"));
    }

    #[test]
    fn test_player_stats_sorted_by_fantasy_points() {
        let payload = json!([
            {"Name": "Runner", "Team": "KC", "RushingYards": 80.0, "FantasyPoints": 12.0},
            {"Name": "Passer", "Team": "KC", "PassingYards": 310.0, "FantasyPoints": 24.5}
        ]);
        let out = format_player_stats(&payload, &["KC"]);
        let passer = out.find("Passer").expect("passer row");
        let runner = out.find("Runner").expect("runner row");
        assert!(passer < runner);
        assert!(out.contains("310 passing yds"));
    }

    #[test]
    fn test_projections_sorted_and_capped() {
        let rows: Vec<Value> = (0..20)
            .map(|i| json!({"Name": format!("P{i}"), "FantasyPoints": i as f64}))
            .collect();
        let out = format_projections(&Value::Array(rows), &[]);
        assert_eq!(out.lines().count(), 1 + limits::PROJECTION_ROWS);
        assert!(out.lines().nth(1).expect("top row").contains("P19"));
    }

    #[test]
    fn test_wrong_shapes_yield_empty() {
        assert_eq!(format_team_stats(&json!("x"), &[]), "");
        assert_eq!(format_player_stats(&json!({}), &[]), "");
        assert_eq!(format_projections(&json!(null), &[]), "");
    }
}
