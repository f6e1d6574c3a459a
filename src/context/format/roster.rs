//! Roster and depth chart sections.

use serde_json::Value;

use crate::constants::limits;
use crate::data_source::models::{DepthChartEntry, RosterPlayer};

/// Formats roster rows for one team (the players endpoint is already
/// team-scoped). Empty string on wrong shape or no named players.
pub fn format_roster(payload: &Value) -> String {
    let Ok(players) = serde_json::from_value::<Vec<RosterPlayer>>(payload.clone()) else {
        return String::new();
    };

    let mut named: Vec<&RosterPlayer> = players.iter().filter(|p| p.name.is_some()).collect();
    named.truncate(limits::ROSTER_PLAYERS);

    if named.is_empty() {
        return String::new();
    }

    let mut out = String::from("ROSTER:\n");
    for player in named {
        out.push_str(&format!(
            "- #{} {} ({})\n",
            player
                .number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string()),
            player.name.as_deref().unwrap_or(""),
            player.position.as_deref().unwrap_or("?"),
        ));
    }
    out
}

/// Formats depth chart rows filtered to the requested teams, ordered by
/// position then depth so starters lead each group.
pub fn format_depth_chart(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(rows) = serde_json::from_value::<Vec<DepthChartEntry>>(payload.clone()) else {
        return String::new();
    };

    let mut relevant: Vec<&DepthChartEntry> = rows
        .iter()
        .filter(|r| r.name.is_some())
        .filter(|r| {
            team_keys.is_empty() || r.team.as_deref().is_some_and(|t| team_keys.contains(&t))
        })
        .collect();
    relevant.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then(a.depth_order.unwrap_or(i64::MAX).cmp(&b.depth_order.unwrap_or(i64::MAX)))
    });
    relevant.truncate(limits::ROSTER_PLAYERS);

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("DEPTH CHART:\n");
    for row in relevant {
        out.push_str(&format!(
            "- {} {}: {}\n",
            row.position.as_deref().unwrap_or("?"),
            row.depth_order.unwrap_or(0),
            row.name.as_deref().unwrap_or(""),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_roster_rows() {
        let payload = json!([
            {"Name": "P. Mahomes", "Position": "QB", "Number": 15},
            {"Name": "T. Kelce", "Position": "TE", "Number": 87}
        ]);
        let out = format_roster(&payload);
        assert!(out.contains("#15 P. Mahomes (QB)"));
        assert!(out.contains("#87 T. Kelce (TE)"));
    }

    #[test]
    fn test_depth_chart_starters_lead() {
        let payload = json!([
            {"Team": "KC", "Name": "Backup", "Position": "QB", "DepthOrder": 2},
            {"Team": "KC", "Name": "Starter", "Position": "QB", "DepthOrder": 1}
        ]);
        let out = format_depth_chart(&payload, &["KC"]);
        let starter = out.find("Starter").expect("starter row");
        let backup = out.find("Backup").expect("backup row");
        assert!(starter < backup);
    }

    #[test]
    fn test_depth_chart_filters_teams() {
        let payload = json!([
            {"Team": "KC", "Name": "A", "Position": "QB", "DepthOrder": 1},
            {"Team": "PHI", "Name": "B", "Position": "QB", "DepthOrder": 1}
        ]);
        let out = format_depth_chart(&payload, &["KC"]);
        assert!(out.contains("A"));
        assert!(!out.contains("B"));
    }

    #[test]
    fn test_wrong_shapes_yield_empty() {
        assert_eq!(format_roster(&json!({})), "");
        assert_eq!(format_depth_chart(&json!("x"), &[]), "");
    }
}
