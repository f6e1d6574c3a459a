//! Standings section, grouped by division.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::constants::limits;
use crate::data_source::models::Standing;

/// Formats standings grouped by conference/division. With team keys given,
/// only divisions containing one of those teams are shown. Empty string on
/// wrong shape or no rows.
pub fn format_standings(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(rows) = serde_json::from_value::<Vec<Standing>>(payload.clone()) else {
        return String::new();
    };
    if rows.is_empty() {
        return String::new();
    }

    // BTreeMap keeps division groups in a stable alphabetical order
    let mut divisions: BTreeMap<String, Vec<&Standing>> = BTreeMap::new();
    for row in &rows {
        let label = format!(
            "{} {}",
            row.conference.as_deref().unwrap_or(""),
            row.division.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();
        divisions.entry(label).or_default().push(row);
    }

    if !team_keys.is_empty() {
        divisions.retain(|_, rows| rows.iter().any(|r| team_keys.contains(&r.team.as_str())));
    }

    let mut out = String::new();
    for (label, mut rows) in divisions {
        rows.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));
        rows.truncate(limits::STANDINGS_PER_DIVISION);

        if label.is_empty() {
            out.push_str("STANDINGS:\n");
        } else {
            out.push_str(&format!("STANDINGS ({label}):\n"));
        }
        for row in rows {
            let name = row.name.as_deref().unwrap_or(&row.team);
            out.push_str(&format!("- {name}: {}\n", row.record()));
        }
    }
    out
}
