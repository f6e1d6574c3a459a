//! Injury report section.

use serde_json::Value;

use crate::constants::limits;
use crate::data_source::models::Injury;

/// Formats injury rows, filtered to the requested teams when given. Empty
/// string on wrong shape or when no rows survive the filter.
pub fn format_injuries(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(rows) = serde_json::from_value::<Vec<Injury>>(payload.clone()) else {
        return String::new();
    };

    let mut relevant: Vec<&Injury> = rows
        .iter()
        .filter(|r| {
            team_keys.is_empty()
                || r.team
                    .as_deref()
                    .is_some_and(|t| team_keys.contains(&t))
        })
        .collect();
    relevant.truncate(limits::INJURIES_PER_TEAM);

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("INJURY REPORT:\n");
    for injury in relevant {
        let detail = injury.display_detail();
        out.push_str(&format!(
            "- {} ({}{}): {}{}\n",
            injury.display_name(),
            injury.team.as_deref().unwrap_or("?"),
            injury
                .position
                .as_deref()
                .map(|p| format!(", {p}"))
                .unwrap_or_default(),
            injury.display_status(),
            if detail.is_empty() {
                String::new()
            } else {
                format!(" - {detail}")
            },
        ));
    }
    out
}
