//! Small reference sections: bye weeks and venues.

use serde_json::Value;

use crate::constants::limits;
use crate::data_source::models::{ByeWeek, Stadium};

/// Formats bye-week rows, filtered to the requested teams when given.
pub fn format_bye_weeks(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(rows) = serde_json::from_value::<Vec<ByeWeek>>(payload.clone()) else {
        return String::new();
    };

    let relevant: Vec<&ByeWeek> = rows
        .iter()
        .filter(|r| team_keys.is_empty() || team_keys.contains(&r.team.as_str()))
        .collect();

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("BYE WEEKS:\n");
    for row in relevant {
        out.push_str(&format!(
            "- {}: week {}\n",
            row.team,
            row.week
                .map(|w| w.to_string())
                .unwrap_or_else(|| "?".to_string()),
        ));
    }
    out
}

/// Formats stadium records. There is no team key on the payload, so with
/// teams in play the caller filters by substring on city/name.
pub fn format_venues(payload: &Value, team_cities: &[&str]) -> String {
    let Ok(stadiums) = serde_json::from_value::<Vec<Stadium>>(payload.clone()) else {
        return String::new();
    };

    let mut relevant: Vec<&Stadium> = stadiums
        .iter()
        .filter(|s| s.name.is_some())
        .filter(|s| {
            team_cities.is_empty()
                || team_cities.iter().any(|city| {
                    s.city
                        .as_deref()
                        .is_some_and(|c| c.eq_ignore_ascii_case(city))
                })
        })
        .collect();
    relevant.truncate(limits::VENUES);

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("VENUES:\n");
    for stadium in relevant {
        out.push_str(&format!(
            "- {} ({}, {}){}{}\n",
            stadium.name.as_deref().unwrap_or(""),
            stadium.city.as_deref().unwrap_or("?"),
            stadium.state.as_deref().unwrap_or("?"),
            stadium
                .capacity
                .map(|c| format!(", capacity {c}"))
                .unwrap_or_default(),
            stadium
                .playing_surface
                .as_deref()
                .map(|s| format!(", {s}"))
                .unwrap_or_default(),
        ));
    }
    out
}
