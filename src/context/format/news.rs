//! News headlines section.

use serde_json::Value;

use crate::constants::limits;
use crate::data_source::models::NewsItem;

/// Formats the latest headlines, filtered to the requested teams when the
/// rows carry a team code. Empty string on wrong shape or no usable titles.
pub fn format_news(payload: &Value, team_keys: &[&str]) -> String {
    let Ok(items) = serde_json::from_value::<Vec<NewsItem>>(payload.clone()) else {
        return String::new();
    };

    let mut relevant: Vec<&NewsItem> = items
        .iter()
        .filter(|i| !i.display_title().is_empty())
        .filter(|i| {
            team_keys.is_empty()
                || i.team.is_none()
                || i.team.as_deref().is_some_and(|t| team_keys.contains(&t))
        })
        .collect();
    relevant.truncate(limits::NEWS_ITEMS);

    if relevant.is_empty() {
        return String::new();
    }

    let mut out = String::from("RECENT NEWS:\n");
    for item in relevant {
        out.push_str(&format!(
            "- {}{}\n",
            item.display_title(),
            item.source
                .as_deref()
                .map(|s| format!(" ({s})"))
                .unwrap_or_default(),
        ));
    }
    out
}
