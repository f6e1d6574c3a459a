//! Integration tests for context assembly: formatter dispatch over
//! realistic payloads and the rendering rules for partial failure. All
//! payloads are synthetic; no network involved.

use serde_json::json;

use sportsbiff::context::builder::{AssembledContext, FALLBACK_MESSAGE, Section};
use sportsbiff::context::format::format_section;
use sportsbiff::data_source::models::Team;
use sportsbiff::data_source::registry::{self, EndpointName};
use sportsbiff::query::entities::EntitySet;

fn chiefs_entities() -> EntitySet {
    EntitySet {
        teams: vec![Team {
            key: "KC".to_string(),
            city: "Kansas City".to_string(),
            name: "Chiefs".to_string(),
            full_name: "Kansas City Chiefs".to_string(),
            conference: Some("AFC".to_string()),
            division: Some("West".to_string()),
        }],
        ..EntitySet::default()
    }
}

#[test]
fn test_scoreboard_payload_renders_results_and_upcoming() {
    let payload = json!([
        {"HomeTeam": "KC", "AwayTeam": "DEN", "Status": "Final",
         "HomeScore": 27, "AwayScore": 17, "Date": "2025-11-09T13:00:00"},
        {"HomeTeam": "LV", "AwayTeam": "KC", "Status": "Scheduled",
         "Date": "2025-11-16T13:00:00", "Channel": "CBS"},
        {"HomeTeam": "PHI", "AwayTeam": "DAL", "Status": "Final",
         "HomeScore": 24, "AwayScore": 21}
    ]);
    let out = format_section(EndpointName::ScoresByWeek, &payload, &chiefs_entities());

    assert!(out.contains("FINAL: DEN 17 - KC 27"));
    assert!(out.contains("KC @ LV on 2025-11-16T13:00:00 (CBS)"));
    // The Eagles game is filtered out by the team mention
    assert!(!out.contains("PHI"));
}

#[test]
fn test_standings_payload_scopes_to_mentioned_division() {
    let payload = json!([
        {"Team": "KC", "Name": "Chiefs", "Wins": 9, "Losses": 1,
         "Conference": "AFC", "Division": "West"},
        {"Team": "LAC", "Name": "Chargers", "Wins": 6, "Losses": 4,
         "Conference": "AFC", "Division": "West"},
        {"Team": "PHI", "Name": "Eagles", "Wins": 8, "Losses": 2,
         "Conference": "NFC", "Division": "East"}
    ]);
    let out = format_section(EndpointName::Standings, &payload, &chiefs_entities());
    assert!(out.contains("Chiefs: 9-1"));
    assert!(out.contains("Chargers: 6-4"));
    assert!(!out.contains("Eagles"));
}

#[test]
fn test_missing_box_score_renders_nothing() {
    // An empty object from the box score endpoint must vanish quietly
    // rather than produce an empty-headed section.
    let out = format_section(EndpointName::BoxScoreV3, &json!({}), &chiefs_entities());
    assert_eq!(out, "");
}

#[test]
fn test_every_formatter_survives_upstream_error_shapes() {
    // Upstreams sometimes return an error object with a 200; every
    // formatter must shrug it off as an empty section.
    let error_shapes = [
        json!({"Code": 429, "Description": "rate limit exceeded"}),
        json!("Service Unavailable"),
        json!(null),
        json!([]),
    ];
    let entities = chiefs_entities();
    for def in registry::all() {
        for payload in &error_shapes {
            let out = format_section(def.name, payload, &entities);
            if payload.is_array() || payload.is_null() || payload.is_string() {
                assert_eq!(out, "", "endpoint {} rendered an error shape", def.name);
            }
        }
    }
}

#[test]
fn test_partial_failure_keeps_surviving_sections() {
    let assembled = AssembledContext {
        header: "CURRENT NFL CONTEXT (Sunday, November 16, 2025)\n".to_string(),
        sections: vec![Section {
            endpoint: EndpointName::Standings,
            text: "STANDINGS (AFC West):\n- Chiefs: 9-1\n".to_string(),
        }],
        failed_endpoints: vec![EndpointName::News, EndpointName::PregameOddsWeek],
        routes: vec![],
        entities: EntitySet::default(),
    };
    let rendered = assembled.render();
    assert!(rendered.contains("CURRENT NFL CONTEXT"));
    assert!(rendered.contains("Chiefs: 9-1"));
    assert!(!rendered.contains(FALLBACK_MESSAGE));
}

#[test]
fn test_total_failure_renders_the_apology() {
    let assembled = AssembledContext {
        header: "CURRENT NFL CONTEXT (Sunday, November 16, 2025)\n".to_string(),
        sections: vec![],
        failed_endpoints: vec![EndpointName::ScoresByWeek],
        routes: vec![],
        entities: EntitySet::default(),
    };
    assert_eq!(assembled.render(), FALLBACK_MESSAGE);
}

#[test]
fn test_odds_payload_renders_consensus_line() {
    let payload = json!([{
        "HomeTeam": "KC", "AwayTeam": "LV",
        "PregameOdds": [
            {"Sportsbook": "Consensus", "HomePointSpread": -7.0,
             "OverUnder": 44.5, "HomeMoneyLine": -320, "AwayMoneyLine": 260}
        ]
    }]);
    let out = format_section(EndpointName::PregameOddsWeek, &payload, &chiefs_entities());
    assert!(out.contains("LV @ KC"));
    assert!(out.contains("KC -7"));
    assert!(out.contains("KC favored by 7"));
    assert!(out.contains("LV +260 / KC -320"));
}

#[test]
fn test_injury_payload_scopes_to_mentioned_team() {
    let payload = json!([
        {"Name": "T. Kelce", "Team": "KC", "Position": "TE",
         "Status": "Questionable", "BodyPart": "Ankle"},
        {"Name": "J. Hurts", "Team": "PHI", "Position": "QB", "Status": "Out"}
    ]);
    let out = format_section(EndpointName::InjuriesAll, &payload, &chiefs_entities());
    assert!(out.contains("T. Kelce"));
    assert!(!out.contains("J. Hurts"));
}

#[test]
fn test_venue_question_matches_by_city() {
    let payload = json!([
        {"Name": "GEHA Field at Arrowhead Stadium", "City": "Kansas City",
         "State": "MO", "Capacity": 76416},
        {"Name": "Highmark Stadium", "City": "Orchard Park", "State": "NY"}
    ]);
    let out = format_section(EndpointName::Stadiums, &payload, &chiefs_entities());
    assert!(out.contains("Arrowhead"));
    assert!(!out.contains("Highmark"));
}
