//! Rule-based data-source classifier.
//!
//! Decides per question whether the answer needs deterministic API data,
//! open web search, or both. This is a best-effort heuristic over ordered
//! regex tables; misfires are accepted as long as precedence is stable:
//! API-required beats hybrid beats web-search beats the default.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Which capability should answer the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuerySource {
    /// Deterministic/computed data: betting math, live scores, stored data
    Api,
    /// Open-ended factual, narrative, or opinion questions
    WebSearch,
    /// Needs both a current line and surrounding analysis
    Hybrid,
}

/// A classification with the coarse reason it fired, for logs and debugging
#[derive(Debug, Clone)]
pub struct Classification {
    pub source: QuerySource,
    pub reason: &'static str,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("classifier pattern must compile"))
        .collect()
}

/// Questions that MUST use the API (web search cannot answer them)
static API_REQUIRED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // Betting math - requires computation against stored lines
        r"(?i)did.*(cover|hit)",
        r"(?i)spread.*(cover|hit|win|lose)",
        r"(?i)over.?under.*(hit|cover|cash)",
        r"(?i)push\s*(or|vs)\s*cover",
        r"(?i)was\s+the\s+.*(winner|loser)",
        // Prop bet results
        r"(?i)prop.*(hit|result|cash)",
        r"(?i)hit\s+rate",
        r"(?i)how\s+often\s+does.*(go\s+over|hit)",
        // Current betting lines (real-time)
        r"(?i)what('s| is)\s+the\s+(spread|line|total|over.?under|moneyline)",
        r"(?i)current\s+(spread|line|odds|total)",
        r"(?i)odds\s+(right\s+)?now",
        r"(?i)best\s+odds",
        r"(?i)compare\s+odds",
        // Line movement (requires historical odds data)
        r"(?i)line\s+(move|movement|moved)",
        r"(?i)where\s+did.*(open|start)",
        r"(?i)sharp\s+money",
        r"(?i)odds\s+(move|change)",
        // Betting trends & aggregations
        r"(?i)ats\s+record",
        r"(?i)cover\s+as\s+(underdog|favorite|home|away)",
        r"(?i)over.?under\s+trend",
        r"(?i)betting\s+trend",
        // Live game data (fresher than search indexing)
        r"(?i)current\s+score",
        r"(?i)live\s+score",
        r"(?i)what('s| is)\s+the\s+score\s+(right\s+)?now",
        r"(?i)who('s| is)\s+winning\s+(right\s+)?now",
        r"(?i)what\s+quarter",
        r"(?i)is\s+the\s+game\s+(over|still|in\s+progress)",
        r"(?i)real\s*time",
        r"(?i)play\s+by\s+play",
        // User-specific stored data
        r"(?i)my\s+(bet|bets|history|roi|record)",
        r"(?i)track\s+this\s+bet",
        r"(?i)my\s+favorite\s+team",
    ])
});

/// Questions that need BOTH a line and analysis
static HYBRID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)should\s+i\s+bet\s+(the\s+)?(over|under|spread)",
        r"(?i)good\s+bet",
        r"(?i)value\s+(bet|play|on)",
        r"(?i)value.*(spread|over|under|line)",
    ])
});

/// Questions that should PREFER web search (general Q&A)
static WEB_SEARCH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        // General factual questions
        r"(?i)did\s+.*make\s+(the\s+)?playoffs?",
        r"(?i)who\s+won",
        r"(?i)is\s+.*injured",
        r"(?i)who('s| is)\s+the\s+best",
        r"(?i)who\s+should\s+win",
        r"(?i)what\s+are\s+experts\s+saying",
        r"(?i)tell\s+me\s+about",
        r"(?i)why\s+(are|is)\s+the",
        r"(?i)what('s| is)\s+the\s+story",
        r"(?i)mvp\s+(favorite|candidate|race)",
        r"(?i)trade\s+rumor",
        r"(?i)what\s+happened\s+in",
        r"(?i)best\s+record",
        r"(?i)playoff\s+picture",
        r"(?i)standings",
        r"(?i)historical",
        r"(?i)record|streak|milestone",
        r"(?i)draft\s+news",
        r"(?i)coaching\s+change",
        r"(?i)analysis|opinion",
        r"(?i)context|narrative",
        r"(?i)journalist",
        // News and rumors
        r"(?i)news",
        r"(?i)rumor",
        r"(?i)report",
        r"(?i)update",
        r"(?i)latest",
        // Analysis and opinions
        r"(?i)should\s+i\s+(bet|take|pick)",
        r"(?i)what\s+do\s+you\s+think",
        r"(?i)prediction",
        r"(?i)who\s+will\s+win",
        r"(?i)expect",
    ])
});

fn any_match(patterns: &[Regex], question: &str) -> bool {
    patterns.iter().any(|p| p.is_match(question))
}

/// Classifies a question into the data source that should answer it.
/// First match wins, evaluated in fixed order; unmatched questions default
/// to web search.
pub fn classify(question: &str) -> QuerySource {
    classify_with_reason(question).source
}

/// Classification plus the coarse reason, for logging
pub fn classify_with_reason(question: &str) -> Classification {
    let question = question.trim();

    let classification = if any_match(&API_REQUIRED_PATTERNS, question) {
        Classification {
            source: QuerySource::Api,
            reason: "requires computed or real-time API data",
        }
    } else if any_match(&HYBRID_PATTERNS, question) {
        Classification {
            source: QuerySource::Hybrid,
            reason: "needs both betting data and context/analysis",
        }
    } else if any_match(&WEB_SEARCH_PATTERNS, question) {
        Classification {
            source: QuerySource::WebSearch,
            reason: "general factual or narrative question",
        }
    } else {
        Classification {
            source: QuerySource::WebSearch,
            reason: "no specific API requirement detected",
        }
    };

    debug!(
        "Classified question as {:?} ({})",
        classification.source, classification.reason
    );
    classification
}
