//! NFL Query Routing & Context Assembly Library
//!
//! This library turns a fan's free-text question into a compact plain-text
//! context block assembled from live NFL data: it classifies the question,
//! routes it to the relevant upstream endpoints, fetches them with caching
//! and per-endpoint failure isolation, and formats the results into
//! labeled sections.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sportsbiff::config::Config;
//! use sportsbiff::context::ContextBuilder;
//! use sportsbiff::data_source::ApiClient;
//! use sportsbiff::error::AppError;
//! use sportsbiff::query::{QuerySource, classify};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = ApiClient::new(config)?;
//!     let builder = ContextBuilder::new(client);
//!
//!     let question = "Did the Chiefs cover the spread last week?";
//!
//!     // Decide whether the question needs API data at all
//!     if classify(question) != QuerySource::WebSearch {
//!         let context = builder
//!             .build_for_question(question, &["KC".to_string()])
//!             .await;
//!         println!("{context}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod context;
pub mod data_source;
pub mod error;
pub mod logging;
pub mod query;

// Re-export commonly used types for convenience
pub use config::Config;
pub use context::{AssembledContext, ContextBuilder, FALLBACK_MESSAGE};
pub use data_source::{ApiClient, EndpointName, Params, TemporalContext, bootstrap};
pub use error::AppError;
pub use query::{Category, EntitySet, QuerySource, Route, classify, extract_entities, route};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
