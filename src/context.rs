//! Context assembly: the orchestrator and the per-endpoint formatters.

pub mod builder;
pub mod format;

pub use builder::{AssembledContext, ContextBuilder, FALLBACK_MESSAGE, Section};
