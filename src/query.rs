//! Question analysis: source classification, topic routing, and entity
//! extraction. Everything here is pure text processing; no I/O.

pub mod classifier;
pub mod entities;
pub mod router;

pub use classifier::{Classification, QuerySource, classify, classify_with_reason};
pub use entities::{EntitySet, WeekReference, extract_entities};
pub use router::{Category, ContextKind, Route, route};
