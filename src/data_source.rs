//! Upstream data access: endpoint registry, TTL cache, HTTP client, and
//! the temporal context bootstrap.

pub mod bootstrap;
pub mod cache;
pub mod client;
pub mod models;
pub mod registry;

pub use bootstrap::{TemporalContext, bootstrap};
pub use client::{ApiClient, Params};
pub use registry::{ApiBase, EndpointDef, EndpointName};
