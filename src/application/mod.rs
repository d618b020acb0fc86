//! Application layer - Use cases and orchestration

pub mod fetch_metadata;
pub mod filter;

pub use fetch_metadata::MetadataFetcher;
pub use filter::{FilterService, Transform};
