//! Domain layer - Marker protocol and metadata model

pub mod engine;
pub mod marker;
pub mod metadata;
pub mod mode;

pub use engine::MarkerEngine;
pub use marker::{Marker, MarkerKind, MarkerTable};
pub use metadata::{version_label, Metadata, Placeholders};
pub use mode::FilterMode;
