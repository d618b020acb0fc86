//! Infrastructure layer - External processes and configuration

pub mod config;
pub mod repository;

pub use config::{Config, ToolErrorPolicy};
pub use repository::{GitRepository, RepositoryQuery};
