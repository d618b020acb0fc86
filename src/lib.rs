//! git-keywords - Keyword expansion filter for git
//!
//! On checkout (smudge) `$Version$`, `$File$`, `$Date$`, `$Author$`, `$Id$` and
//! `$Message$` markers are filled with repository metadata; on commit (clean)
//! they are reduced to their bare form again, so stored content stays stable.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::KeywordError;
