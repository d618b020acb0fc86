//! Fetch metadata use case

use crate::domain::{version_label, Metadata, Placeholders};
use crate::error::{KeywordError, Result};
use crate::infrastructure::{RepositoryQuery, ToolErrorPolicy};
use tracing::{debug, warn};

/// Collects the values for every marker from a repository
pub struct MetadataFetcher<'a, Q: RepositoryQuery> {
    query: &'a Q,
    policy: ToolErrorPolicy,
    placeholders: &'a Placeholders,
}

impl<'a, Q: RepositoryQuery> MetadataFetcher<'a, Q> {
    pub fn new(query: &'a Q, policy: ToolErrorPolicy, placeholders: &'a Placeholders) -> Self {
        MetadataFetcher {
            query,
            policy,
            placeholders,
        }
    }

    /// Run all queries for `path`.
    ///
    /// A failed query falls back to its placeholder. A launch failure either
    /// aborts or degrades the single field, depending on the policy.
    pub fn fetch(&self, path: &str) -> Result<Metadata> {
        let branch = self
            .recover("branch", self.query.branch())?
            .unwrap_or_else(|| self.placeholders.branch.clone());
        let revisions = self.recover("revision count", self.query.revision_count(path))?;

        let author = self.field("author", self.query.last_author(path), &self.placeholders.author)?;
        let date = self.field("date", self.query.last_date(path), &self.placeholders.date)?;
        let id = self.field("id", self.query.last_id(path), &self.placeholders.id)?;
        let message = self.field(
            "message",
            self.query.last_message(path),
            &self.placeholders.message,
        )?;

        Ok(Metadata {
            version: version_label(&branch, revisions, self.placeholders),
            file: path.to_string(),
            date,
            author,
            id,
            message,
        })
    }

    fn field(&self, name: &str, result: Result<Option<String>>, placeholder: &str) -> Result<String> {
        Ok(self
            .recover(name, result)?
            .unwrap_or_else(|| placeholder.to_string()))
    }

    /// Apply the tool error policy to a single query result
    fn recover<T>(&self, name: &str, result: Result<Option<T>>) -> Result<Option<T>> {
        match result {
            Ok(Some(value)) => Ok(Some(value)),
            Ok(None) => {
                debug!(field = name, "no value from repository, using placeholder");
                Ok(None)
            }
            Err(err @ KeywordError::ToolInvocation { .. }) => match self.policy {
                ToolErrorPolicy::Fatal => Err(err),
                ToolErrorPolicy::Degrade => {
                    warn!(field = name, error = %err, "using placeholder");
                    Ok(None)
                }
            },
            Err(err) => Err(err),
        }
    }
}
