//! Repository metadata substituted into markers

use crate::domain::MarkerKind;
use serde::Deserialize;

/// Fallback strings used when a metadata query cannot be answered
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Placeholders {
    pub branch: String,
    pub version: String,
    pub author: String,
    pub date: String,
    pub id: String,
    pub message: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Placeholders {
            branch: "(unnamed branch)".to_string(),
            version: "(unknown version)".to_string(),
            author: "(unknown commit author)".to_string(),
            date: "(unknown commit date)".to_string(),
            id: "(unknown commit id)".to_string(),
            message: "(unknown commit message)".to_string(),
        }
    }
}

/// Values for every marker kind, fetched once per smudge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub version: String,
    pub file: String,
    pub date: String,
    pub author: String,
    pub id: String,
    pub message: String,
}

impl Metadata {
    /// Metadata made only of placeholders, for a file nothing is known about
    pub fn unknown(file: &str, placeholders: &Placeholders) -> Self {
        Metadata {
            version: version_label(&placeholders.branch, None, placeholders),
            file: file.to_string(),
            date: placeholders.date.clone(),
            author: placeholders.author.clone(),
            id: placeholders.id.clone(),
            message: placeholders.message.clone(),
        }
    }

    /// Value substituted for the given marker kind
    pub fn value(&self, kind: MarkerKind) -> &str {
        match kind {
            MarkerKind::Version => &self.version,
            MarkerKind::File => &self.file,
            MarkerKind::Date => &self.date,
            MarkerKind::Author => &self.author,
            MarkerKind::Id => &self.id,
            MarkerKind::Message => &self.message,
        }
    }
}

/// Build the `$Version$` value: `<branch>:<revision count>`
pub fn version_label(branch: &str, revisions: Option<usize>, placeholders: &Placeholders) -> String {
    match revisions {
        Some(count) => format!("{}:{}", branch, count),
        None => format!("{}:{}", branch, placeholders.version),
    }
}
