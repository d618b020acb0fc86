//! Marker kinds and their patterns

use regex::bytes::Regex;
use std::fmt;

/// Keyword markers recognized in file content, e.g. `$Author$`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// `$Version$` - `<branch>:<revision count>`
    Version,
    /// `$File$` - path the filter was invoked for
    File,
    /// `$Date$` - date of the last commit touching the file
    Date,
    /// `$Author$` - author of the last commit touching the file
    Author,
    /// `$Id$` - full id of the last commit touching the file
    Id,
    /// `$Message$` - subject of the last commit touching the file
    Message,
}

impl MarkerKind {
    /// Order in which markers are processed, in both directions.
    pub const ORDER: [MarkerKind; 6] = [
        MarkerKind::Author,
        MarkerKind::File,
        MarkerKind::Date,
        MarkerKind::Version,
        MarkerKind::Id,
        MarkerKind::Message,
    ];

    /// Tag name as written between the `$` delimiters
    pub fn name(&self) -> &'static str {
        match self {
            MarkerKind::Version => "Version",
            MarkerKind::File => "File",
            MarkerKind::Date => "Date",
            MarkerKind::Author => "Author",
            MarkerKind::Id => "Id",
            MarkerKind::Message => "Message",
        }
    }

    /// Bare marker form, e.g. `$Author$`
    pub fn tag(&self) -> String {
        format!("${}$", self.name())
    }

    /// Position of this kind in [`MarkerKind::ORDER`]
    fn position(&self) -> usize {
        match self {
            MarkerKind::Author => 0,
            MarkerKind::File => 1,
            MarkerKind::Date => 2,
            MarkerKind::Version => 3,
            MarkerKind::Id => 4,
            MarkerKind::Message => 5,
        }
    }

    fn pattern(&self) -> String {
        // ASCII-only matching so arbitrary (non UTF-8) bytes can sit in the payload
        format!(r"(?i-u)(\${}):?[^$\n]*\$", self.name())
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compiled pattern for one marker kind.
///
/// Capture group 1 is the leading `$Tag` literal as it appeared in the input.
#[derive(Debug, Clone)]
pub struct Marker {
    pub kind: MarkerKind,
    pub regex: Regex,
}

/// Fixed table of all marker patterns, in processing order.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    markers: [Marker; 6],
}

impl MarkerTable {
    pub fn new() -> Self {
        let markers = MarkerKind::ORDER.map(|kind| Marker {
            kind,
            regex: Regex::new(&kind.pattern()).expect("marker patterns are constant"),
        });
        MarkerTable { markers }
    }

    /// Markers in processing order
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    /// Look up the compiled pattern for a kind
    pub fn get(&self, kind: MarkerKind) -> &Marker {
        &self.markers[kind.position()]
    }
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::new()
    }
}
