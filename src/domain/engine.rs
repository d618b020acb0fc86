//! Smudge and clean line transforms

use crate::domain::{MarkerKind, MarkerTable, Metadata};
use regex::bytes::Captures;
use std::borrow::Cow;

/// Applies marker substitutions to single lines of input.
///
/// Lines are raw bytes so content that is not valid UTF-8 passes through untouched.
/// Lines without a match come back borrowed.
#[derive(Debug, Clone, Default)]
pub struct MarkerEngine {
    table: MarkerTable,
}

impl MarkerEngine {
    pub fn new(table: MarkerTable) -> Self {
        MarkerEngine { table }
    }

    /// Replace every `kind` marker in `line` with `$Tag\t<value> $`
    pub fn smudge_line<'l>(&self, line: &'l [u8], value: &str, kind: MarkerKind) -> Cow<'l, [u8]> {
        let value = sanitize_value(value);
        self.table
            .get(kind)
            .regex
            .replace_all(line, |caps: &Captures<'_>| {
                let mut out = Vec::with_capacity(caps[1].len() + value.len() + 3);
                out.extend_from_slice(&caps[1]);
                out.push(b'\t');
                out.extend_from_slice(value.as_bytes());
                out.extend_from_slice(b" $");
                out
            })
    }

    /// Replace every `kind` marker in `line` with its bare `$Tag$` form
    pub fn clean_line<'l>(&self, line: &'l [u8], kind: MarkerKind) -> Cow<'l, [u8]> {
        self.table
            .get(kind)
            .regex
            .replace_all(line, |caps: &Captures<'_>| {
                let mut out = caps[1].to_vec();
                out.push(b'$');
                out
            })
    }

    /// Smudge all marker kinds in processing order
    pub fn smudge_all<'l>(&self, line: &'l [u8], metadata: &Metadata) -> Cow<'l, [u8]> {
        let mut line = Cow::Borrowed(line);
        for marker in self.table.iter() {
            let rewritten =
                into_rewritten(self.smudge_line(&line, metadata.value(marker.kind), marker.kind));
            if let Some(rewritten) = rewritten {
                line = Cow::Owned(rewritten);
            }
        }
        line
    }

    /// Clean all marker kinds in processing order
    pub fn clean_all<'l>(&self, line: &'l [u8]) -> Cow<'l, [u8]> {
        let mut line = Cow::Borrowed(line);
        for marker in self.table.iter() {
            let rewritten = into_rewritten(self.clean_line(&line, marker.kind));
            if let Some(rewritten) = rewritten {
                line = Cow::Owned(rewritten);
            }
        }
        line
    }
}

/// Owned bytes if a transform changed the line
fn into_rewritten(line: Cow<'_, [u8]>) -> Option<Vec<u8>> {
    match line {
        Cow::Owned(rewritten) => Some(rewritten),
        Cow::Borrowed(_) => None,
    }
}

/// Drop characters that would terminate or split a smudged marker.
fn sanitize_value(value: &str) -> Cow<'_, str> {
    if value.contains(['$', '\r', '\n']) {
        Cow::Owned(value.replace(['$', '\r', '\n'], ""))
    } else {
        Cow::Borrowed(value)
    }
}
