//! Stream filter use case

use crate::domain::{MarkerEngine, Metadata};
use crate::error::Result;
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// Transform applied to every line of the stream
#[derive(Debug, Clone)]
pub enum Transform {
    /// Fill markers with the given metadata
    Smudge(Metadata),
    /// Strip markers back to their bare form
    Clean,
}

/// Streams input to output one line at a time
pub struct FilterService {
    engine: MarkerEngine,
    transform: Transform,
}

impl FilterService {
    pub fn new(engine: MarkerEngine, transform: Transform) -> Self {
        FilterService { engine, transform }
    }

    /// Apply the transform to one line, including its line terminator
    pub fn apply<'l>(&self, line: &'l [u8]) -> Cow<'l, [u8]> {
        match &self.transform {
            Transform::Smudge(metadata) => self.engine.smudge_all(line, metadata),
            Transform::Clean => self.engine.clean_all(line),
        }
    }

    /// Copy `reader` to `writer`, transforming each line as it arrives.
    ///
    /// Returns the number of lines processed.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<usize> {
        let mut line = Vec::new();
        let mut count = 0usize;

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            writer.write_all(&self.apply(&line))?;
            count += 1;
        }

        writer.flush()?;
        Ok(count)
    }
}
