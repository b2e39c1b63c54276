use serde::Serialize;
use std::fmt;
use std::ops::Range;
use tracing::{debug, instrument};

use crate::config::DEFAULT_LEADING_LINES;
use crate::error::{Result, SpliceError};

/// A located block of lines. `end` is the index of the end-marker line and is
/// part of the region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub start: usize,
    pub marker: usize,
    pub end: usize,
}

impl Region {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end + 1
    }

    pub fn line_count(&self) -> usize {
        self.end + 1 - self.start
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start + 1, self.end + 1)
    }
}

#[derive(Debug, Clone)]
pub struct LocateOptions {
    pub start_marker: String,
    pub end_marker: String,
    /// Lines before the start marker that belong to the region.
    pub leading: usize,
    /// Reject markers that occur more than once.
    pub unique: bool,
}

impl LocateOptions {
    pub fn new(start_marker: impl Into<String>, end_marker: impl Into<String>) -> Self {
        Self {
            start_marker: start_marker.into(),
            end_marker: end_marker.into(),
            leading: DEFAULT_LEADING_LINES,
            unique: false,
        }
    }

    pub fn leading(mut self, leading: usize) -> Self {
        self.leading = leading;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

pub fn locate<S: AsRef<str>>(lines: &[S], start_marker: &str, end_marker: &str) -> Result<Region> {
    locate_with(lines, &LocateOptions::new(start_marker, end_marker))
}

#[instrument(skip(lines), fields(lines = lines.len()))]
pub fn locate_with<S: AsRef<str>>(lines: &[S], options: &LocateOptions) -> Result<Region> {
    if options.start_marker.is_empty() || options.end_marker.is_empty() {
        return Err(SpliceError::EmptyMarker);
    }

    if options.unique {
        ensure_unique(lines, &options.start_marker)?;
        ensure_unique(lines, &options.end_marker)?;
    }

    let marker = find_line(lines, &options.start_marker, 0).ok_or_else(|| {
        SpliceError::StartNotFound {
            marker: options.start_marker.clone(),
        }
    })?;

    // The end search includes the start-marker line itself.
    let end = find_line(lines, &options.end_marker, marker).ok_or_else(|| {
        SpliceError::EndNotFound {
            marker: options.end_marker.clone(),
            from: marker + 1,
        }
    })?;

    let region = Region {
        start: marker.saturating_sub(options.leading),
        marker,
        end,
    };
    debug!("Located region {} ({} lines)", region, region.line_count());
    Ok(region)
}

fn find_line<S: AsRef<str>>(lines: &[S], needle: &str, from: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| line.as_ref() == needle)
        .map(|(i, _)| i)
}

fn ensure_unique<S: AsRef<str>>(lines: &[S], marker: &str) -> Result<()> {
    let count = lines.iter().filter(|line| line.as_ref() == marker).count();
    if count > 1 {
        return Err(SpliceError::AmbiguousMarker {
            marker: marker.to_string(),
            count,
        });
    }
    Ok(())
}
