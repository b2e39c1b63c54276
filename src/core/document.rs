use crate::core::locator::Region;
use crate::error::{Result, SpliceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Takes the style of the first line break, falling back to `\n`.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(i) if i > 0 && text.as_bytes()[i - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/// A text file held as lines. Every line keeps its own terminator so that
/// lines outside a splice are written back byte for byte, mixed endings
/// included. Only the last line may lack a terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    endings: Vec<Option<LineEnding>>,
    line_ending: LineEnding,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        let (lines, endings) = parse_lines(text);
        Self {
            lines,
            endings,
            line_ending: LineEnding::detect(text),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Style used for lines a splice adds where no neighbouring terminator
    /// applies.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn ending_of(&self, index: usize) -> Option<LineEnding> {
        self.endings.get(index).copied().flatten()
    }

    pub fn has_trailing_newline(&self) -> bool {
        matches!(self.endings.last(), Some(Some(_)))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn region_lines(&self, region: &Region) -> Result<&[String]> {
        self.check_bounds(region)?;
        Ok(&self.lines[region.range()])
    }

    /// Replaces the lines covered by `region` and returns the removed ones.
    ///
    /// Inserted lines take the terminator of the region's first line; the
    /// last inserted line takes the terminator of the region's last line, so
    /// a region at the end of a file without a final newline stays that way.
    pub fn splice(&mut self, region: &Region, replacement: Vec<String>) -> Result<Vec<String>> {
        self.check_bounds(region)?;

        let range = region.range();
        let fill = self.endings[range.start].unwrap_or(self.line_ending);
        let tail = self.endings[region.end];
        let at_eof = region.end + 1 == self.lines.len();

        let count = replacement.len();
        let endings: Vec<Option<LineEnding>> = (0..count)
            .map(|i| if i + 1 == count { tail } else { Some(fill) })
            .collect();

        let removed = self.lines.splice(range.clone(), replacement).collect();
        drop(self.endings.splice(range, endings));

        // Removing the final lines outright hands the missing terminator to
        // the new last line.
        if count == 0 && at_eof && tail.is_none() {
            if let Some(last) = self.endings.last_mut() {
                *last = None;
            }
        }

        Ok(removed)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (line, ending) in self.lines.iter().zip(&self.endings) {
            out.push_str(line);
            if let Some(ending) = ending {
                out.push_str(ending.as_str());
            }
        }
        out
    }

    fn check_bounds(&self, region: &Region) -> Result<()> {
        if region.start > region.end || region.end >= self.lines.len() {
            return Err(SpliceError::RegionOutOfBounds {
                start: region.start,
                end: region.end,
                len: self.lines.len(),
            });
        }
        Ok(())
    }
}

fn parse_lines(text: &str) -> (Vec<String>, Vec<Option<LineEnding>>) {
    let mut lines = Vec::new();
    let mut endings = Vec::new();

    for piece in text.split_inclusive('\n') {
        let (line, ending) = if let Some(line) = piece.strip_suffix("\r\n") {
            (line, Some(LineEnding::CrLf))
        } else if let Some(line) = piece.strip_suffix('\n') {
            (line, Some(LineEnding::Lf))
        } else {
            (piece, None)
        };
        lines.push(line.to_string());
        endings.push(ending);
    }

    (lines, endings)
}

/// Splits text into lines without their terminators. A trailing terminator
/// does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    parse_lines(text).0
}
