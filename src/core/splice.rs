use tracing::{debug, instrument};

use crate::core::document::{Document, split_lines};
use crate::core::locator::{LocateOptions, Region, locate_with};
use crate::error::Result;

/// One region replacement: where to look, and what goes in its place.
#[derive(Debug, Clone)]
pub struct Edit {
    pub locate: LocateOptions,
    pub replacement: Vec<String>,
}

impl Edit {
    pub fn new(locate: LocateOptions, replacement: &str) -> Self {
        Self {
            locate,
            replacement: split_lines(replacement),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub region: Region,
    pub removed: Vec<String>,
    pub inserted: Vec<String>,
    pub changed: bool,
}

#[instrument(skip(document, edit), fields(start = %edit.locate.start_marker))]
pub fn apply_edit(document: &mut Document, edit: &Edit) -> Result<EditOutcome> {
    let region = locate_with(document.lines(), &edit.locate)?;

    if document.region_lines(&region)? == edit.replacement.as_slice() {
        debug!("Region {} already matches replacement", region);
        return Ok(EditOutcome {
            region,
            removed: edit.replacement.clone(),
            inserted: edit.replacement.clone(),
            changed: false,
        });
    }

    let removed = document.splice(&region, edit.replacement.clone())?;
    debug!(
        "Replaced {} lines at {} with {} lines",
        removed.len(),
        region,
        edit.replacement.len()
    );

    Ok(EditOutcome {
        region,
        removed,
        inserted: edit.replacement.clone(),
        changed: true,
    })
}

/// Applies edits in order. Each edit is located against the result of the
/// previous one; the first failure stops the run.
pub fn apply_edits(document: &mut Document, edits: &[Edit]) -> Result<Vec<EditOutcome>> {
    edits.iter().map(|edit| apply_edit(document, edit)).collect()
}
