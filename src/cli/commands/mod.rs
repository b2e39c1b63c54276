pub mod apply;
pub mod locate;
pub mod replace;
pub mod scan;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::core::splice::{Edit, EditOutcome, apply_edits};
use crate::io::file_operations::{create_backup, read_document, write_document};

/// Runs every edit against one file and writes it back once. Nothing is
/// written if any edit fails.
#[instrument(skip(edits), fields(edits = edits.len()))]
pub async fn edit_file(
    path: &Path,
    edits: &[Edit],
    dry_run: bool,
    backup: bool,
) -> Result<Vec<EditOutcome>> {
    let mut document = read_document(path).await?;

    let outcomes = apply_edits(&mut document, edits)
        .with_context(|| format!("Failed to edit {}", path.display()))?;

    let changed = outcomes.iter().filter(|o| o.changed).count();

    if dry_run {
        info!(
            "DRY RUN: Would apply {} of {} edits to {}",
            changed,
            outcomes.len(),
            path.display()
        );
        print_preview(path, &outcomes);
        return Ok(outcomes);
    }

    if changed == 0 {
        info!("{} is already up to date", path.display());
        return Ok(outcomes);
    }

    if backup {
        create_backup(path).await?;
    }

    write_document(path, &document).await?;
    debug!("Applied {} edits to {}", changed, path.display());

    Ok(outcomes)
}

fn print_preview(path: &Path, outcomes: &[EditOutcome]) {
    println!("\n--- File: {} ---", path.display());
    for (i, outcome) in outcomes.iter().enumerate() {
        println!("\n--- Edit {} (lines {}) ---", i + 1, outcome.region);
        if !outcome.changed {
            println!("(unchanged)");
            continue;
        }
        for line in &outcome.removed {
            println!("- {}", line);
        }
        for line in &outcome.inserted {
            println!("+ {}", line);
        }
    }
}
