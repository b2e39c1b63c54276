use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::cli::commands::edit_file;
use crate::core::locator::LocateOptions;
use crate::core::splice::{Edit, EditOutcome};
use crate::io::input::read_input;

#[instrument(skip(options))]
pub async fn execute(
    file: PathBuf,
    options: LocateOptions,
    with: Option<String>,
    dry_run: bool,
    backup: bool,
) -> Result<EditOutcome> {
    let replacement = read_input(with.as_deref()).await?;
    let edit = Edit::new(options, &replacement);

    let outcome = edit_file(&file, std::slice::from_ref(&edit), dry_run, backup)
        .await?
        .pop()
        .context("Edit produced no outcome")?;

    if outcome.changed && !dry_run {
        info!(
            "Replaced lines {} of {} ({} -> {} lines)",
            outcome.region,
            file.display(),
            outcome.removed.len(),
            outcome.inserted.len()
        );
    }

    Ok(outcome)
}
