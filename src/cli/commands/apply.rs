use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::{error, info, instrument};

use crate::cli::commands::edit_file;
use crate::core::plan::{EditPlan, FileEdits};
use crate::core::splice::Edit;
use crate::io::input::read_input;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ApplySummary {
    pub files_total: usize,
    pub files_ok: usize,
    pub edits_applied: usize,
}

#[instrument]
pub async fn execute(plan: Option<String>, dry_run: bool, backup: bool) -> Result<ApplySummary> {
    let json = read_input(plan.as_deref()).await?;
    let plan = EditPlan::from_json(&json).context("Failed to parse edit plan")?;

    let summary = apply_plan(&plan, dry_run, backup).await;

    if summary.files_ok != summary.files_total {
        bail!(
            "{} of {} files failed",
            summary.files_total - summary.files_ok,
            summary.files_total
        );
    }

    Ok(summary)
}

/// Applies every file in the plan. A failing file is reported and skipped;
/// the others are still written.
pub async fn apply_plan(plan: &EditPlan, dry_run: bool, backup: bool) -> ApplySummary {
    if let Some(description) = &plan.description {
        info!("Plan: {}", description);
    }
    info!(
        "Processing {} edits across {} files",
        plan.edit_count(),
        plan.files.len()
    );

    if dry_run {
        info!("DRY RUN MODE - No files will be modified");
    }

    let mut summary = ApplySummary {
        files_total: plan.files.len(),
        ..ApplySummary::default()
    };

    for file in &plan.files {
        match apply_file(file, dry_run, backup).await {
            Ok(applied) => {
                summary.files_ok += 1;
                summary.edits_applied += applied;
                info!("✓ {} - {} edits applied", file.path, applied);
            }
            Err(e) => {
                error!("✗ {} - Error: {:#}", file.path, e);
            }
        }
    }

    info!(
        "Completed: {}/{} files processed successfully, {} edits applied",
        summary.files_ok, summary.files_total, summary.edits_applied
    );

    summary
}

async fn apply_file(file: &FileEdits, dry_run: bool, backup: bool) -> Result<usize> {
    for (i, edit) in file.edits.iter().enumerate() {
        if let Some(description) = &edit.description {
            info!("{} edit {}: {}", file.path, i + 1, description);
        }
    }

    let edits: Vec<Edit> = file.edits.iter().map(|e| e.to_edit()).collect();
    let outcomes = edit_file(Path::new(&file.path), &edits, dry_run, backup).await?;

    Ok(outcomes.iter().filter(|o| o.changed).count())
}
