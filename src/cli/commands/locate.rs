use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::core::locator::{LocateOptions, Region, locate_with};
use crate::io::file_operations::read_document;

#[derive(Debug, Serialize)]
struct LocateReport<'a> {
    path: &'a Path,
    #[serde(flatten)]
    region: Region,
    lines: &'a [String],
}

#[instrument(skip(options))]
pub async fn execute(file: PathBuf, options: LocateOptions, show: bool, json: bool) -> Result<Region> {
    let document = read_document(&file).await?;

    let region = locate_with(document.lines(), &options)
        .with_context(|| format!("Failed to locate region in {}", file.display()))?;
    let lines = document.region_lines(&region)?;

    info!("Region spans {} lines", region.line_count());

    if json {
        let report = LocateReport {
            path: &file,
            region,
            lines,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}:{}", file.display(), region);
        if show {
            for (offset, line) in lines.iter().enumerate() {
                println!("{:>6} | {}", region.start + offset + 1, line);
            }
        }
    }

    Ok(region)
}
