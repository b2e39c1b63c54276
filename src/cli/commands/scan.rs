use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::core::document::Document;
use crate::core::file_collector::collect_files;
use crate::core::locator::{LocateOptions, Region, locate_with};
use crate::io::file_operations::read_utf8;

#[instrument(skip(options, exclude, include))]
pub async fn execute(
    paths: Vec<PathBuf>,
    options: LocateOptions,
    exclude: Vec<String>,
    include: Vec<String>,
    max_size_mb: u64,
) -> Result<Vec<(PathBuf, Region)>> {
    let files = collect_files(&paths, &exclude, &include, max_size_mb).await?;

    let mut found = Vec::new();
    for file in files {
        let Some(text) = read_utf8(&file).await? else {
            debug!("{}: not valid UTF-8, skipping", file.display());
            continue;
        };
        let document = Document::parse(&text);

        match locate_with(document.lines(), &options) {
            Ok(region) => {
                println!("{}:{}", file.display(), region);
                found.push((file, region));
            }
            Err(e) => debug!("{}: {}", file.display(), e),
        }
    }

    info!("Region found in {} files", found.len());
    Ok(found)
}
