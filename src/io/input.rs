use anyhow::{Context, Result};
use std::path::Path;
use tokio::io::AsyncReadExt;

use crate::io::clipboard::read_from_clipboard;
use crate::io::file_operations::read_file_safe;

/// Reads text from a file path, from stdin when the source is `-`, or from the
/// clipboard when no source is given.
pub async fn read_input(source: Option<&str>) -> Result<String> {
    match source {
        Some("-") => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
        Some(path) => read_file_safe(Path::new(path)).await,
        None => read_from_clipboard()
            .await
            .context("Failed to read from clipboard"),
    }
}
