use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

use crate::config::BACKUP_SUFFIX;
use crate::core::document::Document;

pub async fn read_file_safe(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Reads a file that may not be UTF-8. Undecodable content yields `None`;
/// only I/O failures are errors.
pub async fn read_utf8(path: &Path) -> Result<Option<String>> {
    let bytes = fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8(bytes).ok())
}

pub async fn write_file_safe(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[instrument]
pub async fn read_document(path: &Path) -> Result<Document> {
    let text = read_file_safe(path).await?;
    let document = Document::parse(&text);
    debug!("Read {} lines from {}", document.len(), path.display());
    Ok(document)
}

#[instrument(skip(document))]
pub async fn write_document(path: &Path, document: &Document) -> Result<()> {
    write_file_safe(path, &document.render()).await?;
    debug!("Wrote {} lines to {}", document.len(), path.display());
    Ok(())
}

pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

#[instrument]
pub async fn create_backup(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)
        .await
        .with_context(|| format!("Failed to create backup: {}", backup.display()))?;
    debug!("Created backup: {}", backup.display());
    Ok(backup)
}
