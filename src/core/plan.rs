use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_LEADING_LINES;
use crate::core::locator::LocateOptions;
use crate::core::splice::Edit;

#[derive(Debug, Deserialize, Serialize)]
pub struct EditPlan {
    #[serde(default)]
    pub description: Option<String>,
    pub files: Vec<FileEdits>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FileEdits {
    pub path: String,
    pub edits: Vec<RegionEdit>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RegionEdit {
    pub start_marker: String,
    pub end_marker: String,
    pub replacement: String,
    #[serde(default = "default_leading")]
    pub leading: usize,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_leading() -> usize {
    DEFAULT_LEADING_LINES
}

impl EditPlan {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn edit_count(&self) -> usize {
        self.files.iter().map(|f| f.edits.len()).sum()
    }
}

impl RegionEdit {
    pub fn to_edit(&self) -> Edit {
        let locate = LocateOptions::new(&self.start_marker, &self.end_marker)
            .leading(self.leading)
            .unique(self.unique);
        Edit::new(locate, &self.replacement)
    }
}
