use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpliceError {
    #[error("start not found: {marker}")]
    StartNotFound { marker: String },

    #[error("end not found: {marker} (searched from line {from})")]
    EndNotFound { marker: String, from: usize },

    #[error("marker appears {count} times, expected exactly once: {marker}")]
    AmbiguousMarker { marker: String, count: usize },

    #[error("region {start}..{end} is out of bounds for a document of {len} lines")]
    RegionOutOfBounds { start: usize, end: usize, len: usize },

    #[error("marker must not be empty")]
    EmptyMarker,
}

pub type Result<T> = std::result::Result<T, SpliceError>;
