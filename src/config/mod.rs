pub mod patterns;

pub use patterns::{DEFAULT_EXCLUDE_PATTERNS, DEFAULT_INCLUDE_PATTERNS};

/// Lines before the start marker that are replaced along with the region.
pub const DEFAULT_LEADING_LINES: usize = 1;

pub const DEFAULT_MAX_SIZE_MB: u64 = 10;

pub const BACKUP_SUFFIX: &str = ".backup";
