use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_LEADING_LINES, DEFAULT_MAX_SIZE_MB};
use crate::core::locator::LocateOptions;

#[derive(Parser)]
#[command(name = "marksplice", version)]
#[command(about = "Locate and replace marker-bounded regions in text files")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct MarkerArgs {
    /// Line that opens the region (exact, whole-line match)
    #[arg(short = 's', long = "start", value_name = "MARKER", allow_hyphen_values = true)]
    pub start: String,

    /// Line that closes the region (exact, whole-line match)
    #[arg(short = 'e', long = "end", value_name = "MARKER", allow_hyphen_values = true)]
    pub end: String,

    /// Lines before the start marker that belong to the region
    #[arg(long, default_value_t = DEFAULT_LEADING_LINES)]
    pub leading: usize,

    /// Fail if either marker occurs more than once
    #[arg(long)]
    pub unique: bool,
}

impl MarkerArgs {
    pub fn to_options(&self) -> LocateOptions {
        LocateOptions::new(&self.start, &self.end)
            .leading(self.leading)
            .unique(self.unique)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the line range of the marker-bounded region
    Locate {
        /// File to search
        file: PathBuf,

        #[command(flatten)]
        markers: MarkerArgs,

        /// Also print the lines of the region
        #[arg(long)]
        show: bool,

        /// Print the region as JSON (0-based indices)
        #[arg(long, conflicts_with = "show")]
        json: bool,
    },
    /// Replace the marker-bounded region and write the file back
    Replace {
        /// File to edit
        file: PathBuf,

        #[command(flatten)]
        markers: MarkerArgs,

        /// Replacement text file, '-' to read from stdin, or omit to read from clipboard
        #[arg(short = 'w', long = "with", value_name = "SOURCE")]
        with: Option<String>,

        /// Dry run - show what would be changed without writing
        #[arg(long)]
        dry_run: bool,

        /// Create a backup file before writing
        #[arg(short = 'b', long)]
        backup: bool,
    },
    /// Apply a JSON edit plan across files
    Apply {
        /// JSON plan file, '-' to read from stdin, or omit to read from clipboard
        plan: Option<String>,

        /// Dry run - show what would be changed without writing
        #[arg(long)]
        dry_run: bool,

        /// Create backup files before writing
        #[arg(short = 'b', long)]
        backup: bool,
    },
    /// Find files under the given paths that contain the region
    Scan {
        /// Paths to search
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        markers: MarkerArgs,

        /// Additional patterns to exclude
        #[arg(long)]
        exclude: Vec<String>,

        /// Patterns to include (replaces the defaults)
        #[arg(short = 'i', long)]
        include: Vec<String>,

        /// Maximum file size in MB
        #[arg(long, default_value_t = DEFAULT_MAX_SIZE_MB)]
        max_size_mb: u64,
    },
}
