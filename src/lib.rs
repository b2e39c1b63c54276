pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod io;

pub use crate::core::document::Document;
pub use crate::core::locator::{LocateOptions, Region, locate, locate_with};
pub use crate::error::SpliceError;
