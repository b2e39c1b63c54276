pub mod document;
pub mod file_collector;
pub mod locator;
pub mod pattern_matcher;
pub mod plan;
pub mod splice;
