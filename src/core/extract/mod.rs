//! File-level extraction: walking each parsed module for button elements.

pub mod file_analyzer;

pub use file_analyzer::{FileAnalyzer, analyze_source};
