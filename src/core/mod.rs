//! Core analysis engine.
//!
//! - `parsers`: swc parsing of TSX/JSX sources
//! - `lower`: JSX AST lowered into host-independent `ElementNode` trees
//! - `node`: The element tree the classifier reads
//! - `classify`: Icon button classification
//! - `collect`: Suppression directives from comments
//! - `extract`: Per-file traversal producing located issues
//! - `file_scanner`: Source file discovery
//! - `context`: `CheckContext`, the per-run orchestrator

pub mod classify;
pub mod collect;
pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod lower;
pub mod node;
pub mod parsers;

pub use context::{AllIconButtonIssues, AnalysisResults, CheckContext};
pub use data::{SourceContext, SourceLocation};
