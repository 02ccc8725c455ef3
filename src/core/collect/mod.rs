//! Per-file collection that runs before classification.
//!
//! Currently this is the suppression directives found in a file's comments.

pub mod comments;

pub use comments::collector::CommentCollector;
pub use comments::directive::Directive;
pub use comments::suppressions::{DisabledRange, Suppressions};
