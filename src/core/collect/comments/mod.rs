//! Suppression comments.
//!
//! - `collector`: CommentCollector, turns a file's comments into suppressions
//! - `directive`: directive parsing
//! - `suppressions`: suppression tracking by line

pub mod collector;
pub mod directive;
pub mod suppressions;
