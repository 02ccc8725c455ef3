//! ariabtn - accessible icon button checker for React/JSX
//!
//! ariabtn is a CLI tool and library that finds icon-only buttons in JSX/TSX
//! sources which lack a descriptive `aria-label`. A button whose only content
//! is an `<svg>` or an `*Icon*` component gives screen reader users nothing
//! to announce unless it is labelled.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine (parsing, lowering, classification)
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Detection rules
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
