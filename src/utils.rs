//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphanumeric character.
///
/// Returns false for empty strings, whitespace and pure punctuation.
///
/// # Examples
///
/// ```
/// use ariabtn::utils::contains_alphanumeric;
///
/// assert!(contains_alphanumeric("Save"));
/// assert!(contains_alphanumeric("保存"));
/// assert!(contains_alphanumeric("42"));
/// assert!(!contains_alphanumeric("\n    "));
/// assert!(!contains_alphanumeric("---"));
/// assert!(!contains_alphanumeric(""));
/// ```
pub fn contains_alphanumeric(text: &str) -> bool {
    text.chars().any(|c| c.is_alphanumeric())
}
