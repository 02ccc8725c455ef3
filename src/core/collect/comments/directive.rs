//! ariabtn directive parsing.
//!
//! Suppression directives:
//! - `ariabtn-disable` / `ariabtn-enable` - suppress a line range
//! - `ariabtn-disable-next-line` - suppress the next code line
//!
//! A directive may name the rule it targets and carry a description after
//! `--`, e.g. `ariabtn-disable-next-line icon-button-label -- legacy toolbar`.

use regex::Regex;
use std::sync::LazyLock;

use crate::issues::Rule;

static DIRECTIVE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ariabtn-(disable-next-line|disable|enable)(?:\s+(.*))?$").unwrap()
});

/// ariabtn comment directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Disable,
    Enable,
    DisableNextLine,
}

impl Directive {
    /// Parse directive from comment text (SWC has already stripped `//` and `/* */`).
    ///
    /// Returns `None` if the text is not a directive, or if it names rules
    /// that do not include ours.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = DIRECTIVE_REGEX.captures(text.trim())?;

        if let Some(rest) = caps.get(2)
            && !targets_rule(rest.as_str())
        {
            return None;
        }

        match caps.get(1)?.as_str() {
            "disable-next-line" => Some(Self::DisableNextLine),
            "disable" => Some(Self::Disable),
            "enable" => Some(Self::Enable),
            _ => None,
        }
    }
}

/// No rule list means every rule.
fn targets_rule(rest: &str) -> bool {
    let rules = rest.split("--").next().unwrap_or_default();
    let mut names = rules
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|name| !name.is_empty())
        .peekable();

    if names.peek().is_none() {
        return true;
    }
    let ours = Rule::IconButtonLabel.to_string();
    names.any(|name| name == ours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_parse_basic() {
        assert_eq!(
            Directive::parse("ariabtn-disable-next-line"),
            Some(Directive::DisableNextLine)
        );
        assert_eq!(Directive::parse("ariabtn-disable"), Some(Directive::Disable));
        assert_eq!(Directive::parse("ariabtn-enable"), Some(Directive::Enable));
    }

    #[test]
    fn test_directive_parse_trims_comment_padding() {
        assert_eq!(
            Directive::parse("  ariabtn-disable-next-line  "),
            Some(Directive::DisableNextLine)
        );
    }

    #[test]
    fn test_directive_parse_with_rule() {
        assert_eq!(
            Directive::parse("ariabtn-disable-next-line icon-button-label"),
            Some(Directive::DisableNextLine)
        );
        assert_eq!(
            Directive::parse("ariabtn-disable parse-error, icon-button-label"),
            Some(Directive::Disable)
        );
    }

    #[test]
    fn test_directive_parse_with_description() {
        assert_eq!(
            Directive::parse("ariabtn-disable-next-line -- decorative toolbar"),
            Some(Directive::DisableNextLine)
        );
        assert_eq!(
            Directive::parse("ariabtn-disable icon-button-label -- legacy"),
            Some(Directive::Disable)
        );
    }

    #[test]
    fn test_directive_parse_other_rule() {
        assert_eq!(Directive::parse("ariabtn-disable-next-line other-rule"), None);
    }

    #[test]
    fn test_directive_parse_not_directive() {
        assert_eq!(Directive::parse("just a comment"), None);
        assert_eq!(Directive::parse("ariabtn-disabled"), None);
        assert_eq!(Directive::parse("eslint-disable-next-line"), None);
        assert_eq!(Directive::parse(""), None);
    }
}
