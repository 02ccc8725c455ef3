//! Accessible-button classifier.
//!
//! Decides whether a single button-like element is accessible, and if not,
//! which violation it represents. Classification is a pure function of the
//! node's name, attributes and children: no state is kept between calls, so
//! one `ButtonClassifier` can be shared across threads.

use std::collections::HashSet;
use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::node::{AttrValue, ChildNode, ElementNode};
use crate::utils::contains_alphanumeric;

pub const ARIA_LABEL: &str = "aria-label";

/// Literal element name always treated as an icon.
pub const SVG_TAG: &str = "svg";

/// A static `aria-label` with fewer words than this is not descriptive.
pub const MIN_LABEL_WORDS: usize = 5;

/// Recognized names for the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierConfig {
    #[serde(default = "default_button_names")]
    pub button_names: Vec<String>,
    #[serde(default = "default_button_component_names")]
    pub button_component_names: Vec<String>,
    #[serde(default = "default_icon_name_substring")]
    pub icon_name_substring: String,
}

fn default_button_names() -> Vec<String> {
    vec!["button".to_string()]
}

fn default_button_component_names() -> Vec<String> {
    vec!["Button".to_string()]
}

fn default_icon_name_substring() -> String {
    "Icon".to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            button_names: default_button_names(),
            button_component_names: default_button_component_names(),
            icon_name_substring: default_icon_name_substring(),
        }
    }
}

impl ClassifierConfig {
    /// Validate recognized names.
    ///
    /// Fails when no button name is configured at all, when a name is blank
    /// or contains whitespace (it could never match a tag), or when the icon
    /// substring is empty (it would match every child element).
    pub fn validate(&self) -> Result<()> {
        if self.button_names.is_empty() && self.button_component_names.is_empty() {
            bail!("'buttonNames' and 'buttonComponentNames' cannot both be empty");
        }

        let named_sets = [
            ("buttonNames", &self.button_names),
            ("buttonComponentNames", &self.button_component_names),
        ];
        for (key, names) in named_sets {
            for name in names {
                if name.trim().is_empty() {
                    bail!("Empty name in '{}'", key);
                }
                if name.chars().any(char::is_whitespace) {
                    bail!("Invalid name in '{}': \"{}\" contains whitespace", key, name);
                }
            }
        }

        if self.icon_name_substring.is_empty() {
            bail!("'iconNameSubstring' cannot be empty");
        }

        Ok(())
    }
}

/// Kind of accessibility violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViolationKind {
    /// No children at all, or a lone icon child and no `aria-label`.
    MissingLabelAndText,
    /// `aria-label=""`.
    EmptyLabel,
    /// Static `aria-label` with fewer than `MIN_LABEL_WORDS` words.
    LabelTooShort,
}

impl ViolationKind {
    /// Fixed human-readable message for this kind.
    pub fn message(&self) -> &'static str {
        match self {
            ViolationKind::MissingLabelAndText => "button has no text content and no aria-label",
            ViolationKind::EmptyLabel => "aria-label must not be empty",
            ViolationKind::LabelTooShort => "aria-label is too short to describe the button",
        }
    }

    /// Suggested fix shown under the diagnostic.
    pub fn hint(&self) -> &'static str {
        match self {
            ViolationKind::MissingLabelAndText => {
                "add visible text or an aria-label describing what the button does"
            }
            ViolationKind::EmptyLabel => {
                "describe the button's action in the aria-label, or remove the icon-only design"
            }
            ViolationKind::LabelTooShort => {
                "use at least 5 words, e.g. \"close the settings dialog window\""
            }
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingLabelAndText => write!(f, "missing-label-and-text"),
            ViolationKind::EmptyLabel => write!(f, "empty-label"),
            ViolationKind::LabelTooShort => write!(f, "label-too-short"),
        }
    }
}

/// A violation found on one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation<'a> {
    pub node: &'a ElementNode,
    pub kind: ViolationKind,
}

/// What the element's `aria-label` resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label<'a> {
    Absent,
    Static(&'a str),
    /// Present, content not known statically.
    Dynamic,
}

impl<'a> Label<'a> {
    fn of(node: &'a ElementNode) -> Self {
        match node.attribute(ARIA_LABEL) {
            None => Label::Absent,
            Some(AttrValue::Static(value)) => Label::Static(value),
            // A valueless attribute still counts as labelled: assume present.
            Some(AttrValue::Dynamic | AttrValue::Absent | AttrValue::Spread) => Label::Dynamic,
        }
    }
}

/// Classifier built from a validated `ClassifierConfig`.
#[derive(Debug, Clone)]
pub struct ButtonClassifier {
    button_names: HashSet<String>,
    icon_name_substring: String,
}

impl ButtonClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let button_names = config
            .button_names
            .iter()
            .chain(config.button_component_names.iter())
            .cloned()
            .collect();
        Ok(Self {
            button_names,
            icon_name_substring: config.icon_name_substring.clone(),
        })
    }

    /// Whether `name` is a recognized button element or component.
    pub fn is_button(&self, name: &str) -> bool {
        self.button_names.contains(name)
    }

    /// Whether `name` looks like an icon element.
    pub fn is_icon(&self, name: &str) -> bool {
        name == SVG_TAG || name.contains(self.icon_name_substring.as_str())
    }

    /// Classify one element. Returns at most one violation.
    pub fn classify<'a>(&self, node: &'a ElementNode) -> Vec<Violation<'a>> {
        self.violation_kind(node)
            .map(|kind| Violation { node, kind })
            .into_iter()
            .collect()
    }

    fn violation_kind(&self, node: &ElementNode) -> Option<ViolationKind> {
        if !self.is_button(&node.name) {
            return None;
        }

        if node.children.is_empty() {
            return Some(ViolationKind::MissingLabelAndText);
        }

        let content = significant_children(&node.children);
        let label = Label::of(node);

        if label == Label::Absent && self.is_icon_only(&content) {
            return Some(ViolationKind::MissingLabelAndText);
        }

        match label {
            Label::Static("") => Some(ViolationKind::EmptyLabel),
            Label::Static(text) if word_count(text) < MIN_LABEL_WORDS => {
                Some(ViolationKind::LabelTooShort)
            }
            Label::Static(_) | Label::Dynamic | Label::Absent => None,
        }
    }

    fn is_icon_only(&self, content: &[&ChildNode]) -> bool {
        match content {
            [ChildNode::Element(child)] => self.is_icon(&child.name),
            _ => false,
        }
    }
}

/// Children that carry content, in order.
///
/// Text without any alphanumeric character (indentation, line breaks,
/// punctuation) is dropped. Elements and expressions are always kept: an
/// expression may render visible text at runtime.
pub fn significant_children(children: &[ChildNode]) -> Vec<&ChildNode> {
    children
        .iter()
        .filter(|child| match child {
            ChildNode::Text(text) => contains_alphanumeric(text),
            ChildNode::Element(_) | ChildNode::Expression | ChildNode::EmptyExpression => true,
        })
        .collect()
}

/// Word count of a label, splitting on single spaces.
pub fn word_count(label: &str) -> usize {
    label.split(' ').count()
}
