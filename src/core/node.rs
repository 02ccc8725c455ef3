//! Markup tree model consumed by the classifier.
//!
//! The host lowers swc AST nodes into these types (see `crate::core::lower`)
//! and the classifier only ever reads them. Only the element span is kept
//! from swc, for reporting.

use swc_common::{DUMMY_SP, Span};

/// An element in the markup tree (`<button ...>...</button>`, `<Icon />`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    /// Tag or component name as written (`button`, `Button`, `Icons.Close`).
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<ChildNode>,
    /// Source span of the whole element. `DUMMY_SP` for hand-built nodes.
    pub span: Span,
}

impl ElementNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            span: DUMMY_SP,
        }
    }

    pub fn with_attr(mut self, attr: Attribute) -> Self {
        self.attributes.push(attr);
        self
    }

    pub fn with_child(mut self, child: ChildNode) -> Self {
        self.children.push(child);
        self
    }

    /// Look up a named attribute, skipping spreads.
    ///
    /// Spread attributes never match: their keys are not statically known.
    /// When the same name appears more than once the last one wins, as it
    /// does at runtime.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes
            .iter()
            .rev()
            .filter(|attr| !attr.value.is_spread())
            .find(|attr| attr.name == name)
            .map(|attr| &attr.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Empty for spreads.
    pub name: String,
    pub value: AttrValue,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: AttrValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn static_str(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, AttrValue::Static(value.into()))
    }

    pub fn dynamic(name: impl Into<String>) -> Self {
        Self::new(name, AttrValue::Dynamic)
    }

    /// `{...props}`
    pub fn spread() -> Self {
        Self::new(String::new(), AttrValue::Spread)
    }
}

/// Value of an attribute as far as static analysis can tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Literal string known at analysis time (may be empty).
    Static(String),
    /// Runtime expression; content unknown.
    Dynamic,
    /// Object spread onto the element.
    Spread,
    /// Attribute written without a value (`<button aria-label>`).
    Absent,
}

impl AttrValue {
    pub fn is_spread(&self) -> bool {
        matches!(self, AttrValue::Spread)
    }
}

/// A child of an element, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildNode {
    Text(String),
    Element(ElementNode),
    /// `{expr}`: may render anything, including visible text.
    Expression,
    /// `{}` or `{/* comment */}`.
    EmptyExpression,
}

impl ChildNode {
    pub fn text(text: impl Into<String>) -> Self {
        ChildNode::Text(text.into())
    }

    pub fn element(node: ElementNode) -> Self {
        ChildNode::Element(node)
    }
}
