//! Per-file analyzer: walks a parsed module and classifies every button.
//!
//! The analyzer is the host side of the classifier. It lowers each candidate
//! `JSXElement` into an `ElementNode`, hands it to `ButtonClassifier`, and
//! turns the returned violations into located issues, dropping those on
//! suppressed lines. JSX is found wherever it appears: nested in other
//! elements, inside `{...}` expressions, in attribute values.

use std::sync::Arc;

use anyhow::Result;
use swc_common::{Loc, SourceMap};
use swc_ecma_ast::{JSXElement, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::classify::{ARIA_LABEL, ButtonClassifier, Violation};
use crate::core::collect::{CommentCollector, Suppressions};
use crate::core::lower::{element_name, lower_element};
use crate::core::node::AttrValue;
use crate::core::parsers::jsx::parse_jsx_source;
use crate::core::{SourceContext, SourceLocation};
use crate::issues::{IconButtonIssue, Severity};

pub struct FileAnalyzer<'a> {
    /// Path to the file being analyzed, as reported.
    file_path: &'a str,

    /// SWC source map for looking up line/column positions.
    source_map: &'a SourceMap,

    suppressions: &'a Suppressions,

    classifier: &'a ButtonClassifier,

    /// Severity attached to every issue this file produces.
    severity: Severity,

    issues: Vec<IconButtonIssue>,
}

impl<'a> FileAnalyzer<'a> {
    pub fn new(
        file_path: &'a str,
        source_map: &'a SourceMap,
        suppressions: &'a Suppressions,
        classifier: &'a ButtonClassifier,
        severity: Severity,
    ) -> Self {
        Self {
            file_path,
            source_map,
            suppressions,
            classifier,
            severity,
            issues: Vec::new(),
        }
    }

    /// Main entry point: analyze a module and return its issues.
    pub fn analyze(mut self, module: &Module) -> Vec<IconButtonIssue> {
        self.visit_module(module);
        self.issues
    }

    fn add_issue(&mut self, violation: Violation<'_>, loc: Loc) {
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        let label = match violation.node.attribute(ARIA_LABEL) {
            Some(AttrValue::Static(label)) => Some(label.clone()),
            _ => None,
        };

        self.issues.push(IconButtonIssue {
            context: SourceContext::new(
                SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
                source_line,
            ),
            element: violation.node.name.clone(),
            kind: violation.kind,
            label,
            severity: self.severity,
        });
    }
}

impl Visit for FileAnalyzer<'_> {
    fn visit_jsx_element(&mut self, node: &JSXElement) {
        // Only lower subtrees the classifier would look at
        if self.classifier.is_button(&element_name(&node.opening.name)) {
            let element = lower_element(node);
            for violation in self.classifier.classify(&element) {
                let loc = self.source_map.lookup_char_pos(violation.node.span.lo);
                if !self.suppressions.is_suppressed(loc.line) {
                    self.add_issue(violation, loc);
                }
            }
        }

        node.visit_children_with(self);
    }
}

/// Parse a source string and analyze it in one go.
pub fn analyze_source(
    code: String,
    file_path: &str,
    classifier: &ButtonClassifier,
    severity: Severity,
) -> Result<Vec<IconButtonIssue>> {
    let source_map = Arc::new(SourceMap::default());
    let parsed = parse_jsx_source(code, file_path, source_map)?;
    let suppressions = CommentCollector::collect(&parsed.comments, &parsed.source_map);

    let analyzer = FileAnalyzer::new(
        file_path,
        &parsed.source_map,
        &suppressions,
        classifier,
        severity,
    );
    Ok(analyzer.analyze(&parsed.module))
}
