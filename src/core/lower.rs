//! Lowering of swc JSX nodes into the classifier's `ElementNode` model.
//!
//! Anything whose value cannot be known statically is lowered to a dynamic
//! variant, never dropped, so the classifier can assume content or a label
//! is present.

use swc_ecma_ast::{
    Expr, JSXAttr, JSXAttrName, JSXAttrOrSpread, JSXAttrValue, JSXElement, JSXElementChild,
    JSXElementName, JSXExpr, JSXMemberExpr, JSXObject, Lit,
};

use crate::core::node::{AttrValue, Attribute, ChildNode, ElementNode};

/// Lower a JSX element and its whole subtree.
pub fn lower_element(element: &JSXElement) -> ElementNode {
    let mut children = Vec::with_capacity(element.children.len());
    lower_children(&element.children, &mut children);

    ElementNode {
        name: element_name(&element.opening.name),
        attributes: element.opening.attrs.iter().map(lower_attr).collect(),
        children,
        span: element.span,
    }
}

/// Name as written in source: `button`, `Icons.Close`, `svg:path`.
pub fn element_name(name: &JSXElementName) -> String {
    match name {
        JSXElementName::Ident(ident) => ident.sym.to_string(),
        JSXElementName::JSXMemberExpr(member) => member_expr_name(member),
        JSXElementName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

fn member_expr_name(member: &JSXMemberExpr) -> String {
    let object = match &member.obj {
        JSXObject::Ident(ident) => ident.sym.to_string(),
        JSXObject::JSXMemberExpr(inner) => member_expr_name(inner),
    };
    format!("{}.{}", object, member.prop.sym)
}

fn lower_attr(attr: &JSXAttrOrSpread) -> Attribute {
    match attr {
        JSXAttrOrSpread::SpreadElement(_) => Attribute::spread(),
        JSXAttrOrSpread::JSXAttr(attr) => Attribute::new(attr_name(attr), attr_value(attr)),
    }
}

fn attr_name(attr: &JSXAttr) -> String {
    match &attr.name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

fn attr_value(attr: &JSXAttr) -> AttrValue {
    let Some(value) = &attr.value else {
        return AttrValue::Absent;
    };

    match value {
        JSXAttrValue::Str(s) => match s.value.as_str() {
            Some(value) => AttrValue::Static(value.to_string()),
            // Lone surrogates: not representable, treat as unknown
            None => AttrValue::Dynamic,
        },
        JSXAttrValue::JSXExprContainer(container) => match &container.expr {
            JSXExpr::Expr(expr) => static_string(expr)
                .map(AttrValue::Static)
                .unwrap_or(AttrValue::Dynamic),
            JSXExpr::JSXEmptyExpr(_) => AttrValue::Dynamic,
        },
        JSXAttrValue::JSXElement(_) | JSXAttrValue::JSXFragment(_) => AttrValue::Dynamic,
    }
}

/// String value of an expression when it is a literal: `"x"`, `` `x` ``,
/// possibly parenthesized.
fn static_string(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => {
            let mut value = String::new();
            for quasi in &tpl.quasis {
                value.push_str(quasi.cooked.as_ref()?.as_str()?);
            }
            Some(value)
        }
        Expr::Paren(paren) => static_string(&paren.expr),
        _ => None,
    }
}

fn lower_children(children: &[JSXElementChild], out: &mut Vec<ChildNode>) {
    for child in children {
        match child {
            JSXElementChild::JSXText(text) => out.push(ChildNode::text(text.value.to_string())),
            JSXElementChild::JSXElement(element) => {
                out.push(ChildNode::element(lower_element(element)))
            }
            JSXElementChild::JSXExprContainer(container) => match &container.expr {
                JSXExpr::JSXEmptyExpr(_) => out.push(ChildNode::EmptyExpression),
                JSXExpr::Expr(_) => out.push(ChildNode::Expression),
            },
            JSXElementChild::JSXSpreadChild(_) => out.push(ChildNode::Expression),
            // Fragments render their children in place
            JSXElementChild::JSXFragment(fragment) => lower_children(&fragment.children, out),
        }
    }
}
