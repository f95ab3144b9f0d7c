use std::fmt::{self, Write};

use crate::Node;
use crate::escape::escape_into;

/// Returns true if `tag` is a void element: serialized with no content
/// and no closing tag, per the HTML5 list.
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Serialize `node` and its subtree into `out`.
///
/// The only failure channel is the sink's own `fmt::Error`, propagated
/// untouched; well-formed trees over an infallible sink cannot fail.
pub fn render<W: Write>(node: &Node, out: &mut W) -> fmt::Result {
    match node {
        Node::Doctype(root) => {
            out.write_str("<!DOCTYPE html>")?;
            render(root, out)
        }
        Node::Element { tag, children } => render_element(tag, children, out),
        Node::Attr { name, value } => write_attr(name, value, out),
        Node::BoolAttr { name } => write_bool_attr(name, out),
        Node::Text(t) => escape_into(t, out),
        Node::Raw(markup) => out.write_str(markup),
        Node::Group(children) => {
            for child in children {
                render(child, out)?;
            }
            Ok(())
        }
        Node::Empty => Ok(()),
    }
}

/// Serialize `node` into a fresh `String`.
pub fn render_to_string(node: &Node) -> String {
    let mut out = String::new();
    render(node, &mut out).expect("String sink does not fail");
    out
}

/// Two-pass element serialization: the child list is walked once for
/// attributes (into the opening tag) and once for content (into the tag
/// body). Attributes therefore always precede content in the output,
/// whatever their relative order in the child list.
fn render_element<W: Write>(tag: &str, children: &[Node], out: &mut W) -> fmt::Result {
    out.write_char('<')?;
    out.write_str(tag)?;
    attribute_pass(children, out)?;
    out.write_char('>')?;
    if is_void_element(tag) {
        return Ok(());
    }
    content_pass(children, out)?;
    out.write_str("</")?;
    out.write_str(tag)?;
    out.write_char('>')
}

// Groups are spliced in place, recursively, so attributes bundled into a
// reusable group land in the opening tag at any nesting depth. Emission
// order is flattened child order, never sorted.
fn attribute_pass<W: Write>(children: &[Node], out: &mut W) -> fmt::Result {
    for child in children {
        match child {
            Node::Attr { name, value } => write_attr(name, value, out)?,
            Node::BoolAttr { name } => write_bool_attr(name, out)?,
            Node::Group(inner) => attribute_pass(inner, out)?,
            _ => {}
        }
    }
    Ok(())
}

// Same flattening as the attribute pass; attribute-kind nodes are the
// ones skipped here.
fn content_pass<W: Write>(children: &[Node], out: &mut W) -> fmt::Result {
    for child in children {
        match child {
            Node::Attr { .. } | Node::BoolAttr { .. } => {}
            Node::Group(inner) => content_pass(inner, out)?,
            other => render(other, out)?,
        }
    }
    Ok(())
}

fn write_attr<W: Write>(name: &str, value: &str, out: &mut W) -> fmt::Result {
    out.write_char(' ')?;
    out.write_str(name)?;
    out.write_str("=\"")?;
    escape_into(value, out)?;
    out.write_char('"')
}

fn write_bool_attr<W: Write>(name: &str, out: &mut W) -> fmt::Result {
    out.write_char(' ')?;
    out.write_str(name)
}
