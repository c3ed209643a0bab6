//! HTML back stage: serializes a document tree to markup.
//!
//! Chips need no special handling here; they are ordinary `span` elements
//! whose `style` attribute is written out like any other.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::tree::{Node, Properties};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input"];

/// Elements followed by a newline so the output stays diffable.
const BLOCK_ELEMENTS: &[&str] = &[
    "p",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "pre",
    "blockquote",
    "ul",
    "ol",
    "li",
    "table",
    "thead",
    "tr",
    "hr",
];

pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Root { children } => {
            for child in children {
                write_node(child, out);
            }
        }
        Node::Element {
            tag_name,
            properties,
            children,
        } => {
            out.push('<');
            out.push_str(tag_name);
            write_properties(properties, out);
            out.push('>');

            if !VOID_ELEMENTS.contains(&tag_name.as_str()) {
                for child in children {
                    write_node(child, out);
                }
                out.push_str("</");
                out.push_str(tag_name);
                out.push('>');
            }

            if BLOCK_ELEMENTS.contains(&tag_name.as_str()) {
                out.push('\n');
            }
        }
        Node::Text { value } => out.push_str(&encode_text(value)),
        Node::Comment { value } => {
            out.push_str("<!--");
            out.push_str(value);
            out.push_str("-->");
        }
        Node::Raw { value } => out.push_str(value),
    }
}

fn write_properties(properties: &Properties, out: &mut String) {
    if !properties.class_name.is_empty() {
        write_attribute("class", &properties.class_name.join(" "), out);
    }
    if let Some(style) = &properties.style {
        write_attribute("style", style, out);
    }
    for (name, value) in &properties.attributes {
        write_attribute(name, value, out);
    }
}

fn write_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}
