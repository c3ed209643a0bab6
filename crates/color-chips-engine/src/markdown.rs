//! Markdown front stage: builds a document tree from markdown source with
//! `pulldown-cmark`.
//!
//! The tree mirrors what an HTML renderer would emit (`p`, `h1`, `pre > code`,
//! ...). Consecutive text events are merged so a text node holds a whole run
//! of prose, which keeps literals split by markdown escapes (`\:#fff`) in one
//! value.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::tree::{Node, Properties};

/// Parses `source` (CommonMark plus tables, strikethrough and task lists).
pub fn to_tree(source: &str) -> Node {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(source, options) {
        builder.event(event);
    }
    builder.finish()
}

/// An element under construction. `tag: None` is a fragment whose children
/// are inlined into the parent when it closes.
struct Frame {
    tag: Option<String>,
    properties: Properties,
    children: Vec<Node>,
}

impl Frame {
    fn element(tag: &str) -> Self {
        Self::with(tag, Properties::default())
    }

    fn with(tag: &str, properties: Properties) -> Self {
        Self {
            tag: Some(tag.to_string()),
            properties,
            children: vec![],
        }
    }

    fn fragment() -> Self {
        Self {
            tag: None,
            properties: Properties::default(),
            children: vec![],
        }
    }
}

struct TreeBuilder {
    stack: Vec<Frame>,
    in_table_head: bool,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::fragment()],
            in_table_head: false,
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(TagEnd::CodeBlock) => {
                self.close(); // code
                self.close(); // pre
            }
            Event::End(TagEnd::TableHead) => {
                self.in_table_head = false;
                self.close(); // tr
                self.close(); // thead
            }
            Event::End(_) => self.close(),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                self.push(Node::element("code", vec![Node::text(code.to_string())]))
            }
            Event::Html(html) | Event::InlineHtml(html) => self.push(Node::Raw {
                value: html.to_string(),
            }),
            Event::SoftBreak => self.push_text("\n"),
            Event::HardBreak => self.push(Node::element("br", vec![])),
            Event::Rule => self.push(Node::element("hr", vec![])),
            Event::TaskListMarker(checked) => {
                let mut properties = Properties::default()
                    .with_attribute("type", "checkbox")
                    .with_attribute("disabled", "");
                if checked {
                    properties = properties.with_attribute("checked", "");
                }
                self.push(Node::element_with("input", properties, vec![]));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        let frame = match tag {
            Tag::Paragraph => Frame::element("p"),
            Tag::Heading { level, .. } => Frame::element(&level.to_string()),
            Tag::BlockQuote(_) => Frame::element("blockquote"),
            Tag::CodeBlock(kind) => {
                self.stack.push(Frame::element("pre"));
                let mut code = Properties::default();
                if let CodeBlockKind::Fenced(info) = kind
                    && let Some(lang) = info.split_whitespace().next()
                {
                    code = code.with_class(format!("language-{lang}"));
                }
                Frame::with("code", code)
            }
            Tag::List(Some(start)) => {
                let mut properties = Properties::default();
                if start != 1 {
                    properties = properties.with_attribute("start", start.to_string());
                }
                Frame::with("ol", properties)
            }
            Tag::List(None) => Frame::element("ul"),
            Tag::Item => Frame::element("li"),
            Tag::Table(_) => Frame::element("table"),
            Tag::TableHead => {
                self.in_table_head = true;
                self.stack.push(Frame::element("thead"));
                Frame::element("tr")
            }
            Tag::TableRow => Frame::element("tr"),
            Tag::TableCell => Frame::element(if self.in_table_head { "th" } else { "td" }),
            Tag::Emphasis => Frame::element("em"),
            Tag::Strong => Frame::element("strong"),
            Tag::Strikethrough => Frame::element("del"),
            Tag::Link {
                dest_url, title, ..
            } => {
                let mut properties =
                    Properties::default().with_attribute("href", dest_url.to_string());
                if !title.is_empty() {
                    properties = properties.with_attribute("title", title.to_string());
                }
                Frame::with("a", properties)
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                let mut properties =
                    Properties::default().with_attribute("src", dest_url.to_string());
                if !title.is_empty() {
                    properties = properties.with_attribute("title", title.to_string());
                }
                Frame::with("img", properties)
            }
            _ => Frame::fragment(),
        };
        self.stack.push(frame);
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            return;
        }
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame.tag {
            None => {
                for child in frame.children {
                    self.push(child);
                }
            }
            Some(tag) if tag == "img" => {
                // Alt text arrives as child events; hast keeps it as an attribute.
                let alt = Node::root(frame.children).text_content();
                let mut properties = frame.properties;
                properties.attributes.insert(1, ("alt".to_string(), alt));
                self.push(Node::element_with(tag, properties, vec![]));
            }
            Some(tag) => self.push(Node::element_with(tag, frame.properties, frame.children)),
        }
    }

    fn push(&mut self, node: Node) {
        if let Node::Text { value } = &node {
            self.push_text(value);
            return;
        }
        if let Some(frame) = self.stack.last_mut() {
            frame.children.push(node);
        }
    }

    fn push_text(&mut self, text: &str) {
        let Some(frame) = self.stack.last_mut() else {
            return;
        };
        match frame.children.last_mut() {
            Some(Node::Text { value }) => value.push_str(text),
            _ => frame.children.push(Node::text(text)),
        }
    }

    fn finish(mut self) -> Node {
        while self.stack.len() > 1 {
            self.close();
        }
        let children = self.stack.pop().map(|f| f.children).unwrap_or_default();
        Node::root(children)
    }
}
