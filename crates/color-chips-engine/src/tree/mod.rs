//! # Document Tree
//!
//! A small hast-like tree: parent nodes (`Root`, `Element`) own an ordered
//! list of children, `Text` nodes carry the prose the rewriter scans.
//!
//! ## Modules
//!
//! - **`visit`**: depth-first walkers over text nodes and parent child lists

pub mod visit;

pub use visit::{visit_parents_mut, visit_text_mut};

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Top of a document. Only ever appears as the tree root.
    Root { children: Vec<Node> },
    /// A markup element such as `p` or `span`.
    Element {
        tag_name: String,
        properties: Properties,
        children: Vec<Node>,
    },
    /// Plain text content.
    Text { value: String },
    Comment { value: String },
    /// Markup passed through verbatim from the source document.
    Raw { value: String },
}

/// Attributes of an element.
///
/// `class_name` and `style` are broken out because stages read and write them
/// directly; everything else keeps source order in `attributes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    pub class_name: Vec<String>,
    pub style: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl Properties {
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class_name.push(class.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.class_name.is_empty() && self.style.is_none() && self.attributes.is_empty()
    }
}

impl Node {
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    pub fn element(tag_name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            tag_name: tag_name.into(),
            properties: Properties::default(),
            children,
        }
    }

    pub fn element_with(
        tag_name: impl Into<String>,
        properties: Properties,
        children: Vec<Node>,
    ) -> Self {
        Node::Element {
            tag_name: tag_name.into(),
            properties,
            children,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// The discriminant tag of this node, as used by hast (`"text"`, `"element"`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root { .. } => "root",
            Node::Element { .. } => "element",
            Node::Text { .. } => "text",
            Node::Comment { .. } => "comment",
            Node::Raw { .. } => "raw",
        }
    }

    pub fn text_value(&self) -> Option<&str> {
        match self {
            Node::Text { value } => Some(value),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root { children } | Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children } | Node::Element { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element { tag_name, .. } => Some(tag_name),
            _ => None,
        }
    }

    pub fn properties(&self) -> Option<&Properties> {
        match self {
            Node::Element { properties, .. } => Some(properties),
            _ => None,
        }
    }

    /// Concatenation of every text node below (and including) this node, in
    /// document order.
    pub fn text_content(&self) -> String {
        fn collect(node: &Node, out: &mut String) {
            match node {
                Node::Text { value } => out.push_str(value),
                Node::Root { children } | Node::Element { children, .. } => {
                    for child in children {
                        collect(child, out);
                    }
                }
                Node::Comment { .. } | Node::Raw { .. } => {}
            }
        }

        let mut out = String::new();
        collect(self, &mut out);
        out
    }
}
