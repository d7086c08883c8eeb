//! Output tree — generic mdast-style nodes handed back to the host.
//!
//! Serialises as JSON objects tagged by `type`, the shape MyST-style
//! document pipelines consume directly.

use serde::Serialize;

/// A single node of the generated document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Text {
        value: String,
    },
    Emphasis {
        children: Vec<Node>,
    },
    InlineCode {
        value: String,
    },
    Link {
        url: String,
        children: Vec<Node>,
    },
    Heading {
        depth: usize,
        children: Vec<Node>,
    },
    Paragraph {
        children: Vec<Node>,
    },
    DefinitionList {
        children: Vec<Node>,
    },
    DefinitionTerm {
        children: Vec<Node>,
    },
    DefinitionDescription {
        children: Vec<Node>,
    },
    Code {
        lang: String,
        value: String,
    },
    Admonition {
        kind: String,
        children: Vec<Node>,
    },
    /// Anchor that links elsewhere in the document can point at.
    #[serde(rename = "mystTarget")]
    Target {
        label: String,
    },
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Heading with a single text child.
    pub fn heading(depth: usize, title: impl Into<String>) -> Self {
        Node::Heading {
            depth,
            children: vec![Node::text(title)],
        }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    /// Link to an in-document anchor; `label` is used without the leading `#`.
    pub fn anchor_link(label: &str, display: impl Into<String>) -> Self {
        Node::Link {
            url: format!("#{}", label),
            children: vec![Node::text(display)],
        }
    }

    pub fn target(label: impl Into<String>) -> Self {
        Node::Target {
            label: label.into(),
        }
    }

    pub fn code(lang: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Code {
            lang: lang.into(),
            value: value.into(),
        }
    }

    /// Children of a parent node; leaves return an empty slice.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Emphasis { children }
            | Node::Link { children, .. }
            | Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::DefinitionList { children }
            | Node::DefinitionTerm { children }
            | Node::DefinitionDescription { children }
            | Node::Admonition { children, .. } => children,
            Node::Text { .. } | Node::InlineCode { .. } | Node::Code { .. } | Node::Target { .. } => {
                &[]
            }
        }
    }
}

/// Top-level container returned by a text parser and by the directive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "root")]
pub struct Root {
    pub children: Vec<Node>,
}

impl Root {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_string(&Node::heading(2, "Parameters")).unwrap();
        assert_eq!(
            json,
            r#"{"type":"heading","depth":2,"children":[{"type":"text","value":"Parameters"}]}"#
        );
    }

    #[test]
    fn target_uses_myst_name() {
        let json = serde_json::to_string(&Node::target("mod.sub.fn")).unwrap();
        assert_eq!(json, r#"{"type":"mystTarget","label":"mod.sub.fn"}"#);
    }

    #[test]
    fn camel_case_variants() {
        let json = serde_json::to_string(&Node::DefinitionTerm { children: vec![] }).unwrap();
        assert_eq!(json, r#"{"type":"definitionTerm","children":[]}"#);
        let json = serde_json::to_string(&Node::InlineCode { value: "x".into() }).unwrap();
        assert_eq!(json, r#"{"type":"inlineCode","value":"x"}"#);
    }

    #[test]
    fn root_serializes_as_root() {
        let json = serde_json::to_string(&Root::new(vec![Node::text("a")])).unwrap();
        assert_eq!(json, r#"{"type":"root","children":[{"type":"text","value":"a"}]}"#);
    }

    #[test]
    fn anchor_link_prefixes_hash() {
        assert_eq!(
            Node::anchor_link("a.b", "b"),
            Node::Link {
                url: "#a.b".to_string(),
                children: vec![Node::text("b")],
            }
        );
    }
}
