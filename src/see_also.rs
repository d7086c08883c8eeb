//! See-also resolver.
//!
//! numpydoc hands `See Also` over as a ragged nested list where a reference
//! looks like `["name", null]` or `["name", "func"]` and trailing descriptions are bare strings, e.g.
//! `[[[["sobel", null]], []], [[["other.mod.fn", null]], ["Some text"]]]`.
//! The nesting is flattened once into [`SeeAlsoEntry`] values before anything
//! is rendered.

use crate::label::RenderOptions;
use crate::node::Node;
use serde_json::Value;

/// A normalised see-also item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeeAlsoEntry {
    /// Literal text, rendered unparsed.
    Text(String),
    /// Reference to another function. `qualified` names already carry their
    /// module path (`module.submodule.function`).
    CrossRef { name: String, qualified: bool },
}

impl SeeAlsoEntry {
    fn cross_ref(name: &str) -> Self {
        SeeAlsoEntry::CrossRef {
            name: name.to_string(),
            qualified: name.contains('.'),
        }
    }
}

/// Flatten the raw value, dropping empty strings and anything that is
/// neither text nor a reference pair.
pub fn normalize(value: &Value) -> Vec<SeeAlsoEntry> {
    let mut entries = Vec::new();
    collect(value, 0, &mut entries);
    entries
}

/// Nesting level of the `[name, role]` pairs in numpydoc output:
/// outer list → entry → name list → pair.
const NAME_PAIR_LEVEL: usize = 3;

fn collect(value: &Value, level: usize, out: &mut Vec<SeeAlsoEntry>) {
    match value {
        Value::String(text) if !text.is_empty() => out.push(SeeAlsoEntry::Text(text.clone())),
        Value::Array(items) => match as_pair(items, level) {
            Some(name) if !name.is_empty() => out.push(SeeAlsoEntry::cross_ref(name)),
            Some(_) => {}
            None => items.iter().for_each(|item| collect(item, level + 1, out)),
        },
        _ => {}
    }
}

/// `[name, null]` is a reference wherever it appears. `[name, role]` only
/// inside a name list; shallower it is a pair of description lines.
fn as_pair(items: &[Value], level: usize) -> Option<&str> {
    match items {
        [Value::String(name), Value::Null] => Some(name.as_str()),
        [Value::String(name), Value::String(_)] if level >= NAME_PAIR_LEVEL => Some(name.as_str()),
        _ => None,
    }
}

/// Anchor label a cross-reference resolves to. Unqualified names are assumed
/// to live in the current submodule.
pub fn resolve(name: &str, qualified: bool, opts: &RenderOptions) -> String {
    if qualified {
        name.to_string()
    } else {
        opts.with_function(name).label()
    }
}

/// `See Also` section for a function rendered with `opts`: heading at
/// `opts.depth + 1`, a paragraph of comma-separated links, then a paragraph
/// with the free text joined by spaces.
pub fn section(value: &Value, opts: &RenderOptions) -> Vec<Node> {
    let entries = normalize(value);

    let links: Vec<Node> = entries
        .iter()
        .filter_map(|entry| match entry {
            SeeAlsoEntry::CrossRef { name, qualified } => {
                Some(Node::anchor_link(&resolve(name, *qualified, opts), name.as_str()))
            }
            SeeAlsoEntry::Text(_) => None,
        })
        .collect();
    let text = entries
        .iter()
        .filter_map(|entry| match entry {
            SeeAlsoEntry::Text(text) => Some(text.as_str()),
            SeeAlsoEntry::CrossRef { .. } => None,
        })
        .collect::<Vec<_>>()
        .join(" ");

    if links.is_empty() && text.is_empty() {
        return Vec::new();
    }

    let mut out = vec![Node::heading(opts.nested().depth, "See Also")];
    if !links.is_empty() {
        let mut children = Vec::with_capacity(links.len() * 2);
        for (i, link) in links.into_iter().enumerate() {
            if i > 0 {
                children.push(Node::text(", "));
            }
            children.push(link);
        }
        out.push(Node::paragraph(children));
    }
    if !text.is_empty() {
        out.push(Node::paragraph(vec![Node::text(text)]));
    }
    out
}
