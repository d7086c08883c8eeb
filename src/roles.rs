//! Small standalone node constructors: the `func` cross-reference role and the
//! `versionadded` / `versionchanged` / `deprecated` note.

use crate::node::Node;

/// Inline link to a documented function's anchor.
pub fn func_role(target: &str) -> Node {
    Node::anchor_link(target, target)
}

/// Kind of version note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChange {
    Added,
    Changed,
    Deprecated,
}

impl VersionChange {
    /// Map a directive name; anything unrecognised reads as `versionadded`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "versionchanged" => VersionChange::Changed,
            "deprecated" => VersionChange::Deprecated,
            _ => VersionChange::Added,
        }
    }

    /// Whether `name` is one of the directive names handled here.
    pub fn is_directive(name: &str) -> bool {
        matches!(name, "versionadded" | "versionchanged" | "deprecated")
    }

    fn verb(self) -> &'static str {
        match self {
            VersionChange::Added => "Added",
            VersionChange::Changed => "Changed",
            VersionChange::Deprecated => "Deprecated",
        }
    }
}

/// Note admonition such as "Added in Version 0.19".
pub fn version_note(change: VersionChange, version: &str) -> Node {
    Node::Admonition {
        kind: "note".to_string(),
        children: vec![Node::paragraph(vec![Node::text(format!(
            "{} in Version {}",
            change.verb(),
            version
        ))])],
    }
}
