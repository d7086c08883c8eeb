//! Field renderer — turns one documentation field into tree nodes.
//!
//! Every function here is pure: the output depends only on the field data,
//! the parser and the options passed in.

use crate::label::RenderOptions;
use crate::markup::TextParser;
use crate::model::Parameter;
use crate::node::Node;

/// Language tag of the `Examples` code block.
pub const EXAMPLES_LANG: &str = "python";

/// Term + description pair for one parameter.
///
/// `x : *int*` when both name and type are set, otherwise just the display
/// name.
pub fn parameter(param: &Parameter, parser: &dyn TextParser) -> [Node; 2] {
    let mut term = vec![Node::text(param.display_name())];
    if let Some(ty) = param.annotation() {
        term.push(Node::text(" : "));
        term.push(Node::Emphasis {
            children: vec![Node::text(ty)],
        });
    }
    [
        Node::DefinitionTerm { children: term },
        Node::DefinitionDescription {
            children: parser.parse(&param.desc).children,
        },
    ]
}

/// Heading at `opts.depth` followed by a definition list. An empty group
/// produces nothing at all.
pub fn parameter_group(
    title: &str,
    params: &[Parameter],
    parser: &dyn TextParser,
    opts: &RenderOptions,
) -> Vec<Node> {
    if params.is_empty() {
        return Vec::new();
    }
    vec![
        Node::heading(opts.depth, title),
        Node::DefinitionList {
            children: params.iter().flat_map(|p| parameter(p, parser)).collect(),
        },
    ]
}

/// Summary lines are trimmed and joined into one paragraph of source text.
pub fn summary(lines: &[String], parser: &dyn TextParser) -> Vec<Node> {
    parser.parse(&join_summary(lines)).children
}

pub fn join_summary(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Free text parsed as-is, with no heading.
pub fn free_text(text: &str, parser: &dyn TextParser) -> Vec<Node> {
    parser.parse(text).children
}

/// Free text under its own heading (`Notes`).
pub fn titled_text(title: &str, text: &str, parser: &dyn TextParser, depth: usize) -> Vec<Node> {
    let mut out = vec![Node::heading(depth, title)];
    out.extend(parser.parse(text).children);
    out
}

/// `References` section. Lines are newline-joined and parsed; citation
/// markers such as `.. [1]` are left to the parser.
pub fn references(lines: &[String], parser: &dyn TextParser, depth: usize) -> Vec<Node> {
    titled_text("References", &lines.join("\n"), parser, depth)
}

/// `Examples` section: one verbatim code block, never parsed as prose.
pub fn examples(lines: &[String], depth: usize) -> Vec<Node> {
    if lines.is_empty() {
        return Vec::new();
    }
    vec![
        Node::heading(depth, "Examples"),
        Node::code(EXAMPLES_LANG, lines.join("\n")),
    ]
}
