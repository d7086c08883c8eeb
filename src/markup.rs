//! Text-to-tree parsing.
//!
//! Renderers never interpret markup themselves; they hand prose to a
//! [`TextParser`] and splice the returned root's children into the output.
//! Hosts supply their own parser; [`MarkupParser`] is the small built-in one
//! the CLI uses.

use crate::node::{Node, Root};
use crate::roles::{func_role, version_note, VersionChange};
use regex::Regex;
use std::sync::LazyLock;

/// Host callback turning prose into a tree.
pub trait TextParser {
    fn parse(&self, source: &str) -> Root;
}

impl<F> TextParser for F
where
    F: Fn(&str) -> Root,
{
    fn parse(&self, source: &str) -> Root {
        self(source)
    }
}

// {func}`target`, ``literal``, `code`, *emphasis*
static RE_INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{func\}`([^`]+)`|``([^`]+)``|`([^`]+)`|\*([^*\s](?:[^*]*[^*\s])?)\*").unwrap()
});

// {directive} argument
static RE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{([A-Za-z][\w-]*)\}\s*(.*)$").unwrap());

/// Minimal MyST-flavoured parser: paragraphs, fenced code, version notes and
/// a handful of inline constructs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupParser;

impl TextParser for MarkupParser {
    fn parse(&self, source: &str) -> Root {
        let mut children = Vec::new();
        let mut paragraph: Vec<&str> = Vec::new();
        let mut lines = source.lines();

        while let Some(line) = lines.next() {
            if let Some(info) = line.trim_start().strip_prefix("```") {
                flush_paragraph(&mut paragraph, &mut children);
                let mut body = Vec::new();
                for inner in lines.by_ref() {
                    if inner.trim_start().starts_with("```") {
                        break;
                    }
                    body.push(inner);
                }
                children.push(fenced_block(info.trim(), &body.join("\n")));
                continue;
            }
            if line.trim().is_empty() {
                flush_paragraph(&mut paragraph, &mut children);
                continue;
            }
            paragraph.push(line.trim_end());
        }
        flush_paragraph(&mut paragraph, &mut children);

        Root::new(children)
    }
}

fn flush_paragraph(lines: &mut Vec<&str>, out: &mut Vec<Node>) {
    if lines.is_empty() {
        return;
    }
    out.push(Node::paragraph(parse_inline(&lines.join("\n"))));
    lines.clear();
}

/// Fenced block: version directives become notes, anything else is code.
fn fenced_block(info: &str, body: &str) -> Node {
    if let Some(caps) = RE_DIRECTIVE.captures(info) {
        let name = &caps[1];
        let argument = caps[2].trim();
        if VersionChange::is_directive(name) {
            return version_note(VersionChange::from_name(name), argument);
        }
        let lang = argument.split_whitespace().next().unwrap_or(name);
        return Node::code(lang, body);
    }
    let lang = info.split_whitespace().next().unwrap_or("");
    Node::code(lang, body)
}

/// Split a paragraph into text, inline code, emphasis and `func` links.
pub fn parse_inline(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut last = 0;

    for caps in RE_INLINE.captures_iter(text) {
        let whole = caps.get(0).map_or(0..0, |m| m.range());
        if whole.start > last {
            nodes.push(Node::text(&text[last..whole.start]));
        }
        if let Some(target) = caps.get(1) {
            nodes.push(func_role(target.as_str()));
        } else if let Some(code) = caps.get(2).or_else(|| caps.get(3)) {
            nodes.push(Node::InlineCode {
                value: code.as_str().to_string(),
            });
        } else if let Some(emph) = caps.get(4) {
            nodes.push(Node::Emphasis {
                children: vec![Node::text(emph.as_str())],
            });
        }
        last = whole.end;
    }
    if last < text.len() {
        nodes.push(Node::text(&text[last..]));
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_has_no_children() {
        assert!(MarkupParser.parse("").children.is_empty());
        assert!(MarkupParser.parse("\n  \n").children.is_empty());
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let root = MarkupParser.parse("First line\nsame paragraph.\n\nSecond.");
        assert_eq!(
            root.children,
            vec![
                Node::paragraph(vec![Node::text("First line\nsame paragraph.")]),
                Node::paragraph(vec![Node::text("Second.")]),
            ]
        );
    }

    #[test]
    fn inline_constructs() {
        let nodes = parse_inline("Use `x` with *care*, see {func}`mod.fn`.");
        assert_eq!(
            nodes,
            vec![
                Node::text("Use "),
                Node::InlineCode { value: "x".into() },
                Node::text(" with "),
                Node::Emphasis {
                    children: vec![Node::text("care")]
                },
                Node::text(", see "),
                func_role("mod.fn"),
                Node::text("."),
            ]
        );
    }

    #[test]
    fn double_backtick_literal() {
        assert_eq!(
            parse_inline("between ``low`` and ``high``"),
            vec![
                Node::text("between "),
                Node::InlineCode { value: "low".into() },
                Node::text(" and "),
                Node::InlineCode { value: "high".into() },
            ]
        );
    }

    #[test]
    fn lone_asterisk_is_text() {
        assert_eq!(parse_inline("a * b"), vec![Node::text("a * b")]);
    }

    #[test]
    fn fenced_code_keeps_body() {
        let root = MarkupParser.parse("Intro.\n```python\nx = 1\n\ny = 2\n```\nAfter.");
        assert_eq!(
            root.children,
            vec![
                Node::paragraph(vec![Node::text("Intro.")]),
                Node::code("python", "x = 1\n\ny = 2"),
                Node::paragraph(vec![Node::text("After.")]),
            ]
        );
    }

    #[test]
    fn version_directive_becomes_note() {
        let root = MarkupParser.parse("```{versionchanged} 0.19\n```");
        assert_eq!(
            root.children,
            vec![version_note(VersionChange::Changed, "0.19")]
        );
    }

    #[test]
    fn other_directive_becomes_code() {
        let root = MarkupParser.parse("```{code-block} python\nprint(1)\n```");
        assert_eq!(root.children, vec![Node::code("python", "print(1)")]);
    }

    #[test]
    fn closures_are_parsers() {
        let parser = |s: &str| Root::new(vec![Node::text(s.to_uppercase())]);
        assert_eq!(parser.parse("a").children, vec![Node::text("A")]);
    }
}
