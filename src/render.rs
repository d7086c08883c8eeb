//! Function, submodule and module renderers.

use crate::fields;
use crate::label::RenderOptions;
use crate::markup::TextParser;
use crate::model::{FunctionDoc, Parameter, Record, Submodule};
use crate::node::Node;
use crate::see_also;
use tracing::trace;

/// Optional parts of a function section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    ExtendedSummary,
    Parameters,
    OtherParameters,
    Returns,
    Yields,
    Receives,
    Raises,
    Warns,
    Attributes,
    Notes,
    References,
    Examples,
    SeeAlso,
}

/// Emission order of the sections, after the anchor and heading.
pub const SECTION_ORDER: [Section; 14] = [
    Section::Summary,
    Section::ExtendedSummary,
    Section::Parameters,
    Section::OtherParameters,
    Section::Returns,
    Section::Yields,
    Section::Receives,
    Section::Raises,
    Section::Warns,
    Section::Attributes,
    Section::Notes,
    Section::References,
    Section::Examples,
    Section::SeeAlso,
];

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::ExtendedSummary => "Extended Summary",
            Section::Parameters => "Parameters",
            Section::OtherParameters => "Other Parameters",
            Section::Returns => "Returns",
            Section::Yields => "Yields",
            Section::Receives => "Receives",
            Section::Raises => "Raises",
            Section::Warns => "Warns",
            Section::Attributes => "Attributes",
            Section::Notes => "Notes",
            Section::References => "References",
            Section::Examples => "Examples",
            Section::SeeAlso => "See Also",
        }
    }

    fn parameters(self, func: &FunctionDoc) -> Option<&[Parameter]> {
        let params = match self {
            Section::Parameters => &func.parameters,
            Section::OtherParameters => &func.other_parameters,
            Section::Returns => &func.returns,
            Section::Yields => &func.yields,
            Section::Receives => &func.receives,
            Section::Raises => &func.raises,
            Section::Warns => &func.warns,
            Section::Attributes => &func.attributes,
            _ => return None,
        };
        params.as_deref()
    }

    /// Whether `func` carries this section at all.
    pub fn is_present(self, func: &FunctionDoc) -> bool {
        match self {
            Section::Summary => func.summary.is_some(),
            Section::ExtendedSummary => func.extended_summary.is_some(),
            Section::Notes => func.notes.is_some(),
            Section::References => func.references.is_some(),
            Section::Examples => func.examples.is_some(),
            Section::SeeAlso => func.see_also.is_some(),
            _ => self.parameters(func).is_some(),
        }
    }

    /// Nodes for this section. `opts` is the function's own context, `inner`
    /// the nested one (depth + 1, function set).
    fn render(
        self,
        func: &FunctionDoc,
        parser: &dyn TextParser,
        opts: &RenderOptions,
        inner: &RenderOptions,
    ) -> Vec<Node> {
        let depth = opts.nested().depth;
        match self {
            Section::Summary => func
                .summary
                .as_deref()
                .map(|lines| fields::summary(lines, parser))
                .unwrap_or_default(),
            Section::ExtendedSummary => func
                .extended_summary
                .as_deref()
                .map(|text| fields::free_text(text, parser))
                .unwrap_or_default(),
            Section::Notes => func
                .notes
                .as_deref()
                .map(|text| fields::titled_text(self.title(), text, parser, depth))
                .unwrap_or_default(),
            Section::References => func
                .references
                .as_deref()
                .map(|lines| fields::references(lines, parser, depth))
                .unwrap_or_default(),
            Section::Examples => func
                .examples
                .as_deref()
                .map(|lines| fields::examples(lines, depth))
                .unwrap_or_default(),
            Section::SeeAlso => func
                .see_also
                .as_ref()
                .map(|value| see_also::section(value, opts))
                .unwrap_or_default(),
            _ => self
                .parameters(func)
                .map(|params| fields::parameter_group(self.title(), params, parser, inner))
                .unwrap_or_default(),
        }
    }
}

/// Full section for one function: anchor, heading at `opts.depth`, then every
/// present section in [`SECTION_ORDER`].
pub fn function(
    name: &str,
    func: &FunctionDoc,
    parser: &dyn TextParser,
    opts: &RenderOptions,
) -> Vec<Node> {
    let inner = opts.nested().with_function(name);
    let label = inner.label();
    trace!(%label, "rendering function");

    let mut section = vec![Node::target(label), Node::heading(opts.depth, name)];
    for part in SECTION_ORDER {
        if part.is_present(func) {
            section.extend(part.render(func, parser, opts, &inner));
        }
    }
    section
}

/// Anchor and heading for the submodule, followed by each of its functions
/// one level deeper.
pub fn submodule(
    name: &str,
    functions: &Submodule,
    parser: &dyn TextParser,
    opts: &RenderOptions,
) -> Vec<Node> {
    let inner = RenderOptions {
        function: None,
        ..opts.nested().with_submodule(name)
    };
    let mut section = vec![Node::target(inner.label()), Node::heading(opts.depth, name)];
    for (func_name, func) in functions {
        section.extend(function(func_name, func, parser, &inner));
    }
    section
}

/// Every submodule of the record in order. The module itself has no heading.
pub fn module(record: &Record, parser: &dyn TextParser, opts: &RenderOptions) -> Vec<Node> {
    record
        .iter()
        .flat_map(|(name, functions)| submodule(name, functions, parser, opts))
        .collect()
}
