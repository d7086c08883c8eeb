//! Entry point: load a record and pick what to render.
//!
//! The directive argument is `path[#submodule[.function]]`. A selector that
//! names nothing in the record is not an error; the whole module is rendered
//! instead.

use crate::error::{Error, Result};
use crate::label::RenderOptions;
use crate::markup::TextParser;
use crate::model::{FunctionDoc, Record, Submodule};
use crate::node::{Node, Root};
use crate::render;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parsed directive argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveArg {
    pub path: PathBuf,
    /// Text between the first `#` and the next one, if any.
    pub target: Option<String>,
}

impl DirectiveArg {
    pub fn parse(arg: &str) -> Self {
        let mut parts = arg.split('#');
        let path = parts.next().unwrap_or(arg);
        let target = parts.next();
        Self {
            path: PathBuf::from(path),
            target: target.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }
}

/// What a selector resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    Module,
    Submodule {
        name: &'a str,
        functions: &'a Submodule,
    },
    Function {
        submodule: &'a str,
        name: &'a str,
        doc: &'a FunctionDoc,
    },
}

/// Resolve `submodule` / `submodule.function` against the record. Anything
/// past the second dotted component is ignored.
pub fn select<'a>(record: &'a Record, target: Option<&'a str>) -> Selection<'a> {
    let Some(target) = target else {
        return Selection::Module;
    };
    let mut parts = target.split('.');
    let submodule = parts.next().filter(|s| !s.is_empty());
    let function = parts.next().filter(|s| !s.is_empty());

    if let (Some(sub), Some(name)) = (submodule, function) {
        if let Some(doc) = record.get(sub).and_then(|functions| functions.get(name)) {
            return Selection::Function {
                submodule: sub,
                name,
                doc,
            };
        }
    }
    if let Some(sub) = submodule {
        if let Some(functions) = record.get(sub) {
            return Selection::Submodule {
                name: sub,
                functions,
            };
        }
    }
    debug!(selector = target, "selector matched nothing, rendering whole module");
    Selection::Module
}

/// Render the part of `record` named by `target`.
pub fn render(
    record: &Record,
    target: Option<&str>,
    parser: &dyn TextParser,
    opts: &RenderOptions,
) -> Vec<Node> {
    match select(record, target) {
        Selection::Function {
            submodule,
            name,
            doc,
        } => {
            debug!(submodule, function = name, "rendering single function");
            render::function(name, doc, parser, &opts.with_submodule(submodule))
        }
        Selection::Submodule { name, functions } => {
            debug!(submodule = name, "rendering single submodule");
            render::submodule(name, functions, parser, opts)
        }
        Selection::Module => {
            debug!(submodules = record.len(), "rendering module");
            render::module(record, parser, opts)
        }
    }
}

/// Read and deserialise an npdoc2json record.
pub fn load(path: &Path) -> Result<Record> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Whole directive: parse the argument, load the record once and render.
pub fn run(arg: &str, parser: &dyn TextParser, opts: &RenderOptions) -> Result<Root> {
    let arg = DirectiveArg::parse(arg);
    let record = load(&arg.path)?;
    Ok(Root::new(render(&record, arg.target.as_deref(), parser, opts)))
}
