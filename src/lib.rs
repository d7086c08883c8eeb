//! npdoc — turn npdoc2json docstring records into a generic document tree.
//!
//! A record maps submodule → function → numpydoc sections. Rendering walks it
//! top-down and produces mdast-style [`Node`]s: anchors, headings, definition
//! lists for parameter groups, code blocks for examples and resolved
//! "See Also" links. Prose is handed to a caller-supplied [`TextParser`].
//!
//! ```text
//! directive  → argument parsing, record loading, target selection
//!   ↓
//! render     → module / submodule / function sections
//!   ↓
//! fields, see_also → one documentation field at a time
//!   ↓
//! label, node, model
//! ```

pub mod directive;
pub mod error;
pub mod fields;
pub mod label;
pub mod markup;
pub mod model;
pub mod node;
pub mod render;
pub mod roles;
pub mod see_also;

pub use directive::{run, DirectiveArg, Selection};
pub use error::{Error, Result};
pub use label::{label, RenderOptions};
pub use markup::{MarkupParser, TextParser};
pub use model::{FunctionDoc, Parameter, Record, Submodule};
pub use node::{Node, Root};
