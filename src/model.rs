//! Data model for npdoc2json records.
//!
//! The producer dumps numpydoc sections more or less verbatim, so several
//! fields change type depending on whether they were populated: free text is
//! a string or `[]`, line lists are an array or `""`. Deserialisation here is
//! best-effort: a value of the "unpopulated" shape reads as absent.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Whole record: module → submodule → function.
pub type Record = IndexMap<String, Submodule>;

/// Functions of one submodule, in source order.
pub type Submodule = IndexMap<String, FunctionDoc>;

/// Documentation of a single function. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FunctionDoc {
    #[serde(rename = "Summary", alias = "summary", deserialize_with = "lines")]
    pub summary: Option<Vec<String>>,
    #[serde(
        rename = "Extended Summary",
        alias = "extended_summary",
        deserialize_with = "text_block"
    )]
    pub extended_summary: Option<String>,
    #[serde(rename = "Parameters", alias = "parameters")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(rename = "Other Parameters", alias = "other_parameters")]
    pub other_parameters: Option<Vec<Parameter>>,
    #[serde(rename = "Returns", alias = "returns")]
    pub returns: Option<Vec<Parameter>>,
    #[serde(rename = "Yields", alias = "yields")]
    pub yields: Option<Vec<Parameter>>,
    #[serde(rename = "Receives", alias = "receives")]
    pub receives: Option<Vec<Parameter>>,
    #[serde(rename = "Raises", alias = "raises")]
    pub raises: Option<Vec<Parameter>>,
    #[serde(rename = "Warns", alias = "warns")]
    pub warns: Option<Vec<Parameter>>,
    #[serde(rename = "Attributes", alias = "attributes")]
    pub attributes: Option<Vec<Parameter>>,
    #[serde(rename = "Notes", alias = "notes", deserialize_with = "text_block")]
    pub notes: Option<String>,
    #[serde(rename = "References", alias = "references", deserialize_with = "line_block")]
    pub references: Option<Vec<String>>,
    #[serde(rename = "Examples", alias = "examples", deserialize_with = "line_block")]
    pub examples: Option<Vec<String>>,
    /// Raw `See Also` value; its nesting is normalised by the see-also resolver.
    #[serde(rename = "See Also", alias = "see_also")]
    pub see_also: Option<Value>,
}

/// One entry of a parameter-like section (Parameters, Returns, Raises, ...).
///
/// For exceptions and unnamed returns `name` is empty and `type` carries the
/// display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub desc: String,
}

impl Parameter {
    pub fn new(name: &str, ty: &str, desc: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            desc: desc.to_string(),
        }
    }

    /// Name shown in the definition term.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.ty
        } else {
            &self.name
        }
    }

    /// Type annotation, only when both name and type are present.
    pub fn annotation(&self) -> Option<&str> {
        if !self.name.is_empty() && !self.ty.is_empty() {
            Some(&self.ty)
        } else {
            None
        }
    }
}

/// `"text"` → Some, `[]` (or anything else) → None.
fn text_block<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// `["a", "b"]` → Some, `""` (or anything else) → None.
fn line_block<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(string_items(items)),
        _ => None,
    })
}

/// Like [`line_block`] but a bare string counts as a single line.
fn lines<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => Some(string_items(items)),
        Some(Value::String(s)) => Some(vec![s]),
        _ => None,
    })
}

fn string_items(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(json: &str) -> FunctionDoc {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn numpydoc_keys() {
        let f = func(
            r#"{
                "Summary": ["Add numbers."],
                "Extended Summary": "More text.",
                "Parameters": [{"name": "x", "type": "int", "desc": "First."}],
                "Notes": "A note.",
                "Examples": [">>> add(1, 2)", "3"]
            }"#,
        );
        assert_eq!(f.summary, Some(vec!["Add numbers.".to_string()]));
        assert_eq!(f.extended_summary.as_deref(), Some("More text."));
        assert_eq!(f.parameters, Some(vec![Parameter::new("x", "int", "First.")]));
        assert_eq!(f.notes.as_deref(), Some("A note."));
        assert_eq!(f.examples.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn snake_case_aliases() {
        let f = func(r#"{"summary": ["s"], "other_parameters": [], "see_also": []}"#);
        assert_eq!(f.summary, Some(vec!["s".to_string()]));
        assert_eq!(f.other_parameters, Some(vec![]));
        assert!(f.see_also.is_some());
    }

    #[test]
    fn unpopulated_shapes_read_as_absent() {
        let f = func(r#"{"Extended Summary": [], "Notes": [], "References": "", "Examples": ""}"#);
        assert_eq!(f.extended_summary, None);
        assert_eq!(f.notes, None);
        assert_eq!(f.references, None);
        assert_eq!(f.examples, None);
    }

    #[test]
    fn unknown_keys_ignored() {
        let f = func(r#"{"Signature": "", "Methods": [], "index": {}}"#);
        assert_eq!(f, FunctionDoc::default());
    }

    #[test]
    fn parameter_fields_default_to_empty() {
        let p: Parameter = serde_json::from_str(r#"{"type": "ValueError"}"#).unwrap();
        assert_eq!(p.display_name(), "ValueError");
        assert_eq!(p.annotation(), None);
    }

    #[test]
    fn parameter_with_name_and_type() {
        let p = Parameter::new("x", "int", "");
        assert_eq!(p.display_name(), "x");
        assert_eq!(p.annotation(), Some("int"));
    }

    #[test]
    fn record_preserves_key_order() {
        let record: Record = serde_json::from_str(
            r#"{"zeta": {"b": {}, "a": {}}, "alpha": {"c": {}}}"#,
        )
        .unwrap();
        let subs: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(subs, ["zeta", "alpha"]);
        let funcs: Vec<&str> = record["zeta"].keys().map(String::as_str).collect();
        assert_eq!(funcs, ["b", "a"]);
    }
}
