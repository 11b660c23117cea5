use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A property value carried by a node or edge.
///
/// GraphML data is typed by its `<key>` declaration; everything a declaration
/// can express maps onto one of these variants. `List` and `Null` never come
/// out of the parser today but are part of the value model so the formatter
/// covers every shape a mapping layer could produce.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<PropertyValue>),
    Null,
}

impl PropertyValue {
    /// Render this value as a Cypher literal.
    ///
    /// This is the sole boundary between untrusted attribute data and
    /// generated query text: strings are single-quoted with `\` and `'`
    /// escaped, numbers and booleans render as their canonical literals,
    /// lists recurse element-wise, null renders as `null`.
    pub fn to_cypher(&self) -> String {
        match self {
            PropertyValue::String(s) => quote_str(s),
            PropertyValue::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            PropertyValue::Int(i) => i.to_string(),
            PropertyValue::Float(f) => {
                if !f.is_finite() {
                    // NaN/infinity have no Cypher literal form.
                    "null".to_string()
                } else if f.fract() == 0.0 {
                    // Keep the fractional part so whole-valued doubles stay
                    // floats in the store instead of collapsing to Int.
                    format!("{f:.1}")
                } else {
                    f.to_string()
                }
            }
            PropertyValue::List(items) => {
                let inner: Vec<String> = items.iter().map(PropertyValue::to_cypher).collect();
                format!("[{}]", inner.join(", "))
            }
            PropertyValue::Null => "null".to_string(),
        }
    }

    /// Plain text form, used when an attribute value becomes a label or
    /// relationship type rather than a property.
    pub fn as_text(&self) -> String {
        match self {
            PropertyValue::String(s) => s.clone(),
            other => other.to_cypher(),
        }
    }
}

/// Quote a string as a Cypher literal, escaping backslashes and single quotes.
pub fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Quote a label, relationship type, or property key for use in query text.
///
/// Backticks keep arbitrary GraphML attribute names (spaces, punctuation,
/// Cypher keywords) from being interpreted as query syntax.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Ordered attribute map of a node or edge after label extraction.
pub type Properties = IndexMap<String, PropertyValue>;

/// One node of the extracted graph.
///
/// The identifier is taken verbatim from the GraphML `id` attribute and is
/// immutable once extracted. `label` is derived from the `label` attribute,
/// falling back to `type`, then to the generic default; the matched
/// attribute is removed from `properties`.
#[derive(Debug, Clone)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
    pub properties: Properties,
}

/// One edge of the extracted graph.
///
/// Parallel edges each yield their own record. Endpoint identifiers are not
/// validated at extraction time; a dangling reference surfaces at load time
/// as a skipped relationship.
#[derive(Debug, Clone)]
pub struct EdgeRecord {
    pub source_id: String,
    pub target_id: String,
    pub rel_type: String,
    pub properties: Properties,
}

/// Aggregate shape of an extracted graph, recomputed on demand from the
/// record vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphTopology {
    pub node_labels: Vec<String>,
    pub relationship_types: Vec<String>,
    pub node_count: usize,
    pub edge_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_string_escapes_quotes() {
        let v = PropertyValue::String("O'Brien".to_string());
        assert_eq!(v.to_cypher(), r"'O\'Brien'");
    }

    #[test]
    fn format_string_escapes_backslashes() {
        let v = PropertyValue::String(r"a\b".to_string());
        assert_eq!(v.to_cypher(), r"'a\\b'");
    }

    #[test]
    fn format_injection_attempt_stays_quoted() {
        let v = PropertyValue::String("'}) MATCH (m) DETACH DELETE m //".to_string());
        let rendered = v.to_cypher();
        assert!(rendered.starts_with('\''));
        assert!(rendered.ends_with('\''));
        // The interior quote cannot terminate the literal.
        assert!(rendered.contains(r"\'"));
    }

    #[test]
    fn format_booleans() {
        assert_eq!(PropertyValue::Bool(true).to_cypher(), "true");
        assert_eq!(PropertyValue::Bool(false).to_cypher(), "false");
    }

    #[test]
    fn format_numbers() {
        assert_eq!(PropertyValue::Int(-42).to_cypher(), "-42");
        assert_eq!(PropertyValue::Float(2.5).to_cypher(), "2.5");
    }

    #[test]
    fn format_whole_floats_keep_fractional_part() {
        // A whole-valued double must stay a float literal; rendering "1"
        // would flip the stored property type to Int.
        assert_eq!(PropertyValue::Float(1.0).to_cypher(), "1.0");
        assert_eq!(PropertyValue::Float(-3.0).to_cypher(), "-3.0");
        assert_eq!(PropertyValue::Float(0.0).to_cypher(), "0.0");
    }

    #[test]
    fn format_non_finite_floats_as_null() {
        assert_eq!(PropertyValue::Float(f64::NAN).to_cypher(), "null");
        assert_eq!(PropertyValue::Float(f64::INFINITY).to_cypher(), "null");
        assert_eq!(PropertyValue::Float(f64::NEG_INFINITY).to_cypher(), "null");
    }

    #[test]
    fn format_list_recurses() {
        let v = PropertyValue::List(vec![
            PropertyValue::Int(1),
            PropertyValue::String("a".to_string()),
        ]);
        assert_eq!(v.to_cypher(), "[1, 'a']");
    }

    #[test]
    fn format_nested_list() {
        let v = PropertyValue::List(vec![
            PropertyValue::List(vec![PropertyValue::Bool(true)]),
            PropertyValue::Null,
        ]);
        assert_eq!(v.to_cypher(), "[[true], null]");
    }

    #[test]
    fn format_null() {
        assert_eq!(PropertyValue::Null.to_cypher(), "null");
    }

    #[test]
    fn quote_identifier_escapes_backticks() {
        assert_eq!(quote_identifier("Person"), "`Person`");
        assert_eq!(quote_identifier("we`ird"), "`we``ird`");
    }

    #[test]
    fn as_text_of_string_is_unquoted() {
        assert_eq!(
            PropertyValue::String("Person".to_string()).as_text(),
            "Person"
        );
        assert_eq!(PropertyValue::Int(7).as_text(), "7");
    }
}
