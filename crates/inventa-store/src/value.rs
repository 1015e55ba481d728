//! Typed asset content

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;

use crate::error::StoreError;

/// Parsed body of an asset, keyed by field name
pub type Content = BTreeMap<String, FieldValue>;

/// A single content value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Explicit null (`key:` or `key: null`)
    Null,
    /// Boolean
    Bool(bool),
    /// Integer number
    Integer(i64),
    /// Floating point number
    Float(f64),
    /// Plain string
    String(String),
    /// Sequence of values
    List(Vec<FieldValue>),
    /// Nested mapping
    Map(BTreeMap<String, FieldValue>),
}

/// Structural kind of a [`FieldValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    List,
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Float => write!(f, "float"),
            ValueKind::String => write!(f, "string"),
            ValueKind::List => write!(f, "list"),
            ValueKind::Map => write!(f, "map"),
        }
    }
}

impl FieldValue {
    /// Structural kind of this value
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Null => ValueKind::Null,
            FieldValue::Bool(_) => ValueKind::Bool,
            FieldValue::Integer(_) => ValueKind::Integer,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::String(_) => ValueKind::String,
            FieldValue::List(_) => ValueKind::List,
            FieldValue::Map(_) => ValueKind::Map,
        }
    }

    /// Null or the empty string
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// JSON form, used to render structured values
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Integer(n) => serde_json::Value::from(*n),
            FieldValue::Float(n) => serde_json::Number::from_f64(*n)
                .map_or_else(|| serde_json::Value::String(n.to_string()), serde_json::Value::Number),
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::List(items) => {
                serde_json::Value::Array(items.iter().map(FieldValue::to_json).collect())
            }
            FieldValue::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

/// Scalars print the way the inventory tooling has always shown them:
/// `True`/`False`, `None`, and floats that keep a fractional part (`1.0`).
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("None"),
            FieldValue::Bool(true) => f.write_str("True"),
            FieldValue::Bool(false) => f.write_str("False"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Float(n) => write_float(f, *n),
            FieldValue::String(s) => f.write_str(s),
            FieldValue::List(_) | FieldValue::Map(_) => write!(f, "{}", self.to_json()),
        }
    }
}

/// Shortest round-trip digits; whole numbers keep `.0`, and very large or
/// very small magnitudes switch to `1e+16` / `1e-05` notation.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("nan");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "inf" } else { "-inf" });
    }

    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{n:e}");
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = exponent
            .strip_prefix('-')
            .map_or(("+", exponent), |digits| ("-", digits));
        return write!(f, "{mantissa}e{sign}{digits:0>2}");
    }

    if n.fract() == 0.0 {
        write!(f, "{n:.1}")
    } else {
        write!(f, "{n}")
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<YamlValue> for FieldValue {
    fn from(value: YamlValue) -> Self {
        match value {
            YamlValue::Null => FieldValue::Null,
            YamlValue::Bool(b) => FieldValue::Bool(b),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    FieldValue::Float(f)
                } else {
                    // u64 beyond i64::MAX
                    FieldValue::String(n.to_string())
                }
            }
            YamlValue::String(s) => FieldValue::String(s),
            YamlValue::Sequence(items) => {
                FieldValue::List(items.into_iter().map(FieldValue::from).collect())
            }
            YamlValue::Mapping(mapping) => FieldValue::Map(
                mapping
                    .into_iter()
                    .map(|(k, v)| (FieldValue::from(k).to_string(), FieldValue::from(v)))
                    .collect(),
            ),
            YamlValue::Tagged(tagged) => FieldValue::from(tagged.value),
        }
    }
}

/// Parse an asset body into [`Content`]
///
/// An empty or comment-only body is an empty mapping. Any other top-level
/// value than a mapping is rejected.
///
/// # Errors
/// Returns [`StoreError::Parse`] if the body is not valid YAML or not a mapping.
pub fn parse_content(path: &Path, text: &str) -> Result<Content, StoreError> {
    if text.trim().is_empty() {
        return Ok(Content::new());
    }

    let value: YamlValue =
        serde_yaml::from_str(text).map_err(|e| StoreError::parse(path, e.to_string()))?;

    match FieldValue::from(value) {
        FieldValue::Null => Ok(Content::new()),
        FieldValue::Map(map) => Ok(map),
        other => Err(StoreError::parse(
            path,
            format!("expected a mapping of fields, found {}", other.kind()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Content, StoreError> {
        parse_content(Path::new("laptop_apple_macbook.1"), text)
    }

    #[test]
    fn test_parse_scalars() {
        let content = parse("num: 8\nstr: 'foo'\nbool: true\nratio: 1.5\nnothing:\n").unwrap();

        assert_eq!(content["num"], FieldValue::Integer(8));
        assert_eq!(content["str"], FieldValue::from("foo"));
        assert_eq!(content["bool"], FieldValue::Bool(true));
        assert_eq!(content["ratio"], FieldValue::Float(1.5));
        assert_eq!(content["nothing"], FieldValue::Null);
    }

    #[test]
    fn test_parse_empty_body() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n").unwrap().is_empty());
        assert!(parse("# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let err = parse("- a\n- b\n").unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("found list"));
    }

    #[test]
    fn test_parse_rejects_invalid_yaml() {
        let err = parse("key: [unclosed\n").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_structured_string_form() {
        let content = parse("ram: [8, 16]\ndisplay: {size: 14, panel: ips}\n").unwrap();

        assert_eq!(content["ram"].kind(), ValueKind::List);
        assert_eq!(content["ram"].to_string(), "[8,16]");
        assert_eq!(content["display"].kind(), ValueKind::Map);
        assert_eq!(content["display"].to_string(), r#"{"panel":"ips","size":14}"#);
    }

    #[test]
    fn test_non_string_mapping_keys() {
        let content = parse("ports:\n  80: http\n  true: yes\n").unwrap();
        let FieldValue::Map(ports) = &content["ports"] else {
            panic!("expected map");
        };

        assert_eq!(ports["80"], FieldValue::from("http"));
        assert_eq!(ports["True"], FieldValue::from("yes"));
    }

    #[test]
    fn test_scalar_string_form() {
        let content = parse("on: true
off: false
nothing: null
num: 8
str: 'True'
").unwrap();

        assert_eq!(content["on"].to_string(), "True");
        assert_eq!(content["off"].to_string(), "False");
        assert_eq!(content["nothing"].to_string(), "None");
        assert_eq!(content["num"].to_string(), "8");
        assert_eq!(content["str"].to_string(), "True");
    }

    #[test]
    fn test_float_string_form() {
        let content = parse("whole: 1.0
half: 16.5
neg: -2.0
tiny: 0.00001
huge: 1.0e20
").unwrap();

        assert_eq!(content["whole"], FieldValue::Float(1.0));
        assert_eq!(content["whole"].to_string(), "1.0");
        assert_eq!(content["half"].to_string(), "16.5");
        assert_eq!(content["neg"].to_string(), "-2.0");
        assert_eq!(content["tiny"].to_string(), "1e-05");
        assert_eq!(content["huge"].to_string(), "1e+20");
        assert_eq!(FieldValue::Float(0.0).to_string(), "0.0");
        assert_eq!(FieldValue::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(FieldValue::Float(f64::NAN).to_string(), "nan");
    }

    #[test]
    fn test_is_blank() {
        assert!(FieldValue::Null.is_blank());
        assert!(FieldValue::from("").is_blank());
        assert!(!FieldValue::from(" ").is_blank());
        assert!(!FieldValue::List(Vec::new()).is_blank());
        assert!(!FieldValue::Integer(0).is_blank());
    }
}
