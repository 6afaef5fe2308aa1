//! # Document Nodes
//!
//! `Node` is the immutable, JSON-like tree that documents and schemas are
//! held in while they are validated.
//!
//! ## Numeric Kinds
//!
//! Numbers keep the representation they arrived in:
//!
//! - `Int`: fits a signed 64-bit machine word.
//! - `BigInt`: integral, held without a width limit.
//! - `Decimal`: exact decimal digits and scale, never a binary float.
//! - `Float`: a binary float. Only this kind can hold `±Infinity` and `NaN`.
//!
//! The kind is a hint, not a guarantee: a `BigInt` may still fit a machine
//! word. Code that needs exact answers goes through [`Node::as_i64`] or
//! [`Node::to_big_decimal`] rather than matching on the kind alone.
//!
//! ## Ingestion
//!
//! JSON goes through `serde_json` built with `arbitrary_precision`, so every
//! numeral still has its literal text when it is classified. No JSON numeral
//! is routed through `f64`. YAML is the source of non-finite floats
//! (`.inf`, `-.inf`, `.nan`).

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::NodeError;

/// The shared absent sentinel handed out by lookups that find nothing.
pub static MISSING: Node = Node::Missing;

/// A document value.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// No value at all: the result of looking up an absent field.
    Missing,
    /// JSON `null`.
    Null,
    Bool(bool),
    String(String),
    /// Integer within `i64` range.
    Int(i64),
    /// Integer without a width limit.
    BigInt(BigInt),
    /// Binary floating point, including the non-finite values.
    Float(f64),
    /// Exact decimal.
    Decimal(BigDecimal),
    Array(Vec<Node>),
    Object(BTreeMap<String, Node>),
}

/// Discriminant of a [`Node`], for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Missing,
    Null,
    Boolean,
    String,
    Integer,
    BigInteger,
    Float,
    Decimal,
    Array,
    Object,
}

impl NodeKind {
    /// Lower-case name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Missing => "missing",
            NodeKind::Null => "null",
            NodeKind::Boolean => "boolean",
            NodeKind::String => "string",
            NodeKind::Integer => "integer",
            NodeKind::BigInteger => "big-integer",
            NodeKind::Float => "float",
            NodeKind::Decimal => "decimal",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Build an object node from field/value pairs.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Parse a JSON document.
    pub fn from_json_str(src: &str) -> Result<Self, NodeError> {
        let value: serde_json::Value = serde_json::from_str(src)?;
        Node::try_from(&value)
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(src: &str) -> Result<Self, NodeError> {
        let value: serde_yaml::Value = serde_yaml::from_str(src)?;
        Node::try_from(&value)
    }

    /// Classify a numeral by its literal text.
    ///
    /// `i64` range → `Int`; other integral text → `BigInt`; anything with
    /// a fraction or exponent → `Decimal`.
    pub fn from_numeral(text: &str) -> Result<Self, NodeError> {
        if let Ok(v) = text.parse::<i64>() {
            return Ok(Node::Int(v));
        }
        let integral = text
            .bytes()
            .all(|b| b.is_ascii_digit() || b == b'-' || b == b'+');
        if integral {
            BigInt::from_str(text)
                .map(Node::BigInt)
                .map_err(|_| NodeError::InvalidNumber(text.to_string()))
        } else {
            BigDecimal::from_str(text)
                .map(Node::Decimal)
                .map_err(|_| NodeError::InvalidNumber(text.to_string()))
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Missing => NodeKind::Missing,
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Boolean,
            Node::String(_) => NodeKind::String,
            Node::Int(_) => NodeKind::Integer,
            Node::BigInt(_) => NodeKind::BigInteger,
            Node::Float(_) => NodeKind::Float,
            Node::Decimal(_) => NodeKind::Decimal,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
        }
    }

    /// True for every numeric kind. Numeric text is not a number here;
    /// loose recognition of strings belongs to the schema layer.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Node::Int(_) | Node::BigInt(_) | Node::Float(_) | Node::Decimal(_)
        )
    }

    /// True for the integral kinds (`Int`, `BigInt`).
    pub fn is_integral(&self) -> bool {
        matches!(self, Node::Int(_) | Node::BigInt(_))
    }

    /// True when the node is tagged as an unbounded integer.
    pub fn is_big_integer(&self) -> bool {
        matches!(self, Node::BigInt(_))
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, Node::String(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Node::Missing)
    }

    pub fn is_positive_infinity(&self) -> bool {
        matches!(self, Node::Float(f) if *f == f64::INFINITY)
    }

    pub fn is_negative_infinity(&self) -> bool {
        matches!(self, Node::Float(f) if *f == f64::NEG_INFINITY)
    }

    /// Look up a field. Non-objects and absent fields yield [`MISSING`].
    pub fn get(&self, field: &str) -> &Node {
        match self {
            Node::Object(fields) => fields.get(field).unwrap_or(&MISSING),
            _ => &MISSING,
        }
    }

    /// The value as a machine integer, when it is integral and fits.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Int(v) => Some(*v),
            Node::BigInt(v) => v.to_i64(),
            _ => None,
        }
    }

    /// Canonical text of a scalar. Containers, `null` and `Missing` are empty.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Node::String(s) => Cow::Borrowed(s.as_str()),
            Node::Bool(b) => Cow::Owned(b.to_string()),
            Node::Int(v) => Cow::Owned(v.to_string()),
            Node::BigInt(v) => Cow::Owned(v.to_string()),
            Node::Float(v) => Cow::Owned(float_text(*v)),
            Node::Decimal(v) => Cow::Owned(v.to_string()),
            Node::Missing | Node::Null | Node::Array(_) | Node::Object(_) => Cow::Borrowed(""),
        }
    }

    /// Exact decimal value of the node's text form.
    ///
    /// Numeric kinds convert losslessly; strings convert when their text is
    /// a numeral. Non-finite floats and everything else yield `None`.
    pub fn to_big_decimal(&self) -> Option<BigDecimal> {
        match self {
            Node::Int(v) => Some(BigDecimal::from(*v)),
            Node::BigInt(v) => Some(BigDecimal::new(v.clone(), 0)),
            Node::Decimal(v) => Some(v.clone()),
            Node::Float(v) if v.is_finite() => BigDecimal::from_str(&float_text(*v)).ok(),
            Node::String(s) => BigDecimal::from_str(s).ok(),
            _ => None,
        }
    }
}

/// Shortest round-trip text, keeping a fractional part for integral values.
fn float_text(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "Infinity".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        format!("{v:?}")
    }
}

impl TryFrom<&serde_json::Value> for Node {
    type Error = NodeError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(Node::Null),
            Value::Bool(b) => Ok(Node::Bool(*b)),
            // With `arbitrary_precision` the number's Display is its literal text.
            Value::Number(n) => Node::from_numeral(&n.to_string()),
            Value::String(s) => Ok(Node::String(s.clone())),
            Value::Array(items) => {
                let items: Result<Vec<Node>, NodeError> = items.iter().map(Node::try_from).collect();
                Ok(Node::Array(items?))
            }
            Value::Object(map) => {
                let mut fields = BTreeMap::new();
                for (k, v) in map {
                    fields.insert(k.clone(), Node::try_from(v)?);
                }
                Ok(Node::Object(fields))
            }
        }
    }
}

impl TryFrom<&serde_yaml::Value> for Node {
    type Error = NodeError;

    fn try_from(yaml: &serde_yaml::Value) -> Result<Self, Self::Error> {
        use serde_yaml::Value;

        match yaml {
            Value::Null => Ok(Node::Null),
            Value::Bool(b) => Ok(Node::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Node::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Node::BigInt(BigInt::from(u)))
                } else if let Some(f) = n.as_f64() {
                    Ok(Node::Float(f))
                } else {
                    Err(NodeError::InvalidNumber(n.to_string()))
                }
            }
            Value::String(s) => Ok(Node::String(s.clone())),
            Value::Sequence(seq) => {
                let items: Result<Vec<Node>, NodeError> = seq.iter().map(Node::try_from).collect();
                Ok(Node::Array(items?))
            }
            Value::Mapping(map) => {
                let mut fields = BTreeMap::new();
                for (k, v) in map {
                    let key = match k {
                        Value::String(s) => s.clone(),
                        Value::Number(n) => n.to_string(),
                        Value::Bool(b) => b.to_string(),
                        other => return Err(NodeError::UnsupportedKey(format!("{other:?}"))),
                    };
                    fields.insert(key, Node::try_from(v)?);
                }
                Ok(Node::Object(fields))
            }
            // Tags carry no meaning for validation; keep the inner value.
            Value::Tagged(tagged) => Node::try_from(&tagged.value),
        }
    }
}

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Bool(v)
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::Int(v)
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Float(v)
    }
}

impl From<BigInt> for Node {
    fn from(v: BigInt) -> Self {
        Node::BigInt(v)
    }
}

impl From<BigDecimal> for Node {
    fn from(v: BigDecimal) -> Self {
        Node::Decimal(v)
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::String(v.to_string())
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::String(v)
    }
}
