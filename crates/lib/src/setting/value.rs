//! Kinds and scalar values of settings.
//!
//! Every setting has a [`Kind`] fixed at creation. Scalar kinds carry a
//! payload that can be read as a [`Value`] snapshot; container kinds carry
//! child settings instead.

use std::fmt;

use serde::Serialize;

/// The kind of a setting.
///
/// ## Scalar kinds
/// - [`Kind::Int`] - 64-bit signed integer
/// - [`Kind::Float`] - 64-bit floating point number
/// - [`Kind::Bool`] - boolean
/// - [`Kind::String`] - UTF-8 text
///
/// ## Container kinds
/// - [`Kind::Group`] - named members, addressable by path
/// - [`Kind::List`] - ordered unnamed elements of any kind
/// - [`Kind::Array`] - ordered unnamed scalar elements, all of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Int,
    Float,
    Bool,
    String,
    Group,
    List,
    Array,
}

impl Kind {
    /// Returns true for the four scalar kinds.
    pub fn is_scalar(self) -> bool {
        matches!(self, Kind::Int | Kind::Float | Kind::Bool | Kind::String)
    }

    /// Returns true for group, list and array.
    pub fn is_aggregate(self) -> bool {
        !self.is_scalar()
    }

    /// Returns the kind name as a string
    pub fn name(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::String => "string",
            Kind::Group => "group",
            Kind::List => "list",
            Kind::Array => "array",
        }
    }

    /// Returns the scalar kind, or `None` for containers.
    pub fn as_scalar(self) -> Option<ScalarKind> {
        match self {
            Kind::Int => Some(ScalarKind::Int),
            Kind::Float => Some(ScalarKind::Float),
            Kind::Bool => Some(ScalarKind::Bool),
            Kind::String => Some(ScalarKind::String),
            Kind::Group | Kind::List | Kind::Array => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int" => Ok(Kind::Int),
            "float" => Ok(Kind::Float),
            "bool" => Ok(Kind::Bool),
            "string" => Ok(Kind::String),
            "group" => Ok(Kind::Group),
            "list" => Ok(Kind::List),
            "array" => Ok(Kind::Array),
            other => Err(format!("unknown setting kind '{other}'")),
        }
    }
}

/// The scalar subset of [`Kind`].
///
/// Used where only scalar settings may be created, e.g.
/// [`Config::add_scalar_setting_to_parent`](crate::Config::add_scalar_setting_to_parent)
/// and array elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    Int,
    Float,
    Bool,
    String,
}

impl ScalarKind {
    /// The zero value a freshly created setting of this kind holds.
    pub fn default_value(self) -> Value {
        match self {
            ScalarKind::Int => Value::Int(0),
            ScalarKind::Float => Value::Float(0.0),
            ScalarKind::Bool => Value::Bool(false),
            ScalarKind::String => Value::String(String::new()),
        }
    }
}

impl From<ScalarKind> for Kind {
    fn from(kind: ScalarKind) -> Self {
        match kind {
            ScalarKind::Int => Kind::Int,
            ScalarKind::Float => Kind::Float,
            ScalarKind::Bool => Kind::Bool,
            ScalarKind::String => Kind::String,
        }
    }
}

impl std::str::FromStr for ScalarKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind: Kind = s.parse()?;
        kind.as_scalar()
            .ok_or_else(|| format!("'{kind}' is not a scalar kind"))
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Kind::from(*self).fmt(f)
    }
}

/// A snapshot of a scalar payload.
///
/// `Value` is an owned copy: changing it does not change the tree. Use the
/// `set_*` methods on [`Setting`](super::Setting) to mutate a setting.
///
/// ```
/// # use libconf::setting::{Kind, Value};
/// let value = Value::from(42);
/// assert_eq!(value.kind(), Kind::Int);
/// assert_eq!(value.as_int(), Some(42));
/// assert_eq!(value.as_float(), None); // no numeric coercion
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    String(String),
}

impl Value {
    /// Returns the kind of this value
    pub fn kind(&self) -> Kind {
        self.scalar_kind().into()
    }

    /// Returns the scalar kind of this value
    pub fn scalar_kind(&self) -> ScalarKind {
        match self {
            Value::Int(_) => ScalarKind::Int,
            Value::Float(_) => ScalarKind::Float,
            Value::Bool(_) => ScalarKind::Bool,
            Value::String(_) => ScalarKind::String,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            // Keep a decimal point so floats never read back as ints
            Value::Float(n) if n.is_finite() && n.fract() == 0.0 => write!(f, "{n:.1}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}
