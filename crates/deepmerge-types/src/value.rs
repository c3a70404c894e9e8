//! The tree value and its kind.

use std::fmt;

use crate::mapping::Mapping;
use crate::scalar::{Number, Scalar};
use crate::sequence::Sequence;

/// The variant tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Mapping,
    Sequence,
    Scalar,
}

impl Kind {
    /// Returns `true` for `Mapping` and `Sequence`.
    pub fn is_composite(&self) -> bool {
        !matches!(self, Kind::Scalar)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Mapping => "mapping",
            Kind::Sequence => "sequence",
            Kind::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

/// A node of a decoded document.
///
/// All "is this a map, a list, or a leaf" branching happens once, when a
/// document is decoded into this type. Downstream code matches on the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Mapping(Mapping),
    Sequence(Sequence),
    Scalar(Scalar),
}

impl Default for Value {
    /// An empty mapping, the value of an empty document.
    fn default() -> Self {
        Value::Mapping(Mapping::new())
    }
}

impl Value {
    /// The null scalar.
    pub const NULL: Value = Value::Scalar(Scalar::Null);

    pub fn kind(&self) -> Kind {
        match self {
            Value::Mapping(_) => Kind::Mapping,
            Value::Sequence(_) => Kind::Sequence,
            Value::Scalar(_) => Kind::Scalar,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns `true` for the null scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    /// Look up `key` if this value is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|m| m.get(key))
    }

    /// Total number of nodes in this tree, including `self`.
    pub fn node_count(&self) -> usize {
        match self {
            Value::Mapping(m) => 1 + m.values().map(Value::node_count).sum::<usize>(),
            Value::Sequence(s) => 1 + s.iter().map(Value::node_count).sum::<usize>(),
            Value::Scalar(_) => 1,
        }
    }
}

impl From<Mapping> for Value {
    fn from(m: Mapping) -> Self {
        Value::Mapping(m)
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Value::Sequence(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items.into())
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Scalar(Scalar::Number(n))
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_from!(bool, i32, i64, u64, f64, &str, String);
