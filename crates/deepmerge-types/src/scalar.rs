//! Scalar leaves: null, booleans, numbers and strings.

use std::fmt;

/// A numeric scalar.
///
/// Integers are kept apart from floats so that `1` decoded from one format is
/// encoded as `1` in another, never as `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// A signed integer.
    Integer(i64),
    /// An unsigned integer too large for `i64`.
    Unsigned(u64),
    /// A floating point number.
    Float(f64),
}

impl Number {
    /// The value as `i64`, if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(n) => Some(n),
            Number::Unsigned(n) => i64::try_from(n).ok(),
            Number::Float(_) => None,
        }
    }

    /// The value as `u64`, if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Integer(n) => u64::try_from(n).ok(),
            Number::Unsigned(n) => Some(n),
            Number::Float(_) => None,
        }
    }

    /// The value as `f64`. Large integers may lose precision.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(n) => n as f64,
            Number::Unsigned(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    /// Returns `true` for `Integer` and `Unsigned`.
    pub fn is_integer(&self) -> bool {
        !matches!(self, Number::Float(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(n) => write!(f, "{n}"),
            Number::Unsigned(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Integer(n)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(signed) => Number::Integer(signed),
            Err(_) => Number::Unsigned(n),
        }
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

/// A leaf value.
///
/// The merge engine treats scalars as opaque: it only needs to know that a
/// value *is* a scalar. Accessors exist for callers and adapters.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Scalar::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// Short name of the scalar's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Number(_) => "number",
            Scalar::String(_) => "string",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => f.write_str("null"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Number(Number::Integer(n.into()))
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<Number> for Scalar {
    fn from(n: Number) -> Self {
        Scalar::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert!(Scalar::default().is_null());
    }

    #[test]
    fn u64_within_i64_range_is_integer() {
        assert_eq!(Number::from(42u64), Number::Integer(42));
        assert_eq!(Number::from(u64::MAX), Number::Unsigned(u64::MAX));
    }

    #[test]
    fn numeric_accessors() {
        let s = Scalar::from(7i64);
        assert_eq!(s.as_i64(), Some(7));
        assert_eq!(s.as_u64(), Some(7));
        assert_eq!(s.as_f64(), Some(7.0));
        assert_eq!(s.as_str(), None);

        let neg = Scalar::from(-1i64);
        assert_eq!(neg.as_u64(), None);

        let float = Scalar::from(1.5);
        assert_eq!(float.as_i64(), None);
        assert!(!float.as_number().unwrap().is_integer());
    }

    #[test]
    fn equality_distinguishes_types() {
        assert_eq!(Scalar::from(true), Scalar::Bool(true));
        assert_ne!(Scalar::from(true), Scalar::from("true"));
        assert_ne!(Scalar::from(1i64), Scalar::from(1.0));
    }

    #[test]
    fn display() {
        assert_eq!(Scalar::Null.to_string(), "null");
        assert_eq!(Scalar::from("5s").to_string(), "5s");
        assert_eq!(Scalar::from(false).to_string(), "false");
        assert_eq!(Scalar::from(3i64).to_string(), "3");
    }

    #[test]
    fn type_names() {
        assert_eq!(Scalar::Null.type_name(), "null");
        assert_eq!(Scalar::from(1i64).type_name(), "number");
        assert_eq!(Scalar::from("x").type_name(), "string");
        assert_eq!(Scalar::from(true).type_name(), "bool");
    }
}
