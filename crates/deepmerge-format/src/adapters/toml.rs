use deepmerge_types::{Mapping, Number, Scalar, Sequence, Value};

use super::{is_blank, FormatAdapter};
use crate::error::{FormatError, FormatResult};
use crate::format::Format;

/// TOML via the `toml` crate.
///
/// A TOML document is always a table, so every decoded root is a mapping.
/// TOML has no null: encoding a tree that contains one fails. Datetimes decode
/// to string scalars and are encoded back as strings.
///
/// Encoding moves plain values above tables and arrays of tables in every
/// table; each group keeps the mapping's relative order.
#[derive(Clone, Copy, Debug, Default)]
pub struct TomlAdapter;

impl FormatAdapter for TomlAdapter {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn decode(&self, raw: &[u8]) -> FormatResult<Value> {
        if is_blank(raw) {
            return Ok(Value::default());
        }
        let text = std::str::from_utf8(raw).map_err(|e| FormatError::decode(Format::Toml, e))?;
        let table: ::toml::Table =
            ::toml::from_str(text).map_err(|e| FormatError::decode(Format::Toml, e))?;
        Ok(Value::Mapping(from_table(table)))
    }

    fn encode(&self, value: &Value) -> FormatResult<Vec<u8>> {
        let Value::Mapping(root) = value else {
            return Err(FormatError::encode(
                Format::Toml,
                format_args!("document root must be a mapping, found {}", value.kind()),
            ));
        };
        let mut path = Vec::new();
        let table = to_table(root, &mut path)?;
        ::toml::to_string(&table)
            .map(String::into_bytes)
            .map_err(|e| FormatError::encode(Format::Toml, e))
    }
}

fn from_table(table: ::toml::Table) -> Mapping {
    table
        .into_iter()
        .map(|(key, value)| (key, from_toml(value)))
        .collect()
}

fn from_toml(value: ::toml::Value) -> Value {
    match value {
        ::toml::Value::String(s) => Value::from(s),
        ::toml::Value::Integer(i) => Value::from(i),
        ::toml::Value::Float(f) => Value::from(f),
        ::toml::Value::Boolean(b) => Value::from(b),
        ::toml::Value::Datetime(dt) => Value::from(dt.to_string()),
        ::toml::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_toml).collect::<Sequence>())
        }
        ::toml::Value::Table(table) => Value::Mapping(from_table(table)),
    }
}

fn to_table<'a>(mapping: &'a Mapping, path: &mut Vec<&'a str>) -> FormatResult<::toml::Table> {
    let mut table = ::toml::Table::new();
    for (key, value) in mapping {
        path.push(key);
        let converted = to_toml(value, path);
        path.pop();
        table.insert(key.clone(), converted?);
    }
    Ok(table)
}

fn to_toml<'a>(value: &'a Value, path: &mut Vec<&'a str>) -> FormatResult<::toml::Value> {
    let converted = match value {
        Value::Mapping(m) => ::toml::Value::Table(to_table(m, path)?),
        Value::Sequence(s) => ::toml::Value::Array(
            s.iter()
                .map(|item| to_toml(item, path))
                .collect::<FormatResult<Vec<_>>>()?,
        ),
        Value::Scalar(Scalar::Null) => return Err(unrepresentable(path, "null")),
        Value::Scalar(Scalar::Bool(b)) => ::toml::Value::Boolean(*b),
        Value::Scalar(Scalar::String(s)) => ::toml::Value::String(s.clone()),
        Value::Scalar(Scalar::Number(n)) => match *n {
            Number::Integer(i) => ::toml::Value::Integer(i),
            Number::Unsigned(u) => match i64::try_from(u) {
                Ok(i) => ::toml::Value::Integer(i),
                Err(_) => return Err(unrepresentable(path, &format!("integer {u}"))),
            },
            Number::Float(f) => ::toml::Value::Float(f),
        },
    };
    Ok(converted)
}

fn unrepresentable(path: &[&str], what: &str) -> FormatError {
    FormatError::encode(
        Format::Toml,
        format_args!("{what} at `{}` cannot be represented in TOML", path.join(".")),
    )
}
