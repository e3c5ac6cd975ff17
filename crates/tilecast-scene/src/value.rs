//! Typed values for heading attributes and key/value records.

use std::fmt;

/// A value appearing in a resource heading or a key/value record.
///
/// Rendering follows the Godot 3 text-scene conventions: integers are
/// bare, strings are double-quoted, sequences render as `[ a, b ]`, and
/// constructed types as `Type( a, b )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Bare integer.
    Int(i64),
    /// Double-quoted string.
    Str(String),
    /// Bracketed sequence; an empty sequence renders as `[  ]`.
    List(Vec<Value>),
    /// Constructed value such as `Vector2( 0, 0 )` or `PoolIntArray( … )`.
    Ctor(&'static str, Vec<Value>),
}

impl Value {
    /// String value from anything stringly.
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Constructed value with integer arguments.
    pub fn ctor(name: &'static str, args: impl IntoIterator<Item = i64>) -> Self {
        Value::Ctor(name, args.into_iter().map(Value::Int).collect())
    }

    /// Reference to an external resource by id.
    pub fn ext_resource(id: u32) -> Self {
        Value::ctor("ExtResource", [i64::from(id)])
    }

    /// Reference to a sub-resource by id.
    pub fn sub_resource(id: u32) -> Self {
        Value::ctor("SubResource", [i64::from(id)])
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::List(items) => write!(f, "[ {} ]", join(items)),
            Value::Ctor(name, args) => write!(f, "{}( {} )", name, join(args)),
        }
    }
}

fn join(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_int_renders_bare() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Int(-1).to_string(), "-1");
    }

    #[test]
    fn test_str_renders_quoted() {
        assert_eq!(Value::str("TileMap").to_string(), "\"TileMap\"");
    }

    #[test]
    fn test_ctor_renders_with_spaces() {
        assert_eq!(Value::ctor("Vector2", [0, 0]).to_string(), "Vector2( 0, 0 )");
        assert_eq!(
            Value::ctor("Rect2", [0, 0, 128, 64]).to_string(),
            "Rect2( 0, 0, 128, 64 )"
        );
    }

    #[test]
    fn test_list_renders_bracketed() {
        let list = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(list.to_string(), "[ 1, 2, 3 ]");
    }

    #[test]
    fn test_empty_list_keeps_inner_padding() {
        // The target format writers emit two spaces for an empty sequence.
        assert_eq!(Value::List(Vec::new()).to_string(), "[  ]");
    }

    #[test]
    fn test_resource_references() {
        assert_eq!(Value::ext_resource(3).to_string(), "ExtResource( 3 )");
        assert_eq!(Value::sub_resource(1).to_string(), "SubResource( 1 )");
    }
}
