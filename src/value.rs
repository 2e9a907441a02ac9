use crate::error::{ConfigError, Result};
use crate::node::ConfigNode;
use crate::script::ScriptLiteral;
use crate::tree::join_key;
use serde_json::Value;

/// A value that can be stored in a [`ConfigNode`].
///
/// The set of shapes is closed: anything the serializer cannot express as a
/// literal is rejected at the call boundary (see the `TryFrom<Value>` impl)
/// or when the tree is built (non-finite floats).
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<ConfigValue>),
    Node(ConfigNode),
    Script(ScriptLiteral),
}

impl ConfigValue {
    /// Short name of the variant, used in error messages and logs
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Node(_) => "node",
            ConfigValue::Script(_) => "script",
        }
    }

    pub fn as_node(&self) -> Option<&ConfigNode> {
        match self {
            ConfigValue::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Turn this slot into an empty node unless it already holds one
    pub(crate) fn ensure_node(&mut self) -> &mut ConfigNode {
        match self {
            ConfigValue::Node(node) => node,
            slot => {
                *slot = ConfigValue::Node(ConfigNode::new());
                slot.ensure_node()
            }
        }
    }

    /// Convert a JSON value, recording `path` in any error
    fn from_json_at(value: Value, path: &str) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(ConfigValue::Bool(b)),
            Value::String(s) => Ok(ConfigValue::String(s)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ConfigValue::Int(i))
                } else if n.is_u64() {
                    Err(ConfigError::unsupported(path, format!("integer {} out of range", n)))
                } else if let Some(f) = n.as_f64() {
                    Ok(ConfigValue::Float(f))
                } else {
                    Err(ConfigError::unsupported(path, format!("number {}", n)))
                }
            }
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| Self::from_json_at(item, &format!("{}[{}]", path, i)))
                .collect::<Result<Vec<_>>>()
                .map(ConfigValue::Sequence),
            Value::Object(map) => {
                let mut node = ConfigNode::new();
                for (key, item) in map {
                    let child = Self::from_json_at(item, &join_key(path, &key))?;
                    node.set(&[key], child);
                }
                Ok(ConfigValue::Node(node))
            }
            Value::Null => Err(ConfigError::unsupported(path, "null")),
        }
    }
}

impl TryFrom<Value> for ConfigValue {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json_at(value, "")
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

macro_rules! int_into_config_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ConfigValue {
                fn from(n: $t) -> Self {
                    ConfigValue::Int(i64::from(n))
                }
            }
        )*
    };
}

int_into_config_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for ConfigValue {
    fn from(f: f32) -> Self {
        ConfigValue::Float(f64::from(f))
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&String> for ConfigValue {
    fn from(s: &String) -> Self {
        ConfigValue::String(s.clone())
    }
}

impl From<ScriptLiteral> for ConfigValue {
    fn from(script: ScriptLiteral) -> Self {
        ConfigValue::Script(script)
    }
}

impl From<ConfigNode> for ConfigValue {
    fn from(node: ConfigNode) -> Self {
        ConfigValue::Node(node)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConfigValue>, const N: usize> From<[T; N]> for ConfigValue {
    fn from(items: [T; N]) -> Self {
        ConfigValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<ConfigValue>> From<&[T]> for ConfigValue {
    fn from(items: &[T]) -> Self {
        ConfigValue::Sequence(items.iter().cloned().map(Into::into).collect())
    }
}
