//! Validated, serializer-ready view of a configuration.
//!
//! A [`Tree`] is what a [`ConfigNode`] looks like once every value has been
//! checked for representability. Script literals survive as [`Tree::Raw`]
//! leaves so the serializer can emit them as code instead of strings.

use crate::error::{ConfigError, Result};
use crate::node::ConfigNode;
use crate::value::ConfigValue;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Tree>),
    Mapping(Vec<(String, Tree)>),
    /// Raw code, written unquoted
    Raw(String),
}

impl Tree {
    pub fn from_node(node: &ConfigNode) -> Result<Self> {
        build_node(node, "")
    }

    pub fn from_value(value: &ConfigValue) -> Result<Self> {
        build_value(value, "")
    }

    /// Number of raw-code leaves anywhere below this tree
    pub fn raw_count(&self) -> usize {
        match self {
            Tree::Raw(_) => 1,
            Tree::Sequence(items) => items.iter().map(Tree::raw_count).sum(),
            Tree::Mapping(entries) => entries.iter().map(|(_, v)| v.raw_count()).sum(),
            Tree::Bool(_) | Tree::Number(_) | Tree::String(_) => 0,
        }
    }

    /// Convert to a plain JSON value, replacing each raw-code leaf with
    /// `placeholder`. Useful for comparing a rendering against its tree.
    pub fn to_json(&self, placeholder: &str) -> Value {
        match self {
            Tree::Bool(b) => Value::Bool(*b),
            Tree::Number(n) => Value::Number(n.clone()),
            Tree::String(s) => Value::String(s.clone()),
            Tree::Sequence(items) => {
                Value::Array(items.iter().map(|item| item.to_json(placeholder)).collect())
            }
            Tree::Mapping(entries) => {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_json(placeholder));
                }
                Value::Object(map)
            }
            Tree::Raw(_) => Value::String(placeholder.to_string()),
        }
    }
}

pub(crate) fn join_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn build_node(node: &ConfigNode, path: &str) -> Result<Tree> {
    node.iter()
        .map(|(key, value)| Ok((key.to_string(), build_value(value, &join_key(path, key))?)))
        .collect::<Result<Vec<_>>>()
        .map(Tree::Mapping)
}

fn build_value(value: &ConfigValue, path: &str) -> Result<Tree> {
    match value {
        ConfigValue::Bool(b) => Ok(Tree::Bool(*b)),
        ConfigValue::Int(i) => Ok(Tree::Number(Number::from(*i))),
        ConfigValue::Float(f) => Number::from_f64(*f)
            .map(Tree::Number)
            .ok_or_else(|| ConfigError::unsupported(path, format!("non-finite float {}", f))),
        ConfigValue::String(s) => Ok(Tree::String(s.clone())),
        ConfigValue::Sequence(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| build_value(item, &format!("{}[{}]", path, i)))
            .collect::<Result<Vec<_>>>()
            .map(Tree::Sequence),
        ConfigValue::Node(node) => build_node(node, path),
        ConfigValue::Script(script) if script.script().trim().is_empty() => {
            Err(ConfigError::unsupported(path, "empty script"))
        }
        ConfigValue::Script(script) => Ok(Tree::Raw(script.script().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptLiteral;
    use serde_json::json;

    #[test]
    fn test_tree_keeps_order_and_tags_scripts() {
        let mut node = ConfigNode::new();
        node.set(&["b"], 1)
            .set(&["a"], ScriptLiteral::new("function(){}"));
        let tree = node.to_tree().unwrap();
        assert_eq!(
            tree,
            Tree::Mapping(vec![
                ("b".to_string(), Tree::Number(Number::from(1))),
                ("a".to_string(), Tree::Raw("function(){}".to_string())),
            ])
        );
        assert_eq!(tree.raw_count(), 1);
        assert_eq!(tree.to_json("<code>"), json!({"b": 1, "a": "<code>"}));
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        let mut node = ConfigNode::new();
        node.set(&["point", "r"], f64::NAN);
        match node.to_tree() {
            Err(ConfigError::UnsupportedValueType { path, .. }) => assert_eq!(path, "point.r"),
            other => panic!("expected UnsupportedValueType, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_script_is_rejected() {
        let mut node = ConfigNode::new();
        node.set(&["data", "onclick"], ScriptLiteral::new("  \n"));
        match node.to_tree() {
            Err(ConfigError::UnsupportedValueType { path, kind }) => {
                assert_eq!(path, "data.onclick");
                assert_eq!(kind, "empty script");
            }
            other => panic!("expected UnsupportedValueType, got {:?}", other),
        }
    }
}
