// Generic nested key-value container backing every configuration domain

use crate::error::Result;
use crate::tree::Tree;
use crate::value::ConfigValue;
use log::{trace, warn};

/// An insertion-ordered mapping from keys to [`ConfigValue`]s.
///
/// Keys only exist once written. Writing through a deep path creates the
/// intermediate mappings on demand; writing over an existing value replaces it
/// in place, keeping the key at the position where it was first set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigNode {
    entries: Vec<(String, ConfigValue)>,
}

impl ConfigNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the direct children in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Write `value` at `path`, creating any missing intermediate levels.
    ///
    /// If an intermediate key holds something other than a node, that value is
    /// discarded and replaced with an empty node. An empty path writes nothing.
    pub fn set<K: AsRef<str>>(&mut self, path: &[K], value: impl Into<ConfigValue>) -> &mut Self {
        let Some((last, parents)) = path.split_last() else {
            warn!("Ignoring write with an empty key path");
            return self;
        };

        let mut node: &mut ConfigNode = self;
        for key in parents {
            node = node.child_node_mut(key.as_ref());
        }
        node.insert(last.as_ref(), value.into());
        self
    }

    /// Look up the value stored at `path`. `None` means the path was never written.
    pub fn get<K: AsRef<str>>(&self, path: &[K]) -> Option<&ConfigValue> {
        let (last, parents) = path.split_last()?;
        let mut node = self;
        for key in parents {
            node = node.entry(key.as_ref())?.as_node()?;
        }
        node.entry(last.as_ref())
    }

    pub fn get_mut<K: AsRef<str>>(&mut self, path: &[K]) -> Option<&mut ConfigValue> {
        let (last, parents) = path.split_last()?;
        let mut node = self;
        for key in parents {
            node = match node.entry_mut(key.as_ref())? {
                ConfigValue::Node(child) => child,
                _ => return None,
            };
        }
        node.entry_mut(last.as_ref())
    }

    pub fn contains<K: AsRef<str>>(&self, path: &[K]) -> bool {
        self.get(path).is_some()
    }

    /// Remove and return the value at `path`. Parent nodes are left in place.
    pub fn remove<K: AsRef<str>>(&mut self, path: &[K]) -> Option<ConfigValue> {
        let (last, parents) = path.split_last()?;
        let mut node = self;
        for key in parents {
            node = match node.entry_mut(key.as_ref())? {
                ConfigValue::Node(child) => child,
                _ => return None,
            };
        }
        let index = node.position(last.as_ref())?;
        Some(node.entries.remove(index).1)
    }

    /// Snapshot of this node as a serializable tree
    pub fn to_tree(&self) -> Result<Tree> {
        Tree::from_node(self)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    fn entry(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut ConfigValue> {
        self.entries.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn insert(&mut self, key: &str, value: ConfigValue) {
        trace!("set '{}' = {}", key, value.kind());
        match self.position(key) {
            Some(index) => {
                let slot = &mut self.entries[index].1;
                if matches!(slot, ConfigValue::Node(_)) && !matches!(value, ConfigValue::Node(_)) {
                    warn!("Overwriting subtree '{}' with a {}", key, value.kind());
                }
                *slot = value;
            }
            None => self.entries.push((key.to_string(), value)),
        }
    }

    fn child_node_mut(&mut self, key: &str) -> &mut ConfigNode {
        let index = match self.position(key) {
            Some(index) => {
                let slot = &self.entries[index].1;
                if !matches!(slot, ConfigValue::Node(_)) {
                    warn!(
                        "Replacing {} at '{}' with a node to write a nested key",
                        slot.kind(),
                        key
                    );
                }
                index
            }
            None => {
                self.entries
                    .push((key.to_string(), ConfigValue::Node(ConfigNode::new())));
                self.entries.len() - 1
            }
        };
        self.entries[index].1.ensure_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_creates_intermediate_levels() {
        let mut node = ConfigNode::new();
        node.set(&["x", "tick", "count"], 5);
        assert_eq!(node.get(&["x", "tick", "count"]), Some(&ConfigValue::Int(5)));
        assert!(node.get(&["x", "tick"]).unwrap().as_node().is_some());
        assert_eq!(node.len(), 1);
    }

    #[test]
    fn test_absent_is_not_falsy() {
        let mut node = ConfigNode::new();
        node.set(&["flag"], false);
        node.set(&["zero"], 0);
        node.set(&["empty"], "");
        assert_eq!(node.get(&["flag"]), Some(&ConfigValue::Bool(false)));
        assert_eq!(node.get(&["zero"]), Some(&ConfigValue::Int(0)));
        assert_eq!(node.get(&["empty"]), Some(&ConfigValue::String(String::new())));
        assert_eq!(node.get(&["missing"]), None);
        assert_eq!(node.get(&["flag", "deeper"]), None);
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut node = ConfigNode::new();
        node.set(&["b"], 1).set(&["a"], 2).set(&["b"], 3);
        let keys: Vec<&str> = node.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(node.get(&["b"]), Some(&ConfigValue::Int(3)));
    }

    #[test]
    fn test_deep_write_replaces_scalar() {
        let mut node = ConfigNode::new();
        node.set(&["labels"], true);
        node.set(&["labels", "format"], "x");
        assert_eq!(
            node.get(&["labels", "format"]),
            Some(&ConfigValue::String("x".to_string()))
        );
    }

    #[test]
    fn test_scalar_write_replaces_subtree() {
        let mut node = ConfigNode::new();
        node.set(&["culling", "max"], 4);
        node.set(&["culling"], false);
        assert_eq!(node.get(&["culling"]), Some(&ConfigValue::Bool(false)));
        assert_eq!(node.get(&["culling", "max"]), None);
    }

    #[test]
    fn test_empty_path_is_noop() {
        let mut node = ConfigNode::new();
        let empty: [&str; 0] = [];
        node.set(&empty, 1);
        assert!(node.is_empty());
        assert_eq!(node.get(&empty), None);
    }

    #[test]
    fn test_remove_keeps_parents() {
        let mut node = ConfigNode::new();
        node.set(&["size", "width"], 640).set(&["size", "height"], 480);
        assert_eq!(node.remove(&["size", "width"]), Some(ConfigValue::Int(640)));
        assert!(!node.contains(&["size", "width"]));
        assert!(node.contains(&["size", "height"]));
    }

    #[test]
    fn test_get_mut_appends_in_place() {
        let mut node = ConfigNode::new();
        node.set(&["regions"], vec![1]);
        if let Some(ConfigValue::Sequence(items)) = node.get_mut(&["regions"]) {
            items.push(ConfigValue::Int(2));
        }
        assert_eq!(
            node.get(&["regions"]),
            Some(&ConfigValue::Sequence(vec![ConfigValue::Int(1), ConfigValue::Int(2)]))
        );
    }
}
