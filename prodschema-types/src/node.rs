use crate::keys;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node in a JSON-LD graph: a mapping of string keys to JSON values.
/// The upstream SEO pipeline constructs these fresh per render; the patch
/// rules mutate them in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaNode(Map<String, Value>);

impl SchemaNode {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts or overwrites `key`, returning the previous value if any.
    pub fn set(&mut self, key: &str, value: Value) -> Option<Value> {
        self.0.insert(key.to_string(), value)
    }

    /// Removes `key` if present. Absent keys are a no-op, matching the
    /// upstream `unset`-if-exists behaviour.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// The node's `@type` when it is a plain string.
    ///
    /// JSON-LD also allows an array of types; callers that need to match
    /// against multi-typed nodes should use [`SchemaNode::has_type`].
    pub fn node_type(&self) -> Option<&str> {
        self.get(keys::TYPE).and_then(Value::as_str)
    }

    /// True when `@type` equals `t` or is a type array containing `t`.
    pub fn has_type(&self, t: &str) -> bool {
        match self.get(keys::TYPE) {
            Some(Value::String(s)) => s == t,
            Some(Value::Array(items)) => items.iter().any(|v| v.as_str() == Some(t)),
            _ => false,
        }
    }

    /// Forces the type discriminator to `t`, replacing any existing value
    /// (including a type array).
    pub fn set_type(&mut self, t: &str) {
        self.set(keys::TYPE, Value::String(t.to_string()));
    }

    pub fn inner(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for SchemaNode {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// The full ordered graph for one rendered page.
///
/// Order is significant: every operation preserves the relative order of the
/// nodes it does not remove.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaGraph {
    nodes: Vec<SchemaNode>,
}

impl SchemaGraph {
    pub fn new(nodes: Vec<SchemaNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[SchemaNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut Vec<SchemaNode> {
        &mut self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SchemaNode> {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut SchemaNode> {
        self.nodes.get_mut(index)
    }

    /// Index of the first node matching type `t` (string or type array).
    pub fn position_of_type(&self, t: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.has_type(t))
    }

    /// Drops every node matching type `t`, preserving the order of the rest.
    /// Returns how many nodes were dropped.
    pub fn drop_nodes_of_type(&mut self, t: &str) -> u64 {
        let before = self.nodes.len();
        self.nodes.retain(|n| !n.has_type(t));
        (before - self.nodes.len()) as u64
    }
}
