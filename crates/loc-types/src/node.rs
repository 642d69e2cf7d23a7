//! The locale document tree.
//!
//! A translation file is a tree of mappings whose leaves are opaque values.
//! Mappings keep their insertion order: the order keys were read in is the
//! order they are written back out.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Number, Value};

/// An insertion-ordered mapping from key to child node.
pub type Mapping = IndexMap<String, Node>;

/// A node in a locale document.
///
/// Only [`Node::Mapping`] is ever descended into. Sequences and scalars are
/// leaves and are carried through untouched.
///
/// Equality is order-sensitive: two mappings are equal only when they hold
/// the same entries in the same order.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "Value")]
pub enum Node {
    /// A JSON object.
    Mapping(Mapping),
    /// A JSON array, treated as an atomic value.
    Sequence(Vec<Node>),
    /// A string, number, boolean, or null.
    Scalar(Scalar),
}

/// A primitive leaf value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Node {
    /// The entries of this node, if it is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a direct child by key.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Keys of this mapping in order; empty for leaves.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.as_mapping()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    /// Short name of the node's shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Mapping(_) => "mapping",
            Node::Sequence(_) => "sequence",
            Node::Scalar(Scalar::Null) => "null",
            Node::Scalar(Scalar::Bool(_)) => "bool",
            Node::Scalar(Scalar::Number(_)) => "number",
            Node::Scalar(Scalar::String(_)) => "string",
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Mapping(a), Node::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
            }
            (Node::Sequence(a), Node::Sequence(b)) => a == b,
            (Node::Scalar(a), Node::Scalar(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Node::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Null => Node::Scalar(Scalar::Null),
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(Scalar::Number(n)),
            Value::String(s) => Node::Scalar(Scalar::String(s)),
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Mapping(map) => map.serialize(serializer),
            Node::Sequence(items) => items.serialize(serializer),
            Node::Scalar(scalar) => scalar.serialize(serializer),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Null => serializer.serialize_unit(),
            Scalar::Bool(b) => serializer.serialize_bool(*b),
            Scalar::Number(n) => n.serialize(serializer),
            Scalar::String(s) => serializer.serialize_str(s),
        }
    }
}
