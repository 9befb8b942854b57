//! Node tree produced by the parser and positioned by the layout engine.

use serde::{Deserialize, Deserializer, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// Key given to the root node when the caller does not supply one
pub const ROOT_KEY: &str = "root";

/// Maximum number of characters shown by [`Node::display_value`]
pub const DISPLAY_VALUE_MAX_CHARS: usize = 20;

/// Runtime kind of a JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeKind {
    /// Objects and arrays carry children, everything else carries a value
    #[inline]
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Object => "object",
            NodeKind::Array => "array",
            NodeKind::String => "string",
            NodeKind::Number => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar payload of a leaf node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    String(String),
    Number(serde_json::Number),
    Boolean(bool),
    Null,
}

impl ScalarValue {
    pub fn kind(&self) -> NodeKind {
        match self {
            ScalarValue::String(_) => NodeKind::String,
            ScalarValue::Number(_) => NodeKind::Number,
            ScalarValue::Boolean(_) => NodeKind::Boolean,
            ScalarValue::Null => NodeKind::Null,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Number(n) => write!(f, "{}", n),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Null => f.write_str("null"),
        }
    }
}

/// A point in 3D space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3D {
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }

    /// Distance from the Y axis (the ring radius for laid out nodes)
    #[inline]
    pub fn radial_distance(&self) -> f64 {
        self.x.hypot(self.z)
    }

    /// Angle around the Y axis in `[0, 2π)`
    pub fn azimuth(&self) -> f64 {
        let a = self.z.atan2(self.x);
        if a < 0.0 {
            a + TAU
        } else {
            a
        }
    }
}

/// One JSON value with identity, kind, payload, children and position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// `Some` exactly when `kind` is a scalar kind
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_present"
    )]
    pub value: Option<ScalarValue>,
    pub children: Vec<Node>,
    pub position: Position3D,
    pub depth: usize,
    pub parent_id: Option<String>,
}

// A present `"value": null` is a null scalar, not a missing value.
pub(crate) fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<ScalarValue>, D::Error>
where
    D: Deserializer<'de>,
{
    ScalarValue::deserialize(deserializer).map(Some)
}

impl Node {
    /// Create a container node with no children yet
    #[must_use]
    pub fn container(
        id: String,
        key: String,
        kind: NodeKind,
        depth: usize,
        parent_id: Option<String>,
    ) -> Self {
        debug_assert!(kind.is_container());
        Self {
            id,
            key,
            kind,
            value: None,
            children: Vec::new(),
            position: Position3D::origin(),
            depth,
            parent_id,
        }
    }

    /// Create a leaf node carrying a scalar value
    #[must_use]
    pub fn scalar(
        id: String,
        key: String,
        value: ScalarValue,
        depth: usize,
        parent_id: Option<String>,
    ) -> Self {
        Self {
            id,
            key,
            kind: value.kind(),
            value: Some(value),
            children: Vec::new(),
            position: Position3D::origin(),
            depth,
            parent_id,
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order iterator over this node and all of its descendants
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Deepest `depth` found in this subtree
    pub fn max_depth(&self) -> usize {
        self.walk().map(|n| n.depth).max().unwrap_or(self.depth)
    }

    /// Number of leaves reachable from this node (1 for a leaf)
    pub fn descendant_weight(&self) -> usize {
        self.walk().filter(|n| n.is_leaf()).count()
    }

    /// Scalar rendered as text and truncated for labels
    pub fn display_value(&self) -> String {
        display_value(self.value.as_ref())
    }

    /// Short label: `key: value` for scalars, `key [n]` for arrays, the bare key for objects
    pub fn label(&self) -> String {
        match self.kind {
            NodeKind::Object => self.key.clone(),
            NodeKind::Array => format!("{} [{}]", self.key, self.children.len()),
            _ => format!("{}: {}", self.key, self.display_value()),
        }
    }
}

pub(crate) fn display_value(value: Option<&ScalarValue>) -> String {
    match value {
        None | Some(ScalarValue::Null) => "null".to_string(),
        Some(v) => {
            let text = v.to_string();
            if text.chars().count() > DISPLAY_VALUE_MAX_CHARS {
                let mut truncated: String = text.chars().take(DISPLAY_VALUE_MAX_CHARS).collect();
                truncated.push_str("...");
                truncated
            } else {
                text
            }
        }
    }
}

/// Pre-order traversal driven by an explicit stack
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
