// Flat graph view handed to renderers - nodes, edges and the payload bundle
use serde::{Deserialize, Serialize};
use crate::node::{display_value, Node, NodeKind, Position3D, ScalarValue};

/// Directed parent -> child relation with snapshotted endpoint positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub from_id: String,
    pub to_id: String,
    pub from_position: Position3D,
    pub to_position: Position3D,
}

impl Edge {
    #[inline]
    #[must_use]
    pub fn between(from: &Node, to: &Node) -> Self {
        Self {
            id: edge_id(&from.id, &to.id),
            from_id: from.id.clone(),
            to_id: to.id.clone(),
            from_position: from.position,
            to_position: to.position,
        }
    }
}

#[inline]
pub fn edge_id(from_id: &str, to_id: &str) -> String {
    format!("{}->{}", from_id, to_id)
}

/// One entry of the flat node list: a [`Node`] without its subtree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNode {
    pub id: String,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::node::deserialize_present"
    )]
    pub value: Option<ScalarValue>,
    pub position: Position3D,
    pub depth: usize,
    pub parent_id: Option<String>,
    pub child_count: usize,
}

impl FlatNode {
    pub fn display_value(&self) -> String {
        display_value(self.value.as_ref())
    }
}

impl From<&Node> for FlatNode {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            key: node.key.clone(),
            kind: node.kind,
            value: node.value.clone(),
            position: node.position,
            depth: node.depth,
            parent_id: node.parent_id.clone(),
            child_count: node.children.len(),
        }
    }
}

/// Everything a renderer needs for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationPayload {
    pub nodes: Vec<FlatNode>,
    pub edges: Vec<Edge>,
    pub root_node: Option<Node>,
}

impl VisualizationPayload {
    /// Payload with no tree, sent alongside an error
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &str) -> Option<&FlatNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_between_snapshots_positions() {
        let mut parent = Node::container("root".into(), "root".into(), NodeKind::Array, 0, None);
        let mut child = Node::scalar("root.[0]".into(), "[0]".into(), ScalarValue::Boolean(false), 1, Some("root".into()));
        child.position = Position3D::new(1.0, -4.0, 2.0);
        let edge = Edge::between(&parent, &child);

        parent.position = Position3D::new(9.0, 9.0, 9.0);
        assert_eq!(edge.id, "root->root.[0]");
        assert_eq!(edge.from_position, Position3D::origin());
        assert_eq!(edge.to_position, Position3D::new(1.0, -4.0, 2.0));
    }

    #[test]
    fn test_empty_payload_serializes_null_root() {
        let json = serde_json::to_value(VisualizationPayload::empty()).unwrap();
        assert_eq!(json, serde_json::json!({"nodes": [], "edges": [], "rootNode": null}));
    }

    #[test]
    fn test_flat_node_field_names() {
        let node = Node::scalar("root.a".into(), "a".into(), ScalarValue::Number(1.into()), 1, Some("root".into()));
        let json = serde_json::to_value(FlatNode::from(&node)).unwrap();
        assert_eq!(json["parentId"], "root");
        assert_eq!(json["childCount"], 0);
        assert_eq!(json["type"], "number");
        assert_eq!(json["value"], 1);
    }
}
