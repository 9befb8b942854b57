//! Tree to flat node list and parent -> child edge list.
//!
//! Both lists follow the same depth-first pre-order: the node list starts at
//! the root, and each edge appears at the position its child endpoint has in
//! the node list.

use crate::graph::{Edge, FlatNode};
use crate::node::Node;

/// Node list and edge list in one walk
pub fn flatten(root: &Node) -> (Vec<FlatNode>, Vec<Edge>) {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    let mut stack: Vec<(&Node, Option<&Node>)> = vec![(root, None)];
    while let Some((node, parent)) = stack.pop() {
        if let Some(parent) = parent {
            edges.push(Edge::between(parent, node));
        }
        nodes.push(FlatNode::from(node));
        stack.extend(node.children.iter().rev().map(|c| (c, Some(node))));
    }

    (nodes, edges)
}

/// Every node exactly once, root first
pub fn flatten_nodes(root: &Node) -> Vec<FlatNode> {
    root.walk().map(FlatNode::from).collect()
}

/// One edge per parent-child pair
pub fn extract_edges(root: &Node) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut stack: Vec<(&Node, &Node)> = root.children.iter().rev().map(|c| (root, c)).collect();
    while let Some((parent, child)) = stack.pop() {
        edges.push(Edge::between(parent, child));
        stack.extend(child.children.iter().rev().map(|c| (child, c)));
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{calculate_positions, LayoutConfig};
    use crate::parser::parse_json;
    use std::collections::HashSet;

    fn positioned(text: &str) -> Node {
        calculate_positions(&parse_json(text).unwrap(), &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn test_single_key_object() {
        let root = positioned(r#"{"a":1}"#);
        let (nodes, edges) = flatten(&root);
        assert_eq!(nodes.len(), 2);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].id, "root->root.a");
        assert_eq!(edges[0].from_id, "root");
        assert_eq!(edges[0].to_id, "root.a");
        assert_eq!(edges[0].to_position, root.children[0].position);
    }

    #[test]
    fn test_empty_object() {
        let root = positioned("{}");
        let (nodes, edges) = flatten(&root);
        assert_eq!(nodes.len(), 1);
        assert!(edges.is_empty());
        assert_eq!(nodes[0].child_count, 0);
    }

    #[test]
    fn test_preorder_and_edge_order() {
        let root = positioned(r#"{"a":{"x":1,"y":2},"b":[true]}"#);
        let (nodes, edges) = flatten(&root);

        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["root", "root.a", "root.a.x", "root.a.y", "root.b", "root.b.[0]"]);

        let edge_ids: Vec<&str> = edges.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(
            edge_ids,
            vec![
                "root->root.a",
                "root.a->root.a.x",
                "root.a->root.a.y",
                "root->root.b",
                "root.b->root.b.[0]",
            ]
        );
    }

    #[test]
    fn test_separate_functions_agree_with_flatten() {
        let root = positioned(r#"[[1,[2,3]],{"k":{"v":null}},"s"]"#);
        let (nodes, edges) = flatten(&root);
        assert_eq!(flatten_nodes(&root), nodes);
        assert_eq!(extract_edges(&root), edges);
    }

    #[test]
    fn test_edge_completeness() {
        let root = positioned(r#"{"a":[1,2,{"b":[]}],"c":{"d":"e"},"f":null}"#);
        let (nodes, edges) = flatten(&root);
        assert_eq!(edges.len(), nodes.len() - 1);

        let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), nodes.len());
        for edge in &edges {
            assert!(ids.contains(edge.from_id.as_str()));
            assert!(ids.contains(edge.to_id.as_str()));
        }
    }

    #[test]
    fn test_positions_copied_from_tree() {
        let root = positioned("[1,2,3]");
        let nodes = flatten_nodes(&root);
        for (flat, node) in nodes.iter().skip(1).zip(&root.children) {
            assert_eq!(flat.position, node.position);
            assert_eq!(flat.parent_id.as_deref(), Some("root"));
        }
        assert_eq!(nodes[0].child_count, 3);
    }
}
