use tracing::debug;
use crate::flatten::flatten;
use crate::graph::VisualizationPayload;
use crate::layout::{layout_in_place, LayoutConfig};
use crate::parser::parse_json;
use crate::Result;

/// Parse, lay out and flatten one JSON document
pub fn visualize(text: &str, config: &LayoutConfig) -> Result<VisualizationPayload> {
    config.validate()?;

    let tree = parse_json(text)?;
    let root = layout_in_place(tree, config)?;
    let (nodes, edges) = flatten(&root);

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "visualization payload built"
    );

    Ok(VisualizationPayload {
        nodes,
        edges,
        root_node: Some(root),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_visualize_nested() {
        let payload = visualize(r#"{"a":{"b":1},"c":[1,2]}"#, &LayoutConfig::default()).unwrap();
        assert_eq!(payload.node_count(), 6);
        assert_eq!(payload.edge_count(), 5);
        let root = payload.root_node.as_ref().unwrap();
        assert_eq!(root.node_count(), 6);
        assert_eq!(payload.node("root.c.[1]").unwrap().depth, 2);
    }

    #[test]
    fn test_malformed_input_builds_nothing() {
        let err = visualize("\"not json", &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidJson(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_bad_config_rejected_before_parsing() {
        let config = LayoutConfig {
            horizontal_spacing: -3.0,
            ..Default::default()
        };
        assert!(matches!(visualize("not even json", &config), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = visualize("[true]", &LayoutConfig::default()).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["nodes"].as_array().unwrap().len(), 2);
        assert_eq!(json["edges"][0]["fromId"], "root");
        assert_eq!(json["edges"][0]["toId"], "root.[0]");
        assert_eq!(json["rootNode"]["children"][0]["value"], true);
    }
}
