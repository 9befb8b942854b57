//! # jsonorbit
//!
//! Turns any JSON document into a 3D radial tree.
//!
//! Every value in the document becomes a typed node with a path-derived id
//! (`root.users.[0].name`), every depth level becomes a ring around the Y axis,
//! and each subtree gets an angular sector proportional to the number of
//! leaves it holds. The result is a flat node list plus a parent -> child edge
//! list that a 3D renderer can draw directly.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install jsonorbit
//! jsonorbit --http-port 7070
//! curl -X POST --data '{"a":[1,2,3]}' http://localhost:7070/visualize
//! ```
//!
//! ### From the Command Line
//!
//! ```bash
//! jsonorbit --input document.json --pretty > payload.json
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use jsonorbit::prelude::*;
//!
//! let tree = parse_json(r#"{"a":{"b":1}}"#).unwrap();
//! let positioned = calculate_positions(&tree, &LayoutConfig::default()).unwrap();
//! let (nodes, edges) = flatten(&positioned);
//! assert_eq!(nodes.len(), 3);
//! assert_eq!(edges.len(), 2);
//! ```
//!
//! ## Crate Structure
//!
//! - [`jsonorbit-core`](https://docs.rs/jsonorbit-core) - node model, parser, radial layout, flattening
//! - [`jsonorbit-api`](https://docs.rs/jsonorbit-api) - REST API and URL transport

pub mod cli;

// Re-export core types
pub use jsonorbit_core::{
    Node, NodeKind, ScalarValue, Position3D,
    Edge, FlatNode, VisualizationPayload,
    LayoutConfig, Sector, SubtreeWeights,
    parse_json, parse_value, calculate_positions, layout_in_place,
    flatten, flatten_nodes, extract_edges, visualize,
    Error, Result,
};

// Re-export API
pub use jsonorbit_api::{RestApi, ApiError, encode_json_for_url, decode_json_from_url, validate_json_size};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Node, NodeKind, ScalarValue, Position3D,
        Edge, FlatNode, VisualizationPayload,
        LayoutConfig,
        parse_json, calculate_positions, flatten, visualize,
        Error, Result,
    };
}
