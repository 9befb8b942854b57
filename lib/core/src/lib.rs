//! # jsonorbit Core
//!
//! Core library for jsonorbit, a JSON document viewer that places every value
//! of a document in 3D space.
//!
//! The pipeline has three stages:
//!
//! - [`parse_json`] - JSON text to a tree of typed [`Node`]s with path-derived ids
//! - [`calculate_positions`] - radial layout assigning each node a [`Position3D`]
//! - [`flatten`] - pre-order node list plus parent -> child [`Edge`] list
//!
//! [`visualize`] runs all three and returns a [`VisualizationPayload`].
//!
//! ## Example
//!
//! ```rust
//! use jsonorbit_core::{visualize, LayoutConfig};
//!
//! let payload = visualize(r#"{"a":1}"#, &LayoutConfig::default()).unwrap();
//! assert_eq!(payload.nodes.len(), 2);
//! assert_eq!(payload.edges[0].id, "root->root.a");
//! ```

pub mod error;
pub mod node;
pub mod graph;
pub mod parser;
pub mod layout;
pub mod flatten;
pub mod pipeline;

pub use error::{Error, Result};
pub use node::{Node, NodeKind, Position3D, ScalarValue, Walk, ROOT_KEY};
pub use graph::{Edge, FlatNode, VisualizationPayload};
pub use parser::{parse_json, parse_value, parse_value_with_key, MAX_NESTING_DEPTH};
pub use layout::{calculate_positions, layout_in_place, LayoutConfig, Sector, SubtreeWeights};
pub use flatten::{extract_edges, flatten, flatten_nodes};
pub use pipeline::visualize;
