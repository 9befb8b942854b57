//! Radial layout
//!
//! Every depth level sits on its own ring around the Y axis and one level
//! lower than its parent. Each node's children split the node's angular
//! sector in proportion to their descendant weight (leaf = 1, internal =
//! sum of children), consumed left to right in child order. The root sits at
//! the origin and owns the full circle.
//!
//! Weights are computed once in a single bottom-up pass over a pre-order
//! numbering of the tree; both passes use explicit stacks.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;
use crate::node::{Node, Position3D};
use crate::{Error, Result};

/// Spacing parameters for the radial layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Radial distance unit per depth level
    pub horizontal_spacing: f64,
    /// Vertical drop per depth level
    pub vertical_spacing: f64,
    /// Scales ring radius growth with depth
    pub radius_multiplier: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 3.0,
            vertical_spacing: 4.0,
            radius_multiplier: 1.5,
        }
    }
}

impl LayoutConfig {
    /// Every parameter must be a positive, finite number
    pub fn validate(&self) -> Result<()> {
        let params = [
            ("horizontalSpacing", self.horizontal_spacing),
            ("verticalSpacing", self.vertical_spacing),
            ("radiusMultiplier", self.radius_multiplier),
        ];
        for (name, value) in params {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Radius of the ring holding the children of a node at `parent_depth`
    #[inline]
    pub fn ring_radius(&self, parent_depth: usize) -> f64 {
        self.radius_multiplier * (parent_depth + 1) as f64 * self.horizontal_spacing
    }
}

/// Angular range `[start, start + width)` in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub start: f64,
    pub width: f64,
}

impl Sector {
    /// The root's sector
    pub const FULL: Sector = Sector { start: 0.0, width: TAU };

    #[inline]
    pub fn new(start: f64, width: f64) -> Self {
        Self { start, width }
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.start + self.width / 2.0
    }

    /// Split into consecutive sub-sectors proportional to `weights`
    pub fn split(&self, weights: &[usize]) -> Vec<Sector> {
        let total: usize = weights.iter().sum();
        if total == 0 {
            return Vec::new();
        }
        let mut current = self.start;
        weights
            .iter()
            .map(|&w| {
                let share = self.width * (w as f64 / total as f64);
                let sector = Sector::new(current, share);
                current += share;
                sector
            })
            .collect()
    }
}

/// Descendant weight and subtree size per node, indexed in pre-order
#[derive(Debug, Clone)]
pub struct SubtreeWeights {
    weight: Vec<usize>,
    size: Vec<usize>,
}

impl SubtreeWeights {
    pub fn compute(root: &Node) -> Self {
        let mut parents: Vec<Option<usize>> = Vec::new();
        let mut leaves: Vec<bool> = Vec::new();

        let mut stack: Vec<(&Node, Option<usize>)> = vec![(root, None)];
        while let Some((node, parent)) = stack.pop() {
            let index = parents.len();
            parents.push(parent);
            leaves.push(node.is_leaf());
            stack.extend(node.children.iter().rev().map(|c| (c, Some(index))));
        }

        let n = parents.len();
        let mut weight = vec![0usize; n];
        let mut size = vec![1usize; n];
        // Descendants follow their ancestors in pre-order, so walking backwards
        // finishes every child before its parent.
        for i in (0..n).rev() {
            if leaves[i] {
                weight[i] = 1;
            }
            if let Some(p) = parents[i] {
                weight[p] += weight[i];
                size[p] += size[i];
            }
        }

        Self { weight, size }
    }

    pub fn len(&self) -> usize {
        self.weight.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weight.is_empty()
    }

    /// Weight of the node at pre-order position `index`
    pub fn weight(&self, index: usize) -> Option<usize> {
        self.weight.get(index).copied()
    }

    /// Pre-order positions of the first `count` children of `index`
    fn child_indices(&self, index: usize, count: usize) -> Result<Vec<usize>> {
        let mut indices = Vec::with_capacity(count);
        let mut next = index + 1;
        for _ in 0..count {
            let size = self.size.get(next).copied().ok_or_else(|| {
                Error::Layout(format!("weight table has no entry for node #{}", next))
            })?;
            indices.push(next);
            next += size;
        }
        Ok(indices)
    }
}

struct Frame<'a> {
    node: &'a mut Node,
    index: usize,
    sector: Sector,
}

/// Lay out a copy of `root`; the caller's tree is left untouched
pub fn calculate_positions(root: &Node, config: &LayoutConfig) -> Result<Node> {
    layout_in_place(root.clone(), config)
}

/// Lay out `root` in place and hand it back
pub fn layout_in_place(mut root: Node, config: &LayoutConfig) -> Result<Node> {
    config.validate()?;
    let weights = SubtreeWeights::compute(&root);
    root.position = Position3D::origin();

    {
        let mut stack = vec![Frame {
            node: &mut root,
            index: 0,
            sector: Sector::FULL,
        }];

        while let Some(Frame { node, index, sector }) = stack.pop() {
            if node.children.is_empty() {
                continue;
            }

            let indices = weights.child_indices(index, node.children.len())?;
            let child_weights = indices
                .iter()
                .map(|&i| weights.weight(i).unwrap_or(0))
                .collect::<Vec<_>>();
            let sectors = sector.split(&child_weights);
            if sectors.len() != node.children.len() {
                return Err(Error::Layout(format!(
                    "node '{}' has zero total weight",
                    node.id
                )));
            }

            let radius = config.ring_radius(node.depth);
            let y = node.position.y - config.vertical_spacing;

            for ((child, child_sector), child_index) in
                node.children.iter_mut().zip(sectors).zip(indices)
            {
                let angle = child_sector.midpoint();
                child.position = Position3D::new(angle.cos() * radius, y, angle.sin() * radius);
                stack.push(Frame {
                    node: child,
                    index: child_index,
                    sector: child_sector,
                });
            }
        }
    }

    debug!(
        nodes = weights.len(),
        max_depth = root.max_depth(),
        "radial layout complete"
    );
    Ok(root)
}
