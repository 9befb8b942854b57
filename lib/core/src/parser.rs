//! JSON to node tree conversion
//!
//! Ids are derived from the path: `parent.id + "." + key`, array elements are
//! keyed `[index]` and the root id is its own key. Object children keep
//! document order (serde_json is built with `preserve_order`).
//!
//! The tree is built with an explicit work stack, so [`parse_value`] handles
//! any depth. [`parse_json`] rejects text nesting more than
//! [`MAX_NESTING_DEPTH`] arrays or objects with [`Error::TooDeep`] before
//! serde_json ever descends into it. Numbers outside the `f64` range (`1e400`)
//! are rejected as [`Error::InvalidJson`] rather than read as infinity.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use crate::node::{Node, NodeKind, ScalarValue, ROOT_KEY};
use crate::{Error, Result};

/// Deepest container nesting [`parse_json`] accepts
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse JSON text into an unpositioned node tree rooted at `"root"`
pub fn parse_json(text: &str) -> Result<Node> {
    let depth = nesting_depth(text, MAX_NESTING_DEPTH);
    if depth > MAX_NESTING_DEPTH {
        debug!(limit = MAX_NESTING_DEPTH, "rejecting input: nested too deep");
        return Err(Error::TooDeep(MAX_NESTING_DEPTH));
    }

    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)
        .and_then(|value| de.end().map(|()| value))
        .map_err(|e| {
            debug!("rejecting input: {}", e);
            Error::from(e)
        })?;
    Ok(parse_value(&value))
}

/// Build a node tree from an already parsed value
pub fn parse_value(value: &Value) -> Node {
    parse_value_with_key(value, ROOT_KEY)
}

/// Build a node tree whose root uses `key` as both key and id
pub fn parse_value_with_key(value: &Value, key: &str) -> Node {
    build(value, key.to_string())
}

/// Deepest array/object nesting in `text`, scanning stops once past `limit`.
/// Brackets inside string literals are skipped; syntax is left to serde_json.
fn nesting_depth(text: &str, limit: usize) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                if depth > deepest {
                    deepest = depth;
                    if deepest > limit {
                        break;
                    }
                }
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

#[inline]
fn child_id(parent_id: Option<&str>, key: &str) -> String {
    match parent_id {
        Some(parent) => format!("{}.{}", parent, key),
        None => key.to_string(),
    }
}

#[inline]
fn index_key(index: usize) -> String {
    format!("[{}]", index)
}

/// A node under construction and the children it still has to visit
struct Frame<'a> {
    node: Node,
    // reversed, popped from the back
    pending: Vec<(String, &'a Value)>,
}

impl<'a> Frame<'a> {
    fn open(value: &'a Value, key: String, parent_id: Option<&str>, depth: usize) -> Self {
        let id = child_id(parent_id, &key);
        let parent_id = parent_id.map(str::to_string);

        let (mut node, mut pending) = match value {
            Value::Object(map) => (
                Node::container(id, key, NodeKind::Object, depth, parent_id),
                map.iter().map(|(k, v)| (k.clone(), v)).collect::<Vec<_>>(),
            ),
            Value::Array(items) => (
                Node::container(id, key, NodeKind::Array, depth, parent_id),
                items.iter().enumerate().map(|(i, v)| (index_key(i), v)).collect(),
            ),
            Value::String(s) => (
                Node::scalar(id, key, ScalarValue::String(s.clone()), depth, parent_id),
                Vec::new(),
            ),
            Value::Number(n) => (
                Node::scalar(id, key, ScalarValue::Number(n.clone()), depth, parent_id),
                Vec::new(),
            ),
            Value::Bool(b) => (
                Node::scalar(id, key, ScalarValue::Boolean(*b), depth, parent_id),
                Vec::new(),
            ),
            Value::Null => (
                Node::scalar(id, key, ScalarValue::Null, depth, parent_id),
                Vec::new(),
            ),
        };
        node.children.reserve_exact(pending.len());
        pending.reverse();
        Self { node, pending }
    }
}

fn build(value: &Value, key: String) -> Node {
    let mut stack = vec![Frame::open(value, key, None, 0)];
    loop {
        // never empty here: the root frame is only removed on return
        let top = stack.len() - 1;
        let next = stack[top].pending.pop();
        if let Some((key, child)) = next {
            let parent = &stack[top].node;
            let frame = Frame::open(child, key, Some(parent.id.as_str()), parent.depth + 1);
            stack.push(frame);
            continue;
        }

        let finished = stack.swap_remove(top).node;
        match stack.last_mut() {
            Some(parent) => parent.node.children.push(finished),
            None => return finished,
        }
    }
}
