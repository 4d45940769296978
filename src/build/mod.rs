//! Build phase: value tree → node/edge lists.
//!
//! A pre-order walk over nested `runs` assigns ids and grid positions, emits
//! parent → child edges, and links `inputs` to previously published `outputs`.
//! Walk order is the only ordering guarantee: it fixes id assignment, which
//! anchors are visible to a consumer, and the order edges are appended in.

pub mod anchors;
pub mod stage;

use serde_yaml::Value;
use tracing::{debug, info};

use crate::graph::types::*;
use crate::options::{BuildOptions, RootPolicy};
use anchors::AnchorTable;
use stage::{classify, Shape, StageView};

/// Build the graph for a loaded document. Never fails; shapes that cannot be
/// read as stages are left out.
pub fn build(tree: &Value, options: &BuildOptions) -> PipelineGraph {
    let mut builder = GraphBuilder::new(options);

    match tree {
        Value::Mapping(root) => {
            for (key, value) in root {
                builder.traverse(value, None, 0, 0, scalar_text(key));
            }
        }
        other => debug!(kind = value_kind(other), "document root is not a mapping"),
    }

    let graph = builder.finish();
    info!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "built pipeline graph"
    );
    graph
}

struct GraphBuilder<'o> {
    options: &'o BuildOptions,
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    anchors: AnchorTable,
    root_seen: bool,
}

impl<'o> GraphBuilder<'o> {
    fn new(options: &'o BuildOptions) -> Self {
        GraphBuilder {
            options,
            nodes: Vec::new(),
            edges: Vec::new(),
            anchors: AnchorTable::new(),
            root_seen: false,
        }
    }

    fn finish(self) -> PipelineGraph {
        PipelineGraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }

    fn traverse(
        &mut self,
        value: &Value,
        parent_id: Option<&str>,
        depth: usize,
        sibling_index: usize,
        key_hint: Option<String>,
    ) {
        let stage = match classify(value) {
            Shape::Stage(stage) => stage,
            Shape::Leaf | Shape::Invalid => {
                debug!(depth, sibling_index, kind = value_kind(value), "skipping non-stage value");
                return;
            }
        };

        if depth == 0 && self.take_root_suppression() {
            debug!("suppressing first top-level stage as implicit root");
            for (index, child) in stage.runs().iter().enumerate() {
                self.traverse(child, None, depth + 1, index, None);
            }
            return;
        }

        let node_id = self.emit_node(&stage, depth, sibling_index, key_hint);

        if let Some(parent) = parent_id {
            self.edges
                .push(GraphEdge::new(parent, &node_id, EdgeKind::Structural));
        }

        for anchor in stage.published_anchors() {
            self.anchors.publish(anchor, &node_id);
        }

        for reference in stage.input_refs() {
            match self.anchors.resolve(reference, self.options.reference_style) {
                Some(source) => {
                    let edge = GraphEdge::new(source, &node_id, EdgeKind::Referential);
                    self.edges.push(edge);
                }
                None => debug!(node = %node_id, reference, "unresolved input reference"),
            }
        }

        for (index, child) in stage.runs().iter().enumerate() {
            self.traverse(child, Some(&node_id), depth + 1, index, None);
        }
    }

    /// True exactly once per build when the first top-level stage is to be hidden.
    fn take_root_suppression(&mut self) -> bool {
        if self.options.root_policy != RootPolicy::SuppressFirst || self.root_seen {
            return false;
        }
        self.root_seen = true;
        true
    }

    fn emit_node(
        &mut self,
        stage: &StageView<'_>,
        depth: usize,
        sibling_index: usize,
        key_hint: Option<String>,
    ) -> String {
        let ordinal = self.nodes.len() + 1;
        let id = format!("node-{}", ordinal);
        let label = stage
            .name()
            .or(key_hint)
            .unwrap_or_else(|| format!("Unnamed Node {}", ordinal));

        self.nodes.push(GraphNode {
            id: id.clone(),
            position: self.position(depth, sibling_index),
            data: NodeData { label },
        });
        id
    }

    fn position(&self, depth: usize, sibling_index: usize) -> Position {
        Position {
            x: sibling_index as f64 * self.options.spacing.horizontal,
            y: depth as f64 * self.options.spacing.vertical,
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(m) if m.is_empty() => "empty mapping",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
