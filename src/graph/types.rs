//! Output model handed to the rendering surface.
//!
//! Field names follow the canvas node/edge shape (`id`, `position`,
//! `data.label`, `source`, `target`) so the JSON can be fed to it unchanged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl PipelineGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// First node carrying the given label.
    pub fn node_by_label(&self, label: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.data.label == label)
    }

    pub fn edges_of_kind(&self, kind: EdgeKind) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub position: Position,
    pub data: NodeData,
}

impl GraphNode {
    pub fn label(&self) -> &str {
        &self.data.label
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

impl GraphEdge {
    pub fn new(source: &str, target: &str, kind: EdgeKind) -> Self {
        GraphEdge {
            id: format!("{}-{}", source, target),
            source: source.to_string(),
            target: target.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    /// Parent stage → child stage from `runs` nesting.
    Structural,
    /// Anchor publisher → consumer from `outputs` / `inputs`.
    Referential,
}
