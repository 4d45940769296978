//! petgraph-based view over a built pipeline graph.

use std::collections::HashMap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::types::{EdgeKind, PipelineGraph};

pub struct GraphIndex {
    pub graph: DiGraph<String, EdgeKind>,
    pub node_indices: HashMap<String, NodeIndex>,
}

impl GraphIndex {
    /// Index every node and every edge whose endpoints are both present.
    pub fn build(pipeline: &PipelineGraph) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in &pipeline.nodes {
            let idx = graph.add_node(node.id.clone());
            node_indices.insert(node.id.clone(), idx);
        }

        for edge in &pipeline.edges {
            if let (Some(&s), Some(&t)) = (
                node_indices.get(&edge.source),
                node_indices.get(&edge.target),
            ) {
                graph.add_edge(s, t, edge.kind);
            }
        }

        GraphIndex { graph, node_indices }
    }

    /// Targets reached from `node_id`, in edge insertion order.
    pub fn successors(&self, node_id: &str) -> Vec<(&str, EdgeKind)> {
        self.edges_directed(node_id, Direction::Outgoing)
    }

    pub fn predecessors(&self, node_id: &str) -> Vec<(&str, EdgeKind)> {
        self.edges_directed(node_id, Direction::Incoming)
    }

    pub fn incoming_count(&self, node_id: &str) -> usize {
        self.predecessors(node_id).len()
    }

    pub fn outgoing_count(&self, node_id: &str) -> usize {
        self.successors(node_id).len()
    }

    /// Referential edges can close a loop (a stage consuming its own anchor).
    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    fn edges_directed(&self, node_id: &str, dir: Direction) -> Vec<(&str, EdgeKind)> {
        let Some(&idx) = self.node_indices.get(node_id) else {
            return vec![];
        };
        let mut out: Vec<(&str, EdgeKind)> = self
            .graph
            .edges_directed(idx, dir)
            .map(|e| {
                let other = match dir {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (self.graph[other].as_str(), *e.weight())
            })
            .collect();
        // petgraph walks adjacency lists newest-first
        out.reverse();
        out
    }
}
