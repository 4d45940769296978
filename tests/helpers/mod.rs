use std::fmt::Write;

use stagegraph::graph::*;
use stagegraph::options::BuildOptions;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_test_writer()
        .try_init();
}

/// Convert a document with default options, logging to the test writer.
pub fn convert(text: &str) -> PipelineGraph {
    convert_with(text, &BuildOptions::default())
}

pub fn convert_with(text: &str, options: &BuildOptions) -> PipelineGraph {
    init_tracing();
    stagegraph::convert(text, options)
}

pub fn labels(graph: &PipelineGraph) -> Vec<&str> {
    graph.nodes.iter().map(|n| n.label()).collect()
}

pub fn edge_ids(graph: &PipelineGraph, kind: EdgeKind) -> Vec<&str> {
    graph.edges_of_kind(kind).map(|e| e.id.as_str()).collect()
}

/// Node id for the first node with `label`; panics when absent.
pub fn id_of<'g>(graph: &'g PipelineGraph, label: &str) -> &'g str {
    match graph.node_by_label(label) {
        Some(node) => node.id.as_str(),
        None => panic!("no node labelled '{}' in {:?}", label, labels(graph)),
    }
}

/// One line per node then one per edge, for snapshot comparisons.
pub fn render(graph: &PipelineGraph) -> String {
    let mut out = String::new();
    for node in &graph.nodes {
        let _ = writeln!(
            out,
            "{} {:?} ({}, {})",
            node.id,
            node.label(),
            node.position.x,
            node.position.y
        );
    }
    for edge in &graph.edges {
        let kind = match edge.kind {
            EdgeKind::Structural => "structural",
            EdgeKind::Referential => "referential",
        };
        let _ = writeln!(out, "{} {}", edge.id, kind);
    }
    out
}
