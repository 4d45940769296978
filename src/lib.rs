pub mod build;
pub mod error;
pub mod graph;
pub mod load;
pub mod options;
pub mod wasm;

use tracing::warn;

use crate::error::ConvertError;
use crate::graph::PipelineGraph;
use crate::options::BuildOptions;

/// Load a document and build its graph, reporting load failures.
pub fn try_convert(text: &str, options: &BuildOptions) -> Result<PipelineGraph, ConvertError> {
    let graph = match load::load(text)? {
        Some(tree) => build::build(&tree, options),
        None => PipelineGraph::default(),
    };
    Ok(graph)
}

/// Load a document and build its graph. A document that fails to load yields
/// an empty graph.
pub fn convert(text: &str, options: &BuildOptions) -> PipelineGraph {
    try_convert(text, options).unwrap_or_else(|e| {
        warn!(code = %e.code, "invalid pipeline document: {}", e.message);
        PipelineGraph::default()
    })
}
