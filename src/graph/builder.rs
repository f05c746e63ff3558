use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PkgDepsError, Result};
use crate::graph::parse::{parse_dependencies, ParseError};
use crate::graph::DependencyGraph;

/// Reads and parses a dependency file. Any invalid line rejects the whole
/// file; no partial graph is returned.
pub fn load_graph(path: &Path) -> Result<DependencyGraph> {
    let mut file = File::open(path).map_err(|source| PkgDepsError::InvalidFilePath {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened dependency file");

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|source| PkgDepsError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;

    let graph = build_graph(&content)?;
    if graph.is_empty() {
        debug!(path = %path.display(), "dependency file declares no dependencies");
    }
    info!(
        path = %path.display(),
        packages = graph.package_count(),
        edges = graph.edge_count(),
        "loaded dependency graph"
    );
    Ok(graph)
}

pub fn build_graph(content: &str) -> std::result::Result<DependencyGraph, ParseError> {
    let mut graph = DependencyGraph::new();
    graph.extend(parse_dependencies(content)?);
    Ok(graph)
}
