//! Addressing of the Erdős–Rényi benchmark instances on disk.
//!
//! Instances live at
//! `<root>/new_<n>_dataset/erdos_n<n>_p0c<density>_<instance>.graph`, with the
//! density written to one decimal place.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Default dataset root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "dataset_grafos_no_dirigidos";

/// Node counts for which datasets are generated.
pub const SUPPORTED_NODE_COUNTS: [usize; 3] = [1000, 2000, 3000];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetInstance {
    pub nodes: usize,
    pub density: f64,
    pub instance: u32,
}

impl DatasetInstance {
    pub fn new(nodes: usize, density: f64, instance: u32) -> Result<Self> {
        if !SUPPORTED_NODE_COUNTS.contains(&nodes) {
            return Err(Error::UnsupportedNodeCount(nodes));
        }
        Ok(Self {
            nodes,
            density,
            instance,
        })
    }

    pub fn file_name(&self) -> String {
        format!(
            "erdos_n{}_p0c{:.1}_{}.graph",
            self.nodes, self.density, self.instance
        )
    }

    pub fn path(&self, root: &Path) -> PathBuf {
        root.join(format!("new_{}_dataset", self.nodes))
            .join(self.file_name())
    }

    /// Parses a name of the form `erdos_n<n>_p0c<density>_<instance>.graph`.
    /// The node count is not checked against [`SUPPORTED_NODE_COUNTS`].
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_suffix(".graph")?.strip_prefix("erdos_n")?;
        let (nodes, rest) = stem.split_once("_p0c")?;
        let (density, instance) = rest.rsplit_once('_')?;
        Some(Self {
            nodes: nodes.parse().ok()?,
            density: density.parse().ok()?,
            instance: instance.parse().ok()?,
        })
    }

    /// Reads the instance below `root`, checking the file's vertex count
    /// against `nodes`.
    pub fn load(&self, root: &Path) -> Result<Graph> {
        let graph = read_graph(&self.path(root))?;
        if graph.n() != self.nodes {
            return Err(Error::VertexCountMismatch {
                expected: self.nodes,
                found: graph.n(),
            });
        }
        Ok(graph)
    }
}

/// Reads a graph file (vertex count followed by edge pairs).
pub fn read_graph(path: &Path) -> Result<Graph> {
    let file = File::open(path)?;
    let graph = Graph::parse_edge_list(BufReader::new(file))?;
    log::debug!(
        "loaded {}: {} vertices, {} edges",
        path.display(),
        graph.n(),
        graph.m()
    );
    Ok(graph)
}
