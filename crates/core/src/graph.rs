//! Directed graph container for the walkthrough topology
//!
//! Wraps `petgraph::graph::DiGraph` with anonymous vertices addressed by
//! dense `usize` indices, so vertex 0 is simply "the first vertex added".
//! Vertices and edges carry no properties; the graph exists to be built,
//! printed, and iterated.

use anyhow::bail;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

/// A directed graph with anonymous, densely indexed vertices
///
/// Vertex indices are assigned in insertion order starting at 0 and are
/// never invalidated (vertices cannot be removed). Edge iteration order is
/// insertion order.
pub struct Digraph {
    /// The underlying graph (private to enforce encapsulation)
    inner: DiGraph<(), ()>,
}

impl Digraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            inner: DiGraph::new(),
        }
    }

    /// Add a vertex to the graph
    ///
    /// # Returns
    /// The index of the new vertex. Indices are dense: the first vertex is
    /// 0, the second 1, and so on.
    pub fn add_vertex(&mut self) -> usize {
        self.inner.add_node(()).index()
    }

    /// Add a directed edge between two existing vertices
    ///
    /// # Arguments
    /// * `from` - Source vertex index
    /// * `to` - Target vertex index
    ///
    /// # Errors
    /// Returns an error if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, from: usize, to: usize) -> anyhow::Result<()> {
        let count = self.vertex_count();
        if from >= count {
            bail!("source vertex {from} out of range (graph has {count} vertices)");
        }
        if to >= count {
            bail!("target vertex {to} out of range (graph has {count} vertices)");
        }
        self.inner
            .add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
        Ok(())
    }

    /// Get the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all vertex indices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.inner.node_indices().map(|idx| idx.index())
    }

    /// Iterate over all edges as (source, target) pairs in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.inner
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
    }

    /// Get the out-neighbors of a vertex in edge-insertion order
    ///
    /// Built from [`edges()`](Self::edges) rather than petgraph's
    /// `neighbors()`, which walks edges most-recent-first.
    pub fn successors(&self, vertex: usize) -> Vec<usize> {
        self.edges()
            .filter(|&(from, _)| from == vertex)
            .map(|(_, to)| to)
            .collect()
    }

    /// Build a serializable snapshot of the graph
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            vertices: self.vertices().collect(),
            edges: self.edges().collect(),
        }
    }
}

impl Default for Digraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of a [`Digraph`]
///
/// `Digraph` itself cannot derive `Serialize`/`Deserialize` because
/// petgraph's graph types do not implement them; this snapshot carries the
/// same information in plain vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    /// Vertex indices in ascending order
    pub vertices: Vec<usize>,
    /// Edges as (source, target) pairs in insertion order
    pub edges: Vec<(usize, usize)>,
}

/// Build the fixed walkthrough graph
///
/// Four vertices and four directed edges forming a diamond:
///
/// ```text
/// 0 → 1, 0 → 2, 1 → 3, 2 → 3
/// ```
///
/// # Example
/// ```
/// let g = tcr_graph_core::graph::sample_digraph();
/// assert_eq!(g.vertex_count(), 4);
/// assert_eq!(g.edge_count(), 4);
/// ```
pub fn sample_digraph() -> Digraph {
    let mut g = Digraph::new();

    let v0 = g.add_vertex();
    let v1 = g.add_vertex();
    let v2 = g.add_vertex();
    let v3 = g.add_vertex();

    // Endpoints are freshly added vertices, so add_edge cannot fail here
    let mut link = |from, to| {
        g.add_edge(from, to)
            .expect("sample topology uses valid vertices");
    };
    link(v0, v1);
    link(v0, v2);
    link(v1, v3);
    link(v2, v3);

    g
}
