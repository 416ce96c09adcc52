use std::error::Error;
use std::fmt::{Display, Formatter};

use ahash::AHashMap;

pub type VertexId = usize;
pub type EdgeId = usize;
pub type Weight = i64;

/// Raised by [`Graph::add_edge`] when an endpoint label was never added.
/// Construction-time contract violation; fatal for that graph's build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVertexError {
    pub label: String,
}

impl Display for MissingVertexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "edge references unknown vertex '{}'", self.label)
    }
}

impl Error for MissingVertexError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    /// The endpoint opposite to `v`, assuming `v` is one of the two.
    pub fn other(&self, v: VertexId) -> VertexId {
        if self.from == v {
            self.to
        } else {
            self.from
        }
    }
}

/// Undirected weighted graph over string-labelled vertices.
///
/// Vertices keep their insertion order; edges live in a single master list
/// (parallel edges are retained) with per-vertex adjacency holding edge ids,
/// so every edge is visible from both endpoints. Append-only: once handed to
/// an engine by shared reference it is never mutated.
#[derive(Debug)]
pub struct Graph {
    labels: Vec<String>,
    index: AHashMap<String, VertexId>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            index: AHashMap::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    pub fn with_vertices<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for label in labels {
            graph.add_vertex(label);
        }
        graph
    }

    /// Label uniqueness is the input's contract and is not re-validated.
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let label = label.into();
        let id = self.labels.len();
        self.index.insert(label.clone(), id);
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        id
    }

    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        weight: Weight,
    ) -> Result<EdgeId, MissingVertexError> {
        let from = self.resolve(from)?;
        let to = self.resolve(to)?;
        let id = self.edges.len();
        self.edges.push(Edge { from, to, weight });
        self.adjacency[from].push(id);
        self.adjacency[to].push(id);
        Ok(id)
    }

    fn resolve(&self, label: &str) -> Result<VertexId, MissingVertexError> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| MissingVertexError {
                label: label.to_string(),
            })
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn label(&self, v: VertexId) -> &str {
        &self.labels[v]
    }

    pub fn edge(&self, e: EdgeId) -> &Edge {
        &self.edges[e]
    }

    /// Edge ids incident to `v`, in insertion order.
    pub fn incident(&self, v: VertexId) -> &[EdgeId] {
        &self.adjacency[v]
    }
}
