use std::fs::File;
use std::io::BufReader;

use anyhow::Context;
use serde::Deserialize;

use crate::graph::{Graph, Weight};

/**
Input format, one JSON document per file:

```json
{
  "graphs": [
    {
      "id": 1,
      "nodes": ["A", "B", "C"],
      "edges": [
        { "from": "A", "to": "B", "weight": 1 },
        { "from": "B", "to": "C", "weight": 2 }
      ]
    }
  ]
}
```

Node labels are unique within a graph; edges are undirected and may repeat
the same endpoint pair (parallel edges are kept). Every edge endpoint must
appear in `nodes`.
*/
#[derive(Debug, Deserialize)]
pub struct GraphsFile {
    pub graphs: Vec<GraphRecord>,
}

#[derive(Debug, Deserialize)]
pub struct GraphRecord {
    pub id: u32,
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl GraphRecord {
    pub fn build_graph(&self) -> anyhow::Result<Graph> {
        let mut graph = Graph::with_vertices(self.nodes.iter().cloned());
        for edge in &self.edges {
            graph
                .add_edge(&edge.from, &edge.to, edge.weight)
                .with_context(|| format!("building graph {}", self.id))?;
        }
        Ok(graph)
    }
}

pub fn load_graphs(path: impl Into<String>) -> anyhow::Result<GraphsFile> {
    let path = path.into();
    let f = File::open(&path).with_context(|| format!("opening input file {}", path))?;
    let file: GraphsFile = serde_json::from_reader(BufReader::new(&f))
        .with_context(|| format!("parsing input file {}", path))?;
    Ok(file)
}
