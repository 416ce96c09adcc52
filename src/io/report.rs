use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use crate::graph::{Graph, Weight};
use crate::mst::{Comparison, MstResult};
use crate::runner::GraphSolve;

/// Serialized mirror of one solved graph, matching the output document
/// `{"results": [{graph_id, input_stats, prim, kruskal, comparison}]}`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub results: Vec<GraphReport>,
}

#[derive(Debug, Serialize)]
pub struct GraphReport {
    pub graph_id: u32,
    pub input_stats: InputStats,
    pub prim: AlgorithmReport,
    pub kruskal: AlgorithmReport,
    pub comparison: Comparison,
}

#[derive(Debug, Serialize)]
pub struct InputStats {
    pub vertices: usize,
    pub edges: usize,
}

#[derive(Debug, Serialize)]
pub struct AlgorithmReport {
    pub mst_edges: Vec<LabeledEdge>,
    pub total_cost: Weight,
    pub operations_count: u64,
    pub execution_time_ms: f64,
    pub disconnected: bool,
}

#[derive(Debug, Serialize)]
pub struct LabeledEdge {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

impl AlgorithmReport {
    pub fn from_result(graph: &Graph, result: &MstResult) -> Self {
        Self {
            mst_edges: result
                .edges
                .iter()
                .map(|&e| {
                    let edge = graph.edge(e);
                    LabeledEdge {
                        from: graph.label(edge.from).to_string(),
                        to: graph.label(edge.to).to_string(),
                        weight: edge.weight,
                    }
                })
                .collect(),
            total_cost: result.total_cost,
            operations_count: result.operations,
            execution_time_ms: result.time_ms,
            disconnected: result.disconnected,
        }
    }
}

impl GraphReport {
    pub fn new(graph_id: u32, graph: &Graph, solve: &GraphSolve) -> Self {
        Self {
            graph_id,
            input_stats: InputStats {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
            },
            prim: AlgorithmReport::from_result(graph, &solve.prim),
            kruskal: AlgorithmReport::from_result(graph, &solve.kruskal),
            comparison: solve.comparison.clone(),
        }
    }
}

pub fn write_json_report(path: impl AsRef<Path>, report: &Report) -> anyhow::Result<()> {
    let path = path.as_ref();
    let f = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), report)?;
    Ok(())
}

const CSV_HEADER: &str = "graph_id;vertices;edges;algorithm;total_cost;operations_count;execution_time_ms";

pub fn write_csv_report(path: impl AsRef<Path>, report: &Report) -> anyhow::Result<()> {
    let path = path.as_ref();
    let f = File::create(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    let mut out = BufWriter::new(f);

    writeln!(out, "{}", CSV_HEADER)?;
    for result in &report.results {
        writeln!(out, "{}", csv_row(result, "Prim", &result.prim))?;
        writeln!(out, "{}", csv_row(result, "Kruskal", &result.kruskal))?;
    }
    Ok(())
}

fn csv_row(result: &GraphReport, algorithm: &str, report: &AlgorithmReport) -> String {
    format!(
        "{};{};{};{};{};{};{:.3}",
        result.graph_id,
        result.input_stats.vertices,
        result.input_stats.edges,
        algorithm,
        report.total_cost,
        report.operations_count,
        report.execution_time_ms,
    )
}
