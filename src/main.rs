use clap::Parser;
use itertools::Itertools;
use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use took::Timer;

use crate::graph::Graph;
use crate::io::report::GraphReport;
use crate::io::Report;

mod cli;
mod graph;
mod io;
mod mst;
mod runner;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = cli::ProgramArguments::parse();
    info!("{:?}", &args);

    let load_timer = Timer::new();
    let input = io::load_graphs(&args.input)?;
    info!(
        "loaded {} graphs after {}",
        input.graphs.len(),
        load_timer.took()
    );

    for record in input.graphs.iter().take(args.preview) {
        debug!(
            "graph {}: vertices ({}): {}",
            record.id,
            record.nodes.len(),
            record.nodes.iter().join(", ")
        );
        debug!(
            "graph {}: edges: {}",
            record.id,
            record
                .edges
                .iter()
                .map(|e| format!("{} - {} (w={})", e.from, e.to, e.weight))
                .join(", ")
        );
    }

    let graphs = input
        .graphs
        .iter()
        .map(|record| Ok((record.id, record.build_graph()?)))
        .collect::<anyhow::Result<Vec<(u32, Graph)>>>()?;

    let solve_timer = Timer::new();

    #[cfg(feature = "parallel")]
    let results: Vec<GraphReport> = graphs
        .par_iter()
        .map(|(id, graph)| solve_one(*id, graph))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<GraphReport> = graphs
        .iter()
        .map(|(id, graph)| solve_one(*id, graph))
        .collect();

    info!(
        "all {} graphs processed after {}",
        results.len(),
        solve_timer.took()
    );

    let report = Report { results };

    if let Some(path) = &args.output {
        io::write_json_report(path, &report)?;
        info!("results written to {}", path);
    }
    if let Some(path) = &args.csv {
        io::write_csv_report(path, &report)?;
        info!("detailed csv written to {}", path);
    }

    Ok(())
}

fn solve_one(id: u32, graph: &Graph) -> GraphReport {
    info!(
        "processing graph {} | vertices: {} | edges: {}",
        id,
        graph.vertex_count(),
        graph.edge_count()
    );
    let solve = runner::solve(graph);
    info!(
        "finished graph {} | prim cost: {} | kruskal cost: {} | faster: {:?} | dt: {:.3} ms | dops: {}",
        id,
        solve.prim.total_cost,
        solve.kruskal.total_cost,
        solve.comparison.faster_algorithm,
        solve.comparison.difference_ms,
        solve.comparison.difference_ops
    );
    GraphReport::new(id, graph, &solve)
}
