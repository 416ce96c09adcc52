use took::Timer;

use crate::graph::Graph;
use crate::mst::{compare, kruskal, prim, Comparison, MstResult};

/// Both engine results for one graph plus the derived comparison.
pub struct GraphSolve {
    pub prim: MstResult,
    pub kruskal: MstResult,
    pub comparison: Comparison,
}

/// Runs both engines on `graph`, each timed in isolation, then fills in the
/// caller-owned fields (`time_ms`, `disconnected`) and derives the
/// comparison. Pure function of the graph; invocations are independent and
/// safe to run in parallel across graphs.
pub fn solve(graph: &Graph) -> GraphSolve {
    let timer = Timer::new();
    let mut prim = prim::run(graph);
    prim.time_ms = to_ms(&timer);

    let timer = Timer::new();
    let mut kruskal = kruskal::run(graph);
    kruskal.time_ms = to_ms(&timer);

    let spanning = graph.vertex_count().saturating_sub(1);
    prim.disconnected = prim.edges.len() < spanning;
    kruskal.disconnected = kruskal.edges.len() < spanning;

    let comparison = compare(&prim, &kruskal);
    GraphSolve {
        prim,
        kruskal,
        comparison,
    }
}

fn to_ms(timer: &Timer) -> f64 {
    timer.took().as_std().as_secs_f64() * 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::tests_support::{triangle, two_triangles};

    #[test]
    fn connected_graph_yields_equal_cost_unflagged_results() {
        let sol = solve(&triangle());
        assert_eq!(sol.prim.total_cost, 3);
        assert_eq!(sol.kruskal.total_cost, 3);
        assert!(sol.comparison.equal_cost);
        assert!(!sol.prim.disconnected);
        assert!(!sol.kruskal.disconnected);
        assert!(sol.prim.time_ms >= 0.0 && sol.kruskal.time_ms >= 0.0);
    }

    #[test]
    fn disconnected_graph_flags_both_results() {
        let sol = solve(&two_triangles());
        assert!(sol.prim.disconnected);
        assert!(sol.kruskal.disconnected);
        // spanning forest from both engines, 2 edges per component
        assert_eq!(sol.prim.edges.len(), 4);
        assert_eq!(sol.kruskal.edges.len(), 4);
        assert!(sol.comparison.equal_cost);
    }

    #[test]
    fn single_vertex_is_connected() {
        let g = Graph::with_vertices(["A"]);
        let sol = solve(&g);
        assert!(!sol.prim.disconnected);
        assert!(!sol.kruskal.disconnected);
        assert_eq!(sol.prim.total_cost, 0);
        assert!(sol.prim.edges.is_empty());
    }

    #[test]
    fn empty_graph_is_not_flagged() {
        let sol = solve(&Graph::new());
        assert!(!sol.prim.disconnected);
        assert!(!sol.kruskal.disconnected);
    }
}
