use serde::Serialize;

use crate::graph::{EdgeId, Weight};

pub mod kruskal;
pub mod prim;
pub mod union_find;

/// Output of one engine invocation. `edges` is in selection order, not
/// sorted. `time_ms` and `disconnected` are written by the caller after the
/// invocation (see [`crate::runner`]); the engines leave them at their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MstResult {
    pub edges: Vec<EdgeId>,
    pub total_cost: Weight,
    pub operations: u64,
    pub time_ms: f64,
    pub disconnected: bool,
}

impl MstResult {
    pub(crate) fn accept(&mut self, edge: EdgeId, weight: Weight) {
        self.edges.push(edge);
        self.total_cost += weight;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Faster {
    Prim,
    Kruskal,
    Equal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub equal_cost: bool,
    pub faster_algorithm: Faster,
    pub difference_ms: f64,
    pub difference_ops: i64,
}

/// Pure derivation over two already-computed results; touches no graph data.
pub fn compare(prim: &MstResult, kruskal: &MstResult) -> Comparison {
    let difference_ms = prim.time_ms - kruskal.time_ms;
    let faster_algorithm = if difference_ms.abs() < 1e-6 {
        Faster::Equal
    } else if difference_ms < 0.0 {
        Faster::Prim
    } else {
        Faster::Kruskal
    };
    Comparison {
        equal_cost: prim.total_cost == kruskal.total_cost,
        faster_algorithm,
        difference_ms,
        difference_ops: prim.operations as i64 - kruskal.operations as i64,
    }
}


#[cfg(test)]
mod property_tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::{kruskal, prim};
    use crate::graph::Graph;

    fn label(i: usize) -> String {
        format!("V{}", i)
    }

    /// Random spanning tree first (vertex i hooks onto some j < i), then
    /// extra random edges on top, so the graph is connected by construction.
    fn random_connected_graph(rng: &mut Pcg64Mcg, n: usize, extra: usize) -> Graph {
        let mut g = Graph::with_vertices((0..n).map(label));
        for i in 1..n {
            let j = rng.gen_range(0..i);
            let w = rng.gen_range(-20..=50i64);
            g.add_edge(&label(i), &label(j), w).unwrap();
        }
        for _ in 0..extra {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            if a == b {
                continue;
            }
            let w = rng.gen_range(-20..=50i64);
            g.add_edge(&label(a), &label(b), w).unwrap();
        }
        g
    }

    #[test]
    fn mst_cost_is_algorithm_invariant_on_connected_graphs() {
        let mut rng = Pcg64Mcg::seed_from_u64(0x4d5354);
        for _ in 0..50 {
            let n = rng.gen_range(2..40);
            let g = random_connected_graph(&mut rng, n, n * 2);
            let p = prim::run(&g);
            let k = kruskal::run(&g);
            assert_eq!(p.edges.len(), n - 1);
            assert_eq!(k.edges.len(), n - 1);
            assert_eq!(p.total_cost, k.total_cost);
        }
    }

    #[test]
    fn repeated_runs_select_identical_edge_sequences() {
        let mut rng = Pcg64Mcg::seed_from_u64(7);
        for _ in 0..10 {
            let g = random_connected_graph(&mut rng, 25, 60);
            assert_eq!(prim::run(&g), prim::run(&g));
            assert_eq!(kruskal::run(&g), kruskal::run(&g));
        }
    }

    #[test]
    fn operation_counts_grow_with_path_length() {
        // paths of increasing length are structurally similar graphs
        let mut last = (0u64, 0u64);
        for n in 2..30 {
            let mut g = Graph::with_vertices((0..n).map(label));
            for i in 1..n {
                g.add_edge(&label(i - 1), &label(i), 1).unwrap();
            }
            let p = prim::run(&g);
            let k = kruskal::run(&g);
            assert!(p.operations >= last.0);
            assert!(k.operations >= last.1);
            last = (p.operations, k.operations);
        }
    }
}
