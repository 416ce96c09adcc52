use crate::graph::Graph;
use crate::mst::union_find::UnionFind;
use crate::mst::MstResult;

/// Kruskal's algorithm over a stable weight-sorted view of the edge list.
///
/// The sort keeps the original edge-list order among equal weights, which
/// pins down which of several equal-cost MSTs gets selected. Every union
/// attempt counts as one operation, merged or rejected; once |V|-1 edges are
/// accepted the remaining edges are skipped without further counting.
pub fn run(graph: &Graph) -> MstResult {
    let mut result = MstResult::default();
    if graph.vertex_count() == 0 {
        return result;
    }

    let mut order: Vec<usize> = (0..graph.edge_count()).collect();
    order.sort_by_key(|&e| graph.edge(e).weight);

    let spanning = graph.vertex_count() - 1;
    let mut sets = UnionFind::new(graph.vertex_count());

    for edge_id in order {
        if result.edges.len() == spanning {
            break;
        }
        let edge = graph.edge(edge_id);
        result.operations += 1;
        if sets.union(edge.from, edge.to) {
            result.accept(edge_id, edge.weight);
        }
    }

    result
}
