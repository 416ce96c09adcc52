use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use crate::graph::{EdgeId, Graph, VertexId, Weight};
use crate::mst::MstResult;

/// Frontier entry. Ordered by weight, then by discovery sequence, so that
/// among equal-weight candidates the one pushed first wins. The explicit
/// secondary key keeps the selection deterministic across runs.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct FrontierEdge {
    weight: Weight,
    seq: u64,
    edge: EdgeId,
}

/// Prim's algorithm, grown from the first vertex in insertion order.
///
/// Every heap pop and every heap push counts as one operation; stale pops
/// (far endpoint already in the tree) count too. When the heap empties with
/// vertices still unreached, growth restarts from the next unreached vertex
/// in insertion order, so a disconnected graph yields a spanning forest with
/// fewer than |V|-1 edges, which is the caller's fact to flag.
pub fn run(graph: &Graph) -> MstResult {
    let mut result = MstResult::default();

    let mut in_tree = FixedBitSet::with_capacity(graph.vertex_count());
    let mut frontier: BinaryHeap<Reverse<FrontierEdge>> = BinaryHeap::new();
    let mut seq = 0u64;

    for start in 0..graph.vertex_count() {
        if in_tree.contains(start) {
            continue;
        }
        in_tree.insert(start);
        push_incident(graph, start, &in_tree, &mut frontier, &mut seq, &mut result);

        while let Some(Reverse(entry)) = frontier.pop() {
            result.operations += 1;
            let edge = graph.edge(entry.edge);
            let far = if in_tree.contains(edge.from) {
                edge.to
            } else {
                edge.from
            };
            if in_tree.contains(far) {
                // stale entry, both endpoints reached since it was pushed
                continue;
            }
            result.accept(entry.edge, edge.weight);
            in_tree.insert(far);
            push_incident(graph, far, &in_tree, &mut frontier, &mut seq, &mut result);
        }
    }

    result
}

fn push_incident(
    graph: &Graph,
    v: VertexId,
    in_tree: &FixedBitSet,
    frontier: &mut BinaryHeap<Reverse<FrontierEdge>>,
    seq: &mut u64,
    result: &mut MstResult,
) {
    for &edge_id in graph.incident(v) {
        let edge = graph.edge(edge_id);
        if in_tree.contains(edge.other(v)) {
            continue;
        }
        frontier.push(Reverse(FrontierEdge {
            weight: edge.weight,
            seq: *seq,
            edge: edge_id,
        }));
        *seq += 1;
        result.operations += 1;
    }
}
