/// Disjoint-set over `0..n` with path halving and union by rank.
///
/// Transient: built fresh per Kruskal invocation and discarded after.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `a` and `b`. Returns `false` when they were
    /// already in the same set, i.e. the corresponding edge closes a cycle.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_at_construction() {
        let mut uf = UnionFind::new(4);
        for v in 0..4 {
            assert_eq!(uf.find(v), v);
        }
    }

    #[test]
    fn union_reports_merge_vs_cycle() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 2));
        // all four connected now; any further union closes a cycle
        assert!(!uf.union(0, 3));
        assert!(!uf.union(0, 1));
        assert_eq!(uf.find(0), uf.find(3));
    }
}
