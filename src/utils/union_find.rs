use super::*;

/// Disjoint-set forest over the nodes `0..n` with path compression and union by rank.
///
/// Both `find` and `union` run in amortized `O(alpha(n))`.
///
/// # Examples
/// ```
/// use wgraphs::utils::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.union(0, 1));
/// assert!(uf.union(2, 3));
/// assert!(!uf.union(1, 0));
/// assert!(uf.same_set(1, 0));
/// assert!(!uf.same_set(1, 2));
/// assert_eq!(uf.number_of_sets(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u32>,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_sets: n,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }

    /// Returns the representative of the set containing `u` and compresses the path to it
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut cur = u;
        while cur != root {
            let next = self.parent[cur as usize];
            self.parent[cur as usize] = root;
            cur = next;
        }

        root
    }

    /// Merges the sets of `u` and `v`. Returns *false* if they already were in the same set.
    /// On equal ranks, the root of `v` is attached below the root of `u`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }

        match self.rank[ru as usize].cmp(&self.rank[rv as usize]) {
            std::cmp::Ordering::Less => self.parent[ru as usize] = rv,
            std::cmp::Ordering::Greater => self.parent[rv as usize] = ru,
            std::cmp::Ordering::Equal => {
                self.parent[rv as usize] = ru;
                self.rank[ru as usize] += 1;
            }
        }

        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    /// ** Panics if `u >= n || v >= n` **
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn long_chain_is_compressed() {
        let n = 10_000;
        let mut uf = UnionFind::new(n);
        for u in 1..n {
            assert!(uf.union(u, u - 1));
        }
        assert_eq!(uf.number_of_sets(), 1);

        let root = uf.find(n - 1);
        for u in 0..n {
            assert_eq!(uf.find(u), root);
        }
    }

    #[test]
    fn against_labels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let n = 100;

        let mut uf = UnionFind::new(n);
        let mut label: Vec<Node> = (0..n).collect();

        for _ in 0..150 {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);

            let (lu, lv) = (label[u as usize], label[v as usize]);
            assert_eq!(uf.union(u, v), lu != lv);
            for l in label.iter_mut() {
                if *l == lv {
                    *l = lu;
                }
            }

            let distinct = label.iter().collect::<std::collections::HashSet<_>>().len();
            assert_eq!(uf.number_of_sets() as usize, distinct);
        }

        for u in 0..n {
            for v in 0..n {
                assert_eq!(uf.same_set(u, v), label[u as usize] == label[v as usize]);
            }
        }
    }
}
