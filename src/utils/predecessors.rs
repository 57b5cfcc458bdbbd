use super::*;

/// Parent pointers of a shortest-path (or spanning) tree.
///
/// Stores `Option<OptionalNode>` per node, so a map over `n` nodes takes `4n` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    preds: Vec<Option<OptionalNode>>,
}

impl PredecessorMap {
    /// Creates a map over `n` nodes without any predecessors
    pub fn new(n: NumNodes) -> Self {
        Self {
            preds: vec![None; n as usize],
        }
    }

    pub fn len(&self) -> usize {
        self.preds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preds.is_empty()
    }

    /// Sets `u` as the predecessor of `v`
    /// ** Panics if `v >= n` **
    pub fn set(&mut self, v: Node, u: Node) {
        self.preds[v as usize] = OptionalNode::new(u);
    }

    /// Returns the predecessor of `v`, if any
    /// ** Panics if `v >= n` **
    pub fn get(&self, v: Node) -> Option<Node> {
        self.preds[v as usize].map(|u| u.get())
    }

    /// Removes the predecessor of `v`
    pub fn clear(&mut self, v: Node) {
        self.preds[v as usize] = None;
    }

    /// Follows the predecessors from `target` back to `source` and returns the path
    /// `source, ..., target`. Returns an empty path if `source` is never reached, including
    /// the case where the pointers run in a cycle.
    ///
    /// The path from a node to itself is the node alone.
    pub fn path_to(&self, source: Node, target: Node) -> Vec<Node> {
        let mut path = vec![target];
        let mut cur = target;

        while cur != source {
            match self.get(cur) {
                Some(pred) if path.len() <= self.preds.len() => {
                    path.push(pred);
                    cur = pred;
                }
                _ => return Vec::new(),
            }
        }

        path.reverse();
        path
    }

    /// Converts into a plain vector of parents
    pub fn to_vec(&self) -> Vec<Option<Node>> {
        self.preds.iter().map(|p| p.map(|u| u.get())).collect()
    }
}
