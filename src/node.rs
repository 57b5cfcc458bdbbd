/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly
use node values as indices into per-node arrays such as distance vectors.
*/

use std::num::NonZero;

use bitvec::prelude::*;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// As `Option<Node>` uses additional bytes for padding, it can be inefficient
/// since we often need to use `Vec<Option<Node>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value (often)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// Often, `INVALID_NODE` is safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

/// A fixed-size set of nodes `0..n` stored as one bit per node.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct NodeBitSet {
    bits: BitVec,
}

impl NodeBitSet {
    /// Creates an empty bitset over `n` nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            bits: BitVec::repeat(false, n as usize),
        }
    }

    /// Creates a bitset over `n` nodes where every node is set
    pub fn new_all_set(n: NumNodes) -> Self {
        Self {
            bits: BitVec::repeat(true, n as usize),
        }
    }

    /// Creates a bitset over `n` nodes with the given nodes set
    pub fn new_with_bits_set<I>(n: NumNodes, bits: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut set = Self::new(n);
        for u in bits {
            set.set_bit(u);
        }
        set
    }

    /// Number of nodes this set ranges over
    pub fn number_of_bits(&self) -> NumNodes {
        self.bits.len() as NumNodes
    }

    /// Sets the bit of `u` and returns its previous value
    /// ** Panics if `u >= n` **
    pub fn set_bit(&mut self, u: Node) -> bool {
        self.bits.replace(u as usize, true)
    }

    /// Clears the bit of `u` and returns its previous value
    /// ** Panics if `u >= n` **
    pub fn clear_bit(&mut self, u: Node) -> bool {
        self.bits.replace(u as usize, false)
    }

    /// Returns *true* if `u` is set
    /// ** Panics if `u >= n` **
    pub fn get_bit(&self, u: Node) -> bool {
        self.bits[u as usize]
    }

    /// Number of set bits
    pub fn cardinality(&self) -> NumNodes {
        self.bits.count_ones() as NumNodes
    }

    /// Returns *true* if no bit is set
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Returns *true* if every bit is set
    pub fn are_all_set(&self) -> bool {
        self.bits.all()
    }

    /// Clears every bit
    pub fn clear_all(&mut self) {
        self.bits.fill(false);
    }

    /// Sets every bit that is set in `other`
    /// ** Panics if both sets range over a different number of nodes **
    pub fn union_with(&mut self, other: &NodeBitSet) {
        assert_eq!(self.bits.len(), other.bits.len());
        self.bits |= other.bits.as_bitslice();
    }

    /// Iterates over all set nodes in increasing order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits.iter_ones().map(|u| u as Node)
    }

    /// Iterates over all unset nodes in increasing order
    pub fn iter_cleared_bits(&self) -> impl Iterator<Item = Node> + '_ {
        self.bits.iter_zeros().map(|u| u as Node)
    }
}

impl std::fmt::Debug for NodeBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter_set_bits()).finish()
    }
}
