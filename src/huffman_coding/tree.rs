//! Huffman tree construction.
//!
//! Nodes live in one arena. Leaves occupy ids `0..n` in frequency table order
//! and refer back to their table entry by index; internal nodes follow in the
//! order they were created. Nothing holds an address into the table, so the
//! table can be re-sorted or moved without invalidating the tree.
//!
//! Two builders are provided. Both combine the two smallest `(count, id)` pairs
//! at every step, the smaller becoming the left child, so they produce the same
//! tree for the same table.

use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::symbol_table::FrequencyTable;
use crate::error::{CodecError, Result};

pub type NodeId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    /// Leaf for the table entry at `entry`.
    Leaf { entry: usize, count: u64 },
    Internal {
        count: u64,
        left: NodeId,
        right: NodeId,
    },
}

impl Node {
    pub fn count(&self) -> u64 {
        match *self {
            Node::Leaf { count, .. } | Node::Internal { count, .. } => count,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Which construction algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TreeStrategy {
    /// Binary heap of all live nodes, O(n log n).
    #[default]
    PriorityQueue,
    /// Two sorted queues (leaves, internal nodes) merged front to front, O(n)
    /// once the leaves are sorted.
    LinearMerge,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree for `table`. The table should already be sorted by count;
    /// `LinearMerge` re-sorts its leaf queue if it is not.
    pub fn build(table: &FrequencyTable, strategy: TreeStrategy) -> Result<Self> {
        if table.is_empty() {
            return Err(CodecError::EmptyTable);
        }
        let leaves = table.len();
        let mut nodes = Vec::with_capacity(2 * leaves - 1);
        nodes.extend(table.iter().enumerate().map(|(entry, e)| Node::Leaf {
            entry,
            count: e.count,
        }));

        let root = match strategy {
            TreeStrategy::PriorityQueue => by_priority_queue(&mut nodes),
            TreeStrategy::LinearMerge => by_linear_merge(&mut nodes),
        }
        .ok_or(CodecError::EmptyTable)?;

        debug!(
            "Built tree with {} leaves and {} internal nodes ({:?})",
            leaves,
            nodes.len() - leaves,
            strategy
        );
        Ok(Self { nodes, root })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// True when the whole tree is one leaf (single-symbol input).
    pub fn is_single_leaf(&self) -> bool {
        self.nodes[self.root].is_leaf()
    }

    /// Sum of count * depth over all leaves: the encoded length in bits.
    pub fn weighted_path_length(&self) -> u64 {
        let mut total = 0;
        let mut stack = vec![(self.root, 0_u64)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                Node::Leaf { count, .. } => total += count * depth,
                Node::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        total
    }
}

/// Repeatedly combine the two smallest nodes in a min-heap. Returns the root.
fn by_priority_queue(nodes: &mut Vec<Node>) -> Option<NodeId> {
    let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = nodes
        .iter()
        .enumerate()
        .map(|(id, n)| Reverse((n.count(), id)))
        .collect();

    while let Some(Reverse((left_count, left))) = heap.pop() {
        let Some(Reverse((right_count, right))) = heap.pop() else {
            return Some(left);
        };
        let count = left_count + right_count;
        heap.push(Reverse((count, nodes.len())));
        nodes.push(Node::Internal { count, left, right });
    }
    None
}

/// Two-queue construction. Internal nodes are created with non-decreasing
/// counts and increasing ids, so the arena tail past the leaves is itself a
/// sorted queue and the smallest live node is always at one of the two fronts.
fn by_linear_merge(nodes: &mut Vec<Node>) -> Option<NodeId> {
    let leaf_total = nodes.len();
    if leaf_total == 0 {
        return None;
    }
    // Stable, so equal counts stay in id order. Already-sorted input is a single pass.
    let mut leaves: Vec<NodeId> = (0..leaf_total).collect();
    leaves.sort_by_key(|&id| nodes[id].count());

    let mut queues = MergeQueues {
        leaves,
        next_leaf: 0,
        next_internal: leaf_total,
    };
    for _ in 1..leaf_total {
        let left = queues.take_smallest(&nodes[..])?;
        let right = queues.take_smallest(&nodes[..])?;
        let count = nodes[left].count() + nodes[right].count();
        nodes.push(Node::Internal { count, left, right });
    }
    // The last node created is the root; with one symbol that is the leaf itself.
    Some(nodes.len() - 1)
}

struct MergeQueues {
    leaves: Vec<NodeId>,
    next_leaf: usize,
    next_internal: NodeId,
}

impl MergeQueues {
    /// Pop whichever front has the smaller `(count, id)`.
    fn take_smallest(&mut self, nodes: &[Node]) -> Option<NodeId> {
        let leaf = self
            .leaves
            .get(self.next_leaf)
            .map(|&id| (nodes[id].count(), id));
        let internal = nodes
            .get(self.next_internal)
            .map(|n| (n.count(), self.next_internal));

        match (leaf, internal) {
            (Some(l), Some(i)) if l <= i => {
                self.next_leaf += 1;
                Some(l.1)
            }
            (_, Some(i)) => {
                self.next_internal += 1;
                Some(i.1)
            }
            (Some(l), None) => {
                self.next_leaf += 1;
                Some(l.1)
            }
            (None, None) => None,
        }
    }
}
