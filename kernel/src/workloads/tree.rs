//! Tree kernel: binary search tree built from a linear-congruential sequence.
//!
//! Insertion takes a subtree by value and hands back its root, so every
//! level of the recursion re-links its child. Ownership is strictly
//! parent → child through `Option<Box<Node>>`; there are no parent pointers
//! and no shared nodes.
//!
//! # Ordering
//!
//! `left < node.value <= right`. Equal values go right, so a duplicate never
//! collapses into an existing node: it walks down the right spine until it
//! finds an empty slot and is allocated there. Every insert allocates exactly
//! one node.

use crate::config::lcg;

/// Linear-congruential generator: `seed = (seed*A + C) mod M`.
///
/// A negative remainder is negated, so every emitted value is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    seed: i64,
}

impl Lcg {
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Current state (the last emitted value, or the seed before the first step).
    #[must_use]
    pub const fn state(&self) -> i64 {
        self.seed
    }
}

impl Iterator for Lcg {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let mut next = (self.seed * lcg::A + lcg::C) % lcg::M;
        if next < 0 {
            next = -next;
        }
        self.seed = next;
        Some(next)
    }
}

/// Owned link to a subtree.
pub type Link = Option<Box<Node>>;

#[derive(Debug)]
pub struct Node {
    value: i64,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Insert `value` below `root` and return the (possibly new) subtree root.
#[must_use]
pub fn insert(root: Link, value: i64) -> Box<Node> {
    match root {
        None => Box::new(Node::leaf(value)),
        Some(mut node) => {
            if value < node.value {
                node.left = Some(insert(node.left.take(), value));
            } else {
                node.right = Some(insert(node.right.take(), value));
            }
            node
        }
    }
}

/// Number of nodes reachable from `root`, by full traversal.
#[must_use]
pub fn count_nodes(root: &Link) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + count_nodes(&node.left) + count_nodes(&node.right),
    }
}

/// Length of the longest root-to-leaf path (0 for an empty tree).
#[must_use]
pub fn depth(root: &Link) -> usize {
    match root {
        None => 0,
        Some(node) => 1 + depth(&node.left).max(depth(&node.right)),
    }
}

/// Append the values under `root` to `out` in order.
pub fn in_order_values(root: &Link, out: &mut Vec<i64>) {
    if let Some(node) = root {
        in_order_values(&node.left, out);
        out.push(node.value);
        in_order_values(&node.right, out);
    }
}

/// A binary search tree rooted in the caller's frame.
#[derive(Debug, Default)]
pub struct SearchTree {
    root: Link,
}

impl SearchTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: i64) {
        self.root = Some(insert(self.root.take(), value));
    }

    /// Node count by traversal (not cached).
    #[must_use]
    pub fn count_nodes(&self) -> usize {
        count_nodes(&self.root)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        depth(&self.root)
    }

    #[must_use]
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        in_order_values(&self.root, &mut out);
        out
    }
}

/// Build a tree from the first `count` generator outputs after `seed`.
#[must_use]
pub fn build(seed: i64, count: usize) -> SearchTree {
    let mut tree = SearchTree::new();
    for value in Lcg::new(seed).take(count) {
        tree.insert(value);
    }
    tree
}

/// Build the tree and return its node count.
#[must_use]
pub fn run(seed: i64, count: usize) -> usize {
    let tree = build(seed, count);
    let nodes = tree.count_nodes();
    tracing::debug!(seed, count, nodes, depth = tree.depth(), "tree built");
    nodes
}
