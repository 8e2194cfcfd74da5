//! Test utilities: tree fixtures and proof recomputation.

use crate::{IdentityHasher, MerkleNode, MerkleTree, ProofPath, TreeHasher};

/// Convert string literals into leaf values.
pub(crate) fn values(items: &[&str]) -> Vec<Vec<u8>> {
    items.iter().map(|s| s.as_bytes().to_vec()).collect()
}

/// `count` distinct values: the big-endian bytes of `0..count`.
pub(crate) fn numbered_values(count: u32) -> Vec<Vec<u8>> {
    (0..count).map(|i| i.to_be_bytes().to_vec()).collect()
}

/// The five leaves used throughout the scenarios.
pub(crate) fn five_values() -> Vec<Vec<u8>> {
    values(&["porky", "dooky", "pooky", "tooky", "choky"])
}

/// Build a tree with the identity hasher.
pub(crate) fn identity_tree(arity: usize, input: Vec<Vec<u8>>) -> MerkleTree<IdentityHasher> {
    let mut tree = MerkleTree::new(IdentityHasher, arity).expect("valid arity");
    tree.build(input).expect("build should succeed");
    tree
}

/// Recompute the root hash from a proof path using the builder's
/// aggregation rule.
pub(crate) fn recompute_root<H: TreeHasher>(hasher: &H, proof: &ProofPath) -> Vec<u8> {
    let mut current = proof.leaf.clone();
    for step in &proof.steps {
        let mut preimage = Vec::new();
        let mut siblings = step.siblings.iter();
        for index in 0..=step.siblings.len() {
            if index == step.position {
                preimage.extend_from_slice(&current);
            } else {
                let sibling = siblings.next().expect("sibling for every other position");
                preimage.extend_from_slice(sibling);
            }
        }
        current = hasher.hash(&preimage);
    }
    current
}

/// Collect all leaf values left to right.
pub(crate) fn leaf_values(node: &MerkleNode) -> Vec<Vec<u8>> {
    if node.is_leaf() {
        return vec![node.value().to_vec()];
    }
    node.children().iter().flat_map(leaf_values).collect()
}

/// Walk every internal node, checking arity and `value == H(concat(children))`.
///
/// Returns the number of internal nodes visited.
pub(crate) fn check_internal_nodes<H: TreeHasher>(
    hasher: &H,
    arity: usize,
    node: &MerkleNode,
) -> usize {
    if node.is_leaf() {
        return 0;
    }
    assert_eq!(node.children().len(), arity, "internal node arity");
    let preimage: Vec<u8> = node
        .children()
        .iter()
        .flat_map(|child| child.value().iter().copied())
        .collect();
    assert_eq!(node.value(), hasher.hash(&preimage).as_slice());
    1 + node
        .children()
        .iter()
        .map(|child| check_internal_nodes(hasher, arity, child))
        .sum::<usize>()
}
