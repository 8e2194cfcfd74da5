//! Inclusion proof paths.
//!
//! A [`ProofPath`] lists, for every ancestor of a leaf, the values of the
//! ancestor's other children and the position of the on-path child among
//! them. Starting from the leaf value and walking the steps bottom-up with the
//! builder's rule `H(child_0 || ... || child_{k-1})` reproduces the root.

use crate::MerkleNode;


/// Sibling values at one level of a proof path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofStep {
    /// Index of the on-path child among its parent's children.
    pub position: usize,
    /// Values of the other `arity - 1` children, in child order.
    pub siblings: Vec<Vec<u8>>,
}

/// The path from a leaf to the root, as sibling values per level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofPath {
    /// The (hashed) leaf value the path was generated for.
    pub leaf: Vec<u8>,
    /// One step per ancestor, ordered bottom-up: the leaf's parent first, the
    /// root last.
    pub steps: Vec<ProofStep>,
}

impl ProofPath {
    /// Number of levels between the leaf and the root.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for a single-leaf tree, where the leaf is the root.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All sibling values, bottom-up and in child order within a level.
    pub fn sibling_values(&self) -> Vec<Vec<u8>> {
        self.steps
            .iter()
            .flat_map(|step| step.siblings.iter().cloned())
            .collect()
    }

    /// Consume the path and return its sibling values.
    pub fn into_sibling_values(self) -> Vec<Vec<u8>> {
        self.steps
            .into_iter()
            .flat_map(|step| step.siblings)
            .collect()
    }
}

/// Depth-first search for the leftmost leaf equal to `target`.
///
/// The stack holds `(ancestor, next child index)` frames from the root down
/// to the node being searched. A frame is advanced before its child is
/// visited and popped once all of its children failed, so on a hit the stack
/// is exactly the ancestor chain of the leaf.
pub(crate) fn find_path(root: &MerkleNode, target: &[u8]) -> Option<ProofPath> {
    if root.is_leaf() {
        return (root.value() == target).then(|| ProofPath {
            leaf: target.to_vec(),
            steps: Vec::new(),
        });
    }

    let mut stack: Vec<(&MerkleNode, usize)> = vec![(root, 0)];
    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        let index = frame.1;
        frame.1 += 1;

        match node.children().get(index) {
            None => {
                stack.pop();
            }
            Some(child) if child.is_leaf() => {
                if child.value() == target {
                    return Some(collect_path(&stack, target));
                }
            }
            Some(child) => stack.push((child, 0)),
        }
    }
    None
}

fn collect_path(stack: &[(&MerkleNode, usize)], target: &[u8]) -> ProofPath {
    let steps = stack
        .iter()
        .rev()
        .map(|(ancestor, next)| {
            // frames are advanced before descending
            let position = next - 1;
            let siblings = ancestor
                .children()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != position)
                .map(|(_, child)| child.value().to_vec())
                .collect();
            ProofStep { position, siblings }
        })
        .collect();
    ProofPath {
        leaf: target.to_vec(),
        steps,
    }
}
