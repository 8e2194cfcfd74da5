use std::collections::VecDeque;

use tracing::{debug, trace, warn};

use crate::{
    BuildCost, MerkleNode, MerkleTreeError, Padding, ProofPath, Result, TreeHasher,
    hash::{concat_values, validate_arity},
    proof::find_path,
};

/// Outcome of a successful [`MerkleTree::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Node count as reported by [`MerkleTree::size`].
    pub node_count: usize,
    /// Number of values supplied by the caller.
    pub leaf_count: usize,
    /// Number of leaves after padding.
    pub padded_leaf_count: usize,
    /// Hashing work done by the build.
    pub cost: BuildCost,
}

/// A fixed-arity Merkle tree.
///
/// The tree starts empty and is built exactly once with
/// [`build`](Self::build). Building needs `&mut self`, so concurrent or
/// interleaved builds are ruled out by the borrow checker; every other
/// operation is a read-only query.
#[derive(Debug, Clone)]
pub struct MerkleTree<H> {
    hasher: H,
    arity: usize,
    padding: Padding,
    root: Option<MerkleNode>,
    node_count: usize,
    leaf_count: usize,
    padded_leaf_count: usize,
}

impl<H: TreeHasher> MerkleTree<H> {
    /// Create an empty tree whose internal nodes have `arity` children.
    ///
    /// Short leaf lists are padded with [`Padding::DuplicateLast`]. Arity must
    /// be at least 2.
    pub fn new(hasher: H, arity: usize) -> Result<Self> {
        Self::with_padding(hasher, arity, Padding::default())
    }

    /// Create an empty tree with an explicit padding policy.
    pub fn with_padding(hasher: H, arity: usize, padding: Padding) -> Result<Self> {
        validate_arity(arity)?;
        Ok(MerkleTree {
            hasher,
            arity,
            padding,
            root: None,
            node_count: 0,
            leaf_count: 0,
            padded_leaf_count: 0,
        })
    }

    /// Build the tree from `values`.
    ///
    /// The values are padded to a power of the arity, hashed into leaves, and
    /// aggregated `arity` at a time in FIFO order until one root remains.
    ///
    /// Fails with `AlreadyBuilt` if the tree has a root (the tree is left
    /// untouched) and with `EmptyInput` if `values` is empty.
    pub fn build(&mut self, values: Vec<Vec<u8>>) -> Result<BuildSummary> {
        if self.root.is_some() {
            warn!(
                node_count = self.node_count,
                "rejected rebuild of an already built tree"
            );
            return Err(MerkleTreeError::AlreadyBuilt);
        }

        let leaf_count = values.len();
        let padded = self.padding.pad(values, self.arity)?;
        let padded_leaf_count = padded.len();

        let mut cost = BuildCost::default();
        let mut leaves = Vec::with_capacity(padded_leaf_count);
        for value in &padded {
            cost += BuildCost::leaf(value.len());
            leaves.push(MerkleNode::leaf(self.hasher.hash(value)));
        }

        let (root, node_count) = aggregate(&self.hasher, self.arity, leaves, &mut cost)?;

        debug!(
            arity = self.arity,
            leaf_count,
            padded_leaf_count,
            node_count,
            hash_calls = cost.hash_calls(),
            "built merkle tree"
        );

        self.root = Some(root);
        self.node_count = node_count;
        self.leaf_count = leaf_count;
        self.padded_leaf_count = padded_leaf_count;

        Ok(BuildSummary {
            node_count,
            leaf_count,
            padded_leaf_count,
            cost,
        })
    }

    /// Hash a raw value the way build hashes leaves.
    ///
    /// The result is what [`find_proof_path`](Self::find_proof_path) expects
    /// as its target.
    pub fn hash_leaf(&self, raw: &[u8]) -> Vec<u8> {
        self.hasher.hash(raw)
    }

    /// Find the proof path for the leaf whose (hashed) value equals `target`.
    ///
    /// Returns `None` if the tree is not built or no leaf matches. When
    /// several leaves match, the leftmost one is used.
    pub fn find_proof_path(&self, target: &[u8]) -> Option<ProofPath> {
        find_path(self.root.as_ref()?, target)
    }

    /// Like [`find_proof_path`](Self::find_proof_path), but hashes `raw`
    /// first.
    pub fn find_proof_path_for_raw(&self, raw: &[u8]) -> Option<ProofPath> {
        self.find_proof_path(&self.hash_leaf(raw))
    }
}

impl<H> MerkleTree<H> {
    /// Root node, `None` before build.
    pub fn root(&self) -> Option<&MerkleNode> {
        self.root.as_ref()
    }

    /// Root hash, `None` before build.
    pub fn root_hash(&self) -> Option<&[u8]> {
        self.root.as_ref().map(MerkleNode::value)
    }

    /// Node count: padded leaves plus internal nodes, counted as `arity` per
    /// aggregation round plus 1 for the root. 0 before build.
    ///
    /// See [`node_count_for`](crate::node_count_for).
    pub fn size(&self) -> usize {
        self.node_count
    }

    /// Number of children of every internal node.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Padding policy used by build.
    pub fn padding(&self) -> &Padding {
        &self.padding
    }

    /// Whether build has completed.
    pub fn is_built(&self) -> bool {
        self.root.is_some()
    }

    /// Number of values passed to build, before padding.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of leaves after padding.
    pub fn padded_leaf_count(&self) -> usize {
        self.padded_leaf_count
    }

    /// Height of the root, `None` before build.
    pub fn height(&self) -> Option<u32> {
        self.root.as_ref().map(MerkleNode::height)
    }
}

/// Aggregate `leaves` into a single root.
///
/// Returns the root and the node count (`arity` per round plus 1 for the
/// root). The leaf count must be a power of `arity`; anything else surfaces
/// as `InternalInvariantViolation`.
pub(crate) fn aggregate<H: TreeHasher>(
    hasher: &H,
    arity: usize,
    leaves: Vec<MerkleNode>,
    cost: &mut BuildCost,
) -> Result<(MerkleNode, usize)> {
    let mut queue: VecDeque<MerkleNode> = leaves.into();
    let mut node_count = 0usize;
    let mut level = 0u32;
    let mut level_remaining = queue.len();

    while queue.len() > 1 {
        let group = take_group(&mut queue, arity)?;
        let preimage = concat_values(&group);
        *cost += BuildCost::node(preimage.len());
        queue.push_back(MerkleNode::internal(hasher.hash(&preimage), group));
        node_count += arity;

        level_remaining = level_remaining.checked_sub(arity).ok_or_else(|| {
            MerkleTreeError::InternalInvariantViolation(format!(
                "aggregation group of {} crossed the end of level {}",
                arity, level
            ))
        })?;
        if level_remaining == 0 {
            level += 1;
            level_remaining = queue.len();
            trace!(level, nodes = level_remaining, "aggregated level");
        }
    }

    let root = queue.pop_front().ok_or_else(|| {
        MerkleTreeError::InternalInvariantViolation("aggregation queue drained to empty".into())
    })?;
    Ok((root, node_count + 1))
}

/// Dequeue exactly `arity` nodes from the front of `queue`.
fn take_group(queue: &mut VecDeque<MerkleNode>, arity: usize) -> Result<Vec<MerkleNode>> {
    if queue.len() < arity {
        return Err(MerkleTreeError::InternalInvariantViolation(format!(
            "aggregation queue holds {} nodes, expected a full group of {}",
            queue.len(),
            arity
        )));
    }
    Ok(queue.drain(..arity).collect())
}
