/// A node of the Merkle tree.
///
/// Leaves hold the hash of an input value and have no children. Internal
/// nodes hold the hash of their children's concatenated values and own
/// exactly `arity` children. Nodes are only created by
/// [`MerkleTree::build`](crate::MerkleTree::build) and cannot be modified
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleNode {
    value: Vec<u8>,
    children: Vec<MerkleNode>,
}

impl MerkleNode {
    /// Create a leaf holding an already-hashed value.
    pub(crate) fn leaf(value: Vec<u8>) -> Self {
        MerkleNode {
            value,
            children: Vec::new(),
        }
    }

    /// Create an internal node owning `children`.
    pub(crate) fn internal(value: Vec<u8>, children: Vec<MerkleNode>) -> Self {
        MerkleNode { value, children }
    }

    /// The hash stored in this node.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Children in aggregation order; empty for leaves.
    pub fn children(&self) -> &[MerkleNode] {
        &self.children
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Distance to the leaves. Leaves have height 0.
    ///
    /// Every leaf of a built tree sits at the same depth, so following the
    /// first child is enough.
    pub fn height(&self) -> u32 {
        let mut height = 0;
        let mut node = self;
        while let Some(first) = node.children.first() {
            height += 1;
            node = first;
        }
        height
    }

    /// Number of leaves below this node (1 for a leaf).
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(MerkleNode::leaf_count).sum()
        }
    }
}
