//! Hash function contract and the node hashing scheme.
//!
//! - Leaf nodes:     `H(value)`
//! - Internal nodes: `H(child_0.value || ... || child_{k-1}.value)`
//!
//! No domain tags or separators are added; the tree only relies on `H` being
//! deterministic with a stable output length.

use crate::{MerkleNode, MerkleTreeError};

/// Deterministic byte-to-byte hash function used for every node of a tree.
///
/// Implemented for any `Fn(&[u8]) -> Vec<u8>`, so a closure can be passed
/// straight to [`MerkleTree::new`](crate::MerkleTree::new).
pub trait TreeHasher {
    /// Hash `data`. Must be pure and always return the same length.
    fn hash(&self, data: &[u8]) -> Vec<u8>;
}

impl<F> TreeHasher for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        self(data)
    }
}

/// 32-byte Blake3 digest.
#[derive(Debug, Default, Clone, Copy)]
pub struct Blake3Hasher;

impl TreeHasher for Blake3Hasher {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        blake3::hash(data).as_bytes().to_vec()
    }
}

/// Returns its input unchanged.
///
/// With this hasher a node's value is the concatenation of all leaf values
/// below it, which makes tree shapes easy to assert on.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityHasher;

impl TreeHasher for IdentityHasher {
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        data.to_vec()
    }
}

/// Validate that arity is at least 2.
pub(crate) fn validate_arity(arity: usize) -> Result<(), MerkleTreeError> {
    if arity < 2 {
        return Err(MerkleTreeError::InvalidArity(arity));
    }
    Ok(())
}

/// Concatenate the children's values in order, without separators.
///
/// This is the preimage of the parent's value.
pub(crate) fn concat_values(children: &[MerkleNode]) -> Vec<u8> {
    let len = children.iter().map(|child| child.value().len()).sum();
    let mut buf = Vec::with_capacity(len);
    for child in children {
        buf.extend_from_slice(child.value());
    }
    buf
}
