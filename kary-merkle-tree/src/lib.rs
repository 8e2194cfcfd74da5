//! Fixed-arity Merkle tree.
//!
//! The tree is built once from an ordered list of byte values. The values are
//! padded up to the next power of the arity `k`, hashed into leaves, and then
//! aggregated `k` at a time until a single root remains:
//!
//! `parent = H(child_0 || child_1 || ... || child_{k-1})`
//!
//! The hash function `H` is supplied by the caller through [`TreeHasher`].
//! After building, [`MerkleTree::find_proof_path`] returns the sibling hashes
//! needed to recompute the root from any leaf.

#![warn(missing_docs)]

mod cost;
mod error;
pub(crate) mod hash;
/// Node count and padding arithmetic.
pub mod helper;
mod node;
mod padding;
pub(crate) mod proof;
pub(crate) mod tree;
#[cfg(feature = "visualize")]
mod visualize;

#[cfg(test)]
pub(crate) mod test_utils;

pub use cost::BuildCost;
pub use error::{MerkleTreeError, Result};
pub use hash::{Blake3Hasher, IdentityHasher, TreeHasher};
pub use helper::{node_count_for, padded_len, tree_height};
pub use node::MerkleNode;
pub use padding::{Padding, ZERO_SENTINEL};
pub use proof::{ProofPath, ProofStep};
pub use tree::{BuildSummary, MerkleTree};
