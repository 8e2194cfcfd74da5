use thiserror::Error;

/// Alias for `core::result::Result<T, MerkleTreeError>`.
pub type Result<T> = core::result::Result<T, MerkleTreeError>;

/// Errors from Merkle tree construction.
///
/// A lookup that finds nothing is not an error; see
/// [`MerkleTree::find_proof_path`](crate::MerkleTree::find_proof_path).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MerkleTreeError {
    /// Arity below 2 was supplied; padding would never terminate.
    #[error("arity must be at least 2, got {0}")]
    InvalidArity(usize),
    /// Build was called without any leaf values.
    #[error("cannot build a tree from an empty set of values")]
    EmptyInput,
    /// Build was called on a tree that already has a root.
    #[error("tree is already built")]
    AlreadyBuilt,
    /// The padded leaf count does not fit in `usize`.
    #[error("cannot pad {leaf_count} leaves to a power of {arity} without overflow")]
    LeafCountOverflow {
        /// Number of leaves supplied.
        leaf_count: usize,
        /// Arity of the tree.
        arity: usize,
    },
    /// The aggregation queue did not hold a full group when one was expected.
    /// This is a defect in padding or queue bookkeeping, never a caller error.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}
