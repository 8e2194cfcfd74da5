use crate::{MerkleTreeError, Result, hash::validate_arity};

/// Smallest power of `arity` that is `>= leaf_count`.
///
/// Returns 1 for `leaf_count` 0 and 1. Fails with `InvalidArity` for
/// `arity < 2` and with `LeafCountOverflow` if the power does not fit in
/// `usize`.
pub fn padded_len(leaf_count: usize, arity: usize) -> Result<usize> {
    validate_arity(arity)?;
    let mut target = 1usize;
    while target < leaf_count {
        target = target
            .checked_mul(arity)
            .ok_or(MerkleTreeError::LeafCountOverflow { leaf_count, arity })?;
    }
    Ok(target)
}

/// Height of the tree built from `leaf_count` values: the exponent `e` of the
/// padded length `arity^e`.
pub fn tree_height(leaf_count: usize, arity: usize) -> Result<u32> {
    let mut level = padded_len(leaf_count, arity)?;
    let mut height = 0;
    while level > 1 {
        level /= arity;
        height += 1;
    }
    Ok(height)
}

/// Node count [`MerkleTree::size`](crate::MerkleTree::size) reports after
/// building from `leaf_count` values, without building.
///
/// Every aggregation round adds `arity` for the children it consumed and the
/// root adds 1, so for a padded length `k^e` this is
/// `k^e + k^(e-1) + ... + k + 1`.
pub fn node_count_for(leaf_count: usize, arity: usize) -> Result<usize> {
    if leaf_count == 0 {
        return Err(MerkleTreeError::EmptyInput);
    }
    let overflow = MerkleTreeError::LeafCountOverflow { leaf_count, arity };
    let mut level = padded_len(leaf_count, arity)?;
    let mut count = 1usize;
    while level > 1 {
        // `level / arity` rounds of `arity` children each
        count = count.checked_add(level).ok_or_else(|| overflow.clone())?;
        level /= arity;
    }
    Ok(count)
}

#[cfg(test)]
mod helper_tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0, 2), Ok(1));
        assert_eq!(padded_len(1, 2), Ok(1));
        assert_eq!(padded_len(2, 2), Ok(2));
        assert_eq!(padded_len(3, 2), Ok(4));
        assert_eq!(padded_len(5, 2), Ok(8));
        assert_eq!(padded_len(8, 2), Ok(8));
        assert_eq!(padded_len(3, 3), Ok(3));
        assert_eq!(padded_len(4, 3), Ok(9));
        assert_eq!(padded_len(10, 3), Ok(27));
        assert_eq!(padded_len(17, 16), Ok(256));
    }

    #[test]
    fn test_padded_len_rejects_bad_arity() {
        assert_matches!(padded_len(5, 0), Err(MerkleTreeError::InvalidArity(0)));
        assert_matches!(padded_len(5, 1), Err(MerkleTreeError::InvalidArity(1)));
    }

    #[test]
    fn test_padded_len_overflow() {
        assert_matches!(
            padded_len(usize::MAX, 3),
            Err(MerkleTreeError::LeafCountOverflow { arity: 3, .. })
        );
    }

    #[test]
    fn test_tree_height() {
        assert_eq!(tree_height(1, 2), Ok(0));
        assert_eq!(tree_height(2, 2), Ok(1));
        assert_eq!(tree_height(5, 2), Ok(3));
        assert_eq!(tree_height(9, 3), Ok(2));
        assert_eq!(tree_height(10, 3), Ok(3));
    }

    #[test]
    fn test_node_count_for() {
        assert_eq!(node_count_for(1, 2), Ok(1));
        assert_eq!(node_count_for(3, 3), Ok(4));
        assert_eq!(node_count_for(5, 3), Ok(13));
        assert_eq!(node_count_for(5, 2), Ok(15));
        assert_eq!(node_count_for(16, 4), Ok(21));
        assert_matches!(node_count_for(0, 2), Err(MerkleTreeError::EmptyInput));
    }
}
