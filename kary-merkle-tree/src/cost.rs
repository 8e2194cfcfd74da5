use std::ops::{Add, AddAssign};

/// Hashing work done while building a tree.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct BuildCost {
    /// How many padded leaf values were hashed.
    pub leaf_hash_calls: u64,
    /// How many internal nodes were hashed from their children.
    pub node_hash_calls: u64,
    /// Total bytes passed to the hash function.
    pub hashed_bytes: u64,
}

impl BuildCost {
    /// Cost of hashing one leaf of `len` bytes.
    pub fn leaf(len: usize) -> Self {
        BuildCost {
            leaf_hash_calls: 1,
            hashed_bytes: len as u64,
            ..Default::default()
        }
    }

    /// Cost of hashing one internal node preimage of `len` bytes.
    pub fn node(len: usize) -> Self {
        BuildCost {
            node_hash_calls: 1,
            hashed_bytes: len as u64,
            ..Default::default()
        }
    }

    /// Leaf and node hash calls together.
    pub fn hash_calls(&self) -> u64 {
        self.leaf_hash_calls + self.node_hash_calls
    }
}

impl Add for BuildCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        BuildCost {
            leaf_hash_calls: self.leaf_hash_calls + rhs.leaf_hash_calls,
            node_hash_calls: self.node_hash_calls + rhs.node_hash_calls,
            hashed_bytes: self.hashed_bytes + rhs.hashed_bytes,
        }
    }
}

impl AddAssign for BuildCost {
    fn add_assign(&mut self, rhs: Self) {
        self.leaf_hash_calls += rhs.leaf_hash_calls;
        self.node_hash_calls += rhs.node_hash_calls;
        self.hashed_bytes += rhs.hashed_bytes;
    }
}
