use crate::{MerkleTreeError, Result, helper::padded_len};

/// Filler used by [`Padding::zero_sentinel`].
pub const ZERO_SENTINEL: &[u8] = b"0";

/// How the leaf list is completed up to the next power of the arity.
///
/// Fillers are always appended after the real values, which keep their order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Padding {
    /// Repeat the last real value.
    #[default]
    DuplicateLast,
    /// Append a fixed byte value.
    Sentinel(Vec<u8>),
}

impl Padding {
    /// Sentinel padding with the single ASCII byte `"0"`.
    pub fn zero_sentinel() -> Self {
        Padding::Sentinel(ZERO_SENTINEL.to_vec())
    }

    /// Filler value for `values`, or `None` if `values` is empty and the
    /// policy needs a last value to copy.
    pub fn filler<'a>(&'a self, values: &'a [Vec<u8>]) -> Option<&'a [u8]> {
        match self {
            Padding::DuplicateLast => values.last().map(Vec::as_slice),
            Padding::Sentinel(sentinel) => Some(sentinel.as_slice()),
        }
    }

    /// Pad `values` to the smallest power of `arity` that can hold them.
    pub fn pad(&self, mut values: Vec<Vec<u8>>, arity: usize) -> Result<Vec<Vec<u8>>> {
        if values.is_empty() {
            return Err(MerkleTreeError::EmptyInput);
        }
        let target = padded_len(values.len(), arity)?;
        let missing = target - values.len();
        if missing > 0 {
            let filler = self
                .filler(&values)
                .ok_or(MerkleTreeError::EmptyInput)?
                .to_vec();
            values.reserve_exact(missing);
            values.extend(std::iter::repeat_n(filler, missing));
        }
        Ok(values)
    }
}
