use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity set of positions within a rectangle list
///
/// Uses 0-based indexing into the list it was created for. Used for flood-fill
/// bookkeeping and for matching members between two combinations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberSet {
    bits: BitVec,
    capacity: usize,
}

impl MemberSet {
    /// Create a set with no members present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Insert a position, returning whether it was newly added
    ///
    /// Positions outside the capacity are ignored.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.capacity || self.contains(index) {
            return false;
        }
        self.bits.set(index, true);
        true
    }

    /// Test membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Test if every position is present
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Count positions in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Positions not yet in the set, in ascending order
    pub fn absent(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_zeros()
    }

    /// Extract all present positions in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for MemberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MemberSet({}/{} present: {:?})",
            self.count(),
            self.capacity,
            self.to_vec()
        )
    }
}
