//! Candidate decompositions and their deduplicated collections
//!
//! A [`Combo`] is compared as an unordered multiset of rectangles, so two
//! combos listing the same rectangles in different orders are equal.
//! [`ComboCollection`] keeps insertion order and refuses equal members.

use crate::algorithm::bitset::MemberSet;
use crate::spatial::contiguity::is_contiguous;
use crate::spatial::rectangle::{Coordinate, Rectangle};
use num_traits::Zero;
use std::fmt;

/// One candidate decomposition of a shape into rectangles
#[derive(Clone, Debug)]
pub struct Combo<T: Coordinate> {
    members: Vec<Rectangle<T>>,
}

impl<T: Coordinate> Combo<T> {
    /// Create a combo from its member rectangles
    pub const fn new(members: Vec<Rectangle<T>>) -> Self {
        Self { members }
    }

    /// Member rectangles in construction order
    pub fn members(&self) -> &[Rectangle<T>] {
        &self.members
    }

    /// Consume the combo, returning its members
    pub fn into_members(self) -> Vec<Rectangle<T>> {
        self.members
    }

    /// Number of rectangles (the combo's cardinality)
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Test for a combo without rectangles
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over member rectangles
    pub fn iter(&self) -> std::slice::Iter<'_, Rectangle<T>> {
        self.members.iter()
    }

    /// Exact sum of member areas
    pub fn total_area(&self) -> T {
        self.members
            .iter()
            .fold(<T as Zero>::zero(), |total, rectangle| {
                total + rectangle.area()
            })
    }

    /// Test whether the members form one edge-connected cluster
    pub fn is_contiguous(&self) -> bool {
        is_contiguous(&self.members)
    }

    /// Members other than the one at `index`
    pub fn without(&self, index: usize) -> Vec<Rectangle<T>> {
        self.members
            .iter()
            .enumerate()
            .filter(|&(position, _)| position != index)
            .map(|(_, rectangle)| rectangle.clone())
            .collect()
    }

    /// Multiset comparison of members
    ///
    /// Both combos must have the same cardinality, and every member of one
    /// must be matched by a distinct equal member of the other.
    pub fn same_members(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut matched = MemberSet::new(other.len());
        self.members.iter().all(|rectangle| {
            let partner = other
                .members
                .iter()
                .enumerate()
                .position(|(index, candidate)| !matched.contains(index) && candidate == rectangle);
            partner.is_some_and(|index| matched.insert(index))
        })
    }
}

impl<T: Coordinate> PartialEq for Combo<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_members(other)
    }
}

impl<T: Coordinate> Eq for Combo<T> {}

impl<T: Coordinate> From<Vec<Rectangle<T>>> for Combo<T> {
    fn from(members: Vec<Rectangle<T>>) -> Self {
        Self::new(members)
    }
}

impl<'a, T: Coordinate> IntoIterator for &'a Combo<T> {
    type Item = &'a Rectangle<T>;
    type IntoIter = std::slice::Iter<'a, Rectangle<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Coordinate> fmt::Display for Combo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, rectangle) in self.members.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{rectangle}")?;
        }
        f.write_str("]")
    }
}

/// Ordered collection of pairwise distinct combos
///
/// Containment is a linear scan with [`Combo::same_members`], which is
/// quadratic overall but fine for clusters of a few dozen tiles.
#[derive(Clone, Debug)]
pub struct ComboCollection<T: Coordinate> {
    combos: Vec<Combo<T>>,
}

impl<T: Coordinate> Default for ComboCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Coordinate> ComboCollection<T> {
    /// Create an empty collection
    pub const fn new() -> Self {
        Self { combos: Vec::new() }
    }

    /// Test whether an equal combo is already present
    pub fn contains(&self, combo: &Combo<T>) -> bool {
        self.combos.iter().any(|existing| existing.same_members(combo))
    }

    /// Append a combo unless an equal one is present, returning whether it was added
    pub fn insert(&mut self, combo: Combo<T>) -> bool {
        if self.contains(&combo) {
            return false;
        }
        self.combos.push(combo);
        true
    }

    /// Number of combos
    pub fn len(&self) -> usize {
        self.combos.len()
    }

    /// Test for an empty collection
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// Iterate over combos in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Combo<T>> {
        self.combos.iter()
    }

    /// Smallest and largest cardinality present, if any
    pub fn cardinality_range(&self) -> Option<(usize, usize)> {
        self.combos.iter().map(Combo::len).fold(None, |range, len| match range {
            None => Some((len, len)),
            Some((low, high)) => Some((low.min(len), high.max(len))),
        })
    }

    /// Consume the collection, returning its combos
    pub fn into_vec(self) -> Vec<Combo<T>> {
        self.combos
    }
}

impl<T: Coordinate> Extend<Combo<T>> for ComboCollection<T> {
    fn extend<I: IntoIterator<Item = Combo<T>>>(&mut self, iter: I) {
        for combo in iter {
            self.insert(combo);
        }
    }
}

impl<T: Coordinate> FromIterator<Combo<T>> for ComboCollection<T> {
    fn from_iter<I: IntoIterator<Item = Combo<T>>>(iter: I) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<T: Coordinate> IntoIterator for ComboCollection<T> {
    type Item = Combo<T>;
    type IntoIter = std::vec::IntoIter<Combo<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.combos.into_iter()
    }
}

impl<'a, T: Coordinate> IntoIterator for &'a ComboCollection<T> {
    type Item = &'a Combo<T>;
    type IntoIter = std::slice::Iter<'a, Combo<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
