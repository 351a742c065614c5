//! Bounded subset selection over minimal groupings
//!
//! When fewer rectangles are requested than the minimal decomposition needs,
//! the best that can be offered is a contiguous subset of one minimal grouping
//! covering as much area as possible. The achievable maximum is bounded per
//! grouping by its `k` largest rectangles; only subsets reaching the global
//! maximum of that bound are returned.

use crate::algorithm::combo::{Combo, ComboCollection};
use crate::spatial::rectangle::{Coordinate, Rectangle};
use num_traits::Zero;
use std::cmp::Ordering;

/// Ordering used when ranking rectangles by area
///
/// Both policies sort by exact descending area and differ only in how equal
/// areas are ordered. The tie policy affects the emission order of selected
/// subsets, never which subsets are selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AreaOrdering {
    /// Equal areas keep their order within the grouping
    #[default]
    Descending,
    /// Equal areas are ordered by lower-left corner, then upper-right corner
    DescendingThenPosition,
}

impl AreaOrdering {
    /// Compare two rectangles, larger area first
    pub fn compare<T: Coordinate>(self, first: &Rectangle<T>, second: &Rectangle<T>) -> Ordering {
        let by_area = second.area().cmp(&first.area());
        match self {
            Self::Descending => by_area,
            Self::DescendingThenPosition => by_area
                .then_with(|| first.min().cmp(&second.min()))
                .then_with(|| first.max().cmp(&second.max())),
        }
    }

    /// Members of a combo sorted by this ordering
    pub fn sorted<T: Coordinate>(self, combo: &Combo<T>) -> Vec<Rectangle<T>> {
        let mut members = combo.members().to_vec();
        members.sort_by(|first, second| self.compare(first, second));
        members
    }
}

/// Area covered by the `desired` largest rectangles of a combo
///
/// Returns `None` when the combo has fewer than `desired` rectangles.
pub fn best_area_bound<T: Coordinate>(
    combo: &Combo<T>,
    desired: usize,
    ordering: AreaOrdering,
) -> Option<T> {
    if combo.len() < desired {
        return None;
    }
    Some(
        ordering
            .sorted(combo)
            .iter()
            .take(desired)
            .fold(<T as Zero>::zero(), |total, rectangle| total + rectangle.area()),
    )
}

/// Every contiguous `desired`-subset of `pool` covering exactly `target_area`
///
/// Subsets are generated in lexicographic order of positions in `pool`.
pub fn contiguous_subsets<T: Coordinate>(
    pool: &[Rectangle<T>],
    desired: usize,
    target_area: T,
) -> ComboCollection<T> {
    let mut found = ComboCollection::new();
    let mut chosen = Vec::with_capacity(desired);
    choose(pool, &mut chosen, 0, desired, target_area, &mut found);
    found
}

fn choose<T: Coordinate>(
    pool: &[Rectangle<T>],
    chosen: &mut Vec<usize>,
    start: usize,
    desired: usize,
    target_area: T,
    found: &mut ComboCollection<T>,
) {
    if chosen.len() == desired {
        let candidate = Combo::new(
            chosen
                .iter()
                .filter_map(|&index| pool.get(index).cloned())
                .collect(),
        );
        if candidate.total_area() == target_area
            && !found.contains(&candidate)
            && candidate.is_contiguous()
        {
            found.insert(candidate);
        }
        return;
    }

    let remaining = desired - chosen.len();
    if pool.len() < start + remaining {
        return;
    }
    // Later starting positions leave too few rectangles to complete the subset
    for index in start..=pool.len() - remaining {
        chosen.push(index);
        choose(pool, chosen, index + 1, desired, target_area, found);
        chosen.pop();
    }
}

/// Outcome of a bounded selection
#[derive(Clone, Debug)]
pub struct BoundedSelection<T: Coordinate> {
    /// Maximal area covered by any selected subset
    pub area: T,
    /// Selected subsets, pairwise distinct
    pub combos: ComboCollection<T>,
}

/// Select maximal-area contiguous subsets of size `desired`
///
/// The global bound is the best [`best_area_bound`] over all groupings. Every
/// grouping is then searched for contiguous subsets reaching that bound, and
/// results are merged in grouping order without duplicates. When the bound is
/// not reachable by any contiguous subset the collection is empty.
///
/// Groupings with fewer than `desired` rectangles contribute nothing. When
/// several groupings reach the bound, results appear in grouping order; that
/// order carries no meaning beyond reproducibility.
pub fn select_bounded<T: Coordinate>(
    minimal: &ComboCollection<T>,
    desired: usize,
    ordering: AreaOrdering,
) -> BoundedSelection<T> {
    let bound = minimal
        .iter()
        .filter_map(|combo| best_area_bound(combo, desired, ordering))
        .max();

    let Some(area) = bound else {
        return BoundedSelection {
            area: <T as Zero>::zero(),
            combos: ComboCollection::new(),
        };
    };

    let mut combos = ComboCollection::new();
    if desired == 0 {
        return BoundedSelection { area, combos };
    }

    for grouping in minimal {
        if best_area_bound(grouping, desired, ordering) != Some(area) {
            continue;
        }
        combos.extend(contiguous_subsets(&ordering.sorted(grouping), desired, area));
    }

    BoundedSelection { area, combos }
}
