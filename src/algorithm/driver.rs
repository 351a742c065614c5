//! Fixed-point driver turning a tile cluster into its requested decompositions
//!
//! Each round applies [`combine`] to every active grouping. Groupings smaller
//! than the largest grouping of the previous round are carried into the next
//! round, because the largest ones have nothing left to offer that the
//! smaller ones do not already cover. The loop stops once a round produces a
//! single cardinality, carries nothing, or shrinks nothing.

use crate::algorithm::combiner::combine;
use crate::algorithm::combo::{Combo, ComboCollection};
use crate::algorithm::selection::{AreaOrdering, select_bounded};
use crate::io::configuration::DEFAULT_MAX_CLUSTER_SIZE;
use crate::io::error::{Result, TilingError};
use crate::spatial::contiguity::{connected_components, is_contiguous};
use crate::spatial::rectangle::{Coordinate, Rectangle};
use num_traits::Zero;

/// Named cluster of original tiles
#[derive(Clone, Debug)]
pub struct Shape<T: Coordinate> {
    /// Shape identifier as read from the input
    pub id: String,
    /// Original tiles in input order
    pub tiles: Vec<Rectangle<T>>,
}

impl<T: Coordinate> Shape<T> {
    /// Create a shape from its identifier and tiles
    pub fn new(id: impl Into<String>, tiles: Vec<Rectangle<T>>) -> Self {
        Self {
            id: id.into(),
            tiles,
        }
    }

    /// Number of original tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test for a shape without tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Exact area covered by the original tiles
    pub fn total_area(&self) -> T {
        self.tiles
            .iter()
            .fold(<T as Zero>::zero(), |total, tile| total + tile.area())
    }

    /// Test whether the tiles form one edge-connected cluster
    pub fn is_contiguous(&self) -> bool {
        is_contiguous(&self.tiles)
    }
}

/// Requested number of rectangles per decomposition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetCardinality {
    /// Return the minimal-cardinality groupings
    #[default]
    Unbounded,
    /// Return subsets of exactly this many rectangles when the minimum is larger
    Exactly(usize),
}

impl TargetCardinality {
    /// Map an optional count onto a target, `None` meaning unbounded
    pub const fn from_option(count: Option<usize>) -> Self {
        match count {
            Some(count) => Self::Exactly(count),
            None => Self::Unbounded,
        }
    }

    /// Test whether groupings of `minimal` rectangles already satisfy the target
    pub const fn is_satisfied_by(self, minimal: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Exactly(count) => count >= minimal,
        }
    }
}

/// Statistics of one fixed-point round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    /// Round number, starting at 1
    pub round: usize,
    /// Distinct groupings produced by the combiner this round
    pub produced: usize,
    /// Groupings carried into the next round
    pub carried: usize,
    /// Smallest cardinality among carried groupings
    pub min_cardinality: usize,
    /// Largest cardinality among carried groupings
    pub max_cardinality: usize,
}

/// Result of the fixed-point iteration
#[derive(Clone, Debug)]
pub struct MinimalGroupings<T: Coordinate> {
    /// Smallest rectangle count reached
    pub cardinality: usize,
    /// Every distinct grouping with that count
    pub combos: ComboCollection<T>,
    /// Per-round statistics, in order
    pub rounds: Vec<RoundSummary>,
}

/// Iterate the combiner to a fixed point and collect the smallest groupings
///
/// Starting from the unmerged tiles, each round combines every active
/// grouping, carries the groupings smaller than the previous round's largest,
/// and records groupings at the smallest cardinality seen so far. Stops when
/// only one grouping exists, when the carried groupings all share one
/// cardinality, when nothing is carried, or when nothing was dropped.
///
/// The tiles are expected to be contiguous; this is not checked here. The
/// stop rule can fire early for some tile orders: a row of three cells listed
/// middle first stops at two rectangles.
pub fn minimal_groupings<T: Coordinate>(tiles: &[Rectangle<T>]) -> MinimalGroupings<T> {
    let original = Combo::new(tiles.to_vec());
    let mut cardinality = original.len();
    let mut minimal: ComboCollection<T> = std::iter::once(original.clone()).collect();
    let mut active: ComboCollection<T> = std::iter::once(original).collect();
    let mut previous_max = tiles.len();
    let mut rounds = Vec::new();

    loop {
        let mut produced = ComboCollection::new();
        for grouping in &active {
            produced.extend(combine(grouping.members()));
        }

        if produced.len() <= 1 {
            let produced_count = produced.len();
            if let Some(only) = produced.into_iter().next() {
                cardinality = only.len();
                minimal = std::iter::once(only).collect();
            }
            rounds.push(RoundSummary {
                round: rounds.len() + 1,
                produced: produced_count,
                carried: 0,
                min_cardinality: cardinality,
                max_cardinality: cardinality,
            });
            break;
        }

        let carried: ComboCollection<T> = produced
            .iter()
            .filter(|grouping| grouping.len() < previous_max)
            .cloned()
            .collect();

        let Some((round_min, round_max)) = carried.cardinality_range() else {
            rounds.push(RoundSummary {
                round: rounds.len() + 1,
                produced: produced.len(),
                carried: 0,
                min_cardinality: previous_max,
                max_cardinality: previous_max,
            });
            break;
        };

        let summary = RoundSummary {
            round: rounds.len() + 1,
            produced: produced.len(),
            carried: carried.len(),
            min_cardinality: round_min,
            max_cardinality: round_max,
        };
        log::debug!(
            "Round {}: {} groupings produced, {} carried ({}..={} rectangles)",
            summary.round,
            summary.produced,
            summary.carried,
            round_min,
            round_max
        );
        rounds.push(summary);

        if round_min < cardinality {
            cardinality = round_min;
            minimal = ComboCollection::new();
        }
        minimal.extend(
            carried
                .iter()
                .filter(|grouping| grouping.len() == cardinality)
                .cloned(),
        );

        if round_min == round_max || carried.len() == produced.len() {
            break;
        }

        previous_max = round_max;
        active = carried;
    }

    MinimalGroupings {
        cardinality,
        combos: minimal,
        rounds,
    }
}

/// Runtime choices for a decomposition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecompositionConfig {
    /// Requested rectangle count
    pub target: TargetCardinality,
    /// Largest shape decomposed; larger shapes are rejected
    pub max_cluster_size: usize,
    /// Area ranking policy for bounded selection
    pub area_ordering: AreaOrdering,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            target: TargetCardinality::Unbounded,
            max_cluster_size: DEFAULT_MAX_CLUSTER_SIZE,
            area_ordering: AreaOrdering::Descending,
        }
    }
}

/// Decompositions chosen for one shape
#[derive(Clone, Debug)]
pub struct Decomposition<T: Coordinate> {
    /// Identifier of the decomposed shape
    pub shape_id: String,
    /// Smallest rectangle count that re-tiles the whole shape
    pub minimal_cardinality: usize,
    /// Number of fixed-point rounds run
    pub rounds: usize,
    /// Area covered by each returned combo when a bounded target applied
    pub selected_area: Option<T>,
    /// Returned combos, pairwise distinct
    pub combos: ComboCollection<T>,
}

/// Decompose a shape according to `config`
///
/// # Errors
///
/// Returns an error if:
/// - The shape has more tiles than `config.max_cluster_size`
/// - The shape's tiles are not edge-connected
pub fn decompose<T: Coordinate>(
    shape: &Shape<T>,
    config: &DecompositionConfig,
) -> Result<Decomposition<T>> {
    if shape.len() > config.max_cluster_size {
        return Err(TilingError::ClusterTooLarge {
            shape_id: shape.id.clone(),
            tiles: shape.len(),
            limit: config.max_cluster_size,
        });
    }

    if !shape.is_contiguous() {
        return Err(TilingError::NonContiguousShape {
            shape_id: shape.id.clone(),
            tiles: shape.len(),
            components: connected_components(&shape.tiles).len(),
        });
    }

    let groupings = minimal_groupings(&shape.tiles);
    log::info!(
        "Shape {} has {} combinations with {} tiles",
        shape.id,
        groupings.combos.len(),
        groupings.cardinality
    );

    let (selected_area, combos) = match config.target {
        TargetCardinality::Exactly(desired) if !config.target.is_satisfied_by(groupings.cardinality) => {
            let selection = select_bounded(&groupings.combos, desired, config.area_ordering);
            log::info!(
                "Shape {} has {} combinations with {} tiles (maximal coverage of {} cells)",
                shape.id,
                selection.combos.len(),
                desired,
                selection.area
            );
            (Some(selection.area), selection.combos)
        }
        _ => (None, groupings.combos),
    };

    Ok(Decomposition {
        shape_id: shape.id.clone(),
        minimal_cardinality: groupings.cardinality,
        rounds: groupings.rounds.len(),
        selected_area,
        combos,
    })
}

/// Decompose a shape for a target cardinality with default limits
///
/// # Errors
///
/// Returns an error if the shape is not contiguous or exceeds the default
/// cluster-size limit.
pub fn process<T: Coordinate>(
    shape: &Shape<T>,
    target: TargetCardinality,
) -> Result<ComboCollection<T>> {
    let config = DecompositionConfig {
        target,
        ..DecompositionConfig::default()
    };
    decompose(shape, &config).map(|decomposition| decomposition.combos)
}
