//! Assembling [`Board`]s tile by tile.

use std::num::NonZero;
use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::location::{Dimension, Location};
use crate::shape::SquareStep;
use crate::tile::Tile;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A tile was placed outside the bounds specified by `dims` on a builder.
    FeatureOutOfBounds,
}

/// A builder for circuit boards, starting from a board of [`Tile::Empty`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct BoardBuilder {
    // rows, cols
    dims: (Dimension, Dimension),
    tiles: Array2<Tile>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_dims((NonZero::new(4).unwrap(), NonZero::new(4).unwrap()))
    }
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(rows, cols)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            tiles: Array2::from_shape_simple_fn((dims.0.get(), dims.1.get()), Tile::default),
            invalid_reasons: Default::default(),
        }
    }

    #[inline]
    fn in_bounds(&self, location: Location) -> bool {
        location.row() < self.dims.0.get() && location.col() < self.dims.1.get()
    }

    /// Place `tile` at `location`, replacing whatever was there.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn set(&mut self, location: Location, tile: Tile) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.tiles.index_mut(location.as_index()).assign_elem(tile);
        self
    }

    /// Shorthand for [`Self::set`] with [`Tile::Source`].
    pub fn add_source(&mut self, location: Location) -> &mut Self {
        self.set(location, Tile::Source)
    }

    /// Shorthand for [`Self::set`] with [`Tile::Target`].
    pub fn add_target(&mut self, location: Location) -> &mut Self {
        self.set(location, Tile::Target)
    }

    /// Lay a straight run of `length` [`Tile::Wire`]s starting at `start` and heading in `direction`.
    ///
    /// The whole run is checked before anything is placed, so a run leaving the board places nothing and causes a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds) invalid state.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_wire(&mut self, start: Location, direction: SquareStep, length: usize) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let run = std::iter::successors(Some(start), |here| Some(direction.attempt_from(*here)))
            .take(length)
            .collect_vec();

        if !run.iter().all(|location| self.in_bounds(*location)) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        for location in run {
            self.tiles.index_mut(location.as_index()).assign_elem(Tile::Wire);
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            tiles: self.tiles.clone(),
            dims: self.dims,
        })
    }
}
