use std::fmt::{Display, Formatter};
use std::num::NonZero;
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;

use crate::error::BoardError;
use crate::location::{Dimension, Location};
use crate::tile::Tile;

/// A fixed rectangular board of [`Tile`]s, stored row-major.
///
/// [`Board`]s are built from rows with [`Board::from_rows`], parsed from text with [`str::parse`], or assembled with a [`BoardBuilder`](crate::builder::BoardBuilder).
/// Once built, a board never changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub(crate) tiles: Array2<Tile>,
    // rows, cols
    pub(crate) dims: (Dimension, Dimension),
}

impl Board {
    /// Build a board from row-major `rows`, the first of which fixes the width.
    ///
    /// Fails with [`BoardError::Empty`] if there is nothing to build and with [`BoardError::Ragged`] if any row is a different length from the first.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, BoardError> {
        let width = rows.first()
            .and_then(|first| NonZero::new(first.len()))
            .ok_or(BoardError::Empty)?;
        // a non-empty first row guarantees a non-zero height
        let height = NonZero::new(rows.len()).ok_or(BoardError::Empty)?;

        if let Some((row, found)) = rows.iter().map(Vec::len).find_position(|len| *len != width.get()) {
            return Err(BoardError::Ragged { row, expected: width.get(), found });
        }

        let tiles = Array2::from_shape_fn((height.get(), width.get()), |(row, col)| rows[row][col]);

        Ok(Self { tiles, dims: (height, width) })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.dims.1.get()
    }

    /// `(rows, cols)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Whether `location` lies on this board.
    pub fn contains(&self, location: Location) -> bool {
        location.row() < self.rows() && location.col() < self.cols()
    }

    /// The tile at `location`, or [`None`] if it is off the board.
    pub fn get(&self, location: Location) -> Option<Tile> {
        self.tiles.get(location.as_index()).copied()
    }

    /// Find the first location holding `tile`, scanning row by row from the top left.
    pub fn find_tile(&self, tile: Tile) -> Option<Location> {
        self.locations_of(tile).next()
    }

    /// Every location holding `tile`, in the same order as [`Self::find_tile`] scans.
    pub fn locations_of(&self, tile: Tile) -> impl Iterator<Item = Location> + '_ {
        self.tiles.indexed_iter()
            .filter(move |(_, here)| **here == tile)
            .map(|(index, _)| Location::from(index))
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// One row per non-blank line; whitespace inside a line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| line.chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(col, glyph)| Tile::try_from(glyph)
                    .map_err(|glyph| BoardError::UnknownGlyph { glyph, row, col }))
                .collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));

        for row in self.tiles.rows() {
            for tile in row {
                out.push(tile.glyph());
            }
            out.push('\n');
        }

        write!(f, "{}", out)
    }
}
