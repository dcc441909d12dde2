use thiserror::Error;

/// Reasons a [`Board`](crate::Board) could not be constructed from rows or text.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum BoardError {
    /// There were no rows, or the first row had no columns.
    #[error("a board needs at least one row and one column")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} tiles but the board is {expected} wide")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A text board contained a character no tile uses.
    #[error("unknown tile {glyph:?} at row {row}, column {col}")]
    UnknownGlyph {
        /// The unrecognized character.
        glyph: char,
        /// Row of the character, counting only non-blank lines.
        row: usize,
        /// Column of the character, counting only non-whitespace characters.
        col: usize,
    },
}
