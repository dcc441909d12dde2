use strum::VariantArray;

use crate::location::Location;

/// A step between two grid-adjacent cells of a rectangular board.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Towards the next row.
    South,
    /// Towards the next column.
    East,
    /// Towards the previous row.
    North,
    /// Towards the previous column.
    West,
}

impl SquareStep {
    /// The order in which the search tries neighbors.
    ///
    /// Only the shape of the search tree depends on it, never the answer, but it is kept fixed so traces are reproducible.
    pub const SEARCH_ORDER: &'static [Self] = &[Self::South, Self::East, Self::North, Self::West];

    /// Directions which, given the row-major ordering of the board, lead to a higher indexed cell.
    pub const FORWARD_VARIANTS: &'static [Self] = &[Self::South, Self::East];

    /// Attempt the step from `location` and return the resultant [`Location`], which may lie off the board.
    pub fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::South => location.offset_by((1, 0)),
            Self::East => location.offset_by((0, 1)),
            Self::North => location.offset_by((-1, 0)),
            Self::West => location.offset_by((0, -1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use crate::location::Location;
    use crate::shape::SquareStep;

    #[test]
    fn search_order_covers_every_step() {
        assert_eq!(SquareStep::SEARCH_ORDER.len(), SquareStep::VARIANTS.len());
        assert_eq!(SquareStep::SEARCH_ORDER, SquareStep::VARIANTS);
    }

    #[test]
    fn steps() {
        let here = Location(2, 5);
        assert_eq!(SquareStep::South.attempt_from(here), Location(3, 5));
        assert_eq!(SquareStep::East.attempt_from(here), Location(2, 6));
        assert_eq!(SquareStep::North.attempt_from(here), Location(1, 5));
        assert_eq!(SquareStep::West.attempt_from(here), Location(2, 4));
    }

    #[test]
    fn step_off_the_top_wraps() {
        let off = SquareStep::North.attempt_from(Location(0, 0));
        assert_eq!(off, Location(usize::MAX, 0));
    }
}
