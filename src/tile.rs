use std::fmt::{Display, Formatter};

use strum::VariantArray;

/// The kind of a single board cell, deciding whether a signal may pass through it.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Tile {
    /// Nothing here; a signal cannot cross it.
    #[default]
    Empty,
    /// Carries a signal to any neighbor.
    Wire,
    /// Carries a signal exactly like a [`Wire`](Tile::Wire).
    Splitter,
    /// Stops a signal.
    Blocker,
    /// Where the signal starts.
    Source,
    /// Where the signal should end up. Reaching any target ends the search.
    Target,
}

impl Tile {
    /// Whether a signal is stopped by this tile.
    pub fn is_obstacle(&self) -> bool {
        matches!(self, Self::Empty | Self::Blocker)
    }

    /// Whether a signal may enter this tile and continue on to its neighbors.
    pub fn is_traversable(&self) -> bool {
        matches!(self, Self::Wire | Self::Splitter | Self::Source)
    }

    /// Whether entering this tile completes a route.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Target)
    }

    /// The character used for this tile in textual boards.
    pub fn glyph(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wire => '-',
            Self::Splitter => '*',
            Self::Blocker => '#',
            Self::Source => 'S',
            Self::Target => 'T',
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = char;

    /// Parse a glyph, handing the character back if no tile uses it.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::VARIANTS.iter()
            .find(|tile| tile.glyph() == value)
            .copied()
            .ok_or(value)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::Tile;

    #[test]
    fn traversal_partition() {
        // every tile is exactly one of obstacle, pass-through, or terminal
        for tile in Tile::VARIANTS {
            let roles = [tile.is_obstacle(), tile.is_traversable(), tile.is_terminal()];
            assert_eq!(roles.iter().filter(|r| **r).count(), 1, "{:?}", tile);
        }

        assert!(Tile::Splitter.is_traversable());
        assert!(Tile::Blocker.is_obstacle());
        assert!(!Tile::Target.is_traversable());
    }

    #[test]
    fn glyphs() {
        for tile in Tile::VARIANTS {
            assert_eq!(Tile::try_from(tile.glyph()), Ok(*tile));
        }

        assert_eq!(Tile::try_from('?'), Err('?'));
        assert_eq!(Tile::Splitter.to_string(), "*");
    }
}
