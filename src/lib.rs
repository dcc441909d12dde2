#![warn(missing_docs)]

//! # `signal-router`
//!
//! Decide whether a signal can travel across a circuit board from its source tile to a target tile.
//! Begin by building a [`Board`], either from rows of [`Tile`]s with [`Board::from_rows`], by parsing text, or with a [`BoardBuilder`](builder::BoardBuilder).
//! Hand it to a [`Router`] and call [`can_route_signal()`](crate::Router::can_route_signal).
//!
//! Boards are written one row per line using these glyphs:
//!
//! | glyph | tile | signal |
//! |-------|------|--------|
//! | `.` | [`Empty`](Tile::Empty) | blocked |
//! | `-` | [`Wire`](Tile::Wire) | passes |
//! | `*` | [`Splitter`](Tile::Splitter) | passes |
//! | `#` | [`Blocker`](Tile::Blocker) | blocked |
//! | `S` | [`Source`](Tile::Source) | starts here |
//! | `T` | [`Target`](Tile::Target) | ends here |
//!
//! # Internals
//! The router runs a depth-first search from the source which backtracks over a set of locations on the current path.
//! A location joins the set when the search starts exploring from it and leaves it once every direction from it is exhausted, so a tile can be reached again by a different path.
//! This tries every simple path from the source, which is complete but exponential in the worst case.
//! The same search is available with an explicit stack via [`RouteStrategy::Iterative`] for boards too large to recurse over.
//!
//! For a connectivity view of the same rules, see [`Board::signal_graph`].

pub use board::Board;
pub use builder::BoardBuilder;
pub use error::BoardError;
pub use location::Location;
pub use router::{RouteStrategy, Router};
pub use shape::SquareStep;
pub use tile::Tile;

pub(crate) mod board;
pub mod builder;
pub(crate) mod error;
pub(crate) mod graph;
pub(crate) mod location;
pub(crate) mod router;
pub(crate) mod shape;
pub(crate) mod tile;
#[cfg(feature = "wasm")]
pub mod wasm;
