use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

use strum::VariantArray;

use crate::board::Board;
use crate::location::Location;
use crate::shape::SquareStep;
use crate::tile::Tile;

/// How a [`Router`] walks the board. Every strategy gives the same answer on every board.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, VariantArray)]
pub enum RouteStrategy {
    /// Depth-first search by plain recursion. Call stack depth grows with the length of the current path.
    #[default]
    Recursive,
    /// The same search driven by an explicit stack, for boards too large to recurse over.
    Iterative,
}

/// What the search finds upon stepping onto a location.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Probe {
    OffBoard,
    Target,
    Obstacle,
    OnPath,
    Open,
}

impl Probe {
    /// Whether the search should give up on this location without exploring it.
    fn is_dead_end(&self) -> bool {
        matches!(self, Self::OffBoard | Self::Obstacle | Self::OnPath)
    }
}

/// Marks a location as part of the current path for as long as it lives.
struct Visit<'v> {
    visited: &'v mut HashSet<Location>,
    location: Location,
}

impl<'v> Visit<'v> {
    fn enter(visited: &'v mut HashSet<Location>, location: Location) -> Self {
        visited.insert(location);
        Self { visited, location }
    }
}

impl Drop for Visit<'_> {
    fn drop(&mut self) {
        self.visited.remove(&self.location);
    }
}

impl Deref for Visit<'_> {
    type Target = HashSet<Location>;

    fn deref(&self) -> &Self::Target {
        self.visited
    }
}

impl DerefMut for Visit<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.visited
    }
}

/// Answers whether a signal leaving the [`Source`](Tile::Source) of a [`Board`] can reach any [`Target`](Tile::Target).
///
/// A signal moves between grid-adjacent tiles, passing through wires, splitters and the source itself, and stops at the first target it touches.
/// The search is exhaustive over simple paths, which makes it exponential in the worst case; boards are expected to be small.
pub struct Router {
    board: Board,
    strategy: RouteStrategy,
}

impl From<Board> for Router {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

impl Router {
    /// Take ownership of `board`, searching with the default [`RouteStrategy`].
    pub fn new(board: Board) -> Self {
        Self::with_strategy(board, RouteStrategy::default())
    }

    /// Take ownership of `board`, searching with `strategy`.
    pub fn with_strategy(board: Board, strategy: RouteStrategy) -> Self {
        Self { board, strategy }
    }

    /// The board being routed over.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The strategy used by [`Self::can_route_signal`].
    pub fn strategy(&self) -> RouteStrategy {
        self.strategy
    }

    /// Whether the signal can reach a target.
    ///
    /// The search starts from the first [`Source`](Tile::Source) in row-major order; any other sources are ignored.
    /// A board without a source can't route anything and yields `false`.
    pub fn can_route_signal(&self) -> bool {
        let Some(source) = self.board.find_tile(Tile::Source) else {
            log::debug!("no source on a {:?} board, nothing to route", self.board.dims());
            return false;
        };

        let routed = match self.strategy {
            RouteStrategy::Recursive => self.route_from(source, &mut HashSet::new()),
            RouteStrategy::Iterative => self.route_iteratively(source),
        };

        log::debug!("signal from {:?} {} a target ({:?} search)", source, if routed { "reaches" } else { "cannot reach" }, self.strategy);
        routed
    }

    fn probe(&self, location: Location, visited: &HashSet<Location>) -> Probe {
        match self.board.get(location) {
            None => Probe::OffBoard,
            Some(Tile::Target) => Probe::Target,
            Some(tile) if tile.is_obstacle() => Probe::Obstacle,
            Some(_) if visited.contains(&location) => Probe::OnPath,
            Some(_) => Probe::Open,
        }
    }

    /// Whether a target is reachable from `location` without revisiting any location already on the path in `visited`.
    ///
    /// `visited` holds exactly the same locations on return as it did on entry.
    fn route_from(&self, location: Location, visited: &mut HashSet<Location>) -> bool {
        match self.probe(location, visited) {
            Probe::Target => true,
            probe if probe.is_dead_end() => false,
            _ => {
                log::trace!("exploring {:?} at path length {}", location, visited.len());

                let mut visit = Visit::enter(visited, location);
                SquareStep::SEARCH_ORDER.iter()
                    .any(|step| self.route_from(step.attempt_from(location), &mut visit))
            }
        }
    }

    /// [`Self::route_from`] with the call stack made explicit.
    ///
    /// Each frame holds a location on the current path and the index of the next step to try from it.
    fn route_iteratively(&self, origin: Location) -> bool {
        let mut visited = HashSet::new();

        match self.probe(origin, &visited) {
            Probe::Target => return true,
            probe if probe.is_dead_end() => return false,
            _ => {}
        }

        visited.insert(origin);
        let mut stack = vec![(origin, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let here = frame.0;
            let Some(step) = SquareStep::SEARCH_ORDER.get(frame.1) else {
                // every direction tried; backtrack
                visited.remove(&here);
                stack.pop();
                continue;
            };
            frame.1 += 1;

            let next = step.attempt_from(here);
            match self.probe(next, &visited) {
                Probe::Target => return true,
                probe if probe.is_dead_end() => {}
                _ => {
                    log::trace!("exploring {:?} at path length {}", next, visited.len());

                    visited.insert(next);
                    stack.push((next, 0));
                }
            }
        }

        false
    }
}
