use petgraph::graphmap::UnGraphMap;

use crate::board::Board;
use crate::location::Location;
use crate::shape::SquareStep;

impl Board {
    /// Express the board as an undirected graph of the moves a signal could make.
    ///
    /// Every tile which is not an obstacle is a vertex, and every two grid-adjacent vertices share an edge.
    /// Each edge carries the direction from its lower indexed endpoint, which is always one of [`SquareStep::FORWARD_VARIANTS`].
    ///
    /// [`Router`](crate::Router) succeeds exactly when some target shares the source's connected component.
    /// That does not hold target by target: a component may run through one target to reach another, which the router never does.
    pub fn signal_graph(&self) -> UnGraphMap<Location, SquareStep> {
        let mut graph = UnGraphMap::with_capacity(
            self.tiles.len(),
            // "vertical" edges
            (self.rows() - 1) * self.cols()
                // "horizontal" edges
                + (self.cols() - 1) * self.rows(),
        );

        for (index, tile) in self.tiles.indexed_iter() {
            if tile.is_obstacle() {
                continue;
            }

            let location = Location::from(index);
            graph.add_node(location);

            // add edges down and to the right, if possible
            for direction in SquareStep::FORWARD_VARIANTS {
                let neighbor_location = direction.attempt_from(location);
                let Some(neighbor) = self.get(neighbor_location) else {
                    continue;
                };

                if neighbor.is_obstacle() {
                    continue;
                }

                graph.add_edge(location, neighbor_location, *direction);
            }
        }

        graph
    }
}
