use tracing::{debug, trace};

use super::legs::LegTable;
use super::{validate_query, RouteSolver};
use crate::error::RouteError;
use crate::models::Route;
use crate::utils::cafe_network::CafeNetwork;

/// Largest destination count accepted by [`BruteForce`] (8! = 40 320 orders)
pub const MAX_DESTINATIONS: usize = 8;

/// Exhaustive permutation search
///
/// Tries every visiting order of the destinations, joining single-pair
/// shortest paths hop by hop, and keeps the first order whose total is
/// strictly smallest. Runs in O(k!) for k destinations, which is why the
/// destination count is capped at [`MAX_DESTINATIONS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl RouteSolver for BruteForce {
    fn max_destinations(&self) -> usize {
        MAX_DESTINATIONS
    }

    fn solve<S: AsRef<str>>(
        &self,
        network: &CafeNetwork,
        start: &str,
        destinations: &[S],
    ) -> Result<Route, RouteError> {
        validate_query(self, network, start, destinations)?;

        // A single destination is a plain shortest path query
        if let [destination] = destinations {
            let (stops, distance) = network.shortest_path(start, destination.as_ref())?;
            return Ok(Route::new(stops, distance));
        }

        let mut legs = LegTable::new(network);
        let mut best: Option<Route> = None;

        for order in generate_permutations((0..destinations.len()).collect()) {
            let route = legs.walk(start, destinations, &order)?;
            trace!(?order, total = route.total_distance, "evaluated order");

            let is_better = match &best {
                Some(current) => route.total_distance < current.total_distance,
                None => true,
            };
            if is_better {
                best = Some(route);
            }
        }

        let best = best.ok_or(RouteError::NoDestinations)?;
        debug!(stops = ?best.stops, total = best.total_distance, "best route found");
        Ok(best)
    }
}

/// Generate all permutations of a vector
///
/// Permutations come out in lexicographic order of the input positions.
pub fn generate_permutations<T: Clone>(items: Vec<T>) -> Vec<Vec<T>> {
    if items.is_empty() {
        return vec![vec![]];
    }

    let mut result = Vec::new();

    for (i, item) in items.iter().enumerate() {
        let mut remaining = items.clone();
        remaining.remove(i);

        for mut perm in generate_permutations(remaining) {
            perm.insert(0, item.clone());
            result.push(perm);
        }
    }

    result
}
