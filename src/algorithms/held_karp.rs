use tracing::debug;

use super::legs::LegTable;
use super::{validate_query, RouteSolver};
use crate::error::RouteError;
use crate::models::{Distance, Route};
use crate::utils::cafe_network::CafeNetwork;

/// Largest destination count accepted by [`HeldKarp`]
pub const MAX_DESTINATIONS: usize = 16;

/// Bitmask dynamic programming over destination subsets
///
/// Same contract as [`super::BruteForce`] in O(2^k·k²) time and O(2^k·k)
/// memory. Ties resolve to the lexicographically first optimal order, which
/// is the order brute force keeps. Totals are summed right to left during
/// the search, so with non-integral distances two orders whose totals differ
/// only by rounding may be ranked differently than by brute force.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKarp;

impl RouteSolver for HeldKarp {
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

        let n = destinations.len();
        let mut legs = LegTable::new(network);

        // Walking the input order first surfaces the same missing path that
        // an exhaustive search would hit first. Once it succeeds, every
        // required café is in one component and all pairs below are reachable.
        let input_order: Vec<usize> = (0..n).collect();
        let fallback = legs.walk(start, destinations, &input_order)?;
        if n == 1 {
            return Ok(fallback);
        }

        let mut from_start = Vec::with_capacity(n);
        for destination in destinations {
            from_start.push(legs.distance(start, destination.as_ref())?);
        }
        let mut between = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in 0..n {
                between[i][j] = legs.distance(destinations[i].as_ref(), destinations[j].as_ref())?;
            }
        }

        // remaining[mask * n + i]: cheapest way to visit every position not
        // in `mask`, standing at position `i` (which is in `mask`)
        let full = (1usize << n) - 1;
        let mut remaining: Vec<Distance> = vec![f64::INFINITY; (full + 1) * n];
        for i in 0..n {
            remaining[full * n + i] = 0.0;
        }
        for mask in (1..full).rev() {
            for i in (0..n).filter(|&i| mask & (1 << i) != 0) {
                let mut best = f64::INFINITY;
                for j in (0..n).filter(|&j| mask & (1 << j) == 0) {
                    let candidate = between[i][j] + remaining[(mask | 1 << j) * n + j];
                    if candidate < best {
                        best = candidate;
                    }
                }
                remaining[mask * n + i] = best;
            }
        }

        // Greedy reconstruction: the smallest position reaching the optimum
        // at every step gives the lexicographically first optimal order
        let mut order = Vec::with_capacity(n);
        let mut mask = 0usize;
        let mut current: Option<usize> = None;
        while mask != full {
            let mut chosen: Option<(usize, Distance)> = None;
            for j in (0..n).filter(|&j| mask & (1 << j) == 0) {
                let step = match current {
                    Some(i) => between[i][j],
                    None => from_start[j],
                };
                let candidate = step + remaining[(mask | 1 << j) * n + j];
                if chosen.map_or(true, |(_, best)| candidate < best) {
                    chosen = Some((j, candidate));
                }
            }
            let Some((next, _)) = chosen else {
                return Ok(fallback);
            };
            order.push(next);
            mask |= 1 << next;
            current = Some(next);
        }

        let route = legs.walk(start, destinations, &order)?;
        debug!(?order, total = route.total_distance, "held-karp order");
        Ok(route)
    }
}
