pub mod brute_force;
pub mod held_karp;
mod legs;

pub use self::brute_force::BruteForce;
pub use self::held_karp::HeldKarp;

use tracing::debug;

use crate::error::RouteError;
use crate::models::Route;
use crate::utils::cafe_network::CafeNetwork;

/// Trait for multi-destination route solvers
///
/// Every implementation answers the same query: starting at `start`, visit
/// each entry of `destinations` (duplicates included) in whichever order
/// minimises the total distance. Among equally short orders the one that
/// comes first in lexicographic order of destination positions wins.
pub trait RouteSolver {
    /// Largest number of destinations this solver accepts
    fn max_destinations(&self) -> usize;

    /// Find the shortest route visiting every destination
    fn solve<S: AsRef<str>>(
        &self,
        network: &CafeNetwork,
        start: &str,
        destinations: &[S],
    ) -> Result<Route, RouteError>;
}

/// Find the shortest route from `start` through all `destinations`
///
/// Uses exhaustive permutation search; see [`BruteForce`].
pub fn find_best_route<S: AsRef<str>>(
    network: &CafeNetwork,
    start: &str,
    destinations: &[S],
) -> Result<Route, RouteError> {
    BruteForce.solve(network, start, destinations)
}

/// Check a query before any path is computed
///
/// Reports the first unknown café, start first and then destinations in
/// input order, then checks the count against the solver's ceiling.
pub(crate) fn validate_query<V: RouteSolver, S: AsRef<str>>(
    solver: &V,
    network: &CafeNetwork,
    start: &str,
    destinations: &[S],
) -> Result<(), RouteError> {
    let max_destinations = solver.max_destinations();
    network.require(start)?;
    for destination in destinations {
        network.require(destination.as_ref())?;
    }

    if destinations.is_empty() {
        return Err(RouteError::NoDestinations);
    }
    if destinations.len() > max_destinations {
        return Err(RouteError::TooManyDestinations {
            count: destinations.len(),
            max: max_destinations,
        });
    }

    debug!(
        start,
        count = destinations.len(),
        "route query validated"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cafe;

    // Accepts any query that passes validation, trying nothing
    struct Capped(usize);

    impl RouteSolver for Capped {
        fn max_destinations(&self) -> usize {
            self.0
        }

        fn solve<S: AsRef<str>>(
            &self,
            network: &CafeNetwork,
            start: &str,
            destinations: &[S],
        ) -> Result<Route, RouteError> {
            validate_query(self, network, start, destinations)?;
            Ok(Route::new(vec![start.to_string()], 0.0))
        }
    }

    fn line_network() -> CafeNetwork {
        let cafes = ["A", "B", "C"].map(Cafe::new);
        CafeNetwork::from_parts(cafes, [("A", "B", 1.0), ("B", "C", 1.0)]).unwrap()
    }

    #[test]
    fn test_validate_reports_start_first() {
        let network = line_network();
        assert_eq!(
            validate_query(&Capped(8), &network, "X", &["Y"]),
            Err(RouteError::UnknownNode("X".into()))
        );
        assert_eq!(
            validate_query(&Capped(8), &network, "A", &["B", "Y", "Z"]),
            Err(RouteError::UnknownNode("Y".into()))
        );
    }

    #[test]
    fn test_validate_limits() {
        let network = line_network();
        let none: [&str; 0] = [];
        assert_eq!(
            validate_query(&Capped(8), &network, "A", &none),
            Err(RouteError::NoDestinations)
        );
        assert_eq!(
            Capped(2).solve(&network, "A", &["B", "C", "B"]),
            Err(RouteError::TooManyDestinations { count: 3, max: 2 })
        );
        assert_eq!(
            HeldKarp.solve(&network, "A", &["B"; 17]),
            Err(RouteError::TooManyDestinations {
                count: 17,
                max: HeldKarp.max_destinations()
            })
        );
        assert!(Capped(1).solve(&network, "A", &["C"]).is_ok());
    }
}
