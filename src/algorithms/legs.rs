use std::collections::HashMap;

use crate::error::RouteError;
use crate::models::{CafeId, Distance, Route};
use crate::utils::cafe_network::CafeNetwork;

/// Memoised single-pair shortest paths for one query
pub(crate) struct LegTable<'a> {
    network: &'a CafeNetwork,
    cache: HashMap<(String, String), (Vec<CafeId>, Distance)>,
}

impl<'a> LegTable<'a> {
    pub(crate) fn new(network: &'a CafeNetwork) -> Self {
        Self {
            network,
            cache: HashMap::new(),
        }
    }

    /// Shortest path from `from` to `to`, computed at most once per pair
    pub(crate) fn get(
        &mut self,
        from: &str,
        to: &str,
    ) -> Result<&(Vec<CafeId>, Distance), RouteError> {
        let key = (from.to_string(), to.to_string());
        if !self.cache.contains_key(&key) {
            let leg = self.network.shortest_path(from, to)?;
            self.cache.insert(key.clone(), leg);
        }
        Ok(&self.cache[&key])
    }

    /// Shortest path length only
    pub(crate) fn distance(&mut self, from: &str, to: &str) -> Result<Distance, RouteError> {
        self.get(from, to).map(|(_, distance)| *distance)
    }
}

impl LegTable<'_> {
    /// Walk `start → destinations[order[0]] → …`, joining shortest sub-paths
    ///
    /// The junction café shared by consecutive sub-paths appears once.
    pub(crate) fn walk<S: AsRef<str>>(
        &mut self,
        start: &str,
        destinations: &[S],
        order: &[usize],
    ) -> Result<Route, RouteError> {
        let mut route = Route::new(vec![start.to_string()], 0.0);
        let mut current = start;

        for &position in order {
            let next = destinations[position].as_ref();
            let (sub_path, distance) = self.get(current, next)?;
            route.extend_with(sub_path, *distance);
            current = next;
        }

        Ok(route)
    }
}
