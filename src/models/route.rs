// Route models for representing café routes

use serde::Serialize;

use crate::models::{CafeId, Distance};

/// A complete route from the start café through every destination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Cafés in visiting order, starting at the start café
    pub stops: Vec<CafeId>,

    /// Sum of the road distances along `stops`
    pub total_distance: Distance,
}

impl Route {
    /// Creates a new route
    pub fn new(stops: Vec<CafeId>, total_distance: Distance) -> Self {
        Self {
            stops,
            total_distance,
        }
    }

    /// The café the route starts from
    pub fn start(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    /// The café the route ends at
    pub fn end(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }

    /// Consecutive pairs of stops, i.e. the roads travelled
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.stops
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Appends a sub-path whose first node is the current last stop
    pub(crate) fn extend_with(&mut self, sub_path: &[CafeId], distance: Distance) {
        self.stops.extend(sub_path.iter().skip(1).cloned());
        self.total_distance += distance;
    }
}

/// One road travelled by a route
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: CafeId,
    pub to: CafeId,
    pub distance: Distance,
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {} : ({} km)", self.from, self.to, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(ids: &[&str]) -> Vec<CafeId> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extend_skips_junction() {
        let mut route = Route::new(stops(&["A"]), 0.0);
        route.extend_with(&stops(&["A", "D", "C"]), 8.0);
        route.extend_with(&stops(&["C", "E"]), 5.0);

        assert_eq!(route.stops, stops(&["A", "D", "C", "E"]));
        assert_eq!(route.total_distance, 13.0);
    }

    #[test]
    fn test_zero_length_hop_adds_nothing() {
        let mut route = Route::new(stops(&["A"]), 0.0);
        route.extend_with(&stops(&["A"]), 0.0);

        assert_eq!(route.stops, stops(&["A"]));
        assert_eq!(route.total_distance, 0.0);
    }

    #[test]
    fn test_hops_and_ends() {
        let route = Route::new(stops(&["A", "D", "E"]), 10.0);
        assert_eq!(route.hops().collect::<Vec<_>>(), [("A", "D"), ("D", "E")]);
        assert_eq!(route.start(), Some("A"));
        assert_eq!(route.end(), Some("E"));
    }

    #[test]
    fn test_route_serializes_stops_and_total() {
        let route = Route::new(stops(&["A", "D", "E"]), 10.0);
        assert_eq!(
            serde_json::to_value(&route).unwrap(),
            serde_json::json!({ "stops": ["A", "D", "E"], "total_distance": 10.0 })
        );
    }

    #[test]
    fn test_leg_display() {
        let leg = Leg {
            from: "A".into(),
            to: "D".into(),
            distance: 2.0,
        };
        assert_eq!(leg.to_string(), "A → D : (2 km)");
    }
}
