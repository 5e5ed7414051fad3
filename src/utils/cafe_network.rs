use std::collections::HashMap;

use petgraph::algo::astar;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::{debug, trace};

use crate::error::{MapError, RouteError};
use crate::models::{Cafe, CafeId, Distance, Leg};

/// Café network graph structure
///
/// An undirected graph whose nodes are cafés and whose edge weights are road
/// distances. At most one road joins a pair of cafés and every distance is
/// finite and non-negative, so single-pair shortest paths are well defined.
/// The network is assembled once and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct CafeNetwork {
    title: Option<String>,
    graph: UnGraph<Cafe, Distance>,
    index: HashMap<CafeId, NodeIndex>, // Café ID -> node index
}

impl CafeNetwork {
    /// Create an empty café network
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from cafés and `(from, to, distance)` roads
    pub fn from_parts<I, R, S>(cafes: I, roads: R) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = Cafe>,
        R: IntoIterator<Item = (S, S, Distance)>,
        S: AsRef<str>,
    {
        let mut network = Self::new();
        for cafe in cafes {
            network.add_cafe(cafe)?;
        }
        for (from, to, distance) in roads {
            network.add_road(from.as_ref(), to.as_ref(), distance)?;
        }
        Ok(network)
    }

    /// Set a human readable title for the map
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Add a café; identifiers must be unique
    pub fn add_cafe(&mut self, cafe: Cafe) -> Result<(), MapError> {
        if self.index.contains_key(&cafe.id) {
            return Err(MapError::DuplicateCafe(cafe.id));
        }
        let id = cafe.id.clone();
        let node = self.graph.add_node(cafe);
        self.index.insert(id, node);
        Ok(())
    }

    /// Add an undirected road between two known cafés
    pub fn add_road(&mut self, from: &str, to: &str, distance: Distance) -> Result<(), MapError> {
        let a = *self
            .index
            .get(from)
            .ok_or_else(|| MapError::UnknownCafe(from.to_string()))?;
        let b = *self
            .index
            .get(to)
            .ok_or_else(|| MapError::UnknownCafe(to.to_string()))?;

        if a == b {
            return Err(MapError::SelfLoop(from.to_string()));
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(MapError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                distance,
            });
        }
        if self.graph.find_edge(a, b).is_some() {
            return Err(MapError::DuplicateRoad {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.graph.add_edge(a, b, distance);
        Ok(())
    }

    /// Number of cafés
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks whether a café with this identifier exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a café by identifier
    pub fn cafe(&self, id: &str) -> Option<&Cafe> {
        self.index.get(id).map(|&node| &self.graph[node])
    }

    /// Display name of a café, falling back to the given identifier
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.cafe(id).map(Cafe::display_name).unwrap_or(id)
    }

    /// All cafés in insertion order
    pub fn cafes(&self) -> impl Iterator<Item = &Cafe> + '_ {
        self.graph.node_indices().map(move |node| &self.graph[node])
    }

    /// All roads as `(from, to, distance)` in insertion order
    pub fn roads(&self) -> impl Iterator<Item = (&str, &str, Distance)> + '_ {
        self.graph.edge_references().map(move |edge| {
            (
                self.graph[edge.source()].id.as_str(),
                self.graph[edge.target()].id.as_str(),
                *edge.weight(),
            )
        })
    }

    /// Distance of the direct road between two cafés, if there is one
    pub fn road_distance(&self, a: &str, b: &str) -> Option<Distance> {
        let a = *self.index.get(a)?;
        let b = *self.index.get(b)?;
        self.graph.find_edge(a, b).map(|edge| self.graph[edge])
    }

    pub(crate) fn require(&self, id: &str) -> Result<NodeIndex, RouteError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| RouteError::UnknownNode(id.to_string()))
    }

    /// Single-pair shortest path and its length
    ///
    /// Delegates to A* with a zero heuristic, which degenerates to Dijkstra.
    /// Among several paths of equal length the first one to reach a café is
    /// kept, since a tentative distance is only replaced by a strictly
    /// smaller one. A café to itself is `[id]` with length zero.
    pub fn shortest_path(
        &self,
        from: &str,
        to: &str,
    ) -> Result<(Vec<CafeId>, Distance), RouteError> {
        let source = self.require(from)?;
        let target = self.require(to)?;

        let (distance, nodes) = astar(
            &self.graph,
            source,
            |node| node == target,
            |edge| *edge.weight(),
            |_| 0.0,
        )
        .ok_or_else(|| RouteError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        })?;

        let path: Vec<CafeId> = nodes
            .into_iter()
            .map(|node| self.graph[node].id.clone())
            .collect();
        trace!(from, to, distance, ?path, "shortest path");
        Ok((path, distance))
    }

    /// Shortest path distance between two cafés
    pub fn shortest_path_length(&self, from: &str, to: &str) -> Result<Distance, RouteError> {
        self.shortest_path(from, to).map(|(_, distance)| distance)
    }

    /// Roads travelled by an explicit sequence of cafés
    ///
    /// Every consecutive pair must be joined by a direct road.
    pub fn legs<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<Leg>, RouteError> {
        path.windows(2)
            .map(|pair| -> Result<Leg, RouteError> {
                let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
                self.require(from)?;
                self.require(to)?;
                let distance =
                    self.road_distance(from, to)
                        .ok_or_else(|| RouteError::NotAdjacent {
                            from: from.to_string(),
                            to: to.to_string(),
                        })?;
                Ok(Leg {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance,
                })
            })
            .collect()
    }

    /// Total road distance of an explicit sequence of cafés
    pub fn path_weight<S: AsRef<str>>(&self, path: &[S]) -> Result<Distance, RouteError> {
        if let Some(first) = path.first() {
            self.require(first.as_ref())?;
        }
        Ok(self.legs(path)?.iter().map(|leg| leg.distance).sum())
    }

    /// The `max_results` cafés closest to `id` by direct road
    ///
    /// Sorted by distance; equal distances keep road insertion order.
    pub fn nearby(
        &self,
        id: &str,
        max_results: usize,
    ) -> Result<Vec<(CafeId, Distance)>, RouteError> {
        let node = self.require(id)?;

        let mut neighbors: Vec<_> = self
            .graph
            .edges(node)
            .map(|edge| {
                let other = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id().index(), other, *edge.weight())
            })
            .collect();
        neighbors.sort_by(|a, b| a.2.total_cmp(&b.2).then(a.0.cmp(&b.0)));

        let nearby: Vec<(CafeId, Distance)> = neighbors
            .into_iter()
            .take(max_results)
            .map(|(_, other, distance)| (self.graph[other].id.clone(), distance))
            .collect();
        debug!(cafe = id, ?nearby, "nearby cafés");
        Ok(nearby)
    }
}
