// Error types for map construction and route queries

use thiserror::Error;

use crate::models::{CafeId, Distance};

/// Errors raised while answering a route query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The start or one of the destinations is not a café of the map.
    #[error("unknown café `{0}`")]
    UnknownNode(CafeId),

    /// The map has no path connecting two required cafés.
    #[error("no path from `{from}` to `{to}`")]
    NoPath { from: CafeId, to: CafeId },

    /// More destinations than the solver is willing to enumerate.
    #[error("{count} destinations requested, at most {max} are supported")]
    TooManyDestinations { count: usize, max: usize },

    /// The destination list was empty.
    #[error("at least one destination is required")]
    NoDestinations,

    /// Two consecutive cafés of an explicit path are not joined by a road.
    #[error("`{from}` and `{to}` are not directly connected")]
    NotAdjacent { from: CafeId, to: CafeId },
}

/// Errors raised while building a café network or loading a map file.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("café `{0}` is defined twice")]
    DuplicateCafe(CafeId),

    #[error("road references unknown café `{0}`")]
    UnknownCafe(CafeId),

    #[error("road between `{from}` and `{to}` is defined twice")]
    DuplicateRoad { from: CafeId, to: CafeId },

    #[error("road from `{0}` to itself")]
    SelfLoop(CafeId),

    /// Distances must be finite and non-negative.
    #[error("invalid distance {distance} between `{from}` and `{to}`")]
    InvalidDistance {
        from: CafeId,
        to: CafeId,
        distance: Distance,
    },

    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse map file: {0}")]
    Json(#[from] serde_json::Error),
}
