// Public modules
pub mod algorithms;
pub mod commands;
pub mod error;
pub mod menu;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::{find_best_route, BruteForce, HeldKarp, RouteSolver};
pub use error::{MapError, RouteError};
pub use models::{Cafe, Leg, Route};
pub use utils::cafe_network::CafeNetwork;
