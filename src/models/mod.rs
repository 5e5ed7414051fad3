// Models module - exports all model types

mod cafe;
mod route;

// Re-export model types
pub use self::cafe::Cafe;
pub use self::route::{Leg, Route};

// Common type aliases for improved code readability
pub type CafeId = String;
pub type Distance = f64;
