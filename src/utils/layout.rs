// Node positions for drawing a café network

use std::collections::HashMap;

use geo::{BoundingRect, Coord, MultiPoint, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::models::CafeId;
use crate::utils::cafe_network::CafeNetwork;

pub type Positions = HashMap<CafeId, Coord<f64>>;

/// Seed of the spring layout, so repeated plots of a map look the same
pub const LAYOUT_SEED: u64 = 42;

const SPRING_ITERATIONS: usize = 50;
const MIN_DISTANCE: f64 = 0.01;

/// Positions for every café of the network
///
/// Uses the map's fixed positions when all cafés have one, otherwise a
/// seeded spring layout.
pub fn layout(network: &CafeNetwork) -> Positions {
    let fixed: Positions = network
        .cafes()
        .filter_map(|cafe| cafe.position.map(|position| (cafe.id.clone(), position)))
        .collect();

    if fixed.len() == network.len() {
        return fixed;
    }
    if !fixed.is_empty() {
        warn!(
            fixed = fixed.len(),
            cafes = network.len(),
            "only some cafés have positions, using spring layout"
        );
    }
    spring_layout(network, LAYOUT_SEED)
}

/// Fruchterman-Reingold force-directed layout, scaled into [-1, 1]
pub fn spring_layout(network: &CafeNetwork, seed: u64) -> Positions {
    let ids: Vec<&str> = network.cafes().map(|cafe| cafe.id.as_str()).collect();
    let n = ids.len();
    if n == 0 {
        return Positions::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions: Vec<Coord<f64>> = (0..n)
        .map(|_| Coord {
            x: rng.gen::<f64>(),
            y: rng.gen::<f64>(),
        })
        .collect();

    let slot: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    let edges: Vec<(usize, usize)> = network
        .roads()
        .filter_map(|(from, to, _)| Some((*slot.get(from)?, *slot.get(to)?)))
        .collect();

    // Optimal pairwise distance for a unit area
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1;
    let cooling = temperature / (SPRING_ITERATIONS as f64 + 1.0);

    for _ in 0..SPRING_ITERATIONS {
        let mut displacement = vec![Coord { x: 0.0, y: 0.0 }; n];

        // Repulsion between every pair
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = positions[i] - positions[j];
                let distance = length(delta).max(MIN_DISTANCE);
                displacement[i] = displacement[i] + delta / distance * (k * k / distance);
            }
        }

        // Attraction along roads
        for &(a, b) in &edges {
            let delta = positions[a] - positions[b];
            let distance = length(delta).max(MIN_DISTANCE);
            let pull = delta / distance * (distance * distance / k);
            displacement[a] = displacement[a] - pull;
            displacement[b] = displacement[b] + pull;
        }

        for (position, shift) in positions.iter_mut().zip(&displacement) {
            let magnitude = length(*shift).max(MIN_DISTANCE);
            *position = *position + *shift / magnitude * magnitude.min(temperature);
        }
        temperature -= cooling;
    }

    rescale(&mut positions);
    debug!(cafes = n, seed, "spring layout computed");

    ids.into_iter()
        .map(str::to_string)
        .zip(positions)
        .collect()
}

/// Bounding box `(min_x, max_x, min_y, max_y)` of the positions, widened by
/// `margin` times the larger side so nodes are not clipped
pub fn bounds(positions: &Positions, margin: f64) -> (f64, f64, f64, f64) {
    let points: MultiPoint<f64> = positions.values().map(|c| Point::from(*c)).collect();

    match points.bounding_rect() {
        Some(rect) => {
            let pad = rect.width().max(rect.height()).max(1.0) * margin;
            (
                rect.min().x - pad,
                rect.max().x + pad,
                rect.min().y - pad,
                rect.max().y + pad,
            )
        }
        None => (-1.0, 1.0, -1.0, 1.0),
    }
}

fn length(c: Coord<f64>) -> f64 {
    c.x.hypot(c.y)
}

// Center on the mean and scale the largest coordinate to 1
fn rescale(positions: &mut [Coord<f64>]) {
    let n = positions.len() as f64;
    let center = positions
        .iter()
        .fold(Coord { x: 0.0, y: 0.0 }, |acc, c| acc + *c)
        / n;

    let mut extent: f64 = 0.0;
    for position in positions.iter_mut() {
        *position = *position - center;
        extent = extent.max(position.x.abs()).max(position.y.abs());
    }
    if extent > 0.0 {
        for position in positions.iter_mut() {
            *position = *position / extent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::init_map::{prachinburi_map, reference_map};

    #[test]
    fn test_fixed_positions_are_used() {
        let network = prachinburi_map().unwrap();
        let positions = layout(&network);

        assert_eq!(positions.len(), 9);
        assert_eq!(positions["H"], Coord { x: 5.0, y: -5.0 });
    }

    #[test]
    fn test_spring_layout_is_deterministic_and_scaled() {
        let network = reference_map().unwrap();
        let first = layout(&network);
        let second = layout(&network);

        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
        for position in first.values() {
            assert!(position.x.abs() <= 1.0 + 1e-9);
            assert!(position.y.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn test_bounds_with_margin() {
        let mut positions = Positions::new();
        positions.insert("A".into(), Coord { x: 0.0, y: 0.0 });
        positions.insert("B".into(), Coord { x: 4.0, y: 2.0 });

        let (min_x, max_x, min_y, max_y) = bounds(&positions, 0.25);
        assert_eq!((min_x, max_x, min_y, max_y), (-1.0, 5.0, -1.0, 3.0));

        assert_eq!(bounds(&Positions::new(), 0.25), (-1.0, 1.0, -1.0, 1.0));
    }
}
