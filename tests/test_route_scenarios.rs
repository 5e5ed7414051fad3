// Integration tests for the route optimizer on the built-in maps
use cafe_route::utils::init_map::{prachinburi_map, reference_map};
use cafe_route::{find_best_route, BruteForce, HeldKarp, RouteError, RouteSolver};
use std::error::Error;

#[test]
fn test_reference_single_destinations() -> Result<(), Box<dyn Error>> {
    let network = reference_map()?;

    // A-D-E and A-B-E tie at 10; the first settled path wins
    let route = find_best_route(&network, "A", &["E"])?;
    assert_eq!(route.stops, vec!["A", "D", "E"]);
    assert_eq!(route.total_distance, 10.0);

    let route = find_best_route(&network, "A", &["C"])?;
    assert_eq!(route.stops, vec!["A", "D", "C"]);
    assert_eq!(route.total_distance, 8.0);

    Ok(())
}

#[test]
fn test_reference_two_destinations() -> Result<(), Box<dyn Error>> {
    let network = reference_map()?;

    // A→C→E costs 8 + 5, A→E→C costs 10 + 5
    let route = find_best_route(&network, "A", &["C", "E"])?;
    assert_eq!(route.stops, vec!["A", "D", "C", "E"]);
    assert_eq!(route.total_distance, 13.0);
    assert_eq!(network.path_weight(&route.stops)?, 13.0);

    Ok(())
}

#[test]
fn test_unknown_cafes_are_rejected() -> Result<(), Box<dyn Error>> {
    let network = reference_map()?;

    assert_eq!(
        find_best_route(&network, "Z", &["A"]),
        Err(RouteError::UnknownNode("Z".to_string()))
    );
    assert_eq!(
        find_best_route(&network, "A", &["C", "Q"]),
        Err(RouteError::UnknownNode("Q".to_string()))
    );
    // Identifiers are case sensitive at the library level
    assert!(find_best_route(&network, "a", &["C"]).is_err());

    Ok(())
}

#[test]
fn test_repeated_queries_are_identical() -> Result<(), Box<dyn Error>> {
    let network = reference_map()?;

    let first = find_best_route(&network, "B", &["C", "A", "E"])?;
    let second = find_best_route(&network, "B", &["C", "A", "E"])?;
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_prachinburi_routes() -> Result<(), Box<dyn Error>> {
    let network = prachinburi_map()?;

    let route = find_best_route(&network, "A", &["H"])?;
    assert_eq!(route.stops, vec!["A", "B", "D", "G", "H"]);
    assert_eq!(route.total_distance, 33.0);

    // Visiting H first and doubling back through G beats going to F first
    let route = find_best_route(&network, "A", &["F", "H"])?;
    assert_eq!(route.stops, vec!["A", "B", "D", "G", "H", "G", "I", "F"]);
    assert_eq!(route.total_distance, 43.0);

    let route = BruteForce.solve(&network, "C", &["E", "H", "D"])?;
    assert_eq!(route.stops, vec!["C", "B", "D", "G", "H", "G", "I", "E"]);
    assert_eq!(route.total_distance, 52.0);
    assert_eq!(HeldKarp.solve(&network, "C", &["E", "H", "D"])?, route);

    Ok(())
}

#[test]
fn test_nearby_cafes() -> Result<(), Box<dyn Error>> {
    let reference = reference_map()?;
    assert_eq!(
        reference.nearby("A", 3)?,
        vec![("D".to_string(), 2.0), ("B".to_string(), 3.0)]
    );

    let prachinburi = prachinburi_map()?;
    let nearby: Vec<String> = prachinburi
        .nearby("I", 3)?
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(nearby, vec!["F", "G", "H"]);

    Ok(())
}
