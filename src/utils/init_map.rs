use std::convert::Infallible;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::MapError;
use crate::models::{Cafe, CafeId, Distance};
use crate::utils::cafe_network::CafeNetwork;

/// Serializable description of a café map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub cafes: Vec<Cafe>,
    pub roads: Vec<RoadDefinition>,
}

/// One undirected road of a map file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadDefinition {
    pub from: CafeId,
    pub to: CafeId,
    pub distance: Distance,
}

impl MapDefinition {
    /// Build the café network, validating every café and road
    pub fn into_network(self) -> Result<CafeNetwork, MapError> {
        let roads = self
            .roads
            .into_iter()
            .map(|road| (road.from, road.to, road.distance));
        let network = CafeNetwork::from_parts(self.cafes, roads)?;

        Ok(match self.title {
            Some(title) => network.with_title(title),
            None => network,
        })
    }
}

/// Where the café map comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    /// The five-café teaching map
    Reference,
    /// Nine cafés in Prachinburi with fixed plot positions
    Prachinburi,
    /// A JSON map file
    File(PathBuf),
}

impl FromStr for MapSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "reference" => MapSource::Reference,
            "prachinburi" => MapSource::Prachinburi,
            _ => MapSource::File(PathBuf::from(s)),
        })
    }
}

impl MapSource {
    /// Load the selected map
    pub fn load(&self) -> Result<CafeNetwork, MapError> {
        match self {
            MapSource::Reference => reference_map(),
            MapSource::Prachinburi => prachinburi_map(),
            MapSource::File(path) => load_map(path),
        }
    }
}

/// Load a map from a JSON file
pub fn load_map(path: &Path) -> Result<CafeNetwork, MapError> {
    info!(path = %path.display(), "loading café map");

    let json_str = fs::read_to_string(path)?;
    let definition: MapDefinition = serde_json::from_str(&json_str)?;
    let network = definition.into_network()?;

    info!(
        cafes = network.len(),
        roads = network.roads().count(),
        "loaded café map"
    );
    Ok(network)
}

/// The five-café map used throughout the examples
///
/// Roads: A-B 3, A-D 2, B-D 4, B-E 7, C-D 6, C-E 5, D-E 8.
pub fn reference_map() -> Result<CafeNetwork, MapError> {
    let cafes = [
        Cafe::new("A").with_name("Morning Brew"),
        Cafe::new("B").with_name("Cozy Corner"),
        Cafe::new("C").with_name("Bean & Leaf"),
        Cafe::new("D").with_name("Sunrise Café"),
        Cafe::new("E").with_name("Moonlight Coffee"),
    ];
    let roads = [
        ("A", "B", 3.0),
        ("A", "D", 2.0),
        ("B", "D", 4.0),
        ("B", "E", 7.0),
        ("C", "D", 6.0),
        ("C", "E", 5.0),
        ("D", "E", 8.0),
    ];

    Ok(CafeNetwork::from_parts(cafes, roads)?.with_title("Café Route Finder"))
}

/// Cafés of Prachinburi province, laid out at fixed positions
pub fn prachinburi_map() -> Result<CafeNetwork, MapError> {
    let cafes = [
        Cafe::new("A").with_name("Myrrh Cafe Prachinburi").at(2.0, 6.0),
        Cafe::new("B").with_name("Toast bar Cafe").at(1.0, 3.0),
        Cafe::new("C").with_name("Noen Hom Cafe").at(-0.2, 8.0),
        Cafe::new("D").with_name("Rong See Coffee Prachinburi").at(1.0, 0.0),
        Cafe::new("E").with_name("Homurumu Cafe").at(7.0, 1.2),
        Cafe::new("F").with_name("Eto slowbar").at(4.0, 4.0),
        Cafe::new("G").with_name("Nare Cafe").at(3.0, -4.0),
        Cafe::new("H").with_name("VV Cafe & bistro").at(5.0, -5.0),
        Cafe::new("I").with_name("Baan Fuangfah cafe").at(3.0, 2.0),
    ];
    let roads = [
        ("A", "B", 12.0),
        ("A", "C", 10.0),
        ("B", "C", 13.0),
        ("B", "D", 7.0),
        ("D", "G", 12.0),
        ("E", "F", 9.0),
        ("G", "H", 2.0),
        ("G", "I", 5.0),
        ("I", "E", 11.0),
        ("I", "F", 3.0),
        ("H", "I", 9.0),
    ];

    Ok(CafeNetwork::from_parts(cafes, roads)?.with_title("Prachinburi Café Routes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_maps() {
        let reference = reference_map().unwrap();
        assert_eq!(reference.len(), 5);
        assert_eq!(reference.roads().count(), 7);
        assert_eq!(reference.display_name("D"), "Sunrise Café");

        let prachinburi = prachinburi_map().unwrap();
        assert_eq!(prachinburi.len(), 9);
        assert_eq!(prachinburi.roads().count(), 11);
        assert!(prachinburi.cafes().all(|cafe| cafe.position.is_some()));
    }

    #[test]
    fn test_map_source_from_str() {
        assert_eq!("reference".parse::<MapSource>(), Ok(MapSource::Reference));
        assert_eq!(" Prachinburi ".parse::<MapSource>(), Ok(MapSource::Prachinburi));
        assert_eq!(
            "maps/mine.json".parse::<MapSource>(),
            Ok(MapSource::File(PathBuf::from("maps/mine.json")))
        );
    }

    #[test]
    fn test_definition_from_json() {
        let json = r#"{
            "title": "Tiny",
            "cafes": [{"id": "A", "name": "Alpha"}, {"id": "B"}],
            "roads": [{"from": "A", "to": "B", "distance": 4}]
        }"#;
        let definition: MapDefinition = serde_json::from_str(json).unwrap();
        let network = definition.into_network().unwrap();

        assert_eq!(network.title(), Some("Tiny"));
        assert_eq!(network.road_distance("B", "A"), Some(4.0));
        assert_eq!(network.display_name("B"), "B");
    }

    #[test]
    fn test_definition_rejects_invalid_roads() {
        let json = r#"{
            "cafes": [{"id": "A"}, {"id": "B"}],
            "roads": [{"from": "A", "to": "B", "distance": -1}]
        }"#;
        let definition: MapDefinition = serde_json::from_str(json).unwrap();
        assert!(matches!(
            definition.into_network(),
            Err(MapError::InvalidDistance { .. })
        ));
    }
}
