// Café model: a named node of the café network

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::models::CafeId;

/// Represents a café that can be part of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cafe {
    /// Short identifier used in queries (e.g. "A")
    pub id: CafeId,

    /// Display name shown in tables and plot captions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Fixed plot position, if the map provides one
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "position_serde"
    )]
    pub position: Option<Coord<f64>>,
}

impl Cafe {
    /// Creates a café with only an identifier
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            name: None,
            position: None,
        }
    }

    /// Sets the display name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a fixed plot position
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Coord { x, y });
        self
    }

    /// Display name, falling back to the identifier
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

// Positions are written as `[x, y]` in map files
mod position_serde {
    use geo::Coord;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        position: &Option<Coord<f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        position.map(|c| [c.x, c.y]).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Coord<f64>>, D::Error> {
        let raw = Option::<[f64; 2]>::deserialize(deserializer)?;
        Ok(raw.map(|[x, y]| Coord { x, y }))
    }
}
