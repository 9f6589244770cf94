//! Core data models for route points and generated links.

use serde::{Deserialize, Serialize};

/// A `lat,lon` pair kept as the raw attribute text from the document.
///
/// Coordinates are never round-tripped through floats, so the encoded
/// length of a point is exactly what the source file wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coordinate(String);

impl Coordinate {
    pub fn new(lat: &str, lon: &str) -> Self {
        Self(format!("{lat},{lon}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters this coordinate takes in a URL path.
    pub fn encoded_len(&self) -> usize {
        self.0.chars().count()
    }
}

/// A single point of a route, either a required waypoint or path filler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub coord: Coordinate,
    /// Mandatory points always render in the final link.
    pub mandatory: bool,
    /// Position in document order.
    pub index: usize,
    /// Index of the owning mandatory point, for fillers only.
    #[serde(default)]
    pub owner: Option<usize>,
}

impl Point {
    pub fn waypoint(coord: Coordinate, index: usize) -> Self {
        Self {
            coord,
            mandatory: true,
            index,
            owner: None,
        }
    }

    pub fn filler(coord: Coordinate, index: usize, owner: usize) -> Self {
        Self {
            coord,
            mandatory: false,
            index,
            owner: Some(owner),
        }
    }
}

/// Ordered route: each waypoint followed by the detailed path points it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub points: Vec<Point>,
}

impl Route {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn waypoints(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|p| p.mandatory)
    }

    pub fn fillers(&self) -> impl Iterator<Item = &Point> {
        self.points.iter().filter(|p| !p.mandatory)
    }

    pub fn mandatory_count(&self) -> usize {
        self.waypoints().count()
    }

    pub fn filler_count(&self) -> usize {
        self.fillers().count()
    }
}

/// Statistics reported alongside a generated link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub mandatory_points: usize,
    pub filler_points: usize,
    pub url_length: usize,
}

/// A fully assembled directions link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLink {
    pub url: String,
    pub stats: LinkStats,
}
