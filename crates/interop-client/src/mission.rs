//! Mission objects served by the interoperability server.
//!
//! These mirror the 2017 protocol's mission JSON. Decoding tolerates unknown
//! fields so protocol additions do not break the client.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// An ordered mission waypoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub order: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude above mean sea level, in feet.
    pub altitude_msl: f64,
}

/// A boundary vertex of a flight zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryPoint {
    pub order: u32,
    pub latitude: f64,
    pub longitude: f64,
}

/// A flight boundary the vehicle must stay inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlyZone {
    pub altitude_msl_min: f64,
    pub altitude_msl_max: f64,
    #[serde(default)]
    pub boundary_pts: Vec<BoundaryPoint>,
}

/// One mission definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: u32,
    pub active: bool,
    pub air_drop_pos: GpsPosition,
    pub home_pos: GpsPosition,
    pub off_axis_target_pos: GpsPosition,
    pub emergent_last_known_pos: GpsPosition,
    pub sric_pos: GpsPosition,
    #[serde(default)]
    pub fly_zones: Vec<FlyZone>,
    #[serde(default)]
    pub mission_waypoints: Vec<Waypoint>,
    #[serde(default)]
    pub search_grid_points: Vec<Waypoint>,
}
