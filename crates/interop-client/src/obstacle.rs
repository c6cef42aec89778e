//! Obstacle objects served by the interoperability server.

use serde::{Deserialize, Serialize};

/// The server's current obstacle picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSet {
    #[serde(default)]
    pub stationary_obstacles: Vec<StationaryObstacle>,
    #[serde(default)]
    pub moving_obstacles: Vec<MovingObstacle>,
}

/// A fixed cylinder the vehicle must avoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationaryObstacle {
    pub latitude: f64,
    pub longitude: f64,
    /// Cylinder radius in feet.
    pub cylinder_radius: f64,
    /// Cylinder height above ground level, in feet.
    pub cylinder_height: f64,
}

/// A sphere moving along a server-controlled path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingObstacle {
    pub latitude: f64,
    pub longitude: f64,
    /// Sphere center altitude above mean sea level, in feet.
    pub altitude_msl: f64,
    /// Sphere radius in feet.
    pub sphere_radius: f64,
}
