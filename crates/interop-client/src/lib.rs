//! Interoperability client library entry points.
//!
//! This crate exposes the authenticated HTTP client for the AUVSI SUAS
//! interoperability server, the wire data model, the target upload helpers,
//! and the fixed-period probe loop. Higher-level consumers (the CLI) should
//! only depend on the items exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod cancel;
pub mod client;
pub mod error;
pub mod mission;
pub mod obstacle;
pub mod probe;
pub mod target;
pub mod telemetry;
pub mod upload;

pub use cancel::CancelToken;
pub use client::Client;
pub use error::{Error, Result};
pub use mission::{BoundaryPoint, FlyZone, GpsPosition, Mission, Waypoint};
pub use obstacle::{MovingObstacle, ObstacleSet, StationaryObstacle};
pub use probe::{run_probe, ProbeStats};
pub use target::{Color, Orientation, Shape, Target, TargetType};
pub use telemetry::Telemetry;
pub use upload::{upload_legacy_targets, upload_targets, UploadReport};
