//! Shared helpers for the wiremock-backed integration tests.
//!
//! The blocking client cannot run on an async runtime thread, so tests wrap
//! client calls in `tokio::task::spawn_blocking` while the mock server runs
//! on the test runtime.

use interop_client::Client;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "testuser";
pub const PASSWORD: &str = "testpass";

/// Accept the login request with a plain success response.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Login Successful."))
        .mount(server)
        .await;
}

/// Authenticate a blocking client against the mock server.
#[allow(dead_code)]
pub fn connect(uri: &str) -> Client {
    Client::new(uri, USERNAME, PASSWORD).expect("login succeeds")
}

/// A complete mission object as served by the 2017 protocol.
#[allow(dead_code)]
pub fn mission_json(id: u32) -> Value {
    json!({
        "id": id,
        "active": true,
        "air_drop_pos": {"latitude": 38.141833, "longitude": -76.425263},
        "home_pos": {"latitude": 38.14792, "longitude": -76.427995},
        "off_axis_target_pos": {"latitude": 38.142544, "longitude": -76.434088},
        "emergent_last_known_pos": {"latitude": 38.145823, "longitude": -76.422396},
        "sric_pos": {"latitude": 38.14929, "longitude": -76.43106},
        "fly_zones": [{
            "altitude_msl_min": 100.0,
            "altitude_msl_max": 750.0,
            "boundary_pts": [
                {"order": 1, "latitude": 38.142544, "longitude": -76.434088},
                {"order": 2, "latitude": 38.141833, "longitude": -76.425263}
            ]
        }],
        "mission_waypoints": [
            {"order": 1, "latitude": 38.142544, "longitude": -76.434088, "altitude_msl": 300.0}
        ],
        "search_grid_points": []
    })
}

/// An obstacle set with one obstacle of each kind.
#[allow(dead_code)]
pub fn obstacles_json() -> Value {
    json!({
        "stationary_obstacles": [
            {"latitude": 38.14792, "longitude": -76.427995, "cylinder_radius": 150.0, "cylinder_height": 200.0}
        ],
        "moving_obstacles": [
            {"latitude": 38.141833, "longitude": -76.425263, "altitude_msl": 300.0, "sphere_radius": 50.0}
        ]
    })
}
