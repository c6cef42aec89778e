use serde::{Deserialize, Serialize};

/// One UAS telemetry reading posted to the server.
///
/// Field names match the server's form-encoded telemetry endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Altitude above mean sea level, in feet.
    pub altitude_msl: f64,
    /// Heading in degrees clockwise from true north.
    pub uas_heading: f64,
}

impl Telemetry {
    /// The placeholder reading sent by the probe loop. All fields are zero:
    /// the probe measures server latency, it does not report vehicle state.
    pub fn zeroed() -> Self {
        Telemetry {
            latitude: 0.0,
            longitude: 0.0,
            altitude_msl: 0.0,
            uas_heading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_reading_is_all_zero() {
        let reading = Telemetry::zeroed();
        assert_eq!(reading.latitude, 0.0);
        assert_eq!(reading.longitude, 0.0);
        assert_eq!(reading.altitude_msl, 0.0);
        assert_eq!(reading.uas_heading, 0.0);
    }
}
