//! Current-flow animation on wires.

use serde::{Deserialize, Serialize};

use crate::model::{BulbReading, CircuitOutput};

/// Minimum current (amperes) for a trunk wire to animate.
pub const FLOW_THRESHOLD: f64 = 0.01;

/// Shortest animation period in seconds (fastest flow).
pub const MIN_FLOW_SECONDS: f64 = 0.2;

/// Longest animation period in seconds (slowest flow).
pub const MAX_FLOW_SECONDS: f64 = 5.0;

/// Animation state of one wire segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireFlow {
    pub flowing: bool,
    /// Period of the dash animation; higher current runs faster. Zero when idle.
    pub duration_secs: f64,
}

impl WireFlow {
    /// Animation for a wire carrying `current` amperes.
    pub fn new(flowing: bool, current: f64) -> Self {
        let duration_secs = if flowing && current > 0.0 {
            (2.0 / current).clamp(MIN_FLOW_SECONDS, MAX_FLOW_SECONDS)
        } else {
            0.0
        };
        Self {
            flowing,
            duration_secs,
        }
    }

    /// Wires shared by the whole circuit (source, switch, series loop,
    /// parallel rails).
    pub fn trunk(output: &CircuitOutput) -> Self {
        Self::new(output.total_current > FLOW_THRESHOLD, output.total_current)
    }

    /// The two wires of one parallel branch.
    pub fn branch(output: &CircuitOutput, reading: &BulbReading) -> Self {
        Self::new(reading.lit && !reading.broken, output.per_bulb_current)
    }
}
