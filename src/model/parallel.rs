//! Parallel circuit: one independent branch per bulb.

use super::{CircuitOutput, BULB_RESISTANCE};
use crate::circuit::Bulb;

/// Equivalent resistance of `working` identical bulbs in parallel.
///
/// With no working branch the circuit is open: infinite resistance.
pub fn parallel_resistance(working: usize) -> f64 {
    if working > 0 {
        BULB_RESISTANCE / working as f64
    } else {
        f64::INFINITY
    }
}

/// Compute the output of a parallel circuit.
///
/// Each working branch sees the full source voltage, so brightness is all or
/// nothing. `per_bulb_current` is the current through one working branch and
/// does not depend on how many branches are broken.
pub fn compute_parallel(bulbs: &[Bulb], power_on: bool, source_voltage: f64) -> CircuitOutput {
    let working = bulbs.iter().filter(|b| !b.broken).count();
    let total_resistance = parallel_resistance(working);

    let total_current = if power_on && total_resistance.is_finite() {
        source_voltage / total_resistance
    } else {
        0.0
    };

    let energised = power_on && working > 0;

    CircuitOutput {
        total_voltage: if energised { source_voltage } else { 0.0 },
        total_current,
        per_bulb_current: if power_on {
            source_voltage / BULB_RESISTANCE
        } else {
            0.0
        },
        per_bulb_brightness: if energised { 1.0 } else { 0.0 },
    }
}
