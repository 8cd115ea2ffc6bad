//! Series circuit: every bulb on one loop.

use super::{CircuitOutput, BULB_RESISTANCE};
use crate::circuit::Bulb;

/// Equivalent resistance of `count` bulbs in series.
pub fn series_resistance(count: usize) -> f64 {
    count as f64 * BULB_RESISTANCE
}

/// Compute the output of a series circuit.
///
/// Any broken bulb opens the loop, so current, voltage and brightness all
/// drop to zero for every bulb. Brightness is the fraction of the source
/// voltage each bulb receives.
pub fn compute_series(bulbs: &[Bulb], power_on: bool, source_voltage: f64) -> CircuitOutput {
    let count = bulbs.len();
    let is_broken = bulbs.iter().any(|b| b.broken);
    let closed = power_on && !is_broken;
    let total_resistance = series_resistance(count);

    let total_current = if closed && total_resistance > 0.0 {
        source_voltage / total_resistance
    } else {
        0.0
    };

    let total_voltage = if closed && count > 0 {
        source_voltage
    } else {
        0.0
    };

    let per_bulb_voltage = if count > 0 {
        total_voltage / count as f64
    } else {
        0.0
    };

    let per_bulb_brightness = if source_voltage > 0.0 {
        (per_bulb_voltage / source_voltage).clamp(0.0, 1.0)
    } else {
        0.0
    };

    CircuitOutput {
        total_voltage,
        total_current,
        per_bulb_current: total_current,
        per_bulb_brightness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_bulbs_twelve_volts() {
        let bulbs = Bulb::fresh_list(3);
        let out = compute_series(&bulbs, true, 12.0);
        assert_relative_eq!(out.total_voltage, 12.0);
        assert_relative_eq!(out.total_current, 12.0 / 9.0);
        assert_relative_eq!(out.per_bulb_current, out.total_current);
        assert_relative_eq!(out.per_bulb_brightness, 1.0 / 3.0);
    }

    #[test]
    fn test_any_broken_bulb_opens_loop() {
        for broken in 0..4 {
            let mut bulbs = Bulb::fresh_list(4);
            bulbs[broken].broken = true;
            let out = compute_series(&bulbs, true, 12.0);
            assert_eq!(out, CircuitOutput::default());
        }
    }

    #[test]
    fn test_no_bulbs_is_guarded() {
        let out = compute_series(&[], true, 12.0);
        assert_eq!(out.total_current, 0.0);
        assert_eq!(out.total_voltage, 0.0);
        assert_eq!(out.per_bulb_brightness, 0.0);
        assert!(out.total_current.is_finite());
    }

    #[test]
    fn test_zero_volts_has_no_brightness() {
        let bulbs = Bulb::fresh_list(2);
        let out = compute_series(&bulbs, true, 0.0);
        assert_eq!(out.per_bulb_brightness, 0.0);
        assert_eq!(out.total_current, 0.0);
    }

    #[test]
    fn test_resistance() {
        assert_relative_eq!(series_resistance(0), 0.0);
        assert_relative_eq!(series_resistance(5), 15.0);
    }
}
