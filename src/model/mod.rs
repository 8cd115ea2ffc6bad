//! Circuit electrical model.
//!
//! This module maps the inputs of one circuit to what a student should see:
//! total voltage, total current, current through a bulb and bulb brightness.
//!
//! ## Ohm's law on identical bulbs
//!
//! Every bulb is a fixed resistor of [`BULB_RESISTANCE`] ohms. For `n` bulbs:
//!
//! ```text
//! series:    R = n * R_bulb          I = V / R
//! parallel:  R = R_bulb / n_working  I = V / R
//! ```
//!
//! A single broken bulb opens the series loop. In parallel it only removes
//! its own branch.
//!
//! Every function here is pure and total: degenerate inputs (no bulbs, no
//! working branch, zero volts) produce zeros, never `NaN` or infinities.

mod parallel;
mod series;

use serde::{Deserialize, Serialize};

pub use crate::circuit::Topology;
use crate::circuit::{Bulb, BulbId};
pub use parallel::{compute_parallel, parallel_resistance};
pub use series::{compute_series, series_resistance};

/// Resistance of a single bulb in ohms.
pub const BULB_RESISTANCE: f64 = 3.0;

/// Derived electrical quantities of one circuit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CircuitOutput {
    /// Voltage across the bulb network (volts)
    pub total_voltage: f64,
    /// Current drawn from the source (amperes)
    pub total_current: f64,
    /// Current through one bulb, or one working branch in parallel (amperes)
    pub per_bulb_current: f64,
    /// Normalised bulb brightness in `[0, 1]`
    pub per_bulb_brightness: f64,
}

/// What a single bulb looks like after the model has run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulbReading {
    pub id: BulbId,
    pub broken: bool,
    pub lit: bool,
    /// Brightness to display for this bulb
    pub brightness: f64,
}

impl Topology {
    /// Run the model for this topology.
    pub fn compute(&self, bulbs: &[Bulb], power_on: bool, source_voltage: f64) -> CircuitOutput {
        match self {
            Topology::Series => compute_series(bulbs, power_on, source_voltage),
            Topology::Parallel => compute_parallel(bulbs, power_on, source_voltage),
        }
    }

    /// Whether `bulb` glows given the circuit's switch and computed output.
    ///
    /// Series bulbs share one fate: they glow exactly when current flows,
    /// including the broken one (the view marks it by its flag). Parallel
    /// bulbs glow independently.
    pub fn is_lit(&self, bulb: &Bulb, power_on: bool, output: &CircuitOutput) -> bool {
        match self {
            Topology::Series => output.total_current > 0.0,
            Topology::Parallel => power_on && !bulb.broken,
        }
    }
}

/// Compute the per-bulb readings of a circuit.
///
/// A broken parallel bulb displays zero brightness; every other bulb displays
/// the circuit's `per_bulb_brightness`.
pub fn read_bulbs(
    topology: Topology,
    bulbs: &[Bulb],
    power_on: bool,
    output: &CircuitOutput,
) -> Vec<BulbReading> {
    bulbs
        .iter()
        .map(|bulb| {
            let brightness = match topology {
                Topology::Parallel if bulb.broken => 0.0,
                _ => output.per_bulb_brightness,
            };
            BulbReading {
                id: bulb.id,
                broken: bulb.broken,
                lit: topology.is_lit(bulb, power_on, output),
                brightness,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn bulbs_with_broken(count: usize, broken: &[usize]) -> Vec<Bulb> {
        let mut bulbs = Bulb::fresh_list(count);
        for &i in broken {
            bulbs[i].broken = true;
        }
        bulbs
    }

    #[test]
    fn test_ohms_law_over_all_counts_and_voltages() {
        for count in 1..=5 {
            let bulbs = Bulb::fresh_list(count);
            let mut volts = 1.0;
            while volts <= 24.0 {
                let series = compute_series(&bulbs, true, volts);
                let parallel = compute_parallel(&bulbs, true, volts);
                assert_relative_eq!(
                    series.total_current,
                    volts / (count as f64 * BULB_RESISTANCE),
                    epsilon = 1e-12
                );
                assert_relative_eq!(
                    parallel.total_current,
                    volts * count as f64 / BULB_RESISTANCE,
                    epsilon = 1e-12
                );
                volts += 0.5;
            }
        }
    }

    #[test]
    fn test_single_bulb_topologies_agree() {
        let bulbs = Bulb::fresh_list(1);
        let series = compute_series(&bulbs, true, 12.0);
        let parallel = compute_parallel(&bulbs, true, 12.0);
        assert_relative_eq!(series.total_current, 4.0);
        assert_relative_eq!(parallel.total_current, 4.0);
        assert_relative_eq!(series.per_bulb_brightness, 1.0);
        assert_relative_eq!(parallel.per_bulb_brightness, 1.0);
    }

    #[test]
    fn test_power_off_zeroes_both_topologies() {
        let cases: [&[usize]; 3] = [&[], &[0], &[0, 1, 2]];
        for broken in cases {
            let bulbs = bulbs_with_broken(3, broken);
            for topology in Topology::ALL {
                let out = topology.compute(&bulbs, false, 12.0);
                assert_eq!(out.total_current, 0.0);
                assert_eq!(out.total_voltage, 0.0);
            }
        }
    }

    #[test]
    fn test_series_readings_share_fate() {
        let bulbs = bulbs_with_broken(3, &[1]);
        let out = compute_series(&bulbs, true, 12.0);
        let readings = read_bulbs(Topology::Series, &bulbs, true, &out);
        assert!(readings.iter().all(|r| !r.lit && r.brightness == 0.0));
        assert!(readings[1].broken);

        let bulbs = Bulb::fresh_list(3);
        let out = compute_series(&bulbs, true, 12.0);
        let readings = read_bulbs(Topology::Series, &bulbs, true, &out);
        assert!(readings.iter().all(|r| r.lit));
        assert_relative_eq!(readings[0].brightness, 1.0 / 3.0);
    }

    #[test]
    fn test_parallel_readings_are_independent() {
        let bulbs = bulbs_with_broken(3, &[1]);
        let out = compute_parallel(&bulbs, true, 12.0);
        let readings = read_bulbs(Topology::Parallel, &bulbs, true, &out);
        assert!(readings[0].lit);
        assert!(!readings[1].lit);
        assert!(readings[2].lit);
        assert_eq!(readings[1].brightness, 0.0);
        assert_relative_eq!(readings[0].brightness, 1.0);
        assert_relative_eq!(readings[2].brightness, 1.0);
    }

    #[test]
    fn test_double_toggle_restores_output() {
        for topology in Topology::ALL {
            let mut bulbs = Bulb::fresh_list(4);
            let before = topology.compute(&bulbs, true, 9.5);
            bulbs[2].toggle();
            let during = topology.compute(&bulbs, true, 9.5);
            assert_ne!(before, during);
            bulbs[2].toggle();
            assert_eq!(topology.compute(&bulbs, true, 9.5), before);
        }
    }
}
