//! The laboratory coordinator.
//!
//! [`Lab`] is the single owner of everything a user can change: one switch
//! and one bulb list per topology, the shared source voltage and the shared
//! bulb count. Front-ends translate their events into calls on a `Lab` and
//! hand it by reference to the renderers.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::circuit::{
    validate_bulb_count, validate_state, validate_voltage, BulbId, CircuitState, Topology,
};
use crate::error::{LabError, Result};
use crate::model::{BulbReading, CircuitOutput};
use crate::{DEFAULT_BULB_COUNT, DEFAULT_VOLTAGE, MAX_BULBS, MIN_BULBS};

/// Initial configuration of a laboratory.
#[derive(Debug, Clone)]
pub struct LabConfig {
    /// Number of bulbs in each circuit.
    pub bulb_count: usize,
    /// Source voltage shared by both circuits (volts).
    pub source_voltage: f64,
    /// Whether the series switch starts closed.
    pub series_power: bool,
    /// Whether the parallel switch starts closed.
    pub parallel_power: bool,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            bulb_count: DEFAULT_BULB_COUNT,
            source_voltage: DEFAULT_VOLTAGE,
            series_power: false,
            parallel_power: false,
        }
    }
}

impl LabConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bulbs.
    pub fn with_bulb_count(mut self, bulb_count: usize) -> Self {
        self.bulb_count = bulb_count;
        self
    }

    /// Set the source voltage.
    pub fn with_voltage(mut self, source_voltage: f64) -> Self {
        self.source_voltage = source_voltage;
        self
    }

    /// Start with the series switch closed or open.
    pub fn with_series_power(mut self, on: bool) -> Self {
        self.series_power = on;
        self
    }

    /// Start with the parallel switch closed or open.
    pub fn with_parallel_power(mut self, on: bool) -> Self {
        self.parallel_power = on;
        self
    }
}

/// Everything a renderer needs to draw one circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitView {
    pub topology: Topology,
    pub power_on: bool,
    pub output: CircuitOutput,
    pub bulbs: Vec<BulbReading>,
}

impl CircuitView {
    /// Look up the reading of one bulb.
    pub fn bulb(&self, id: BulbId) -> Option<&BulbReading> {
        self.bulbs.iter().find(|b| b.id == id)
    }
}

/// Both circuits plus the shared controls, for serialisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabSnapshot {
    pub bulb_count: usize,
    pub source_voltage: f64,
    pub series: CircuitView,
    pub parallel: CircuitView,
}

/// Series and parallel circuits side by side.
#[derive(Debug, Clone)]
pub struct Lab {
    bulb_count: usize,
    source_voltage: f64,
    series: CircuitState,
    parallel: CircuitState,
}

impl Lab {
    /// Create a laboratory, validating the configured count and voltage.
    pub fn new(config: LabConfig) -> Result<Self> {
        validate_bulb_count(config.bulb_count)?;
        let source_voltage = validate_voltage(config.source_voltage)?;

        let mut series = CircuitState::new(config.bulb_count, source_voltage);
        series.power_on = config.series_power;
        let mut parallel = CircuitState::new(config.bulb_count, source_voltage);
        parallel.power_on = config.parallel_power;
        validate_state(&series)?;
        validate_state(&parallel)?;

        debug!(
            "lab created: {} bulbs, {} V, series {}, parallel {}",
            config.bulb_count,
            source_voltage,
            on_off(series.power_on),
            on_off(parallel.power_on)
        );

        Ok(Self {
            bulb_count: config.bulb_count,
            source_voltage,
            series,
            parallel,
        })
    }

    /// Number of bulbs in each circuit.
    pub fn bulb_count(&self) -> usize {
        self.bulb_count
    }

    /// Shared source voltage.
    pub fn source_voltage(&self) -> f64 {
        self.source_voltage
    }

    /// Whether a circuit's switch is closed.
    pub fn power_on(&self, topology: Topology) -> bool {
        self.circuit(topology).power_on
    }

    /// The state of one circuit.
    pub fn circuit(&self, topology: Topology) -> &CircuitState {
        match topology {
            Topology::Series => &self.series,
            Topology::Parallel => &self.parallel,
        }
    }

    fn circuit_mut(&mut self, topology: Topology) -> &mut CircuitState {
        match topology {
            Topology::Series => &mut self.series,
            Topology::Parallel => &mut self.parallel,
        }
    }

    /// Flip a circuit's switch, returning its new state.
    pub fn toggle_power(&mut self, topology: Topology) -> bool {
        let circuit = self.circuit_mut(topology);
        circuit.power_on = !circuit.power_on;
        let on = circuit.power_on;
        debug!("{} switch {}", topology, on_off(on));
        on
    }

    /// Open or close a circuit's switch. Returns `false` if it was already
    /// in that position.
    pub fn set_power(&mut self, topology: Topology, on: bool) -> bool {
        let circuit = self.circuit_mut(topology);
        if circuit.power_on == on {
            return false;
        }
        circuit.power_on = on;
        debug!("{} switch {}", topology, on_off(on));
        true
    }

    /// Change the number of bulbs in both circuits.
    ///
    /// A new count replaces both bulb lists with fresh working bulbs. Setting
    /// the current count again changes nothing, so broken bulbs stay broken.
    pub fn set_bulb_count(&mut self, count: usize) -> Result<()> {
        if let Err(e) = validate_bulb_count(count) {
            warn!("rejected bulb count {}: {}", count, e);
            return Err(e);
        }
        if count == self.bulb_count {
            return Ok(());
        }

        self.bulb_count = count;
        self.series.reset_bulbs(count);
        self.parallel.reset_bulbs(count);
        debug!("bulb count set to {}, bulbs reset", count);
        Ok(())
    }

    /// Add one bulb to both circuits. Returns `false` at the maximum.
    pub fn add_bulb(&mut self) -> bool {
        if self.bulb_count >= MAX_BULBS {
            return false;
        }
        self.set_bulb_count(self.bulb_count + 1).is_ok()
    }

    /// Remove one bulb from both circuits. Returns `false` at the minimum.
    pub fn remove_bulb(&mut self) -> bool {
        if self.bulb_count <= MIN_BULBS {
            return false;
        }
        self.set_bulb_count(self.bulb_count - 1).is_ok()
    }

    /// Break or repair one bulb of one circuit, returning its new flag.
    pub fn toggle_bulb(&mut self, topology: Topology, id: BulbId) -> Result<bool> {
        let Some(bulb) = self.circuit_mut(topology).bulb_mut(id) else {
            warn!("no bulb {} in the {} circuit", id, topology);
            return Err(LabError::BulbNotFound { topology, id });
        };
        let broken = bulb.toggle();
        debug!(
            "{} bulb {} {}",
            topology,
            id,
            if broken { "broken" } else { "repaired" }
        );
        Ok(broken)
    }

    /// Set the shared source voltage, returning the value actually applied.
    pub fn set_voltage(&mut self, voltage: f64) -> Result<f64> {
        let applied = match validate_voltage(voltage) {
            Ok(v) => v,
            Err(e) => {
                warn!("rejected voltage {}: {}", voltage, e);
                return Err(e);
            }
        };

        self.source_voltage = applied;
        self.series.source_voltage = applied;
        self.parallel.source_voltage = applied;
        debug!("source voltage set to {} V", applied);
        Ok(applied)
    }

    /// Run the electrical model for one circuit.
    pub fn output(&self, topology: Topology) -> CircuitOutput {
        self.circuit(topology).output(topology)
    }

    /// Build the full view of one circuit.
    pub fn view(&self, topology: Topology) -> CircuitView {
        let circuit = self.circuit(topology);
        let output = circuit.output(topology);
        CircuitView {
            topology,
            power_on: circuit.power_on,
            bulbs: circuit.readings(topology, &output),
            output,
        }
    }

    /// Capture both circuits at once.
    pub fn snapshot(&self) -> LabSnapshot {
        LabSnapshot {
            bulb_count: self.bulb_count,
            source_voltage: self.source_voltage,
            series: self.view(Topology::Series),
            parallel: self.view(Topology::Parallel),
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn powered_lab() -> Lab {
        Lab::new(
            LabConfig::new()
                .with_series_power(true)
                .with_parallel_power(true),
        )
        .unwrap()
    }

    #[test]
    fn test_default_lab() {
        let lab = Lab::new(LabConfig::default()).unwrap();
        assert_eq!(lab.bulb_count(), 3);
        assert_relative_eq!(lab.source_voltage(), 12.0);
        assert!(!lab.power_on(Topology::Series));
        assert!(!lab.power_on(Topology::Parallel));
        assert_eq!(lab.output(Topology::Series), CircuitOutput::default());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(Lab::new(LabConfig::new().with_bulb_count(0)).is_err());
        assert!(Lab::new(LabConfig::new().with_voltage(30.0)).is_err());
    }

    #[test]
    fn test_toggle_power_is_per_topology() {
        let mut lab = Lab::new(LabConfig::default()).unwrap();
        assert!(lab.toggle_power(Topology::Series));
        assert!(lab.power_on(Topology::Series));
        assert!(!lab.power_on(Topology::Parallel));
        assert!(!lab.toggle_power(Topology::Series));
    }

    #[test]
    fn test_set_power_reports_transitions_only() {
        let mut lab = Lab::new(LabConfig::default()).unwrap();
        assert!(!lab.set_power(Topology::Parallel, false));
        assert!(lab.set_power(Topology::Parallel, true));
        assert!(!lab.set_power(Topology::Parallel, true));
        assert!(lab.power_on(Topology::Parallel));
        assert!(!lab.power_on(Topology::Series));
    }

    #[test]
    fn test_break_bulb_one_scenario() {
        let mut lab = powered_lab();
        assert_relative_eq!(lab.output(Topology::Series).total_current, 12.0 / 9.0);
        assert_relative_eq!(lab.output(Topology::Parallel).total_current, 12.0);

        assert!(lab.toggle_bulb(Topology::Series, BulbId(1)).unwrap());
        assert!(lab.toggle_bulb(Topology::Parallel, BulbId(1)).unwrap());

        assert_eq!(lab.output(Topology::Series).total_current, 0.0);
        let parallel = lab.view(Topology::Parallel);
        assert_relative_eq!(parallel.output.total_current, 8.0);
        assert!(parallel.bulb(BulbId(0)).unwrap().lit);
        assert!(!parallel.bulb(BulbId(1)).unwrap().lit);
        assert!(parallel.bulb(BulbId(2)).unwrap().lit);
    }

    #[test]
    fn test_bulb_lists_are_independent() {
        let mut lab = powered_lab();
        lab.toggle_bulb(Topology::Series, BulbId(0)).unwrap();
        assert!(lab.circuit(Topology::Series).bulbs[0].broken);
        assert!(!lab.circuit(Topology::Parallel).bulbs[0].broken);
    }

    #[test]
    fn test_toggle_unknown_bulb() {
        let mut lab = powered_lab();
        let err = lab.toggle_bulb(Topology::Parallel, BulbId(3)).unwrap_err();
        assert!(matches!(err, LabError::BulbNotFound { id: BulbId(3), .. }));
    }

    #[test]
    fn test_count_change_resets_both_lists() {
        let mut lab = powered_lab();
        lab.toggle_bulb(Topology::Series, BulbId(0)).unwrap();
        lab.toggle_bulb(Topology::Parallel, BulbId(2)).unwrap();

        lab.set_bulb_count(5).unwrap();
        for topology in Topology::ALL {
            let circuit = lab.circuit(topology);
            assert_eq!(circuit.bulb_count(), 5);
            assert_eq!(circuit.working_count(), 5);
        }
        assert!(lab.power_on(Topology::Series));
    }

    #[test]
    fn test_same_count_keeps_broken_bulbs() {
        let mut lab = powered_lab();
        lab.toggle_bulb(Topology::Series, BulbId(0)).unwrap();
        lab.set_bulb_count(3).unwrap();
        assert!(lab.circuit(Topology::Series).bulbs[0].broken);
    }

    #[test]
    fn test_out_of_range_count_leaves_state() {
        let mut lab = powered_lab();
        lab.toggle_bulb(Topology::Series, BulbId(0)).unwrap();
        assert!(lab.set_bulb_count(6).is_err());
        assert!(lab.set_bulb_count(0).is_err());
        assert_eq!(lab.bulb_count(), 3);
        assert!(lab.circuit(Topology::Series).bulbs[0].broken);
    }

    #[test]
    fn test_add_and_remove_saturate() {
        let mut lab = Lab::new(LabConfig::new().with_bulb_count(4)).unwrap();
        assert!(lab.add_bulb());
        assert!(!lab.add_bulb());
        assert_eq!(lab.bulb_count(), 5);

        let mut lab = Lab::new(LabConfig::new().with_bulb_count(2)).unwrap();
        assert!(lab.remove_bulb());
        assert!(!lab.remove_bulb());
        assert_eq!(lab.bulb_count(), 1);
    }

    #[test]
    fn test_voltage_is_shared_and_snapped() {
        let mut lab = powered_lab();
        assert_relative_eq!(lab.set_voltage(6.1).unwrap(), 6.0);
        assert_relative_eq!(lab.circuit(Topology::Series).source_voltage, 6.0);
        assert_relative_eq!(lab.circuit(Topology::Parallel).source_voltage, 6.0);
        assert_relative_eq!(lab.output(Topology::Parallel).total_current, 6.0);

        assert!(lab.set_voltage(0.0).is_err());
        assert_relative_eq!(lab.source_voltage(), 6.0);
    }

    #[test]
    fn test_view_matches_output() {
        let lab = powered_lab();
        let view = lab.view(Topology::Series);
        assert_eq!(view.output, lab.output(Topology::Series));
        assert_eq!(view.bulbs.len(), 3);
        assert!(view.power_on);
    }

    #[test]
    fn test_snapshot() {
        let mut lab = powered_lab();
        lab.set_voltage(6.0).unwrap();
        let snap = lab.snapshot();
        assert_eq!(snap.bulb_count, 3);
        assert_eq!(snap.series, lab.view(Topology::Series));
        assert_eq!(snap.parallel.topology, Topology::Parallel);
        assert_relative_eq!(snap.parallel.output.total_current, 6.0);
    }
}
