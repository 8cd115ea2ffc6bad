//! Mutable per-topology circuit state.

use serde::{Deserialize, Serialize};

use super::types::{Bulb, BulbId, Topology};
use crate::model::{BulbReading, CircuitOutput};

/// Inputs of one circuit: its switch, its source and its bulbs.
///
/// Series and parallel circuits each own an instance. The coordinator keeps
/// `source_voltage` and `bulbs.len()` identical across the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitState {
    pub power_on: bool,
    pub source_voltage: f64,
    pub bulbs: Vec<Bulb>,
}

impl CircuitState {
    /// Create a switched-off circuit with `bulb_count` working bulbs.
    pub fn new(bulb_count: usize, source_voltage: f64) -> Self {
        Self {
            power_on: false,
            source_voltage,
            bulbs: Bulb::fresh_list(bulb_count),
        }
    }

    /// Number of bulbs in the circuit.
    pub fn bulb_count(&self) -> usize {
        self.bulbs.len()
    }

    /// Number of bulbs that are not burned out.
    pub fn working_count(&self) -> usize {
        self.bulbs.iter().filter(|b| !b.broken).count()
    }

    /// Find a bulb by id.
    pub fn bulb(&self, id: BulbId) -> Option<&Bulb> {
        self.bulbs.iter().find(|b| b.id == id)
    }

    /// Find a bulb by id, mutably.
    pub fn bulb_mut(&mut self, id: BulbId) -> Option<&mut Bulb> {
        self.bulbs.iter_mut().find(|b| b.id == id)
    }

    /// Replace the bulb list with `count` fresh working bulbs.
    pub fn reset_bulbs(&mut self, count: usize) {
        self.bulbs = Bulb::fresh_list(count);
    }

    /// Run the electrical model over this state.
    pub fn output(&self, topology: Topology) -> CircuitOutput {
        topology.compute(&self.bulbs, self.power_on, self.source_voltage)
    }

    /// Per-bulb lit state and displayed brightness.
    pub fn readings(&self, topology: Topology, output: &CircuitOutput) -> Vec<BulbReading> {
        crate::model::read_bulbs(topology, &self.bulbs, self.power_on, output)
    }
}
