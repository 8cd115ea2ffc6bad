//! WASM bindings for Circuitlab Core.
//!
//! This module provides JavaScript-friendly bindings so a web page can keep
//! the laboratory state in Rust and redraw from the returned views.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuitLab } from 'circuitlab_core';
//!
//! await init();
//!
//! const lab = new WasmCircuitLab(3, 12.0);
//! lab.toggle_power("parallel");
//! lab.toggle_bulb("parallel", 1);
//!
//! const view = lab.view("parallel");
//! // { topology: "parallel", power_on: true, output: {...}, bulbs: [...] }
//! bulbElement.style.cssText = lab.bulb_css("parallel", 0);
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{BulbId, Topology};
use crate::lab::{Lab, LabConfig};
use crate::render::bulb_style;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn topology(name: &str) -> Result<Topology, JsValue> {
    name.parse::<Topology>().map_err(to_js)
}

/// WASM-compatible series/parallel laboratory.
///
/// Wraps the native [`Lab`] coordinator. Topologies are passed as the strings
/// `"series"` or `"parallel"`.
#[wasm_bindgen]
pub struct WasmCircuitLab {
    lab: Lab,
}

#[wasm_bindgen]
impl WasmCircuitLab {
    /// Create a laboratory with both switches open.
    ///
    /// # Arguments
    /// * `bulb_count` - Bulbs per circuit (1-5)
    /// * `voltage` - Source voltage in volts (1-24)
    #[wasm_bindgen(constructor)]
    pub fn new(bulb_count: usize, voltage: f64) -> Result<WasmCircuitLab, JsValue> {
        let config = LabConfig::new()
            .with_bulb_count(bulb_count)
            .with_voltage(voltage);
        let lab = Lab::new(config).map_err(to_js)?;
        Ok(WasmCircuitLab { lab })
    }

    /// Flip a circuit's switch, returning its new state.
    #[wasm_bindgen]
    pub fn toggle_power(&mut self, topology_name: &str) -> Result<bool, JsValue> {
        Ok(self.lab.toggle_power(topology(topology_name)?))
    }

    /// Whether a circuit's switch is closed.
    #[wasm_bindgen]
    pub fn power_on(&self, topology_name: &str) -> Result<bool, JsValue> {
        Ok(self.lab.power_on(topology(topology_name)?))
    }

    /// Set the bulb count of both circuits (resets every bulb).
    #[wasm_bindgen]
    pub fn set_bulb_count(&mut self, count: usize) -> Result<(), JsValue> {
        self.lab.set_bulb_count(count).map_err(to_js)
    }

    /// The "+" button. Returns `false` when already at the maximum.
    #[wasm_bindgen]
    pub fn add_bulb(&mut self) -> bool {
        self.lab.add_bulb()
    }

    /// The "-" button. Returns `false` when already at the minimum.
    #[wasm_bindgen]
    pub fn remove_bulb(&mut self) -> bool {
        self.lab.remove_bulb()
    }

    /// Burn out or repair a bulb, returning its new broken flag.
    #[wasm_bindgen]
    pub fn toggle_bulb(&mut self, topology_name: &str, id: usize) -> Result<bool, JsValue> {
        self.lab
            .toggle_bulb(topology(topology_name)?, BulbId(id))
            .map_err(to_js)
    }

    /// Set the shared source voltage, returning the snapped value.
    #[wasm_bindgen]
    pub fn set_voltage(&mut self, voltage: f64) -> Result<f64, JsValue> {
        self.lab.set_voltage(voltage).map_err(to_js)
    }

    /// Number of bulbs per circuit.
    #[wasm_bindgen(getter)]
    pub fn bulb_count(&self) -> usize {
        self.lab.bulb_count()
    }

    /// Shared source voltage.
    #[wasm_bindgen(getter)]
    pub fn source_voltage(&self) -> f64 {
        self.lab.source_voltage()
    }

    /// Voltage across a circuit's bulbs.
    #[wasm_bindgen]
    pub fn total_voltage(&self, topology_name: &str) -> Result<f64, JsValue> {
        Ok(self.lab.output(topology(topology_name)?).total_voltage)
    }

    /// Current drawn by a circuit.
    #[wasm_bindgen]
    pub fn total_current(&self, topology_name: &str) -> Result<f64, JsValue> {
        Ok(self.lab.output(topology(topology_name)?).total_current)
    }

    /// Current through one bulb (one working branch in parallel).
    #[wasm_bindgen]
    pub fn bulb_current(&self, topology_name: &str) -> Result<f64, JsValue> {
        Ok(self.lab.output(topology(topology_name)?).per_bulb_current)
    }

    /// Brightness of a circuit's working bulbs, in `[0, 1]`.
    #[wasm_bindgen]
    pub fn bulb_brightness(&self, topology_name: &str) -> Result<f64, JsValue> {
        Ok(self.lab.output(topology(topology_name)?).per_bulb_brightness)
    }

    /// Full view of one circuit as a plain JS object.
    #[wasm_bindgen]
    pub fn view(&self, topology_name: &str) -> Result<JsValue, JsValue> {
        let view = self.lab.view(topology(topology_name)?);
        Ok(serde_wasm_bindgen::to_value(&view)?)
    }

    /// CSS declarations for one bulb; empty when it is dark.
    #[wasm_bindgen]
    pub fn bulb_css(&self, topology_name: &str, id: usize) -> Result<String, JsValue> {
        let topology = topology(topology_name)?;
        let view = self.lab.view(topology);
        let reading = view
            .bulb(BulbId(id))
            .ok_or_else(|| to_js(crate::LabError::BulbNotFound {
                topology,
                id: BulbId(id),
            }))?;
        Ok(bulb_style(reading).map(|s| s.to_css()).unwrap_or_default())
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Resistance of one bulb in ohms.
#[wasm_bindgen]
pub fn bulb_resistance() -> f64 {
    crate::BULB_RESISTANCE
}
