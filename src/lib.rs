//! # Circuitlab Core
//!
//! An educational laboratory comparing series and parallel circuits.
//!
//! A student closes a switch, moves the voltage slider, adds or removes
//! bulbs and burns individual bulbs out, then watches how current, voltage
//! and brightness redistribute in each topology.
//!
//! This library provides:
//! - A pure electrical model of identical bulbs wired in series or parallel
//! - A coordinator owning the mutable laboratory state
//! - Renderers turning model output into glow styles, wire animation and text
//! - A small command language for driving the laboratory from text
//!
//! ## Architecture
//!
//! - [`circuit`] - Bulbs, topologies and per-circuit state
//! - [`model`] - Ohm's law for series and parallel bulb networks
//! - [`lab`] - The [`Lab`] coordinator and its configuration
//! - [`render`] - Visual style, wire flow and text panels
//! - [`command`] - Line-oriented command language
//! - [`session`] - Command stream processing (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! printf 'power series on\ntoggle series 1\n' | circuitlab --bulbs 3 --voltage 12
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCircuitLab } from 'circuitlab_core';
//!
//! const lab = new WasmCircuitLab(3, 12.0);
//! lab.toggle_power("series");
//! lab.total_current("series"); // 1.333...
//! ```
//!
//! ## Electrical Model
//!
//! Every bulb is a 3 Ω resistor. The model is recomputed from scratch on
//! every change and never fails:
//!
//! 1. Series: `I = V / (n * 3)`, and any broken bulb opens the loop
//! 2. Parallel: `I = V * n_working / 3`, and each branch lights independently

pub mod circuit;
pub mod command;
pub mod error;
pub mod lab;
pub mod model;
pub mod render;

#[cfg(feature = "cli")]
pub mod session;

// Re-export main types for convenience
pub use circuit::{Bulb, BulbId, CircuitState, Topology};
pub use error::{LabError, Result};
pub use lab::{CircuitView, Lab, LabConfig};
pub use model::{compute_parallel, compute_series, CircuitOutput, BULB_RESISTANCE};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCircuitLab;

/// Fewest bulbs a circuit may hold
pub const MIN_BULBS: usize = 1;

/// Most bulbs a circuit may hold
pub const MAX_BULBS: usize = 5;

/// Lowest selectable source voltage (volts)
pub const MIN_VOLTAGE: f64 = 1.0;

/// Highest selectable source voltage (volts)
pub const MAX_VOLTAGE: f64 = 24.0;

/// Granularity of the voltage control (volts)
pub const VOLTAGE_STEP: f64 = 0.5;

/// Bulb count of a fresh laboratory
pub const DEFAULT_BULB_COUNT: usize = 3;

/// Source voltage of a fresh laboratory
pub const DEFAULT_VOLTAGE: f64 = 12.0;
