//! Circuit state representation and validation.
//!
//! This module provides the inputs of the electrical model: bulbs, the
//! topology they are wired in, and the per-topology [`CircuitState`] the
//! laboratory mutates in response to user events.

mod state;
mod types;
mod validate;

pub use state::CircuitState;
pub use types::*;
pub use validate::{validate_bulb_count, validate_state, validate_voltage};
