//! Input validation at the collaborator boundary.
//!
//! The model accepts anything; these checks keep the laboratory inside the
//! ranges its controls offer.

use crate::error::{LabError, Result};
use crate::{MAX_BULBS, MAX_VOLTAGE, MIN_BULBS, MIN_VOLTAGE, VOLTAGE_STEP};

use super::CircuitState;

/// Check that a bulb count lies in `MIN_BULBS..=MAX_BULBS`.
pub fn validate_bulb_count(count: usize) -> Result<()> {
    if !(MIN_BULBS..=MAX_BULBS).contains(&count) {
        return Err(LabError::BulbCountOutOfRange {
            count,
            min: MIN_BULBS,
            max: MAX_BULBS,
        });
    }
    Ok(())
}

/// Check a source voltage and snap it to the slider step.
///
/// Returns the voltage that should actually be applied.
pub fn validate_voltage(voltage: f64) -> Result<f64> {
    if !voltage.is_finite() || !(MIN_VOLTAGE..=MAX_VOLTAGE).contains(&voltage) {
        return Err(LabError::VoltageOutOfRange {
            voltage,
            min: MIN_VOLTAGE,
            max: MAX_VOLTAGE,
        });
    }
    let snapped = (voltage / VOLTAGE_STEP).round() * VOLTAGE_STEP;
    Ok(snapped.clamp(MIN_VOLTAGE, MAX_VOLTAGE))
}

/// Validate a whole circuit state.
///
/// Checks:
/// - Bulb count is in range
/// - Source voltage is in range
/// - Bulb ids are unique
pub fn validate_state(state: &CircuitState) -> Result<()> {
    validate_bulb_count(state.bulb_count())?;
    validate_voltage(state.source_voltage)?;

    for (i, bulb) in state.bulbs.iter().enumerate() {
        if state.bulbs[..i].iter().any(|b| b.id == bulb.id) {
            return Err(LabError::DuplicateBulb { id: bulb.id });
        }
    }

    Ok(())
}
