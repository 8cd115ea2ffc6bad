//! Parsed commands and their effect on a [`Lab`].

use crate::circuit::{BulbId, Topology};
use crate::error::Result;
use crate::lab::Lab;

/// How a `bulbs` command changes the bulb count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountChange {
    /// Set an explicit count
    Set(usize),
    /// One more bulb
    Increment,
    /// One fewer bulb
    Decrement,
}

/// A single command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Toggle the switch, or force it on/off
    Power {
        topology: Topology,
        state: Option<bool>,
    },
    /// Change the bulb count of both circuits
    Bulbs(CountChange),
    /// Break or repair one bulb
    Toggle { topology: Topology, id: BulbId },
    /// Set the shared source voltage
    Voltage(f64),
    /// Render one or both circuits
    Show(Option<Topology>),
    /// List the available commands
    Help,
    /// End the session
    Quit,
}

/// What the front-end should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// State changed; redraw
    Changed,
    /// Nothing changed (a saturated +/-, a repeated count)
    Unchanged,
    /// Draw the requested circuits
    Show(Option<Topology>),
    /// Print usage
    Help,
    /// Stop reading commands
    Quit,
}

impl Command {
    /// Apply this command to a laboratory.
    pub fn apply(&self, lab: &mut Lab) -> Result<Outcome> {
        match *self {
            Command::Power { topology, state } => {
                let changed = match state {
                    Some(on) => lab.set_power(topology, on),
                    None => {
                        lab.toggle_power(topology);
                        true
                    }
                };
                Ok(if changed {
                    Outcome::Changed
                } else {
                    Outcome::Unchanged
                })
            }
            Command::Bulbs(change) => {
                let changed = match change {
                    CountChange::Set(count) => {
                        let before = lab.bulb_count();
                        lab.set_bulb_count(count)?;
                        before != count
                    }
                    CountChange::Increment => lab.add_bulb(),
                    CountChange::Decrement => lab.remove_bulb(),
                };
                Ok(if changed {
                    Outcome::Changed
                } else {
                    Outcome::Unchanged
                })
            }
            Command::Toggle { topology, id } => {
                lab.toggle_bulb(topology, id)?;
                Ok(Outcome::Changed)
            }
            Command::Voltage(volts) => {
                let before = lab.source_voltage();
                let applied = lab.set_voltage(volts)?;
                Ok(if applied == before {
                    Outcome::Unchanged
                } else {
                    Outcome::Changed
                })
            }
            Command::Show(topology) => Ok(Outcome::Show(topology)),
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
        }
    }
}
