//! Core types for circuit representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LabError;

/// A stable identifier for a bulb within one circuit.
///
/// Ids are assigned `0..n` whenever the bulb list is rebuilt and are only
/// used to target toggles and as a rendering key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BulbId(pub usize);

impl fmt::Display for BulbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A light bulb in a circuit, possibly burned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bulb {
    pub id: BulbId,
    pub broken: bool,
}

impl Bulb {
    /// Create a new, working bulb.
    pub fn new(id: BulbId) -> Self {
        Self { id, broken: false }
    }

    /// Flip the broken flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.broken = !self.broken;
        self.broken
    }

    /// Build a fresh list of `count` working bulbs with ids `0..count`.
    pub fn fresh_list(count: usize) -> Vec<Bulb> {
        (0..count).map(|i| Bulb::new(BulbId(i))).collect()
    }
}

/// How the bulbs are wired to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// One current path through every bulb
    Series,
    /// One independent branch per bulb
    Parallel,
}

impl Topology {
    /// Both topologies, in display order.
    pub const ALL: [Topology; 2] = [Topology::Series, Topology::Parallel];

    /// Lowercase name, as used by the command language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Series => "series",
            Topology::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = LabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "series" | "s" => Ok(Topology::Series),
            "parallel" | "p" => Ok(Topology::Parallel),
            _ => Err(LabError::UnknownTopology { name: s.to_string() }),
        }
    }
}
