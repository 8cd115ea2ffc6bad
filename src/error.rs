//! Error types for the circuit laboratory.
//!
//! The electrical model itself is total and never fails. Everything that can
//! go wrong happens at the boundary where user input is turned into state
//! changes, and is reported through the unified [`LabError`] type.

use thiserror::Error;

use crate::circuit::{BulbId, Topology};

/// Result type alias using [`LabError`].
pub type Result<T> = std::result::Result<T, LabError>;

/// Unified error type for all laboratory operations.
#[derive(Error, Debug)]
pub enum LabError {
    // ============ State Errors ============
    /// Requested bulb count is outside the supported range
    #[error("Bulb count {count} is out of range ({min}..={max})")]
    BulbCountOutOfRange { count: usize, min: usize, max: usize },

    /// Requested source voltage is outside the supported range
    #[error("Source voltage {voltage} V is out of range ({min}..={max} V)")]
    VoltageOutOfRange { voltage: f64, min: f64, max: f64 },

    /// No bulb with the given id in the targeted circuit
    #[error("No bulb with id {id} in the {topology} circuit")]
    BulbNotFound { topology: Topology, id: BulbId },

    /// Two bulbs in one circuit share an id
    #[error("Duplicate bulb id {id}")]
    DuplicateBulb { id: BulbId },

    /// Topology name not recognised
    #[error("Unknown topology '{name}' (expected 'series' or 'parallel')")]
    UnknownTopology { name: String },

    // ============ Command Errors ============
    /// Malformed command line
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    /// Command keyword not recognised
    #[error("Unknown command '{command}' at line {line}")]
    UnknownCommand { command: String, line: usize },

    // ============ I/O Errors ============
    /// Error reading a command script
    #[error("Failed to read script '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error reading command input
    #[error("Input error: {message}")]
    InputError { message: String },

    /// Error writing rendered output
    #[error("Output error: {message}")]
    OutputError { message: String },
}

impl LabError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an unknown command error
    pub fn unknown_command(command: impl Into<String>, line: usize) -> Self {
        Self::UnknownCommand {
            command: command.into(),
            line,
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::OutputError {
            message: message.into(),
        }
    }
}
