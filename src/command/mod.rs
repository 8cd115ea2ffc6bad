//! Command language for driving a laboratory from text.
//!
//! Each line is one user event: the same things a person does by clicking a
//! switch, a bulb or the +/- buttons, or by moving the voltage slider.
//!
//! # Grammar Overview
//!
//! ```text
//! script    = { line }
//! line      = [ command ] [ comment ]
//! comment   = ('#' | ';') { any_char }
//! command   = "power" topology [ "on" | "off" ]
//!           | "bulbs" ( count | "+" | "-" )
//!           | "toggle" topology id
//!           | "voltage" number [ "V" ]       (unit attached or separate)
//!           | "show" [ topology ]
//!           | "help" | "quit"
//! topology  = "series" | "s" | "parallel" | "p"
//! ```
//!
//! Keywords are case-insensitive.
//!
//! # Example
//!
//! ```text
//! # Burn out the middle bulb of each circuit
//! power series on
//! power parallel on
//! toggle series 1
//! toggle parallel 1
//! voltage 9 V
//! ```

mod ast;
mod parser;

pub use ast::{Command, CountChange, Outcome};
pub use parser::{strip_comment, Parser};

use crate::error::Result;

/// Usage text for the `help` command.
pub const HELP: &str = "\
power <series|parallel> [on|off]   toggle or set a switch
bulbs <1-5|+|->                    change the number of bulbs
toggle <series|parallel> <id>      burn out or repair a bulb
voltage <1-24>                     set the source voltage (0.5 V steps)
show [series|parallel]             draw the circuits
help                               this text
quit                               leave
";

/// Parse one line (1-based `line` number for error messages).
///
/// Returns `None` for blank and comment-only lines.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Command>> {
    Parser::new(strip_comment(text), line).parse()
}

/// Parse a whole script, stopping at the first error.
pub fn parse(script: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (idx, text) in script.lines().enumerate() {
        if let Some(command) = parse_line(text, idx + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parse a script file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<Vec<Command>> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::LabError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse(&content)
}
