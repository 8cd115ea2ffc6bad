//! Parser for the command language.

use std::str::SplitWhitespace;

use super::ast::{Command, CountChange};
use crate::circuit::{BulbId, Topology};
use crate::error::{LabError, Result};

/// Parser for one command line.
pub struct Parser<'a> {
    words: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over a single line (comments already stripped).
    pub fn new(text: &'a str, line: usize) -> Self {
        Self {
            words: text.split_whitespace(),
            line,
        }
    }

    /// Parse the line. Returns `None` for a blank line.
    pub fn parse(&mut self) -> Result<Option<Command>> {
        let Some(keyword) = self.words.next() else {
            return Ok(None);
        };

        let command = match keyword.to_lowercase().as_str() {
            "power" => {
                let topology = self.expect_topology()?;
                let state = match self.words.next() {
                    None => None,
                    Some(word) => Some(self.parse_on_off(word)?),
                };
                Command::Power { topology, state }
            }
            "bulbs" => {
                let word = self.expect_word("bulb count")?;
                let change = match word {
                    "+" => CountChange::Increment,
                    "-" => CountChange::Decrement,
                    _ => CountChange::Set(self.parse_usize(word, "bulb count")?),
                };
                Command::Bulbs(change)
            }
            "toggle" => {
                let topology = self.expect_topology()?;
                let word = self.expect_word("bulb id")?;
                let id = BulbId(self.parse_usize(word, "bulb id")?);
                Command::Toggle { topology, id }
            }
            "voltage" => {
                let word = self.expect_word("voltage")?;
                let volts = word.trim_end_matches(['v', 'V']).parse::<f64>().map_err(|_| {
                    LabError::parse(self.line, format!("invalid voltage '{}'", word))
                })?;
                // Unit may also follow as its own word: `voltage 12 V`
                if matches!(self.words.clone().next(), Some("v" | "V")) {
                    self.words.next();
                }
                Command::Voltage(volts)
            }
            "show" => {
                let topology = match self.words.next() {
                    None => None,
                    Some(word) => Some(self.parse_topology(word)?),
                };
                Command::Show(topology)
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(LabError::unknown_command(keyword, self.line)),
        };

        if let Some(extra) = self.words.next() {
            return Err(LabError::parse(
                self.line,
                format!("unexpected argument '{}'", extra),
            ));
        }

        Ok(Some(command))
    }

    fn expect_word(&mut self, what: &str) -> Result<&'a str> {
        self.words
            .next()
            .ok_or_else(|| LabError::parse(self.line, format!("missing {}", what)))
    }

    fn expect_topology(&mut self) -> Result<Topology> {
        let word = self.expect_word("topology")?;
        self.parse_topology(word)
    }

    fn parse_topology(&self, word: &str) -> Result<Topology> {
        word.parse::<Topology>()
            .map_err(|e| LabError::parse(self.line, e.to_string()))
    }

    fn parse_usize(&self, word: &str, what: &str) -> Result<usize> {
        word.parse::<usize>()
            .map_err(|_| LabError::parse(self.line, format!("invalid {} '{}'", what, word)))
    }

    fn parse_on_off(&self, word: &str) -> Result<bool> {
        match word.to_lowercase().as_str() {
            "on" => Ok(true),
            "off" => Ok(false),
            _ => Err(LabError::parse(
                self.line,
                format!("expected 'on' or 'off', got '{}'", word),
            )),
        }
    }
}

/// Remove a trailing `#` or `;` comment.
pub fn strip_comment(line: &str) -> &str {
    match line.find(['#', ';']) {
        Some(idx) => &line[..idx],
        None => line,
    }
}
