//! Interactive session for the CLI frontend.
//!
//! Reads command lines from any buffered reader (stdin or a script), applies
//! them to a [`Lab`] and writes the redrawn circuits to any writer.

use std::io::{BufRead, ErrorKind, Write};

use log::{info, warn};
use serde::Serialize;
use serde_json::json;

use crate::circuit::Topology;
use crate::command::{parse_line, Outcome, HELP};
use crate::error::{LabError, Result};
use crate::lab::Lab;
use crate::render::{render_controls, render_lab, render_panel};

/// How the session draws the laboratory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain-text panels
    #[default]
    Text,
    /// One JSON object per line: a lab snapshot on every redraw, or an
    /// `{"error", "line"}` / `{"help"}` object
    Json,
}

/// Counters reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Lines that parsed and applied successfully
    pub applied: usize,
    /// Lines that failed to parse or were rejected by the lab
    pub rejected: usize,
}

/// Drives a [`Lab`] from a stream of command lines.
pub struct Session<W: Write> {
    output: W,
    format: OutputFormat,
    stats: SessionStats,
}

impl<W: Write> Session<W> {
    /// Create a session writing to `output`.
    pub fn new(output: W, format: OutputFormat) -> Self {
        Self {
            output,
            format,
            stats: SessionStats::default(),
        }
    }

    /// Apply every line of `input` to `lab` until EOF or `quit`.
    ///
    /// Command errors and lines that are not valid UTF-8 are reported on the
    /// output and the session continues. Other I/O failures end it early.
    pub fn run<R: BufRead>(&mut self, lab: &mut Lab, input: R) -> Result<SessionStats> {
        self.draw(lab, None)?;

        for (idx, line) in input.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.reject(idx + 1, &LabError::parse(idx + 1, e.to_string()))?;
                    continue;
                }
                Err(e) => {
                    return Err(LabError::InputError {
                        message: e.to_string(),
                    })
                }
            };

            let outcome = parse_line(&line, idx + 1).and_then(|command| match command {
                Some(command) => command.apply(lab).map(Some),
                None => Ok(None),
            });

            match outcome {
                Ok(None) => {}
                Ok(Some(outcome)) => {
                    self.stats.applied += 1;
                    match outcome {
                        Outcome::Changed => self.draw(lab, None)?,
                        Outcome::Unchanged => {}
                        Outcome::Show(topology) => self.draw(lab, topology)?,
                        Outcome::Help => self.help()?,
                        Outcome::Quit => break,
                    }
                }
                Err(e) => self.reject(idx + 1, &e)?,
            }
        }

        self.output
            .flush()
            .map_err(|e| LabError::output(e.to_string()))?;
        info!(
            "session ended: {} commands applied, {} rejected",
            self.stats.applied, self.stats.rejected
        );
        Ok(self.stats)
    }

    /// Counters so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Consume the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    // JSON mode always emits the full snapshot so every line has one shape.
    fn draw(&mut self, lab: &Lab, topology: Option<Topology>) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let text = match topology {
                    Some(t) => format!("{}{}", render_panel(&lab.view(t)), render_controls(lab)),
                    None => render_lab(lab),
                };
                self.write(&text)?;
                self.write("\n")
            }
            OutputFormat::Json => self.write_json(&lab.snapshot()),
        }
    }

    fn help(&mut self) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write(HELP),
            OutputFormat::Json => self.write_json(&json!({ "help": HELP })),
        }
    }

    fn reject(&mut self, line: usize, error: &LabError) -> Result<()> {
        self.stats.rejected += 1;
        warn!("line {}: {}", line, error);
        match self.format {
            OutputFormat::Text => self.write(&format!("error: {}\n", error)),
            OutputFormat::Json => self.write_json(&json!({
                "error": error.to_string(),
                "line": line,
            })),
        }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let json = serde_json::to_string(value).map_err(|e| LabError::output(e.to_string()))?;
        self.write(&json)?;
        self.write("\n")
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .map_err(|e| LabError::output(e.to_string()))
    }
}

/// Run a session over `input`, writing to `output`.
pub fn run_session<R: BufRead, W: Write>(
    lab: &mut Lab,
    input: R,
    output: W,
    format: OutputFormat,
) -> Result<SessionStats> {
    Session::new(output, format).run(lab, input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lab::{LabConfig, LabSnapshot};

    fn run(script: &str, format: OutputFormat) -> (Lab, SessionStats, String) {
        run_bytes(script.as_bytes(), format)
    }

    fn run_bytes(input: &[u8], format: OutputFormat) -> (Lab, SessionStats, String) {
        let mut lab = Lab::new(LabConfig::default()).unwrap();
        let mut session = Session::new(Vec::new(), format);
        let stats = session.run(&mut lab, input).unwrap();
        let text = String::from_utf8(session.into_output()).unwrap();
        (lab, stats, text)
    }

    #[test]
    fn test_script_drives_lab() {
        let (lab, stats, text) = run(
            "power series on\npower parallel on\ntoggle parallel 1\nvoltage 6\n",
            OutputFormat::Text,
        );
        assert_eq!(stats.applied, 4);
        assert_eq!(stats.rejected, 0);
        assert!(lab.power_on(Topology::Series));
        assert!(lab.circuit(Topology::Parallel).bulbs[1].broken);
        assert!(text.contains("Current: 4.00 A | Per bulb: 2.00 A"));
    }

    #[test]
    fn test_errors_are_reported_and_skipped() {
        let (lab, stats, text) = run("bulbs 9\nfrobnicate\nbulbs 2\n", OutputFormat::Text);
        assert_eq!(stats.rejected, 2);
        assert_eq!(stats.applied, 1);
        assert_eq!(lab.bulb_count(), 2);
        assert!(text.contains("error: Bulb count 9 is out of range (1..=5)"));
        assert!(text.contains("error: Unknown command 'frobnicate' at line 2"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let (lab, stats, _) = run("bulbs 4\nquit\nbulbs 1\n", OutputFormat::Text);
        assert_eq!(lab.bulb_count(), 4);
        assert_eq!(stats.applied, 2);
    }

    #[test]
    fn test_help_and_show() {
        let (_, _, text) = run("help\nshow parallel\n", OutputFormat::Text);
        assert!(text.contains("toggle <series|parallel> <id>"));
        assert_eq!(text.matches("== Parallel circuit ==").count(), 2);
        assert_eq!(text.matches("== Series circuit ==").count(), 1);
    }

    #[test]
    fn test_demo_lesson_runs_cleanly() {
        let (lab, stats, _) = run(include_str!("../demos/lesson.lab"), OutputFormat::Text);
        assert_eq!(stats.rejected, 0);
        assert_eq!(lab.bulb_count(), 4);
        assert!((lab.source_voltage() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_json_output_is_one_snapshot_per_line() {
        let (_, _, text) = run("power series on\n", OutputFormat::Json);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let snap: LabSnapshot = serde_json::from_str(lines[1]).unwrap();
        assert!(snap.series.power_on);
        assert_eq!(snap.series.bulbs.len(), 3);
    }

    #[test]
    fn test_json_mode_emits_only_json_objects() {
        let (_, stats, text) = run(
            "help\nfrobnicate\nshow parallel\npower s on\n",
            OutputFormat::Json,
        );
        assert_eq!(stats.rejected, 1);
        let values: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(values.len(), 5);
        assert!(values[1]["help"].as_str().unwrap().contains("voltage"));
        assert_eq!(values[2]["line"], 2);
        assert!(values[2]["error"]
            .as_str()
            .unwrap()
            .contains("frobnicate"));
        // `show <topology>` still draws the whole lab
        let shown: LabSnapshot = serde_json::from_value(values[3].clone()).unwrap();
        assert_eq!(shown.parallel.bulbs.len(), 3);
        let last: LabSnapshot = serde_json::from_value(values[4].clone()).unwrap();
        assert!(last.series.power_on);
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_and_skipped() {
        let (lab, stats, text) = run_bytes(b"power s on\n\xff\xfe\nbulbs 4\n", OutputFormat::Text);
        assert_eq!(stats.applied, 2);
        assert_eq!(stats.rejected, 1);
        assert!(lab.power_on(Topology::Series));
        assert_eq!(lab.bulb_count(), 4);
        assert!(text.contains("error: Parse error at line 2"));
    }
}
