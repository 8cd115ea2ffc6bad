//! Rendering collaborators.
//!
//! Nothing here feeds back into the electrical model. Renderers read a
//! [`CircuitView`](crate::lab::CircuitView) and turn it into something a
//! person can look at:
//!
//! - [`style`] - bulb fill and glow derived from brightness
//! - [`flow`] - whether a wire animates and how fast
//! - [`panel`] - a plain-text drawing of both circuits for the CLI

pub mod flow;
pub mod panel;
pub mod style;

pub use flow::{WireFlow, FLOW_THRESHOLD};
pub use panel::{render_controls, render_lab, render_panel};
pub use style::{brightness_to_visual_style, bulb_style, StyleDescriptor};
