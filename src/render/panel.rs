//! Plain-text circuit panels for terminals.

use crate::circuit::Topology;
use crate::lab::{CircuitView, Lab};
use crate::model::BulbReading;

use super::flow::WireFlow;

/// Heading of a circuit panel.
pub fn title(topology: Topology) -> &'static str {
    match topology {
        Topology::Series => "Series circuit",
        Topology::Parallel => "Parallel circuit",
    }
}

/// One-sentence explanation shown under the heading.
pub fn description(topology: Topology) -> &'static str {
    match topology {
        Topology::Series => {
            "Current has only one path. If a bulb burns out the circuit opens and every bulb goes dark."
        }
        Topology::Parallel => {
            "Current splits into several paths. If a bulb burns out the others stay lit."
        }
    }
}

fn wire(flow: WireFlow) -> &'static str {
    if flow.flowing {
        "~~>"
    } else {
        "---"
    }
}

fn bulb_cell(reading: &BulbReading) -> String {
    let glyph = if reading.broken {
        "[x]".to_string()
    } else if reading.lit {
        format!("({:.0}%)", reading.brightness * 100.0)
    } else {
        "( )".to_string()
    };
    format!("{}:{}", reading.id, glyph)
}

fn switch_cell(on: bool) -> &'static str {
    if on {
        "[ON]"
    } else {
        "[OFF]"
    }
}

/// Render one circuit as a few lines of text.
pub fn render_panel(view: &CircuitView) -> String {
    let trunk = WireFlow::trunk(&view.output);
    let mut diagram = vec!["[+|-]".to_string(), wire(trunk).to_string()];

    match view.topology {
        Topology::Series => {
            for reading in &view.bulbs {
                diagram.push(bulb_cell(reading));
                diagram.push(wire(trunk).to_string());
            }
        }
        Topology::Parallel => {
            let branches: Vec<String> = view
                .bulbs
                .iter()
                .map(|reading| {
                    let branch = wire(WireFlow::branch(&view.output, reading));
                    format!("{}{}", branch, bulb_cell(reading))
                })
                .collect();
            diagram.push(format!("{{ {} }}", branches.join(" | ")));
            diagram.push(wire(trunk).to_string());
        }
    }
    diagram.push(switch_cell(view.power_on).to_string());

    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", title(view.topology)));
    out.push_str(description(view.topology));
    out.push('\n');
    out.push_str(&diagram.join(" "));
    out.push('\n');
    out.push_str(&format!(
        "Voltage: {:.2} V | Current: {:.2} A | Per bulb: {:.2} A\n",
        view.output.total_voltage, view.output.total_current, view.output.per_bulb_current
    ));
    out
}

/// The shared control line: bulb count and source voltage.
pub fn render_controls(lab: &Lab) -> String {
    format!(
        "Bulbs: {} | Voltage: {:.1} V\n",
        lab.bulb_count(),
        lab.source_voltage()
    )
}

/// Render both circuits followed by the shared controls.
pub fn render_lab(lab: &Lab) -> String {
    let mut out = String::new();
    for topology in Topology::ALL {
        out.push_str(&render_panel(&lab.view(topology)));
        out.push('\n');
    }
    out.push_str(&render_controls(lab));
    out
}
