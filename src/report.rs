//! Text rendering of policy reports.
//!
//! A report has three parts: a title banner, a Gantt bar of the trace, and
//! the schedule table with an averages footer. `PolicyReport` implements
//! `Display` by writing all three.
//!
//! ```text
//! ----------------------------------------------
//!             First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1   |   2   |   3   |
//! 0	5	8	9
//! ```

use std::fmt::{self, Write};

use crate::models::{ScheduleRow, TimeSlice};
use crate::scheduler::{PolicyReport, ScheduleMetrics};

const HEADERS: [&str; 7] = ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];
const GANTT_CELL: usize = 8;

/// Renders a full report into a string.
pub fn render(report: &PolicyReport) -> String {
    report.to_string()
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_title(f, &self.title)?;
        render_gantt(f, &self.outcome.trace)?;
        render_table(f, &self.outcome.rows, self.metrics.as_ref())
    }
}

/// Writes the title banner.
pub fn render_title<W: Write>(w: &mut W, title: &str) -> fmt::Result {
    let width = title.chars().count();
    let rule = "-".repeat(width * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(width / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt bar and its time axis.
pub fn render_gantt<W: Write>(w: &mut W, trace: &[TimeSlice]) -> fmt::Result {
    writeln!(w, "Gantt schedule")?;
    w.write_char('|')?;
    for slice in trace {
        let pid = slice.pid.to_string();
        let padding = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;
    for (i, slice) in trace.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i + 1 == trace.len() {
            write!(w, "{}", slice.stop)?;
        }
    }
    write!(w, "\n\n")
}

/// Writes the schedule table. Without metrics the footer shows `-`.
pub fn render_table<W: Write>(
    w: &mut W,
    rows: &[ScheduleRow],
    metrics: Option<&ScheduleMetrics>,
) -> fmt::Result {
    writeln!(w, "Schedule table")?;

    let body: Vec<[String; 7]> = rows
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.priority.to_string(),
                r.burst.to_string(),
                r.arrival.to_string(),
                r.wait.to_string(),
                r.turnaround.to_string(),
                r.completion.to_string(),
            ]
        })
        .collect();

    let labels = ["", "", "", "", "Average", "Average", "Throughput"].map(String::from);
    let values = match metrics {
        Some(m) => [
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format!("{:.2}", m.average_wait),
            format!("{:.2}", m.average_turnaround),
            format!("{:.2}/t", m.throughput),
        ],
        None => ["", "", "", "", "-", "-", "-"].map(String::from),
    };

    let mut widths = HEADERS.map(str::len);
    for line in body.iter().chain([&labels, &values]) {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.len());
        }
    }

    let rule = separator(&widths);
    writeln!(w, "{rule}")?;
    write_line(w, &widths, &HEADERS.map(String::from))?;
    writeln!(w, "{rule}")?;
    for line in &body {
        write_line(w, &widths, line)?;
    }
    writeln!(w, "{rule}")?;
    write_line(w, &widths, &labels)?;
    write_line(w, &widths, &values)?;
    writeln!(w, "{rule}")
}

fn separator(widths: &[usize; 7]) -> String {
    let mut s = String::from("+");
    for width in widths {
        s.push_str(&"-".repeat(width + 2));
        s.push('+');
    }
    s
}

fn write_line<W: Write>(w: &mut W, widths: &[usize; 7], cells: &[String; 7]) -> fmt::Result {
    w.write_char('|')?;
    for (width, cell) in widths.iter().copied().zip(cells) {
        write!(w, " {cell:>width$} |")?;
    }
    writeln!(w)
}
