//! Push summary rendering.
//!
//! `quiet` renders nothing, `short` a single line, `full` the total plus
//! every phase, the buildpack and the stack, followed by a blank line.

use std::fmt::Write as _;

use owo_colors::OwoColorize as _;

use crate::domain::{Phase, PushOutcome, SummaryVerbosity, humanize};
use crate::output::Styles;

/// Width of the right-aligned label column in the full summary.
const LABEL_WIDTH: usize = 16;

/// Render the summary of a successful push.
#[must_use]
pub fn render(
    caption: &str,
    outcome: &PushOutcome,
    verbosity: SummaryVerbosity,
    styles: &Styles,
) -> String {
    let headline = format!(
        "{} pushed {} sample app in {}",
        "Successfully".style(styles.success),
        caption.style(styles.bold),
        humanize(outcome.elapsed).style(styles.total),
    );

    match verbosity {
        SummaryVerbosity::Quiet => String::new(),
        SummaryVerbosity::Short => format!("{headline}.\n"),
        SummaryVerbosity::Full => {
            let mut out = format!("{headline}:\n");
            for phase in Phase::ALL {
                let value = humanize(outcome.phases.get(phase));
                push_row(&mut out, phase.label(), &value.style(styles.phase), styles);
            }
            push_row(&mut out, "buildpack", &outcome.buildpack.style(styles.detail), styles);
            push_row(&mut out, "stack", &outcome.stack.style(styles.detail), styles);
            out.push('\n');
            out
        }
    }
}

fn push_row(out: &mut String, label: &str, value: &impl std::fmt::Display, styles: &Styles) {
    let padding = LABEL_WIDTH.saturating_sub(label.len());
    let _ = writeln!(
        out,
        "{:padding$}{}: {value}",
        "",
        label.style(styles.label),
    );
}
