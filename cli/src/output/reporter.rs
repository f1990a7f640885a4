//! `TerminalReporter`: Presentation-layer implementation of the reporting ports.
//!
//! Wraps `&OutputContext` and implements `ProgressReporter` and
//! `SummaryReporter` so application services and the push engine can emit
//! events without depending on any presentation type directly.

use std::cell::RefCell;

use indicatif::ProgressBar;

use crate::application::ports::{ProgressReporter, SummaryReporter};
use crate::domain::{PushOutcome, SummaryVerbosity};
use crate::output::{OutputContext, progress, summary};

/// Terminal reporter that wraps an `OutputContext`.
///
/// - `step()` shows the message on a spinner (TTY only, unless disabled)
/// - `warn()` prints `"  ⚠ {message}"` to stderr
/// - `summary()` prints the rendered push summary
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    progress: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self {
            ctx,
            progress: true,
            spinner: RefCell::new(None),
        }
    }

    /// Enable or disable the progress spinner.
    #[must_use]
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        tracing::debug!("{message}");
        if !self.progress || !self.ctx.show_progress() {
            return;
        }
        let mut slot = self.spinner.borrow_mut();
        match slot.as_ref() {
            Some(pb) => pb.set_message(message.to_string()),
            None => *slot = Some(progress::spinner(message)),
        }
    }

    fn warn(&self, message: &str) {
        match self.spinner.borrow().as_ref() {
            Some(pb) => pb.suspend(|| self.ctx.warn(message)),
            None => self.ctx.warn(message),
        }
    }
}

impl SummaryReporter for TerminalReporter<'_> {
    fn summary(&self, caption: &str, outcome: &PushOutcome, verbosity: SummaryVerbosity) {
        self.clear_spinner();
        print!("{}", summary::render(caption, outcome, verbosity, &self.ctx.styles));
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        self.clear_spinner();
    }
}
