//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Success messages (green)
    pub success: Style,
    /// Warning messages (yellow)
    pub warning: Style,
    /// Bold text, used for sample app captions
    pub bold: Style,
    /// Phase labels in the full summary (italic)
    pub label: Style,
    /// Total elapsed time (cadet blue)
    pub total: Style,
    /// Phase durations (steel blue)
    pub phase: Style,
    /// Buildpack and stack names (burly wood)
    pub detail: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.bold = Style::new().bold();
        self.label = Style::new().italic();
        self.total = Style::new().truecolor(95, 158, 160);
        self.phase = Style::new().truecolor(70, 130, 180);
        self.detail = Style::new().truecolor(222, 184, 135);
    }
}
