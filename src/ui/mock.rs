//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Output mode filtering mirrors the
//! terminal UI, so quiet-mode behaviour can be asserted too.
//!
//! # Example
//!
//! ```
//! use rumdl_config::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking .rumdl.toml");
//! ui.success("No problems found");
//!
//! assert!(ui.messages().contains(&"Checking .rumdl.toml".to_string()));
//! assert!(ui.has_success("No problems"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    reports: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all captured reports.
    pub fn reports(&self) -> &[String] {
        &self.reports
    }

    /// All captured reports joined together.
    pub fn report_text(&self) -> String {
        self.reports.concat()
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success message containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a hint containing `msg` was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.messages.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.successes.push(msg.to_string());
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.warnings.push(msg.to_string());
        }
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.headers.push(title.to_string());
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            self.hints.push(hint.to_string());
        }
    }

    fn report(&mut self, text: &str) {
        self.reports.push(text.to_string());
    }

    fn use_color(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();
        ui.message("Hello");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Oops");
        ui.show_header("MD013");

        assert_eq!(ui.messages(), &["Hello".to_string()]);
        assert!(ui.has_success("Done"));
        assert!(ui.has_warning("Careful"));
        assert!(ui.has_error("Oops"));
        assert_eq!(ui.headers(), &["MD013".to_string()]);
    }

    #[test]
    fn quiet_mode_keeps_errors_and_reports() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("status");
        ui.success("ok");
        ui.error("bad");
        ui.report("{}\n");

        assert!(ui.messages().is_empty());
        assert!(ui.successes().is_empty());
        assert_eq!(ui.errors().len(), 1);
        assert_eq!(ui.report_text(), "{}\n");
    }

    #[test]
    fn hints_need_verbose_mode() {
        let mut ui = MockUI::new();
        ui.show_hint("hidden");
        ui.set_output_mode(OutputMode::Verbose);
        ui.show_hint("shown");

        assert_eq!(ui.hints(), &["shown".to_string()]);
        assert!(ui.has_hint("shown"));
    }

    #[test]
    fn mock_ui_never_uses_color() {
        assert!(!MockUI::new().use_color());
    }
}
