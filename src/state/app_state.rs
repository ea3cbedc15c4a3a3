//! Application state definitions

use crate::state::wizard::WizardState;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Wizard,
    Submitted,
}

/// Notice severity, mapped to colours in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A fire-and-forget notification; the engine never waits on it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub wizard: WizardState,
    /// Queued notices, shown front-first as a dismissable banner
    notices: Vec<Notice>,
    pub transport_connected: bool,
    /// Reference returned by the submission service, shown on the
    /// confirmation view when present
    pub submission_reference: Option<String>,
}

impl AppState {
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notices.push(Notice {
            message: message.into(),
            severity,
        });
    }

    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.first()
    }

    pub fn has_notices(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn dismiss_notice(&mut self) {
        if !self.notices.is_empty() {
            self.notices.remove(0);
        }
    }

    /// Drop everything entered so far and start a fresh application
    pub fn reset_form(&mut self) {
        self.wizard = WizardState::new();
        self.current_view = View::Wizard;
        self.submission_reference = None;
        self.notices.clear();
    }
}
