//! Application core logic: key dispatch and the submission flow

use crate::state::{
    AppState, BusinessPage, BusinessSlot, BusinessType, ContactPage, DetailsPage, DetailsSlot,
    NavAction, Page, Severity, StepPage, View, WizardError,
};
use crate::transport::SubmissionApi;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Deferred outcome of a page-local key press. Page handlers run under a
/// mutable borrow of the current page, so anything that needs the whole
/// controller is returned and performed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WizardAction {
    None,
    Prev,
    Next,
    Submit,
    Select(BusinessType),
    /// A collection editor added or removed an item
    CollectionChanged,
}

fn nav_action(action: NavAction) -> WizardAction {
    match action {
        NavAction::Back => WizardAction::Prev,
        NavAction::Next => WizardAction::Next,
        NavAction::Submit => WizardAction::Submit,
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the submission service
    transport: Box<dyn SubmissionApi>,
    /// Existing application id: present only in "accept application" mode
    application_id: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    #[allow(clippy::field_reassign_with_default)]
    pub async fn new(transport: Box<dyn SubmissionApi>, application_id: Option<String>) -> Self {
        let mut state = AppState::default();
        state.transport_connected = transport.check_connection().await;

        Self {
            state,
            transport,
            application_id,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notices are modal: dismiss before anything else
        if self.state.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Wizard => self.handle_wizard_key(key).await,
            View::Submitted => {
                self.handle_submitted_key(key);
                Ok(())
            }
        }
    }

    async fn handle_wizard_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Tab => {
                self.state.wizard.page_mut().next_slot();
                return Ok(());
            }
            KeyCode::BackTab => {
                self.state.wizard.page_mut().prev_slot();
                return Ok(());
            }
            KeyCode::Esc => {
                self.state.wizard.prev();
                return Ok(());
            }
            _ => {}
        }

        let action = match self.state.wizard.page_mut() {
            StepPage::Contact(page) => contact_key(page, key),
            StepPage::Business(page) => business_key(page, key),
            StepPage::Details(page) => details_key(page, key),
        };

        match action {
            WizardAction::None => {}
            WizardAction::Prev => self.state.wizard.prev(),
            WizardAction::Next => self.next_step(),
            WizardAction::Submit => self.submit().await?,
            WizardAction::Select(business_type) => self.state.wizard.select_type(business_type),
            WizardAction::CollectionChanged => self.state.wizard.sync_collections(),
        }
        Ok(())
    }

    fn handle_submitted_key(&mut self, key: KeyEvent) {
        match key.code {
            // start a fresh application
            KeyCode::Enter | KeyCode::Char('n') => self.state.reset_form(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Gated step advance; gate failures surface as a notice, field
    /// failures stay inline on the focused field
    fn next_step(&mut self) {
        match self.state.wizard.next() {
            Ok(()) => {}
            Err(WizardError::Gate(gate)) => self.state.notify(gate.to_string(), Severity::Error),
            Err(WizardError::Field { .. }) => {}
        }
    }

    /// Assemble and send the application, then show the outcome. Transport
    /// failure leaves the whole form intact and resubmittable.
    async fn submit(&mut self) -> Result<()> {
        let prepared = self
            .state
            .wizard
            .prepare_submission(self.application_id.as_deref());
        let (kind, record) = match prepared {
            Ok(prepared) => prepared,
            Err(WizardError::Gate(gate)) => {
                self.state.notify(gate.to_string(), Severity::Error);
                return Ok(());
            }
            Err(WizardError::Field { .. }) => return Ok(()),
        };

        tracing::info!("submitting {} record", kind.as_str());
        match self.transport.submit_application(kind, record).await {
            Ok(reply) => {
                self.state.submission_reference = reply.reference;
                self.state.current_view = View::Submitted;
                self.state.notify("Sent!", Severity::Success);
            }
            Err(err) => {
                tracing::warn!("submission failed: {err:#}");
                self.state.notify("An error occurred", Severity::Error);
            }
        }
        Ok(())
    }
}

fn contact_key(page: &mut ContactPage, key: KeyEvent) -> WizardAction {
    if page.is_nav_focused() {
        match key.code {
            KeyCode::Enter => return nav_action(page.nav.selected_action()),
            KeyCode::Left => page.nav.prev_button(),
            KeyCode::Right => page.nav.next_button(),
            KeyCode::Up => page.prev_slot(),
            KeyCode::Down => page.next_slot(),
            _ => {}
        }
        return WizardAction::None;
    }

    match key.code {
        KeyCode::Char(c) => {
            if let Some(field) = page.focused_field_mut() {
                field.push_char(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(field) = page.focused_field_mut() {
                field.pop_char();
            }
        }
        KeyCode::Enter | KeyCode::Down => page.next_slot(),
        KeyCode::Up => page.prev_slot(),
        _ => {}
    }
    WizardAction::None
}

fn business_key(page: &mut BusinessPage, key: KeyEvent) -> WizardAction {
    match page.focused_slot() {
        BusinessSlot::Cards => match key.code {
            KeyCode::Up | KeyCode::Left => page.highlight_prev(),
            KeyCode::Down | KeyCode::Right => page.highlight_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                return WizardAction::Select(page.highlighted_type());
            }
            _ => {}
        },
        BusinessSlot::Nav => match key.code {
            KeyCode::Enter => return nav_action(page.nav.selected_action()),
            KeyCode::Left => page.nav.prev_button(),
            KeyCode::Right => page.nav.next_button(),
            KeyCode::Up => page.prev_slot(),
            KeyCode::Down => page.next_slot(),
            _ => {}
        },
    }
    WizardAction::None
}

fn details_key(page: &mut DetailsPage, key: KeyEvent) -> WizardAction {
    match page.focused_slot() {
        DetailsSlot::Field(_) => {
            match key.code {
                KeyCode::Char(c) => {
                    if let Some(field) = page.focused_field_mut() {
                        field.push_char(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(field) = page.focused_field_mut() {
                        field.pop_char();
                    }
                }
                KeyCode::Enter | KeyCode::Down => page.next_slot(),
                KeyCode::Up => page.prev_slot(),
                _ => {}
            }
            WizardAction::None
        }
        DetailsSlot::PharmacyInput(_) => match key.code {
            KeyCode::Char(c) => {
                page.pharmacies.push_char(c);
                WizardAction::None
            }
            KeyCode::Backspace => {
                page.pharmacies.pop_char();
                WizardAction::None
            }
            KeyCode::Enter => {
                if page.pharmacies.add_candidate() {
                    WizardAction::CollectionChanged
                } else {
                    WizardAction::None
                }
            }
            KeyCode::Up => {
                page.pharmacies.select_prev();
                WizardAction::None
            }
            KeyCode::Down => {
                page.pharmacies.select_next();
                WizardAction::None
            }
            KeyCode::Delete => {
                if page.pharmacies.remove_selected() {
                    WizardAction::CollectionChanged
                } else {
                    WizardAction::None
                }
            }
            _ => WizardAction::None,
        },
        DetailsSlot::PharmacistInput(_) => match key.code {
            KeyCode::Char(c) => {
                page.pharmacists.push_char(c);
                WizardAction::None
            }
            KeyCode::Backspace => {
                page.pharmacists.pop_char();
                WizardAction::None
            }
            KeyCode::Enter => {
                if page.pharmacists.add_candidate() {
                    WizardAction::CollectionChanged
                } else {
                    WizardAction::None
                }
            }
            KeyCode::Up => {
                page.pharmacists.select_prev();
                WizardAction::None
            }
            KeyCode::Down => {
                page.pharmacists.select_next();
                WizardAction::None
            }
            KeyCode::Delete => {
                if page.pharmacists.remove_selected() {
                    WizardAction::CollectionChanged
                } else {
                    WizardAction::None
                }
            }
            _ => WizardAction::None,
        },
        DetailsSlot::Nav => {
            match key.code {
                KeyCode::Enter => return nav_action(page.nav.selected_action()),
                KeyCode::Left => page.nav.prev_button(),
                KeyCode::Right => page.nav.next_button(),
                KeyCode::Up => page.prev_slot(),
                KeyCode::Down => page.next_slot(),
                _ => {}
            }
            WizardAction::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StepGate, SubmissionKind};
    use crate::transport::{MockSubmissionApi, SubmissionReply};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn offline_mock() -> MockSubmissionApi {
        let mut mock = MockSubmissionApi::new();
        mock.expect_check_connection().returning(|| false);
        mock
    }

    async fn app_with(mock: MockSubmissionApi, application_id: Option<&str>) -> App {
        App::new(Box::new(mock), application_id.map(String::from)).await
    }

    fn set_field(app: &mut App, key: &str, value: &str) {
        let fields = match app.state.wizard.page_mut() {
            StepPage::Contact(p) => &mut p.fields,
            StepPage::Details(p) => &mut p.fields,
            StepPage::Business(_) => panic!("business step has no fields"),
        };
        fields
            .iter_mut()
            .find(|f| f.key() == key)
            .unwrap_or_else(|| panic!("no field {key}"))
            .set_value(value);
    }

    fn to_filled_details(app: &mut App) {
        set_field(app, "name", "Amy Pond");
        set_field(app, "position", "Superintendent");
        set_field(app, "email", "amy@pond.co.uk");
        set_field(app, "telephone", "+447912345678");
        app.state.wizard.next().unwrap();
        app.state.wizard.select_type(BusinessType::SoleTrader);
        app.state.wizard.next().unwrap();
        set_field(app, "tradingName", "Pond Pharmacy");
        set_field(app, "businessAddress", "1 High St");
    }

    fn add_collections(app: &mut App) {
        if let StepPage::Details(page) = app.state.wizard.page_mut() {
            for c in "FA123".chars() {
                page.pharmacies.push_char(c);
            }
            assert!(page.pharmacies.add_candidate());
            for c in "1234567".chars() {
                page.pharmacists.push_char(c);
            }
            page.pharmacists.set_active_input(1);
            for c in "Rory Williams".chars() {
                page.pharmacists.push_char(c);
            }
            assert!(page.pharmacists.add_candidate());
        }
        app.state.wizard.sync_collections();
    }

    mod key_dispatch {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_fills_the_focused_field() {
            let mut app = app_with(offline_mock(), None).await;
            app.handle_key(key(KeyCode::Char('A'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('m'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('y'))).await.unwrap();
            let StepPage::Contact(page) = app.state.wizard.page() else {
                panic!("expected contact page");
            };
            assert_eq!(page.fields[0].value(), "Amy");
        }

        #[tokio::test]
        async fn test_tab_and_backtab_move_focus() {
            let mut app = app_with(offline_mock(), None).await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            let StepPage::Contact(page) = app.state.wizard.page() else {
                panic!("expected contact page");
            };
            assert_eq!(page.focus(), 1);
        }

        #[tokio::test]
        async fn test_enter_on_nav_with_invalid_form_stays_put() {
            let mut app = app_with(offline_mock(), None).await;
            // jump to the nav row and press Next
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.wizard.step_index(), 0);
        }

        #[tokio::test]
        async fn test_space_selects_business_type_without_advancing() {
            let mut app = app_with(offline_mock(), None).await;
            set_field(&mut app, "name", "Amy Pond");
            set_field(&mut app, "position", "Superintendent");
            set_field(&mut app, "email", "amy@pond.co.uk");
            set_field(&mut app, "telephone", "+447912345678");
            app.state.wizard.next().unwrap();

            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(
                app.state.wizard.selected_type(),
                Some(BusinessType::SoleTrader)
            );
            assert_eq!(app.state.wizard.step_index(), 1);
        }

        #[tokio::test]
        async fn test_notice_is_modal_until_dismissed() {
            let mut app = app_with(offline_mock(), None).await;
            app.state.notify("Please select a business type", Severity::Error);
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert!(app.state.has_notices());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.state.has_notices());
        }
    }

    mod submission_flow {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_with_empty_collections_never_calls_transport() {
            let mut mock = offline_mock();
            mock.expect_submit_application().times(0);
            let mut app = app_with(mock, None).await;
            to_filled_details(&mut app);

            app.submit().await.unwrap();

            assert_eq!(app.state.current_view, View::Wizard);
            assert_eq!(
                app.state.current_notice().unwrap().message,
                StepGate::PharmaciesEmpty.to_string()
            );
        }

        #[tokio::test]
        async fn test_successful_submit_shows_confirmation() {
            let mut mock = offline_mock();
            mock.expect_submit_application()
                .withf(|kind, record| {
                    *kind == SubmissionKind::NewApplication
                        && record.fields["businessType"] == "soleTrader"
                        && record.pharmacies.len() == 1
                })
                .times(1)
                .returning(|_, _| {
                    Ok(SubmissionReply {
                        reference: Some("app-901".to_string()),
                    })
                });
            let mut app = app_with(mock, None).await;
            to_filled_details(&mut app);
            add_collections(&mut app);

            app.submit().await.unwrap();

            assert_eq!(app.state.current_view, View::Submitted);
            assert_eq!(app.state.submission_reference.as_deref(), Some("app-901"));
            assert_eq!(app.state.current_notice().unwrap().severity, Severity::Success);
        }

        #[tokio::test]
        async fn test_transport_failure_keeps_form_resubmittable() {
            let mut mock = offline_mock();
            mock.expect_submit_application()
                .times(2)
                .returning(|_, _| Err(anyhow::anyhow!("connection reset")));
            let mut app = app_with(mock, None).await;
            to_filled_details(&mut app);
            add_collections(&mut app);

            app.submit().await.unwrap();
            assert_eq!(app.state.current_view, View::Wizard);
            assert_eq!(app.state.current_notice().unwrap().message, "An error occurred");
            assert_eq!(
                app.state.wizard.snapshot().value("name"),
                Some("Amy Pond")
            );

            // nothing was lost: a retry goes straight back out
            app.state.dismiss_notice();
            app.submit().await.unwrap();
        }

        #[tokio::test]
        async fn test_accept_mode_sends_accept_kind_and_id() {
            let mut mock = offline_mock();
            mock.expect_submit_application()
                .withf(|kind, record| {
                    *kind == SubmissionKind::AcceptApplication && record.fields["id"] == "app-42"
                })
                .times(1)
                .returning(|_, _| Ok(SubmissionReply::default()));
            let mut app = app_with(mock, Some("app-42")).await;
            to_filled_details(&mut app);
            add_collections(&mut app);

            app.submit().await.unwrap();
            assert_eq!(app.state.current_view, View::Submitted);
        }

        #[tokio::test]
        async fn test_enter_after_confirmation_starts_fresh_form() {
            let mut mock = offline_mock();
            mock.expect_submit_application()
                .returning(|_, _| Ok(SubmissionReply::default()));
            let mut app = app_with(mock, None).await;
            to_filled_details(&mut app);
            add_collections(&mut app);
            app.submit().await.unwrap();

            // dismiss the success notice, then restart
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Wizard);
            assert_eq!(app.state.wizard.step_index(), 0);
            assert!(app.state.wizard.snapshot().field_values().is_empty());
        }
    }

    mod collection_keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_enter_in_editor_adds_and_syncs() {
            let mut app = app_with(offline_mock(), None).await;
            to_filled_details(&mut app);

            if let StepPage::Details(page) = app.state.wizard.page_mut() {
                let slot = page.pharmacy_slot(0);
                page.set_focus(slot);
            }
            for c in "fa123".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.wizard.snapshot().pharmacies.len(), 1);
            assert_eq!(app.state.wizard.snapshot().pharmacies[0].ods_code, "FA123");
        }

        #[tokio::test]
        async fn test_failed_add_does_not_sync_or_grow() {
            let mut app = app_with(offline_mock(), None).await;
            to_filled_details(&mut app);

            if let StepPage::Details(page) = app.state.wizard.page_mut() {
                let slot = page.pharmacy_slot(0);
                page.set_focus(slot);
            }
            for c in "F1".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.wizard.snapshot().pharmacies.is_empty());
            if let StepPage::Details(page) = app.state.wizard.page_mut() {
                assert_eq!(page.pharmacies.count(), 0);
                assert!(page.pharmacies.error().is_some());
            }
        }

        #[tokio::test]
        async fn test_delete_removes_selected_item() {
            let mut app = app_with(offline_mock(), None).await;
            to_filled_details(&mut app);
            add_collections(&mut app);

            if let StepPage::Details(page) = app.state.wizard.page_mut() {
                let slot = page.pharmacy_slot(0);
                page.set_focus(slot);
            }
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Delete)).await.unwrap();

            assert!(app.state.wizard.snapshot().pharmacies.is_empty());
        }
    }
}
