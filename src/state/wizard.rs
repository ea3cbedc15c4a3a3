//! The form-state controller: owns the snapshot and the page currently on
//! screen, and guards every step transition.
//!
//! Transitions run synchronously inside the key-event handler. A step
//! change is two-phase: merge the live values into the snapshot, build the
//! next page, then hydrate it from the snapshot.

use thiserror::Error;

use crate::state::forms::{Step, StepPage};
use crate::state::schema::BusinessType;
use crate::state::snapshot::FormSnapshot;
use crate::state::submission::{assemble, CollectionExports, OutboundRecord, SubmissionKind};

/// Structural precondition blocking a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepGate {
    #[error("Please select a business type")]
    BusinessTypeRequired,
    #[error("Add at least one pharmacy")]
    PharmaciesEmpty,
    #[error("Add at least one pharmacist")]
    PharmacistsEmpty,
}

/// Why a step transition or submission was blocked
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    /// A visible field failed its validators; the field has been focused
    /// and carries the message for inline rendering
    #[error("{message}")]
    Field { key: &'static str, message: String },
    #[error(transparent)]
    Gate(#[from] StepGate),
}

/// State machine over the three wizard steps
#[derive(Debug, Clone)]
pub struct WizardState {
    snapshot: FormSnapshot,
    page: StepPage,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            snapshot: FormSnapshot::default(),
            page: StepPage::build(Step::Contact, None),
        }
    }

    pub fn step(&self) -> Step {
        self.page.step()
    }

    pub fn step_index(&self) -> usize {
        self.snapshot.step_index
    }

    pub fn page(&self) -> &StepPage {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut StepPage {
        &mut self.page
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub fn selected_type(&self) -> Option<BusinessType> {
        self.snapshot.selected_type
    }

    fn merge_live(&mut self) {
        self.snapshot.merge_values(self.page.live_values());
    }

    fn goto(&mut self, step: Step) {
        self.snapshot.step_index = step.index();
        let mut page = StepPage::build(step, self.snapshot.selected_type);
        page.hydrate(&self.snapshot);
        self.page = page;
    }

    /// Advance one step. Guarded: every visible required field must pass,
    /// and leaving the business step requires a chosen variant. On failure
    /// nothing changes except the focused, marked field.
    pub fn next(&mut self) -> Result<(), WizardError> {
        if let Some((key, message)) = self.page.first_invalid() {
            return Err(WizardError::Field { key, message });
        }
        if self.page.step() == Step::Business && self.snapshot.selected_type.is_none() {
            return Err(StepGate::BusinessTypeRequired.into());
        }
        if let Some(next) = self.page.step().next() {
            self.merge_live();
            self.goto(next);
        }
        Ok(())
    }

    /// Step back without a validation gate, keeping the live values
    pub fn prev(&mut self) {
        if let Some(prev) = self.page.step().prev() {
            self.merge_live();
            self.goto(prev);
        }
    }

    /// Choose the business variant. Only meaningful on the business step;
    /// switching away from a previously chosen variant discards that
    /// variant's stored field values.
    pub fn select_type(&mut self, business_type: BusinessType) {
        if self.page.step() != Step::Business {
            return;
        }
        if self.snapshot.selected_type == Some(business_type) {
            return;
        }
        if let Some(old) = self.snapshot.selected_type {
            self.snapshot.drop_group(old.fields());
        }
        self.snapshot.selected_type = Some(business_type);
    }

    /// Copy both editors' item sequences into the snapshot. The editors
    /// report changes to the controller; the controller never reaches into
    /// their internals.
    pub fn sync_collections(&mut self) {
        if let StepPage::Details(page) = &self.page {
            self.snapshot.pharmacies = page.pharmacies.export_items();
            self.snapshot.pharmacists = page.pharmacists.export_items();
        }
    }

    /// Validate the final step, check both collections are non-empty, and
    /// assemble the outbound record. The snapshot is left intact so a
    /// failed transport call can be retried without re-entering data.
    pub fn prepare_submission(
        &mut self,
        application_id: Option<&str>,
    ) -> Result<(SubmissionKind, OutboundRecord), WizardError> {
        if let Some((key, message)) = self.page.first_invalid() {
            return Err(WizardError::Field { key, message });
        }

        let exports = match &self.page {
            StepPage::Details(page) => CollectionExports {
                pharmacies: page.pharmacies.export_items(),
                pharmacists: page.pharmacists.export_items(),
            },
            _ => CollectionExports::default(),
        };
        if exports.pharmacies.is_empty() {
            return Err(StepGate::PharmaciesEmpty.into());
        }
        if exports.pharmacists.is_empty() {
            return Err(StepGate::PharmacistsEmpty.into());
        }

        let live = self.page.live_values();
        self.snapshot.merge_values(live.clone());

        let kind = if application_id.is_some() {
            SubmissionKind::AcceptApplication
        } else {
            SubmissionKind::NewApplication
        };
        let record = assemble(&self.snapshot, &live, exports, application_id);
        Ok((kind, record))
    }
}
