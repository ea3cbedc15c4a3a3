//! Per-step page state: the live widgets for the step currently on
//! screen, with focus traversal across fields, collection editors, and
//! the navigation button row.
//!
//! Pages are rebuilt on every step transition and then hydrated from the
//! snapshot in a second phase, once the new page exists.

use crate::state::collections::{PharmacistEditor, PharmacyEditor};
use crate::state::forms::field::FormField;
use crate::state::schema::{BusinessType, CONTACT_FIELDS};
use crate::state::snapshot::FormSnapshot;

/// Wizard step, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Contact,
    Business,
    Details,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Contact, Step::Business, Step::Details];

    pub fn index(self) -> usize {
        match self {
            Self::Contact => 0,
            Self::Business => 1,
            Self::Details => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Contact => "Contact",
            Self::Business => "Business",
            Self::Details => "Details",
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Self::Contact => Some(Self::Business),
            Self::Business => Some(Self::Details),
            Self::Details => None,
        }
    }

    pub fn prev(self) -> Option<Step> {
        match self {
            Self::Contact => None,
            Self::Business => Some(Self::Contact),
            Self::Details => Some(Self::Business),
        }
    }
}

/// Action bound to a button in a step's navigation row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Back,
    Next,
    Submit,
}

impl NavAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Back => "Back",
            Self::Next => "Next",
            Self::Submit => "Submit Application",
        }
    }
}

/// The navigation button row at the bottom of each step
#[derive(Debug, Clone)]
pub struct NavRow {
    pub buttons: &'static [NavAction],
    pub selected: usize,
}

impl NavRow {
    /// Defaults to the last button, the step's primary action
    fn new(buttons: &'static [NavAction]) -> Self {
        Self {
            buttons,
            selected: buttons.len() - 1,
        }
    }

    pub fn next_button(&mut self) {
        self.selected = (self.selected + 1) % self.buttons.len();
    }

    pub fn prev_button(&mut self) {
        if self.selected == 0 {
            self.selected = self.buttons.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_action(&self) -> NavAction {
        self.buttons[self.selected]
    }
}

/// Common focus traversal over a page's slots (fields, editor inputs,
/// nav row), wrapping at either end
pub trait Page {
    fn slot_count(&self) -> usize;
    fn focus(&self) -> usize;
    fn set_focus(&mut self, index: usize);

    fn next_slot(&mut self) {
        let count = self.slot_count();
        self.set_focus((self.focus() + 1) % count);
    }

    fn prev_slot(&mut self) {
        let count = self.slot_count();
        if self.focus() == 0 {
            self.set_focus(count - 1);
        } else {
            self.set_focus(self.focus() - 1);
        }
    }
}

// Contact step: the fixed contact group plus a single Next button
#[derive(Debug, Clone)]
pub struct ContactPage {
    pub fields: Vec<FormField>,
    pub nav: NavRow,
    focus: usize,
}

impl ContactPage {
    pub fn new() -> Self {
        Self {
            fields: CONTACT_FIELDS.iter().map(FormField::new).collect(),
            nav: NavRow::new(&[NavAction::Next]),
            focus: 0,
        }
    }

    pub fn is_nav_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        let focus = self.focus;
        self.fields.get_mut(focus)
    }
}

impl Page for ContactPage {
    fn slot_count(&self) -> usize {
        self.fields.len() + 1
    }
    fn focus(&self) -> usize {
        self.focus
    }
    fn set_focus(&mut self, index: usize) {
        self.focus = index.min(self.slot_count() - 1);
    }
}

/// Focusable regions of the business-type step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessSlot {
    Cards,
    Nav,
}

// Business step: the variant cards plus Back/Next
#[derive(Debug, Clone)]
pub struct BusinessPage {
    pub highlighted: usize,
    pub nav: NavRow,
    focus: usize,
}

impl BusinessPage {
    pub fn new(selected: Option<BusinessType>) -> Self {
        let highlighted = selected
            .and_then(|s| BusinessType::ALL.iter().position(|b| *b == s))
            .unwrap_or(0);
        Self {
            highlighted,
            nav: NavRow::new(&[NavAction::Back, NavAction::Next]),
            focus: 0,
        }
    }

    pub fn focused_slot(&self) -> BusinessSlot {
        if self.focus == 0 {
            BusinessSlot::Cards
        } else {
            BusinessSlot::Nav
        }
    }

    pub fn highlighted_type(&self) -> BusinessType {
        BusinessType::ALL[self.highlighted.min(BusinessType::ALL.len() - 1)]
    }

    pub fn highlight_next(&mut self) {
        if self.highlighted + 1 < BusinessType::ALL.len() {
            self.highlighted += 1;
        }
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }
}

impl Page for BusinessPage {
    fn slot_count(&self) -> usize {
        2
    }
    fn focus(&self) -> usize {
        self.focus
    }
    fn set_focus(&mut self, index: usize) {
        self.focus = index.min(1);
    }
}

/// What a focus index on the details step points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsSlot {
    Field(usize),
    PharmacyInput(usize),
    PharmacistInput(usize),
    Nav,
}

// Details step: the active variant's fields, both collection editors,
// and Back/Submit
#[derive(Debug, Clone)]
pub struct DetailsPage {
    pub fields: Vec<FormField>,
    pub pharmacies: PharmacyEditor,
    pub pharmacists: PharmacistEditor,
    pub nav: NavRow,
    focus: usize,
}

impl DetailsPage {
    pub fn new(selected: Option<BusinessType>) -> Self {
        let fields = selected
            .map(|b| b.fields().iter().map(FormField::new).collect())
            .unwrap_or_default();
        Self {
            fields,
            pharmacies: PharmacyEditor::new(),
            pharmacists: PharmacistEditor::new(),
            nav: NavRow::new(&[NavAction::Back, NavAction::Submit]),
            focus: 0,
        }
    }

    pub fn slot_at(&self, index: usize) -> DetailsSlot {
        let fields = self.fields.len();
        let pharmacy_inputs = self.pharmacies.input_count();
        let pharmacist_inputs = self.pharmacists.input_count();

        if index < fields {
            DetailsSlot::Field(index)
        } else if index < fields + pharmacy_inputs {
            DetailsSlot::PharmacyInput(index - fields)
        } else if index < fields + pharmacy_inputs + pharmacist_inputs {
            DetailsSlot::PharmacistInput(index - fields - pharmacy_inputs)
        } else {
            DetailsSlot::Nav
        }
    }

    pub fn focused_slot(&self) -> DetailsSlot {
        self.slot_at(self.focus)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focused_slot() {
            DetailsSlot::Field(i) => self.fields.get_mut(i),
            _ => None,
        }
    }

    /// Focus index of a pharmacy editor input
    pub fn pharmacy_slot(&self, input: usize) -> usize {
        self.fields.len() + input
    }

    /// Focus index of a pharmacist editor input
    pub fn pharmacist_slot(&self, input: usize) -> usize {
        self.fields.len() + self.pharmacies.input_count() + input
    }
}

impl Page for DetailsPage {
    fn slot_count(&self) -> usize {
        self.fields.len() + self.pharmacies.input_count() + self.pharmacists.input_count() + 1
    }
    fn focus(&self) -> usize {
        self.focus
    }
    fn set_focus(&mut self, index: usize) {
        self.focus = index.min(self.slot_count() - 1);
        // keep the editors' own input focus in step with the page focus
        match self.slot_at(self.focus) {
            DetailsSlot::PharmacyInput(i) => self.pharmacies.set_active_input(i),
            DetailsSlot::PharmacistInput(i) => self.pharmacists.set_active_input(i),
            _ => {}
        }
    }
}

/// The page currently on screen
#[derive(Debug, Clone)]
pub enum StepPage {
    Contact(ContactPage),
    Business(BusinessPage),
    Details(DetailsPage),
}

impl StepPage {
    /// Phase one of a step transition: construct the page's widgets
    pub fn build(step: Step, selected: Option<BusinessType>) -> Self {
        match step {
            Step::Contact => Self::Contact(ContactPage::new()),
            Step::Business => Self::Business(BusinessPage::new(selected)),
            Step::Details => Self::Details(DetailsPage::new(selected)),
        }
    }

    pub fn step(&self) -> Step {
        match self {
            Self::Contact(_) => Step::Contact,
            Self::Business(_) => Step::Business,
            Self::Details(_) => Step::Details,
        }
    }

    /// Phase two: restore previously stored values into the freshly built
    /// widgets. Runs strictly after `build`, never on a timer.
    pub fn hydrate(&mut self, snapshot: &FormSnapshot) {
        match self {
            Self::Contact(page) => {
                for field in &mut page.fields {
                    if let Some(value) = snapshot.value(field.key()) {
                        field.set_value(value);
                    }
                }
            }
            Self::Business(_) => {}
            Self::Details(page) => {
                for field in &mut page.fields {
                    if let Some(value) = snapshot.value(field.key()) {
                        field.set_value(value);
                    }
                }
                page.pharmacies.import_items(&snapshot.pharmacies);
                page.pharmacists.import_items(&snapshot.pharmacists);
            }
        }
    }

    /// Live field values of the rendered step, in declaration order
    pub fn live_values(&self) -> Vec<(String, String)> {
        let fields = match self {
            Self::Contact(page) => &page.fields,
            Self::Business(_) => return Vec::new(),
            Self::Details(page) => &page.fields,
        };
        fields
            .iter()
            .map(|f| (f.key().to_string(), f.trimmed().to_string()))
            .collect()
    }

    /// Validate the step's visible fields in declaration order; the first
    /// failure is recorded on its field, focused, and returned
    pub fn first_invalid(&mut self) -> Option<(&'static str, String)> {
        match self {
            Self::Business(_) => None,
            Self::Contact(page) => {
                let (index, key, message) = first_failure(&mut page.fields)?;
                page.set_focus(index);
                Some((key, message))
            }
            Self::Details(page) => {
                let (index, key, message) = first_failure(&mut page.fields)?;
                page.set_focus(index);
                Some((key, message))
            }
        }
    }

    pub fn next_slot(&mut self) {
        match self {
            Self::Contact(page) => page.next_slot(),
            Self::Business(page) => page.next_slot(),
            Self::Details(page) => page.next_slot(),
        }
    }

    pub fn prev_slot(&mut self) {
        match self {
            Self::Contact(page) => page.prev_slot(),
            Self::Business(page) => page.prev_slot(),
            Self::Details(page) => page.prev_slot(),
        }
    }
}

fn first_failure(fields: &mut [FormField]) -> Option<(usize, &'static str, String)> {
    for (index, field) in fields.iter_mut().enumerate() {
        if let Some(message) = field.validate() {
            let message = message.to_string();
            return Some((index, field.key(), message));
        }
    }
    None
}
