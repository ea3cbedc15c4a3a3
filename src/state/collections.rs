//! Repeatable collection editors for the details step.
//!
//! One generic engine, [`ListEditor`], owns the candidate input row and the
//! ordered item sequence; the pharmacy and pharmacist editors are schema
//! specializations of it. The parent wizard never reaches inside: it reads
//! through `count`/`export_items` and writes through `import_items`.

use serde::{Deserialize, Serialize};

use crate::state::schema::FieldKind;
use crate::state::validate;

/// Identifies a collection in gate errors and notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionId {
    Pharmacies,
    Pharmacists,
}

impl CollectionId {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pharmacies => "Pharmacies",
            Self::Pharmacists => "Pharmacists",
        }
    }
}

/// Static description of one input in the candidate row
#[derive(Debug, Clone, Copy)]
pub struct CandidateInput {
    pub placeholder: &'static str,
    pub max_length: Option<usize>,
    pub kind: FieldKind,
}

/// First failing rule for a candidate: which input, and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateError {
    pub input: usize,
    pub message: String,
}

/// Item schema implemented by each concrete editor
pub trait ItemSchema {
    type Item: Clone + PartialEq + std::fmt::Debug;

    const ID: CollectionId;
    const INPUTS: &'static [CandidateInput];
    const EMPTY_HINT: &'static str;

    /// Validate the trimmed candidate inputs in fixed order; the first
    /// failure wins. On success, produce the immutable item.
    fn build(raw: &[String]) -> Result<Self::Item, CandidateError>;

    /// Column values shown for an added item row
    fn columns(item: &Self::Item) -> Vec<String>;
}

/// A pharmacy site, keyed by its ODS code (stored uppercased)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacyItem {
    #[serde(rename = "odsCode")]
    pub ods_code: String,
}

/// A pharmacist with their GPhC registration number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacistItem {
    #[serde(rename = "gphcNumber")]
    pub gphc_number: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Clone, Copy)]
pub struct PharmacySchema;

impl ItemSchema for PharmacySchema {
    type Item = PharmacyItem;

    const ID: CollectionId = CollectionId::Pharmacies;
    const INPUTS: &'static [CandidateInput] = &[CandidateInput {
        placeholder: "ODS code (e.g., FA123)",
        max_length: Some(6),
        kind: FieldKind::Text,
    }];
    const EMPTY_HINT: &'static str = "Add pharmacies using their ODS code";

    fn build(raw: &[String]) -> Result<Self::Item, CandidateError> {
        let ods = raw.first().map(String::as_str).unwrap_or_default();
        if let Some(message) = validate::ods_code(ods) {
            return Err(CandidateError { input: 0, message });
        }
        Ok(PharmacyItem {
            ods_code: ods.to_ascii_uppercase(),
        })
    }

    fn columns(item: &Self::Item) -> Vec<String> {
        vec![item.ods_code.clone()]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PharmacistSchema;

impl ItemSchema for PharmacistSchema {
    type Item = PharmacistItem;

    const ID: CollectionId = CollectionId::Pharmacists;
    const INPUTS: &'static [CandidateInput] = &[
        CandidateInput {
            placeholder: "GPhC number",
            max_length: Some(7),
            kind: FieldKind::Number,
        },
        CandidateInput {
            placeholder: "Full name",
            max_length: None,
            kind: FieldKind::Text,
        },
    ];
    const EMPTY_HINT: &'static str = "Add pharmacists with their GPhC number";

    fn build(raw: &[String]) -> Result<Self::Item, CandidateError> {
        let gphc = raw.first().map(String::as_str).unwrap_or_default();
        if let Some(message) = validate::digits(7, gphc) {
            return Err(CandidateError { input: 0, message });
        }
        let name = raw.get(1).map(String::as_str).unwrap_or_default();
        if name.is_empty() {
            return Err(CandidateError {
                input: 1,
                message: "Name required".to_string(),
            });
        }
        Ok(PharmacistItem {
            gphc_number: gphc.to_string(),
            full_name: name.to_string(),
        })
    }

    fn columns(item: &Self::Item) -> Vec<String> {
        vec![item.gphc_number.clone(), item.full_name.clone()]
    }
}

/// Generic repeatable-entry editor: an input row for the next candidate
/// plus the append-only sequence of added items
#[derive(Debug, Clone)]
pub struct ListEditor<S: ItemSchema> {
    inputs: Vec<String>,
    items: Vec<S::Item>,
    active_input: usize,
    selected: Option<usize>,
    error: Option<CandidateError>,
}

impl<S: ItemSchema> Default for ListEditor<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ItemSchema> ListEditor<S> {
    pub fn new() -> Self {
        Self {
            inputs: vec![String::new(); S::INPUTS.len()],
            items: Vec::new(),
            active_input: 0,
            selected: None,
            error: None,
        }
    }

    pub fn input_count(&self) -> usize {
        S::INPUTS.len()
    }

    pub fn active_input(&self) -> usize {
        self.active_input
    }

    pub fn set_active_input(&mut self, index: usize) {
        self.active_input = index.min(S::INPUTS.len() - 1);
    }

    pub fn input_value(&self, index: usize) -> &str {
        self.inputs.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self) -> Option<&CandidateError> {
        self.error.as_ref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Read the candidate input row without mutating state
    pub fn candidate(&self) -> Vec<String> {
        self.inputs.iter().map(|v| v.trim().to_string()).collect()
    }

    /// Validate the candidate; on failure the failing input is marked and
    /// focused so the next render highlights it
    pub fn validate_candidate(&mut self) -> Option<CandidateError> {
        match S::build(&self.candidate()) {
            Ok(_) => {
                self.error = None;
                None
            }
            Err(err) => {
                self.active_input = err.input;
                self.error = Some(err.clone());
                Some(err)
            }
        }
    }

    /// Validate and, if the candidate passes, append it as a new item,
    /// clear the input row, and move focus back to the first input. A
    /// failing candidate leaves the sequence unchanged.
    pub fn add_candidate(&mut self) -> bool {
        match S::build(&self.candidate()) {
            Ok(item) => {
                self.items.push(item);
                for input in &mut self.inputs {
                    input.clear();
                }
                self.active_input = 0;
                self.error = None;
                true
            }
            Err(err) => {
                self.active_input = err.input;
                self.error = Some(err);
                false
            }
        }
    }

    /// Remove exactly one item by position; out-of-range is a no-op and
    /// the order of the remaining items is preserved
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        if self.items.is_empty() {
            self.selected = None;
        } else if let Some(sel) = self.selected {
            self.selected = Some(sel.min(self.items.len() - 1));
        }
        true
    }

    /// Remove the currently highlighted item
    pub fn remove_selected(&mut self) -> bool {
        match self.selected {
            Some(index) => self.remove_item(index),
            None => false,
        }
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    /// Snapshot copy of the item sequence, never the live collection
    pub fn export_items(&self) -> Vec<S::Item> {
        self.items.clone()
    }

    /// Replace the whole sequence with a copy of `items`; an empty slice
    /// resets the editor to its empty state
    pub fn import_items(&mut self, items: &[S::Item]) {
        self.items = items.to_vec();
        self.selected = None;
        self.error = None;
    }

    pub fn push_char(&mut self, c: char) {
        let spec = &S::INPUTS[self.active_input];
        let accepted = match spec.kind {
            FieldKind::Number => c.is_ascii_digit(),
            _ => !c.is_control(),
        };
        if !accepted {
            return;
        }
        let input = &mut self.inputs[self.active_input];
        if let Some(max) = spec.max_length {
            if input.chars().count() >= max {
                return;
            }
        }
        input.push(c);
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        self.inputs[self.active_input].pop();
        self.error = None;
    }
}

/// Concrete editors used by the details step
pub type PharmacyEditor = ListEditor<PharmacySchema>;
pub type PharmacistEditor = ListEditor<PharmacistSchema>;
