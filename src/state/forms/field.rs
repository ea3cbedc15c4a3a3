//! Form field value objects

use crate::state::schema::{FieldKind, FieldSpec};
use crate::state::validate::validate_field;

/// A single rendered field: its static spec, the live value being edited,
/// and the last validation failure (cleared on edit)
#[derive(Debug, Clone)]
pub struct FormField {
    pub spec: &'static FieldSpec,
    value: String,
    error: Option<String>,
}

impl FormField {
    pub fn new(spec: &'static FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
            error: None,
        }
    }

    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Trimmed value as stored into the snapshot
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replace the value wholesale (hydration from a snapshot)
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.error = None;
    }

    /// Append a typed character, filtered by field kind and capped by the
    /// spec's max length
    pub fn push_char(&mut self, c: char) {
        if !self.accepts(c) {
            return;
        }
        if let Some(max) = self.spec.max_length {
            if self.value.chars().count() >= max {
                return;
            }
        }
        self.value.push(c);
        self.error = None;
    }

    /// Remove the last character
    pub fn pop_char(&mut self) {
        self.value.pop();
        self.error = None;
    }

    fn accepts(&self, c: char) -> bool {
        match self.spec.kind {
            FieldKind::Text | FieldKind::Email => !c.is_control(),
            FieldKind::Tel => c.is_ascii_digit() || c == '+' || c == ' ',
            FieldKind::Number => c.is_ascii_digit(),
        }
    }

    /// Run the field's validators, remembering the outcome for rendering
    pub fn validate(&mut self) -> Option<&str> {
        self.error = validate_field(self.spec, &self.value);
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::schema::{field_in_group, BusinessType, CONTACT_FIELDS};

    fn field(key: &str) -> FormField {
        FormField::new(field_in_group(CONTACT_FIELDS, key).unwrap())
    }

    #[test]
    fn test_push_and_pop() {
        let mut f = field("name");
        f.push_char('J');
        f.push_char('o');
        assert_eq!(f.value(), "Jo");
        f.pop_char();
        assert_eq!(f.value(), "J");
    }

    #[test]
    fn test_number_field_rejects_letters() {
        let spec = field_in_group(BusinessType::LimitedCompany.fields(), "companyNumber").unwrap();
        let mut f = FormField::new(spec);
        f.push_char('1');
        f.push_char('x');
        f.push_char('2');
        assert_eq!(f.value(), "12");
    }

    #[test]
    fn test_max_length_is_enforced() {
        let spec = field_in_group(BusinessType::LimitedCompany.fields(), "companyNumber").unwrap();
        let mut f = FormField::new(spec);
        for c in "123456789".chars() {
            f.push_char(c);
        }
        assert_eq!(f.value(), "12345678");
    }

    #[test]
    fn test_tel_field_accepts_plus_and_spaces() {
        let mut f = field("telephone");
        for c in "+44 7912".chars() {
            f.push_char(c);
        }
        assert_eq!(f.value(), "+44 7912");
    }

    #[test]
    fn test_validate_records_error_and_edit_clears_it() {
        let mut f = field("email");
        f.set_value("nope");
        assert!(f.validate().is_some());
        assert!(f.error().is_some());
        f.push_char('x');
        assert!(f.error().is_none());
    }

    #[test]
    fn test_required_empty_fails_validation() {
        let mut f = field("name");
        assert_eq!(f.validate(), Some("Required"));
    }

    #[test]
    fn test_optional_empty_passes_validation() {
        let mut f = field("invoiceEmail");
        assert!(f.validate().is_none());
    }
}
