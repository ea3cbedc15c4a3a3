//! Pure field validators.
//!
//! Every validator maps a raw string to `None` (valid) or a single error
//! message. Composition short-circuits: the required check runs first and
//! pattern rules only see non-empty values.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::state::schema::FieldSpec;

const REQUIRED_MESSAGE: &str = "Required";

static ODS_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z]{2,3}\d{2,3}$").expect("ODS code pattern is valid")
});

static UK_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|\+?44)[17]\d{8,9}$").expect("UK phone pattern is valid")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Pattern rule referenced from a [`FieldSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Exactly `n` ASCII digits
    Digits(usize),
    OdsCode,
    UkPhone,
    Email,
}

impl Rule {
    /// Apply the rule to a non-empty, trimmed value
    pub fn check(self, value: &str) -> Option<String> {
        match self {
            Rule::Digits(n) => digits(n, value),
            Rule::OdsCode => ods_code(value),
            Rule::UkPhone => uk_phone(value),
            Rule::Email => email(value),
        }
    }
}

/// Non-empty after trimming
pub fn required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(REQUIRED_MESSAGE.to_string())
    } else {
        None
    }
}

/// Exactly `n` ASCII digits
pub fn digits(n: usize, value: &str) -> Option<String> {
    if value.len() == n && value.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        Some(format!("Must be exactly {n} digits"))
    }
}

/// ODS site code: 2-3 letters followed by 2-3 digits, case-insensitive
pub fn ods_code(value: &str) -> Option<String> {
    if ODS_CODE.is_match(value) {
        None
    } else {
        Some("Format: 2-3 letters + 2-3 digits (e.g., FA123)".to_string())
    }
}

/// UK phone number; spaces are stripped before matching
pub fn uk_phone(value: &str) -> Option<String> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if UK_PHONE.is_match(&compact) {
        None
    } else {
        Some("Enter a valid UK phone number".to_string())
    }
}

pub fn email(value: &str) -> Option<String> {
    if EMAIL.is_match(value) {
        None
    } else {
        Some("Enter a valid email address".to_string())
    }
}

/// Validate a raw value against a field spec: required first, then the
/// pattern rule. Optional fields left empty always pass.
pub fn validate_field(spec: &FieldSpec, raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return if spec.required { required(value) } else { None };
    }
    spec.rule.and_then(|rule| rule.check(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::schema::{field_in_group, BusinessType, CONTACT_FIELDS};

    mod single_validators {
        use super::*;

        #[test]
        fn test_required_rejects_blank() {
            assert!(required("").is_some());
            assert!(required("   ").is_some());
            assert!(required("x").is_none());
        }

        #[test]
        fn test_digits_exact_length() {
            assert!(digits(7, "1234567").is_none());
            assert_eq!(
                digits(7, "12345").as_deref(),
                Some("Must be exactly 7 digits")
            );
            assert!(digits(7, "12345678").is_some());
            assert!(digits(7, "123456a").is_some());
        }

        #[test]
        fn test_ods_code_shapes() {
            assert!(ods_code("FA123").is_none());
            assert!(ods_code("fa123").is_none());
            assert!(ods_code("ABC12").is_none());
            assert!(ods_code("F1").is_some());
            assert!(ods_code("FA1234").is_some());
            assert!(ods_code("1A123").is_some());
        }

        #[test]
        fn test_uk_phone_accepts_mobile_and_strips_spaces() {
            assert!(uk_phone("+447912345678").is_none());
            assert!(uk_phone("07912 345 678").is_none());
            assert!(uk_phone("441onefake").is_some());
        }

        #[test]
        fn test_uk_phone_rejects_bad_prefix() {
            // 10 digits but 02 is not a recognised prefix
            assert!(uk_phone("0207123456").is_some());
        }

        #[test]
        fn test_email_shape() {
            assert!(email("a@b.co").is_none());
            assert!(email("not-an-email").is_some());
            assert!(email("a @b.co").is_some());
        }
    }

    mod field_composition {
        use super::*;

        #[test]
        fn test_required_field_empty_fails() {
            let spec = field_in_group(CONTACT_FIELDS, "name").unwrap();
            assert_eq!(validate_field(spec, "").as_deref(), Some("Required"));
        }

        #[test]
        fn test_optional_field_empty_passes() {
            let spec = field_in_group(CONTACT_FIELDS, "invoiceEmail").unwrap();
            assert!(validate_field(spec, "").is_none());
            assert!(validate_field(spec, "  ").is_none());
        }

        #[test]
        fn test_optional_field_with_value_still_pattern_checked() {
            let spec = field_in_group(CONTACT_FIELDS, "invoiceEmail").unwrap();
            assert!(validate_field(spec, "bad").is_some());
            assert!(validate_field(spec, "billing@example.org").is_none());
        }

        #[test]
        fn test_required_wins_over_pattern() {
            let spec = field_in_group(CONTACT_FIELDS, "telephone").unwrap();
            // A blank phone reports the required message, not the format one
            assert_eq!(validate_field(spec, " ").as_deref(), Some("Required"));
        }

        #[test]
        fn test_company_number_rule() {
            let spec =
                field_in_group(BusinessType::LimitedCompany.fields(), "companyNumber").unwrap();
            assert!(validate_field(spec, "12345678").is_none());
            assert_eq!(
                validate_field(spec, "1234").as_deref(),
                Some("Must be exactly 8 digits")
            );
        }

        #[test]
        fn test_value_is_trimmed_before_rules() {
            let spec = field_in_group(CONTACT_FIELDS, "email").unwrap();
            assert!(validate_field(spec, "  a@b.co  ").is_none());
        }
    }
}
