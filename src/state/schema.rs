//! Declarative field schema: the fixed contact group and the per-variant
//! business field groups.
//!
//! Groups are `'static` tables so the wizard can hold references into them
//! without cloning; keys are unique within a group (asserted in tests).

use crate::state::validate::Rule;

/// Input kind for a form field, drives keystroke filtering in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
}

/// Static description of a single form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Pattern rule applied to non-empty values
    pub rule: Option<Rule>,
    pub max_length: Option<usize>,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            rule: None,
            max_length: None,
            required: true,
            placeholder: None,
        }
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Ordered set of fields rendered together; declaration order is also
/// validation order
pub type FieldGroup = [FieldSpec];

/// Look up a field by key within a group
pub fn field_in_group<'a>(group: &'a FieldGroup, key: &str) -> Option<&'a FieldSpec> {
    group.iter().find(|f| f.key == key)
}

/// Contact details collected on the first step
pub const CONTACT_FIELDS: &FieldGroup = &[
    FieldSpec::text("name", "Full Name"),
    FieldSpec::text("position", "Position / Role"),
    FieldSpec {
        kind: FieldKind::Email,
        rule: Some(Rule::Email),
        ..FieldSpec::text("email", "Email Address")
    },
    FieldSpec {
        kind: FieldKind::Tel,
        rule: Some(Rule::UkPhone),
        ..FieldSpec::text("telephone", "Phone Number (UK)")
    },
    FieldSpec {
        kind: FieldKind::Email,
        rule: Some(Rule::Email),
        ..FieldSpec::text("invoiceEmail", "Invoice Email (optional)").optional()
    },
];

const LIMITED_COMPANY_FIELDS: &FieldGroup = &[
    FieldSpec::text("companyName", "Registered Company Name"),
    FieldSpec {
        kind: FieldKind::Number,
        rule: Some(Rule::Digits(8)),
        max_length: Some(8),
        placeholder: Some("8-digit number"),
        ..FieldSpec::text("companyNumber", "Company Number")
    },
    FieldSpec::text("registeredAddress", "Registered Office Address"),
    FieldSpec::text("tradingAddress", "Trading Address (if different)").optional(),
];

const SOLE_TRADER_FIELDS: &FieldGroup = &[
    FieldSpec::text("tradingName", "Trading Name"),
    FieldSpec::text("businessAddress", "Business Address"),
    FieldSpec {
        kind: FieldKind::Number,
        rule: Some(Rule::Digits(10)),
        max_length: Some(10),
        placeholder: Some("10-digit number"),
        ..FieldSpec::text("utrNumber", "UTR Number (optional)").optional()
    },
];

const PARTNERSHIP_FIELDS: &FieldGroup = &[
    FieldSpec::text("partnershipName", "Partnership Name"),
    FieldSpec::text("businessAddress", "Business Address"),
    FieldSpec {
        placeholder: Some("Comma-separated names"),
        ..FieldSpec::text("partnerNames", "Partner Names")
    },
    FieldSpec {
        kind: FieldKind::Number,
        rule: Some(Rule::Digits(10)),
        max_length: Some(10),
        ..FieldSpec::text("utrNumber", "Partnership UTR (optional)").optional()
    },
];

/// Business entity variants; selecting one swaps the variant field group
/// rendered on the details step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessType {
    LimitedCompany,
    SoleTrader,
    Partnership,
}

impl BusinessType {
    pub const ALL: [BusinessType; 3] = [
        BusinessType::LimitedCompany,
        BusinessType::SoleTrader,
        BusinessType::Partnership,
    ];

    /// Stable identifier carried in the outbound record
    pub fn id(self) -> &'static str {
        match self {
            Self::LimitedCompany => "limitedCompany",
            Self::SoleTrader => "soleTrader",
            Self::Partnership => "partnership",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::LimitedCompany => "Limited Company",
            Self::SoleTrader => "Sole Trader",
            Self::Partnership => "Partnership",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::LimitedCompany => "Registered company with Companies House",
            Self::SoleTrader => "Self-employed individual",
            Self::Partnership => "Two or more people in business together",
        }
    }

    /// The field group rendered when this variant is active
    pub fn fields(self) -> &'static FieldGroup {
        match self {
            Self::LimitedCompany => LIMITED_COMPANY_FIELDS,
            Self::SoleTrader => SOLE_TRADER_FIELDS,
            Self::Partnership => PARTNERSHIP_FIELDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_keys(group: &FieldGroup) {
        let mut seen = HashSet::new();
        for field in group {
            assert!(seen.insert(field.key), "duplicate key {}", field.key);
        }
    }

    #[test]
    fn test_contact_group_keys_unique() {
        assert_unique_keys(CONTACT_FIELDS);
    }

    #[test]
    fn test_variant_group_keys_unique() {
        for business_type in BusinessType::ALL {
            assert_unique_keys(business_type.fields());
        }
    }

    #[test]
    fn test_contact_group_order() {
        let keys: Vec<_> = CONTACT_FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            ["name", "position", "email", "telephone", "invoiceEmail"]
        );
    }

    #[test]
    fn test_invoice_email_is_optional() {
        let spec = field_in_group(CONTACT_FIELDS, "invoiceEmail").unwrap();
        assert!(!spec.required);
    }

    #[test]
    fn test_each_variant_has_distinct_fields() {
        let limited = field_in_group(BusinessType::LimitedCompany.fields(), "companyNumber");
        assert!(limited.is_some());
        assert!(field_in_group(BusinessType::SoleTrader.fields(), "companyNumber").is_none());
        assert!(field_in_group(BusinessType::Partnership.fields(), "partnerNames").is_some());
    }

    #[test]
    fn test_company_number_limits() {
        let spec = field_in_group(BusinessType::LimitedCompany.fields(), "companyNumber").unwrap();
        assert_eq!(spec.max_length, Some(8));
        assert_eq!(spec.rule, Some(Rule::Digits(8)));
        assert_eq!(spec.kind, FieldKind::Number);
    }

    #[test]
    fn test_variant_ids_are_stable() {
        let ids: Vec<_> = BusinessType::ALL.iter().map(|b| b.id()).collect();
        assert_eq!(ids, ["limitedCompany", "soleTrader", "partnership"]);
    }

    #[test]
    fn test_field_lookup_miss_returns_none() {
        assert!(field_in_group(CONTACT_FIELDS, "nope").is_none());
    }
}
