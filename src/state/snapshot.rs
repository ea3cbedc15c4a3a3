//! Accumulated wizard state carried across step transitions.

use std::collections::HashMap;

use crate::state::collections::{PharmacistItem, PharmacyItem};
use crate::state::schema::{BusinessType, FieldGroup};

/// Everything the wizard has accumulated so far: the step cursor, the
/// chosen business variant, field values merged in from visited steps,
/// and copies of the collection editors' item sequences.
///
/// Created empty on mount, discarded on successful submission or reset.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub step_index: usize,
    pub selected_type: Option<BusinessType>,
    field_values: HashMap<String, String>,
    pub pharmacies: Vec<PharmacyItem>,
    pub pharmacists: Vec<PharmacistItem>,
}

impl FormSnapshot {
    /// Merge live field values into the snapshot; later values overwrite
    /// earlier ones for the same key
    pub fn merge_values<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in values {
            self.field_values.insert(key, value);
        }
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.field_values.get(key).map(String::as_str)
    }

    pub fn field_values(&self) -> &HashMap<String, String> {
        &self.field_values
    }

    /// Drop every stored value belonging to `group`; used when switching
    /// business variant so values of the now-inactive group cannot leak
    /// into the submitted record
    pub fn drop_group(&mut self, group: &FieldGroup) {
        for field in group {
            self.field_values.remove(field.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_last_write_wins() {
        let mut snapshot = FormSnapshot::default();
        snapshot.merge_values([("name".to_string(), "Amy".to_string())]);
        snapshot.merge_values([("name".to_string(), "Rory".to_string())]);
        assert_eq!(snapshot.value("name"), Some("Rory"));
    }

    #[test]
    fn test_drop_group_removes_only_that_group() {
        let mut snapshot = FormSnapshot::default();
        snapshot.merge_values([
            ("name".to_string(), "Amy".to_string()),
            ("tradingName".to_string(), "Pond Pharmacy".to_string()),
            ("businessAddress".to_string(), "1 High St".to_string()),
        ]);
        snapshot.drop_group(BusinessType::SoleTrader.fields());
        assert_eq!(snapshot.value("tradingName"), None);
        assert_eq!(snapshot.value("businessAddress"), None);
        assert_eq!(snapshot.value("name"), Some("Amy"));
    }

    #[test]
    fn test_default_snapshot_is_empty() {
        let snapshot = FormSnapshot::default();
        assert_eq!(snapshot.step_index, 0);
        assert!(snapshot.selected_type.is_none());
        assert!(snapshot.field_values().is_empty());
        assert!(snapshot.pharmacies.is_empty());
        assert!(snapshot.pharmacists.is_empty());
    }
}
