//! Assembly of the outbound submission record.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::state::collections::{PharmacistItem, PharmacyItem};
use crate::state::snapshot::FormSnapshot;

/// Which kind of submission the transport collaborator receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    NewApplication,
    AcceptApplication,
}

impl SubmissionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewApplication => "new-application",
            Self::AcceptApplication => "accept-application",
        }
    }
}

/// Snapshot copies of both collections, taken at submit time via
/// `export_items`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionExports {
    pub pharmacies: Vec<PharmacyItem>,
    pub pharmacists: Vec<PharmacistItem>,
}

/// The single flat record handed to the transport collaborator: scalar
/// fields plus the two nested item arrays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundRecord {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    pub pharmacies: Vec<PharmacyItem>,
    pub pharmacists: Vec<PharmacistItem>,
}

/// Merge the three value sources into one record. Precedence, lowest to
/// highest: values stored in the snapshot from earlier steps, values live
/// in the currently rendered step, then the externally supplied
/// application id (accept mode only).
pub fn assemble(
    snapshot: &FormSnapshot,
    live_values: &[(String, String)],
    exports: CollectionExports,
    application_id: Option<&str>,
) -> OutboundRecord {
    let mut fields: BTreeMap<String, String> = snapshot
        .field_values()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    for (key, value) in live_values {
        fields.insert(key.clone(), value.clone());
    }

    if let Some(business_type) = snapshot.selected_type {
        fields.insert("businessType".to_string(), business_type.id().to_string());
    }

    if let Some(id) = application_id {
        fields.insert("id".to_string(), id.to_string());
    }

    OutboundRecord {
        fields,
        pharmacies: exports.pharmacies,
        pharmacists: exports.pharmacists,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::schema::BusinessType;
    use pretty_assertions::assert_eq;

    fn snapshot_with(values: &[(&str, &str)]) -> FormSnapshot {
        let mut snapshot = FormSnapshot::default();
        snapshot.merge_values(
            values
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        );
        snapshot
    }

    #[test]
    fn test_live_values_override_snapshot_values() {
        let snapshot = snapshot_with(&[("name", "Old Name"), ("email", "old@x.co")]);
        let live = vec![("name".to_string(), "New Name".to_string())];
        let record = assemble(&snapshot, &live, CollectionExports::default(), None);
        assert_eq!(record.fields["name"], "New Name");
        assert_eq!(record.fields["email"], "old@x.co");
    }

    #[test]
    fn test_application_id_has_highest_precedence() {
        let snapshot = snapshot_with(&[("id", "stale")]);
        let record = assemble(&snapshot, &[], CollectionExports::default(), Some("app-7"));
        assert_eq!(record.fields["id"], "app-7");
    }

    #[test]
    fn test_no_id_key_in_create_mode() {
        let snapshot = snapshot_with(&[("name", "Amy")]);
        let record = assemble(&snapshot, &[], CollectionExports::default(), None);
        assert!(!record.fields.contains_key("id"));
    }

    #[test]
    fn test_business_type_id_is_included() {
        let mut snapshot = snapshot_with(&[]);
        snapshot.selected_type = Some(BusinessType::Partnership);
        let record = assemble(&snapshot, &[], CollectionExports::default(), None);
        assert_eq!(record.fields["businessType"], "partnership");
    }

    #[test]
    fn test_collections_flatten_under_stable_names() {
        let exports = CollectionExports {
            pharmacies: vec![PharmacyItem {
                ods_code: "FA123".to_string(),
            }],
            pharmacists: vec![PharmacistItem {
                gphc_number: "1234567".to_string(),
                full_name: "Amy Pond".to_string(),
            }],
        };
        let record = assemble(&snapshot_with(&[("name", "Amy")]), &[], exports, None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Amy");
        assert_eq!(json["pharmacies"][0]["odsCode"], "FA123");
        assert_eq!(json["pharmacists"][0]["gphcNumber"], "1234567");
        assert_eq!(json["pharmacists"][0]["fullName"], "Amy Pond");
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(SubmissionKind::NewApplication.as_str(), "new-application");
        assert_eq!(
            SubmissionKind::AcceptApplication.as_str(),
            "accept-application"
        );
    }
}
