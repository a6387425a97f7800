use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Review state of a listed business. Only approved records belong on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Approved,
    #[default]
    Pending,
    Rejected,
}

/// A storage location from the business directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub status: ApprovalStatus,
    #[serde(default)]
    pub small_capacity: u32,
    #[serde(default)]
    pub medium_capacity: u32,
    #[serde(default)]
    pub large_capacity: u32,
}

/// Directories disagree on whether ids are strings or integers; accept both.
fn id_from_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!("expected a string or number id, got {other}"))),
    }
}

impl BusinessRecord {
    /// Record with an address and capacities; location and status left at defaults.
    pub fn new(id: impl Into<String>, address: impl Into<String>, small: u32, medium: u32, large: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            address: address.into(),
            latitude: 0.0,
            longitude: 0.0,
            status: ApprovalStatus::Approved,
            small_capacity: small,
            medium_capacity: medium,
            large_capacity: large,
        }
    }

    #[inline]
    pub fn is_approved(&self) -> bool { self.status == ApprovalStatus::Approved }

    #[inline]
    pub fn total_capacity(&self) -> u64 {
        self.small_capacity as u64 + self.medium_capacity as u64 + self.large_capacity as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_camel_case_with_defaults() {
        let record: BusinessRecord = serde_json::from_str(r#"{
            "id": "b-1",
            "address": "서울 강남구",
            "status": "approved",
            "smallCapacity": 4,
            "largeCapacity": 1
        }"#).unwrap();

        assert_eq!(record.address, "서울 강남구");
        assert!(record.is_approved());
        assert_eq!((record.small_capacity, record.medium_capacity, record.large_capacity), (4, 0, 1));
        assert_eq!(record.total_capacity(), 5);
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let records: Vec<BusinessRecord> = serde_json::from_str(r#"[
            {"id": 1, "address": "부산 해운대구"},
            {"id": "b-2"}
        ]"#).unwrap();
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "b-2");

        assert!(serde_json::from_str::<BusinessRecord>(r#"{"id": null}"#).is_err());
    }

    #[test]
    fn status_defaults_to_pending() {
        let record: BusinessRecord = serde_json::from_str(r#"{"id": "b-2"}"#).unwrap();
        assert_eq!(record.status, ApprovalStatus::Pending);
        assert!(!record.is_approved());
    }
}
