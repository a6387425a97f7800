use std::path::Path;

use anyhow::{Context, Result};

use crate::types::BusinessRecord;

/// Read business records from a JSON file holding an array of records.
pub fn read_businesses_from_json(path: &Path) -> Result<Vec<BusinessRecord>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("[io::json] Failed to read {}", path.display()))?;
    read_businesses_from_json_bytes(&bytes)
        .with_context(|| format!("[io::json] Failed to load businesses from {}", path.display()))
}

/// Parse business records from JSON bytes (camelCase fields).
pub fn read_businesses_from_json_bytes(bytes: &[u8]) -> Result<Vec<BusinessRecord>> {
    let records: Vec<BusinessRecord> = serde_json::from_slice(bytes)
        .context("[io::json] Failed to parse business records")?;
    tracing::debug!(records = records.len(), "[io::json] businesses loaded");
    Ok(records)
}

/// Keep only approved records; unapproved listings never reach the map.
pub fn approved_only(records: Vec<BusinessRecord>) -> Vec<BusinessRecord> {
    let total = records.len();
    let approved = records.into_iter().filter(BusinessRecord::is_approved).collect::<Vec<_>>();
    if approved.len() < total {
        tracing::debug!(removed = total - approved.len(), "[io::json] unapproved businesses filtered out");
    }
    approved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApprovalStatus;

    const SAMPLE: &str = r#"[
        {"id": "1", "name": "Hongdae Lockers", "address": "서울 마포구", "latitude": 37.55, "longitude": 126.92,
         "status": "approved", "smallCapacity": 10, "mediumCapacity": 5, "largeCapacity": 2},
        {"id": "2", "name": "Seomyeon Storage", "address": "부산 부산진구", "status": "pending", "smallCapacity": 3},
        {"id": "3", "address": "제주 제주시", "status": "rejected"}
    ]"#;

    #[test]
    fn parses_records() {
        let records = read_businesses_from_json_bytes(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Hongdae Lockers");
        assert_eq!(records[0].large_capacity, 2);
        assert_eq!(records[1].status, ApprovalStatus::Pending);
        assert_eq!(records[2].small_capacity, 0);
    }

    #[test]
    fn filters_unapproved() {
        let records = approved_only(read_businesses_from_json_bytes(SAMPLE.as_bytes()).unwrap());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(read_businesses_from_json_bytes(b"{\"id\": 1}").is_err());
    }
}
