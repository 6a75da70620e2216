use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Health snapshot reported by `/v1/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResult {
    pub status: String,
    /// Number of model schedulers running on the service.
    pub schedulers: u64,
    pub memory: MemoryInfo,
}

/// Memory accounting of the service.
///
/// Only `total` has a fixed meaning. Every other field is kept verbatim in
/// `extra` so new server fields survive a round trip through this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryInfo {
    /// Total memory in bytes.
    pub total: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MemoryInfo {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_memory_fields_pass_through() {
        let raw = r#"{
            "status": "ok",
            "schedulers": 4,
            "memory": { "total": 2048, "processes": 512, "ets": { "tables": 3 } }
        }"#;
        let status: StatusResult = serde_json::from_str(raw).unwrap();
        assert_eq!(status.memory.total, 2048);
        assert_eq!(status.memory.get("processes"), Some(&Value::from(512)));
        assert_eq!(status.memory.extra["ets"]["tables"], 3);
        assert!(status.memory.get("total").is_none());
    }

    #[test]
    fn missing_total_is_rejected() {
        let raw = r#"{"status": "ok", "schedulers": 1, "memory": {"processes": 1}}"#;
        assert!(serde_json::from_str::<StatusResult>(raw).is_err());
    }
}
