//! The deposit record, the only entity BaseLingo persists.

use serde::{Deserialize, Serialize};

/// A principal deposit and the moment it was made.
///
/// Serialized as `{"amount": <number>, "depositedAt": "<ISO-8601>"}`. The
/// timestamp is kept as the exact string that was stored so that a record
/// read back from storage re-serializes byte-for-byte the same way.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepositRecord {
    /// Principal in euros. Not validated; callers sanitize input.
    pub amount: f64,
    #[serde(rename = "depositedAt")]
    pub deposited_at: String,
}

impl DepositRecord {
    pub fn new(amount: f64, deposited_at: impl Into<String>) -> Self {
        Self {
            amount,
            deposited_at: deposited_at.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_timestamp() {
        let record = DepositRecord::new(10.0, "2025-01-01T00:00:00.000Z");
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["amount"], serde_json::json!(10.0));
        assert_eq!(obj["depositedAt"], "2025-01-01T00:00:00.000Z");
    }

    #[test]
    fn parses_integer_amounts() {
        let record: DepositRecord =
            serde_json::from_str(r#"{"amount":10,"depositedAt":"2025-01-01T00:00:00.000Z"}"#)
                .unwrap();
        assert_eq!(record.amount, 10.0);
    }

    #[test]
    fn ignores_unknown_fields() {
        let record: DepositRecord = serde_json::from_str(
            r#"{"amount":2.5,"depositedAt":"t","signature":"0xabc"}"#,
        )
        .unwrap();
        assert_eq!(record, DepositRecord::new(2.5, "t"));
    }

    #[test]
    fn missing_timestamp_is_rejected() {
        assert!(serde_json::from_str::<DepositRecord>(r#"{"amount":1}"#).is_err());
    }
}
