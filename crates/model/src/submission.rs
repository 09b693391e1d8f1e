//! Algorithm submission summaries as returned by the Prosperity API.

use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// A lightweight description of one submitted algorithm.
///
/// Only the identifier and the submission timestamp are interpreted here;
/// everything else the API returns is carried through untouched for the
/// downstream renderer.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AlgorithmSummary {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_fields_are_carried_through() {
        let raw = serde_json::json!({
            "id": "9d6e7b2a",
            "timestamp": "2024-04-12T14:05:11.000Z",
            "fileName": "trader.py",
            "status": "FINISHED",
            "selectedForRound": false,
        });

        let summary: AlgorithmSummary = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(summary.id, "9d6e7b2a");
        assert_eq!(
            summary.timestamp,
            "2024-04-12T14:05:11Z".parse::<DateTime<Utc>>().unwrap()
        );
        assert_eq!(summary.extra["fileName"], "trader.py");

        // Round-tripping keeps the opaque fields intact.
        assert_eq!(serde_json::to_value(&summary).unwrap()["status"], "FINISHED");
    }
}
