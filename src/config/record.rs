// src/config/record.rs
use serde::{Serialize, Deserialize};
use super::AnalysisSummary;

pub type RecordId = u64;

/// One analyzed upload as the server lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub id: RecordId,
    pub file_name: String,
    pub date: String,
    pub summary: AnalysisSummary,
}

impl UploadRecord {
    pub fn report_file_name(&self) -> String {
        report_file_name(self.id)
    }
}

pub fn report_file_name(id: RecordId) -> String {
    format!("Report_{}.pdf", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_history_listing() {
        let history: Vec<UploadRecord> = serde_json::from_value(json!([
            {
                "id": 7,
                "file_name": "plant_a.csv",
                "date": "2026-01-12 09:30",
                "summary": {
                    "type_distribution": {"Pump": 2},
                    "health_score": 100,
                    "avg_temp": 60.0,
                    "avg_pressure": 3.0
                }
            }
        ]))
        .unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].file_name, "plant_a.csv");
        assert_eq!(history[0].report_file_name(), "Report_7.pdf");
    }

    #[test]
    fn listing_mixes_legacy_and_current_records() {
        let body = json!([
            {
                "id": 1,
                "file_name": "legacy.csv",
                "date": "2025-11-02 16:40",
                "summary": {
                    "total_count": 4,
                    "avg_flowrate": 1.0,
                    "avg_pressure": 2.0,
                    "avg_temp": 50.0,
                    "type_distribution": {"Pump": 4}
                }
            },
            {
                "id": 2,
                "file_name": "current.csv",
                "date": "2026-01-12 09:30",
                "summary": {
                    "total_count": 2,
                    "avg_flowrate": 3.0,
                    "avg_pressure": 4.0,
                    "avg_temp": 60.0,
                    "type_distribution": {"Valve": 2},
                    "health_score": 95,
                    "alerts": ["All systems operational"]
                }
            }
        ])
        .to_string();

        let history: Vec<UploadRecord> = serde_json::from_slice(body.as_bytes()).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].summary.health_score, None);
        assert_eq!(history[1].summary.health_score, Some(95.0));
    }
}
