// src/config/summary.rs
use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

/// Statistics the server computed for one uploaded CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    // Records stored by older backend revisions may lack any of these
    #[serde(default)]
    pub type_distribution: BTreeMap<String, u64>,
    #[serde(default)]
    pub health_score: Option<f64>,
    #[serde(default)]
    pub avg_temp: Option<f64>,
    #[serde(default)]
    pub avg_pressure: Option<f64>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub avg_flowrate: Option<f64>,
    #[serde(default)]
    pub alerts: Vec<String>,
}

impl AnalysisSummary {
    pub fn is_healthy(&self) -> bool {
        self.health_score.map_or(false, |score| score > 80.0)
    }

    /// Bar chart series, one bar per equipment type in map order.
    pub fn chart_series(&self) -> Vec<(String, f64)> {
        self.type_distribution
            .iter()
            .map(|(category, count)| (category.clone(), *count as f64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_minimal_summary() {
        let summary: AnalysisSummary = serde_json::from_value(json!({
            "type_distribution": {"Pump": 3, "Valve": 5},
            "health_score": 92,
            "avg_temp": 71.25,
            "avg_pressure": 4.04
        }))
        .unwrap();

        assert_eq!(summary.health_score, Some(92.0));
        assert_eq!(summary.avg_temp, Some(71.25));
        assert_eq!(summary.total_count, None);
        assert!(summary.alerts.is_empty());
        assert!(summary.is_healthy());
    }

    #[test]
    fn decodes_full_backend_summary() {
        let summary: AnalysisSummary = serde_json::from_value(json!({
            "total_count": 8,
            "avg_flowrate": 120.5,
            "avg_pressure": 1.2,
            "avg_temp": 95.0,
            "type_distribution": {"Pump": 8},
            "health_score": 60,
            "alerts": ["CRITICAL: 2 units showing overheating (>90°C)"]
        }))
        .unwrap();

        assert_eq!(summary.total_count, Some(8));
        assert_eq!(summary.avg_flowrate, Some(120.5));
        assert_eq!(summary.alerts.len(), 1);
        assert!(!summary.is_healthy());
    }

    #[test]
    fn decodes_summary_saved_before_health_scoring() {
        let summary: AnalysisSummary = serde_json::from_value(json!({
            "total_count": 4,
            "avg_flowrate": 1.0,
            "avg_pressure": 2.0,
            "avg_temp": 50.0,
            "type_distribution": {"Pump": 4}
        }))
        .unwrap();

        assert_eq!(summary.health_score, None);
        assert_eq!(summary.avg_pressure, Some(2.0));
        assert!(!summary.is_healthy());
    }

    #[test]
    fn decodes_empty_summary() {
        let summary: AnalysisSummary = serde_json::from_value(json!({})).unwrap();

        assert!(summary.type_distribution.is_empty());
        assert_eq!(summary.avg_temp, None);
        assert!(summary.chart_series().is_empty());
    }

    #[test]
    fn chart_series_has_one_bar_per_category() {
        let summary: AnalysisSummary = serde_json::from_value(json!({
            "type_distribution": {"Pump": 3, "Valve": 5},
            "health_score": 100,
            "avg_temp": 0.0,
            "avg_pressure": 0.0
        }))
        .unwrap();

        let series = summary.chart_series();
        assert_eq!(series.len(), 2);
        assert!(series.contains(&("Pump".to_string(), 3.0)));
        assert!(series.contains(&("Valve".to_string(), 5.0)));
    }
}
