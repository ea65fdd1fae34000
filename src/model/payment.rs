//! Revenue statistics

use serde::{Deserialize, Serialize};

/// Bucket size for payment statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatPeriod {
    Day,
    #[default]
    Month,
    Year,
}

impl StatPeriod {
    /// Path segment used by the statistic endpoint
    pub fn as_path(&self) -> &'static str {
        match self {
            StatPeriod::Day => "day",
            StatPeriod::Month => "month",
            StatPeriod::Year => "year",
        }
    }

    pub fn next(&self) -> StatPeriod {
        match self {
            StatPeriod::Day => StatPeriod::Month,
            StatPeriod::Month => StatPeriod::Year,
            StatPeriod::Year => StatPeriod::Day,
        }
    }
}

/// One aggregated bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    #[serde(rename = "month", alias = "day", alias = "year", alias = "label", default)]
    pub label: String,
    #[serde(default)]
    pub total_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatistic {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl PaymentStatistic {
    /// Buckets as chart-ready integer pairs
    pub fn chart_points(&self) -> Vec<(String, u64)> {
        self.stats
            .iter()
            .map(|s| (s.label.clone(), s.total_amount.max(0.0).round() as u64))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_statistic_accepts_any_bucket_key() {
        let json = r#"{
            "type": "day",
            "totalAmount": 350.5,
            "stats": [{"day": "2024-05-01", "totalAmount": 100}, {"day": "2024-05-02", "totalAmount": 250.5}]
        }"#;
        let stat: PaymentStatistic = serde_json::from_str(json).unwrap();
        assert_eq!(stat.kind, "day");
        assert_eq!(stat.stats[1].label, "2024-05-02");
        assert_eq!(
            stat.chart_points(),
            vec![("2024-05-01".to_string(), 100), ("2024-05-02".to_string(), 251)]
        );
    }

    #[test]
    fn test_period_cycle() {
        assert_eq!(StatPeriod::default().as_path(), "month");
        assert_eq!(StatPeriod::Year.next(), StatPeriod::Day);
    }
}
