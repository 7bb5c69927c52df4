use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One service's share of a day's footprint estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEstimate {
    pub cloud_provider: String,
    pub account_id: String,
    pub account_name: String,
    pub service_name: String,
    pub region: String,
    pub kilowatt_hours: f64,
    /// Metric tonnes of CO2 equivalent.
    pub co2e: f64,
    pub cost: f64,
    pub usage_unit: String,
}

/// One day of estimates across all accounts and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub timestamp: DateTime<Utc>,
    pub service_estimates: Vec<ServiceEstimate>,
}

/// Grid carbon intensity for a cloud region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionRatioResult {
    pub region: String,
    pub mt_per_kw_hour: f64,
}

/// A rightsizing/termination suggestion with its projected savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub cloud_provider: String,
    pub account_id: String,
    pub account_name: String,
    pub region: String,
    pub recommendation_type: String,
    pub recommendation_detail: String,
    pub kilowatt_hour_savings: f64,
    pub co2e_savings: f64,
    pub cost_savings: f64,
}

/// Envelope for an in-flight or completed fetch from the data layer.
/// `loading == true` means `data` is not yet meaningful; a completed fetch
/// that failed carries the message in `error` and empty data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResult<T> {
    pub loading: bool,
    pub data: Vec<T>,
    pub error: Option<String>,
}

impl<T> ServiceResult<T> {
    pub fn pending() -> Self {
        Self {
            loading: true,
            data: Vec::new(),
            error: None,
        }
    }

    pub fn ready(data: Vec<T>) -> Self {
        Self {
            loading: false,
            data,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            loading: false,
            data: Vec::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

impl<T> Default for ServiceResult<T> {
    fn default() -> Self {
        Self::pending()
    }
}

/// Ratios for the regions that actually appear in the estimates, in
/// first-seen order. Regions without a published ratio are skipped.
pub fn ratios_for_estimates(
    ratios: &[EmissionRatioResult],
    estimates: &[EstimationResult],
) -> Vec<EmissionRatioResult> {
    let mut matched: Vec<EmissionRatioResult> = Vec::new();
    for day in estimates {
        for estimate in &day.service_estimates {
            if matched.iter().any(|r| r.region == estimate.region) {
                continue;
            }
            if let Some(ratio) = ratios.iter().find(|r| r.region == estimate.region) {
                matched.push(ratio.clone());
            }
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn estimation_roundtrip() {
        let result = EstimationResult {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            service_estimates: vec![ServiceEstimate {
                cloud_provider: "AWS".into(),
                account_id: "1234567890".into(),
                account_name: "prod".into(),
                service_name: "ec2".into(),
                region: "us-east-1".into(),
                kilowatt_hours: 120.5,
                co2e: 0.034,
                cost: 88.2,
                usage_unit: "hours".into(),
            }],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"cloudProvider\":\"AWS\""));
        let decoded: EstimationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn ratios_follow_estimate_regions() {
        let estimate = |region: &str| ServiceEstimate {
            cloud_provider: "AWS".into(),
            account_id: "1234567890".into(),
            account_name: "prod".into(),
            service_name: "ec2".into(),
            region: region.into(),
            kilowatt_hours: 1.0,
            co2e: 0.001,
            cost: 1.0,
            usage_unit: "hours".into(),
        };
        let estimates = vec![EstimationResult {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            service_estimates: vec![
                estimate("us-east-1"),
                estimate("nowhere-1"),
                estimate("us-east-1"),
            ],
        }];
        let ratios = vec![
            EmissionRatioResult {
                region: "eu-west-1".into(),
                mt_per_kw_hour: 0.000_316,
            },
            EmissionRatioResult {
                region: "us-east-1".into(),
                mt_per_kw_hour: 0.000_415,
            },
        ];

        let matched = ratios_for_estimates(&ratios, &estimates);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].region, "us-east-1");

        assert!(ratios_for_estimates(&ratios, &[]).is_empty());
    }

    #[test]
    fn emission_ratio_roundtrip() {
        let ratio = EmissionRatioResult {
            region: "eu-west-1".into(),
            mt_per_kw_hour: 0.000_316,
        };
        let json = serde_json::to_string(&ratio).unwrap();
        assert!(json.contains("\"mtPerKwHour\""));
        let decoded: EmissionRatioResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, ratio);
    }

    #[test]
    fn recommendation_roundtrip() {
        let rec = RecommendationResult {
            cloud_provider: "AWS".into(),
            account_id: "1234567890".into(),
            account_name: "prod".into(),
            region: "us-east-1".into(),
            recommendation_type: "Modify".into(),
            recommendation_detail: "Downsize m5.xlarge to m5.large".into(),
            kilowatt_hour_savings: 42.0,
            co2e_savings: 0.012,
            cost_savings: 31.5,
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"recommendationType\""));
        assert!(json.contains("\"co2eSavings\""));
        let decoded: RecommendationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, rec);
    }

    #[test]
    fn service_result_states() {
        let pending: ServiceResult<EmissionRatioResult> = ServiceResult::pending();
        assert!(pending.loading);
        assert!(!pending.is_ready());

        let ready = ServiceResult::ready(vec![EmissionRatioResult {
            region: "us-west-1".into(),
            mt_per_kw_hour: 0.000_19,
        }]);
        assert!(ready.is_ready());
        assert_eq!(ready.data.len(), 1);

        let failed: ServiceResult<RecommendationResult> = ServiceResult::failed("upstream 503");
        assert!(!failed.loading);
        assert_eq!(failed.error.as_deref(), Some("upstream 503"));
        assert!(failed.data.is_empty());
    }
}
