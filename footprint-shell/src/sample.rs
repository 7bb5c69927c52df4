use chrono::{DateTime, Duration, Utc};

use crate::types::{EmissionRatioResult, EstimationResult, ServiceEstimate};

/// Deterministic daily estimates walking backwards from `start`, one entry
/// per day. Used by tests and by the demo data path when no API is wired.
pub fn generate_estimations(start: DateTime<Utc>, days: usize) -> Vec<EstimationResult> {
    (0..days)
        .map(|i| {
            let drift = i as f64;
            EstimationResult {
                timestamp: start - Duration::days(i as i64),
                service_estimates: vec![
                    ServiceEstimate {
                        cloud_provider: "AWS".into(),
                        account_id: "aws-prod-account".into(),
                        account_name: "aws prod".into(),
                        service_name: "ebs".into(),
                        region: "us-east-1".into(),
                        kilowatt_hours: 25.0 + drift,
                        co2e: 0.005 + drift * 0.000_1,
                        cost: 40.0 + drift,
                        usage_unit: "GB-hours".into(),
                    },
                    ServiceEstimate {
                        cloud_provider: "AWS".into(),
                        account_id: "aws-prod-account".into(),
                        account_name: "aws prod".into(),
                        service_name: "ec2".into(),
                        region: "us-east-1".into(),
                        kilowatt_hours: 120.0 + drift,
                        co2e: 0.024 + drift * 0.000_2,
                        cost: 155.0 + drift,
                        usage_unit: "hours".into(),
                    },
                    ServiceEstimate {
                        cloud_provider: "GCP".into(),
                        account_id: "gcp-analytics".into(),
                        account_name: "gcp analytics".into(),
                        service_name: "computeEngine".into(),
                        region: "us-central1".into(),
                        kilowatt_hours: 60.0 + drift,
                        co2e: 0.009 + drift * 0.000_1,
                        cost: 72.5 + drift,
                        usage_unit: "hours".into(),
                    },
                ],
            }
        })
        .collect()
}

/// Fixed region ratio set mirroring a typical emissions-factor response.
pub fn sample_emission_ratios() -> Vec<EmissionRatioResult> {
    vec![
        EmissionRatioResult {
            region: "us-east-1".into(),
            mt_per_kw_hour: 0.000_415_755,
        },
        EmissionRatioResult {
            region: "us-west-1".into(),
            mt_per_kw_hour: 0.000_204_082,
        },
        EmissionRatioResult {
            region: "us-central1".into(),
            mt_per_kw_hour: 0.000_540_461,
        },
        EmissionRatioResult {
            region: "europe-west1".into(),
            mt_per_kw_hour: 0.000_039_000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generates_one_result_per_day() {
        let start = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
        let estimations = generate_estimations(start, 14);
        assert_eq!(estimations.len(), 14);
        assert_eq!(estimations[0].timestamp, start);
        assert_eq!(estimations[13].timestamp, start - Duration::days(13));
        assert!(estimations
            .iter()
            .all(|d| d.service_estimates.len() == 3));
    }

    #[test]
    fn generation_is_deterministic() {
        let start = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
        assert_eq!(generate_estimations(start, 5), generate_estimations(start, 5));
    }

    #[test]
    fn ratio_set_covers_known_regions() {
        let ratios = sample_emission_ratios();
        assert!(ratios.iter().any(|r| r.region == "us-east-1"));
        assert!(ratios.iter().all(|r| r.mt_per_kw_hour > 0.0));
    }
}
