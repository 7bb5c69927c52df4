use crate::types::EstimationResult;

const HEADER: &str =
    "date,cloudProvider,accountName,serviceName,region,kilowattHours,co2e,cost";

/// Flatten daily estimates into CSV for the filter bar's download action.
pub fn estimates_to_csv(estimates: &[EstimationResult]) -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for day in estimates {
        let date = day.timestamp.format("%Y-%m-%d").to_string();
        for estimate in &day.service_estimates {
            let line = [
                escape_csv(&date),
                escape_csv(&estimate.cloud_provider),
                escape_csv(&estimate.account_name),
                escape_csv(&estimate.service_name),
                escape_csv(&estimate.region),
                format!("{:.4}", estimate.kilowatt_hours),
                format!("{:.6}", estimate.co2e),
                format!("{:.2}", estimate.cost),
            ]
            .join(",");
            csv.push_str(&line);
            csv.push('\n');
        }
    }
    csv
}

fn escape_csv(value: &str) -> String {
    let needs_quotes = value.contains(',') || value.contains('"') || value.contains('\n');
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
