use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::types::{EstimationResult, RecommendationResult};

/// One independently selectable facet of data narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterDimension {
    Timeframe,
    DateRange,
    CloudProviders,
    Accounts,
    Services,
}

impl FilterDimension {
    /// Control order in the filter bar. Adding a dimension here is all the
    /// bar needs; it never enumerates dimensions itself.
    pub fn bar_order() -> &'static [FilterDimension] {
        &[
            FilterDimension::DateRange,
            FilterDimension::CloudProviders,
            FilterDimension::Accounts,
            FilterDimension::Services,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterDimension::Timeframe => "Timeframe",
            FilterDimension::DateRange => "Date Range",
            FilterDimension::CloudProviders => "Cloud Providers",
            FilterDimension::Accounts => "Accounts",
            FilterDimension::Services => "Services",
        }
    }
}

/// A selectable value in a dropdown dimension. Accounts and services are
/// scoped to the provider they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownOption {
    pub key: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,
}

impl DropdownOption {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            cloud_provider: None,
        }
    }

    pub fn scoped(
        key: impl Into<String>,
        name: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            cloud_provider: Some(provider.into()),
        }
    }
}

/// Inclusive date window; an unset bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_set(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

/// The immutable catalog of legal selections per dimension. Built once per
/// page from fetched data; never touched by the UI afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub cloud_providers: Vec<DropdownOption>,
    pub accounts: Vec<DropdownOption>,
    pub services: Vec<DropdownOption>,
}

impl FilterOptions {
    /// Distinct providers, accounts and services present in the estimates,
    /// in first-seen order.
    pub fn from_estimates(estimates: &[EstimationResult]) -> Self {
        let mut options = FilterOptions::default();
        for day in estimates {
            for estimate in &day.service_estimates {
                push_unique(
                    &mut options.cloud_providers,
                    DropdownOption::new(&estimate.cloud_provider, &estimate.cloud_provider),
                );
                push_unique(
                    &mut options.accounts,
                    DropdownOption::scoped(
                        &estimate.account_id,
                        &estimate.account_name,
                        &estimate.cloud_provider,
                    ),
                );
                push_unique(
                    &mut options.services,
                    DropdownOption::scoped(
                        &estimate.service_name,
                        &estimate.service_name,
                        &estimate.cloud_provider,
                    ),
                );
            }
        }
        options
    }

    /// Catalog for the recommendations page, where only providers and
    /// accounts are selectable.
    pub fn from_recommendations(recommendations: &[RecommendationResult]) -> Self {
        let mut options = FilterOptions::default();
        for rec in recommendations {
            push_unique(
                &mut options.cloud_providers,
                DropdownOption::new(&rec.cloud_provider, &rec.cloud_provider),
            );
            push_unique(
                &mut options.accounts,
                DropdownOption::scoped(&rec.account_id, &rec.account_name, &rec.cloud_provider),
            );
        }
        options
    }

    /// Legal values for a dimension; dimensions without a catalog (dates,
    /// timeframe) yield an empty slice rather than an error.
    pub fn options_for(&self, dimension: FilterDimension) -> &[DropdownOption] {
        match dimension {
            FilterDimension::CloudProviders => &self.cloud_providers,
            FilterDimension::Accounts => &self.accounts,
            FilterDimension::Services => &self.services,
            FilterDimension::Timeframe | FilterDimension::DateRange => &[],
        }
    }

    fn contains(&self, dimension: FilterDimension, key: &str) -> bool {
        self.options_for(dimension).iter().any(|o| o.key == key)
    }
}

fn push_unique(list: &mut Vec<DropdownOption>, option: DropdownOption) {
    if !list.iter().any(|o| o.key == option.key) {
        list.push(option);
    }
}

/// Current selection per dimension. The one shared mutable value of the
/// dashboard: every edit consumes the old `Filters` and produces a complete
/// new one, so observers always see whole snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Months back from today when no explicit date range is set.
    pub timeframe_months: u32,
    pub date_range: DateRange,
    pub cloud_providers: Vec<DropdownOption>,
    pub accounts: Vec<DropdownOption>,
    pub services: Vec<DropdownOption>,
}

pub const DEFAULT_TIMEFRAME_MONTHS: u32 = 12;

impl Filters {
    /// Page defaults: everything selected, last 12 months.
    pub fn from_options(options: &FilterOptions) -> Self {
        Self {
            timeframe_months: DEFAULT_TIMEFRAME_MONTHS,
            date_range: DateRange::default(),
            cloud_providers: options.cloud_providers.clone(),
            accounts: options.accounts.clone(),
            services: options.services.clone(),
        }
    }

    /// Picking a preset timeframe clears any custom date range.
    pub fn with_timeframe(mut self, months: u32) -> Self {
        self.timeframe_months = months.max(1);
        self.date_range = DateRange::default();
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    /// Replace the provider selection. Unknown keys are dropped, and the
    /// account/service selections are narrowed to the surviving providers.
    pub fn with_cloud_providers(
        mut self,
        selection: Vec<DropdownOption>,
        options: &FilterOptions,
    ) -> Self {
        self.cloud_providers = retain_known(selection, options, FilterDimension::CloudProviders);
        self.accounts = cascade(&self.cloud_providers, std::mem::take(&mut self.accounts));
        self.services = cascade(&self.cloud_providers, std::mem::take(&mut self.services));
        self
    }

    pub fn with_accounts(mut self, selection: Vec<DropdownOption>, options: &FilterOptions) -> Self {
        self.accounts = retain_known(selection, options, FilterDimension::Accounts);
        self
    }

    pub fn with_services(mut self, selection: Vec<DropdownOption>, options: &FilterOptions) -> Self {
        self.services = retain_known(selection, options, FilterDimension::Services);
        self
    }

    /// The date window actually applied: a custom range if one is set,
    /// otherwise `timeframe_months` back from `today`.
    pub fn active_date_range(&self, today: NaiveDate) -> DateRange {
        if self.date_range.is_set() {
            return self.date_range;
        }
        let start = today
            .checked_sub_months(Months::new(self.timeframe_months))
            .unwrap_or(today);
        DateRange::new(Some(start), Some(today))
    }

    /// Current selection for a dropdown dimension; empty for dimensions
    /// that have no catalog.
    pub fn selection(&self, dimension: FilterDimension) -> &[DropdownOption] {
        match dimension {
            FilterDimension::CloudProviders => &self.cloud_providers,
            FilterDimension::Accounts => &self.accounts,
            FilterDimension::Services => &self.services,
            FilterDimension::Timeframe | FilterDimension::DateRange => &[],
        }
    }

    /// Dimension-dispatched replacement, used by generic dropdown controls.
    pub fn with_selection(
        self,
        dimension: FilterDimension,
        selection: Vec<DropdownOption>,
        options: &FilterOptions,
    ) -> Self {
        match dimension {
            FilterDimension::CloudProviders => self.with_cloud_providers(selection, options),
            FilterDimension::Accounts => self.with_accounts(selection, options),
            FilterDimension::Services => self.with_services(selection, options),
            FilterDimension::Timeframe | FilterDimension::DateRange => self,
        }
    }

    fn selected(&self, dimension: FilterDimension, key: &str) -> bool {
        let selection = match dimension {
            FilterDimension::CloudProviders => &self.cloud_providers,
            FilterDimension::Accounts => &self.accounts,
            FilterDimension::Services => &self.services,
            FilterDimension::Timeframe | FilterDimension::DateRange => return true,
        };
        selection.iter().any(|o| o.key == key)
    }

    /// Narrow daily estimates to the selected window, providers, accounts
    /// and services. Days inside the window are kept even when every one of
    /// their estimates is filtered out, so time axes stay contiguous.
    pub fn filter_estimates(
        &self,
        estimates: &[EstimationResult],
        today: NaiveDate,
    ) -> Vec<EstimationResult> {
        let window = self.active_date_range(today);
        estimates
            .iter()
            .filter(|day| window.contains(day.timestamp.date_naive()))
            .map(|day| EstimationResult {
                timestamp: day.timestamp,
                service_estimates: day
                    .service_estimates
                    .iter()
                    .filter(|e| {
                        self.selected(FilterDimension::CloudProviders, &e.cloud_provider)
                            && self.selected(FilterDimension::Accounts, &e.account_id)
                            && self.selected(FilterDimension::Services, &e.service_name)
                    })
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    pub fn filter_recommendations(
        &self,
        recommendations: &[RecommendationResult],
    ) -> Vec<RecommendationResult> {
        recommendations
            .iter()
            .filter(|r| {
                self.selected(FilterDimension::CloudProviders, &r.cloud_provider)
                    && self.selected(FilterDimension::Accounts, &r.account_id)
            })
            .cloned()
            .collect()
    }
}

fn retain_known(
    selection: Vec<DropdownOption>,
    options: &FilterOptions,
    dimension: FilterDimension,
) -> Vec<DropdownOption> {
    selection
        .into_iter()
        .filter(|o| options.contains(dimension, &o.key))
        .collect()
}

fn cascade(providers: &[DropdownOption], selection: Vec<DropdownOption>) -> Vec<DropdownOption> {
    selection
        .into_iter()
        .filter(|o| match &o.cloud_provider {
            Some(p) => providers.iter().any(|sel| &sel.key == p),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::generate_estimations;
    use chrono::{TimeZone, Utc};

    fn options() -> FilterOptions {
        FilterOptions {
            cloud_providers: vec![
                DropdownOption::new("AWS", "AWS"),
                DropdownOption::new("GCP", "GCP"),
            ],
            accounts: vec![
                DropdownOption::scoped("aws-1", "aws prod", "AWS"),
                DropdownOption::scoped("gcp-1", "gcp prod", "GCP"),
            ],
            services: vec![
                DropdownOption::scoped("ec2", "ec2", "AWS"),
                DropdownOption::scoped("computeEngine", "computeEngine", "GCP"),
            ],
        }
    }

    #[test]
    fn defaults_select_everything() {
        let opts = options();
        let filters = Filters::from_options(&opts);
        assert_eq!(filters.timeframe_months, DEFAULT_TIMEFRAME_MONTHS);
        assert_eq!(filters.cloud_providers.len(), 2);
        assert_eq!(filters.accounts.len(), 2);
        assert_eq!(filters.services.len(), 2);
        assert!(!filters.date_range.is_set());
    }

    #[test]
    fn replacement_preserves_other_dimensions() {
        let opts = options();
        let before = Filters::from_options(&opts);
        let after = before
            .clone()
            .with_services(vec![DropdownOption::scoped("ec2", "ec2", "AWS")], &opts);
        assert_eq!(after.services.len(), 1);
        assert_eq!(after.accounts, before.accounts);
        assert_eq!(after.cloud_providers, before.cloud_providers);
        assert_eq!(after.timeframe_months, before.timeframe_months);
    }

    #[test]
    fn unknown_selections_are_dropped() {
        let opts = options();
        let filters = Filters::from_options(&opts).with_accounts(
            vec![
                DropdownOption::scoped("aws-1", "aws prod", "AWS"),
                DropdownOption::new("not-an-account", "bogus"),
            ],
            &opts,
        );
        assert_eq!(filters.accounts.len(), 1);
        assert_eq!(filters.accounts[0].key, "aws-1");
    }

    #[test]
    fn provider_selection_cascades() {
        let opts = options();
        let filters = Filters::from_options(&opts)
            .with_cloud_providers(vec![DropdownOption::new("AWS", "AWS")], &opts);
        assert_eq!(filters.accounts.len(), 1);
        assert_eq!(filters.accounts[0].key, "aws-1");
        assert_eq!(filters.services.len(), 1);
        assert_eq!(filters.services[0].key, "ec2");
    }

    #[test]
    fn timeframe_clears_custom_range() {
        let opts = options();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 1, 1),
            NaiveDate::from_ymd_opt(2024, 2, 1),
        );
        let filters = Filters::from_options(&opts).with_date_range(range);
        assert!(filters.date_range.is_set());
        let filters = filters.with_timeframe(6);
        assert!(!filters.date_range.is_set());
        assert_eq!(filters.timeframe_months, 6);
    }

    #[test]
    fn options_never_mutated_by_edits() {
        let opts = options();
        let pristine = opts.clone();
        let mut filters = Filters::from_options(&opts);
        filters = filters.with_cloud_providers(vec![DropdownOption::new("GCP", "GCP")], &opts);
        filters = filters.with_accounts(Vec::new(), &opts);
        filters = filters.with_timeframe(3);
        let _ = filters.with_services(vec![DropdownOption::scoped("x", "x", "AWS")], &opts);
        assert_eq!(opts, pristine);
    }

    #[test]
    fn options_for_unknown_dimension_is_empty() {
        let opts = options();
        assert!(opts.options_for(FilterDimension::DateRange).is_empty());
        assert!(opts.options_for(FilterDimension::Timeframe).is_empty());
    }

    #[test]
    fn filters_estimates_by_window_and_selection() {
        let start = Utc.with_ymd_and_hms(2024, 6, 30, 0, 0, 0).unwrap();
        let estimates = generate_estimations(start, 14);
        let opts = FilterOptions::from_estimates(&estimates);
        let today = start.date_naive();

        let all = Filters::from_options(&opts).filter_estimates(&estimates, today);
        assert_eq!(all.len(), 14);

        let aws_only = Filters::from_options(&opts)
            .with_cloud_providers(vec![DropdownOption::new("AWS", "AWS")], &opts)
            .filter_estimates(&estimates, today);
        assert_eq!(aws_only.len(), 14);
        assert!(aws_only
            .iter()
            .flat_map(|d| &d.service_estimates)
            .all(|e| e.cloud_provider == "AWS"));

        let narrow = Filters::from_options(&opts)
            .with_date_range(DateRange::new(
                Some(today - chrono::Duration::days(2)),
                Some(today),
            ))
            .filter_estimates(&estimates, today);
        assert_eq!(narrow.len(), 3);
    }

    #[test]
    fn filters_and_options_roundtrip() {
        let opts = options();
        let json = serde_json::to_string(&opts).unwrap();
        assert!(json.contains("\"cloudProviders\""));
        assert!(json.contains("\"cloudProvider\":\"AWS\""));
        let decoded: FilterOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, opts);

        let filters = Filters::from_options(&opts)
            .with_date_range(DateRange::new(NaiveDate::from_ymd_opt(2024, 1, 1), None));
        let json = serde_json::to_string(&filters).unwrap();
        assert!(json.contains("\"timeframeMonths\""));
        assert!(json.contains("\"dateRange\""));
        let decoded: Filters = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, filters);
    }

    #[test]
    fn bar_order_is_stable() {
        let order = FilterDimension::bar_order().to_vec();
        assert_eq!(
            order,
            vec![
                FilterDimension::DateRange,
                FilterDimension::CloudProviders,
                FilterDimension::Accounts,
                FilterDimension::Services,
            ]
        );
    }
}
