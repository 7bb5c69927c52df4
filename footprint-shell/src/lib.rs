pub mod export;
pub mod filters;
pub mod routes;
pub mod sample;
pub mod store;
pub mod types;
pub mod viewport;

pub use export::estimates_to_csv;
pub use filters::{
    DateRange, DropdownOption, FilterDimension, FilterOptions, Filters,
};
pub use routes::{Page, Route, RouteTable};
pub use sample::{generate_estimations, sample_emission_ratios};
pub use store::{FilterStore, SubscriptionId};
pub use types::{
    ratios_for_estimates, EmissionRatioResult, EstimationResult, RecommendationResult,
    ServiceEstimate, ServiceResult,
};
pub use viewport::{ViewportGate, ViewportObserver, MIN_SUPPORTED_WIDTH_PX};
