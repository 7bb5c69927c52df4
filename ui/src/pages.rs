use std::rc::Rc;

use chrono::Utc;
use footprint_shell::{
    estimates_to_csv, ratios_for_estimates, FilterOptions, FilterStore, Filters,
};
use leptos::*;

use crate::filter_bar::{
    default_controls, recommendation_controls, FilterBar, FilterConfig,
};
use crate::state::use_app_ctx;

fn csv_data_url(csv: &str) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let encoded: String = js_sys::encode_uri_component(csv).into();
        format!("data:text/csv;charset=utf-8,{}", encoded)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("data:text/csv;charset=utf-8,{}", csv)
    }
}

/// Home page: estimation summary over the shared filter selection.
#[component]
pub fn EmissionsMetricsPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let estimations = ctx.estimations;
    let emission_ratios = ctx.emission_ratios;

    // Catalog is derived once the data arrives and is immutable afterwards;
    // a new catalog resets the selection to page defaults.
    let options = create_memo(move |_| {
        FilterOptions::from_estimates(&estimations.get().data)
    });
    let store = create_rw_signal(FilterStore::new(Filters::from_options(
        &options.get_untracked(),
    )));
    create_effect(move |_| {
        let defaults = Filters::from_options(&options.get());
        store.update(|s| s.replace(defaults));
    });

    let today = Utc::now().date_naive();
    let filtered = create_memo(move |_| {
        store
            .with(|s| s.current())
            .filter_estimates(&estimations.get().data, today)
    });

    let totals = create_memo(move |_| {
        let mut co2e = 0.0;
        let mut kilowatt_hours = 0.0;
        let mut cost = 0.0;
        for day in filtered.get() {
            for estimate in &day.service_estimates {
                co2e += estimate.co2e;
                kilowatt_hours += estimate.kilowatt_hours;
                cost += estimate.cost;
            }
        }
        (co2e, kilowatt_hours, cost)
    });

    let csv_href = create_memo(move |_| csv_data_url(&estimates_to_csv(&filtered.get())));

    // Grid intensity for the regions left in view after filtering.
    let region_ratios = create_memo(move |_| {
        ratios_for_estimates(&emission_ratios.get().data, &filtered.get())
    });

    view! {
        <section class="emissions-page">
            {move || {
                let config = FilterConfig {
                    store,
                    options: Rc::new(options.get()),
                };
                let suffix = view! {
                    <a
                        class="download-link"
                        href=csv_href.get()
                        download="cloud-carbon-footprint.csv"
                    >
                        "Download CSV"
                    </a>
                }
                .into_view();
                view! {
                    <FilterBar config=config components=default_controls() suffix=suffix/>
                }
            }}
            <Show
                when=move || !estimations.get().loading
                fallback=|| view! { <p class="status-note">"Loading estimates..."</p> }
            >
                <div class="summary-cards">
                    <div class="summary-card">
                        <h3>
                            "Total CO2e"
                            <span class="info-icon" data-testid="infoIcon" title="Metric tonnes of carbon dioxide equivalent emitted by the filtered usage">"\u{24D8}"</span>
                        </h3>
                        <span class="metric">{move || format!("{:.3}", totals.get().0)}</span>
                        <span class="unit">"metric tonnes"</span>
                    </div>
                    <div class="summary-card">
                        <h3>"Energy"</h3>
                        <span class="metric">{move || format!("{:.1}", totals.get().1)}</span>
                        <span class="unit">"kilowatt hours"</span>
                    </div>
                    <div class="summary-card">
                        <h3>"Cost"</h3>
                        <span class="metric">{move || format!("${:.2}", totals.get().2)}</span>
                        <span class="unit">"estimated spend"</span>
                    </div>
                </div>
            </Show>
            <Show when=move || !region_ratios.get().is_empty()>
                <div class="intensity-panel">
                    <h3>"Grid carbon intensity"</h3>
                    <ul class="intensity-list">
                        {move || {
                            region_ratios
                                .get()
                                .into_iter()
                                .map(|ratio| {
                                    view! {
                                        <li>
                                            <span class="intensity-region">{ratio.region}</span>
                                            <span class="intensity-value">
                                                {format!("{:.6} mt CO2e / kWh", ratio.mt_per_kw_hour)}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </div>
            </Show>
            {move || {
                estimations.get().error.map(|message| {
                    view! { <p class="status-error">{format!("Failed to load estimates: {}", message)}</p> }
                })
            }}
        </section>
    }
}

/// Savings opportunities, narrowed by provider and account.
#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let ctx = use_app_ctx();
    let recommendations = ctx.recommendations;

    let options = create_memo(move |_| {
        FilterOptions::from_recommendations(&recommendations.get().data)
    });
    let store = create_rw_signal(FilterStore::new(Filters::from_options(
        &options.get_untracked(),
    )));
    create_effect(move |_| {
        let defaults = Filters::from_options(&options.get());
        store.update(|s| s.replace(defaults));
    });

    let filtered = create_memo(move |_| {
        store
            .with(|s| s.current())
            .filter_recommendations(&recommendations.get().data)
    });

    view! {
        <section class="recommendations-page">
            <h2>"Recommendations"</h2>
            {move || {
                let config = FilterConfig {
                    store,
                    options: Rc::new(options.get()),
                };
                view! {
                    <FilterBar config=config components=recommendation_controls()/>
                }
            }}
            <Show
                when=move || !recommendations.get().loading
                fallback=|| view! { <p class="status-note">"Loading recommendations..."</p> }
            >
                <Show
                    when=move || !filtered.get().is_empty()
                    fallback=|| view! { <p class="status-note">"No recommendations for the current selection."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Provider"</th>
                                <th>"Account"</th>
                                <th>"Region"</th>
                                <th>"Recommendation"</th>
                                <th>"Potential CO2e savings"</th>
                                <th>"Potential cost savings"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                filtered
                                    .get()
                                    .into_iter()
                                    .map(|rec| {
                                        view! {
                                            <tr>
                                                <td>{rec.cloud_provider}</td>
                                                <td>{rec.account_name}</td>
                                                <td>{rec.region}</td>
                                                <td>{rec.recommendation_type}</td>
                                                <td>{format!("{:.3}", rec.co2e_savings)}</td>
                                                <td>{format!("${:.2}", rec.cost_savings)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>
            {move || {
                recommendations.get().error.map(|message| {
                    view! { <p class="status-error">{format!("Failed to load recommendations: {}", message)}</p> }
                })
            }}
        </section>
    }
}
