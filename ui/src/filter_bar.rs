use std::rc::Rc;

use chrono::NaiveDate;
use footprint_shell::{DateRange, FilterDimension, FilterOptions, FilterStore, Filters};
use leptos::*;

/// Shared wiring handed identically to every control in the bar: the
/// replace-only filter store and the immutable options catalog. No control
/// gets a narrowed view; each reads only the dimension it owns.
#[derive(Clone)]
pub struct FilterConfig {
    pub store: RwSignal<FilterStore>,
    pub options: Rc<FilterOptions>,
}

impl FilterConfig {
    /// Reactive read of the current selection snapshot.
    pub fn current(&self) -> Filters {
        self.store.with(|s| s.current())
    }

    /// Swap in a complete new selection through the store, notifying every
    /// observer before the next event is processed.
    pub fn replace(&self, next: Filters) {
        self.store.update(|s| s.replace(next));
    }
}

/// Capability interface for one filter widget. Implementations render
/// against the shared config and must never mutate the options catalog.
pub trait FilterControl {
    fn dimension(&self) -> FilterDimension;
    fn render(&self, cfg: &FilterConfig) -> View;
}

/// Date window control: a timeframe preset plus custom start/end dates.
pub struct DateFilter;

/// Multi-select dropdowns over the catalog dimensions.
pub struct CloudProviderFilter;
pub struct AccountFilter;
pub struct ServiceFilter;

impl FilterControl for DateFilter {
    fn dimension(&self) -> FilterDimension {
        FilterDimension::DateRange
    }

    fn render(&self, cfg: &FilterConfig) -> View {
        let read_cfg = cfg.clone();
        let tf_cfg = cfg.clone();
        let start_cfg = cfg.clone();
        let end_cfg = cfg.clone();

        let on_timeframe = move |ev: ev::Event| {
            if let Ok(months) = event_target_value(&ev).parse::<u32>() {
                tf_cfg.replace(tf_cfg.current().with_timeframe(months));
            }
        };
        let on_start = move |ev: ev::Event| {
            let parsed = parse_date(&event_target_value(&ev));
            let current = start_cfg.current();
            let range = DateRange::new(parsed, current.date_range.end);
            start_cfg.replace(current.with_date_range(range));
        };
        let on_end = move |ev: ev::Event| {
            let parsed = parse_date(&event_target_value(&ev));
            let current = end_cfg.current();
            let range = DateRange::new(current.date_range.start, parsed);
            end_cfg.replace(current.with_date_range(range));
        };

        let timeframe = {
            let cfg = read_cfg.clone();
            move || cfg.current().timeframe_months.to_string()
        };
        let start_value = {
            let cfg = read_cfg.clone();
            move || date_value(cfg.current().date_range.start)
        };
        let end_value = move || date_value(read_cfg.current().date_range.end);

        view! {
            <label>"Date Range"</label>
            <div class="date-filter">
                <select on:change=on_timeframe prop:value=timeframe>
                    <option value="1">"Last month"</option>
                    <option value="3">"Last 3 months"</option>
                    <option value="6">"Last 6 months"</option>
                    <option value="12">"Last 12 months"</option>
                </select>
                <input type="date" on:change=on_start prop:value=start_value/>
                <input type="date" on:change=on_end prop:value=end_value/>
            </div>
        }
        .into_view()
    }
}

impl FilterControl for CloudProviderFilter {
    fn dimension(&self) -> FilterDimension {
        FilterDimension::CloudProviders
    }

    fn render(&self, cfg: &FilterConfig) -> View {
        dropdown_view(FilterDimension::CloudProviders, cfg)
    }
}

impl FilterControl for AccountFilter {
    fn dimension(&self) -> FilterDimension {
        FilterDimension::Accounts
    }

    fn render(&self, cfg: &FilterConfig) -> View {
        dropdown_view(FilterDimension::Accounts, cfg)
    }
}

impl FilterControl for ServiceFilter {
    fn dimension(&self) -> FilterDimension {
        FilterDimension::Services
    }

    fn render(&self, cfg: &FilterConfig) -> View {
        dropdown_view(FilterDimension::Services, cfg)
    }
}

/// Checkbox dropdown shared by the catalog-backed dimensions. Every edit
/// replaces the whole `Filters` snapshot through the shared store.
fn dropdown_view(dimension: FilterDimension, cfg: &FilterConfig) -> View {
    let catalog = cfg.options.options_for(dimension).to_vec();
    let total = catalog.len();

    let entries = catalog
        .iter()
        .map(|option| {
            let name = option.name.clone();
            let key = option.key.clone();
            let option = option.clone();
            let checked_cfg = cfg.clone();
            let toggle_cfg = cfg.clone();
            let checked = move || {
                checked_cfg
                    .current()
                    .selection(dimension)
                    .iter()
                    .any(|o| o.key == key)
            };
            let on_toggle = move |_| {
                let current = toggle_cfg.current();
                let mut selection = current.selection(dimension).to_vec();
                if let Some(pos) = selection.iter().position(|o| o.key == option.key) {
                    selection.remove(pos);
                } else {
                    selection.push(option.clone());
                }
                let next = current.with_selection(dimension, selection, &toggle_cfg.options);
                toggle_cfg.replace(next);
            };
            view! {
                <label>
                    <input type="checkbox" prop:checked=checked on:change=on_toggle/>
                    {name}
                </label>
            }
        })
        .collect_view();

    let summary_cfg = cfg.clone();
    let summary = move || {
        format!(
            "{}: {} of {}",
            dimension.label(),
            summary_cfg.current().selection(dimension).len(),
            total
        )
    };

    view! {
        <label>{dimension.label()}</label>
        <details class="filter-dropdown">
            <summary>{summary}</summary>
            <div class="filter-dropdown-list">{entries}</div>
        </details>
    }
    .into_view()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn date_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// The ordered control registry for the emissions page. Adding a dimension
/// means adding a control here and a key to the catalog; the bar itself
/// never changes.
pub fn default_controls() -> Vec<Rc<dyn FilterControl>> {
    FilterDimension::bar_order()
        .iter()
        .map(|d| control_for(*d))
        .collect()
}

/// Providers and accounts only; the recommendations page has no service or
/// date narrowing.
pub fn recommendation_controls() -> Vec<Rc<dyn FilterControl>> {
    vec![
        Rc::new(CloudProviderFilter) as Rc<dyn FilterControl>,
        Rc::new(AccountFilter),
    ]
}

pub fn control_for(dimension: FilterDimension) -> Rc<dyn FilterControl> {
    match dimension {
        FilterDimension::Timeframe | FilterDimension::DateRange => Rc::new(DateFilter),
        FilterDimension::CloudProviders => Rc::new(CloudProviderFilter),
        FilterDimension::Accounts => Rc::new(AccountFilter),
        FilterDimension::Services => Rc::new(ServiceFilter),
    }
}

/// One wrapper per control, in list order. An empty list yields no
/// wrappers at all; the bar container is rendered regardless.
fn control_views(config: &FilterConfig, components: &[Rc<dyn FilterControl>]) -> Vec<View> {
    components
        .iter()
        .map(|control| {
            view! { <div class="filter-control">{control.render(config)}</div> }.into_view()
        })
        .collect()
}

/// Horizontal composition of filter controls over one shared config, with
/// an optional trailing element (e.g. a download action). An empty control
/// list renders just the container.
#[component]
pub fn FilterBar(
    config: FilterConfig,
    components: Vec<Rc<dyn FilterControl>>,
    #[prop(optional, into)] suffix: Option<View>,
) -> impl IntoView {
    let controls = control_views(&config, &components);

    view! {
        <div class="filter-bar" data-testid="filterBar">
            <div class="filter-bar-controls">{controls}</div>
            {suffix.map(|s| view! { <div class="filter-bar-suffix">{s}</div> })}
        </div>
    }
}
