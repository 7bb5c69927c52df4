use crate::{
    pages::{EmissionsMetricsPage, RecommendationsPage},
    state::provide_app_ctx,
    theme::GLOBAL_CSS,
};
use footprint_shell::{Page, RouteTable, ViewportGate, MIN_SUPPORTED_WIDTH_PX};
use leptos::*;
use leptos_meta::*;

#[cfg(target_arch = "wasm32")]
use footprint_shell::ViewportObserver;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[cfg(target_arch = "wasm32")]
fn read_global(key: &str) -> Option<String> {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

fn api_base_default() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        read_global("CCF_API_BASE").unwrap_or_else(|| "/api".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/api".to_string()
    }
}

fn initial_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        "/".to_string()
    }
}

#[cfg(target_arch = "wasm32")]
fn current_width() -> Option<f64> {
    window().and_then(|w| w.inner_width().ok()).and_then(|v| v.as_f64())
}

fn initial_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        current_width().unwrap_or(MIN_SUPPORTED_WIDTH_PX)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        MIN_SUPPORTED_WIDTH_PX
    }
}

/// Resize-listener wrapper satisfying the injected viewport capability.
#[cfg(target_arch = "wasm32")]
struct BrowserViewport {
    callback: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[cfg(target_arch = "wasm32")]
impl BrowserViewport {
    fn new() -> Self {
        Self { callback: None }
    }
}

#[cfg(target_arch = "wasm32")]
impl ViewportObserver for BrowserViewport {
    fn subscribe(&mut self, on_width: Box<dyn Fn(f64)>) {
        if let Some(width) = current_width() {
            on_width(width);
        }
        let cb = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_| {
            if let Some(width) = current_width() {
                on_width(width);
            }
        }));
        if let Some(win) = window() {
            let _ = win.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        self.callback = Some(cb);
    }

    fn unsubscribe(&mut self) {
        if let Some(cb) = self.callback.take() {
            if let Some(win) = window() {
                let _ =
                    win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            }
        }
    }
}

fn navigate_to(set_path: WriteSignal<String>, to: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(win) = window() {
            if let Ok(history) = win.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(to));
            }
        }
    }
    set_path.set(to.to_string());
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_app_ctx(api_base_default());

    let (path, set_path) = create_signal(initial_path());
    let (width, set_width) = create_signal(initial_width());
    let (gate, set_gate) = create_signal(ViewportGate::default());

    #[cfg(target_arch = "wasm32")]
    {
        // Viewport widths flow in through the observer capability; back
        // navigation updates the path signal.
        let viewport = store_value(BrowserViewport::new());
        create_effect(move |_| {
            viewport.update_value(|v| {
                v.subscribe(Box::new(move |w| set_width.set(w)));
            });
            on_cleanup(move || viewport.update_value(|v| v.unsubscribe()));
        });

        create_effect(move |_| {
            let Some(win) = window() else {
                return;
            };
            let cb = std::rc::Rc::new(Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(
                move |_| {
                    if let Some(win) = window() {
                        if let Ok(pathname) = win.location().pathname() {
                            set_path.set(pathname);
                        }
                    }
                },
            )));
            let _ = win
                .add_event_listener_with_callback("popstate", cb.as_ref().as_ref().unchecked_ref());
            on_cleanup({
                let cb = cb.clone();
                move || {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "popstate",
                            cb.as_ref().as_ref().unchecked_ref(),
                        );
                    }
                }
            });
        });
    }

    let table = RouteTable::footprint_routes();
    let page = create_memo(move |_| table.resolve(&path.get()));

    let blocked = move || gate.get().is_blocked(width.get());

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Title text="Cloud Carbon Footprint"/>
        <div class="app-root">
            <header class="app-header">
                <h1 class="app-title">"Cloud Carbon Footprint"</h1>
                <nav class="app-nav">
                    <a
                        href="/"
                        class:active=move || page.get() == Page::EmissionsMetrics
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate_to(set_path, "/");
                        }
                    >
                        {Page::EmissionsMetrics.title()}
                    </a>
                    <a
                        href="/recommendations"
                        class:active=move || page.get() == Page::Recommendations
                        on:click=move |ev| {
                            ev.prevent_default();
                            navigate_to(set_path, "/recommendations");
                        }
                    >
                        {Page::Recommendations.title()}
                    </a>
                </nav>
            </header>
            <Show when=blocked>
                <div class="warning-overlay" data-testid="warning-modal">
                    <div class="warning-modal">
                        <h2>"Expand your browser window"</h2>
                        <p>
                            {format!(
                                "This dashboard is not optimized for narrow screens. Please use a window at least {}px wide.",
                                MIN_SUPPORTED_WIDTH_PX as u32,
                            )}
                        </p>
                        <button on:click=move |_| set_gate.update(|g| g.dismiss())>
                            "Close"
                        </button>
                    </div>
                </div>
            </Show>
            <main class="app-main">
                {move || match page.get() {
                    Page::EmissionsMetrics => view! { <EmissionsMetricsPage/> }.into_view(),
                    Page::Recommendations => view! { <RecommendationsPage/> }.into_view(),
                }}
            </main>
        </div>
    }
}
