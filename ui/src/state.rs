use footprint_shell::{
    EmissionRatioResult, EstimationResult, RecommendationResult, ServiceResult,
};
use leptos::*;

/// The three data providers consumed by the routed pages. Each signal starts
/// in the loading state and is filled in by the fetchers on mount.
#[derive(Clone)]
pub struct AppCtx {
    pub estimations: RwSignal<ServiceResult<EstimationResult>>,
    pub emission_ratios: RwSignal<ServiceResult<EmissionRatioResult>>,
    pub recommendations: RwSignal<ServiceResult<RecommendationResult>>,
    pub api_base: RwSignal<String>,
}

pub fn provide_app_ctx(api_base: String) -> AppCtx {
    let ctx = AppCtx {
        estimations: create_rw_signal(ServiceResult::pending()),
        emission_ratios: create_rw_signal(ServiceResult::pending()),
        recommendations: create_rw_signal(ServiceResult::pending()),
        api_base: create_rw_signal(api_base),
    };
    provide_context(ctx.clone());

    #[cfg(target_arch = "wasm32")]
    {
        let base = ctx.api_base.get_untracked();
        let base = base.trim_end_matches('/');
        fetch_collection(format!("{}/footprint", base), ctx.estimations);
        fetch_collection(
            format!("{}/regions/emissions-factors", base),
            ctx.emission_ratios,
        );
        fetch_collection(format!("{}/recommendations", base), ctx.recommendations);
    }

    ctx
}

pub fn use_app_ctx() -> AppCtx {
    use_context::<AppCtx>().expect("AppCtx not provided")
}

#[cfg(target_arch = "wasm32")]
fn fetch_collection<T>(url: String, slot: RwSignal<ServiceResult<T>>)
where
    T: serde::de::DeserializeOwned + Clone + 'static,
{
    use gloo_net::http::Request;
    use wasm_bindgen_futures::spawn_local;

    spawn_local(async move {
        let outcome = async {
            let resp = Request::get(&url)
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if !resp.ok() {
                return Err(format!("{} responded with status {}", url, resp.status()));
            }
            resp.json::<Vec<T>>().await.map_err(|e| e.to_string())
        }
        .await;
        match outcome {
            Ok(data) => slot.set(ServiceResult::ready(data)),
            Err(message) => {
                web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&message));
                slot.set(ServiceResult::failed(message));
            }
        }
    });
}
