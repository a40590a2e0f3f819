//! Parcel lookup and mock valuation
//!
//! Single-page app over the embedded parcel catalog:
//! 1. Search: free-text address with live suggestions and quick searches.
//!    A search that matches nothing shows the default parcel.
//! 2. Edit: correct the selected parcel's attributes and facilities.
//! 3. Review: edited parcel next to the catalog valuation, with the boundary
//!    map (click a boundary to switch parcels) and the price trend chart.

use dioxus::prelude::*;
use parcel_core::Phase;
use parcel_ui::components::{
    Disclaimer, ErrorDisplay, MapView, ParcelForm, ParcelInfo, PricingPanel, SearchForm,
    TransactionList, TrendChart,
};
use parcel_ui::js_bridge;
use parcel_ui::state::AppState;

/// DOM id of the map container on the edit screen.
const EDIT_MAP_ID: &str = "parcel-edit-map";
/// DOM id of the map container on the review screen.
const REVIEW_MAP_ID: &str = "parcel-review-map";
/// DOM id for the D3 trend chart container.
const TREND_CHART_ID: &str = "parcel-trend-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("parcel-valuation-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── One-time setup: JS scripts and the boundary click hook ───
    use_hook(move || {
        js_bridge::init_scripts();
        let mut state = state;
        js_bridge::register_parcel_select(move |index| state.select_parcel(index as usize));
    });

    let phase = state.session.read().phase();
    let screen = if (state.not_found)() {
        rsx! { ResultsLayout { NotFound {} } }
    } else {
        match phase {
            Phase::Searching => rsx! { SearchForm {} },
            Phase::Editing => rsx! { EditScreen {} },
            Phase::Reviewing => rsx! { ReviewScreen {} },
        }
    };

    rsx! {
        div {
            style: "font-family: system-ui, -apple-system, sans-serif; color: #111827;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            {screen}
        }
    }
}

/// Sticky header with the "new search" button and the searched address,
/// shared by the edit and review screens.
#[component]
fn ResultsLayout(children: Element) -> Element {
    let mut state = use_context::<AppState>();
    let query = (state.query)();

    rsx! {
        div {
            style: "min-height: 100vh; background: linear-gradient(135deg, #f0fdf4, #ffffff, #eff6ff);",
            div {
                style: "position: sticky; top: 0; z-index: 10; background: white; border-bottom: 1px solid #e5e7eb; box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
                div {
                    style: "max-width: 1280px; margin: 0 auto; padding: 16px; display: flex; align-items: center; justify-content: space-between;",
                    button {
                        r#type: "button",
                        style: "border: none; background: none; font-size: 15px; cursor: pointer; padding: 8px 12px;",
                        onclick: move |_| state.reset(),
                        "← Tìm kiếm mới"
                    }
                    div {
                        style: "text-align: center; flex: 1; max-width: 672px; margin: 0 16px;",
                        h1 {
                            style: "margin: 0; font-size: 22px; font-weight: 700;",
                            "Thông tin và định giá bất động sản"
                        }
                        p { style: "margin: 4px 0 0 0; font-size: 14px; color: #4b5563;", "📍 {query}" }
                    }
                    div { style: "width: 96px;" }
                }
            }
            div {
                style: "max-width: 1280px; margin: 0 auto; padding: 32px 16px;",
                {children}
            }
        }
    }
}

#[component]
fn NotFound() -> Element {
    rsx! {
        p {
            style: "color: #ef4444; text-align: center; font-size: 18px; margin-top: 40px;",
            "Không tìm thấy thông tin lô đất."
        }
    }
}

/// Map on the left, editable form on the right.
#[component]
fn EditScreen() -> Element {
    rsx! {
        ResultsLayout {
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 32px;",
                div {
                    MapView { id: EDIT_MAP_ID.to_string(), height: 400 }
                }
                div {
                    ParcelForm {}
                }
            }
        }
    }
}

/// Edited parcel with the catalog valuation of the selected index.
#[component]
fn ReviewScreen() -> Element {
    let state = use_context::<AppState>();
    let view = {
        let session = state.session.read();
        session
            .valuation()
            .map(|view| (view.record.clone(), view.pricing.clone()))
    };
    let Some((record, pricing)) = view else {
        return rsx! { ResultsLayout { NotFound {} } };
    };
    let transactions = pricing.nearby_transactions.clone();

    rsx! {
        ResultsLayout {
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 32px;",
                div {
                    MapView { id: REVIEW_MAP_ID.to_string(), height: 400 }
                    ParcelInfo { record: record }
                }
                div {
                    PricingPanel { pricing: pricing }
                    TrendChart { id: TREND_CHART_ID.to_string() }
                    TransactionList { transactions: transactions }
                    Disclaimer {}
                }
            }
        }
    }
}
