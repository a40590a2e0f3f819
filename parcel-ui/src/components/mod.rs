//! Reusable Dioxus RSX components for the parcel valuation app.

mod chart_container;
mod chart_header;
mod error_display;
mod map_view;
mod parcel_form;
mod parcel_info;
mod pricing_panel;
mod search_form;
mod trend_chart;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use map_view::MapView;
pub use parcel_form::ParcelForm;
pub use parcel_info::ParcelInfo;
pub use pricing_panel::{Disclaimer, PricingPanel, TransactionList};
pub use search_form::SearchForm;
pub use trend_chart::TrendChart;
