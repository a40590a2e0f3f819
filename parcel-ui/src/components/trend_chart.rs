//! Six-month price trend chart.

use crate::js_bridge;
use crate::payload::trend_payload;
use crate::state::AppState;
use dioxus::prelude::*;

use super::{ChartContainer, ChartHeader};

/// Line colour of the trend series.
const TREND_COLOR: &str = "#facc15";

#[derive(Props, Clone, PartialEq)]
pub struct TrendChartProps {
    /// DOM id for the D3 chart container
    pub id: String,
}

/// D3 line chart of the current parcel's price-per-m² trend.
#[component]
pub fn TrendChart(props: TrendChartProps) -> Element {
    let state = use_context::<AppState>();

    let render_id = props.id.clone();
    use_effect(move || {
        let payload = match state.session.read().current_pricing() {
            Some(pricing) => trend_payload(pricing),
            None => {
                js_bridge::destroy_chart(&render_id);
                return;
            }
        };
        let config_json = serde_json::json!({
            "color": TREND_COLOR,
            "height": 360,
            "tooltipLabel": "Giá/m²",
        })
        .to_string();
        js_bridge::render_trend_chart(&render_id, &payload.to_string(), &config_json);
    });

    rsx! {
        div {
            style: "padding: 32px; border-radius: 16px; border: 2px solid #fef08a; background: linear-gradient(135deg, #fefce8, #ffffff, #eff6ff); margin-bottom: 24px;",
            ChartHeader {
                title: "Xu hướng giá 6 tháng gần đây".to_string(),
                icon: "📈".to_string(),
                caption: "Đơn vị: triệu VNĐ/m²".to_string(),
                color: "#854d0e".to_string(),
            }
            ChartContainer {
                id: props.id.clone(),
                min_height: 360,
            }
        }
    }
}
