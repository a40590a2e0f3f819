//! Parcel boundary map card.

use crate::js_bridge;
use crate::payload::map_payload;
use crate::state::AppState;
use dioxus::prelude::*;

use super::{ChartContainer, ChartHeader};

#[derive(Props, Clone, PartialEq)]
pub struct MapViewProps {
    /// DOM id of the Leaflet container
    pub id: String,
    #[props(default = 400)]
    pub height: u32,
}

/// Leaflet map of every parcel boundary with the current one highlighted.
///
/// Re-renders whenever the selection changes. Clicking a boundary selects
/// that parcel through the handler installed at startup.
#[component]
pub fn MapView(props: MapViewProps) -> Element {
    let state = use_context::<AppState>();

    let render_id = props.id.clone();
    use_effect(move || {
        let payload = {
            let session = state.session.read();
            map_payload(session.catalog(), session.current_index())
        };
        js_bridge::render_parcel_map(&render_id, &payload.to_string());
    });

    let drop_id = props.id.clone();
    use_drop(move || js_bridge::destroy_map(&drop_id));

    rsx! {
        div {
            style: "padding: 16px; border-radius: 16px; border: 2px solid #bbf7d0; background: linear-gradient(135deg, #f0fdf4, #ffffff, #dcfce7); margin-bottom: 24px;",
            ChartHeader {
                title: "Vị trí và ranh giới".to_string(),
                icon: "🗺️".to_string(),
                color: "#166534".to_string(),
            }
            div {
                style: "border-radius: 8px; overflow: hidden; border: 1px solid #d1d5db; position: relative; z-index: 1;",
                ChartContainer {
                    id: props.id.clone(),
                    min_height: props.height,
                }
            }
            p {
                style: "font-size: 12px; color: #6b7280; margin: 8px 0 0 0;",
                "* Click vào bản đồ để thêm marker, click vào ranh giới để chọn lô đất. Bật/tắt các lớp: nền, quy hoạch, ranh giới, vị trí."
            }
        }
    }
}
