//! Read-only parcel cards: basic information, potential analysis, facilities.

use dioxus::prelude::*;
use parcel_catalog::parcel::expansion_label;
use parcel_catalog::ParcelRecord;

const CARD_STYLE: &str = "padding: 24px; border-radius: 12px; background: white; box-shadow: 0 4px 6px rgba(0,0,0,0.08); margin-bottom: 24px;";

#[derive(Props, Clone, PartialEq)]
pub struct ParcelInfoProps {
    pub record: ParcelRecord,
}

#[derive(Props, Clone, PartialEq)]
struct InfoRowProps {
    icon: String,
    label: String,
    value: String,
}

#[component]
fn InfoRow(props: InfoRowProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px;",
            span { style: "font-size: 18px; color: #6b7280;", "{props.icon}" }
            div {
                p { style: "margin: 0; font-size: 13px; color: #6b7280;", "{props.label}" }
                p { style: "margin: 0; font-weight: 500;", "{props.value}" }
            }
        }
    }
}

/// Parcel information, potential analysis and nearby facilities.
#[component]
pub fn ParcelInfo(props: ParcelInfoProps) -> Element {
    let record = &props.record;
    let (badge_bg, badge_text, badge_border) = record.legal_tone().colors();
    let badge_style = format!(
        "padding: 4px 12px; border-radius: 6px; font-size: 14px; font-weight: 500; background: {}; color: {}; border: 1px solid {};",
        badge_bg, badge_text, badge_border
    );
    let expansion_text = expansion_label(record.expansion_potential);
    let expansion_color = if record.expansion_potential {
        "#15803d"
    } else {
        "#b91c1c"
    };

    rsx! {
        div {
            div {
                style: CARD_STYLE,
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 20px;",
                    h2 {
                        style: "margin: 0; font-size: 22px; font-weight: 600; color: #111827;",
                        "Thông tin lô đất"
                    }
                    span { style: "{badge_style}", "{record.legal_status}" }
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 8px 24px;",
                    InfoRow { icon: "📏".to_string(), label: "Diện tích".to_string(), value: format!("{} m²", record.area) }
                    InfoRow { icon: "📄".to_string(), label: "Số thửa đất".to_string(), value: record.lot_number.clone() }
                    InfoRow { icon: "🏠".to_string(), label: "Hình dạng thửa đất".to_string(), value: record.shape_description.clone() }
                    InfoRow { icon: "🧭".to_string(), label: "Hướng cửa chính".to_string(), value: record.door_orientation.clone() }
                    InfoRow { icon: "📍".to_string(), label: "Địa chỉ đầy đủ".to_string(), value: record.address.clone() }
                    InfoRow { icon: "🏢".to_string(), label: "Loại đất".to_string(), value: record.land_type.clone() }
                }
            }
            div {
                style: CARD_STYLE,
                h3 {
                    style: "margin: 0 0 20px 0; font-size: 18px; font-weight: 600;",
                    "🔍 Phân tích tiềm năng"
                }
                div {
                    style: "padding: 16px; border-radius: 8px; margin-bottom: 8px; background: #e3edff;",
                    strong { style: "margin-right: 8px;", "Khả năng mở rộng:" }
                    span { style: "color: {expansion_color}; font-weight: 500;", "{expansion_text}" }
                    if record.tail_expanded {
                        span { style: "margin-left: 8px; color: #2563eb;", "(lô nở hậu)" }
                    }
                }
                div {
                    style: "padding: 16px; border-radius: 8px; margin-bottom: 8px; background: #e6faea;",
                    strong { style: "margin-right: 8px;", "Chia tối đa:" }
                    span { "{record.max_rooms} phòng (dựa trên diện tích {record.area} m²)" }
                }
                div {
                    style: "padding: 16px; border-radius: 8px; background: #fff4e3;",
                    strong { style: "margin-right: 8px;", "Đường trước nhà:" }
                    span { "Rộng {record.width_road}m" }
                }
            }
            div {
                style: CARD_STYLE,
                h3 {
                    style: "margin: 0 0 20px 0; font-size: 18px; font-weight: 600;",
                    "🏢 Tiện ích xung quanh"
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 12px;",
                    for (i, facility) in record.nearby_facilities.iter().enumerate() {
                        div {
                            key: "{i}",
                            style: "display: flex; align-items: center; padding: 12px; background: #f9fafb; border-radius: 8px; font-size: 14px;",
                            span { style: "margin-right: 8px; color: #9ca3af;", "📍" }
                            "{facility}"
                        }
                    }
                }
            }
        }
    }
}
