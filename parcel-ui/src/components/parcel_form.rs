//! Edit form over the working copy of the selected parcel.

use crate::state::AppState;
use dioxus::prelude::*;
use parcel_core::{FieldEdit, FACILITY_CHECKLIST};

const LABEL_STYLE: &str = "display: block; font-size: 13px; color: #6b7280; margin-bottom: 4px;";
const INPUT_STYLE: &str = "width: 100%; box-sizing: border-box; padding: 8px 10px; font-size: 15px; border: 1px solid #d1d5db; border-radius: 6px;";

#[derive(Props, Clone, PartialEq)]
struct FieldProps {
    label: String,
    value: String,
    #[props(default = "text".to_string())]
    input_type: String,
    on_change: EventHandler<String>,
}

#[component]
fn Field(props: FieldProps) -> Element {
    let on_change = props.on_change;
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            label { style: LABEL_STYLE, "{props.label}" }
            input {
                r#type: "{props.input_type}",
                value: "{props.value}",
                style: INPUT_STYLE,
                onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ToggleProps {
    label: String,
    checked: bool,
    on_toggle: EventHandler<bool>,
}

#[component]
fn Toggle(props: ToggleProps) -> Element {
    let checked = props.checked;
    let on_toggle = props.on_toggle;
    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 8px; margin-bottom: 8px; font-size: 14px; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| on_toggle.call(!checked),
            }
            "{props.label}"
        }
    }
}

/// Edit screen body: attribute fields, facility checklist with free-text
/// additions, and the button that confirms the valuation.
///
/// Numeric fields that do not parse are ignored.
#[component]
pub fn ParcelForm() -> Element {
    let mut state = use_context::<AppState>();
    let mut custom_facility = use_signal(String::new);
    let Some(record) = state.session.read().working_copy().cloned() else {
        return rsx! {};
    };

    let mut add_custom = move || {
        let name = custom_facility.peek().clone();
        state.add_custom_facility(&name);
        custom_facility.set(String::new());
    };

    rsx! {
        div {
            style: "padding: 24px; border-radius: 12px; background: white; box-shadow: 0 4px 6px rgba(0,0,0,0.08);",
            h2 {
                style: "margin: 0 0 16px 0; font-size: 22px; font-weight: 600; color: #111827;",
                "Kiểm tra và chỉnh sửa thông tin lô đất"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); column-gap: 16px;",
                Field {
                    label: "Địa chỉ đầy đủ".to_string(),
                    value: record.address.clone(),
                    on_change: move |v: String| state.edit(FieldEdit::Address(v)),
                }
                Field {
                    label: "Số thửa đất".to_string(),
                    value: record.lot_number.clone(),
                    on_change: move |v: String| state.edit(FieldEdit::LotNumber(v)),
                }
                Field {
                    label: "Diện tích (m²)".to_string(),
                    value: record.area.to_string(),
                    input_type: "number".to_string(),
                    on_change: move |v: String| {
                        if let Ok(area) = v.trim().parse::<f64>() {
                            state.edit(FieldEdit::Area(area));
                        }
                    },
                }
                Field {
                    label: "Hình dạng thửa đất".to_string(),
                    value: record.shape_description.clone(),
                    on_change: move |v: String| state.edit(FieldEdit::ShapeDescription(v)),
                }
                Field {
                    label: "Hướng cửa chính".to_string(),
                    value: record.door_orientation.clone(),
                    on_change: move |v: String| state.edit(FieldEdit::DoorOrientation(v)),
                }
                Field {
                    label: "Loại đất".to_string(),
                    value: record.land_type.clone(),
                    on_change: move |v: String| state.edit(FieldEdit::LandType(v)),
                }
                Field {
                    label: "Tình trạng pháp lý".to_string(),
                    value: record.legal_status.clone(),
                    on_change: move |v: String| state.edit(FieldEdit::LegalStatus(v)),
                }
                Field {
                    label: "Đường trước nhà (m)".to_string(),
                    value: record.width_road.to_string(),
                    input_type: "number".to_string(),
                    on_change: move |v: String| {
                        if let Ok(width) = v.trim().parse::<f64>() {
                            state.edit(FieldEdit::WidthRoad(width));
                        }
                    },
                }
                Field {
                    label: "Số phòng tối đa".to_string(),
                    value: record.max_rooms.to_string(),
                    input_type: "number".to_string(),
                    on_change: move |v: String| {
                        if let Ok(rooms) = v.trim().parse::<u32>() {
                            state.edit(FieldEdit::MaxRooms(rooms));
                        }
                    },
                }
            }
            div {
                style: "margin: 8px 0 16px 0;",
                Toggle {
                    label: "Có thể mở rộng".to_string(),
                    checked: record.expansion_potential,
                    on_toggle: move |v: bool| state.edit(FieldEdit::ExpansionPotential(v)),
                }
                Toggle {
                    label: "Nở hậu".to_string(),
                    checked: record.tail_expanded,
                    on_toggle: move |v: bool| state.edit(FieldEdit::TailExpanded(v)),
                }
            }
            h3 {
                style: "margin: 16px 0 8px 0; font-size: 16px; font-weight: 600;",
                "Tiện ích xung quanh"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 4px 16px; margin-bottom: 12px;",
                for name in FACILITY_CHECKLIST.iter() {
                    Toggle {
                        key: "{name}",
                        label: name.to_string(),
                        checked: record.has_facility(name),
                        on_toggle: move |_: bool| state.toggle_facility(name),
                    }
                }
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0 0 12px 0; display: flex; flex-wrap: wrap; gap: 8px;",
                for facility in record.nearby_facilities.iter() {
                    li {
                        key: "{facility}",
                        style: "padding: 4px 10px; background: #f3f4f6; border-radius: 9999px; font-size: 13px;",
                        "{facility} "
                        button {
                            r#type: "button",
                            title: "Bỏ tiện ích",
                            style: "border: none; background: none; color: #9ca3af; cursor: pointer;",
                            onclick: {
                                let facility = facility.clone();
                                move |_| state.toggle_facility(&facility)
                            },
                            "✕"
                        }
                    }
                }
            }
            div {
                style: "display: flex; gap: 8px; margin-bottom: 24px;",
                input {
                    r#type: "text",
                    placeholder: "Thêm tiện ích khác...",
                    value: "{custom_facility}",
                    style: INPUT_STYLE,
                    oninput: move |evt: Event<FormData>| custom_facility.set(evt.value()),
                    onkeydown: move |evt: Event<KeyboardData>| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            add_custom();
                        }
                    },
                }
                button {
                    r#type: "button",
                    style: "padding: 8px 16px; border: 1px solid #2563eb; color: #2563eb; background: white; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| add_custom(),
                    "Thêm"
                }
            }
            button {
                r#type: "button",
                style: "width: 100%; height: 52px; font-size: 18px; color: white; border: none; border-radius: 8px; background: linear-gradient(90deg, #2563eb, #16a34a); cursor: pointer;",
                onclick: move |_| state.confirm_valuation(),
                "Định giá"
            }
        }
    }
}
