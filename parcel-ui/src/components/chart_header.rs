//! Card header with an icon, a title and an optional caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub icon: String,
    /// Small text under the title
    #[props(default = String::new())]
    pub caption: String,
    #[props(default = "#1f2937".to_string())]
    pub color: String,
}

/// Header for card sections showing title and optional caption.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 12px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px; font-weight: 700; color: {props.color};",
                if !props.icon.is_empty() {
                    span { style: "margin-right: 8px;", "{props.icon}" }
                }
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.caption}"
                }
            }
        }
    }
}
