//! Valuation cards: price estimate, nearby transactions and the disclaimer.

use dioxus::prelude::*;
use parcel_catalog::format::{format_date_vi, format_vnd};
use parcel_catalog::{PricingSnapshot, Transaction};

use super::ChartHeader;

#[derive(Props, Clone, PartialEq)]
pub struct PricingPanelProps {
    pub pricing: PricingSnapshot,
}

#[derive(Props, Clone, PartialEq)]
struct FigureProps {
    label: String,
    value: String,
    background: String,
    color: String,
    #[props(default = false)]
    large: bool,
}

#[component]
fn Figure(props: FigureProps) -> Element {
    let size = if props.large { 28 } else { 20 };
    rsx! {
        div {
            style: "padding: 16px; border-radius: 12px; background: {props.background}; margin-bottom: 16px;",
            p { style: "margin: 0 0 4px 0; font-size: 13px; color: #6b7280;", "{props.label}" }
            p {
                style: "margin: 0; font-size: {size}px; font-weight: 800; color: {props.color};",
                "{props.value}"
            }
        }
    }
}

/// Estimated price per m², total price, liquidity and similar-property average.
#[component]
pub fn PricingPanel(props: PricingPanelProps) -> Element {
    let pricing = &props.pricing;

    rsx! {
        div {
            style: "padding: 32px; border-radius: 16px; border: 2px solid #bbf7d0; background: linear-gradient(135deg, #f0fdf4, #eff6ff, #ffffff); margin-bottom: 24px;",
            ChartHeader {
                title: "Ước tính giá trị".to_string(),
                icon: "💰".to_string(),
                caption: "Theo dữ liệu gốc của lô đất, không tính lại theo thông tin đã chỉnh sửa".to_string(),
                color: "#1e40af".to_string(),
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 0 24px;",
                div {
                    Figure {
                        label: "Giá/m²".to_string(),
                        value: format_vnd(pricing.estimated_price_per_area),
                        background: "#dcfce7".to_string(),
                        color: "#15803d".to_string(),
                        large: true,
                    }
                    Figure {
                        label: "Tổng giá trị ước tính".to_string(),
                        value: format_vnd(pricing.total_estimated_price),
                        background: "#dbeafe".to_string(),
                        color: "#1d4ed8".to_string(),
                        large: true,
                    }
                }
                div {
                    Figure {
                        label: "⏱ Tốc độ thanh khoản".to_string(),
                        value: format!("{} ngày", pricing.liquidity_days),
                        background: "#fefce8".to_string(),
                        color: "#a16207".to_string(),
                    }
                    Figure {
                        label: "📊 TB căn tương tự".to_string(),
                        value: format_vnd(pricing.similar_properties_avg),
                        background: "#faf5ff".to_string(),
                        color: "#7e22ce".to_string(),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TransactionListProps {
    pub transactions: Vec<Transaction>,
}

/// Display strings for one transaction row.
struct TransactionRow {
    address: String,
    date: String,
    area: f64,
    distance: f64,
    price: String,
    price_per_area: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            address: tx.address.clone(),
            date: format_date_vi(&tx.date),
            area: tx.area,
            distance: tx.distance_meters,
            price: format_vnd(tx.price),
            price_per_area: format_vnd(tx.price_per_area),
        }
    }
}

/// Comparable sales near the parcel.
#[component]
pub fn TransactionList(props: TransactionListProps) -> Element {
    let rows: Vec<TransactionRow> = props.transactions.iter().map(TransactionRow::from).collect();

    rsx! {
        div {
            style: "padding: 32px; border-radius: 16px; border: 2px solid #bfdbfe; background: linear-gradient(135deg, #eff6ff, #ffffff, #f0fdf4); margin-bottom: 24px;",
            ChartHeader {
                title: "Giao dịch gần đây".to_string(),
                icon: "📍".to_string(),
                color: "#1e40af".to_string(),
            }
            if rows.is_empty() {
                p { style: "color: #6b7280; font-size: 14px;", "Chưa có giao dịch nào gần đây." }
            }
            for (i, row) in rows.iter().enumerate() {
                div {
                    key: "{i}",
                    style: "display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 16px; padding: 16px; margin-bottom: 16px; border: 1px solid #bfdbfe; border-radius: 12px; background: rgba(255,255,255,0.8);",
                    div {
                        style: "flex: 1;",
                        h4 { style: "margin: 0; font-weight: 600; color: #1e3a8a;", "{row.address}" }
                        div {
                            style: "display: flex; gap: 16px; margin-top: 8px; font-size: 14px; color: #4b5563;",
                            span { "📅 {row.date}" }
                            span { "{row.area} m²" }
                            span { "{row.distance}m" }
                        }
                    }
                    div {
                        style: "text-align: right;",
                        p { style: "margin: 0; font-weight: 700; font-size: 18px; color: #2563eb;", "{row.price}" }
                        p { style: "margin: 0; font-size: 14px; color: #60a5fa;", "{row.price_per_area}/m²" }
                    }
                }
            }
        }
    }
}

/// Notice that the valuation is indicative only.
#[component]
pub fn Disclaimer() -> Element {
    rsx! {
        div {
            style: "padding: 24px; border-radius: 16px; border: 2px solid #fde68a; background: linear-gradient(135deg, #fef3c7, #ffffff, #fffbeb);",
            ChartHeader {
                title: "Lưu ý quan trọng".to_string(),
                icon: "⚠️".to_string(),
                color: "#92400e".to_string(),
            }
            ul {
                style: "margin: 0; padding-left: 20px; color: #b45309; font-size: 15px; line-height: 1.8;",
                li { "Giá ước tính dựa trên các giao dịch gần đây và đặc điểm thửa đất" }
                li { "Giá thực tế có thể dao động ±10-20% tùy vào tình trạng pháp lý" }
                li { "Nên tham khảo ý kiến chuyên gia trước khi đưa ra quyết định" }
                li { "Thông tin chỉ mang tính chất tham khảo" }
            }
        }
    }
}
