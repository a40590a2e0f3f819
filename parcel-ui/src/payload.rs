//! JSON payloads handed to the map and chart scripts.
//!
//! All display strings (popups, tick labels, tooltips) are formatted here so
//! the JS side only draws.

use parcel_catalog::format::{format_lat_lng, format_millions_tick, format_vnd};
use parcel_catalog::{Catalog, LatLng, PricingSnapshot};
use serde_json::{json, Value};

/// Initial zoom level of the parcel map.
pub const MAP_ZOOM: u8 = 16;

/// Map centre when no parcel is selected (Hà Nội).
pub const FALLBACK_CENTER: LatLng = LatLng {
    lat: 21.0285,
    lng: 105.8542,
};

pub const SELECTED_STYLE: BoundaryStyle = BoundaryStyle {
    color: "#ff9800",
    weight: 4,
    fill_opacity: 0.5,
};

pub const DEFAULT_STYLE: BoundaryStyle = BoundaryStyle {
    color: "#2563eb",
    weight: 2,
    fill_opacity: 0.3,
};

/// Leaflet path options for one boundary polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryStyle {
    pub color: &'static str,
    pub weight: u8,
    pub fill_opacity: f64,
}

impl BoundaryStyle {
    pub fn for_selection(selected: bool) -> Self {
        if selected {
            SELECTED_STYLE
        } else {
            DEFAULT_STYLE
        }
    }
}

fn lat_lng_pair(point: &LatLng) -> Value {
    json!([point.lat, point.lng])
}

/// Map payload: every boundary polygon, the selected one highlighted, plus
/// the location marker of the selected parcel.
pub fn map_payload(catalog: &Catalog, selected: Option<usize>) -> Value {
    let parcels: Vec<Value> = catalog
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let style = BoundaryStyle::for_selection(Some(index) == selected);
            json!({
                "index": index,
                "address": entry.record.address,
                "boundary": entry.record.boundary.iter().map(lat_lng_pair).collect::<Vec<_>>(),
                "style": {
                    "color": style.color,
                    "weight": style.weight,
                    "fillOpacity": style.fill_opacity,
                },
            })
        })
        .collect();

    let selected_entry = selected.and_then(|index| catalog.get(index));
    let center = selected_entry
        .map(|entry| entry.record.location)
        .unwrap_or(FALLBACK_CENTER);
    let marker = selected_entry.map(|entry| {
        json!({
            "position": lat_lng_pair(&entry.record.location),
            "title": entry.record.address,
            "popup": format!("Tọa độ: {}", format_lat_lng(&entry.record.location, 5)),
        })
    });

    json!({
        "selected": selected,
        "center": lat_lng_pair(&center),
        "zoom": MAP_ZOOM,
        "parcels": parcels,
        "marker": marker,
    })
}

/// Evenly spaced y-axis ticks over `[lo, hi]`, labelled in millions.
pub fn trend_ticks(lo: f64, hi: f64, count: usize) -> Vec<(f64, String)> {
    if count < 2 || hi <= lo {
        return vec![(lo, format_millions_tick(lo))];
    }
    let step = (hi - lo) / (count - 1) as f64;
    (0..count)
        .map(|i| {
            let value = lo + step * i as f64;
            (value, format_millions_tick(value))
        })
        .collect()
}

/// Trend chart payload: points in chronological order and precomputed ticks.
///
/// The y domain is padded by 5% of the price range on each side.
pub fn trend_payload(pricing: &PricingSnapshot) -> Value {
    let points: Vec<Value> = pricing
        .price_trend
        .iter()
        .map(|point| {
            json!({
                "month": point.month_label,
                "price": point.price,
                "tooltip": format_vnd(point.price),
            })
        })
        .collect();

    let (lo, hi) = match pricing.trend_range() {
        Some((lo, hi)) => {
            let pad = ((hi - lo) * 0.05).max(hi.abs() * 0.01);
            (lo - pad, hi + pad)
        }
        None => (0.0, 0.0),
    };
    let ticks: Vec<Value> = trend_ticks(lo, hi, 5)
        .into_iter()
        .map(|(value, label)| json!({ "value": value, "label": label }))
        .collect();

    json!({
        "points": points,
        "domain": [lo, hi],
        "ticks": ticks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn map_payload_highlights_selection() {
        let catalog = catalog();
        let payload = map_payload(&catalog, Some(1));
        let parcels = payload["parcels"].as_array().unwrap();
        assert_eq!(parcels.len(), catalog.len());
        assert_eq!(parcels[1]["style"]["color"], "#ff9800");
        assert_eq!(parcels[1]["style"]["weight"], 4);
        assert_eq!(parcels[0]["style"]["color"], "#2563eb");
        assert_eq!(parcels[0]["style"]["fillOpacity"], 0.3);
        assert_eq!(payload["selected"], 1);
        assert_eq!(payload["zoom"], 16);
    }

    #[test]
    fn map_payload_centres_on_selected_location() {
        let catalog = catalog();
        let payload = map_payload(&catalog, Some(2));
        let location = catalog.get(2).unwrap().record.location;
        assert_eq!(payload["center"][0], location.lat);
        assert_eq!(payload["center"][1], location.lng);
        assert_eq!(payload["marker"]["popup"], "Tọa độ: 21.03030, 105.85000");
    }

    #[test]
    fn map_payload_without_selection_uses_fallback_centre() {
        let payload = map_payload(&catalog(), None);
        assert_eq!(payload["center"][0], 21.0285);
        assert_eq!(payload["center"][1], 105.8542);
        assert!(payload["marker"].is_null());
        assert!(payload["selected"].is_null());
    }

    #[test]
    fn boundary_points_are_lat_lng_pairs() {
        let catalog = catalog();
        let payload = map_payload(&catalog, Some(0));
        let boundary = payload["parcels"][0]["boundary"].as_array().unwrap();
        assert_eq!(boundary.len(), catalog.get(0).unwrap().record.boundary.len());
        assert_eq!(boundary[0].as_array().unwrap().len(), 2);
    }

    #[test]
    fn ticks_are_even_and_labelled_in_millions() {
        let ticks = trend_ticks(80_000_000.0, 120_000_000.0, 5);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].1, "80M");
        assert_eq!(ticks[2].1, "100M");
        assert_eq!(ticks[4].1, "120M");
    }

    #[test]
    fn flat_trend_gets_a_single_tick() {
        assert_eq!(trend_ticks(5.0, 5.0, 5).len(), 1);
    }

    #[test]
    fn trend_payload_keeps_order_and_pads_domain() {
        let catalog = catalog();
        let pricing = &catalog.get(1).unwrap().pricing;
        let payload = trend_payload(pricing);
        let points = payload["points"].as_array().unwrap();
        assert_eq!(points.len(), pricing.price_trend.len());
        assert_eq!(points[0]["month"], pricing.price_trend[0].month_label.as_str());

        let (lo, hi) = pricing.trend_range().unwrap();
        assert!(payload["domain"][0].as_f64().unwrap() < lo);
        assert!(payload["domain"][1].as_f64().unwrap() > hi);
    }
}
