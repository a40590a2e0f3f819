//! Pricing snapshot types.
//!
//! Every parcel has exactly one snapshot. The numbers are fixed per record
//! and are never recomputed from edited parcel fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Valuation figures paired 1:1 with a [`crate::ParcelRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSnapshot {
    /// Estimated price per square metre (VND)
    pub estimated_price_per_area: f64,
    /// Estimated total price (VND)
    pub total_estimated_price: f64,
    /// Expected days on market
    pub liquidity_days: u32,
    /// Average price per square metre of similar properties (VND)
    pub similar_properties_avg: f64,
    pub nearby_transactions: Vec<Transaction>,
    /// Chronological; charted as-is.
    pub price_trend: Vec<TrendPoint>,
}

/// A comparable sale near the parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub address: String,
    pub date: NaiveDate,
    /// Area in square metres
    pub area: f64,
    /// Sale price (VND)
    pub price: f64,
    pub distance_meters: f64,
    /// Sale price per square metre (VND)
    pub price_per_area: f64,
}

/// One month of the price-per-area trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Month label as displayed, e.g. "T6/2024"
    pub month_label: String,
    pub price: f64,
}

impl PricingSnapshot {
    /// Lowest and highest trend prices, for chart axis padding.
    pub fn trend_range(&self) -> Option<(f64, f64)> {
        let mut prices = self.price_trend.iter().map(|p| p.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(prices: &[f64]) -> PricingSnapshot {
        PricingSnapshot {
            estimated_price_per_area: 80_000_000.0,
            total_estimated_price: 9_600_000_000.0,
            liquidity_days: 70,
            similar_properties_avg: 78_000_000.0,
            nearby_transactions: Vec::new(),
            price_trend: prices
                .iter()
                .enumerate()
                .map(|(i, &price)| TrendPoint {
                    month_label: format!("T{}/2024", i + 4),
                    price,
                })
                .collect(),
        }
    }

    #[test]
    fn trend_range_spans_min_and_max() {
        let s = snapshot(&[75e6, 77e6, 82e6, 80e6]);
        assert_eq!(s.trend_range(), Some((75e6, 82e6)));
    }

    #[test]
    fn trend_range_empty() {
        assert_eq!(snapshot(&[]).trend_range(), None);
    }
}
