//! Plain-text rendering of parcels and valuations.

use std::fmt::Write;

use parcel_catalog::format::{format_date_vi, format_lat_lng, format_millions_tick, format_vnd};
use parcel_catalog::parcel::expansion_label;
use parcel_catalog::{ParcelRecord, PricingSnapshot};

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// One line per parcel: index, lot and address.
pub fn catalog_line(index: usize, record: &ParcelRecord) -> String {
    format!(
        "[{}] lot {:<6} {:>8} m²  {}",
        index, record.lot_number, record.area, record.address
    )
}

/// Parcel attributes followed by its valuation.
pub fn parcel_report(index: usize, record: &ParcelRecord, pricing: &PricingSnapshot) -> String {
    let mut out = String::new();
    // Writing to a String never fails.
    let _ = write_parcel(&mut out, index, record, pricing);
    out
}

fn write_parcel(
    out: &mut String,
    index: usize,
    record: &ParcelRecord,
    pricing: &PricingSnapshot,
) -> std::fmt::Result {
    writeln!(out, "Parcel #{}: {}", index, record.address)?;
    writeln!(out, "  Lot number:        {}", record.lot_number)?;
    writeln!(out, "  Area:              {} m²", record.area)?;
    writeln!(out, "  Shape:             {}", record.shape_description)?;
    writeln!(out, "  Door orientation:  {}", record.door_orientation)?;
    writeln!(out, "  Land type:         {}", record.land_type)?;
    writeln!(out, "  Legal status:      {} ({:?})", record.legal_status, record.legal_tone())?;
    writeln!(out, "  Location:          {}", format_lat_lng(&record.location, 5))?;
    if let Some(bounds) = record.bounds() {
        writeln!(
            out,
            "  Bounds:            {} .. {}",
            format_lat_lng(&bounds.south_west, 5),
            format_lat_lng(&bounds.north_east, 5)
        )?;
    }
    writeln!(out, "  Road width:        {} m", record.width_road)?;
    writeln!(out, "  Max rooms:         {}", record.max_rooms)?;
    writeln!(out, "  Expansion:         {}", expansion_label(record.expansion_potential))?;
    writeln!(out, "  Tail expanded:     {}", yes_no(record.tail_expanded))?;
    if !record.nearby_facilities.is_empty() {
        writeln!(out, "  Nearby facilities:")?;
        for facility in &record.nearby_facilities {
            writeln!(out, "    - {}", facility)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Valuation")?;
    writeln!(out, "  Price per m²:      {}", format_vnd(pricing.estimated_price_per_area))?;
    writeln!(out, "  Estimated total:   {}", format_vnd(pricing.total_estimated_price))?;
    writeln!(out, "  Liquidity:         {} ngày", pricing.liquidity_days)?;
    writeln!(out, "  Similar average:   {}", format_vnd(pricing.similar_properties_avg))?;
    if !pricing.price_trend.is_empty() {
        let trend: Vec<String> = pricing
            .price_trend
            .iter()
            .map(|p| format!("{} {}", p.month_label, format_millions_tick(p.price)))
            .collect();
        writeln!(out, "  Trend:             {}", trend.join(", "))?;
    }
    if !pricing.nearby_transactions.is_empty() {
        writeln!(out, "  Nearby transactions:")?;
        for tx in &pricing.nearby_transactions {
            writeln!(
                out,
                "    {}  {}  {} m²  {}m  {} ({}/m²)",
                format_date_vi(&tx.date),
                tx.address,
                tx.area,
                tx.distance_meters,
                format_vnd(tx.price),
                format_vnd(tx.price_per_area)
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_catalog::Catalog;

    #[test]
    fn report_includes_attributes_and_valuation() {
        let catalog = Catalog::embedded().unwrap();
        let entry = catalog.get(1).unwrap();
        let report = parcel_report(1, &entry.record, &entry.pricing);

        assert!(report.starts_with("Parcel #1: 25 Quang Trung, Hà Đông, Hà Nội"));
        assert!(report.contains("Lot number:        502"));
        assert!(report.contains("Estimated total:   9.6 tỷ VNĐ"));
        assert!(report.contains("Liquidity:         70 ngày"));
        assert!(report.contains("T4/2024 75M"));
        assert!(report.contains("❌ Không thể mở rộng"));
    }

    #[test]
    fn catalog_line_shows_index_and_address() {
        let catalog = Catalog::embedded().unwrap();
        let line = catalog_line(2, &catalog.get(2).unwrap().record);
        assert!(line.starts_with("[2] lot 503"));
        assert!(line.ends_with("8 Hàng Bông, Hoàn Kiếm, Hà Nội"));
    }
}
