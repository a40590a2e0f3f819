//! Display formatting for prices, dates and coordinates.

use chrono::NaiveDate;

use crate::parcel::LatLng;

const BILLION: f64 = 1_000_000_000.0;
const MILLION: f64 = 1_000_000.0;

/// Format an amount in VND the way the valuation screen shows it.
///
/// ```rust
/// use parcel_catalog::format::format_vnd;
///
/// assert_eq!(format_vnd(8_120_000_000.0), "8.1 tỷ VNĐ");
/// assert_eq!(format_vnd(95_000_000.0), "95 triệu VNĐ");
/// assert_eq!(format_vnd(750_000.0), "750.000 VNĐ");
/// ```
pub fn format_vnd(amount: f64) -> String {
    if amount >= BILLION {
        format!("{:.1} tỷ VNĐ", amount / BILLION)
    } else if amount >= MILLION {
        format!("{:.0} triệu VNĐ", amount / MILLION)
    } else {
        format!("{} VNĐ", group_thousands(amount.round() as i64))
    }
}

/// Y-axis tick label for the trend chart, e.g. `95M`.
pub fn format_millions_tick(value: f64) -> String {
    format!("{:.0}M", value / MILLION)
}

/// Vietnamese day/month/year date, e.g. `01/12/2024`.
pub fn format_date_vi(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `lat, lng` with a fixed number of decimals.
pub fn format_lat_lng(point: &LatLng, decimals: usize) -> String {
    format!(
        "{:.*}, {:.*}",
        decimals, point.lat, decimals, point.lng
    )
}

/// Integer with `.` as the thousands separator (vi-VN convention).
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd_billions() {
        assert_eq!(format_vnd(9_600_000_000.0), "9.6 tỷ VNĐ");
        assert_eq!(format_vnd(1_000_000_000.0), "1.0 tỷ VNĐ");
        assert_eq!(format_vnd(10_400_000_000.0), "10.4 tỷ VNĐ");
    }

    #[test]
    fn test_format_vnd_millions() {
        assert_eq!(format_vnd(120_000_000.0), "120 triệu VNĐ");
        assert_eq!(format_vnd(1_000_000.0), "1 triệu VNĐ");
    }

    #[test]
    fn test_format_vnd_small_amounts() {
        assert_eq!(format_vnd(0.0), "0 VNĐ");
        assert_eq!(format_vnd(999.0), "999 VNĐ");
        assert_eq!(format_vnd(12_345.0), "12.345 VNĐ");
        assert_eq!(format_vnd(999_999.0), "999.999 VNĐ");
        assert_eq!(format_vnd(-2_500.0), "-2.500 VNĐ");
    }

    #[test]
    fn test_format_millions_tick() {
        assert_eq!(format_millions_tick(95_000_000.0), "95M");
        assert_eq!(format_millions_tick(112_000_000.0), "112M");
    }

    #[test]
    fn test_format_date_vi() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(format_date_vi(&date), "01/12/2024");
    }

    #[test]
    fn test_format_lat_lng() {
        let point = LatLng::new(10.758, 106.682);
        assert_eq!(format_lat_lng(&point, 5), "10.75800, 106.68200");
    }
}
