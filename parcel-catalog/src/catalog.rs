use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use log::{info, warn};
use serde::Serialize;

use crate::error::{CatalogError, Result};
use crate::parcel::{LatLng, ParcelRecord};
use crate::pricing::{PricingSnapshot, Transaction, TrendPoint};

/// Embedded parcel rows (flat attributes and pricing scalars).
pub static PARCELS_CSV: &str = include_str!("../../fixtures/parcels.csv");
/// Embedded boundary vertices, `PARCEL,LAT,LNG`, in polygon order.
pub static BOUNDARIES_CSV: &str = include_str!("../../fixtures/boundaries.csv");
/// Embedded nearby facilities, `PARCEL,NAME`, in display order.
pub static FACILITIES_CSV: &str = include_str!("../../fixtures/facilities.csv");
/// Embedded comparable transactions.
pub static TRANSACTIONS_CSV: &str = include_str!("../../fixtures/transactions.csv");
/// Embedded monthly price trend, chronological per parcel.
pub static PRICE_TREND_CSV: &str = include_str!("../../fixtures/price_trend.csv");

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A parcel together with its pricing snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub record: ParcelRecord,
    pub pricing: PricingSnapshot,
}

/// The CSV tables a catalog is built from.
///
/// Child tables reference parcels by their zero-based row in `parcels`.
#[derive(Debug, Clone, Copy)]
pub struct CatalogSources<'a> {
    pub parcels: &'a str,
    pub boundaries: &'a str,
    pub facilities: &'a str,
    pub transactions: &'a str,
    pub price_trend: &'a str,
}

impl CatalogSources<'static> {
    /// The fixtures compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            parcels: PARCELS_CSV,
            boundaries: BOUNDARIES_CSV,
            facilities: FACILITIES_CSV,
            transactions: TRANSACTIONS_CSV,
            price_trend: PRICE_TREND_CSV,
        }
    }
}

/// Fixed-order, read-only sequence of parcels. The index into the catalog is
/// the only stable identifier of a parcel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Load the catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_csv(CatalogSources::embedded())
    }

    /// Build a catalog from the five CSV tables.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parcel_catalog::catalog::{Catalog, CatalogSources};
    ///
    /// let catalog = Catalog::from_csv(CatalogSources::embedded()).unwrap();
    /// assert_eq!(catalog.len(), 3);
    /// ```
    pub fn from_csv(sources: CatalogSources<'_>) -> Result<Self> {
        let mut entries = parse_parcels(sources.parcels)?;
        let size = entries.len();

        for row in read_rows(sources.boundaries)? {
            let parcel = parcel_ref(&row, "boundaries", size)?;
            let lat = parse_f64(&row, 1, "LAT")?;
            let lng = parse_f64(&row, 2, "LNG")?;
            entries[parcel].record.boundary.push(LatLng::new(lat, lng));
        }

        for row in read_rows(sources.facilities)? {
            let parcel = parcel_ref(&row, "facilities", size)?;
            let name = field(&row, 1);
            if name.is_empty() {
                continue;
            }
            let record = &mut entries[parcel].record;
            if record.has_facility(name) {
                warn!("parcel {}: skipping repeated facility {:?}", parcel, name);
            } else {
                record.nearby_facilities.push(name.to_string());
            }
        }

        for row in read_rows(sources.transactions)? {
            let parcel = parcel_ref(&row, "transactions", size)?;
            let transaction = Transaction {
                address: field(&row, 1).to_string(),
                date: parse_date(field(&row, 2))?,
                area: parse_f64(&row, 3, "AREA")?,
                price: parse_f64(&row, 4, "PRICE")?,
                distance_meters: parse_f64(&row, 5, "DISTANCE_M")?,
                price_per_area: parse_f64(&row, 6, "PRICE_PER_M2")?,
            };
            entries[parcel].pricing.nearby_transactions.push(transaction);
        }

        for row in read_rows(sources.price_trend)? {
            let parcel = parcel_ref(&row, "price_trend", size)?;
            let point = TrendPoint {
                month_label: field(&row, 1).to_string(),
                price: parse_f64(&row, 2, "PRICE")?,
            };
            entries[parcel].pricing.price_trend.push(point);
        }

        for (parcel, entry) in entries.iter().enumerate() {
            let points = entry.record.boundary.len();
            if points < 3 {
                return Err(CatalogError::DegenerateBoundary { parcel, points });
            }
        }

        info!("catalog: loaded {} parcels", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Addresses in catalog order (used for the quick-search list).
    pub fn addresses(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|e| e.record.address.as_str())
            .collect()
    }
}

fn read_rows(csv_data: &str) -> Result<Vec<StringRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());
    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result?);
    }
    Ok(rows)
}

fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).unwrap_or("").trim()
}

fn parse_f64(row: &StringRecord, idx: usize, column: &'static str) -> Result<f64> {
    let value = field(row, idx);
    value.parse::<f64>().map_err(|_| CatalogError::InvalidNumber {
        column,
        value: value.to_string(),
    })
}

fn parse_u32(row: &StringRecord, idx: usize, column: &'static str) -> Result<u32> {
    let value = field(row, idx);
    value.parse::<u32>().map_err(|_| CatalogError::InvalidNumber {
        column,
        value: value.to_string(),
    })
}

fn parse_bool(row: &StringRecord, idx: usize, column: &'static str) -> Result<bool> {
    let value = field(row, idx);
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(CatalogError::InvalidBool {
            column,
            value: value.to_string(),
        }),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| CatalogError::DateParse(format!("{value:?}: {e}")))
}

fn parcel_ref(row: &StringRecord, table: &'static str, size: usize) -> Result<usize> {
    let value = field(row, 0);
    let parcel = value
        .parse::<usize>()
        .map_err(|_| CatalogError::InvalidNumber {
            column: "PARCEL",
            value: value.to_string(),
        })?;
    if parcel >= size {
        return Err(CatalogError::ParcelOutOfRange {
            table,
            parcel,
            size,
        });
    }
    Ok(parcel)
}

/// Parse `parcels.csv`.
///
/// Expected columns: ADDRESS, LOT, AREA, SHAPE_DESCRIPTION, DOOR_ORIENTATION,
/// LAND_TYPE, LEGAL_STATUS, LAT, LNG, WIDTH_ROAD, MAX_ROOMS,
/// EXPANSION_POTENTIAL, TAIL_EXPANDED, PRICE_PER_M2, TOTAL_PRICE,
/// LIQUIDITY_DAYS, SIMILAR_AVG
fn parse_parcels(csv_data: &str) -> Result<Vec<CatalogEntry>> {
    let mut entries = Vec::new();
    for row in read_rows(csv_data)? {
        let record = ParcelRecord {
            address: field(&row, 0).to_string(),
            lot_number: field(&row, 1).to_string(),
            area: parse_f64(&row, 2, "AREA")?,
            shape_description: field(&row, 3).to_string(),
            boundary: Vec::new(),
            door_orientation: field(&row, 4).to_string(),
            land_type: field(&row, 5).to_string(),
            legal_status: field(&row, 6).to_string(),
            location: LatLng::new(parse_f64(&row, 7, "LAT")?, parse_f64(&row, 8, "LNG")?),
            width_road: parse_f64(&row, 9, "WIDTH_ROAD")?,
            max_rooms: parse_u32(&row, 10, "MAX_ROOMS")?,
            expansion_potential: parse_bool(&row, 11, "EXPANSION_POTENTIAL")?,
            tail_expanded: parse_bool(&row, 12, "TAIL_EXPANDED")?,
            nearby_facilities: Vec::new(),
        };
        let pricing = PricingSnapshot {
            estimated_price_per_area: parse_f64(&row, 13, "PRICE_PER_M2")?,
            total_estimated_price: parse_f64(&row, 14, "TOTAL_PRICE")?,
            liquidity_days: parse_u32(&row, 15, "LIQUIDITY_DAYS")?,
            similar_properties_avg: parse_f64(&row, 16, "SIMILAR_AVG")?,
            nearby_transactions: Vec::new(),
            price_trend: Vec::new(),
        };
        entries.push(CatalogEntry { record, pricing });
    }
    Ok(entries)
}
