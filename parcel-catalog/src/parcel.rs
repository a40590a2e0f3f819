use serde::{Deserialize, Serialize};

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned bounding box of a boundary polygon, used to fit the map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

/// A land parcel as listed in the catalog.
///
/// Catalog entries are never mutated; the selection layer edits a cloned
/// working copy instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelRecord {
    /// Free-text postal address. The only field used for matching.
    pub address: String,
    pub lot_number: String,
    /// Area in square metres
    pub area: f64,
    pub shape_description: String,
    /// Ordered, closed polygon with at least three vertices.
    pub boundary: Vec<LatLng>,
    pub door_orientation: String,
    pub land_type: String,
    pub legal_status: String,
    /// Representative point, used as the map centre.
    pub location: LatLng,
    /// Width of the road in front of the parcel, in metres
    pub width_road: f64,
    pub max_rooms: u32,
    pub expansion_potential: bool,
    /// Whether the lot widens towards the back ("nở hậu").
    pub tail_expanded: bool,
    /// Nearby facilities in display order.
    pub nearby_facilities: Vec<String>,
}

impl ParcelRecord {
    /// Bounding box of the boundary polygon, or `None` for an empty boundary.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.boundary.first()?;
        let mut south_west = *first;
        let mut north_east = *first;
        for point in &self.boundary[1..] {
            south_west.lat = south_west.lat.min(point.lat);
            south_west.lng = south_west.lng.min(point.lng);
            north_east.lat = north_east.lat.max(point.lat);
            north_east.lng = north_east.lng.max(point.lng);
        }
        Some(Bounds {
            south_west,
            north_east,
        })
    }

    pub fn legal_tone(&self) -> LegalTone {
        LegalTone::from_status(&self.legal_status)
    }

    pub fn has_facility(&self, name: &str) -> bool {
        self.nearby_facilities.iter().any(|f| f == name)
    }
}

/// Display tone derived from the free-text legal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LegalTone {
    /// Paperwork complete ("đầy đủ")
    Complete,
    /// Paperwork pending ("chờ")
    Pending,
    Neutral,
}

impl LegalTone {
    pub fn from_status(status: &str) -> Self {
        if status.contains("đầy đủ") {
            LegalTone::Complete
        } else if status.contains("chờ") {
            LegalTone::Pending
        } else {
            LegalTone::Neutral
        }
    }

    /// (background, text, border) colours for the status badge.
    pub fn colors(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            LegalTone::Complete => ("#F0FDF4", "#15803D", "#BBF7D0"),
            LegalTone::Pending => ("#FEFCE8", "#A16207", "#FEF08A"),
            LegalTone::Neutral => ("#F9FAFB", "#374151", "#E5E7EB"),
        }
    }
}

/// Display text for the expansion-potential flag.
pub fn expansion_label(expansion_potential: bool) -> &'static str {
    if expansion_potential {
        "✔️ Có thể mở rộng (nở hậu)"
    } else {
        "❌ Không thể mở rộng"
    }
}
