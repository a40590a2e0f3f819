//! Typed edits applied to the working copy of a parcel.

use parcel_catalog::ParcelRecord;
use serde::{Deserialize, Serialize};

/// Facility options offered as a checklist on the edit form.
///
/// Free-text facilities entered by the user live in the same list as these.
pub const FACILITY_CHECKLIST: &[&str] = &[
    "Trường học",
    "Bệnh viện",
    "Chợ",
    "Siêu thị",
    "Ngân hàng",
    "Công viên",
    "Bến xe",
];

/// One edit to one field, carrying a value of that field's type.
///
/// Boolean fields are set only through their own variants, never parsed
/// from text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldEdit {
    Address(String),
    LotNumber(String),
    Area(f64),
    ShapeDescription(String),
    DoorOrientation(String),
    LandType(String),
    LegalStatus(String),
    WidthRoad(f64),
    MaxRooms(u32),
    ExpansionPotential(bool),
    TailExpanded(bool),
}

impl FieldEdit {
    pub fn apply(self, record: &mut ParcelRecord) {
        match self {
            FieldEdit::Address(v) => record.address = v,
            FieldEdit::LotNumber(v) => record.lot_number = v,
            FieldEdit::Area(v) => record.area = v,
            FieldEdit::ShapeDescription(v) => record.shape_description = v,
            FieldEdit::DoorOrientation(v) => record.door_orientation = v,
            FieldEdit::LandType(v) => record.land_type = v,
            FieldEdit::LegalStatus(v) => record.legal_status = v,
            FieldEdit::WidthRoad(v) => record.width_road = v,
            FieldEdit::MaxRooms(v) => record.max_rooms = v,
            FieldEdit::ExpansionPotential(v) => record.expansion_potential = v,
            FieldEdit::TailExpanded(v) => record.tail_expanded = v,
        }
    }

    /// Name of the edited field, for logging.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldEdit::Address(_) => "address",
            FieldEdit::LotNumber(_) => "lot_number",
            FieldEdit::Area(_) => "area",
            FieldEdit::ShapeDescription(_) => "shape_description",
            FieldEdit::DoorOrientation(_) => "door_orientation",
            FieldEdit::LandType(_) => "land_type",
            FieldEdit::LegalStatus(_) => "legal_status",
            FieldEdit::WidthRoad(_) => "width_road",
            FieldEdit::MaxRooms(_) => "max_rooms",
            FieldEdit::ExpansionPotential(_) => "expansion_potential",
            FieldEdit::TailExpanded(_) => "tail_expanded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entry;

    #[test]
    fn apply_sets_only_the_named_field() {
        let original = entry("25 Quang Trung, Hà Đông, Hà Nội", &[]).record;
        let mut record = original.clone();

        FieldEdit::Area(150.5).apply(&mut record);
        assert_eq!(record.area, 150.5);

        record.area = original.area;
        assert_eq!(record, original);
    }

    #[test]
    fn boolean_fields_take_bools() {
        let mut record = entry("x", &[]).record;
        FieldEdit::ExpansionPotential(true).apply(&mut record);
        FieldEdit::TailExpanded(true).apply(&mut record);
        assert!(record.expansion_potential);
        assert!(record.tail_expanded);
        FieldEdit::ExpansionPotential(false).apply(&mut record);
        assert!(!record.expansion_potential);
    }

    #[test]
    fn text_and_numeric_fields() {
        let mut record = entry("x", &[]).record;
        FieldEdit::LegalStatus("Đang chờ cấp sổ".to_string()).apply(&mut record);
        FieldEdit::MaxRooms(9).apply(&mut record);
        FieldEdit::WidthRoad(3.5).apply(&mut record);
        FieldEdit::DoorOrientation("Bắc".to_string()).apply(&mut record);
        assert_eq!(record.legal_status, "Đang chờ cấp sổ");
        assert_eq!(record.max_rooms, 9);
        assert_eq!(record.width_road, 3.5);
        assert_eq!(record.door_orientation, "Bắc");
    }

    #[test]
    fn field_names() {
        assert_eq!(FieldEdit::Area(1.0).field_name(), "area");
        assert_eq!(FieldEdit::TailExpanded(true).field_name(), "tail_expanded");
    }

    #[test]
    fn checklist_has_no_duplicates() {
        let mut names: Vec<&str> = FACILITY_CHECKLIST.to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), FACILITY_CHECKLIST.len());
    }
}
