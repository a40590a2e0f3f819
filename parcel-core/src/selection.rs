//! Per-session selection state.
//!
//! `SelectionController` owns which parcel is current, the last search text,
//! and a user-editable working copy of the selected record. The catalog is
//! only ever read.
//!
//! # Phases
//!
//! ```text
//! Searching --search / select_by_index--> Editing --confirm_valuation--> Reviewing
//!     ^                                     |  ^                            |
//!     +---------------reset-----------------+  +-- search / select / edits  +-- select_by_index
//!     +---------------reset---------------------------------------------------+
//! ```

use std::fmt;
use std::rc::Rc;

use log::{debug, info};
use parcel_catalog::{Catalog, ParcelRecord, PricingSnapshot};
use serde::Serialize;

use crate::config::ResolverConfig;
use crate::edit::FieldEdit;
use crate::error::SelectionError;
use crate::resolver::{AddressResolver, Match, Resolution};

/// Where the session is in the search → edit → review flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Searching,
    Editing,
    Reviewing,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Searching => "searching",
            Phase::Editing => "editing",
            Phase::Reviewing => "reviewing",
        };
        f.write_str(name)
    }
}

/// A parcel record shown next to a pricing snapshot.
///
/// For a confirmed valuation `record` is the user's edited copy while
/// `pricing` is still the catalog snapshot of the selected index; pricing is
/// never recomputed from edited fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParcelView<'a> {
    pub index: usize,
    pub record: &'a ParcelRecord,
    pub pricing: &'a PricingSnapshot,
}

#[derive(Debug, Clone)]
pub struct SelectionController {
    resolver: AddressResolver,
    phase: Phase,
    current_index: Option<usize>,
    query_text: String,
    working_copy: Option<ParcelRecord>,
    reviewed: Option<ParcelRecord>,
    /// Facility removed by the last toggle and every position it held, so
    /// toggling it straight back restores the original list.
    last_removed_facility: Option<(String, Vec<usize>)>,
}

impl SelectionController {
    pub fn new(resolver: AddressResolver) -> Self {
        Self {
            resolver,
            phase: Phase::Searching,
            current_index: None,
            query_text: String::new(),
            working_copy: None,
            reviewed: None,
            last_removed_facility: None,
        }
    }

    /// Controller over `catalog` with a freshly built resolver.
    pub fn with_catalog(catalog: Rc<Catalog>, config: ResolverConfig) -> Self {
        Self::new(AddressResolver::new(catalog, config))
    }

    pub fn catalog(&self) -> &Catalog {
        self.resolver.catalog()
    }

    pub fn resolver(&self) -> &AddressResolver {
        &self.resolver
    }

    pub fn catalog_size(&self) -> usize {
        self.catalog().len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn working_copy(&self) -> Option<&ParcelRecord> {
        self.working_copy.as_ref()
    }

    /// The record frozen by `confirm_valuation`, while reviewing.
    pub fn reviewed(&self) -> Option<&ParcelRecord> {
        self.reviewed.as_ref()
    }

    /// Catalog pricing of the current parcel.
    pub fn current_pricing(&self) -> Option<&PricingSnapshot> {
        let index = self.current_index?;
        self.catalog().get(index).map(|entry| &entry.pricing)
    }

    /// Reviewed record with the original pricing of the current index.
    pub fn valuation(&self) -> Option<ParcelView<'_>> {
        let index = self.current_index?;
        let record = self.reviewed.as_ref()?;
        let pricing = &self.catalog().get(index)?.pricing;
        Some(ParcelView {
            index,
            record,
            pricing,
        })
    }

    /// Autocomplete suggestions; never changes state.
    pub fn suggest(&self, query: &str) -> Vec<Match> {
        self.resolver.suggest(query)
    }

    /// Commit a search.
    ///
    /// Selects the best match (or the fallback parcel), replaces the working
    /// copy with a clone of it, and moves to `Editing`.
    ///
    /// Empty text is a no-op: it returns `Err(NoQueryText)` and leaves every
    /// field untouched, including the previous selection. An empty catalog
    /// returns `Err(EmptyCatalog)`, also without changing state.
    pub fn search(&mut self, text: &str) -> Result<Resolution, SelectionError> {
        if self.phase == Phase::Reviewing {
            return Err(SelectionError::InvalidPhase {
                operation: "search",
                phase: self.phase,
            });
        }
        let resolution = self.resolver.resolve(text)?;
        let index = resolution.index();
        let record = self.record_at(index)?.clone();

        self.query_text = text.trim().to_string();
        self.current_index = Some(index);
        self.working_copy = Some(record);
        self.reviewed = None;
        self.last_removed_facility = None;
        self.phase = Phase::Editing;

        if resolution.is_fallback() {
            info!(
                "selection: no parcel matched {:?}, using default parcel {}",
                self.query_text, index
            );
        } else {
            info!("selection: {:?} resolved to parcel {}", self.query_text, index);
        }
        Ok(resolution)
    }

    /// Select a parcel directly, e.g. from a click on its boundary.
    ///
    /// While reviewing, the reviewed record is replaced by the catalog record
    /// and the session stays in `Reviewing`; otherwise it moves to `Editing`.
    pub fn select_by_index(&mut self, index: usize) -> Result<ParcelView<'_>, SelectionError> {
        let record = self.record_at(index)?.clone();

        if self.phase == Phase::Reviewing {
            self.reviewed = Some(record.clone());
        } else {
            self.reviewed = None;
            self.phase = Phase::Editing;
        }
        self.current_index = Some(index);
        self.working_copy = Some(record);
        self.last_removed_facility = None;
        info!("selection: picked parcel {} while {}", index, self.phase);

        let entry = self
            .catalog()
            .get(index)
            .ok_or(SelectionError::OutOfRange {
                index,
                size: self.catalog_size(),
            })?;
        Ok(ParcelView {
            index,
            record: &entry.record,
            pricing: &entry.pricing,
        })
    }

    /// Apply one typed edit to the working copy. The catalog and the current
    /// index are never touched.
    pub fn edit_working_copy(&mut self, edit: FieldEdit) -> Result<&ParcelRecord, SelectionError> {
        debug!("selection: edit {}", edit.field_name());
        self.last_removed_facility = None;
        let record = self.editable("edit_working_copy")?;
        edit.apply(record);
        Ok(&*record)
    }

    /// Add `name` (trimmed) to the facilities if absent, remove every copy of
    /// it if present. Blank names are ignored.
    ///
    /// Toggling the same name twice in a row leaves the list as it was.
    pub fn toggle_facility(&mut self, name: &str) -> Result<&[String], SelectionError> {
        let last_removed = self.last_removed_facility.take();
        let name = name.trim();
        let record = self.editable("toggle_facility")?;
        if name.is_empty() {
            return self.facilities();
        }
        let facilities = &mut record.nearby_facilities;

        let positions: Vec<usize> = facilities
            .iter()
            .enumerate()
            .filter(|(_, f)| f.as_str() == name)
            .map(|(pos, _)| pos)
            .collect();

        let mut removed = None;
        if positions.is_empty() {
            match last_removed {
                Some((prev, positions)) if prev == name => {
                    // Ascending order keeps each earlier position valid.
                    for pos in positions {
                        facilities.insert(pos.min(facilities.len()), name.to_string());
                    }
                }
                _ => facilities.push(name.to_string()),
            }
        } else {
            for &pos in positions.iter().rev() {
                facilities.remove(pos);
            }
            removed = Some((name.to_string(), positions));
        }
        self.last_removed_facility = removed;
        self.facilities()
    }

    /// Add a free-text facility verbatim (trimmed) unless already listed.
    pub fn add_custom_facility(&mut self, name: &str) -> Result<&[String], SelectionError> {
        self.last_removed_facility = None;
        let name = name.trim();
        let record = self.editable("add_custom_facility")?;
        if !name.is_empty() && !record.has_facility(name) {
            record.nearby_facilities.push(name.to_string());
        }
        self.facilities()
    }

    /// Freeze the working copy for display next to the catalog pricing of
    /// the current parcel.
    pub fn confirm_valuation(&mut self) -> Result<ParcelView<'_>, SelectionError> {
        let record = self.editable("confirm_valuation")?.clone();
        self.reviewed = Some(record);
        self.last_removed_facility = None;
        self.phase = Phase::Reviewing;
        info!("selection: valuation confirmed for parcel {:?}", self.current_index);

        self.valuation().ok_or(SelectionError::InvalidPhase {
            operation: "confirm_valuation",
            phase: Phase::Reviewing,
        })
    }

    /// Back to the initial empty `Searching` state.
    pub fn reset(&mut self) {
        self.phase = Phase::Searching;
        self.current_index = None;
        self.query_text.clear();
        self.working_copy = None;
        self.reviewed = None;
        self.last_removed_facility = None;
        debug!("selection: reset");
    }

    /// `OutOfRange` for any index outside `[0, size)`, including every index
    /// of an empty catalog. `EmptyCatalog` only comes from `search`.
    fn record_at(&self, index: usize) -> Result<&ParcelRecord, SelectionError> {
        let size = self.catalog_size();
        self.catalog()
            .get(index)
            .map(|entry| &entry.record)
            .ok_or(SelectionError::OutOfRange { index, size })
    }

    fn editable(&mut self, operation: &'static str) -> Result<&mut ParcelRecord, SelectionError> {
        let phase = self.phase;
        if phase != Phase::Editing {
            return Err(SelectionError::InvalidPhase { operation, phase });
        }
        self.working_copy
            .as_mut()
            .ok_or(SelectionError::InvalidPhase { operation, phase })
    }

    fn facilities(&self) -> Result<&[String], SelectionError> {
        self.working_copy
            .as_ref()
            .map(|record| record.nearby_facilities.as_slice())
            .ok_or(SelectionError::InvalidPhase {
                operation: "facilities",
                phase: self.phase,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{catalog, embedded, entry};

    fn controller() -> SelectionController {
        SelectionController::with_catalog(embedded(), ResolverConfig::default())
    }

    #[test]
    fn starts_empty() {
        let c = controller();
        assert_eq!(c.phase(), Phase::Searching);
        assert_eq!(c.current_index(), None);
        assert_eq!(c.query_text(), "");
        assert!(c.working_copy().is_none());
        assert_eq!(c.catalog_size(), 3);
    }

    #[test]
    fn scenario_search_fallback_out_of_range_and_toggle() {
        let mut c = controller();

        assert_eq!(c.search("Quang Trung").unwrap().index(), 1);
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.phase(), Phase::Editing);

        let resolution = c.search("zzz-nonexistent-zzz").unwrap();
        assert_eq!(resolution, Resolution::Fallback { index: 0 });
        assert_eq!(c.current_index(), Some(0));
        assert_eq!(c.phase(), Phase::Editing);

        assert_eq!(
            c.select_by_index(5).unwrap_err(),
            SelectionError::OutOfRange { index: 5, size: 3 }
        );

        let before = c.working_copy().unwrap().nearby_facilities.clone();
        c.toggle_facility("Chợ").unwrap();
        assert!(c.working_copy().unwrap().has_facility("Chợ"));
        c.toggle_facility("Chợ").unwrap();
        assert_eq!(c.working_copy().unwrap().nearby_facilities, before);
    }

    #[test]
    fn search_stores_query_and_clones_record() {
        let mut c = controller();
        c.search("  Hàng Bông ").unwrap();
        assert_eq!(c.query_text(), "Hàng Bông");
        assert_eq!(c.working_copy(), Some(&c.catalog().get(2).unwrap().record));
    }

    #[test]
    fn empty_search_does_not_mutate() {
        let mut c = controller();
        assert_eq!(c.search(""), Err(SelectionError::NoQueryText));
        assert_eq!(c.search("   "), Err(SelectionError::NoQueryText));
        assert!(c.suggest("").is_empty());
        assert_eq!(c.phase(), Phase::Searching);
        assert_eq!(c.query_text(), "");
        assert_eq!(c.current_index(), None);

        c.search("Quang Trung").unwrap();
        assert_eq!(c.search(""), Err(SelectionError::NoQueryText));
        assert_eq!(c.current_index(), Some(1));
        assert_eq!(c.query_text(), "Quang Trung");
    }

    #[test]
    fn empty_catalog_is_reported() {
        let mut c = SelectionController::with_catalog(catalog(&[]), ResolverConfig::default());
        assert_eq!(c.search("Quang Trung"), Err(SelectionError::EmptyCatalog));
        assert_eq!(
            c.select_by_index(0).unwrap_err(),
            SelectionError::OutOfRange { index: 0, size: 0 }
        );
        assert_eq!(c.phase(), Phase::Searching);
    }

    #[test]
    fn select_by_index_copies_catalog_record() {
        let mut c = controller();
        for i in 0..c.catalog_size() {
            let view = c.select_by_index(i).unwrap();
            assert_eq!(view.index, i);
            let expected = c.catalog().get(i).unwrap().record.clone();
            assert_eq!(c.working_copy(), Some(&expected));
            assert_eq!(c.phase(), Phase::Editing);
        }
    }

    #[test]
    fn edits_never_touch_the_catalog() {
        let mut c = controller();
        c.select_by_index(1).unwrap();
        let snapshot = c.catalog().get(1).unwrap().clone();

        c.edit_working_copy(FieldEdit::Area(999.0)).unwrap();
        c.edit_working_copy(FieldEdit::Address("khác".to_string())).unwrap();
        c.edit_working_copy(FieldEdit::ExpansionPotential(true)).unwrap();
        c.toggle_facility("Ngân hàng").unwrap();
        c.add_custom_facility("Gần sân bay").unwrap();

        let copy = c.working_copy().unwrap();
        assert_eq!(copy.area, 999.0);
        assert!(copy.expansion_potential);
        assert_eq!(c.catalog().get(1).unwrap(), &snapshot);
        assert_eq!(c.current_index(), Some(1));
    }

    #[test]
    fn toggle_present_facility_twice_keeps_order() {
        let mut c = controller();
        c.select_by_index(0).unwrap();
        let before = c.working_copy().unwrap().nearby_facilities.clone();

        let after_first = c.toggle_facility("Bệnh viện Quận 5").unwrap().to_vec();
        assert_eq!(after_first.len(), before.len() - 1);
        let after_second = c.toggle_facility("Bệnh viện Quận 5").unwrap().to_vec();
        assert_eq!(after_second, before);
    }

    #[test]
    fn toggle_twice_restores_repeated_facility() {
        let catalog = Rc::new(Catalog::new(vec![entry(
            "1 Lê Lợi, Quận 1, TP.HCM",
            &["Chợ", "Trường", "Chợ"],
        )]));
        let mut c = SelectionController::with_catalog(catalog, ResolverConfig::default());
        c.select_by_index(0).unwrap();

        assert_eq!(c.toggle_facility("Chợ").unwrap(), ["Trường"]);
        assert_eq!(c.toggle_facility("Chợ").unwrap(), ["Chợ", "Trường", "Chợ"]);
    }

    #[test]
    fn toggle_trims_names() {
        let mut c = controller();
        c.select_by_index(2).unwrap();
        let before = c.working_copy().unwrap().nearby_facilities.clone();

        c.toggle_facility(" Siêu thị ").unwrap();
        let list = c.add_custom_facility("Siêu thị").unwrap().to_vec();
        assert_eq!(list.iter().filter(|f| f.as_str() == "Siêu thị").count(), 1);
        assert!(!list.contains(&" Siêu thị ".to_string()));

        c.toggle_facility("Siêu thị").unwrap();
        assert_eq!(c.toggle_facility("   ").unwrap(), before.as_slice());
    }

    #[test]
    fn custom_facilities_merge_without_duplicates() {
        let mut c = controller();
        c.select_by_index(2).unwrap();
        let before = c.working_copy().unwrap().nearby_facilities.len();

        c.add_custom_facility("  Phố đi bộ  ").unwrap();
        c.add_custom_facility("Phố đi bộ").unwrap();
        c.add_custom_facility("   ").unwrap();
        c.toggle_facility("Chợ").unwrap();
        let list = c.toggle_facility("Phố đi bộ").unwrap().to_vec();

        assert!(!list.contains(&"Phố đi bộ".to_string()));
        assert!(list.contains(&"Chợ".to_string()));
        assert_eq!(list.len(), before + 1);
    }

    #[test]
    fn confirm_keeps_original_pricing() {
        let mut c = controller();
        c.search("Hàng Bông").unwrap();
        c.edit_working_copy(FieldEdit::Area(1000.0)).unwrap();
        c.edit_working_copy(FieldEdit::LegalStatus("Đang chờ cấp sổ".to_string()))
            .unwrap();

        let expected_pricing = c.catalog().get(2).unwrap().pricing.clone();
        let view = c.confirm_valuation().unwrap();
        assert_eq!(view.index, 2);
        assert_eq!(view.record.area, 1000.0);
        assert_eq!(view.pricing, &expected_pricing);
        assert_eq!(c.phase(), Phase::Reviewing);
        assert_eq!(c.reviewed().unwrap().legal_status, "Đang chờ cấp sổ");
    }

    #[test]
    fn phase_violations_are_rejected() {
        let mut c = controller();
        assert!(matches!(
            c.edit_working_copy(FieldEdit::Area(1.0)),
            Err(SelectionError::InvalidPhase { phase: Phase::Searching, .. })
        ));
        assert!(matches!(
            c.confirm_valuation(),
            Err(SelectionError::InvalidPhase { operation: "confirm_valuation", .. })
        ));
        assert!(c.toggle_facility("Chợ").is_err());

        c.search("Quang Trung").unwrap();
        c.confirm_valuation().unwrap();
        assert!(matches!(
            c.edit_working_copy(FieldEdit::MaxRooms(2)),
            Err(SelectionError::InvalidPhase { phase: Phase::Reviewing, .. })
        ));
        assert!(matches!(
            c.search("Hàng Bông"),
            Err(SelectionError::InvalidPhase { operation: "search", .. })
        ));
        assert!(c.confirm_valuation().is_err());
    }

    #[test]
    fn map_pick_while_reviewing_stays_reviewing() {
        let mut c = controller();
        c.search("Quang Trung").unwrap();
        c.edit_working_copy(FieldEdit::Area(1.0)).unwrap();
        c.confirm_valuation().unwrap();

        c.select_by_index(2).unwrap();
        assert_eq!(c.phase(), Phase::Reviewing);
        let view = c.valuation().unwrap();
        assert_eq!(view.index, 2);
        assert_eq!(view.record, &c.catalog().get(2).unwrap().record);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut c = controller();
        c.search("Quang Trung").unwrap();
        c.confirm_valuation().unwrap();
        c.reset();
        assert_eq!(c.phase(), Phase::Searching);
        assert_eq!(c.current_index(), None);
        assert_eq!(c.query_text(), "");
        assert!(c.working_copy().is_none());
        assert!(c.reviewed().is_none());
        assert!(c.valuation().is_none());

        // Searching is allowed again after a reset.
        assert_eq!(c.search("Hàng Bông").unwrap().index(), 2);
    }

    #[test]
    fn current_pricing_follows_selection() {
        let mut c = controller();
        assert!(c.current_pricing().is_none());
        c.select_by_index(1).unwrap();
        assert_eq!(c.current_pricing().unwrap().liquidity_days, 70);
    }
}
