//! List, search, suggest and show over a selection session.

use log::info;
use parcel_catalog::Catalog;
use parcel_core::{Resolution, SelectionController};
use serde::Serialize;

use crate::report::{catalog_line, parcel_report};

#[derive(Serialize)]
struct ListRow<'a> {
    index: usize,
    address: &'a str,
    lot_number: &'a str,
    area: f64,
}

#[derive(Serialize)]
struct SuggestionRow<'a> {
    index: usize,
    address: &'a str,
    distance: usize,
    score: f64,
}

pub fn list(catalog: &Catalog, json: bool) -> anyhow::Result<String> {
    if json {
        let rows: Vec<ListRow> = catalog
            .iter()
            .enumerate()
            .map(|(index, entry)| ListRow {
                index,
                address: &entry.record.address,
                lot_number: &entry.record.lot_number,
                area: entry.record.area,
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    let lines: Vec<String> = catalog
        .iter()
        .enumerate()
        .map(|(index, entry)| catalog_line(index, &entry.record))
        .collect();
    Ok(lines.join("\n"))
}

/// Commit a search and print the selected parcel.
///
/// Fails on an empty query or an empty catalog.
pub fn search(
    controller: &mut SelectionController,
    query: &str,
    json: bool,
) -> anyhow::Result<String> {
    let resolution = controller.search(query)?;
    let index = resolution.index();
    let entry = controller
        .catalog()
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("parcel {} vanished from the catalog", index))?;
    info!("{:?} -> parcel {}", query, index);

    if json {
        let value = serde_json::json!({
            "query": controller.query_text(),
            "resolution": resolution,
            "parcel": entry,
        });
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let header = match resolution {
        Resolution::Matched { distance, .. } => {
            format!("Matched {:?} (edit distance {})", controller.query_text(), distance)
        }
        Resolution::Fallback { .. } => format!(
            "No parcel matched {:?}; showing the default parcel",
            controller.query_text()
        ),
    };
    Ok(format!(
        "{}\n\n{}",
        header,
        parcel_report(index, &entry.record, &entry.pricing)
    ))
}

/// Ranked suggestions, best first. No suggestions is not an error.
pub fn suggest(controller: &SelectionController, query: &str, json: bool) -> anyhow::Result<String> {
    let matches = controller.suggest(query);
    let rows: Vec<SuggestionRow> = matches
        .iter()
        .filter_map(|m| {
            controller.catalog().get(m.index).map(|entry| SuggestionRow {
                index: m.index,
                address: &entry.record.address,
                distance: m.distance,
                score: m.score,
            })
        })
        .collect();

    if json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    if rows.is_empty() {
        return Ok(format!("No suggestions for {:?}", query.trim()));
    }
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            format!(
                "[{}] {}  (distance {}, score {:.2})",
                row.index, row.address, row.distance, row.score
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Select a parcel by catalog index and print it.
pub fn show(controller: &mut SelectionController, index: usize, json: bool) -> anyhow::Result<String> {
    let view = controller.select_by_index(index)?;
    if json {
        return Ok(serde_json::to_string_pretty(&view)?);
    }
    Ok(parcel_report(view.index, view.record, view.pricing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcel_core::ResolverConfig;
    use std::rc::Rc;

    fn controller() -> SelectionController {
        SelectionController::with_catalog(
            Rc::new(Catalog::embedded().unwrap()),
            ResolverConfig::default(),
        )
    }

    #[test]
    fn list_has_one_line_per_parcel() {
        let c = controller();
        let output = list(c.catalog(), false).unwrap();
        assert_eq!(output.lines().count(), 3);

        let json: serde_json::Value = serde_json::from_str(&list(c.catalog(), true).unwrap()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[1]["lot_number"], "502");
    }

    #[test]
    fn search_reports_fallback() {
        let mut c = controller();
        let output = search(&mut c, "zzz-nonexistent-zzz", false).unwrap();
        assert!(output.starts_with("No parcel matched"));
        assert!(output.contains("Parcel #0:"));
    }

    #[test]
    fn search_json_carries_resolution() {
        let mut c = controller();
        let output = search(&mut c, "Hàng Bông", true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["resolution"]["Matched"]["index"], 2);
        assert_eq!(json["parcel"]["record"]["lot_number"], "503");
    }

    #[test]
    fn empty_search_is_an_error() {
        let mut c = controller();
        assert!(search(&mut c, "  ", false).is_err());
    }

    #[test]
    fn suggest_lists_ranked_matches() {
        let c = controller();
        let output = suggest(&c, "Hà Nội", false).unwrap();
        let exact: Vec<&str> = output.lines().filter(|l| l.contains("distance 0")).collect();
        assert_eq!(exact.len(), 2);
        assert!(exact[0].starts_with("[1] 25 Quang Trung"));

        let none = suggest(&c, "zzz-nonexistent-zzz", false).unwrap();
        assert!(none.starts_with("No suggestions"));
    }

    #[test]
    fn show_json_is_the_catalog_entry() {
        let mut c = controller();
        let output = show(&mut c, 0, true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["index"], 0);
        assert_eq!(json["pricing"]["liquidity_days"], 30);
    }

    #[test]
    fn show_rejects_out_of_range() {
        let mut c = controller();
        assert!(show(&mut c, 3, false).is_err());
    }
}
