use crate::config::TableLabels;
use crate::models::{
    FilterState, PotholeRecord, PotholeTable, QuartileChoice, UrbanRuralChoice,
};
use crate::services::quartiles::QuartileBuckets;
use serde::Serialize;
use serde_json::{json, Value};

/// Display columns in order: raw name, human-readable label.
pub const DISPLAY_COLUMNS: [(&str, &str); 5] = [
    ("image_id", "image id"),
    ("damaged_area", "damaged area"),
    ("num_potholes", "num potholes"),
    ("urban/rural", "urban/rural"),
    ("severity_score", "severity score"),
];

/// Read-only view over the loaded table.
pub type FilteredView<'a> = Vec<&'a PotholeRecord>;

/// The projected table handed to the data grid.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    pub count: usize,
}

/// Predicates over the pothole table. Quartile edges come from the
/// unfiltered table and are fixed for the engine's lifetime.
pub struct FilterEngine<'a> {
    table: &'a PotholeTable,
    quartiles: Option<&'a QuartileBuckets>,
}

impl<'a> FilterEngine<'a> {
    pub fn new(table: &'a PotholeTable, quartiles: Option<&'a QuartileBuckets>) -> Self {
        Self { table, quartiles }
    }

    /// Apply every active predicate in order. Each step narrows the previous
    /// view into a new one.
    pub fn apply(&self, state: &FilterState) -> FilteredView<'a> {
        let view: FilteredView<'a> = self.table.records.iter().collect();
        let view = narrow(view, |r| in_score_range(r, state.score_range));
        let view = self.by_quartile(view, state.quartile);
        let view = narrow(view, |r| in_count_range(r, state.count_range));
        let view = by_urban_rural(view, state.urban_rural);
        let view = self.by_location(view, &state.locations);
        let view = by_search(view, &state.search);

        tracing::debug!(
            total = self.table.len(),
            matched = view.len(),
            "Filtered pothole table"
        );
        view
    }

    fn by_quartile(&self, view: FilteredView<'a>, choice: QuartileChoice) -> FilteredView<'a> {
        let QuartileChoice::Only(quartile) = choice else {
            return view;
        };
        let Some(buckets) = self.quartiles else {
            return Vec::new();
        };
        narrow(view, |r| {
            r.damaged_area.and_then(|area| buckets.bucket_of(area)) == Some(quartile)
        })
    }

    fn by_location(
        &self,
        view: FilteredView<'a>,
        locations: &[Option<String>],
    ) -> FilteredView<'a> {
        if !self.table.has_locations || locations.is_empty() {
            return view;
        }
        narrow(view, |r| locations.contains(&r.location))
    }
}

fn narrow<'a>(
    view: FilteredView<'a>,
    predicate: impl Fn(&PotholeRecord) -> bool,
) -> FilteredView<'a> {
    view.into_iter().filter(|r| predicate(*r)).collect()
}

fn in_score_range(record: &PotholeRecord, (min, max): (f64, f64)) -> bool {
    record
        .severity_score
        .is_some_and(|score| score >= min && score <= max)
}

fn in_count_range(record: &PotholeRecord, (min, max): (i64, i64)) -> bool {
    record
        .num_potholes
        .is_some_and(|count| count >= min && count <= max)
}

fn by_urban_rural(view: FilteredView<'_>, choice: UrbanRuralChoice) -> FilteredView<'_> {
    match choice {
        UrbanRuralChoice::All => view,
        UrbanRuralChoice::Flag(flag) => narrow(view, |r| r.urban_rural == Some(flag)),
    }
}

/// Case-insensitive substring match on `image_id`; null ids never match.
fn by_search<'a>(view: FilteredView<'a>, term: &str) -> FilteredView<'a> {
    if term.is_empty() {
        return view;
    }
    let needle = term.to_lowercase();
    narrow(view, |r| {
        r.image_id
            .as_ref()
            .is_some_and(|id| id.to_lowercase().contains(&needle))
    })
}

/// Restrict the view to the display columns, labelled per `labels`.
pub fn project(view: &[&PotholeRecord], labels: TableLabels) -> DisplayTable {
    let columns = DISPLAY_COLUMNS
        .iter()
        .map(|(raw, human)| match labels {
            TableLabels::Raw => raw.to_string(),
            TableLabels::Human => human.to_string(),
        })
        .collect();

    let rows: Vec<Vec<Value>> = view
        .iter()
        .map(|r| {
            vec![
                json!(r.image_id),
                json!(r.damaged_area),
                json!(r.num_potholes),
                json!(r.urban_rural),
                json!(r.severity_score),
            ]
        })
        .collect();

    DisplayTable {
        count: rows.len(),
        columns,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        id: Option<&str>,
        area: f64,
        count: i64,
        urban_rural: i64,
        score: f64,
        location: Option<&str>,
    ) -> PotholeRecord {
        PotholeRecord {
            image_id: id.map(str::to_string),
            damaged_area: Some(area),
            num_potholes: Some(count),
            urban_rural: Some(urban_rural),
            severity_score: Some(score),
            link_photo: None,
            converted_link: None,
            location: location.map(str::to_string),
        }
    }

    fn table() -> PotholeTable {
        PotholeTable {
            records: vec![
                record(Some("IMG_001"), 1.0, 1, 0, 10.0, Some("Mission")),
                record(Some("img_002"), 2.0, 2, 1, 35.0, Some("SoMa")),
                record(Some("IMG_003"), 3.0, 3, 0, 55.0, Some("Mission")),
                record(Some("road_004"), 4.0, 4, 1, 70.0, Some("Sunset")),
                record(Some("road_005"), 5.0, 5, 0, 85.0, Some("SoMa")),
                record(None, 6.0, 6, 1, 90.0, Some("Sunset")),
                record(Some("img_007"), 7.0, 7, 0, 95.0, Some("Mission")),
                record(Some("img_008"), 8.0, 8, 1, 100.0, Some("Richmond")),
            ],
            has_photo_links: false,
            has_locations: true,
        }
    }

    fn ids(view: &[&PotholeRecord]) -> Vec<Option<String>> {
        view.iter().map(|r| r.image_id.clone()).collect()
    }

    #[test]
    fn defaults_keep_every_row() {
        let table = table();
        let buckets = QuartileBuckets::compute(table.records.iter().filter_map(|r| r.damaged_area));
        let engine = FilterEngine::new(&table, buckets.as_ref());
        let view = engine.apply(&FilterState::defaults_for(&table));
        assert_eq!(view.len(), 8);
    }

    #[test]
    fn score_range_is_inclusive() {
        let table = table();
        let engine = FilterEngine::new(&table, None);
        let mut state = FilterState::defaults_for(&table);
        state.score_range = (35.0, 70.0);
        let view = engine.apply(&state);
        assert_eq!(
            ids(&view),
            vec![
                Some("img_002".to_string()),
                Some("IMG_003".to_string()),
                Some("road_004".to_string())
            ]
        );
    }

    #[test]
    fn quartile_uses_unfiltered_edges() {
        let table = table();
        let buckets = QuartileBuckets::compute(table.records.iter().filter_map(|r| r.damaged_area));
        let engine = FilterEngine::new(&table, buckets.as_ref());

        let mut state = FilterState::defaults_for(&table);
        state.quartile = QuartileChoice::Only(crate::models::Quartile::Q4);
        let q4 = engine.apply(&state);
        assert_eq!(q4.len(), 2);

        // Narrowing the score range must not shift the buckets
        state.score_range = (95.0, 100.0);
        let narrowed = engine.apply(&state);
        assert_eq!(narrowed.len(), 2);
        assert!(narrowed.iter().all(|r| r.damaged_area.unwrap() >= 7.0));
    }

    #[test]
    fn quartile_without_buckets_matches_nothing() {
        let table = table();
        let engine = FilterEngine::new(&table, None);
        let mut state = FilterState::defaults_for(&table);
        state.quartile = QuartileChoice::Only(crate::models::Quartile::Q1);
        assert!(engine.apply(&state).is_empty());
    }

    #[test]
    fn count_and_urban_rural() {
        let table = table();
        let engine = FilterEngine::new(&table, None);
        let mut state = FilterState::defaults_for(&table);
        state.count_range = (2, 6);
        state.urban_rural = UrbanRuralChoice::Flag(1);
        let view = engine.apply(&state);
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|r| r.urban_rural == Some(1)));
    }

    #[test]
    fn location_selection() {
        let table = table();
        let engine = FilterEngine::new(&table, None);
        let mut state = FilterState::defaults_for(&table);
        state.locations = vec![Some("SoMa".to_string()), Some("Richmond".to_string())];
        assert_eq!(engine.apply(&state).len(), 3);

        state.locations.clear();
        assert_eq!(engine.apply(&state).len(), 8);
    }

    #[test]
    fn rows_without_location_are_selectable() {
        let mut table = table();
        table
            .records
            .push(record(Some("img_009"), 9.0, 2, 0, 40.0, None));
        let engine = FilterEngine::new(&table, None);

        let mut state = FilterState::defaults_for(&table);
        assert_eq!(state.locations.last(), Some(&None));
        assert_eq!(engine.apply(&state).len(), 9);

        state.locations = vec![None];
        assert_eq!(ids(&engine.apply(&state)), vec![Some("img_009".to_string())]);

        state.locations = vec![Some("Sunset".to_string())];
        assert_eq!(engine.apply(&state).len(), 2);
    }

    #[test]
    fn location_ignored_without_column() {
        let mut table = table();
        table.has_locations = false;
        let engine = FilterEngine::new(&table, None);
        let mut state = FilterState::defaults_for(&table);
        state.locations = vec![Some("Nowhere".to_string())];
        assert_eq!(engine.apply(&state).len(), 8);
    }

    #[test]
    fn search_is_case_insensitive_and_null_safe() {
        let table = table();
        let engine = FilterEngine::new(&table, None);
        let mut state = FilterState::defaults_for(&table);
        state.search = "img".to_string();
        let view = engine.apply(&state);
        assert_eq!(view.len(), 5);
        assert!(view.iter().all(|r| r.image_id.is_some()));

        state.search = "abc".to_string();
        assert!(engine.apply(&state).is_empty());
    }

    #[test]
    fn sequential_filters_equal_conjunction() {
        let table = table();
        let buckets = QuartileBuckets::compute(table.records.iter().filter_map(|r| r.damaged_area))
            .unwrap();
        let engine = FilterEngine::new(&table, Some(&buckets));

        let mut state = FilterState::defaults_for(&table);
        state.score_range = (30.0, 96.0);
        state.quartile = QuartileChoice::Only(crate::models::Quartile::Q2);
        state.count_range = (1, 8);
        state.urban_rural = UrbanRuralChoice::Flag(0);
        state.search = "IMG".to_string();

        let sequential = engine.apply(&state);
        let conjunction: Vec<&PotholeRecord> = table
            .records
            .iter()
            .filter(|r| {
                in_score_range(r, state.score_range)
                    && buckets.bucket_of(r.damaged_area.unwrap())
                        == Some(crate::models::Quartile::Q2)
                    && in_count_range(r, state.count_range)
                    && r.urban_rural == Some(0)
                    && r
                        .image_id
                        .as_ref()
                        .is_some_and(|id| id.to_lowercase().contains("img"))
            })
            .collect();

        assert_eq!(ids(&sequential), ids(&conjunction));
        assert_eq!(ids(&sequential), vec![Some("IMG_003".to_string())]);
    }

    #[test]
    fn projection_labels() {
        let table = table();
        let view: Vec<&PotholeRecord> = table.records.iter().take(2).collect();

        let raw = project(&view, TableLabels::Raw);
        assert_eq!(
            raw.columns,
            vec!["image_id", "damaged_area", "num_potholes", "urban/rural", "severity_score"]
        );
        assert_eq!(raw.count, 2);
        assert_eq!(raw.rows[0][0], json!("IMG_001"));
        assert_eq!(raw.rows[0][4], json!(10.0));

        let human = project(&view, TableLabels::Human);
        assert_eq!(
            human.columns,
            vec!["image id", "damaged area", "num potholes", "urban/rural", "severity score"]
        );
        assert_eq!(human.rows, raw.rows);
    }
}
