/// One row of the pothole detection table.
#[derive(Debug, Clone, Default)]
pub struct PotholeRecord {
    pub image_id: Option<String>,
    pub damaged_area: Option<f64>,
    pub num_potholes: Option<i64>,
    /// `urban/rural` flag, 0 or 1 by convention
    pub urban_rural: Option<i64>,
    /// 0-100 by convention; not enforced
    pub severity_score: Option<f64>,
    pub link_photo: Option<String>,
    /// Thumbnail URL derived from `link_photo` once, at load time
    pub converted_link: Option<String>,
    pub location: Option<String>,
}

/// The loaded pothole table plus which optional columns it carried.
#[derive(Debug, Clone, Default)]
pub struct PotholeTable {
    pub records: Vec<PotholeRecord>,
    pub has_photo_links: bool,
    pub has_locations: bool,
}

impl PotholeTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed (min, max) severity score over non-null values
    pub fn severity_bounds(&self) -> Option<(f64, f64)> {
        min_max(self.records.iter().filter_map(|r| r.severity_score))
    }

    /// Observed (min, max) pothole count over non-null values
    pub fn count_bounds(&self) -> Option<(i64, i64)> {
        let counts = self.records.iter().filter_map(|r| r.num_potholes);
        counts.fold(None, |acc, c| match acc {
            None => Some((c, c)),
            Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
        })
    }

    /// Distinct `location` values in first-seen order, `None` standing for
    /// rows without one. Empty without the column.
    pub fn distinct_locations(&self) -> Vec<Option<String>> {
        if !self.has_locations {
            return Vec::new();
        }
        let mut seen = Vec::new();
        for location in self.records.iter().map(|r| &r.location) {
            if !seen.contains(location) {
                seen.push(location.clone());
            }
        }
        seen
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pothole(score: Option<f64>, count: Option<i64>, location: Option<&str>) -> PotholeRecord {
        PotholeRecord {
            severity_score: score,
            num_potholes: count,
            location: location.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn bounds_ignore_nulls() {
        let table = PotholeTable {
            records: vec![
                pothole(Some(12.5), Some(3), None),
                pothole(None, None, None),
                pothole(Some(88.0), Some(1), None),
            ],
            ..Default::default()
        };
        assert_eq!(table.severity_bounds(), Some((12.5, 88.0)));
        assert_eq!(table.count_bounds(), Some((1, 3)));
    }

    #[test]
    fn bounds_of_empty_table() {
        let table = PotholeTable::default();
        assert!(table.is_empty());
        assert_eq!(table.severity_bounds(), None);
        assert_eq!(table.count_bounds(), None);
    }

    #[test]
    fn distinct_locations_keep_first_seen_order() {
        let table = PotholeTable {
            records: vec![
                pothole(None, None, Some("Mission")),
                pothole(None, None, Some("SoMa")),
                pothole(None, None, Some("Mission")),
                pothole(None, None, None),
            ],
            has_locations: true,
            ..Default::default()
        };
        assert_eq!(
            table.distinct_locations(),
            vec![Some("Mission".to_string()), Some("SoMa".to_string()), None]
        );
    }

    #[test]
    fn no_locations_without_column() {
        let table = PotholeTable {
            records: vec![pothole(None, None, None)],
            ..Default::default()
        };
        assert!(table.distinct_locations().is_empty());
    }
}
