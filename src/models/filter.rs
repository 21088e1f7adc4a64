use crate::models::PotholeTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Equal-frequency bucket of the `damaged_area` column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Quartile {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quartile {
    pub const ALL: [Quartile; 4] = [Quartile::Q1, Quartile::Q2, Quartile::Q3, Quartile::Q4];
}

impl fmt::Display for Quartile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Quartile::Q1 => "Q1",
            Quartile::Q2 => "Q2",
            Quartile::Q3 => "Q3",
            Quartile::Q4 => "Q4",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Quartile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "Q1" => Ok(Quartile::Q1),
            "Q2" => Ok(Quartile::Q2),
            "Q3" => Ok(Quartile::Q3),
            "Q4" => Ok(Quartile::Q4),
            _ => Err(format!("Invalid quartile: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuartileChoice {
    #[default]
    All,
    Only(Quartile),
}

impl FromStr for QuartileChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(QuartileChoice::All);
        }
        s.parse().map(QuartileChoice::Only)
    }
}

/// Urban/rural selector over the fixed value set {all, 0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrbanRuralChoice {
    #[default]
    All,
    Flag(i64),
}

impl FromStr for UrbanRuralChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(UrbanRuralChoice::All),
            "0" => Ok(UrbanRuralChoice::Flag(0)),
            "1" => Ok(UrbanRuralChoice::Flag(1)),
            _ => Err(format!(
                "Invalid urban/rural value: {}. Use 'all', '0' or '1'",
                s
            )),
        }
    }
}

/// The user's current combination of predicate parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Inclusive severity bounds
    pub score_range: (f64, f64),
    pub quartile: QuartileChoice,
    /// Inclusive pothole-count bounds
    pub count_range: (i64, i64),
    pub urban_rural: UrbanRuralChoice,
    /// Selected `location` values, `None` selecting rows without one.
    /// Empty selection disables the location filter.
    pub locations: Vec<Option<String>>,
    /// Empty term disables the search
    pub search: String,
}

impl FilterState {
    /// Default state for a table: ranges span the observed data, selectors
    /// are on "All", every location is selected, search is empty.
    pub fn defaults_for(table: &PotholeTable) -> Self {
        FilterState {
            score_range: table.severity_bounds().unwrap_or((0.0, 100.0)),
            quartile: QuartileChoice::All,
            count_range: table.count_bounds().unwrap_or((0, 0)),
            urban_rural: UrbanRuralChoice::All,
            locations: table.distinct_locations(),
            search: String::new(),
        }
    }
}
