use potholemap::config::{Config, MapViewConfig, SampleConfig, TableLabels};
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a route schedule with `rows` rows, every `null_every`-th of which
/// has an empty `Line`.
#[allow(dead_code)]
pub fn routes_csv(rows: usize, null_every: usize) -> String {
    let mut csv = String::from("CNN,Corridor,Line\n");
    for i in 0..rows {
        if null_every > 0 && i % null_every == 0 {
            writeln!(csv, "{},Street {},", i, i).unwrap();
        } else {
            let lng = -122.45 + i as f64 * 0.001;
            let lat = 37.75 + i as f64 * 0.0005;
            writeln!(
                csv,
                "{},Street {},\"LINESTRING ({} {}, {} {})\"",
                i,
                i,
                lng,
                lat,
                lng + 0.001,
                lat + 0.001
            )
            .unwrap();
        }
    }
    csv
}

/// Pothole table with photo links and locations
#[allow(dead_code)]
pub fn potholes_csv() -> String {
    let mut csv = String::from(
        "image_id,damaged_area,num_potholes,urban/rural,severity_score,link_photo,location\n",
    );
    let locations = ["Mission", "SoMa", "Sunset", "Richmond"];
    for i in 0..20 {
        writeln!(
            csv,
            "img_{:03},{},{},{},{},https://drive.google.com/file/d/FILE{}/view?usp=sharing,{}",
            i,
            (i + 1) as f64 * 0.5,
            i % 5 + 1,
            i % 2,
            i * 5,
            i,
            locations[i % locations.len()]
        )
        .unwrap();
    }
    // A row with no id and no link
    csv.push_str(",11.0,2,0,100,,Mission\n");
    csv
}

/// Minimal pothole table without the optional columns
#[allow(dead_code)]
pub fn plain_potholes_csv() -> String {
    "image_id,damaged_area,num_potholes,urban/rural,severity_score\n\
     a_1,1.0,1,0,0\n\
     a_2,2.0,2,1,50\n\
     a_3,3.0,3,0,100\n"
        .to_string()
}

/// Pothole table whose locations include a comma and an empty cell
#[allow(dead_code)]
pub fn unlocated_potholes_csv() -> String {
    "image_id,damaged_area,num_potholes,urban/rural,severity_score,location\n\
     a,1.0,1,0,10,Mission\n\
     b,2.0,2,1,20,\n\
     c,3.0,3,0,30,\"Mission, SF\"\n"
        .to_string()
}

pub struct Fixture {
    // Keeps the files alive for the test's duration
    _dir: TempDir,
    pub routes_path: PathBuf,
    pub pothole_path: PathBuf,
}

#[allow(dead_code)]
pub fn write_fixture(routes: &str, potholes: &str) -> Fixture {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let routes_path = dir.path().join("Street_Sweeping_Schedule.csv");
    let pothole_path = dir.path().join("pothole_data.csv");
    fs::write(&routes_path, routes).expect("Failed to write routes fixture");
    fs::write(&pothole_path, potholes).expect("Failed to write pothole fixture");
    Fixture {
        _dir: dir,
        routes_path,
        pothole_path,
    }
}

/// Get test configuration pointing at a fixture
#[allow(dead_code)]
pub fn get_test_config(fixture: &Fixture) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 8501,
        routes_csv_path: fixture.routes_path.clone(),
        pothole_csv_path: fixture.pothole_path.clone(),
        sample: SampleConfig::default(),
        map: MapViewConfig::default(),
        table_labels: TableLabels::Human,
    }
}
