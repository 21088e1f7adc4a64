use crate::config::{Config, MapViewConfig, SampleConfig};
use crate::data::{self, Datasets};
use crate::error::Result;
use crate::models::{FilterState, MapWidget};
use crate::services::filter_engine::{FilterEngine, FilteredView};
use crate::services::marker_renderer::render_markers;
use crate::services::quartiles::QuartileBuckets;
use crate::services::sampler::Sampler;

/// Sample routes, pair them with potholes and draw the markers.
pub fn render_map(
    datasets: &Datasets,
    sample: SampleConfig,
    view: MapViewConfig,
) -> Result<MapWidget> {
    let pairings = Sampler::new(sample).pair(&datasets.routes, &datasets.potholes.records)?;
    let mut map = MapWidget::new(view);
    render_markers(&mut map, &pairings);
    Ok(map)
}

/// Everything derived once per load: the tables, the map, the quartile
/// edges and the default filter state. Read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub datasets: Datasets,
    pub map: MapWidget,
    pub quartiles: Option<QuartileBuckets>,
    pub defaults: FilterState,
}

impl Dashboard {
    pub fn load(config: &Config) -> Result<Self> {
        let datasets = data::load_datasets(&config.routes_csv_path, &config.pothole_csv_path)?;
        Self::build(datasets, config.sample, config.map)
    }

    pub fn build(datasets: Datasets, sample: SampleConfig, view: MapViewConfig) -> Result<Self> {
        let map = render_map(&datasets, sample, view)?;
        let quartiles = QuartileBuckets::compute(
            datasets
                .potholes
                .records
                .iter()
                .filter_map(|r| r.damaged_area),
        );
        let defaults = FilterState::defaults_for(&datasets.potholes);

        Ok(Dashboard {
            datasets,
            map,
            quartiles,
            defaults,
        })
    }

    pub fn filter(&self, state: &FilterState) -> FilteredView<'_> {
        FilterEngine::new(&self.datasets.potholes, self.quartiles.as_ref()).apply(state)
    }
}
