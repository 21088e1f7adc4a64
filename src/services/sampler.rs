use crate::config::SampleConfig;
use crate::constants::PAIRING_SEED_RANGE;
use crate::error::{AppError, Result};
use crate::models::{PotholeRecord, RouteRecord};
use rand::{
    distr::{Distribution, Uniform},
    rngs::StdRng,
    seq::index,
    SeedableRng,
};

/// A sampled route and the pothole record illustrating it. The two are
/// unrelated beyond sharing a marker.
#[derive(Debug, Clone, Copy)]
pub struct Pairing<'a> {
    pub route: &'a RouteRecord,
    pub pothole: &'a PotholeRecord,
}

/// Two-stage seeded sampling: one outer source picks the routes and hands
/// each of them a fresh seed for its pothole draw.
pub struct Sampler {
    config: SampleConfig,
}

impl Sampler {
    pub fn new(config: SampleConfig) -> Self {
        Self { config }
    }

    /// Pick `min(size, routes.len())` routes without replacement and pair each,
    /// in selection order, with a pothole drawn with replacement.
    pub fn pair<'a>(
        &self,
        routes: &'a [RouteRecord],
        potholes: &'a [PotholeRecord],
    ) -> Result<Vec<Pairing<'a>>> {
        let mut outer = StdRng::seed_from_u64(self.config.seed);

        let amount = self.config.size.min(routes.len());
        if amount == 0 {
            tracing::warn!("No candidate routes to sample");
            return Ok(Vec::new());
        }
        if potholes.is_empty() {
            return Err(AppError::DataSource(
                "Pothole table is empty, cannot pair sampled routes".to_string(),
            ));
        }

        let selected = index::sample(&mut outer, routes.len(), amount);

        let seed_dist: Uniform<u64> = Uniform::new(0u64, PAIRING_SEED_RANGE)
            .map_err(|e| AppError::Internal(format!("Invalid seed range: {}", e)))?;
        let row_dist: Uniform<usize> = Uniform::new(0usize, potholes.len())
            .map_err(|e| AppError::Internal(format!("Invalid pothole range: {}", e)))?;

        let pairings: Vec<Pairing<'a>> = selected
            .into_iter()
            .map(|route_idx| {
                let row_seed = seed_dist.sample(&mut outer);
                let mut inner = StdRng::seed_from_u64(row_seed);
                Pairing {
                    route: &routes[route_idx],
                    pothole: &potholes[row_dist.sample(&mut inner)],
                }
            })
            .collect();

        tracing::info!(
            seed = self.config.seed,
            candidates = routes.len(),
            "Sampled {} routes for the map",
            pairings.len()
        );

        Ok(pairings)
    }
}
