use crate::models::Quartile;

/// Equal-frequency partition of a numeric column into Q1-Q4.
///
/// Edges are the 0/25/50/75/100th percentiles with linear interpolation.
/// Buckets are right-closed, and Q1 also includes the minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuartileBuckets {
    edges: [f64; 5],
}

impl QuartileBuckets {
    /// `None` when the column has no non-null values.
    pub fn compute(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(|a, b| a.total_cmp(b));

        let edges = [0.0, 0.25, 0.5, 0.75, 1.0].map(|q| percentile(&sorted, q));
        Some(QuartileBuckets { edges })
    }

    pub fn edges(&self) -> [f64; 5] {
        self.edges
    }

    pub fn bucket_of(&self, value: f64) -> Option<Quartile> {
        let [min, q1, q2, q3, max] = self.edges;
        if value.is_nan() || value < min || value > max {
            return None;
        }
        Some(if value <= q1 {
            Quartile::Q1
        } else if value <= q2 {
            Quartile::Q2
        } else if value <= q3 {
            Quartile::Q3
        } else {
            Quartile::Q4
        })
    }
}

fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
