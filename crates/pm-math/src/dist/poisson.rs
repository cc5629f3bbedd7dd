//! Poisson rate parameters.

use serde::{Deserialize, Serialize};
use statrs::distribution::Poisson;

use pm_common::Result;

use super::check_positive;

/// Poisson distribution parameters: one rate per entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoissonParams {
    pub lambda: Vec<f64>,
}

impl PoissonParams {
    pub fn new(lambda: Vec<f64>) -> Self {
        Self { lambda }
    }

    pub fn len(&self) -> usize {
        self.lambda.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lambda.is_empty()
    }

    /// Freeze into one `statrs` Poisson per rate.
    pub fn dists(&self) -> Result<Vec<Poisson>> {
        tracing::trace!(target: "pm_math.poisson", count = self.lambda.len(), "freezing poisson distributions");
        let dists = self
            .lambda
            .iter()
            .map(|&rate| Poisson::new(rate))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(dists)
    }

    pub fn validate(&self) -> Result<()> {
        check_positive("lambda", self.lambda.iter().copied())
    }
}
