//! The true generative Poisson mixture.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Categorical, Poisson};

use pm_common::Result;
use pm_math::PoissonParams;

use crate::check_count;
use crate::cluster::ClusterParam;

/// Generative Poisson mixture: weights `phi` and one Poisson parameter set per cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoiMixModel {
    num_dim: usize,
    num_cluster: usize,
    phi: Vec<f64>,
    poisson: Vec<PoissonParams>,
}

impl PoiMixModel {
    /// Build the model.
    ///
    /// `phi` is stored as given: non-negativity and summing to one are the
    /// caller's business. `poisson` must resolve to exactly `num_cluster` entries.
    pub fn new(
        num_dim: usize,
        num_cluster: usize,
        phi: Vec<f64>,
        poisson: ClusterParam<PoissonParams>,
    ) -> Result<Self> {
        check_count("num_dim", num_dim)?;
        check_count("num_cluster", num_cluster)?;
        let broadcast = poisson.is_scalar();
        let poisson = poisson.resolve("poisson", num_cluster)?;
        tracing::debug!(
            target: "pm_config.truth",
            num_dim,
            num_cluster,
            broadcast,
            "built poisson mixture"
        );
        Ok(Self {
            num_dim,
            num_cluster,
            phi,
            poisson,
        })
    }

    pub fn num_dim(&self) -> usize {
        self.num_dim
    }

    pub fn num_cluster(&self) -> usize {
        self.num_cluster
    }

    /// Mixture weights.
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    pub fn poisson(&self) -> &[PoissonParams] {
        &self.poisson
    }

    /// Frozen categorical over cluster indices, weighted by `phi`.
    ///
    /// `statrs` normalizes the weights; negative or all-zero weights are a
    /// domain error. `phi` is never checked against `num_cluster`, so the
    /// categorical may cover a different number of clusters than
    /// [`PoiMixModel::component_dists`].
    pub fn categorical(&self) -> Result<Categorical> {
        Ok(Categorical::new(&self.phi)?)
    }

    /// Frozen Poisson distributions of every cluster, outer index = cluster.
    pub fn component_dists(&self) -> Result<Vec<Vec<Poisson>>> {
        self.poisson.iter().map(PoissonParams::dists).collect()
    }
}

/// Serde-facing description of a [`PoiMixModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoiMixConfig {
    pub num_dim: usize,
    pub num_cluster: usize,
    pub phi: Vec<f64>,
    pub poisson: ClusterParam<PoissonParams>,
}

impl PoiMixConfig {
    pub fn build(self) -> Result<PoiMixModel> {
        PoiMixModel::new(self.num_dim, self.num_cluster, self.phi, self.poisson)
    }
}
