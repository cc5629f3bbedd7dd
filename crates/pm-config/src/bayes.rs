//! Prior/posterior hyperparameters for a Bayesian Poisson mixture.
//!
//! - Mixture weights: `pi ~ Dirichlet(alpha)`, with `alpha` uniform across clusters
//! - Poisson rates of cluster k: `lambda_k ~ Gamma(a_k, scale = b_k)`
//!
//! The same container describes the prior before any data is seen and the
//! posterior produced by an (external) inference procedure.

use serde::{Deserialize, Serialize};
use statrs::distribution::Dirichlet;

use pm_common::Result;
use pm_math::GammaParams;

use crate::check_count;
use crate::cluster::ClusterParam;

/// Validated hyperparameter bundle. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BayesPoiMixModel {
    num_dim: usize,
    num_cluster: usize,
    alpha: Vec<f64>,
    gamma: Vec<GammaParams>,
}

impl BayesPoiMixModel {
    /// Build the bundle.
    ///
    /// `alpha` is a single concentration broadcast to all `num_cluster`
    /// entries of the Dirichlet parameter. `gamma` is resolved through
    /// [`ClusterParam::resolve`], so an explicit list of the wrong length
    /// fails with `LengthMismatch`.
    pub fn new(
        num_dim: usize,
        num_cluster: usize,
        alpha: f64,
        gamma: ClusterParam<GammaParams>,
    ) -> Result<Self> {
        check_count("num_dim", num_dim)?;
        check_count("num_cluster", num_cluster)?;
        let broadcast = gamma.is_scalar();
        let gamma = gamma.resolve("gamma", num_cluster)?;
        tracing::debug!(
            target: "pm_config.bayes",
            num_dim,
            num_cluster,
            alpha,
            broadcast,
            "built bayes poisson mixture"
        );
        Ok(Self {
            num_dim,
            num_cluster,
            alpha: vec![alpha; num_cluster],
            gamma,
        })
    }

    /// Observation dimensionality D.
    pub fn num_dim(&self) -> usize {
        self.num_dim
    }

    /// Number of clusters K.
    pub fn num_cluster(&self) -> usize {
        self.num_cluster
    }

    /// Dirichlet concentration, length K.
    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    /// Gamma hyperparameters, one per cluster.
    pub fn gamma(&self) -> &[GammaParams] {
        &self.gamma
    }

    /// Frozen Dirichlet over the mixture weights.
    ///
    /// `statrs` requires at least two categories, so a single-cluster model
    /// yields a domain error here.
    pub fn dirichlet(&self) -> Result<Dirichlet> {
        Ok(Dirichlet::new(self.alpha.clone())?)
    }
}

/// Serde-facing description of a [`BayesPoiMixModel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BayesPoiMixConfig {
    pub num_dim: usize,
    pub num_cluster: usize,
    pub alpha: f64,
    pub gamma: ClusterParam<GammaParams>,
}

impl BayesPoiMixConfig {
    pub fn build(self) -> Result<BayesPoiMixModel> {
        BayesPoiMixModel::new(self.num_dim, self.num_cluster, self.alpha, self.gamma)
    }
}
