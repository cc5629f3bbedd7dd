//! Poisson mixture model parameter bundles.
//!
//! This crate provides:
//! - [`ClusterParam`], the explicit broadcast-or-per-cluster input
//! - [`BayesPoiMixModel`], Dirichlet and Gamma hyperparameters for a Bayesian Poisson mixture
//! - [`PoiMixModel`], the true generative Poisson mixture
//! - JSON model description files

pub mod bayes;
pub mod cluster;
pub mod model_file;
pub mod truth;

pub use bayes::{BayesPoiMixConfig, BayesPoiMixModel};
pub use cluster::ClusterParam;
pub use model_file::{load_model, parse_model, LoadedModel, ModelConfig, ModelFile};
pub use truth::{PoiMixConfig, PoiMixModel};

pub use pm_math::{GammaParams, PoissonParams};

fn check_count(field: &'static str, value: usize) -> pm_common::Result<()> {
    if value == 0 {
        tracing::warn!(target: "pm_config.validate", field, "zero count rejected");
        return Err(pm_common::Error::ZeroCount { field });
    }
    Ok(())
}
