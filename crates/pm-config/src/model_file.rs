//! JSON model description files.
//!
//! A model file names its kind and carries the same fields as the
//! corresponding config type:
//!
//! ```json
//! {
//!   "schema_version": "1.0.0",
//!   "kind": "bayes_poi_mix",
//!   "num_dim": 2,
//!   "num_cluster": 3,
//!   "alpha": 1.0,
//!   "gamma": { "scalar": { "a": [1.0, 1.0], "b": 1.0 } }
//! }
//! ```
//!
//! Unknown keys are rejected, so a misspelled `schema_version` does not
//! silently fall back to the default.
//!
//! Parsing runs the validating constructors, so a file that loads is a model
//! that satisfies every construction invariant.

use std::path::Path;

use serde::{Deserialize, Serialize};

use pm_common::schema::is_compatible;
use pm_common::{Error, Result, MODEL_SCHEMA_VERSION};

use crate::bayes::{BayesPoiMixConfig, BayesPoiMixModel};
use crate::truth::{PoiMixConfig, PoiMixModel};

/// Model description, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelConfig {
    BayesPoiMix(BayesPoiMixConfig),
    PoiMix(PoiMixConfig),
}

/// Versioned on-disk model description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    #[serde(flatten)]
    pub model: ModelConfig,
}

fn default_schema_version() -> String {
    MODEL_SCHEMA_VERSION.to_string()
}

/// A validated model loaded from a description.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedModel {
    BayesPoiMix(BayesPoiMixModel),
    PoiMix(PoiMixModel),
}

impl ModelFile {
    pub fn new(model: ModelConfig) -> Self {
        Self {
            schema_version: default_schema_version(),
            model,
        }
    }

    /// Check the schema version and run the model constructor.
    pub fn build(self) -> Result<LoadedModel> {
        if !is_compatible(&self.schema_version) {
            tracing::warn!(
                target: "pm_config.model_file",
                version = %self.schema_version,
                supported = MODEL_SCHEMA_VERSION,
                "unsupported model schema version"
            );
            return Err(Error::InvalidParameter(format!(
                "unsupported model schema version {} (supported: {})",
                self.schema_version, MODEL_SCHEMA_VERSION
            )));
        }
        match self.model {
            ModelConfig::BayesPoiMix(config) => config.build().map(LoadedModel::BayesPoiMix),
            ModelConfig::PoiMix(config) => config.build().map(LoadedModel::PoiMix),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse and validate a model description from a JSON string.
pub fn parse_model(json: &str) -> Result<LoadedModel> {
    let file: ModelFile = serde_json::from_str(json)?;
    file.build()
}

/// Read, parse and validate a model description file.
pub fn load_model(path: &Path) -> Result<LoadedModel> {
    let raw = std::fs::read_to_string(path)?;
    let model = parse_model(&raw)?;
    tracing::debug!(target: "pm_config.model_file", path = %path.display(), "loaded model file");
    Ok(model)
}
