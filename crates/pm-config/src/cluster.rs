//! Per-cluster parameter input.
//!
//! A mixture model takes one parameter object per cluster. Callers either
//! hand over a single value to be shared by every cluster, or an explicit
//! list with exactly one entry per cluster. The choice is made by the caller
//! through the variant, never inferred from the runtime shape of the value.

use serde::{Deserialize, Serialize};

use pm_common::{Error, Result};

/// Either one value broadcast to every cluster, or one value per cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterParam<T> {
    /// Replicated `num_cluster` times.
    Scalar(T),
    /// Must hold exactly `num_cluster` entries.
    PerCluster(Vec<T>),
}

impl<T: Clone> ClusterParam<T> {
    /// Expand into exactly `num_cluster` values.
    ///
    /// `Scalar` is cloned into independent copies. `PerCluster` is returned
    /// as-is when its length matches, otherwise [`Error::LengthMismatch`]
    /// names `field` along with both lengths.
    pub fn resolve(self, field: &'static str, num_cluster: usize) -> Result<Vec<T>> {
        match self {
            ClusterParam::Scalar(value) => {
                tracing::debug!(target: "pm_config.cluster", field, num_cluster, "broadcasting scalar");
                Ok(vec![value; num_cluster])
            }
            ClusterParam::PerCluster(values) => {
                if values.len() != num_cluster {
                    tracing::warn!(
                        target: "pm_config.cluster",
                        field,
                        expected = num_cluster,
                        actual = values.len(),
                        "per-cluster length mismatch"
                    );
                    return Err(Error::LengthMismatch {
                        field,
                        expected: num_cluster,
                        actual: values.len(),
                    });
                }
                Ok(values)
            }
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, ClusterParam::Scalar(_))
    }
}

impl<T> From<T> for ClusterParam<T> {
    fn from(value: T) -> Self {
        ClusterParam::Scalar(value)
    }
}

impl<T> From<Vec<T>> for ClusterParam<T> {
    fn from(values: Vec<T>) -> Self {
        ClusterParam::PerCluster(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_broadcasts_to_every_cluster() {
        let out = ClusterParam::Scalar(4u32).resolve("x", 3).unwrap();
        assert_eq!(out, vec![4, 4, 4]);
    }

    #[test]
    fn scalar_with_zero_clusters_is_empty() {
        let out = ClusterParam::Scalar('a').resolve("x", 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn per_cluster_passes_through() {
        let out = ClusterParam::PerCluster(vec![1, 2, 3]).resolve("x", 3).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn per_cluster_length_mismatch() {
        let err = ClusterParam::PerCluster(vec![1, 2]).resolve("poisson", 3).unwrap_err();
        match err {
            Error::LengthMismatch {
                field,
                expected,
                actual,
            } => {
                assert_eq!(field, "poisson");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_impls_pick_variant() {
        // Vec<T> resolves to PerCluster, so a sequence is never mistaken for a scalar.
        let p: ClusterParam<i32> = vec![1, 2].into();
        assert!(!p.is_scalar());
        let p: ClusterParam<i32> = 7.into();
        assert!(p.is_scalar());
    }

    #[test]
    fn serde_is_externally_tagged() {
        let p = ClusterParam::Scalar(1.5f64);
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"scalar":1.5}"#);
        let back: ClusterParam<f64> = serde_json::from_str(r#"{"per_cluster":[1.0,2.0]}"#).unwrap();
        assert_eq!(back, ClusterParam::PerCluster(vec![1.0, 2.0]));
    }
}
