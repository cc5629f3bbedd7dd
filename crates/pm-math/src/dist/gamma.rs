//! Gamma hyperparameters over a set of Poisson rates.
//!
//! The shape vector `a` carries one entry per rate; the scale `b` is shared.
//! This is the shape/scale parameterization, so the frozen `statrs` objects
//! are built with rate `1 / b`.

use serde::{Deserialize, Serialize};
use statrs::distribution::Gamma;
use statrs::StatsError;

use pm_common::{Error, Result};

use super::check_positive;

/// Gamma distribution parameters: Gamma(a[i], scale = b) for each i.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GammaParams {
    /// Shape parameters, one per entity.
    pub a: Vec<f64>,
    /// Scale parameter shared by every shape.
    pub b: f64,
}

impl GammaParams {
    pub fn new(a: Vec<f64>, b: f64) -> Self {
        Self { a, b }
    }

    /// Number of independent Gamma distributions described.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Freeze into one `statrs` Gamma per shape, each with scale `b`.
    ///
    /// A scale that is not a positive finite number is a domain error. The
    /// rate check in `statrs` cannot see a zero scale, since `1 / 0` is a
    /// valid infinite rate there.
    pub fn dists(&self) -> Result<Vec<Gamma>> {
        if !(self.b > 0.0 && self.b.is_finite()) {
            return Err(Error::Domain(StatsError::BadParams));
        }
        let rate = self.b.recip();
        tracing::trace!(target: "pm_math.gamma", count = self.a.len(), scale = self.b, "freezing gamma distributions");
        let dists = self
            .a
            .iter()
            .map(|&shape| Gamma::new(shape, rate))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(dists)
    }

    /// Mean of each component: a[i] * b.
    pub fn means(&self) -> Vec<f64> {
        self.a.iter().map(|a| a * self.b).collect()
    }

    /// Variance of each component: a[i] * b^2.
    pub fn variances(&self) -> Vec<f64> {
        let b2 = self.b * self.b;
        self.a.iter().map(|a| a * b2).collect()
    }

    /// Check that every shape and the scale are positive.
    pub fn validate(&self) -> Result<()> {
        check_positive("a", self.a.iter().copied())?;
        if self.b.is_nan() || self.b <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "b must be positive, got {}",
                self.b
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use statrs::distribution::Continuous;
    use statrs::statistics::Distribution;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn dists_share_scale() {
        let params = GammaParams::new(vec![1.0, 2.5, 4.0], 0.5);
        let dists = params.dists().expect("valid gamma params");
        assert_eq!(dists.len(), 3);
        for (d, &a) in dists.iter().zip(params.a.iter()) {
            assert!(approx_eq(d.shape(), a, 1e-12));
            assert!(approx_eq(d.rate(), 2.0, 1e-12));
        }
    }

    #[test]
    fn dists_mean_matches_shape_times_scale() {
        let params = GammaParams::new(vec![3.0, 7.0], 2.0);
        let dists = params.dists().unwrap();
        for (d, m) in dists.iter().zip(params.means()) {
            assert!(approx_eq(d.mean().unwrap(), m, 1e-9));
        }
        assert_eq!(params.means(), vec![6.0, 14.0]);
        assert_eq!(params.variances(), vec![12.0, 28.0]);
    }

    #[test]
    fn exponential_density_at_zero() {
        // Gamma(1, scale 2) is Exponential(rate 0.5).
        let d = GammaParams::new(vec![1.0], 2.0).dists().unwrap().remove(0);
        assert!(approx_eq(d.pdf(0.0), 0.5, 1e-12));
    }

    #[test]
    fn empty_shapes_give_no_dists() {
        let params = GammaParams::new(Vec::new(), 1.0);
        assert!(params.is_empty());
        assert!(params.dists().unwrap().is_empty());
    }

    #[test]
    fn negative_scale_is_a_domain_error() {
        let err = GammaParams::new(vec![1.0], -1.0).dists().unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }

    #[test]
    fn zero_scale_is_a_domain_error() {
        let err = GammaParams::new(vec![2.0], 0.0).dists().unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
        let err = GammaParams::new(Vec::new(), 0.0).dists().unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }

    #[test]
    fn nan_and_infinite_scale_are_domain_errors() {
        for b in [f64::NAN, f64::INFINITY] {
            let err = GammaParams::new(vec![1.0], b).dists().unwrap_err();
            assert!(matches!(err, Error::Domain(_)));
        }
    }

    #[test]
    fn non_positive_shape_is_a_domain_error() {
        let err = GammaParams::new(vec![1.0, 0.0], 1.0).dists().unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }

    #[test]
    fn validate_reports_offending_entry() {
        assert!(GammaParams::new(vec![1.0, 2.0], 1.0).validate().is_ok());
        let err = GammaParams::new(vec![1.0, -2.0], 1.0).validate().unwrap_err();
        assert!(err.to_string().contains("a[1]"));
        let err = GammaParams::new(vec![1.0], f64::NAN).validate().unwrap_err();
        assert!(err.to_string().contains("b must be positive"));
    }

    #[test]
    fn serde_roundtrip_keeps_fields() {
        let params = GammaParams::new(vec![1.0, 2.0], 3.0);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"a":[1.0,2.0],"b":3.0}"#);
        let back: GammaParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    proptest! {
        #[test]
        fn one_dist_per_shape(
            a in prop::collection::vec(0.01f64..100.0, 0..16),
            b in 0.01f64..100.0,
        ) {
            let params = GammaParams::new(a.clone(), b);
            let dists = params.dists().unwrap();
            prop_assert_eq!(dists.len(), a.len());
            for (d, &shape) in dists.iter().zip(a.iter()) {
                prop_assert!(approx_eq(d.shape(), shape, 1e-12));
                prop_assert!(approx_eq(d.rate().recip(), b, 1e-9 * b));
            }
        }
    }
}
