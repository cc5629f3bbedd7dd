//! Parameter holders that freeze into `statrs` distributions.
//!
//! Neither wrapper validates its parameters at construction. Out-of-domain
//! values surface as [`pm_common::Error::Domain`] when the frozen
//! distributions are built, or from an explicit `validate()` call.

pub mod gamma;
pub mod poisson;

fn check_positive(name: &str, values: impl IntoIterator<Item = f64>) -> pm_common::Result<()> {
    for (i, v) in values.into_iter().enumerate() {
        if v.is_nan() || v <= 0.0 {
            return Err(pm_common::Error::InvalidParameter(format!(
                "{name}[{i}] must be positive, got {v}"
            )));
        }
    }
    Ok(())
}
