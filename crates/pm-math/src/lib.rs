//! Poisson mixture distribution parameter wrappers.

pub mod dist;

pub use dist::gamma::GammaParams;
pub use dist::poisson::PoissonParams;
