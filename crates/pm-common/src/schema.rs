//! Schema versioning for model description files.

/// Current schema version for model description files.
///
/// Follows semver: MAJOR.MINOR.PATCH
/// - MAJOR: Breaking changes (field removals, type changes)
/// - MINOR: Additive changes (new optional fields)
/// - PATCH: Bug fixes, documentation
pub const MODEL_SCHEMA_VERSION: &str = "1.0.0";

fn major(version: &str) -> Option<u32> {
    version.split('.').next().and_then(|s| s.trim().parse().ok())
}

/// Check if a model file schema version can be read by this build.
///
/// Only the major component is compared. Unparseable versions are rejected.
pub fn is_compatible(version: &str) -> bool {
    match (major(MODEL_SCHEMA_VERSION), major(version)) {
        (Some(current), Some(other)) => current == other,
        _ => false,
    }
}
