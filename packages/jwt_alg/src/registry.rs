//! Process-wide `alg` name to [`Algorithm`] table
//!
//! The table is built on first use behind a one-time initialization barrier
//! and never modified afterwards, so lookups from any number of threads need
//! no locking.

use crate::algorithm::{Algorithm, AlgorithmFamily};
use crate::error::{AlgError, AlgResult};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

static REGISTRY: Lazy<HashMap<&'static str, Algorithm>> = Lazy::new(|| {
    let table: HashMap<_, _> = Algorithm::ALL.iter().map(|alg| (alg.name(), *alg)).collect();
    debug!(algorithms = table.len(), "algorithm registry initialized");
    table
});

/// Resolve an `alg` identifier
///
/// Matching is exact and case-sensitive.
///
/// # Errors
///
/// Returns [`AlgError::UnsupportedAlgorithm`] carrying `name` when no
/// algorithm is registered under it.
pub fn lookup(name: &str) -> AlgResult<Algorithm> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| AlgError::UnsupportedAlgorithm(name.to_string()))
}

/// Resolve an `alg` identifier and require it to belong to `family`
///
/// This is the check a verifier holding a key of a known family must make
/// before trusting the `alg` named in a token header.
///
/// # Errors
///
/// - [`AlgError::UnsupportedAlgorithm`] for an unknown name
/// - [`AlgError::KeyFormat`] when the algorithm belongs to another family
pub fn lookup_family(name: &str, family: AlgorithmFamily) -> AlgResult<Algorithm> {
    let algorithm = lookup(name)?;
    if algorithm.family() != family {
        return Err(AlgError::key_format(
            algorithm,
            format!("{algorithm} is a {} algorithm, key is {family}", algorithm.family()),
        ));
    }
    Ok(algorithm)
}

/// True when `name` is registered
#[must_use]
pub fn is_registered(name: &str) -> bool {
    REGISTRY.contains_key(name)
}

/// Registered identifiers, sorted
#[must_use]
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = REGISTRY.keys().copied().collect();
    names.sort_unstable();
    names
}
