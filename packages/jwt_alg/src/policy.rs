//! Verification policy: which `alg` values a verifier accepts
//!
//! A token header names its own algorithm, so a verifier that simply looks
//! the name up and runs it lets the token choose how it is checked. The
//! policy pins the accepted algorithms and binds the resolved algorithm to the
//! family of the key the verifier actually holds.
//!
//! The policy is plain serde data so it can live in the embedding service's
//! configuration:
//!
//! ```
//! use jwt_alg::{Algorithm, VerificationPolicy};
//!
//! let policy: VerificationPolicy = serde_json::from_str(r#"{"allowed":["PS256","PS384"]}"#)?;
//! assert!(policy.allows(Algorithm::Ps256));
//! assert!(!policy.allows(Algorithm::Hs256));
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::algorithm::{Algorithm, AlgorithmFamily};
use crate::error::{AlgError, AlgResult};
use crate::keys::VerifyingKey;
use crate::registry;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Allow-list of algorithms accepted during verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerificationPolicy {
    /// Accepted algorithms
    #[serde(default = "all_algorithms")]
    pub allowed: Vec<Algorithm>,
}

fn all_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            allowed: all_algorithms(),
        }
    }
}

impl VerificationPolicy {
    /// Accept exactly the given algorithms
    #[must_use]
    pub fn only(algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        let mut allowed: Vec<Algorithm> = Vec::new();
        for alg in algorithms {
            if !allowed.contains(&alg) {
                allowed.push(alg);
            }
        }
        Self { allowed }
    }

    /// Accept HS256, HS384 and HS512
    #[must_use]
    pub fn hmac_only() -> Self {
        Self::family(AlgorithmFamily::Hmac)
    }

    /// Accept PS256, PS384 and PS512
    #[must_use]
    pub fn pss_only() -> Self {
        Self::family(AlgorithmFamily::RsaPss)
    }

    fn family(family: AlgorithmFamily) -> Self {
        Self::only(Algorithm::ALL.into_iter().filter(|alg| alg.family() == family))
    }

    /// True when `algorithm` is accepted
    #[must_use]
    pub fn allows(&self, algorithm: Algorithm) -> bool {
        self.allowed.contains(&algorithm)
    }

    /// Resolve a header `alg` value for use with `key`
    ///
    /// # Errors
    ///
    /// - [`AlgError::UnsupportedAlgorithm`] for an unknown name
    /// - [`AlgError::AlgorithmNotAllowed`] when the policy excludes it
    /// - [`AlgError::KeyFormat`] when `key` belongs to another family
    pub fn resolve(&self, name: &str, key: &VerifyingKey) -> AlgResult<Algorithm> {
        let algorithm = registry::lookup(name)?;
        if !self.allows(algorithm) {
            debug!(alg = name, "algorithm rejected by policy");
            return Err(AlgError::AlgorithmNotAllowed(algorithm));
        }
        registry::lookup_family(name, key.family())
    }

    /// Resolve `name` and verify `signature` over `input`
    ///
    /// Returns the algorithm that was used.
    ///
    /// # Errors
    ///
    /// Everything [`VerificationPolicy::resolve`] and [`Algorithm::verify`] return.
    pub fn verify(
        &self,
        name: &str,
        input: &[u8],
        signature: &[u8],
        key: &VerifyingKey,
    ) -> AlgResult<Algorithm> {
        let algorithm = self.resolve(name, key)?;
        algorithm.verify(input, signature, key)?;
        Ok(algorithm)
    }
}
