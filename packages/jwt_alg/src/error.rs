//! Error types for signing and verification

use crate::algorithm::Algorithm;
use thiserror::Error;

/// Result type for signing algorithm operations
pub type AlgResult<T> = Result<T, AlgError>;

/// Signing algorithm errors
///
/// `VerificationFailed` is the expected outcome for a forged or corrupted
/// token and should be mapped to "token invalid" by the caller. Every other
/// variant points at a programming or key-material problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AlgError {
    /// Identifier is not present in the registry
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Identifier is registered but excluded by the verification policy
    #[error("Algorithm not allowed by policy: {0}")]
    AlgorithmNotAllowed(Algorithm),

    /// Key does not belong to the algorithm's family or is malformed
    #[error(
        "Invalid key{}: {reason}",
        .algorithm.map(|alg| format!(" for {alg}")).unwrap_or_default()
    )]
    KeyFormat {
        /// Algorithm the key was offered to, if known
        algorithm: Option<Algorithm>,
        /// What was wrong with the key
        reason: String,
    },

    /// Signature does not match the signing input
    #[error("Signature verification failed for {algorithm}")]
    VerificationFailed {
        /// Algorithm used for verification
        algorithm: Algorithm,
    },

    /// Underlying primitive failed
    #[error("Cryptographic operation failed for {algorithm}: {reason}")]
    Crypto {
        /// Algorithm in use when the primitive failed
        algorithm: Algorithm,
        /// Message reported by the primitive
        reason: String,
    },

    /// Compact token or segment could not be parsed
    #[error("Malformed token: {0}")]
    MalformedToken(String),
}

impl AlgError {
    /// Create a key format error bound to an algorithm
    #[must_use]
    pub fn key_format(algorithm: Algorithm, reason: impl Into<String>) -> Self {
        Self::KeyFormat {
            algorithm: Some(algorithm),
            reason: reason.into(),
        }
    }

    /// Create a key format error for key material not yet bound to an algorithm
    #[must_use]
    pub fn unbound_key_format(reason: impl Into<String>) -> Self {
        Self::KeyFormat {
            algorithm: None,
            reason: reason.into(),
        }
    }

    /// Create a crypto error
    #[must_use]
    pub fn crypto(algorithm: Algorithm, reason: impl Into<String>) -> Self {
        Self::Crypto {
            algorithm,
            reason: reason.into(),
        }
    }

    /// Create a malformed token error
    #[must_use]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedToken(msg.into())
    }

    /// True when the error only means "signature does not match"
    #[must_use]
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, Self::VerificationFailed { .. })
    }

    /// Algorithm the error is attributed to, when there is one
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            Self::AlgorithmNotAllowed(alg)
            | Self::VerificationFailed { algorithm: alg }
            | Self::Crypto { algorithm: alg, .. } => Some(*alg),
            Self::KeyFormat { algorithm, .. } => *algorithm,
            Self::UnsupportedAlgorithm(_) | Self::MalformedToken(_) => None,
        }
    }
}
