//! Algorithm identifiers and sign/verify dispatch
//!
//! Each supported JWS `alg` value is a variant of [`Algorithm`]. The enum is
//! closed: adding a family means adding variants here and a sibling of the
//! `hmac` and `pss` modules, not registering something at runtime.

use crate::error::{AlgError, AlgResult};
use crate::keys::{SigningKey, VerifyingKey};
use crate::{hmac, pss, registry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Algorithm family, i.e. the kind of key an algorithm consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// Shared-secret HMAC
    Hmac,
    /// RSASSA-PSS over an RSA key pair
    RsaPss,
}

impl fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmFamily::Hmac => f.write_str("HMAC"),
            AlgorithmFamily::RsaPss => f.write_str("RSA-PSS"),
        }
    }
}

/// SHA-2 strength used by an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashStrength {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl HashStrength {
    /// Digest output length in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            HashStrength::Sha256 => 32,
            HashStrength::Sha384 => 48,
            HashStrength::Sha512 => 64,
        }
    }
}

/// Supported signing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// HMAC using SHA-256
    #[serde(rename = "HS256")]
    Hs256,
    /// HMAC using SHA-384
    #[serde(rename = "HS384")]
    Hs384,
    /// HMAC using SHA-512
    #[serde(rename = "HS512")]
    Hs512,
    /// RSASSA-PSS using SHA-256 and MGF1 with SHA-256
    #[serde(rename = "PS256")]
    Ps256,
    /// RSASSA-PSS using SHA-384 and MGF1 with SHA-384
    #[serde(rename = "PS384")]
    Ps384,
    /// RSASSA-PSS using SHA-512 and MGF1 with SHA-512
    #[serde(rename = "PS512")]
    Ps512,
}

impl Algorithm {
    /// Every supported algorithm, MAC family first
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Hs256,
        Algorithm::Hs384,
        Algorithm::Hs512,
        Algorithm::Ps256,
        Algorithm::Ps384,
        Algorithm::Ps512,
    ];

    /// JWS `alg` identifier
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
            Algorithm::Ps256 => "PS256",
            Algorithm::Ps384 => "PS384",
            Algorithm::Ps512 => "PS512",
        }
    }

    /// Key family this algorithm accepts
    #[must_use]
    pub const fn family(self) -> AlgorithmFamily {
        match self {
            Algorithm::Hs256 | Algorithm::Hs384 | Algorithm::Hs512 => AlgorithmFamily::Hmac,
            Algorithm::Ps256 | Algorithm::Ps384 | Algorithm::Ps512 => AlgorithmFamily::RsaPss,
        }
    }

    /// Hash strength
    #[must_use]
    pub const fn hash(self) -> HashStrength {
        match self {
            Algorithm::Hs256 | Algorithm::Ps256 => HashStrength::Sha256,
            Algorithm::Hs384 | Algorithm::Ps384 => HashStrength::Sha384,
            Algorithm::Hs512 | Algorithm::Ps512 => HashStrength::Sha512,
        }
    }

    /// Signature length for algorithms where it does not depend on the key
    ///
    /// HMAC tags are as long as the digest. RSA-PSS signatures are as long as
    /// the modulus, so `None` is returned for that family.
    #[must_use]
    pub const fn fixed_signature_len(self) -> Option<usize> {
        match self.family() {
            AlgorithmFamily::Hmac => Some(self.hash().output_len()),
            AlgorithmFamily::RsaPss => None,
        }
    }

    /// Sign `input` with `key`
    ///
    /// `input` is the signing input (`header.payload`) and is used byte for
    /// byte.
    ///
    /// # Errors
    ///
    /// - [`AlgError::KeyFormat`] when the key belongs to another family
    /// - [`AlgError::Crypto`] when the primitive rejects the key or input
    pub fn sign(self, input: &[u8], key: &SigningKey) -> AlgResult<Vec<u8>> {
        let signature = match (self.family(), key) {
            (AlgorithmFamily::Hmac, SigningKey::Hmac(secret)) => hmac::sign(self, input, secret)?,
            (AlgorithmFamily::RsaPss, SigningKey::Rsa(private_key)) => {
                pss::sign(self, input, private_key)?
            }
            (family, other) => return Err(family_mismatch(self, family, other.family())),
        };

        debug!(
            alg = self.name(),
            input_len = input.len(),
            signature_len = signature.len(),
            "signed input"
        );
        Ok(signature)
    }

    /// Verify `signature` over `input` with `key`
    ///
    /// # Errors
    ///
    /// - [`AlgError::VerificationFailed`] when the signature does not match
    /// - [`AlgError::KeyFormat`] when the key belongs to another family
    pub fn verify(self, input: &[u8], signature: &[u8], key: &VerifyingKey) -> AlgResult<()> {
        let outcome = match (self.family(), key) {
            (AlgorithmFamily::Hmac, VerifyingKey::Hmac(secret)) => {
                hmac::verify(self, input, signature, secret)
            }
            (AlgorithmFamily::RsaPss, VerifyingKey::Rsa(public_key)) => {
                pss::verify(self, input, signature, public_key)
            }
            (family, other) => return Err(family_mismatch(self, family, other.family())),
        };

        match &outcome {
            Ok(()) => debug!(alg = self.name(), input_len = input.len(), "signature verified"),
            Err(err) => debug!(alg = self.name(), error = %err, "signature rejected"),
        }
        outcome
    }
}

fn family_mismatch(
    algorithm: Algorithm,
    expected: AlgorithmFamily,
    got: AlgorithmFamily,
) -> AlgError {
    AlgError::key_format(algorithm, format!("expected a {expected} key, got a {got} key"))
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AlgError;

    fn from_str(name: &str) -> AlgResult<Self> {
        registry::lookup(name)
    }
}

impl TryFrom<&str> for Algorithm {
    type Error = AlgError;

    fn try_from(name: &str) -> AlgResult<Self> {
        registry::lookup(name)
    }
}
