//! Key wrappers accepted by the signing algorithms
//!
//! HMAC secrets come in two role-tagged types carrying the same bytes. A
//! [`HmacVerifyingKey`] can be derived from a [`HmacSigningKey`] but not the
//! other way around, so verification-only code never holds something it could
//! mint tokens with. RSA keys are the `rsa` crate's own types.

use crate::algorithm::{Algorithm, AlgorithmFamily};
use crate::error::{AlgError, AlgResult};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fmt;
use zeroize::Zeroizing;

/// Shared secret used to produce HMAC signatures
#[derive(Clone)]
pub struct HmacSigningKey {
    secret: Zeroizing<Vec<u8>>,
}

impl HmacSigningKey {
    /// Wrap raw secret bytes
    ///
    /// Any length is accepted, including empty. Use
    /// [`HmacSigningKey::check_strength`] to enforce a minimum.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// Verifying key holding the same secret
    #[must_use]
    pub fn verifying_key(&self) -> HmacVerifyingKey {
        HmacVerifyingKey {
            secret: self.secret.clone(),
        }
    }

    /// Secret length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.secret.len()
    }

    /// True for an empty secret
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    /// Require the secret to be at least as long as the algorithm's digest
    /// (RFC 7518 section 3.2)
    ///
    /// # Errors
    ///
    /// Returns [`AlgError::KeyFormat`] for a short secret or a non-HMAC algorithm.
    pub fn check_strength(&self, algorithm: Algorithm) -> AlgResult<()> {
        check_hmac_strength(algorithm, self.secret.len())
    }

    pub(crate) fn expose_secret(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for HmacSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigningKey")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

/// Shared secret used to check HMAC signatures
#[derive(Clone)]
pub struct HmacVerifyingKey {
    secret: Zeroizing<Vec<u8>>,
}

impl HmacVerifyingKey {
    /// Wrap raw secret bytes
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// Secret length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.secret.len()
    }

    /// True for an empty secret
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    /// See [`HmacSigningKey::check_strength`]
    ///
    /// # Errors
    ///
    /// Returns [`AlgError::KeyFormat`] for a short secret or a non-HMAC algorithm.
    pub fn check_strength(&self, algorithm: Algorithm) -> AlgResult<()> {
        check_hmac_strength(algorithm, self.secret.len())
    }

    pub(crate) fn expose_secret(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for HmacVerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacVerifyingKey")
            .field("len", &self.secret.len())
            .finish_non_exhaustive()
    }
}

fn check_hmac_strength(algorithm: Algorithm, len: usize) -> AlgResult<()> {
    if algorithm.family() != AlgorithmFamily::Hmac {
        return Err(AlgError::key_format(algorithm, "not an HMAC algorithm"));
    }

    let min_len = algorithm.hash().output_len();
    if len < min_len {
        return Err(AlgError::key_format(
            algorithm,
            format!("HMAC secret must be at least {min_len} bytes, got {len}"),
        ));
    }
    Ok(())
}

/// Key material for producing signatures
#[derive(Clone)]
pub enum SigningKey {
    /// HMAC shared secret
    Hmac(HmacSigningKey),
    /// RSA private key
    Rsa(RsaPrivateKey),
}

impl SigningKey {
    /// Family of algorithms this key can be used with
    #[must_use]
    pub fn family(&self) -> AlgorithmFamily {
        match self {
            SigningKey::Hmac(_) => AlgorithmFamily::Hmac,
            SigningKey::Rsa(_) => AlgorithmFamily::RsaPss,
        }
    }

    /// Matching verification key
    #[must_use]
    pub fn verifying_key(&self) -> VerifyingKey {
        match self {
            SigningKey::Hmac(secret) => VerifyingKey::Hmac(secret.verifying_key()),
            SigningKey::Rsa(private_key) => VerifyingKey::Rsa(private_key.to_public_key()),
        }
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningKey::Hmac(secret) => f.debug_tuple("Hmac").field(secret).finish(),
            SigningKey::Rsa(private_key) => f
                .debug_struct("Rsa")
                .field("bits", &(private_key.size() * 8))
                .finish_non_exhaustive(),
        }
    }
}

impl From<HmacSigningKey> for SigningKey {
    fn from(key: HmacSigningKey) -> Self {
        SigningKey::Hmac(key)
    }
}

impl From<RsaPrivateKey> for SigningKey {
    fn from(key: RsaPrivateKey) -> Self {
        SigningKey::Rsa(key)
    }
}

/// Key material for checking signatures
#[derive(Debug, Clone)]
pub enum VerifyingKey {
    /// HMAC shared secret
    Hmac(HmacVerifyingKey),
    /// RSA public key
    Rsa(RsaPublicKey),
}

impl VerifyingKey {
    /// Family of algorithms this key can be used with
    #[must_use]
    pub fn family(&self) -> AlgorithmFamily {
        match self {
            VerifyingKey::Hmac(_) => AlgorithmFamily::Hmac,
            VerifyingKey::Rsa(_) => AlgorithmFamily::RsaPss,
        }
    }
}

impl From<HmacVerifyingKey> for VerifyingKey {
    fn from(key: HmacVerifyingKey) -> Self {
        VerifyingKey::Hmac(key)
    }
}

impl From<RsaPublicKey> for VerifyingKey {
    fn from(key: RsaPublicKey) -> Self {
        VerifyingKey::Rsa(key)
    }
}
