//! PEM loading for RSA keys
//!
//! Accepts PKCS#8 (`PRIVATE KEY`) and PKCS#1 (`RSA PRIVATE KEY`) private keys,
//! SPKI (`PUBLIC KEY`) and PKCS#1 (`RSA PUBLIC KEY`) public keys.

use crate::error::{AlgError, AlgResult};
use crate::keys::{SigningKey, VerifyingKey};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Parse an RSA private key from PEM
///
/// # Errors
///
/// Returns [`AlgError::KeyFormat`] if neither PKCS#8 nor PKCS#1 parsing succeeds.
pub fn rsa_private_key_from_pem(pem: &str) -> AlgResult<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_pem(pem).or_else(|pkcs8_err| {
        RsaPrivateKey::from_pkcs1_pem(pem).map_err(|pkcs1_err| {
            AlgError::unbound_key_format(format!(
                "invalid RSA private key PEM (PKCS#8: {pkcs8_err}; PKCS#1: {pkcs1_err})"
            ))
        })
    })
}

/// Parse an RSA public key from PEM
///
/// # Errors
///
/// Returns [`AlgError::KeyFormat`] if neither SPKI nor PKCS#1 parsing succeeds.
pub fn rsa_public_key_from_pem(pem: &str) -> AlgResult<RsaPublicKey> {
    RsaPublicKey::from_public_key_pem(pem).or_else(|spki_err| {
        RsaPublicKey::from_pkcs1_pem(pem).map_err(|pkcs1_err| {
            AlgError::unbound_key_format(format!(
                "invalid RSA public key PEM (SPKI: {spki_err}; PKCS#1: {pkcs1_err})"
            ))
        })
    })
}

/// [`rsa_private_key_from_pem`] wrapped as a [`SigningKey`]
///
/// # Errors
///
/// See [`rsa_private_key_from_pem`].
pub fn signing_key_from_pem(pem: &str) -> AlgResult<SigningKey> {
    rsa_private_key_from_pem(pem).map(SigningKey::Rsa)
}

/// [`rsa_public_key_from_pem`] wrapped as a [`VerifyingKey`]
///
/// # Errors
///
/// See [`rsa_public_key_from_pem`].
pub fn verifying_key_from_pem(pem: &str) -> AlgResult<VerifyingKey> {
    rsa_public_key_from_pem(pem).map(VerifyingKey::Rsa)
}
