//! RSASSA-PSS signing and verification (PS256, PS384, PS512)
//!
//! The salt length is always the digest output length (RFC 7518 section 3.5),
//! on both sides. Verification never infers the salt length from the encoded
//! message, so a signature made with any other salt length is rejected.

use crate::algorithm::{Algorithm, HashStrength};
use crate::error::{AlgError, AlgResult};
use rsa::rand_core::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pss, RsaPrivateKey, RsaPublicKey};
use sha2::digest::DynDigest;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::trace;

/// Hash `input` and produce a PSS signature with a fresh random salt
pub(crate) fn sign(
    algorithm: Algorithm,
    input: &[u8],
    key: &RsaPrivateKey,
) -> AlgResult<Vec<u8>> {
    trace!(alg = algorithm.name(), modulus_bits = key.size() * 8, "PSS sign");
    match algorithm.hash() {
        HashStrength::Sha256 => sign_digest::<Sha256>(algorithm, input, key),
        HashStrength::Sha384 => sign_digest::<Sha384>(algorithm, input, key),
        HashStrength::Sha512 => sign_digest::<Sha512>(algorithm, input, key),
    }
}

/// Hash `input` and check `signature` against it
pub(crate) fn verify(
    algorithm: Algorithm,
    input: &[u8],
    signature: &[u8],
    key: &RsaPublicKey,
) -> AlgResult<()> {
    trace!(alg = algorithm.name(), modulus_bits = key.size() * 8, "PSS verify");
    match algorithm.hash() {
        HashStrength::Sha256 => verify_digest::<Sha256>(algorithm, input, signature, key),
        HashStrength::Sha384 => verify_digest::<Sha384>(algorithm, input, signature, key),
        HashStrength::Sha512 => verify_digest::<Sha512>(algorithm, input, signature, key),
    }
}

fn sign_digest<D>(algorithm: Algorithm, input: &[u8], key: &RsaPrivateKey) -> AlgResult<Vec<u8>>
where
    D: 'static + Digest + DynDigest + Send + Sync,
{
    let hashed = D::digest(input);
    // Blinded so the private-key exponentiation does not leak timing.
    key.sign_with_rng(&mut OsRng, Pss::new_blinded::<D>(), &hashed)
        .map_err(|e| AlgError::crypto(algorithm, e.to_string()))
}

fn verify_digest<D>(
    algorithm: Algorithm,
    input: &[u8],
    signature: &[u8],
    key: &RsaPublicKey,
) -> AlgResult<()>
where
    D: 'static + Digest + DynDigest + Send + Sync,
{
    let hashed = D::digest(input);
    key.verify(Pss::new::<D>(), &hashed, signature)
        .map_err(|_| AlgError::VerificationFailed { algorithm })
}
