//! HMAC-SHA2 signing and verification (HS256, HS384, HS512)

use crate::algorithm::{Algorithm, HashStrength};
use crate::error::{AlgError, AlgResult};
use crate::keys::{HmacSigningKey, HmacVerifyingKey};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Compute the HMAC tag of `input`
pub(crate) fn sign(
    algorithm: Algorithm,
    input: &[u8],
    key: &HmacSigningKey,
) -> AlgResult<Vec<u8>> {
    compute(algorithm, key.expose_secret(), input)
}

/// Recompute the tag and compare it with `signature` in constant time
pub(crate) fn verify(
    algorithm: Algorithm,
    input: &[u8],
    signature: &[u8],
    key: &HmacVerifyingKey,
) -> AlgResult<()> {
    let expected = Zeroizing::new(compute(algorithm, key.expose_secret(), input)?);

    // Slices of different length compare unequal without inspecting contents.
    if bool::from(expected.as_slice().ct_eq(signature)) {
        Ok(())
    } else {
        Err(AlgError::VerificationFailed { algorithm })
    }
}

fn compute(algorithm: Algorithm, secret: &[u8], input: &[u8]) -> AlgResult<Vec<u8>> {
    match algorithm.hash() {
        HashStrength::Sha256 => mac::<HmacSha256>(algorithm, secret, input),
        HashStrength::Sha384 => mac::<HmacSha384>(algorithm, secret, input),
        HashStrength::Sha512 => mac::<HmacSha512>(algorithm, secret, input),
    }
}

fn mac<M: Mac + KeyInit>(
    algorithm: Algorithm,
    secret: &[u8],
    input: &[u8],
) -> AlgResult<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|e| AlgError::crypto(algorithm, format!("invalid HMAC key: {e}")))?;
    mac.update(input);
    Ok(mac.finalize().into_bytes().to_vec())
}
