//! Compact serialization helpers
//!
//! Thin glue between the token layer and the signing algorithms: base64url
//! segments (RFC 7515, no padding), signing-input construction and splitting
//! a `header.payload.signature` token. Claims are never decoded here.

use crate::algorithm::Algorithm;
use crate::error::{AlgError, AlgResult};
use crate::keys::{SigningKey, VerifyingKey};
use crate::policy::VerificationPolicy;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

/// Base64url-encode without padding
#[inline]
#[must_use]
pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a base64url segment; padding and the standard alphabet are rejected
///
/// # Errors
///
/// Returns [`AlgError::MalformedToken`] for invalid input.
#[inline]
pub fn decode_segment(segment: &str) -> AlgResult<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| AlgError::malformed(format!("invalid base64url segment: {e}")))
}

/// `header_b64 + "." + payload_b64`
#[must_use]
pub fn signing_input(header_b64: &str, payload_b64: &str) -> String {
    format!("{header_b64}.{payload_b64}")
}

#[derive(Serialize)]
struct Header<'a> {
    alg: &'static str,
    typ: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    kid: Option<&'a str>,
}

#[derive(Deserialize)]
struct HeaderAlg {
    alg: String,
}

/// Encode a minimal `{"alg":..,"typ":"JWT"}` header segment
///
/// # Errors
///
/// Returns [`AlgError::MalformedToken`] if the header cannot be serialized.
pub fn encode_header(algorithm: Algorithm, kid: Option<&str>) -> AlgResult<String> {
    let header = Header {
        alg: algorithm.name(),
        typ: "JWT",
        kid,
    };
    let json = serde_json::to_vec(&header)
        .map_err(|e| AlgError::malformed(format!("header serialization failed: {e}")))?;
    Ok(encode_segment(&json))
}

/// Sign `header_b64.payload_b64` and return the full compact token
///
/// # Errors
///
/// Everything [`Algorithm::sign`] returns.
pub fn sign_compact(
    algorithm: Algorithm,
    header_b64: &str,
    payload_b64: &str,
    key: &SigningKey,
) -> AlgResult<String> {
    let input = signing_input(header_b64, payload_b64);
    let signature = algorithm.sign(input.as_bytes(), key)?;
    Ok(format!("{input}.{}", encode_segment(&signature)))
}

/// A compact token split into signing input and decoded signature
#[derive(Debug, Clone)]
pub struct CompactToken<'a> {
    token: &'a str,
    header_len: usize,
    input_len: usize,
    signature: Vec<u8>,
}

impl<'a> CompactToken<'a> {
    /// Split `token` into its three segments
    ///
    /// # Errors
    ///
    /// Returns [`AlgError::MalformedToken`] unless the token has exactly
    /// three segments, a non-empty header and a decodable signature.
    pub fn parse(token: &'a str) -> AlgResult<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        let [header, payload, signature] = parts.as_slice() else {
            return Err(AlgError::malformed(format!(
                "expected 3 segments, found {}",
                parts.len()
            )));
        };
        if header.is_empty() {
            return Err(AlgError::malformed("empty header segment"));
        }

        Ok(Self {
            token,
            header_len: header.len(),
            input_len: header.len() + 1 + payload.len(),
            signature: decode_segment(signature)?,
        })
    }

    /// Encoded header and payload joined by `.`, exactly as they appear in the token
    #[must_use]
    pub fn signing_input(&self) -> &'a str {
        &self.token[..self.input_len]
    }

    /// Encoded header segment
    #[must_use]
    pub fn header_segment(&self) -> &'a str {
        &self.token[..self.header_len]
    }

    /// Encoded payload segment
    #[must_use]
    pub fn payload_segment(&self) -> &'a str {
        &self.token[self.header_len + 1..self.input_len]
    }

    /// Decoded signature bytes
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// `alg` value named by the header
    ///
    /// The value is untrusted until checked against a
    /// [`VerificationPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`AlgError::MalformedToken`] if the header is not JSON with a
    /// string `alg` member.
    pub fn header_algorithm(&self) -> AlgResult<String> {
        let bytes = decode_segment(self.header_segment())?;
        let header: HeaderAlg = serde_json::from_slice(&bytes)
            .map_err(|e| AlgError::malformed(format!("invalid header: {e}")))?;
        Ok(header.alg)
    }

    /// Verify the token with the algorithm its header names, subject to `policy`
    ///
    /// # Errors
    ///
    /// Everything [`CompactToken::header_algorithm`] and
    /// [`VerificationPolicy::verify`] return.
    pub fn verify_with(
        &self,
        policy: &VerificationPolicy,
        key: &VerifyingKey,
    ) -> AlgResult<Algorithm> {
        let name = self.header_algorithm()?;
        policy.verify(&name, self.signing_input().as_bytes(), &self.signature, key)
    }
}
