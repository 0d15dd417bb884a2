//! Signing and verification core for compact JOSE tokens
//!
//! This crate provides:
//! - HS256, HS384 and HS512 (HMAC-SHA2) with constant-time verification
//! - PS256, PS384 and PS512 (RSASSA-PSS) with salt length pinned to the digest length
//! - A write-once registry resolving `alg` identifiers
//! - Role-tagged keys, so a verification key cannot be used to sign
//! - A serde-configurable verification policy guarding against algorithm confusion
//!
//! The crate only ever sees the signing input (`header.payload` as bytes) and
//! the raw signature. Encoding claims and checking them is the job of the
//! token layer above.
//!
//! ```
//! use jwt_alg::{registry, HmacSigningKey, SigningKey};
//!
//! let alg = registry::lookup("HS256")?;
//! let secret = b"a secret of at least thirty-two bytes".to_vec();
//! let key = SigningKey::from(HmacSigningKey::new(secret));
//!
//! let input = b"eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJ1c2VyIn0";
//! let signature = alg.sign(input, &key)?;
//! alg.verify(input, &signature, &key.verifying_key())?;
//! # Ok::<(), jwt_alg::AlgError>(())
//! ```

pub mod algorithm;
pub mod compact;
mod error;
mod hmac;
pub mod keys;
pub mod pem;
pub mod policy;
mod pss;
pub mod registry;

pub use algorithm::{Algorithm, AlgorithmFamily, HashStrength};
pub use compact::CompactToken;
pub use error::{AlgError, AlgResult};
pub use keys::{HmacSigningKey, HmacVerifyingKey, SigningKey, VerifyingKey};
pub use policy::VerificationPolicy;

// Key types for the PSS family come straight from `rsa`.
pub use rsa::{RsaPrivateKey, RsaPublicKey};
