//! Password hashing and verification using Argon2id.
//!
//! Hashes are PHC strings (`$argon2id$...`) carrying their own salt and
//! cost parameters, so verification does not need the hashing config.
//! An optional pepper (server-side secret) is prepended to the password
//! on both sides.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use hris_core::error::{HrisError, HrisResult};

use crate::config::PasswordHashParams;

fn peppered<'a>(password: &'a str, pepper: Option<&str>, buf: &'a mut String) -> &'a [u8] {
    match pepper {
        Some(p) => {
            *buf = format!("{p}{password}");
            buf.as_bytes()
        }
        None => password.as_bytes(),
    }
}

/// Hash a password with Argon2id and a fresh random salt.
pub fn hash_password(
    password: &str,
    pepper: Option<&str>,
    params: &PasswordHashParams,
) -> HrisResult<String> {
    let params = argon2::Params::new(
        params.memory_kib,
        params.iterations,
        params.parallelism,
        None,
    )
    .map_err(|e| HrisError::Crypto(format!("argon2 params error: {e}")))?;
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let mut buf = String::new();
    let input = peppered(password, pepper, &mut buf);

    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
    let hash = argon2
        .hash_password(input, &salt)
        .map_err(|e| HrisError::Crypto(format!("password hash error: {e}")))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against an Argon2 PHC-format hash.
///
/// Returns `Ok(true)` on match, `Ok(false)` on mismatch, or
/// `Err(HrisError::Crypto)` if the stored hash is malformed.
pub fn verify_password(password: &str, hash: &str, pepper: Option<&str>) -> HrisResult<bool> {
    let mut buf = String::new();
    let input = peppered(password, pepper, &mut buf);

    let parsed_hash = argon2::PasswordHash::new(hash)
        .map_err(|e| HrisError::Crypto(format!("invalid hash format: {e}")))?;

    match Argon2::default().verify_password(input, &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(HrisError::Crypto(format!("verify error: {e}"))),
    }
}
