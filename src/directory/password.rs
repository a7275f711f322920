//! Password hashing for stored accounts

use scrypt::password_hash::errors::InvalidValue;
use scrypt::password_hash::{
    Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
};
use scrypt::{Params, Scrypt};

/// scrypt cost (log2 of N)
const HASH_LOG_N: u8 = 14;

/// Hash a password into a PHC string
pub fn hash_password(plain: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    let params = Params::new(HASH_LOG_N, 8, 1, Params::RECOMMENDED_LEN)
        .map_err(|_| Error::ParamValueInvalid(InvalidValue::InvalidFormat))?;
    let hash = Scrypt
        .hash_password_customized(plain.as_bytes(), None, None, params, &salt)?
        .to_string();
    Ok(hash)
}

/// Verify a password against a PHC string
pub fn verify_password(hash: &str, plain: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Scrypt.verify_password(plain.as_bytes(), &parsed_hash).is_ok()
}
