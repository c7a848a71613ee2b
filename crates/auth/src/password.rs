//! Password hashing with bcrypt

/// bcrypt work factor for stored password hashes
pub const PASSWORD_HASH_COST: u32 = 10;

#[derive(Debug, thiserror::Error)]
#[error("Password hashing failed: {0}")]
pub struct PasswordError(#[from] bcrypt::BcryptError);

impl From<PasswordError> for mediahub_common::Error {
    fn from(err: PasswordError) -> Self {
        mediahub_common::Error::Internal(err.to_string())
    }
}

/// Hash a plaintext password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    Ok(bcrypt::hash(password, PASSWORD_HASH_COST)?)
}

/// Check a plaintext password against a stored hash.
///
/// A stored value that is not a bcrypt hash is an error, not a mismatch.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    Ok(bcrypt::verify(password, hash)?)
}
