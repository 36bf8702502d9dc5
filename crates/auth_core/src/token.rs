use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes behind every minted identifier.
pub const TOKEN_BYTES: usize = 16;

#[derive(thiserror::Error, Debug)]
#[error("failed to draw random bytes from the system source")]
pub struct TokenError(#[from] rand::Error);

/// Mint an opaque identifier: 16 random bytes, rendered as 32 lowercase
/// hex characters.
///
/// Uniqueness is probabilistic only. Nothing re-checks a fresh token
/// against the registries; collisions are cryptographically negligible.
pub fn generate() -> Result<String, TokenError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(hex::encode(bytes))
}
