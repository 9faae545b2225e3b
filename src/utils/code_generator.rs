//! Short code generation and validation utilities.

use rand::Rng;

/// Number of characters in every generated short code.
pub const CODE_LENGTH: usize = 7;

/// Characters a short code is drawn from.
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random short code.
///
/// Each character is drawn uniformly from the 62-character alphanumeric
/// alphabet. Uses the thread-local generator from [`rand::rng`], which is
/// seeded once from the operating system and never reseeded per call.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Returns `true` if `code` has the shape of a generated short code.
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CHARSET.contains(&b))
}
