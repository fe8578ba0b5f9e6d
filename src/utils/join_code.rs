//! Join code generation for games.
//!
//! Codes are short 4-character uppercase alphanumerics, easy to read out
//! loud. Uniqueness is not guaranteed here; the service draws candidates
//! and checks the store until one is free.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub const CODE_LEN: usize = 4;

/// Draw one join-code candidate.
pub fn generate_join_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
