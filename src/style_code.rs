//! Short opaque identifiers for a product's style variant.
//!
//! Codes are drawn uniformly, with replacement, from `[A-Za-z0-9]`. Nothing
//! guarantees that two products end up with different codes.

use rand::{Rng, distributions::Alphanumeric};

pub const STYLE_CODE_LEN: usize = 10;

/// Generate a style code from the thread-local RNG.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(STYLE_CODE_LEN)
        .map(char::from)
        .collect()
}

/// Whether `code` has the shape of a generated style code.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == STYLE_CODE_LEN && code.bytes().all(|b| b.is_ascii_alphanumeric())
}
