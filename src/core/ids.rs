//! Prefixed resource identifiers, e.g. `port-gmb6mfkd7tmjc`.

use uuid::Uuid;

pub const PORTFOLIO_ID_PREFIX: &str = "port";
pub const PRODUCT_VIEW_ID_PREFIX: &str = "prodview";
pub const PRODUCT_ID_PREFIX: &str = "prod";
pub const ARTIFACT_ID_PREFIX: &str = "pa";

/// Number of random characters following the prefix.
pub const ID_SUFFIX_LEN: usize = 13;

const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates `"{prefix}-{13 random [a-z0-9] characters}"`.
///
/// There is no check against identifiers already handed out; the 36^13
/// suffix space makes a collision negligible for an emulator.
pub fn generate_id(prefix: &str) -> String {
    let mut id = String::with_capacity(prefix.len() + 1 + ID_SUFFIX_LEN);
    id.push_str(prefix);
    id.push('-');
    id.extend(random_suffix());
    id
}

/// Checks that `candidate` has the shape produced by [`generate_id`].
pub fn is_generated_id(prefix: &str, candidate: &str) -> bool {
    let Some(suffix) = candidate
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
    else {
        return false;
    };

    suffix.len() == ID_SUFFIX_LEN
        && suffix
            .bytes()
            .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit())
}

fn random_suffix() -> impl Iterator<Item = char> {
    // Bytes 6 and 8 of a v4 uuid carry the version and variant bits.
    let bytes = *Uuid::new_v4().as_bytes();
    bytes
        .into_iter()
        .enumerate()
        .filter(|(index, _)| *index != 6 && *index != 8)
        .take(ID_SUFFIX_LEN)
        .map(|(_, byte)| ALPHABET[usize::from(byte) % ALPHABET.len()] as char)
}
