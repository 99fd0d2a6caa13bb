//! Document digests
//!
//! SHA-256 over the raw bytes, encoded as standard base64 so the digest can
//! travel in JSON bodies and be stored as a unique key.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sha2::{Digest as _, Sha256};

/// Length of an encoded digest (32 bytes as padded base64)
pub const ENCODED_DIGEST_LEN: usize = 44;

/// Hash arbitrary bytes
pub fn hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    BASE64.encode(digest)
}

/// Hash the UTF-8 bytes of a string
pub fn hash_str(content: &str) -> String {
    hash(content.as_bytes())
}

/// Hash several fields joined by `|`, used for composite uniqueness keys
pub fn hash_fields(fields: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            hasher.update(b"|");
        }
        hasher.update(field.as_bytes());
    }
    BASE64.encode(hasher.finalize())
}
