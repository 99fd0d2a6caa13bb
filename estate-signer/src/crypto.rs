//! Ed25519 Document Signing
//!
//! Raw Ed25519 signing and verification over document digests. The signed
//! message is `domain_tag || digest`, so a document signature can never be
//! replayed as some other kind of signature.
//!
//! Keys travel as base64. A private key is either a raw 32-byte seed or a
//! PKCS#8 DER document; a public key is either 32 raw bytes or an SPKI DER
//! document.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ed25519_dalek::pkcs8::{DecodePrivateKey, DecodePublicKey};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand_core::OsRng;
use zeroize::Zeroizing;

use crate::error::{SignerError, SignerResult};

/// Domain separation tags
pub mod domain {
    /// Domain tag for document signatures
    pub const DOCUMENT_SIGNATURE: &[u8] = b"ESTATE:DocumentSignature:v1\0";
}

const SEED_LEN: usize = 32;
const PUBLIC_KEY_LEN: usize = 32;
const SIGNATURE_LEN: usize = 64;

fn decode_base64(label: &str, encoded: &str) -> SignerResult<Zeroizing<Vec<u8>>> {
    BASE64
        .decode(encoded.trim())
        .map(Zeroizing::new)
        .map_err(|e| SignerError::Encoding(format!("Invalid base64 {}: {}", label, e)))
}

fn signing_input(domain_tag: &[u8], digest: &str) -> Vec<u8> {
    let mut input = Vec::with_capacity(domain_tag.len() + digest.len());
    input.extend_from_slice(domain_tag);
    input.extend_from_slice(digest.as_bytes());
    input
}

/// Private half of a document signing key pair
#[derive(Clone)]
pub struct DocumentSigningKey {
    signing_key: SigningKey,
}

impl DocumentSigningKey {
    /// Generate a new random signing key
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Decode from base64 (raw 32-byte seed or PKCS#8 DER)
    pub fn from_base64(encoded: &str) -> SignerResult<Self> {
        let bytes = decode_base64("private key", encoded)?;

        let signing_key = if bytes.len() == SEED_LEN {
            let mut seed = Zeroizing::new([0u8; SEED_LEN]);
            seed.copy_from_slice(&bytes);
            SigningKey::from_bytes(&seed)
        } else {
            SigningKey::from_pkcs8_der(&bytes)
                .map_err(|e| SignerError::InvalidKey(format!("Invalid PKCS#8 private key: {}", e)))?
        };

        Ok(Self { signing_key })
    }

    /// Encode the raw seed as base64
    pub fn to_base64(&self) -> String {
        let seed = Zeroizing::new(self.signing_key.to_bytes());
        BASE64.encode(seed.as_slice())
    }

    /// Public half of this key
    pub fn verifying_key(&self) -> DocumentVerifyingKey {
        DocumentVerifyingKey {
            verifying_key: self.signing_key.verifying_key(),
        }
    }

    /// Sign a digest, returning the base64 signature blob
    pub fn sign_digest(&self, digest: &str) -> String {
        let signature = self
            .signing_key
            .sign(&signing_input(domain::DOCUMENT_SIGNATURE, digest));
        BASE64.encode(signature.to_bytes())
    }
}

impl std::fmt::Debug for DocumentSigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentSigningKey")
            .field("kid", &self.verifying_key().kid())
            .finish_non_exhaustive()
    }
}

/// Public half of a document signing key pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentVerifyingKey {
    verifying_key: VerifyingKey,
}

impl DocumentVerifyingKey {
    /// Decode from base64 (raw 32 bytes or SPKI DER)
    pub fn from_base64(encoded: &str) -> SignerResult<Self> {
        let bytes = decode_base64("public key", encoded)?;

        let verifying_key = if bytes.len() == PUBLIC_KEY_LEN {
            let mut arr = [0u8; PUBLIC_KEY_LEN];
            arr.copy_from_slice(&bytes);
            VerifyingKey::from_bytes(&arr)
                .map_err(|e| SignerError::InvalidKey(format!("Invalid public key: {}", e)))?
        } else {
            VerifyingKey::from_public_key_der(&bytes)
                .map_err(|e| SignerError::InvalidKey(format!("Invalid SPKI public key: {}", e)))?
        };

        Ok(Self { verifying_key })
    }

    /// Encode the raw 32-byte key as base64
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.verifying_key.to_bytes())
    }

    /// Short key identifier (hex of the first 8 key bytes) for logs
    pub fn kid(&self) -> String {
        hex::encode(&self.verifying_key.to_bytes()[..8])
    }

    /// Verify a base64 signature blob over a digest.
    ///
    /// `Ok(false)` means the signature is well formed but does not verify.
    pub fn verify_digest(&self, digest: &str, signature_b64: &str) -> SignerResult<bool> {
        let bytes = decode_base64("signature", signature_b64)?;
        if bytes.len() != SIGNATURE_LEN {
            return Err(SignerError::InvalidSignature(format!(
                "Invalid signature length: expected {}, got {}",
                SIGNATURE_LEN,
                bytes.len()
            )));
        }
        let mut arr = [0u8; SIGNATURE_LEN];
        arr.copy_from_slice(&bytes);
        let signature = Signature::from_bytes(&arr);

        Ok(self
            .verifying_key
            .verify(&signing_input(domain::DOCUMENT_SIGNATURE, digest), &signature)
            .is_ok())
    }
}

/// Sign `digest` with a base64-encoded private key
pub fn sign(digest: &str, private_key_b64: &str) -> SignerResult<String> {
    let key = DocumentSigningKey::from_base64(private_key_b64)?;
    Ok(key.sign_digest(digest))
}

/// Verify `signature_b64` over `digest` with a base64-encoded public key
pub fn verify(digest: &str, signature_b64: &str, public_key_b64: &str) -> SignerResult<bool> {
    let key = DocumentVerifyingKey::from_base64(public_key_b64)?;
    key.verify_digest(digest, signature_b64)
}

/// Generate a fresh key pair as `(private_b64, public_b64)`
pub fn generate_keypair() -> (String, String) {
    let key = DocumentSigningKey::generate();
    let public = key.verifying_key().to_base64();
    (key.to_base64(), public)
}
