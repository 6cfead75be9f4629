use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

use super::errors::CryptoError;

const SIGNATURE_PREFIX: &str = "sha1=";

/// Webhook signature, as sent in the `X-Hub-Signature` header.
pub struct Signature<'a>(pub &'a str);

impl<'a> Signature<'a> {
    /// Compute the prefixed signature of a body.
    pub fn compute(body: &[u8], secret: &str) -> Result<String, CryptoError> {
        let mut hmac = Hmac::<Sha1>::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;
        hmac.update(body);

        Ok(format!(
            "{}{}",
            SIGNATURE_PREFIX,
            hex::encode(hmac.finalize().into_bytes())
        ))
    }

    /// Check if a signature is valid.
    ///
    /// Signatures with a different length are rejected before any byte is compared.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> Result<bool, CryptoError> {
        let digest = Self::compute(body, secret)?;
        let (digest, checksum) = (digest.as_bytes(), self.0.as_bytes());
        if digest.len() != checksum.len() {
            return Ok(false);
        }

        Ok(bool::from(digest.ct_eq(checksum)))
    }
}
