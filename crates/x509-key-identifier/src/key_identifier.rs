//! Key identifier derivation as described in
//! [RFC 5280 section 4.2.1.2](https://datatracker.ietf.org/doc/html/rfc5280#section-4.2.1.2).
//!
//! Both methods hash the bytes of the `subjectPublicKey` BIT STRING with SHA-1. The algorithm
//! identifier, the tag and length octets and the unused-bits octet are not part of the hash input.
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::{error::Result, SpkiPublicKeyBytes};

/// Length of a truncated key identifier.
const TRUNCATED_KEY_IDENTIFIER_LENGTH: usize = 8;
/// Type field placed in the high nibble of a truncated key identifier.
const TRUNCATED_KEY_IDENTIFIER_TAG: u8 = 0b0100_0000;

/// Method used to derive a key identifier from a public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyIdentifierVariant {
    /// Method (1): the full 160-bit SHA-1 digest.
    Full,
    /// Method (2): the four-bit type field `0100` followed by the least significant 60 bits of
    /// the SHA-1 digest.
    Truncated,
}

/// Key identifier bytes, as carried in the Subject and Authority Key Identifier extensions.
///
/// The length depends on how the identifier was obtained. Identifiers copied from an existing
/// issuer certificate can have any length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyIdentifier(Vec<u8>);

impl KeyIdentifier {
    #[allow(missing_docs)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[allow(missing_docs)]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for KeyIdentifier {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for KeyIdentifier {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for KeyIdentifier {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Derives the key identifier of `public_key` using the given method.
///
/// Fails with [`KeyIdentifierError::MalformedKey`](crate::KeyIdentifierError::MalformedKey) if
/// the key is not a DER encoded SubjectPublicKeyInfo.
pub fn derive_key_identifier(
    public_key: &SpkiPublicKeyBytes,
    variant: KeyIdentifierVariant,
) -> Result<KeyIdentifier> {
    let digest = Sha1::digest(public_key.subject_public_key_bits()?);

    let identifier = match variant {
        KeyIdentifierVariant::Full => digest.to_vec(),
        KeyIdentifierVariant::Truncated => {
            let mut truncated = digest[digest.len() - TRUNCATED_KEY_IDENTIFIER_LENGTH..].to_vec();
            truncated[0] = (truncated[0] & 0x0f) | TRUNCATED_KEY_IDENTIFIER_TAG;
            truncated
        }
    };

    Ok(KeyIdentifier(identifier))
}
