use der::{Decode, Encode};
use spki::{SubjectPublicKeyInfoOwned, SubjectPublicKeyInfoRef};

use crate::error::{KeyIdentifierError, Result};

/// DER encoded SubjectPublicKeyInfo of a certificate subject or an issuing CA.
///
/// The bytes are kept opaque until a key identifier is derived from them. Equality is
/// encoded-form equality, so two encodings of the same key with different algorithm parameters
/// are different keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpkiPublicKeyBytes(Vec<u8>);

impl SpkiPublicKeyBytes {
    /// Returns the bytes of the `subjectPublicKey` BIT STRING, without the unused-bits octet.
    pub(crate) fn subject_public_key_bits(&self) -> Result<&[u8]> {
        let spki = SubjectPublicKeyInfoRef::from_der(&self.0)
            .map_err(|_| KeyIdentifierError::MalformedKey)?;
        Ok(spki.subject_public_key.raw_bytes())
    }

    /// Re-encodes a parsed SubjectPublicKeyInfo.
    pub fn from_spki(spki: &SubjectPublicKeyInfoOwned) -> Result<Self> {
        Ok(Self(spki.to_der()?))
    }
}

impl From<Vec<u8>> for SpkiPublicKeyBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for SpkiPublicKeyBytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for SpkiPublicKeyBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
