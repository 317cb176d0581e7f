use der::asn1::OctetString;
use tracing::instrument;
use x509_cert::ext::pkix::SubjectKeyIdentifier;

use crate::{
    derive_key_identifier, error::Result, CertificateProfile, KeyIdentifier, SpkiPublicKeyBytes,
};

/// Computes the Subject Key Identifier of `subject_public_key` with the method selected by
/// `profile`.
#[instrument(skip_all, err)]
pub fn compute_subject_key_identifier(
    subject_public_key: &SpkiPublicKeyBytes,
    profile: &CertificateProfile,
) -> Result<KeyIdentifier> {
    derive_key_identifier(subject_public_key, profile.subject_key_identifier_variant())
}

/// Wraps a key identifier in the `SubjectKeyIdentifier ::= KeyIdentifier` OCTET STRING.
pub fn encode_subject_key_identifier(
    key_identifier: &KeyIdentifier,
) -> Result<SubjectKeyIdentifier> {
    Ok(SubjectKeyIdentifier(OctetString::new(key_identifier.as_bytes())?))
}
