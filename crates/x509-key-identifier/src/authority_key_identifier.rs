//! Authority Key Identifier computation.
//!
//! The value is computed in two stages. A key identifier is first derived from the issuer public
//! key. For subordinate issuers it is then replaced by the Subject Key Identifier published in
//! the issuing CA certificate, so the child's AKI matches the parent's SKI octet for octet even
//! when the parent used a non-standard derivation.
use der::asn1::OctetString;
use tracing::instrument;
use x509_cert::ext::pkix::AuthorityKeyIdentifier;

use crate::{
    derive_key_identifier,
    error::{KeyIdentifierError, Result},
    select_issuer_certificate, CertificateProfile, IssuerCertificate, IssuerContext, KeyIdentifier,
    KeyIdentifierVariant, SpkiPublicKeyBytes,
};

/// Computes the Authority Key Identifier for a certificate signed by `issuer_public_key`.
///
/// Fails with [`KeyIdentifierError::NoIssuerKeyMaterial`] if the issuer public key is malformed,
/// even when the issuer certificate carries a usable Subject Key Identifier.
#[instrument(skip_all, fields(is_root = issuer_context.is_root), err)]
pub fn compute_authority_key_identifier<C: IssuerCertificate>(
    issuer_public_key: &SpkiPublicKeyBytes,
    issuer_context: &IssuerContext<C>,
    profile: &CertificateProfile,
) -> Result<KeyIdentifier> {
    let derived = derive_issuer_key_identifier(issuer_public_key, issuer_context, profile)?;

    // A root has no external issuer, its AKI is always self-derived
    if issuer_context.is_root {
        return Ok(derived);
    }

    match select_issuer_certificate(issuer_context)
        .and_then(|certificate| certificate.subject_key_identifier())
    {
        Some(published) => {
            tracing::debug!("Using AuthorityKeyIdentifier from the issuer's SubjectKeyIdentifier");
            Ok(published)
        }
        None => {
            tracing::debug!("Issuer certificate has no SubjectKeyIdentifier, using derived value");
            Ok(derived)
        }
    }
}

/// AKI and SKI of a self-signed root are the same value, so a root issued under a truncating
/// profile mirrors that method. Everything else uses the full method.
fn derive_issuer_key_identifier<C>(
    issuer_public_key: &SpkiPublicKeyBytes,
    issuer_context: &IssuerContext<C>,
    profile: &CertificateProfile,
) -> Result<KeyIdentifier> {
    let variant = if issuer_context.is_root && profile.use_truncated_subject_key_identifier {
        KeyIdentifierVariant::Truncated
    } else {
        KeyIdentifierVariant::Full
    };

    derive_key_identifier(issuer_public_key, variant).map_err(|error| match error {
        KeyIdentifierError::MalformedKey => KeyIdentifierError::NoIssuerKeyMaterial,
        other => other,
    })
}

/// Wraps a key identifier in an `AuthorityKeyIdentifier` with only the `keyIdentifier` field set.
pub fn encode_authority_key_identifier(
    key_identifier: &KeyIdentifier,
) -> Result<AuthorityKeyIdentifier> {
    Ok(AuthorityKeyIdentifier {
        key_identifier: Some(OctetString::new(key_identifier.as_bytes())?),
        authority_cert_issuer: None,
        authority_cert_serial_number: None,
    })
}
