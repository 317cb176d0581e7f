use der::{asn1::OctetString, oid::AssociatedOid, Encode};
use x509_cert::ext::{
    pkix::{AuthorityKeyIdentifier, SubjectKeyIdentifier},
    Extension,
};

use crate::{
    compute_authority_key_identifier, compute_subject_key_identifier,
    encode_authority_key_identifier, encode_subject_key_identifier, error::Result,
    CertificateProfile, IssuerCertificate, IssuerContext, SpkiPublicKeyBytes,
};

/// Builds the Subject and Authority Key Identifier extensions of a certificate issued under a
/// profile, ready to be placed in the certificate's extension list.
#[derive(Clone, Debug)]
pub struct KeyIdentifierExtensions {
    profile: CertificateProfile,
}

impl KeyIdentifierExtensions {
    #[allow(missing_docs)]
    pub fn new(profile: CertificateProfile) -> Self {
        Self { profile }
    }

    #[allow(missing_docs)]
    pub fn profile(&self) -> &CertificateProfile {
        &self.profile
    }

    /// The Subject Key Identifier extension for `subject_public_key`.
    pub fn subject_key_identifier(
        &self,
        subject_public_key: &SpkiPublicKeyBytes,
    ) -> Result<Extension> {
        let key_identifier = compute_subject_key_identifier(subject_public_key, &self.profile)?;
        let value = encode_subject_key_identifier(&key_identifier)?;

        Ok(Extension {
            extn_id: SubjectKeyIdentifier::OID,
            critical: self.profile.subject_key_identifier_critical,
            extn_value: OctetString::new(value.to_der()?)?,
        })
    }

    /// The Authority Key Identifier extension for a certificate signed by `issuer_public_key`.
    pub fn authority_key_identifier<C: IssuerCertificate>(
        &self,
        issuer_public_key: &SpkiPublicKeyBytes,
        issuer_context: &IssuerContext<C>,
    ) -> Result<Extension> {
        let key_identifier =
            compute_authority_key_identifier(issuer_public_key, issuer_context, &self.profile)?;
        let value = encode_authority_key_identifier(&key_identifier)?;

        Ok(Extension {
            extn_id: AuthorityKeyIdentifier::OID,
            critical: self.profile.authority_key_identifier_critical,
            extn_value: OctetString::new(value.to_der()?)?,
        })
    }
}
