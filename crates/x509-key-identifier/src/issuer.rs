//! Issuer topology and selection of the certificate an existing Subject Key Identifier is read
//! from.
use der::{oid::AssociatedOid, Decode, Encode};
use x509_cert::{ext::pkix::SubjectKeyIdentifier, Certificate};

use crate::{KeyIdentifier, SpkiPublicKeyBytes};

/// A CA certificate that can back an authority key identifier.
pub trait IssuerCertificate {
    /// The DER encoded SubjectPublicKeyInfo of the certificate, `None` if it cannot be encoded.
    fn public_key(&self) -> Option<SpkiPublicKeyBytes>;

    /// The value of the Subject Key Identifier extension, `None` if the extension is absent or
    /// cannot be decoded.
    fn subject_key_identifier(&self) -> Option<KeyIdentifier>;
}

impl IssuerCertificate for Certificate {
    fn public_key(&self) -> Option<SpkiPublicKeyBytes> {
        self.tbs_certificate
            .subject_public_key_info
            .to_der()
            .ok()
            .map(SpkiPublicKeyBytes::from)
    }

    fn subject_key_identifier(&self) -> Option<KeyIdentifier> {
        let extension = self
            .tbs_certificate
            .extensions
            .as_deref()?
            .iter()
            .find(|extension| extension.extn_id == SubjectKeyIdentifier::OID)?;

        match SubjectKeyIdentifier::from_der(extension.extn_value.as_bytes()) {
            Ok(ski) => Some(KeyIdentifier::from(ski.0.as_bytes())),
            Err(error) => {
                tracing::debug!(%error, "Ignoring unreadable SubjectKeyIdentifier extension");
                None
            }
        }
    }
}

/// Snapshot of the issuing CA for a single issuance.
#[derive(Clone, Debug)]
pub struct IssuerContext<C = Certificate> {
    /// The CA certificate chain, issuing certificate first.
    pub active_chain: Vec<C>,
    /// Certificate chain of the successor key during a key rollover, otherwise empty.
    pub rollover_chain: Vec<C>,
    /// The key that signs the certificate being issued.
    pub signing_public_key: SpkiPublicKeyBytes,
    /// The certificate being issued is a self-signed root.
    pub is_root: bool,
}

impl<C> IssuerContext<C> {
    /// Context for a subordinate CA without a rollover in progress.
    pub fn subordinate(signing_public_key: SpkiPublicKeyBytes, active_chain: Vec<C>) -> Self {
        Self {
            active_chain,
            rollover_chain: Vec::new(),
            signing_public_key,
            is_root: false,
        }
    }

    /// Context for a self-signed root certificate.
    pub fn root(signing_public_key: SpkiPublicKeyBytes) -> Self {
        Self {
            active_chain: Vec::new(),
            rollover_chain: Vec::new(),
            signing_public_key,
            is_root: true,
        }
    }

    /// Adds the chain of the successor key.
    pub fn with_rollover_chain(mut self, rollover_chain: Vec<C>) -> Self {
        self.rollover_chain = rollover_chain;
        self
    }
}

/// Picks the issuer certificate whose Subject Key Identifier the authority key identifier should
/// copy.
///
/// Only the head of each chain is considered. While a rollover chain exists the signing key
/// decides between the rollover head and the active head, and no certificate is returned if it
/// matches neither. Without a rollover chain the active head is the issuing certificate.
pub fn select_issuer_certificate<C: IssuerCertificate>(context: &IssuerContext<C>) -> Option<&C> {
    let signed_with = |certificate: &&C| {
        certificate.public_key().as_ref() == Some(&context.signing_public_key)
    };

    match context.rollover_chain.first() {
        None => context.active_chain.first(),
        Some(rollover) if signed_with(&rollover) => Some(rollover),
        Some(_) => context.active_chain.first().filter(signed_with),
    }
}
