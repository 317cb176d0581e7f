use serde::{Deserialize, Serialize};

use crate::KeyIdentifierVariant;

/// The parts of a certificate profile that govern the key identifier extensions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateProfile {
    /// Derive subject key identifiers with the truncated method. Root CAs also apply this to
    /// their own authority key identifier.
    pub use_truncated_subject_key_identifier: bool,
    /// Mark the Subject Key Identifier extension as critical.
    pub subject_key_identifier_critical: bool,
    /// Mark the Authority Key Identifier extension as critical.
    pub authority_key_identifier_critical: bool,
}

impl CertificateProfile {
    /// Method used for subject key identifiers issued under this profile.
    pub fn subject_key_identifier_variant(&self) -> KeyIdentifierVariant {
        if self.use_truncated_subject_key_identifier {
            KeyIdentifierVariant::Truncated
        } else {
            KeyIdentifierVariant::Full
        }
    }
}
