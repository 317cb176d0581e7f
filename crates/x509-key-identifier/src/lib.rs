#![doc = include_str!("../README.md")]

mod authority_key_identifier;
pub use authority_key_identifier::{
    compute_authority_key_identifier, encode_authority_key_identifier,
};
mod error;
pub use error::KeyIdentifierError;
mod extensions;
pub use extensions::KeyIdentifierExtensions;
mod issuer;
pub use issuer::{select_issuer_certificate, IssuerCertificate, IssuerContext};
mod key_identifier;
pub use key_identifier::{derive_key_identifier, KeyIdentifier, KeyIdentifierVariant};
mod profile;
pub use profile::CertificateProfile;
mod public_key;
pub use public_key::SpkiPublicKeyBytes;
mod subject_key_identifier;
pub use subject_key_identifier::{compute_subject_key_identifier, encode_subject_key_identifier};

#[cfg(test)]
mod test_support;
