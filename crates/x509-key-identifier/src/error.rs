use thiserror::Error;

/// Errors raised while deriving key identifiers or assembling their extensions.
///
/// A missing or unreadable Subject Key Identifier on an issuer certificate is not an error, the
/// authority key identifier then falls back to the derived value.
#[derive(Debug, Error)]
pub enum KeyIdentifierError {
    /// The public key could not be parsed into an algorithm identifier and a bit string.
    #[error("Public key is not a well-formed SubjectPublicKeyInfo")]
    MalformedKey,
    /// The issuer public key is malformed, so no authority key identifier can be derived.
    #[error("Issuer public key is missing or malformed")]
    NoIssuerKeyMaterial,

    /// An extension value could not be DER encoded.
    #[error("Encoding error, {0}")]
    Encoding(#[from] der::Error),
}

/// Alias for `Result<T, KeyIdentifierError>`.
pub(crate) type Result<T, E = KeyIdentifierError> = std::result::Result<T, E>;
