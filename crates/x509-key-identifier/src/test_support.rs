//! Fixtures shared by the unit tests.
use std::time::Duration;

use der::{
    asn1::{BitString, OctetString},
    oid::AssociatedOid,
    Decode, Encode,
};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned};
use x509_cert::{
    certificate::{TbsCertificate, Version},
    ext::{pkix::SubjectKeyIdentifier, Extension},
    name::RdnSequence,
    serial_number::SerialNumber,
    time::Validity,
    Certificate,
};

/// Ed25519 SubjectPublicKeyInfo with the key bytes `0x01..=0x20`.
pub(crate) const ED25519_SPKI: &[u8] = &[
    48, 42, 48, 5, 6, 3, 43, 101, 112, 3, 33, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32,
];
pub(crate) const ED25519_SPKI_BITS: &[u8] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32,
];
/// Ed25519 SubjectPublicKeyInfo with every key byte set to `0xaa`.
pub(crate) const OTHER_ED25519_SPKI: &[u8] = &[
    48, 42, 48, 5, 6, 3, 43, 101, 112, 3, 33, 0, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170,
    170, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170, 170,
    170, 170, 170,
];

pub(crate) const ACTIVE_SKI: &[u8] = &[0x01, 0x02, 0x03, 0x04, 0x05];
pub(crate) const ROLLOVER_SKI: &[u8] = &[0xca, 0xfe, 0xba, 0xbe];

const ED25519_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

/// Builds an unsigned CA certificate for `spki`, carrying `ski` as its Subject Key Identifier.
pub(crate) fn certificate(spki: &[u8], ski: Option<&[u8]>) -> Certificate {
    let algorithm = AlgorithmIdentifierOwned {
        oid: ED25519_OID,
        parameters: None,
    };

    let extensions = ski.map(|ski| {
        let value = SubjectKeyIdentifier(OctetString::new(ski).unwrap());
        vec![Extension {
            extn_id: SubjectKeyIdentifier::OID,
            critical: false,
            extn_value: OctetString::new(value.to_der().unwrap()).unwrap(),
        }]
    });

    Certificate {
        tbs_certificate: TbsCertificate {
            version: Version::V3,
            serial_number: SerialNumber::new(&[0x01]).unwrap(),
            signature: algorithm.clone(),
            issuer: RdnSequence(Vec::new()),
            validity: Validity::from_now(Duration::from_secs(3600)).unwrap(),
            subject: RdnSequence(Vec::new()),
            subject_public_key_info: SubjectPublicKeyInfoOwned::from_der(spki).unwrap(),
            issuer_unique_id: None,
            subject_unique_id: None,
            extensions,
        },
        signature_algorithm: algorithm,
        signature: BitString::from_bytes(&[0; 64]).unwrap(),
    }
}
