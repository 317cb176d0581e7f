#![no_main]

use libfuzzer_sys::fuzz_target;
use x509_key_identifier::{derive_key_identifier, KeyIdentifierVariant, SpkiPublicKeyBytes};

// Key identifier derivation should never panic
fuzz_target!(|data: &[u8]| {
    let key = SpkiPublicKeyBytes::from(data);
    let _ = derive_key_identifier(&key, KeyIdentifierVariant::Full);
    let _ = derive_key_identifier(&key, KeyIdentifierVariant::Truncated);
});
