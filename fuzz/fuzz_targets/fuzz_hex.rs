#![no_main]
use fipsha_crypto::hash::{Sha256Digest, Sha384Digest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(d) = s.parse::<Sha256Digest>() {
            assert_eq!(d.to_hex(), s);
        }
        if let Ok(d) = s.parse::<Sha384Digest>() {
            assert_eq!(d.to_hex(), s);
        }
    }
});
