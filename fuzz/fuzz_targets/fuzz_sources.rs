#![no_main]
use std::io::Cursor;

use fipsha_crypto::sha2::{compute, Sha256, Sha512};
use fipsha_crypto::{BufferSource, FileSource};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let a = compute::<Sha256, _>(BufferSource::<u32>::new(data).unwrap()).unwrap();
    let b = compute::<Sha256, _>(FileSource::<u32, _>::from_reader(Cursor::new(data)).unwrap())
        .unwrap();
    assert_eq!(a, b);

    let a = compute::<Sha512, _>(BufferSource::<u64>::new(data).unwrap()).unwrap();
    let b = compute::<Sha512, _>(FileSource::<u64, _>::from_reader(Cursor::new(data)).unwrap())
        .unwrap();
    assert_eq!(a, b);
});
