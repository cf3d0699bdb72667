//! Digest verification command.

use fipsha_crypto::hash::AnyDigest;
use fipsha_types::HashAlgId;

use crate::dgst::digest_input;

pub fn run(algorithm: &str, file: &str, expected: &str) -> Result<(), Box<dyn std::error::Error>> {
    let alg: HashAlgId = algorithm.parse()?;
    let expected = AnyDigest::parse_hex(alg, expected)?;
    let actual = digest_input(alg, file, false)?;
    if actual != expected {
        return Err(format!("{file}: digest mismatch (got {actual})").into());
    }
    println!("{file}: OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn abc_file() -> tempfile::NamedTempFile {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"abc").unwrap();
        tmp
    }

    #[test]
    fn test_check_match() {
        let tmp = abc_file();
        assert!(run("sha256", tmp.path().to_str().unwrap(), ABC).is_ok());
    }

    #[test]
    fn test_check_mismatch() {
        let tmp = abc_file();
        let wrong = ABC.replace("ba78", "0000");
        let err = run("sha256", tmp.path().to_str().unwrap(), &wrong).unwrap_err();
        assert!(err.to_string().contains("digest mismatch"));
    }

    #[test]
    fn test_check_rejects_malformed_expected() {
        let tmp = abc_file();
        let path = tmp.path().to_str().unwrap();
        assert!(run("sha256", path, &ABC.to_uppercase()).is_err());
        assert!(run("sha256", path, &ABC[..10]).is_err());
        // Right hex, wrong algorithm width.
        assert!(run("sha512", path, ABC).is_err());
    }
}
