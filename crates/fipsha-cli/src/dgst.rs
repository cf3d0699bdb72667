//! Hash/digest command implementation.

use std::io::{self, Read};

use fipsha_crypto::hash::{self, AnyDigest};
use fipsha_types::HashAlgId;

pub fn run(
    algorithm: &str,
    files: &[String],
    in_memory: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let alg: HashAlgId = algorithm.parse()?;
    for file in files {
        let digest = digest_input(alg, file, in_memory)?;
        if file == "-" {
            println!("{}(stdin)= {digest}", alg.name());
        } else {
            println!("{}({file})= {digest}", alg.name());
        }
    }
    Ok(())
}

/// Digest `file`, or stdin when `file` is `-`.
pub(crate) fn digest_input(
    alg: HashAlgId,
    file: &str,
    in_memory: bool,
) -> Result<AnyDigest, Box<dyn std::error::Error>> {
    let digest = if file == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        hash::hash_bytes(alg, &buf)?
    } else if in_memory {
        hash::hash_file_in_memory(alg, file)?
    } else {
        hash::hash_file(alg, file)?
    };
    tracing::debug!(%alg, file, "digest computed");
    Ok(digest)
}
