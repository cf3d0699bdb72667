//! List supported hash algorithms.

use fipsha_types::HashAlgId;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Hash algorithms:");
    for alg in HashAlgId::ALL {
        println!(
            "  {:<8} output {:>2} bytes, block {:>3} bytes",
            alg.name(),
            alg.output_size(),
            alg.block_size()
        );
    }
    Ok(())
}
