use clap::{ArgAction, Parser, Subcommand};

mod check;
mod dgst;
mod list;
mod logging;

/// fipsha command-line tool for SHA-2 message digests.
#[derive(Parser)]
#[command(name = "fipsha")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the digest of one or more files.
    Dgst {
        /// Hash algorithm (sha224, sha256, sha384, sha512).
        #[arg(short, long, default_value = "sha256")]
        algorithm: String,
        /// Read each file fully into memory instead of streaming it.
        #[arg(long)]
        in_memory: bool,
        /// Input files (use - for stdin).
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Verify a file against an expected hex digest.
    Check {
        /// Hash algorithm (sha224, sha256, sha384, sha512).
        #[arg(short, long, default_value = "sha256")]
        algorithm: String,
        /// Input file (use - for stdin).
        file: String,
        /// Expected digest, lowercase hex.
        expected: String,
    },
    /// Run the known-answer self-tests.
    Selftest,
    /// List supported hash algorithms.
    List,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Commands::Dgst {
            algorithm,
            in_memory,
            files,
        } => dgst::run(algorithm, files, *in_memory),
        Commands::Check {
            algorithm,
            file,
            expected,
        } => check::run(algorithm, file, expected),
        Commands::Selftest => selftest(),
        Commands::List => list::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn selftest() -> Result<(), Box<dyn std::error::Error>> {
    fipsha_crypto::fips::run_self_tests()?;
    println!("self-tests passed");
    Ok(())
}
