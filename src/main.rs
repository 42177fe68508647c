use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
mod auth;
use cryptkit::{
    Comparison, EncryptOptions, HashAlgorithm, PlaintextInput, Record, SecurityLevel,
    one_way_compare, one_way_encrypt, two_way_decrypt, two_way_encrypt,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, clap::Args)]
struct SecurityArgs {
    /// Named security level: fast, standard, high, maximum (default: maximum)
    #[arg(long = "level", env = "CRYPTKIT_SECURITY_LEVEL", value_parser = parse_level)]
    level: Option<SecurityLevel>,

    /// Explicit PBKDF2 iteration count, overrides --level
    #[arg(long, env = "CRYPTKIT_ITERATIONS")]
    iterations: Option<u32>,
}

impl SecurityArgs {
    fn to_options(&self) -> EncryptOptions {
        EncryptOptions {
            security_level: self.level,
            iterations: self.iterations,
        }
    }
}

fn parse_level(s: &str) -> Result<SecurityLevel, String> {
    s.parse().map_err(|e: cryptkit::CryptoError| e.to_string())
}

#[derive(Debug, clap::Args)]
struct InputArgs {
    /// Treat DATA as JSON and hash/encrypt its canonical form
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl InputArgs {
    fn to_input(&self, data: String) -> Result<PlaintextInput> {
        if self.json {
            let value: serde_json::Value =
                serde_json::from_str(&data).context("DATA is not valid JSON")?;
            Ok(value.into())
        } else {
            Ok(data.into())
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "cryptkit")]
#[command(
    version,
    about = "One-way hashing and passphrase-based AES-256-GCM encryption."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Prints the digest of DATA
    #[command(arg_required_else_help = true)]
    Hash {
        data: String,
        /// Use MD5 instead of SHA-256 (non-security identifiers only)
        #[arg(long, default_value_t = false)]
        md5: bool,
        #[command(flatten)]
        input: InputArgs,
    },

    /// Checks CANDIDATE against a digest
    #[command(arg_required_else_help = true)]
    Compare {
        hash: String,
        candidate: String,
        #[arg(long, default_value_t = false)]
        md5: bool,
        #[command(flatten)]
        input: InputArgs,
    },

    /// Encrypts DATA with a passphrase and prints the record
    #[command(arg_required_else_help = true)]
    Encrypt {
        data: String,
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        security: SecurityArgs,
    },

    /// Decrypts a record with a passphrase
    #[command(arg_required_else_help = true)]
    Decrypt {
        record: String,
        #[command(flatten)]
        security: SecurityArgs,
    },

    /// Shows the layout of a record without decrypting it
    #[command(arg_required_else_help = true)]
    Inspect { record: String },
}

fn algorithm(md5: bool) -> HashAlgorithm {
    HashAlgorithm::from_use_sha(!md5)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Cli::parse();
    match args.command {
        Commands::Hash { data, md5, input } => {
            let data = input.to_input(data)?;
            match one_way_encrypt(data, algorithm(md5)) {
                Some(digest) => println!("{digest}"),
                None => bail!("nothing to hash"),
            }
        }
        Commands::Compare {
            hash,
            candidate,
            md5,
            input,
        } => {
            let candidate = input.to_input(candidate)?;
            match one_way_compare(Some(&hash), candidate, algorithm(md5)) {
                Comparison::Match => println!("match"),
                Comparison::Mismatch => bail!("mismatch"),
                Comparison::PassThrough(_) => bail!("nothing to compare"),
            }
        }
        Commands::Encrypt {
            data,
            input,
            security,
        } => {
            let data = input.to_input(data)?;
            if data.is_empty() {
                bail!("nothing to encrypt");
            }
            let passphrase = auth::read_passphrase()?;
            match two_way_encrypt(data, &passphrase, &security.to_options()) {
                Some(record) => println!("{record}"),
                None => bail!("encryption failed"),
            }
        }
        Commands::Decrypt { record, security } => {
            let passphrase = auth::read_passphrase()?;
            match two_way_decrypt(record.trim(), &passphrase, &security.to_options()) {
                Some(text) => println!("{text}"),
                None => bail!("invalid passphrase or corrupted data"),
            }
        }
        Commands::Inspect { record } => {
            let record: Record = record.trim().parse()?;
            println!("salt        {}", hex::encode(record.salt()));
            println!("iv          {}", hex::encode(record.iv()));
            println!("tag         {}", hex::encode(record.tag()));
            println!("ciphertext  {} bytes", record.ciphertext().len());
        }
    }

    Ok(())
}
