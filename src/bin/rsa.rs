//! Command line front-end for textbook RSA.
//!
//! ```text
//! rsa encrypt <keyfile> <message>
//! rsa decrypt <keyfile> <ciphertext>
//! rsa genkey <numbits>
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{self, ExitCode};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use textbook_rsa::{
    message, BigUint, DecodeRsaKey, EncodeRsaKey, Error, PublicKeyParts, RsaPrivateKey,
    RsaPublicKey,
};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

#[derive(Parser, Debug)]
#[command(name = "rsa")]
#[command(about = "Textbook RSA: key generation, encryption and decryption without padding")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a message with a public or private key file and print the
    /// ciphertext as a decimal integer
    Encrypt {
        /// Key file holding at least `e` and `n`
        keyfile: PathBuf,
        /// Message to encrypt; must encode to an integer below the modulus
        message: String,
    },
    /// Decrypt a decimal ciphertext with a private key file and print the
    /// recovered bytes
    Decrypt {
        /// Key file holding `d`, `e` and `n`
        keyfile: PathBuf,
        /// Ciphertext as printed by `encrypt`
        ciphertext: String,
    },
    /// Generate a key pair and write it to standard output
    Genkey {
        /// Modulus size in bits, a positive multiple of 16
        numbits: usize,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `-h`, `--help` and `help` go to stdout; misuse goes to stderr.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_tracing();

    let res = match cli.command {
        Command::Encrypt { keyfile, message } => encrypt(&keyfile, &message),
        Command::Decrypt {
            keyfile,
            ciphertext,
        } => decrypt(&keyfile, &ciphertext),
        Command::Genkey { numbits } => genkey(numbits),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(Error::Entropy(source)) = err.downcast_ref::<Error>() {
                error!(%source, "cannot read the system randomness source");
                eprintln!("rsa: {err:#}");
                process::abort();
            }
            eprintln!("rsa: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RSA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn encrypt(keyfile: &Path, msg: &str) -> anyhow::Result<()> {
    let key = RsaPublicKey::read_key_file(keyfile)
        .with_context(|| format!("failed to load public key from {}", keyfile.display()))?;

    let m = message::encode(msg.as_bytes());
    if &m >= key.n() {
        warn!(
            message_bits = m.bits(),
            modulus_bits = key.n().bits(),
            "message is not smaller than the modulus and will not decrypt to itself"
        );
    }

    let c = key.encrypt(&m);

    let mut stdout = io::stdout().lock();
    write!(stdout, "{c}")?;
    stdout.flush()?;
    Ok(())
}

fn decrypt(keyfile: &Path, ciphertext: &str) -> anyhow::Result<()> {
    let key = RsaPrivateKey::read_key_file(keyfile)
        .with_context(|| format!("failed to load private key from {}", keyfile.display()))?;

    let c = Some(ciphertext)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| BigUint::parse_bytes(s.as_bytes(), 10))
        .ok_or_else(|| anyhow!("ciphertext is not a decimal integer: {ciphertext:?}"))?;

    let m = Zeroizing::new(key.decrypt(&c));
    let plaintext = Zeroizing::new(message::decode(&m));

    let mut stdout = io::stdout().lock();
    stdout.write_all(&plaintext)?;
    stdout.flush()?;
    Ok(())
}

fn genkey(numbits: usize) -> anyhow::Result<()> {
    let key = loop {
        match RsaPrivateKey::generate(numbits) {
            Ok(key) => break key,
            Err(Error::KeyGeneration) => {
                debug!(numbits, "public exponent not invertible, drawing new primes");
            }
            Err(err @ Error::InvalidBitLength(_)) => {
                return Err(
                    anyhow::Error::new(err).context("numbits must be a positive multiple of 16")
                );
            }
            Err(err) => return Err(err.into()),
        }
    };

    let mut stdout = io::stdout().lock();
    key.write_key(&mut stdout)?;
    stdout.flush()?;
    Ok(())
}
