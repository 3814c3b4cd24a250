//! Command-line interface for `aes128-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use aes128_core::{
    encrypt_block, encrypt_block_with, encrypt_stream, expand_key, Aes128Key, Bitwise, Encryptor,
    EncryptorConfig, LogTable, DEFAULT_MAX_PLAINTEXT_LEN,
};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-128 block encryption CLI.
#[derive(Parser)]
#[command(name = "aes128", version, author, about = "AES-128 (FIPS-197) block encryptor")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file (or stdin) under a hex key.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        #[command(flatten)]
        io: IoArgs,
    },
    /// Encrypt a `key || plaintext` byte stream: the first 16 bytes are the key.
    Stream {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Self-test against the FIPS-197 vectors and cross-check both multipliers.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Input file; stdin when omitted.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
    /// Output file; stdout when omitted.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,
    /// Write ciphertext as lowercase hex, one block per line.
    #[arg(long, default_value_t = false)]
    hex: bool,
    /// Encrypt blocks in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,
    /// Maximum accepted plaintext size in bytes.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_PLAINTEXT_LEN)]
    max_input: usize,
}

impl IoArgs {
    fn config(&self) -> EncryptorConfig {
        EncryptorConfig {
            max_plaintext_len: self.max_input,
            parallel: self.parallel,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    match cli.command {
        Commands::Enc { key_hex, io } => cmd_enc(&key_hex, &io),
        Commands::Stream { io } => cmd_stream(&io),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn cmd_enc(key_hex: &str, io: &IoArgs) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let plaintext = read_input(io.input.as_deref())?;
    let ciphertext = Encryptor::new(io.config(), &key)
        .encrypt(&plaintext)
        .context("encrypt input")?;
    info!(
        "encrypted {} bytes into {} bytes",
        plaintext.len(),
        ciphertext.len()
    );
    write_output(io.output.as_deref(), &ciphertext, io.hex)
}

fn cmd_stream(io: &IoArgs) -> Result<()> {
    let input = read_input(io.input.as_deref())?;
    let ciphertext = encrypt_stream(io.config(), &input).context("encrypt stream")?;
    write_output(io.output.as_deref(), &ciphertext, io.hex)
}

const KNOWN_ANSWERS: [(&str, &str, &str); 3] = [
    (
        "00000000000000000000000000000000",
        "00000000000000000000000000000000",
        "66e94bd4ef8a2c3b884cfa59ca342b2e",
    ),
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
];

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for (key_hex, plain_hex, cipher_hex) in KNOWN_ANSWERS {
        let key = parse_key_hex(key_hex)?;
        let plain = parse_block_hex(plain_hex)?;
        let actual = hex::encode(encrypt_block(&plain, &expand_key(&key)));
        if actual != cipher_hex {
            bail!("known-answer mismatch for key {key_hex}: got {actual}, want {cipher_hex}");
        }
        debug!("known answer ok for key {key_hex}");
    }

    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut key_bytes = [0u8; 16];
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut block);
        let expanded = expand_key(&Aes128Key::from(key_bytes));
        if encrypt_block_with::<LogTable>(&block, &expanded)
            != encrypt_block_with::<Bitwise>(&block, &expanded)
        {
            bail!("table and bitwise multipliers disagree");
        }
    }
    println!(
        "ok: {} known answers, {samples} random cross-checks",
        KNOWN_ANSWERS.len()
    );
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path).with_context(|| format!("read {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, ciphertext: &[u8], as_hex: bool) -> Result<()> {
    let bytes = if as_hex {
        render_hex(ciphertext).into_bytes()
    } else {
        ciphertext.to_vec()
    };
    match path {
        Some(path) => fs::write(path, bytes).with_context(|| format!("write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes).context("write stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}

fn render_hex(ciphertext: &[u8]) -> String {
    ciphertext
        .chunks(16)
        .map(|block| hex::encode(block) + "\n")
        .collect()
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Aes128Key::try_from(bytes.as_slice()).context("AES-128 key must be 32 hex characters")
}

fn parse_block_hex(hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str).context("decode block hex")?;
    match <[u8; 16]>::try_from(bytes.as_slice()) {
        Ok(block) => Ok(block),
        Err(_) => bail!("block must be 16 bytes"),
    }
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => ChaCha20Rng::from_entropy(),
    }
}
