//! Command-line harness for `cham-core`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use cham_core::{
    block_from_slice, block_to_bytes, decrypt_block, encrypt_block, expand_key, Block, Cham128,
    Cham128Key, Word,
};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

const DEMO_KEY: [Word; 4] = [0x03020100, 0x07060504, 0x0b0a0908, 0x0f0e0d0c];
const DEMO_DATA: Block = [0x33221100, 0x77665544, 0xbbaa9988, 0xffeeddcc];
const DEMO_CIPHER: Block = [0xc3746034, 0xb55700c5, 0x8d64ec32, 0x489332f7];

/// CHAM-128/128 CLI.
#[derive(Parser)]
#[command(name = "cham", version, author, about = "CHAM-128/128 block cipher CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference vector and print round keys and ciphertext words.
    Demo,
    /// Print the eight round keys for a key.
    Keys {
        /// CHAM-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt a single 16-byte block.
    Enc {
        /// CHAM-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt a single 16-byte block.
    Dec {
        /// CHAM-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Check encrypt/decrypt round trips on random keys and blocks.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Demo => cmd_demo(),
        Commands::Keys { key_hex } => cmd_keys(&key_hex),
        Commands::Enc { key_hex, block_hex } => cmd_block(&key_hex, &block_hex, Direction::Enc),
        Commands::Dec { key_hex, block_hex } => cmd_block(&key_hex, &block_hex, Direction::Dec),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Enc,
    Dec,
}

fn cmd_demo() -> Result<()> {
    let round_keys = expand_key(&Cham128Key::from(DEMO_KEY));
    // The first round key shares the header line.
    print!("\nRoundKeys:");
    for rk in round_keys.0 {
        println!("{rk:x}");
    }

    let data = encrypt_block(&DEMO_DATA, &round_keys);
    println!("\nData:");
    for word in data {
        println!("{word:x}");
    }
    if data != DEMO_CIPHER {
        bail!("ciphertext does not match the CHAM-128/128 reference vector");
    }
    Ok(())
}

fn cmd_keys(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    for rk in expand_key(&key).0 {
        println!("{rk:08x}");
    }
    Ok(())
}

fn cmd_block(key_hex: &str, block_hex: &str, direction: Direction) -> Result<()> {
    let cipher = Cham128::new(&parse_key_hex(key_hex)?);
    let block = parse_block_hex(block_hex)?;
    let out = match direction {
        Direction::Enc => cipher.encrypt_block(&block),
        Direction::Dec => cipher.decrypt_block(&block),
    };
    println!("{}", hex::encode(block_to_bytes(&out)));
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    for sample in 0..samples {
        let key = Cham128Key::from(rng.gen::<[u8; 16]>());
        let block: Block = rng.gen();
        let round_keys = expand_key(&key);

        let ct = encrypt_block(&block, &round_keys);
        if ct != encrypt_block(&block, &expand_key(&key)) {
            bail!("sample {sample}: encryption is not deterministic");
        }
        if decrypt_block(&ct, &round_keys) != block {
            bail!("sample {sample}: decryption did not restore the plaintext");
        }
    }
    println!("checked {samples} samples");
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Cham128Key> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    Cham128Key::try_from(bytes.as_slice())
        .context("CHAM-128 key must be 16 bytes (32 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    block_from_slice(&bytes).context("block must be 16 bytes (32 hex characters)")
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
