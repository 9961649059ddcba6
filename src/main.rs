use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ras_field::{
    evaluate, evaluate_parallel, evaluate_unrolled, generator_period, update, Field, FieldBits,
    FieldConfig, FieldSymbol, MulMatrix, UNROLL,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ras-field", about = "Finite field arithmetic diagnostics for redundant archives")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build and certify the log/exp tables for a field.
    Tables {
        /// Symbol width in bits (8 or 16).
        #[arg(long, default_value_t = 16)]
        bits: u32,
        /// Generator polynomial in hex (default: the shipped primitive polynomial).
        #[arg(long, value_parser = parse_hex)]
        generator: Option<u32>,
    },
    /// Encode parity, rebuild every source from the rest, and check incremental updates.
    Selftest {
        /// Symbol width in bits (8 or 16).
        #[arg(long, default_value_t = 16)]
        bits: u32,
        /// Generator polynomial in hex (default: the shipped primitive polynomial).
        #[arg(long, value_parser = parse_hex)]
        generator: Option<u32>,
        /// Number of data blocks.
        #[arg(long, default_value_t = 4)]
        sources: usize,
        /// Symbols per block.
        #[arg(long, default_value_t = 65536)]
        len: usize,
        /// Symbols per parallel task.
        #[arg(long, default_value_t = 8192)]
        chunk_len: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Tables { bits, generator } => {
            let config = field_config(bits, generator)?;
            match config.bits {
                FieldBits::Eight => run_tables::<u8>(&config)?,
                FieldBits::Sixteen => run_tables::<u16>(&config)?,
            }
        }
        Commands::Selftest {
            bits,
            generator,
            sources,
            len,
            chunk_len,
        } => {
            let config = field_config(bits, generator)?;
            match config.bits {
                FieldBits::Eight => run_selftest::<u8>(&config, sources, len, chunk_len)?,
                FieldBits::Sixteen => run_selftest::<u16>(&config, sources, len, chunk_len)?,
            }
        }
    }

    Ok(())
}

fn parse_hex(value: &str) -> Result<u32, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u32::from_str_radix(digits, 16).map_err(|err| format!("invalid hex '{}': {}", value, err))
}

fn field_config(bits: u32, generator: Option<u32>) -> Result<FieldConfig> {
    let width = FieldBits::from_bits(bits)
        .ok_or_else(|| anyhow::anyhow!("unsupported symbol width {} (expected 8 or 16)", bits))?;
    let mut config = FieldConfig::for_bits(width);
    if let Some(generator) = generator {
        config = config.with_generator(generator);
    }
    Ok(config)
}

fn run_tables<S: FieldSymbol>(config: &FieldConfig) -> Result<()> {
    let period = generator_period(config.generator, config.bits.bits());
    println!(
        "GF(2^{})\tgenerator={:#x}\tsize={}\tperiod={}",
        config.bits.bits(),
        config.generator,
        config.size(),
        period
    );

    let field = Field::<S>::from_config(config)
        .with_context(|| format!("generator {:#x} rejected", config.generator))?;

    // Spot-check the tables against the definition of exp/log
    for a in 1..field.size() {
        let a = S::from_index(a);
        let log = field
            .log(a)
            .ok_or_else(|| anyhow::anyhow!("missing log for {:#x}", a))?;
        if field.exp(log) != a {
            bail!("exp(log({:#x})) = {:#x}", a, field.exp(log));
        }
    }
    println!("tables ok: every nonzero element round-trips through log/exp");
    Ok(())
}

fn run_selftest<S: FieldSymbol>(
    config: &FieldConfig,
    sources: usize,
    len: usize,
    chunk_len: usize,
) -> Result<()> {
    if sources == 0 || sources >= S::SIZE {
        bail!(
            "source count must be between 1 and {} for GF(2^{})",
            S::SIZE - 1,
            S::BITS
        );
    }
    let field = Field::<S>::from_config(config)
        .with_context(|| format!("generator {:#x} rejected", config.generator))?;

    let data: Vec<Vec<S>> = (0..sources).map(|i| pattern_block::<S>(i, len)).collect();
    let points: Vec<S> = (0..sources).map(S::from_index).collect();
    let parity_point = S::from_index(sources);

    // Encode
    let encode = MulMatrix::build(&field, &points, parity_point).context("building parity matrix")?;
    let refs: Vec<&[S]> = data.iter().map(|block| block.as_slice()).collect();
    let mut parity = vec![S::default(); len];
    let started = Instant::now();
    if len % UNROLL == 0 {
        evaluate_unrolled(&encode, &refs, &mut parity)?;
    } else {
        evaluate(&encode, &refs, &mut parity)?;
    }
    let elapsed = started.elapsed();
    let bytes = (sources * len * std::mem::size_of::<S>()) as f64;
    println!(
        "encode\tsources={}\tlen={}\t{:.1} MiB/s",
        sources,
        len,
        bytes / elapsed.as_secs_f64().max(1e-9) / (1024.0 * 1024.0)
    );

    // Rebuild each data block from the others plus parity
    for lost in 0..sources {
        let mut survivors: Vec<S> = Vec::with_capacity(sources);
        let mut blocks: Vec<&[S]> = Vec::with_capacity(sources);
        for (i, block) in data.iter().enumerate() {
            if i != lost {
                survivors.push(points[i]);
                blocks.push(block);
            }
        }
        survivors.push(parity_point);
        blocks.push(&parity);

        let decode = MulMatrix::build(&field, &survivors, points[lost])
            .with_context(|| format!("building matrix for block {}", lost))?;
        let mut restored = vec![S::default(); len];
        evaluate_parallel(&decode, &blocks, &mut restored, chunk_len)?;
        if restored != data[lost] {
            bail!("block {} was not reconstructed", lost);
        }
        tracing::info!(block = lost, "reconstructed");
    }
    println!("decode\trebuilt all {} blocks from parity", sources);

    // Replace block 0 incrementally and compare with a full re-encode
    let replacement = pattern_block::<S>(sources + 1, len);
    update(&encode, 0, &mut parity, &data[0], &replacement)?;
    let mut updated = refs.clone();
    updated[0] = replacement.as_slice();
    let mut expected = vec![S::default(); len];
    evaluate(&encode, &updated, &mut expected)?;
    if parity != expected {
        bail!("incremental update diverged from full evaluation");
    }
    println!("update\tincremental parity matches full evaluation");

    Ok(())
}

/// Deterministic test data, distinct per block index
fn pattern_block<S: FieldSymbol>(index: usize, len: usize) -> Vec<S> {
    (0..len)
        .map(|k| S::from_index(k.wrapping_mul(2 * index + 1) ^ (k >> 3) ^ index.wrapping_mul(0x9E37)))
        .collect()
}
