//! ZR5 Hash CLI
//!
//! A command-line tool for computing and auditing ZR5 proof-of-work hashes.
//!
//! # Commands
//!
//! - `hash` - Hash one input (text, hex, file or stdin)
//! - `primitive` - Run a single stage algorithm at a chosen width
//! - `order` - Show the stage order selected for an input
//! - `batch` - Hash every hex line of a file in parallel
//! - `selftest` - Check every stage against known-answer vectors
//! - `benchmark` - Run performance benchmark

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use zr5::algorithm::{Algorithm, HashPrimitive, ORDER_COUNT};
use zr5::input::{parse_batch, read_text_file, InputSource};
use zr5::report::{BatchEntry, HashReport};
use zr5::{hash, hash_batch, selftest, trace};

#[derive(Parser)]
#[command(name = "zr5")]
#[command(author = "Ziftr")]
#[command(version = "0.1.0")]
#[command(about = "ZR5 cascade hash for proof-of-work and proof-of-stake validation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Input selection shared by commands that hash a single input
#[derive(Args)]
#[group(multiple = false)]
struct InputArgs {
    /// Hash the UTF-8 bytes of this string
    #[arg(long)]
    text: Option<String>,

    /// Hash these hex-encoded bytes
    #[arg(long)]
    hex: Option<String>,

    /// Hash the contents of this file
    #[arg(long)]
    file: Option<PathBuf>,
}

impl InputArgs {
    fn source(self) -> InputSource {
        InputSource::from_args(self.text, self.hex, self.file)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Hash one input (reads stdin when no input is given)
    Hash {
        #[command(flatten)]
        input: InputArgs,

        /// Print the full 512-bit cascade output instead of the 256-bit digest
        #[arg(long)]
        full: bool,

        /// Print every stage output
        #[arg(long)]
        trace: bool,

        /// Emit a JSON report
        #[arg(long)]
        json: bool,
    },

    /// Run a single stage algorithm
    Primitive {
        /// blake, groestl, jh, keccak or skein
        #[arg(short, long)]
        algorithm: Algorithm,

        /// Digest width in bits
        #[arg(short, long, default_value = "512")]
        bits: usize,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Show the stage order selected for an input
    Order {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Hash every hex-encoded line of a file
    Batch {
        /// File with one hex input per line ('#' comments allowed)
        #[arg(long)]
        file: PathBuf,

        /// Emit JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Check every stage against known-answer vectors
    Selftest,

    /// Run performance benchmark
    Benchmark {
        /// Number of hashes to compute per thread
        #[arg(short, long, default_value = "100000")]
        count: u64,

        /// Number of threads (default: number of CPU cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    debug!("zr5 v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Hash {
            input,
            full,
            trace,
            json,
        } => cmd_hash(input.source(), full, trace, json),
        Commands::Primitive {
            algorithm,
            bits,
            input,
        } => cmd_primitive(algorithm, bits, input.source()),
        Commands::Order { input } => cmd_order(input.source()),
        Commands::Batch { file, json } => cmd_batch(&file, json),
        Commands::Selftest => cmd_selftest(),
        Commands::Benchmark { count, threads } => cmd_benchmark(count, threads),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout carries only results
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_hash(source: InputSource, full: bool, show_trace: bool, json: bool) -> anyhow::Result<()> {
    let input = source.read()?;
    let t = trace(&input);
    info!(
        input_len = input.len(),
        order_index = ?t.order_index,
        "hashed input"
    );

    if json {
        let report = HashReport::from_trace(input.len(), &t, show_trace);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if show_trace {
        if let Some(index) = t.order_index {
            println!("order: {} / {}", index, ORDER_COUNT);
        }
        for (i, (algo, output)) in t.stages.iter().zip(t.intermediates.iter()).enumerate() {
            println!("  {} {:<8} {}", i, algo.name(), hex::encode(output));
        }
    }

    if full {
        println!("{}", hex::encode(t.full()));
    } else {
        println!("{}", hex::encode(t.digest()));
    }

    Ok(())
}

fn cmd_primitive(algorithm: Algorithm, bits: usize, source: InputSource) -> anyhow::Result<()> {
    if bits % 8 != 0 {
        anyhow::bail!("Digest width must be a whole number of bytes, got {} bits", bits);
    }

    let input = source.read()?;
    let primitive: &dyn HashPrimitive = algorithm.primitive();
    let digest = primitive.hash(&input, bits / 8)?;
    debug!(%algorithm, bits, input_len = input.len(), "ran primitive");

    println!("{}", hex::encode(digest));
    Ok(())
}

fn cmd_order(source: InputSource) -> anyhow::Result<()> {
    let input = source.read()?;
    let t = trace(&input);

    let index = t
        .order_index
        .ok_or_else(|| anyhow::anyhow!("trace carries no order index"))?;
    let names: Vec<&str> = t.stages.iter().map(|algo| algo.name()).collect();
    println!("{} {}", index, names.join(" -> "));
    Ok(())
}

fn cmd_batch(path: &Path, json: bool) -> anyhow::Result<()> {
    let contents = read_text_file(path)?;
    let inputs = parse_batch(&contents)?;

    if inputs.is_empty() {
        warn!(path = %path.display(), "batch file contains no inputs");
        return Ok(());
    }

    let start = Instant::now();
    let digests = hash_batch(&inputs);
    info!(
        count = digests.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "hashed batch"
    );

    for (index, (input, digest)) in inputs.iter().zip(&digests).enumerate() {
        if json {
            let entry = BatchEntry::new(index, input.len(), digest);
            println!("{}", serde_json::to_string(&entry)?);
        } else {
            println!("{}", hex::encode(digest));
        }
    }

    Ok(())
}

fn cmd_selftest() -> anyhow::Result<()> {
    let checks = selftest::run();
    let failed = checks.iter().filter(|check| !check.passed).count();

    for check in &checks {
        if check.passed {
            println!("  ok    {}", check.name);
        } else {
            println!("  FAIL  {}", check.name);
            println!("        expected {}", check.expected);
            println!("        actual   {}", check.actual);
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} self-test checks failed", failed, checks.len());
    }

    println!("\nAll {} checks passed", checks.len());
    Ok(())
}

fn cmd_benchmark(count: u64, threads: Option<usize>) -> anyhow::Result<()> {
    let num_threads = threads.unwrap_or_else(num_cpus::get).max(1);
    println!(
        "Running benchmark with {} hashes on {} threads...",
        count, num_threads
    );

    let total = AtomicU64::new(0);
    let start = Instant::now();

    std::thread::scope(|scope| {
        for thread_id in 0..num_threads {
            let total = &total;
            scope.spawn(move || {
                // 80-byte header with the nonce in the last 4 bytes
                let mut header = [0u8; 80];
                header[..8].copy_from_slice(&(thread_id as u64).to_le_bytes());

                let thread_start = Instant::now();
                for nonce in 0..count {
                    header[76..].copy_from_slice(&(nonce as u32).to_le_bytes());
                    let _ = hash(&header);
                }
                let elapsed = thread_start.elapsed().as_secs_f64();

                total.fetch_add(count, Ordering::Relaxed);
                debug!(
                    thread_id,
                    hashrate = count as f64 / elapsed,
                    "thread finished"
                );
            });
        }
    });

    let elapsed = start.elapsed();
    let hashes = total.load(Ordering::Relaxed);
    let hashrate = hashes as f64 / elapsed.as_secs_f64();

    println!("\nResults:");
    println!("  Total hashes: {}", hashes);
    println!("  Time elapsed: {:.2}s", elapsed.as_secs_f64());
    println!("  Hashrate: {:.2} H/s", hashrate);
    println!("  Per thread: {:.2} H/s", hashrate / num_threads as f64);

    println!("\nAlgorithm parameters:");
    println!("  Version: {}", zr5::algorithm::VERSION);
    println!("  Stages: {}", zr5::algorithm::STAGES);
    println!("  Stage orders: {}", ORDER_COUNT);
    println!("  Digest: {} bits", zr5::algorithm::DIGEST_SIZE * 8);

    Ok(())
}
