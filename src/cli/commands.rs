use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};

use crate::analysis::stats::{DEFAULT_ITERATIONS, DEFAULT_SIGMA};
use crate::analysis::{collect_destinations, collect_path_stats, dump_records};
use crate::parsers::Schema;
use crate::pipeline::{
    DEFAULT_MAX_LINE_LEN, ExtractConfig, MAX_LINE_LEN_LIMIT, RecordWriter, convert,
};
use crate::utils::{ensure_parent_dir, init_logging};

#[derive(Parser)]
#[command(name = "ping-extract")]
#[command(version = "0.1.0")]
#[command(
    about = "Convert newline-delimited ping results into fixed-size binary records",
    long_about = None
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read results from stdin and write 20-byte records to OUTPUT
    Extract {
        /// Destination file (created or truncated)
        output: PathBuf,

        /// Layout of the input lines
        #[arg(long, value_enum, default_value_t = Schema::Atlas)]
        schema: Schema,

        /// Lines longer than this many bytes are skipped
        #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN, value_parser = parse_line_len)]
        max_line_len: usize,
    },
    /// Print the records of a binary file as text
    Dump {
        file: PathBuf,

        /// Stop after this many records
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// List the unique destination addresses in a directory of record files
    Addrs { dir: PathBuf },
    /// Sigma-clipped latency per (probe, destination) over a directory of record files
    Stats {
        dir: PathBuf,

        /// Clipping threshold in standard deviations
        #[arg(long, default_value_t = DEFAULT_SIGMA)]
        sigma: f64,

        /// Maximum clipping passes
        #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: usize,

        /// Print a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
}

fn parse_line_len(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) if n > MAX_LINE_LEN_LIMIT => Err(format!("must be at most {}", MAX_LINE_LEN_LIMIT)),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Extract { output, schema, max_line_len } => {
            extract(&output, &ExtractConfig { schema, max_line_len })
        }
        Commands::Dump { file, limit } => dump(&file, limit),
        Commands::Addrs { dir } => show_addrs(&dir),
        Commands::Stats { dir, sigma, iterations, json } => {
            show_stats(&dir, sigma, iterations, json)
        }
    }
}

fn extract(output: &Path, config: &ExtractConfig) -> Result<()> {
    ensure_parent_dir(output)?;
    let mut writer = RecordWriter::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;

    let stats = convert(io::stdin().lock(), &mut writer, config)
        .with_context(|| format!("Extraction into {} aborted", output.display()))?;
    writer
        .finish()
        .with_context(|| format!("Failed to flush output file: {}", output.display()))?;

    eprintln!(
        "Extracted {} records from {} lines ({} skipped)",
        stats.records,
        stats.lines,
        stats.skipped_total()
    );
    for (kind, count) in &stats.skipped {
        eprintln!("  {}: {}", kind, count);
    }

    Ok(())
}

fn dump(file: &Path, limit: Option<usize>) -> Result<()> {
    let input = File::open(file)
        .with_context(|| format!("Failed to open record file: {}", file.display()))?;
    let mut out = BufWriter::new(io::stdout().lock());
    dump_records(BufReader::new(input), &mut out, limit)?;
    Ok(())
}

fn show_addrs(dir: &Path) -> Result<()> {
    let addrs = collect_destinations(dir)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for addr in &addrs {
        writeln!(out, "{}", addr)?;
    }
    out.flush()?;

    eprintln!("Found {} unique addresses.", addrs.len());
    Ok(())
}

fn show_stats(dir: &Path, sigma: f64, iterations: usize, json: bool) -> Result<()> {
    if !(sigma.is_finite() && sigma > 0.0) {
        bail!("--sigma must be a positive number, got {}", sigma);
    }

    let stats = collect_path_stats(dir, sigma, iterations)?;

    let mut out = BufWriter::new(io::stdout().lock());
    if json {
        serde_json::to_writer_pretty(&mut out, &stats).context("Failed to serialize stats")?;
        writeln!(out)?;
    } else {
        for path in &stats {
            writeln!(
                out,
                "{}|{}|mean={:.3}ms|stddev={:.3}ms|kept={}/{}",
                path.dst_addr,
                path.prb_id,
                path.latency.mean,
                path.latency.std_dev,
                path.latency.kept,
                path.latency.samples
            )?;
        }
    }
    out.flush()?;

    eprintln!("Summarised {} probe/destination pairs.", stats.len());
    Ok(())
}
