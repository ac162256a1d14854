use std::fs::File;
use std::io;
use std::io::Write as _;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mrstream::mr::DEFAULT_SEP;
use mrstream::mr::map::{MapStats, Mapper};

#[derive(Parser)]
#[command(name = "mrmap")]
struct Args {
    /// Zero-based CSV column projected as the key.
    #[arg(long, default_value_t = 8)]
    key_index: usize,
    /// Zero-based CSV column projected as the value.
    #[arg(long, default_value_t = 31)]
    value_index: usize,
    /// Separator between key and value in the output lines.
    #[arg(long, default_value = DEFAULT_SEP)]
    sep: String,
    /// CSV input files; standard input when none are given.
    input_files: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mapper = Mapper::new(args.key_index, args.value_index, args.sep);
    let mut out = io::BufWriter::new(io::stdout().lock());

    let mut stats = MapStats::default();
    if args.input_files.is_empty() {
        stats = mapper.run(io::stdin().lock(), &mut out)?;
    } else {
        for file in &args.input_files {
            let s = mapper.run(File::open(file)?, &mut out)?;
            stats.emitted += s.emitted;
            stats.skipped += s.skipped;
        }
    }
    out.flush()?;

    log::info!("emitted {} lines, skipped {} records", stats.emitted, stats.skipped);
    Ok(())
}
