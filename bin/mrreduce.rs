use std::fs::File;
use std::io;
use std::io::{BufRead, Read, Write as _};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mrstream::mr::DEFAULT_SEP;
use mrstream::mr::reduce::Reducer;
use mrstream::mragg;

#[derive(Parser)]
#[command(name = "mrreduce")]
struct Args {
    /// Separator between key and value on each input line.
    #[arg(long, default_value = DEFAULT_SEP)]
    sep: String,
    /// Aggregate applied per key group: mean, sum, count, min or max.
    #[arg(long, default_value = "mean")]
    agg: String,
    /// Pre-sorted key/value input files; standard input when none are given.
    input_files: Vec<String>,
}

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let agg = mragg::get_aggregate(&args.agg)?;
    let mut reducer = Reducer::new(args.sep, agg);
    let mut out = io::BufWriter::new(io::stdout().lock());

    // Chain the inputs into one stream so a key group spanning a file
    // boundary stays a single group.
    let input: Box<dyn BufRead> = if args.input_files.is_empty() {
        Box::new(io::stdin().lock())
    } else {
        let mut chained: Box<dyn Read> = Box::new(io::empty());
        for file in &args.input_files {
            chained = Box::new(chained.chain(File::open(file)?));
        }
        Box::new(io::BufReader::new(chained))
    };

    let stats = reducer.run(input, &mut out)?;
    out.flush()?;

    log::info!("emitted {} groups, skipped {} lines", stats.groups, stats.skipped);
    Ok(())
}
