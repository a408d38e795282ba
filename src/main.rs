use std::{io, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use lexscan::{
    config::{ScanConfig, DEFAULT_SOURCE, VERSION},
    display_error,
    errors::errors::Error,
    report::report::Reporter,
    scan::scan::scan_lines,
    source::source::LineSource,
};
use log::{debug, LevelFilter};

/// Scan a source file line by line and classify every token.
#[derive(Parser, Debug)]
#[command(name = "lexscan", version = VERSION)]
struct Args {
    /// File to scan
    #[arg(default_value = DEFAULT_SOURCE)]
    path: PathBuf,

    /// Only print the count table
    #[arg(long, conflicts_with = "no_summary")]
    summary_only: bool,

    /// Do not print the count table
    #[arg(long)]
    no_summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Args> for ScanConfig {
    fn from(args: &Args) -> Self {
        ScanConfig {
            source: args.path.clone(),
            show_tokens: !args.summary_only,
            show_summary: !args.no_summary,
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn run(config: &ScanConfig) -> Result<(), Error> {
    let source = LineSource::open(&config.source)?;
    debug!("scanning {}", source.name());
    println!("Source found. Scanning contents...");

    let start = Instant::now();
    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), config.show_tokens, config.show_summary);

    let scan = scan_lines(source, |tokens| reporter.tokens(tokens))?;
    reporter.summary(&scan.summary())?;

    debug!("scan finished in {:?}", start.elapsed());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ScanConfig::from(&args);
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}
