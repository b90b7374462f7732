use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use nestrace::{Converter, OnError, RenderMode};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::PathBuf,
};

/// Reformat nestest CPU trace logs for comparison against reference logs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Trace log, one executed instruction per line.
    log: PathBuf,

    /// Output format: `truncated` or `verbose`.
    #[arg(short, long, default_value_t = RenderMode::VerboseSummary)]
    mode: RenderMode,

    /// Only convert the first N lines.
    #[arg(short = 'n', long, value_name = "N")]
    limit: Option<usize>,

    /// Report malformed lines and keep going instead of stopping.
    #[arg(long)]
    skip_malformed: bool,

    /// Write here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More logging on stderr; repeat for debug output.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let input = File::open(&cli.log)
        .with_context(|| format!("failed to open {}", cli.log.display()))?;
    let input = BufReader::new(input);

    let on_error = if cli.skip_malformed {
        OnError::Skip
    } else {
        OnError::Abort
    };
    let converter = Converter::new(cli.mode)
        .with_limit(cli.limit)
        .with_on_error(on_error);

    let report = match &cli.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            converter.run(input, BufWriter::new(out))
        }
        None => converter.run(input, BufWriter::new(io::stdout().lock())),
    }
    .with_context(|| format!("failed to convert {}", cli.log.display()))?;

    if report.skipped > 0 {
        log::warn!("{} malformed lines skipped", report.skipped);
    }

    Ok(())
}
