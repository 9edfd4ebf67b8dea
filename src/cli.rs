//! CLI module - Command-line interface definition and handler

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, IsTerminal};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::core::mode::Mode;
use crate::core::pipeline::{self, RunConfig};
use crate::core::render::OutputFormat;
use crate::core::tokenizer::MAX_TOKEN_SIZE;
use crate::core::unicode::UnicodeNames;

/// freqdist - count lines, bytes, runes or words on stdin and rank them.
#[derive(Parser, Debug)]
#[command(name = "freqdist")]
#[command(
    author,
    version,
    about,
    long_about = r#"freqdist reads standard input to the end, splits it into tokens, and prints
every distinct token with its count, most frequent first. Ties are broken by
the token itself in ascending byte/code point order, so output is stable.

Output (tab-separated, one token per line):
- line, word: <count>  <token>
- byte:       <count>  <hex>     <char>  <unicode name>
- rune:       <count>  <U+XXXX>  <char>  <unicode name>

Non-printable characters are shown as U+FFFD in the <char> column.

Examples:
    freqdist < access.log
    freqdist --by word < README.md | head
    printf 'h\xe9llo' | freqdist --by rune
    freqdist --by byte --format jsonl < image.png
"#
)]
pub struct Cli {
    /// Token kind (line/byte/rune/word).
    #[arg(
        long,
        env = "FREQDIST_BY",
        default_value = "line",
        value_name = "MODE",
        long_help = "Select how the input is split into tokens.\n\n\
Supported values:\n\
- line (default): segments separated by \\n; \\r is kept\n\
- byte: every raw byte\n\
- rune: every UTF-8 code point; invalid sequences count as U+FFFD\n\
- word: runs of bytes separated by ASCII whitespace"
    )]
    pub by: String,

    /// Output format (tsv/jsonl/json).
    #[arg(
        long,
        default_value = "tsv",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- tsv (default): tab-separated text, the stable scripting format\n\
- jsonl: one JSON object per token\n\
- json: a single JSON array"
    )]
    pub format: String,

    /// Maximum size of a single token in bytes.
    #[arg(
        long,
        default_value_t = MAX_TOKEN_SIZE,
        value_name = "BYTES",
        value_parser = parse_token_size,
        long_help = "Maximum size of a single line or word in bytes.\n\n\
A longer token aborts the run with an error; tokens are never truncated."
    )]
    pub max_token_size: usize,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr. Without -v/-q the level can also be\n\
set with RUST_LOG."
    )]
    pub verbose: bool,
}

fn parse_token_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("Invalid token size: {}", s))?;
    if size == 0 {
        return Err("Token size must be at least 1".to_string());
    }
    Ok(size)
}

/// Install the stderr subscriber
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.quiet);

    // Reject bad selectors before touching stdin
    let mode: Mode = cli.by.parse()?;
    let format: OutputFormat = cli.format.parse()?;
    let config = RunConfig {
        mode,
        format,
        max_token_size: cli.max_token_size,
    };
    debug!(?config, "parsed arguments");

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    pipeline::run(config, stdin, stdout, &UnicodeNames)
        .with_context(|| format!("counting by {} failed", mode))
}
