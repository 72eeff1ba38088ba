// src/main.rs
mod logger;

use std::io::{self, BufRead, Write};

use anyhow::{Context, bail};
use clap::Parser;
use huffcode::{HuffmanTree, Report, compress, count_frequencies, decode};
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "huffcode", version = "0.1.0")]
#[command(about = "Huffman-encode a line of text and decode it back.", long_about = None)]
struct Cli {
    /// Text to encode. Prompted for on stdin when omitted.
    #[arg(short, long)]
    text: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also print the Huffman tree
    #[arg(long, conflicts_with = "json")]
    tree: bool,

    /// Log at debug level
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }
}

fn read_line_prompt(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_level())?;

    let span = tracing::info_span!("huffcode", json = cli.json);
    let _enter = span.enter();

    let text = match cli.text {
        Some(text) => text,
        None => read_line_prompt("Please enter your text: ").context("failed to read input text")?,
    };

    let encoded = compress(&text).context("encoding failed")?;
    let decoded = decode(&encoded.bits, &encoded.table).context("decoding failed")?;

    if cli.tree {
        // Rebuilt from the same counts, so identical to the one used for encoding.
        let tree = HuffmanTree::from_frequencies(&count_frequencies(&text))?;
        print!("{}", tree.render());
    }

    let report = Report::new(&text, encoded.bits, encoded.table, decoded);
    if !report.round_trip_ok() {
        bail!("decoded text does not match the original");
    }
    info!(
        compressed_bits = report.stats.compressed_bits,
        original_bits = report.stats.original_bits,
        "round trip verified"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("the text we want to encode: {}", report.original);
    let table = report
        .table
        .iter()
        .map(|(symbol, code)| format!("{symbol:?}: {code}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("after huffman encoding: {}, {{{}}}", report.encoded, table);
    println!("decoded text: {}", report.decoded);
    println!("{}", report.stats);
    Ok(())
}
