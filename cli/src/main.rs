// Reads words or running text and prints their neutral inclusive form, one
// word or one line at a time.
mod text;

use anyhow::{Context, Result};
use clap::Parser;
use es_inclusive::style::{self, Style};
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Parser)]
#[clap(name = "inclusivize")]
#[clap(about = "Rewrites gendered Spanish words into their neutral inclusive form")]
struct Args {
    #[clap(short, long, default_value = "e")]
    #[clap(help = "The neutral-marker convention to use. Only \"e\" is supported for now.")]
    style: String,
    #[clap(short, long)]
    #[clap(help = "Print the rule that applies to each word instead of the rewritten text.")]
    explain: bool,
    #[clap(help = "The words to rewrite. When none are given, text is read from stdin.")]
    words: Vec<String>,
}

fn main() -> Result<()> {
    init_logger();

    let args = Args::parse();
    let style: Style = args.style.parse()?;
    debug!(%style, explain = args.explain, words = args.words.len(), "parsed arguments");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.words.is_empty() {
        for word in &args.words {
            if args.explain {
                writeln!(out, "{}", text::explain_word(word))?;
            } else {
                writeln!(out, "{}", style::inclusivize_with(word, style))?;
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    for (i, line) in stdin.lock().lines().enumerate() {
        let line = line.with_context(|| format!("Could not read line {} from stdin", i + 1))?;
        if args.explain {
            for word in text::words(&line) {
                writeln!(out, "{}", text::explain_word(word))?;
            }
        } else {
            writeln!(out, "{}", text::rewrite_line(&line, style))?;
        }
    }

    Ok(())
}

fn init_logger() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| eprintln!("Error initializing the global logger: {}", err))
        .ok();
}
