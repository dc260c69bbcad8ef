//! Print lines matching a regular expression with optional context.
//!
//! `-A`, `-B` and `-C` behave as in grep; when conflicting values are given
//! the larger one is used for each side. Widths above 65535 are rejected.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use ring_tools::{ContextGrep, GrepOptions};

#[derive(Parser, Debug)]
#[command(name = "context_grep")]
#[command(about = "Print lines matching a regular expression with optional context")]
#[command(version)]
struct Args {
    /// Print n lines of context after a match
    #[arg(short = 'A', long, default_value_t = 0, value_name = "n")]
    after: u16,

    /// Print n lines of context before a match
    #[arg(short = 'B', long, default_value_t = 0, value_name = "n")]
    before: u16,

    /// Print n lines of context before and after a match
    #[arg(short = 'C', long, default_value_t = 0, value_name = "n")]
    context: u16,

    /// Print filename and line number along with each line
    #[arg(short = 'l', long)]
    location: bool,

    /// Regular expression to search for
    pattern: String,

    /// Files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = GrepOptions {
        after: args.after,
        before: args.before,
        context: args.context,
        show_location: args.location,
    };
    let grep = ContextGrep::new(&args.pattern, options)
        .with_context(|| format!("Illegal regular expression: {}", args.pattern))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut total = 0;
    for path in &args.files {
        let name = path.display().to_string();
        let file = File::open(path).with_context(|| format!("Could not read file {name}"))?;
        total += grep
            .scan(&name, BufReader::new(file), &mut out)
            .with_context(|| format!("Could not read file {name}"))?;
    }
    out.flush()?;

    info!("{total} matching lines in {} files", args.files.len());
    Ok(())
}
