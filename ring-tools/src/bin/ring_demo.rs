//! Fill a ring buffer with a counting sequence and print it through every
//! read path: forward view, reverse view, stepped reverse view, and relative
//! indexing in both directions.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use ring_buffer::RingBuffer;
use ring_tools::demo;

#[derive(Parser, Debug)]
#[command(
    name = "ring_demo",
    about = "Push a counting sequence into a ring buffer and print it every way it can be read",
    long_about = None
)]
struct Args {
    /// Buffer capacity
    #[arg(short, long, default_value_t = 5)]
    capacity: usize,

    /// Number of values pushed, counting up from 0
    #[arg(short = 'n', long, default_value_t = 12)]
    count: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut buffer = RingBuffer::new(args.capacity)
        .with_context(|| format!("Failed to create ring buffer of capacity {}", args.capacity))?;
    buffer.extend(0..args.count);
    info!(
        "Pushed {} values, buffer holds {} of {}",
        args.count,
        buffer.len(),
        buffer.capacity()
    );

    for line in demo::report(&buffer) {
        println!("{line}");
    }
    Ok(())
}
