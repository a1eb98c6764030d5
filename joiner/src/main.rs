use anyhow::Context;
use clap::Parser;
use joiner::{host, Config};
use std::io;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout carries the frames
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    let taps = host::spawn_tap_reader(io::stdin())?;

    let stdout = io::stdout();
    let mut output = io::BufWriter::new(stdout.lock());
    let frames = host::run(&config, taps, &mut output).context("animation stopped early")?;

    log::info!("rendered {} frames", frames);
    Ok(())
}
