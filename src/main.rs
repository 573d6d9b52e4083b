//! ascii_h3d - spins a 3D letter H made of tori in the terminal
//!
//! Runs until interrupted (Ctrl-C). Set `RUST_LOG=debug` to get frame timing
//! on stderr.

use anyhow::Context;
use ascii_h3d::{Animation, Error, RenderConfig, TerminalSink};
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the frames, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut animation = Animation::new(RenderConfig::default()).context("Invalid render settings")?;
    let mut terminal = TerminalSink::stdout();

    match animation.run_forever(&mut terminal) {
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed, stopping");
            Ok(())
        }
        result => result.context("Animation stopped"),
    }
}
