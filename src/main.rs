use std::io;

use anyhow::{Context, Result};
use tracing::info;

use regicide_play::{Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let mut config = SessionConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(white) = args.next() {
        config.white_name = white;
    }
    if let Some(black) = args.next() {
        config.black_name = black;
    }

    info!("regicide starting");
    let mut session = Session::new(config);
    let outcome = session
        .run(io::stdin().lock(), io::stdout().lock())
        .context("session aborted")?;
    info!(%outcome, "regicide exiting");
    Ok(())
}
