use std::io;

use branch_chess::session::session_top::run_stdio_loop;
use branch_chess::utils::move_notation::NotationStyle;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const NOTATION_ENV: &str = "BRANCH_CHESS_NOTATION";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let notation = match std::env::var(NOTATION_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|err| {
            warn!(%err, "falling back to figurine notation");
            NotationStyle::Figurine
        }),
        Err(_) => NotationStyle::default(),
    };

    run_stdio_loop(notation)
}
