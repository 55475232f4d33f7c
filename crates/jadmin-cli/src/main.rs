#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

//! Thin entrypoint for the `jadmin` binary.

use std::process;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let exit_code = jadmin_cli::run().await;
    if exit_code != 0 {
        process::exit(exit_code);
    }
}
