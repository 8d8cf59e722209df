//! Unroll - prints an unrolled 5x5 kernel fragment for pasting into a shader

use clap::Parser;

use unroll::Cli;

fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity; logs go to stderr so stdout stays pasteable
    env_logger::init();

    let cli = Cli::parse();
    unroll::run(cli)
}
