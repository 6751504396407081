//! introduce-agent: writes the agent's introduction to `my-introduction.json`.
//!
//! Takes no input. Builds the introduction record, writes it as JSON to the
//! working directory, and exits non-zero if the file cannot be written.

mod commands;

use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = commands::parse_args(std::env::args_os());
    commands::init_tracing(&cli);
    commands::run(cli)
}
