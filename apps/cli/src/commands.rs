//! CLI definition, tracing setup, and the single run.

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;
use color_eyre::eyre::{Result, WrapErr};
use tracing::debug;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Write the agent's introduction to `my-introduction.json`.
#[derive(Parser, Debug)]
#[command(
    name = "introduce-agent",
    version,
    about = "Write the agent's introduction to my-introduction.json in the current directory.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Anything else on the command line; accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Text,
            verbose: 0,
            rest: Vec::new(),
        }
    }
}

/// Parse the command line, never refusing to run over it.
///
/// `--help` and `--version` print and exit as usual. Any other parse error
/// falls back to default logging so the introduction is still written.
pub(crate) fn parse_args<I, T>(args: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => Cli::default(),
    }
}

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Default `EnvFilter` directives for a verbosity level.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "introduce_agent=info,introduction_core=info",
        1 => "introduce_agent=debug,introduction_core=debug",
        _ => "introduce_agent=trace,introduction_core=trace",
    }
}

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Build and write the introduction once.
pub(crate) fn run(cli: Cli) -> Result<()> {
    debug!(?cli, "starting");
    if !cli.rest.is_empty() {
        debug!(ignored = ?cli.rest, "ignoring extra arguments");
    }

    let result = introduction_core::run()
        .wrap_err("failed to write the agent introduction")?;

    debug!(
        path = %result.path.display(),
        elapsed_ms = result.elapsed.as_secs_f64() * 1000.0,
        "done"
    );
    Ok(())
}
