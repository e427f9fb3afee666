use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod descriptor;
mod error;
mod generator;
mod header;

use descriptor::GitDescribe;
use error::{Error, Result};

/// Writes a C/C++ header whose `VERSION` constant holds the current
/// `git describe --tags` string
#[derive(Parser, Debug)]
#[command(name = env!("CARGO_BIN_NAME"), author, version = env!("GIT_TAG"), about, long_about = None)]
struct Config {
    /// Destination of the generated header; its directory must already exist
    #[arg(value_name = "OUTPUT_FILE")]
    output: PathBuf,
}

fn init_logging() {
    // Errors go to stderr, the overwrite warning and anything chattier to stdout
    let writer = std::io::stderr
        .with_max_level(tracing::Level::ERROR)
        .or_else(std::io::stdout);

    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// File name the generator is running under, recorded in the header comment.
fn generator_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string())
}

fn real_main() -> Result<()> {
    let config = match Config::try_parse() {
        Ok(config) => config,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(Error::Usage(err)),
    };

    debug!("Configuration: {config:?}");

    let generated =
        generator::generate(&GitDescribe::new(), &generator_name(), &config.output)?;

    info!(
        "Wrote {} with VERSION = {:?}{}",
        generated.path.display(),
        generated.descriptor,
        if generated.overwritten { " (replaced)" } else { "" }
    );
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match real_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                Error::Usage(usage) => {
                    let _ = usage.print();
                }
                _ => error!("{err}"),
            }
            err.exit_code()
        }
    }
}
