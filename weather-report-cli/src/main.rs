//! Binary crate for the `weather-report` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Interactive configuration
//! - Mapping failures to exit codes

use std::{
    io::IsTerminal,
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt::MakeWriter, util::SubscriberInitExt};
use weather_report_core::DatasetError;

mod cli;

fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    log_subscriber(cmd.quiet(), std::io::stdout().is_terminal(), std::io::stdout).init();

    match cmd.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// The one line printed before exiting with a failure status.
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<DatasetError>() {
        Some(DatasetError::DatasetNotFound { path }) => {
            format!("Error: {} not found. Please make sure the file exists.", path.display())
        }
        _ => format!("An error occurred: {err:#}"),
    }
}

/// Log lines share stdout with the report, so colours are only used on a
/// terminal. `RUST_LOG` overrides the default `info` level unless `--quiet`
/// is given.
fn log_subscriber<W>(quiet: bool, ansi: bool, writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = if quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io,
        path::PathBuf,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().expect("buffer lock").clone()).expect("utf-8 log")
        }
    }

    #[test]
    fn missing_dataset_message() {
        let err = anyhow::Error::from(DatasetError::DatasetNotFound {
            path: PathBuf::from("nope.csv"),
        });

        assert_eq!(
            failure_message(&err),
            "Error: nope.csv not found. Please make sure the file exists."
        );
    }

    #[test]
    fn missing_dataset_message_survives_context() {
        let err = anyhow::Error::from(DatasetError::DatasetNotFound {
            path: PathBuf::from("weatherHistory.csv"),
        })
        .context("while building the report");

        assert!(failure_message(&err).starts_with("Error: weatherHistory.csv not found."));
    }

    #[test]
    fn malformed_dataset_is_a_generic_failure() {
        let err = anyhow::Error::from(DatasetError::DatasetMalformed {
            reason: "missing required column(s): Humidity".to_string(),
        });

        assert_eq!(
            failure_message(&err),
            "An error occurred: malformed dataset: missing required column(s): Humidity"
        );
    }

    #[test]
    fn other_errors_are_generic_failures() {
        let err = anyhow::anyhow!("Failed to parse config file: config.toml");

        assert_eq!(
            failure_message(&err),
            "An error occurred: Failed to parse config file: config.toml"
        );
    }

    #[test]
    fn logs_without_terminal_are_plain_text() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = log_subscriber(false, false, move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(agent = "DateAgent", "[DateAgent] Today's date is: 2026-10-17");
        });

        let text = captured.text();
        assert!(text.contains("[DateAgent] Today's date is: 2026-10-17"), "{text}");
        assert!(!text.contains('\u{1b}'), "{text:?}");
    }

    #[test]
    fn quiet_logging_drops_info() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = log_subscriber(true, false, move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("[DataLoaderAgent] Loading data from weatherHistory.csv");
        });

        assert!(captured.text().is_empty());
    }
}
