use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use weather_report_core::{
    Agent, Config, DataLoaderAgent, DateAgent, Reporter, analyze, render, render_json,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather-report",
    version,
    about = "Weather report for the most recent row of a historical dataset",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Without a subcommand, `weather-report` behaves like `weather-report report`.
    #[command(flatten)]
    pub report: ReportArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the report for the most recent observation.
    Report(ReportArgs),

    /// Store the default dataset path.
    Configure {
        /// Dataset path; asked interactively when omitted.
        #[arg(long, conflicts_with = "clear")]
        dataset: Option<PathBuf>,

        /// Forget the stored dataset path.
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// CSV dataset; defaults to the configured path, then `weatherHistory.csv`.
    pub dataset: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only log warnings and errors.
    #[arg(long, short)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    pub fn quiet(&self) -> bool {
        match &self.command {
            Some(Command::Report(args)) => args.quiet,
            Some(Command::Configure { .. }) => false,
            None => self.report.quiet,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Report(args)) => report(args),
            Some(Command::Configure { dataset, clear }) => configure(dataset, clear),
            None => report(self.report),
        }
    }
}

fn report(args: ReportArgs) -> anyhow::Result<()> {
    let dataset = dataset_path(args.dataset, Config::load)?;
    let reporter = Reporter::new(&dataset);

    DateAgent.execute(&Local::now(), &reporter);

    let observations = DataLoaderAgent.execute(&dataset, &reporter)?;
    let latest = DataLoaderAgent.latest(&observations, &reporter);
    let classified = analyze(latest, &reporter);

    match args.format {
        OutputFormat::Text => {
            if let Some(obs) = latest {
                println!(
                    "Analyzing weather data from: {}\n",
                    obs.timestamp.format("%Y-%m-%d %H:%M:%S")
                );
            }
            print!("{}", render(classified.as_ref()));
        }
        OutputFormat::Json => {
            let json =
                render_json(classified.as_ref()).context("Failed to serialize report to JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// An explicit dataset is used as-is; the config is only read when the
/// dataset has to come from it.
fn dataset_path(
    explicit: Option<PathBuf>,
    load_config: impl FnOnce() -> anyhow::Result<Config>,
) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(load_config()?.resolve_dataset(None)),
    }
}

fn configure(dataset: Option<PathBuf>, clear: bool) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    if clear {
        config.clear_dataset();
    } else {
        let dataset = match dataset {
            Some(path) => path,
            None => prompt_dataset(&config)?,
        };
        if !dataset.exists() {
            tracing::warn!(dataset = %dataset.display(), "dataset does not exist yet");
        }
        config.set_dataset(dataset);
    }

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

fn prompt_dataset(config: &Config) -> anyhow::Result<PathBuf> {
    let current = config.resolve_dataset(None).display().to_string();

    let answer = inquire::Text::new("Path to the weather dataset:")
        .with_default(&current)
        .prompt()
        .context("Failed to read dataset path")?;

    Ok(PathBuf::from(answer.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_report() {
        let cli = Cli::try_parse_from(["weather-report", "data.csv", "--format", "json"])
            .expect("valid args");

        assert!(cli.command.is_none());
        assert_eq!(cli.report.dataset, Some(PathBuf::from("data.csv")));
        assert_eq!(cli.report.format, OutputFormat::Json);
        assert!(!cli.quiet());
    }

    #[test]
    fn report_subcommand_defaults_to_text() {
        let cli = Cli::try_parse_from(["weather-report", "report", "-q"]).expect("valid args");

        match &cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.dataset, None);
                assert_eq!(args.format, OutputFormat::Text);
            }
            other => panic!("expected report subcommand, got {other:?}"),
        }
        assert!(cli.quiet());
    }

    #[test]
    fn configure_rejects_dataset_with_clear() {
        let err = Cli::try_parse_from([
            "weather-report",
            "configure",
            "--dataset",
            "x.csv",
            "--clear",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn explicit_dataset_skips_broken_config() {
        let path = dataset_path(Some(PathBuf::from("data.csv")), || {
            Err(anyhow::anyhow!("Failed to parse config file: config.toml"))
        })
        .expect("config is not needed");

        assert_eq!(path, PathBuf::from("data.csv"));
    }

    #[test]
    fn implicit_dataset_comes_from_config() {
        let path = dataset_path(None, || {
            let mut cfg = Config::default();
            cfg.set_dataset(PathBuf::from("/data/history.csv"));
            Ok(cfg)
        })
        .expect("config loads");
        assert_eq!(path, PathBuf::from("/data/history.csv"));

        let err = dataset_path(None, || Err(anyhow::anyhow!("Failed to parse config file")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
