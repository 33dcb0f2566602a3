mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{bmi, completions, patients, tui, Context};
use crate::error::{exit_code_for, report_error};
use carelog_config as config;
use carelog_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "carelog", version, about = "carelog CLI")]
struct Cli {
    #[arg(long, global = true)]
    records_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a patient record
    Add(patients::AddPatientArgs),
    /// Edit an existing patient record
    Edit(patients::EditPatientArgs),
    Show(patients::ShowArgs),
    List(patients::ListArgs),
    Search(patients::SearchArgs),
    Delete(patients::DeleteArgs),
    /// Calculate BMI without storing a record
    Bmi(bmi::BmiArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    Tui,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        records_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    match command {
        Command::Tui => tui::launch(records_path, config_path, verbose),
        Command::Completions(args) => completions::emit(args),
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            if verbose {
                match config::resolve_config_path(config_path.clone()) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let records_path = match records_path.or_else(|| app_config.records_path.clone()) {
                Some(path) => path,
                None => paths::records_path().with_context(|| "resolve records path")?,
            };

            if verbose {
                debug!(path = %records_path.display(), "records path resolved");
            }

            let store = Store::open(&records_path)
                .with_context(|| format!("open records file {}", records_path.display()))?;

            let ctx = Context {
                store: &store,
                json,
                config: &app_config,
            };

            match command {
                Command::Add(args) => patients::add_patient(&ctx, args),
                Command::Edit(args) => patients::edit_patient(&ctx, args),
                Command::Show(args) => patients::show_patient(&ctx, args),
                Command::List(args) => patients::list_patients(&ctx, args),
                Command::Search(args) => patients::search_patients(&ctx, args),
                Command::Delete(args) => patients::delete_patient(&ctx, args),
                Command::Bmi(args) => bmi::calculate(&ctx, args),
                Command::Tui => unreachable!("tui command handled before store initialization"),
                Command::Completions(_) => {
                    unreachable!("completions command handled before store initialization")
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
