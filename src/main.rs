use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::{Error as DialoguerError, Input};
use provis::{AppError, CheckOptions, ExportOptions, ShowFormat, ShowOptions};

#[derive(Parser)]
#[command(name = "provis")]
#[command(version)]
#[command(
    about = "Validate, inspect, and compile workspace provisioning manifests",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a starter workspace.yml manifest
    #[clap(visible_alias = "i")]
    Init {
        /// Project name for the new manifest (prompted when omitted)
        #[arg(short, long)]
        name: Option<String>,
        /// Directory to create the manifest in (defaults to current)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing manifest
        #[arg(short, long)]
        force: bool,
    },
    /// Validate a manifest and report diagnostics
    #[clap(visible_alias = "c")]
    Check {
        /// Manifest file or directory containing workspace.yml
        path: Option<PathBuf>,
        /// Treat warnings as failures (exit code 2)
        #[arg(long)]
        strict: bool,
    },
    /// Summarize a manifest
    #[clap(visible_alias = "s")]
    Show {
        /// Manifest file or directory containing workspace.yml
        path: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },
    /// Generate environment.yml and install.sh from a manifest
    #[clap(visible_alias = "x")]
    Export {
        /// Manifest file or directory containing workspace.yml
        path: Option<PathBuf>,
        /// Directory for generated artifacts (defaults to the manifest directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ShowFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => ShowFormat::Text,
            FormatArg::Json => ShowFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { name, path, force } => run_init(name, path, force),
        Commands::Check { path, strict } => match provis::check(CheckOptions { path, strict }) {
            Ok(outcome) => {
                if outcome.exit_code != 0 {
                    std::process::exit(outcome.exit_code);
                }
                Ok(())
            }
            Err(e) => Err(e),
        },
        Commands::Show { path, format } => {
            provis::show(ShowOptions { path, format: format.into() }).map(|_| ())
        }
        Commands::Export { path, out } => {
            provis::export(ExportOptions { path, out_dir: out }).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_init(name: Option<String>, path: Option<PathBuf>, force: bool) -> Result<(), AppError> {
    let Some(name) = resolve_project_name(name)? else {
        return Ok(());
    };
    provis::init(path.as_deref(), &name, force).map(|_| ())
}

fn resolve_project_name(name: Option<String>) -> Result<Option<String>, AppError> {
    if let Some(name) = name {
        return Ok(Some(name));
    }
    match Input::new().with_prompt("Project name").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read project name: {}", err))),
    }
}
