//! Tangle CLI - extract and concatenate code from Markdown code blocks

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tangle::commands;
use tangle::config::{read_config_file, Config, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "tangle")]
#[command(author, version, about = "Extracts and concatenates code from code blocks in Markdown files", long_about = None)]
struct Cli {
    /// Markdown file to tangle; without it, targets are read from the config file
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Name of a file to write the output to. Writes to stdout if none provided
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Path to a config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Working directory
    #[arg(short = 'C', long)]
    directory: Option<PathBuf>,

    /// Watch the input files, and recompile when they change
    #[arg(short, long)]
    watch: bool,

    /// Debounce delay in milliseconds
    #[arg(short, long, default_value = "100")]
    debounce: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for tangled output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> tangle::Result<()> {
    let config = match cli.file {
        Some(file) => Config::single_source(file, cli.outfile),
        None => {
            if cli.outfile.is_some() {
                tracing::warn!("--outfile is ignored when targets come from a config file");
            }
            read_config_file(&resolve(cli.directory.as_deref(), &cli.config))?
        }
    };

    if cli.watch {
        let options = commands::WatchOptions {
            base_dir: cli.directory,
            debounce_ms: cli.debounce,
        };
        commands::watch(&config, options).await
    } else {
        let options = commands::TangleOptions {
            base_dir: cli.directory,
        };
        commands::tangle(&config, options).await
    }
}

fn resolve(base_dir: Option<&Path>, path: &Path) -> PathBuf {
    match base_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
