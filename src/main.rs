use anyhow::Result;
use clap::Parser;
use tracing::debug;

use marksplice::cli::commands::{apply, locate, replace, scan};
use marksplice::cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Commands::Locate {
            file,
            markers,
            show,
            json,
        } => {
            locate::execute(file, markers.to_options(), show, json).await?;
        }
        Commands::Replace {
            file,
            markers,
            with,
            dry_run,
            backup,
        } => {
            replace::execute(file, markers.to_options(), with, dry_run, backup).await?;
        }
        Commands::Apply {
            plan,
            dry_run,
            backup,
        } => {
            let summary = apply::execute(plan, dry_run, backup).await?;
            debug!("{:?}", summary);
        }
        Commands::Scan {
            paths,
            markers,
            exclude,
            include,
            max_size_mb,
        } => {
            scan::execute(paths, markers.to_options(), exclude, include, max_size_mb).await?;
        }
    }

    Ok(())
}
