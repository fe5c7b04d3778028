mod cli;
mod commands;
mod error;
mod page_range;
mod pdf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ai_daily=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run(args)) => {
            let Some(job) = args.into_break_pdf() else {
                Cli::command()
                    .error(
                        ErrorKind::MissingRequiredArgument,
                        "No operation specified. Use --break-pdf to extract PDF pages",
                    )
                    .exit();
            };
            commands::break_pdf::run(&job.input, &job.output, job.range)?;
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
