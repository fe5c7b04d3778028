use crate::page_range::PageRange;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ai-daily")]
#[command(about = "AI Daily CLI Tool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run AI Daily operations
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Extract pages from PDF
    #[arg(
        long,
        requires = "input",
        requires = "output",
        requires = "start_page",
        requires = "end_page"
    )]
    pub break_pdf: bool,

    /// Input PDF file path
    #[arg(long = "in", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output PDF file path
    #[arg(long = "out", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Start page number (1-based)
    #[arg(long = "sp", value_name = "PAGE", allow_negative_numbers = true)]
    pub start_page: Option<i64>,

    /// End page number (1-based, inclusive)
    #[arg(long = "ep", value_name = "PAGE", allow_negative_numbers = true)]
    pub end_page: Option<i64>,
}

/// A fully specified `--break-pdf` request.
pub struct BreakPdf {
    pub input: PathBuf,
    pub output: PathBuf,
    pub range: PageRange,
}

impl RunArgs {
    /// The requested page extraction, if `--break-pdf` was given.
    ///
    /// clap already enforces that the other four flags accompany
    /// `--break-pdf`, so this only returns `None` when it is absent.
    pub fn into_break_pdf(self) -> Option<BreakPdf> {
        if !self.break_pdf {
            return None;
        }
        Some(BreakPdf {
            input: self.input?,
            output: self.output?,
            range: PageRange::new(self.start_page?, self.end_page?),
        })
    }
}
