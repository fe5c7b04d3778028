use crate::page_range::PageRange;
use crate::pdf::extract_pages;
use anyhow::Result;
use std::path::Path;

pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q, range: PageRange) -> Result<()> {
    let summary = extract_pages(&input, &output, range)?;

    println!(
        "Successfully extracted pages {}-{} from {} to {} ({} page(s))",
        summary.pages.start(),
        summary.pages.end(),
        input.as_ref().display(),
        output.as_ref().display(),
        summary.page_count
    );

    Ok(())
}
