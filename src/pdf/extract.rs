use super::PdfDocument;
use crate::error::Result;
use crate::page_range::PageRange;
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{debug, info};

/// What an extraction produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    /// 1-based source pages that were copied.
    pub pages: RangeInclusive<u32>,
    /// Number of pages in the output document.
    pub page_count: usize,
}

/// Copy pages `range.start..=range.end` of `input` into a new PDF at `output`.
///
/// The input must exist and parse before the range is checked; the range is
/// then checked for order and for bounds, in that order. Nothing is written
/// unless every check passes, and `input` is never modified.
pub fn extract_pages<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    range: PageRange,
) -> Result<ExtractSummary> {
    let source = PdfDocument::open(&input)?;
    let pages = range.validate(source.page_count())?;
    let expected = range.len(source.page_count())?;
    debug!(
        path = %source.path.display(),
        total = source.page_count(),
        %range,
        "copying pages"
    );

    let mut new_doc = source.extract_range(pages.clone())?;
    drop(source);

    let page_count = new_doc.get_pages().len();
    debug_assert_eq!(page_count, expected as usize);
    PdfDocument::save(&mut new_doc, &output)?;
    info!(
        output = %output.as_ref().display(),
        pages = page_count,
        "wrote PDF"
    );

    Ok(ExtractSummary { pages, page_count })
}
