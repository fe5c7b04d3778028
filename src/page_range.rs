use crate::error::{ExtractError, Result};
use std::fmt;
use std::ops::RangeInclusive;

/// A 1-based inclusive page range as given on the command line.
///
/// The endpoints are signed so that zero and negative input reaches
/// [`PageRange::validate`] and is reported as out of bounds rather than
/// being rejected by the argument parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: i64,
    pub end: i64,
}

impl PageRange {
    pub fn new(start: i64, end: i64) -> Self {
        PageRange { start, end }
    }

    /// Check this range against a document with `page_count` pages and
    /// return the 1-based page numbers it covers.
    ///
    /// Ordering is checked before bounds, so `5-3` is always
    /// [`ExtractError::InvalidRange`] no matter how long the document is.
    pub fn validate(&self, page_count: u32) -> Result<RangeInclusive<u32>> {
        if self.start > self.end {
            return Err(ExtractError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }

        if self.start < 1 || self.end > i64::from(page_count) {
            return Err(ExtractError::OutOfBounds {
                start: self.start,
                end: self.end,
                page_count,
            });
        }

        // Both endpoints now lie in 1..=page_count, which fits in u32.
        Ok(self.start as u32..=self.end as u32)
    }

    /// Number of pages this range covers in a document of `page_count`
    /// pages, after the same checks as [`PageRange::validate`].
    pub fn len(&self, page_count: u32) -> Result<u32> {
        let pages = self.validate(page_count)?;
        Ok(pages.end() - pages.start() + 1)
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
