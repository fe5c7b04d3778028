mod document;
mod extract;

#[cfg(test)]
pub(crate) mod testing;

pub use document::PdfDocument;
pub use extract::extract_pages;
