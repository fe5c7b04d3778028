use crate::error::{ExtractError, Result};
use lopdf::{Document, ObjectId};
use std::io::{BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

pub struct PdfDocument {
    pub doc: Document,
    pub path: PathBuf,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ExtractError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let doc = Document::load(path).map_err(|err| match err {
            lopdf::Error::IO(source) => ExtractError::Read {
                path: path.to_path_buf(),
                source,
            },
            source => ExtractError::Parse {
                path: path.to_path_buf(),
                source,
            },
        })?;
        debug!(path = %path.display(), pages = doc.get_pages().len(), "loaded PDF");

        Ok(PdfDocument {
            doc,
            path: path.to_path_buf(),
        })
    }

    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Get 1-indexed page object IDs
    pub fn page_ids(&self) -> Vec<(u32, ObjectId)> {
        let mut pages: Vec<_> = self.doc.get_pages().into_iter().collect();
        pages.sort_by_key(|(num, _)| *num);
        pages
    }

    /// Build a new document holding only the pages in `pages` (1-based),
    /// in their original order.
    ///
    /// The source is left untouched: the copy starts as a clone, loses every
    /// page outside the range, and is then pruned of objects that only those
    /// pages referenced.
    pub fn extract_range(&self, pages: RangeInclusive<u32>) -> Result<Document> {
        let total = self.page_count();
        if *pages.start() == 0 || *pages.end() > total {
            return Err(ExtractError::OutOfBounds {
                start: i64::from(*pages.start()),
                end: i64::from(*pages.end()),
                page_count: total,
            });
        }

        let pages_to_delete: Vec<u32> = self
            .page_ids()
            .into_iter()
            .map(|(num, _)| num)
            .filter(|num| !pages.contains(num))
            .collect();

        let mut new_doc = self.doc.clone();
        if !pages_to_delete.is_empty() {
            new_doc.delete_pages(&pages_to_delete);
        }
        let pruned = new_doc.prune_objects();
        debug!(
            deleted = pages_to_delete.len(),
            pruned = pruned.len(),
            "dropped pages outside range"
        );

        Ok(new_doc)
    }

    /// Write `doc` to `path`, replacing whatever is there.
    ///
    /// Bytes go to a temporary file next to `path` first; the destination
    /// only changes once the whole document has been written.
    pub fn save<P: AsRef<Path>>(doc: &mut Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;

        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            doc.save_to(&mut writer).map_err(io_err)?;
            writer.flush().map_err(io_err)?;
        }
        tmp.as_file().sync_all().map_err(io_err)?;

        // NamedTempFile is created 0600; give the result ordinary file permissions.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))
                .map_err(io_err)?;
        }

        tmp.persist(path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}
