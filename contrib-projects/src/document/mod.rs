//! Marked-region document updates.
//!
//! The README holds two sentinel markers; everything between them is owned by
//! this tool and replaced on every run. Content outside the markers is never
//! touched.

mod error;
mod markers;

pub use error::DocumentError;
pub use markers::{Markers, DEFAULT_END_MARKER, DEFAULT_START_MARKER};

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Outcome of a document update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentStatus {
    /// The document was rewritten.
    Updated,

    /// The marked region already held the fragment; nothing was written.
    Unchanged,

    /// The document would change but was left alone (dry run).
    Pending,
}

impl DocumentStatus {
    /// Returns the status as a short label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
            Self::Pending => "pending",
        }
    }
}

/// Replaces the marked region of a document with `fragment`.
///
/// The document is written through a temporary file in the same directory and
/// then renamed over the original, so it is either fully updated or left as
/// it was.
///
/// # Errors
///
/// * [`DocumentError::Missing`] / [`DocumentError::Read`] if the document
///   cannot be loaded.
/// * [`DocumentError::MissingMarker`] / [`DocumentError::MarkersOutOfOrder`]
///   if the markers cannot be located; the file is not modified.
/// * [`DocumentError::Write`] if the new content cannot be stored.
pub fn update_document(
    path: &Path,
    fragment: &str,
    markers: &Markers,
) -> Result<DocumentStatus, DocumentError> {
    let content = read_document(path)?;
    let updated = replace_marked_region(path, &content, fragment, markers)?;

    if updated == content {
        info!(path = %path.display(), "No changes needed");
        return Ok(DocumentStatus::Unchanged);
    }

    write_atomically(path, &updated).map_err(|source| DocumentError::Write {
        path: path.display().to_string(),
        source,
    })?;

    info!(path = %path.display(), bytes = updated.len(), "Document updated");
    Ok(DocumentStatus::Updated)
}

/// Reports what [`update_document`] would do without writing anything.
///
/// # Errors
///
/// Same as [`update_document`], minus write failures.
pub fn preview_document(
    path: &Path,
    fragment: &str,
    markers: &Markers,
) -> Result<DocumentStatus, DocumentError> {
    let content = read_document(path)?;
    let updated = replace_marked_region(path, &content, fragment, markers)?;

    Ok(if updated == content {
        DocumentStatus::Unchanged
    } else {
        DocumentStatus::Pending
    })
}

/// Returns `content` with the first marked region replaced.
///
/// The region runs from the first start marker to the first end marker after
/// it and may span lines. Both markers are kept; the fragment sits on its own
/// lines between them. `path` only labels errors.
///
/// # Errors
///
/// Returns [`DocumentError::MissingMarker`] if either marker is absent and
/// [`DocumentError::MarkersOutOfOrder`] if no end marker follows the start.
pub fn replace_marked_region(
    path: &Path,
    content: &str,
    fragment: &str,
    markers: &Markers,
) -> Result<String, DocumentError> {
    let missing = |marker: &str| DocumentError::MissingMarker {
        path: path.display().to_string(),
        marker: marker.to_string(),
    };

    let start = content
        .find(markers.start())
        .ok_or_else(|| missing(markers.start()))?;
    if !content.contains(markers.end()) {
        return Err(missing(markers.end()));
    }

    let after_start = start + markers.start().len();
    let end = content[after_start..]
        .find(markers.end())
        .map(|offset| after_start + offset)
        .ok_or_else(|| DocumentError::MarkersOutOfOrder {
            path: path.display().to_string(),
            start: markers.start().to_string(),
            end: markers.end().to_string(),
        })?;
    let region_end = end + markers.end().len();

    debug!(start, end = region_end, "Located marked region");

    let mut updated = String::with_capacity(content.len() + fragment.len());
    updated.push_str(&content[..start]);
    updated.push_str(markers.start());
    updated.push('\n');
    updated.push_str(fragment);
    updated.push('\n');
    updated.push_str(markers.end());
    updated.push_str(&content[region_end..]);
    Ok(updated)
}

fn read_document(path: &Path) -> Result<String, DocumentError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DocumentError::Missing {
                path: path.display().to_string(),
            }
        } else {
            DocumentError::Read {
                path: path.display().to_string(),
                source,
            }
        }
    })
}

/// Writes `content` to a temporary file next to the resolved target and renames
/// it over the target, keeping the original permissions.
///
/// Symlinks are followed so the link itself survives the rename.
fn write_atomically(path: &Path, content: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;

    let permissions = fs::metadata(&target)?.permissions();
    temp.as_file().set_permissions(permissions)?;

    temp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}
