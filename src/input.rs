//! Loading documents from disk.
//!
//! The file extension decides which [`Format`] parses a file. Extensions must both be
//! accepted by the configuration and claimed by one of the built-in formats.

use crate::dom::Document;
use crate::formats::{self, Format};
use std::path::Path;
use std::{fs, io};

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// The built-in format claiming `path`'s extension.
#[must_use]
pub fn format_for(path: &Path) -> Option<Box<dyn Format>> {
    let ext = extension(path)?;
    formats::all()
        .into_iter()
        .find(|format| format.file_extensions().contains(&ext.as_str()))
}

/// Read and parse the document at `path`.
///
/// # Errors
///
/// Returns `InvalidInput` if the extension is not in `extensions` or no format handles it,
/// and propagates read and parse failures.
pub fn load_document(path: &Path, extensions: &[String]) -> io::Result<Document> {
    let ext = extension(path).unwrap_or_default();
    if !extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext)) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: extension not enabled", path.display()),
        ));
    }
    let format = format_for(path).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: no format handles .{ext}", path.display()),
        )
    })?;

    let source = fs::read_to_string(path)?;
    log::debug!(
        "Parsing {} as {}",
        path.display(),
        format.file_extensions()[0]
    );
    format.parse_document(&source)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
