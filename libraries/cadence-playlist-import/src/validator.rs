//! Upload validation, run before any line is read

use crate::{error::ImportError, ImportOptions, Result};

/// Validate an upload's declared filename and content-type.
///
/// Returns the playlist name: the filename with the playlist extension removed.
pub fn validate_upload(filename: &str, content_type: &str, options: &ImportOptions) -> Result<String> {
    let name = playlist_name(filename, &options.extension)?;

    if !is_allowed_content_type(content_type, &options.content_types) {
        return Err(ImportError::InvalidContentType(content_type.to_string()));
    }

    Ok(name.to_string())
}

/// Derive the playlist name from a filename
pub fn playlist_name<'a>(filename: &'a str, extension: &str) -> Result<&'a str> {
    match filename.strip_suffix(extension) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ImportError::InvalidFilename(filename.to_string())),
    }
}

/// Case-insensitive allow-list check. MIME parameters (`; charset=utf-8`) are ignored.
pub fn is_allowed_content_type(content_type: &str, allowed: &[String]) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();

    allowed
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(essence))
}
