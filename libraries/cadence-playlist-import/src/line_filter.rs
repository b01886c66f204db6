//! Classification of raw playlist lines

/// Returns the line as a candidate path, or `None` when it should be skipped.
///
/// Blank lines and comments (first non-whitespace character `#`, which also
/// covers `#EXTM3U` / `#EXTINF` directives) are skipped. Candidates are returned
/// untouched, surrounding whitespace included, because resolution is exact.
/// A leading UTF-8 byte order mark is not part of the line.
pub fn candidate_path(line: &str) -> Option<&str> {
    let line = line.strip_prefix('\u{feff}').unwrap_or(line);
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(line)
}
