//! Filename rules for the asset folder: upload allow-list, sanitization and
//! the set of files the dashboard may never delete.

use unicode_normalization::UnicodeNormalization;

/// Extensions accepted by the upload handler (images and short video clips).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "mp4", "webm"];

/// Extension used by the fixed UI chrome (animated site graphics).
pub const PROTECTED_EXTENSION: &str = ".gif";

/// Site logo; referenced by the templates rather than the content document.
pub const PROTECTED_FILENAME: &str = "logo.png";

/// Lower-cased text after the last `.`, if there is one.
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// True if the upload's extension is on the allow-list.
pub fn allowed_file(filename: &str) -> bool {
    file_extension(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Files that can't be deleted through the dashboard regardless of usage.
pub fn is_protected_asset(filename: &str) -> bool {
    filename.to_ascii_lowercase().ends_with(PROTECTED_EXTENSION) || filename == PROTECTED_FILENAME
}

/// Reduce a client-supplied name to a flat, ASCII-only filename.
///
/// Accented letters fold to their base letter (NFKD, combining marks and
/// other non-ASCII dropped). Path separators become spaces, whitespace runs
/// collapse to `_`, anything outside `[A-Za-z0-9_.-]` is dropped, and
/// leading/trailing `.`/`_` are stripped. The result may be empty.
pub fn secure_filename(filename: &str) -> String {
    let folded: String = filename.nfkd().filter(char::is_ascii).collect();
    let flattened = folded.replace(['/', '\\'], " ");
    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// A bare filename with no directory component and no traversal.
pub fn is_plain_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains('/')
        && !filename.contains('\\')
        && filename != "."
        && filename != ".."
}
