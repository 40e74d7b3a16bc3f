//! Flat-file JSON persistence for the content document and the links list.
//!
//! Reads never fail: a missing or unparseable file yields the empty shape for
//! that document. Writes go through a temp file in the target directory and
//! are renamed into place.

use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use saspo_common::{CmsError, LinkEntry};

/// Serialize with four-space indentation, leaving non-ASCII text unescaped.
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> Result<String, CmsError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| CmsError::Anyhow(e.into()))
}

fn read_json(path: &Path) -> Option<Value> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "JSON file missing, using empty default");
            return None;
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read JSON file");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Corrupt JSON file, using empty default");
            None
        }
    }
}

/// Load the content document. Missing or corrupt files yield `{}`.
pub fn load_content(path: &Path) -> Value {
    read_json(path).unwrap_or_else(|| Value::Object(Default::default()))
}

/// Load the links list. Missing, corrupt or non-list files yield `[]`;
/// entries that aren't `{title, url}` objects are skipped.
pub fn load_links(path: &Path) -> Vec<LinkEntry> {
    let Some(value) = read_json(path) else {
        return Vec::new();
    };

    let Value::Array(items) = value else {
        warn!(path = %path.display(), "Links file is not a list, ignoring it");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<LinkEntry>(item) {
            Ok(link) => Some(link),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping malformed link entry");
                None
            }
        })
        .collect()
}

/// Overwrite `path` with the pretty-printed `value`.
pub fn save<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), CmsError> {
    let text = to_pretty_string(value)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| CmsError::Io(e.error))?;

    debug!(path = %path.display(), bytes = text.len(), "Saved JSON file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_string_uses_four_spaces_and_keeps_unicode() {
        let text = to_pretty_string(&json!({"name": "Kochi ✓", "tags": ["a"]})).unwrap();
        assert_eq!(
            text,
            "{\n    \"name\": \"Kochi ✓\",\n    \"tags\": [\n        \"a\"\n    ]\n}"
        );
    }

    #[test]
    fn pretty_string_preserves_key_order() {
        let value: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
        let text = to_pretty_string(&value).unwrap();
        assert!(text.find("zeta").unwrap() < text.find("alpha").unwrap());
    }

    #[test]
    fn empty_containers_stay_compact() {
        assert_eq!(to_pretty_string(&json!({})).unwrap(), "{}");
        assert_eq!(to_pretty_string(&json!([])).unwrap(), "[]");
    }
}
