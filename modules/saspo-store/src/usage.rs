//! Cross-reference between the content document and the things it points at
//! (asset filenames and link urls).
//!
//! An identifier is "in use" when the content document references it. In
//! [`ReferenceMode::Substring`] that means a raw substring match against the
//! pretty-printed document; [`ReferenceMode::Structural`] only counts string
//! values that are the identifier itself (or, for assets, a path ending in it).

use serde_json::Value;

use saspo_common::{CmsError, LinkEntry, ReferenceMode};

use crate::json_store::to_pretty_string;

/// 1-based line of the first occurrence of `needle` in `haystack`.
pub fn line_of_first_occurrence(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    let idx = haystack.find(needle)?;
    Some(haystack[..idx].matches('\n').count() + 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageKind {
    Asset,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageEntry {
    pub target: String,
    pub kind: UsageKind,
    /// Line in the pretty-printed document, `None` when unused.
    pub line: Option<usize>,
}

/// Snapshot of the content document used to answer "is this referenced?".
pub struct ReferenceIndex {
    text: String,
    strings: Vec<String>,
    mode: ReferenceMode,
}

impl ReferenceIndex {
    pub fn new(content: &Value, mode: ReferenceMode) -> Result<Self, CmsError> {
        let text = to_pretty_string(content)?;
        let mut strings = Vec::new();
        if mode == ReferenceMode::Structural {
            collect_strings(content, &mut strings);
        }
        Ok(Self {
            text,
            strings,
            mode,
        })
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn is_referenced(&self, needle: &str, kind: UsageKind) -> bool {
        if needle.is_empty() {
            return false;
        }
        match self.mode {
            ReferenceMode::Substring => self.text.contains(needle),
            ReferenceMode::Structural => self.strings.iter().any(|s| match kind {
                UsageKind::Asset => references_asset(s, needle),
                UsageKind::Link => references_url(s, needle),
            }),
        }
    }

    /// Line of the first reference, or `None` if the identifier is unused.
    pub fn line_of(&self, needle: &str, kind: UsageKind) -> Option<usize> {
        if !self.is_referenced(needle, kind) {
            return None;
        }
        if self.mode == ReferenceMode::Structural {
            return self.structural_line_of(needle, kind);
        }
        line_of_first_occurrence(&self.text, needle).or_else(|| {
            // The serialized form escapes some characters; look for that spelling too.
            let encoded = serde_json::to_string(needle).ok()?;
            line_of_first_occurrence(&self.text, encoded.trim_matches('"'))
        })
    }

    /// Line of the first string value that matches. Strings are collected in
    /// serialization order, so the first match is also the first in the text.
    fn structural_line_of(&self, needle: &str, kind: UsageKind) -> Option<usize> {
        let value = self.strings.iter().find(|s| match kind {
            UsageKind::Asset => references_asset(s, needle),
            UsageKind::Link => references_url(s, needle),
        })?;
        let quoted = serde_json::to_string(value).ok()?;
        // An identical object key is followed by `:`; skip it.
        let idx = self
            .text
            .match_indices(quoted.as_str())
            .map(|(i, _)| i)
            .find(|&i| !self.text[i + quoted.len()..].starts_with(':'))?;
        Some(self.text[..idx].matches('\n').count() + 1)
    }

    /// Usage for every asset, then every link url, in the order given.
    pub fn usage_map(&self, assets: &[String], links: &[LinkEntry]) -> Vec<UsageEntry> {
        let assets = assets.iter().map(|name| UsageEntry {
            target: name.clone(),
            kind: UsageKind::Asset,
            line: self.line_of(name, UsageKind::Asset),
        });
        let links = links.iter().map(|link| UsageEntry {
            target: link.url.clone(),
            kind: UsageKind::Link,
            line: self.line_of(&link.url, UsageKind::Link),
        });
        assets.chain(links).collect()
    }
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|v| collect_strings(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_strings(v, out)),
        _ => {}
    }
}

fn references_asset(value: &str, filename: &str) -> bool {
    let path = value.split(['?', '#']).next().unwrap_or(value);
    path == filename || path.rsplit('/').next() == Some(filename)
}

fn references_url(value: &str, url: &str) -> bool {
    value == url || value.trim_end_matches('/') == url.trim_end_matches('/')
}
