use serde::{Deserialize, Serialize};

// --- Links ---

/// An external link kept alongside the content document (usually a YouTube video).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub title: String,
    pub url: String,
}

impl LinkEntry {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

// --- Flash messages ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Error,
}

impl std::fmt::Display for FlashLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlashLevel::Success => write!(f, "success"),
            FlashLevel::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for FlashLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(FlashLevel::Success),
            "error" => Ok(FlashLevel::Error),
            other => Err(format!("unknown flash level: {other}")),
        }
    }
}

/// One-shot status message shown on the next page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

// --- Reference scanning ---

/// How the dashboard decides whether an asset or link is referenced by the content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceMode {
    /// Raw substring search over the serialized document.
    #[default]
    Substring,
    /// Compare against the string values of the parsed document.
    Structural,
}

impl std::fmt::Display for ReferenceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceMode::Substring => write!(f, "substring"),
            ReferenceMode::Structural => write!(f, "structural"),
        }
    }
}

impl std::str::FromStr for ReferenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(ReferenceMode::Substring),
            "structural" => Ok(ReferenceMode::Structural),
            other => Err(format!("unknown reference mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_mode_parses_case_insensitively() {
        assert_eq!("Structural".parse::<ReferenceMode>(), Ok(ReferenceMode::Structural));
        assert_eq!(" substring ".parse::<ReferenceMode>(), Ok(ReferenceMode::Substring));
        assert!("exact".parse::<ReferenceMode>().is_err());
    }

    #[test]
    fn flash_level_display_roundtrips() {
        for level in [FlashLevel::Success, FlashLevel::Error] {
            assert_eq!(level.to_string().parse::<FlashLevel>(), Ok(level));
        }
    }

    #[test]
    fn link_entry_serializes_as_title_url_object() {
        let link = LinkEntry::new("Showreel", "https://youtu.be/abc");
        let value = serde_json::to_value(&link).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "Showreel", "url": "https://youtu.be/abc"})
        );
    }
}
