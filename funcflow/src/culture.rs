//! Locale state carried by execution contexts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale tag, e.g. `en-US` or `fr-FR`.
///
/// A context's culture is never unset: construction takes the ambient
/// process locale and a null assignment substitutes it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culture {
    tag: String,
}

impl Culture {
    /// Creates a culture from a locale tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Reads the ambient process locale.
    ///
    /// Follows the POSIX precedence `LC_ALL`, `LC_MESSAGES`, `LANG`,
    /// stripping any codeset/modifier suffix (`en_US.UTF-8` becomes
    /// `en-US`). Falls back to `en-US` when no variable yields a usable
    /// tag.
    #[must_use]
    pub fn ambient() -> Self {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Some(tag) = std::env::var(var).ok().as_deref().and_then(Self::parse_posix) {
                return Self { tag };
            }
        }
        Self::new("en-US")
    }

    /// Returns the locale tag.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.tag
    }

    fn parse_posix(raw: &str) -> Option<String> {
        let base = raw.split(['.', '@']).next().unwrap_or("");
        if base.is_empty() || base == "C" || base == "POSIX" {
            return None;
        }
        Some(base.replace('_', "-"))
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::ambient()
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}
