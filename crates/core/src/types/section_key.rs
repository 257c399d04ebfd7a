//! The fixed four-section vocabulary.

use serde::{Deserialize, Serialize};

/// One of the four top-level storefront areas.
///
/// The set is fixed for the lifetime of the process; sections are never
/// created or removed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Main,
    Women,
    Men,
    Kids,
}

impl SectionKey {
    /// All four keys, in persisted-document order.
    pub const ALL: [Self; 4] = [Self::Main, Self::Women, Self::Men, Self::Kids];

    /// The key as it appears in URLs, form fields, and upload filenames.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Women => "women",
            Self::Men => "men",
            Self::Kids => "kids",
        }
    }

    /// Resolve a client-supplied section name.
    ///
    /// Absent or unrecognized names fall back to `Women`, preserving the
    /// lenient behavior the frontend relies on.
    #[must_use]
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("main") => Self::Main,
            Some("men") => Self::Men,
            Some("kids") => Self::Kids,
            _ => Self::Women,
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param_known_sections() {
        assert_eq!(SectionKey::from_param(Some("main")), SectionKey::Main);
        assert_eq!(SectionKey::from_param(Some("women")), SectionKey::Women);
        assert_eq!(SectionKey::from_param(Some("men")), SectionKey::Men);
        assert_eq!(SectionKey::from_param(Some("kids")), SectionKey::Kids);
    }

    #[test]
    fn test_from_param_defaults_to_women() {
        assert_eq!(SectionKey::from_param(None), SectionKey::Women);
        assert_eq!(SectionKey::from_param(Some("juniors")), SectionKey::Women);
        assert_eq!(SectionKey::from_param(Some("")), SectionKey::Women);
    }
}
