//! Light/dark theme preference.
//!
//! The preference is persisted in localStorage under a fixed key and applied
//! as a `data-theme` attribute on the document root, which the base
//! stylesheet keys its variables off. Storage failures are swallowed: the
//! visual toggle still happens, the preference just does not survive the
//! session.

use crate::config::THEME_STORAGE_KEY;
use crate::utils::dom;

/// The visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The literal stored in localStorage and set on `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored literal. Anything unrecognized is `None`.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Read the persisted preference. Absent, unreadable, or unrecognized
    /// values all mean light.
    pub fn load() -> Self {
        dom::local_storage()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
            .and_then(|value| Self::from_stored(&value))
            .unwrap_or_default()
    }

    /// Persist the preference. Best-effort: write failures are ignored.
    pub fn store(self) {
        if let Some(storage) = dom::local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, self.as_str());
        }
    }

    /// Apply as the `data-theme` attribute on the document root.
    pub fn apply(self) {
        if let Some(root) = dom::document_root() {
            let _ = root.set_attribute("data-theme", self.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_literal_round_trips() {
        assert_eq!(Theme::from_stored(Theme::Light.as_str()), Some(Theme::Light));
        assert_eq!(Theme::from_stored(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::from_stored("blue"), None);
        assert_eq!(Theme::from_stored(""), None);
    }

    #[test]
    fn toggled_flips_between_the_two_modes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }
}
