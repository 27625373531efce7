//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "World Atlas";

// =============================================================================
// Network Configuration
// =============================================================================

/// Country dataset endpoint.
pub const COUNTRIES_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

/// Fields requested from the dataset. Requesting a fixed set keeps the
/// response payload bounded and the deserialization contract stable.
pub const COUNTRIES_FIELDS: &str =
    "name,population,region,capital,flags,subregion,languages,tld,currencies,borders";

/// Full URL for the one startup fetch.
pub fn countries_url() -> String {
    format!("{}?fields={}", COUNTRIES_ENDPOINT, COUNTRIES_FIELDS)
}

// =============================================================================
// Storage Configuration
// =============================================================================

/// localStorage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// Display Configuration
// =============================================================================

/// Fallback text for any country field the dataset leaves empty.
pub const PLACEHOLDER: &str = "N/A";

/// Message shown in place of the list when the startup fetch fails.
pub const FETCH_ERROR_TEXT: &str = "Unable to load country data.";

/// Regions offered by the filter dropdown.
pub const REGION_OPTIONS: &[&str] =
    &["Africa", "Americas", "Asia", "Europe", "Oceania", "Antarctic"];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countries_url_carries_the_field_list() {
        let url = countries_url();
        assert!(url.starts_with("https://restcountries.com/v3.1/all?fields="));
        assert!(url.contains("borders"));
    }
}
