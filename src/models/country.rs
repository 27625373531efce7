//! Country dataset types.
//!
//! Mirrors the record shape the REST Countries endpoint returns for the
//! field set we request. Everything except the common name is optional in
//! practice, so each field defaults independently and the display accessors
//! below decide the fallback.

use std::collections::BTreeMap;

use serde::Deserialize;

// =============================================================================
// Dataset Records
// =============================================================================

/// One country record from the dataset.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Country {
    /// Common and native names.
    pub name: CountryName,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    /// Capitals in dataset order; the first one is displayed.
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub flags: Flags,
    /// Top-level domains (e.g. ".fr").
    #[serde(default)]
    pub tld: Vec<String>,
    /// Currency code -> currency, ordered by code.
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    /// Language code -> language name, ordered by code.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    /// ISO-alpha-3 codes of bordering countries.
    #[serde(default)]
    pub borders: Vec<String>,
}

/// Name block of a country record.
///
/// `common` is the only field the whole application requires; a record
/// without it fails the body parse rather than rendering under an invented
/// name.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
    /// Language code -> native name, ordered by code.
    #[serde(default, rename = "nativeName")]
    pub native_name: BTreeMap<String, NativeName>,
}

/// Native-language rendering of a country name.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag image references.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    pub alt: Option<String>,
}

/// One currency entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

// =============================================================================
// Display Accessors
// =============================================================================

impl Country {
    /// Alt text for the flag image, falling back to "<name> flag".
    pub fn flag_alt(&self) -> String {
        match self.flags.alt.as_deref() {
            Some(alt) if !alt.is_empty() => alt.to_string(),
            _ => format!("{} flag", self.name.common),
        }
    }

    /// Region, if the dataset provides one.
    pub fn region_name(&self) -> Option<&str> {
        non_empty(&self.region)
    }

    /// Subregion, if the dataset provides one.
    pub fn subregion_name(&self) -> Option<&str> {
        non_empty(&self.subregion)
    }

    /// First listed capital.
    pub fn first_capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str).and_then(non_empty)
    }

    /// First listed top-level domain.
    pub fn first_tld(&self) -> Option<&str> {
        self.tld.first().map(String::as_str).and_then(non_empty)
    }

    /// Common form of the first native name entry.
    pub fn native_name(&self) -> Option<&str> {
        self.name
            .native_name
            .values()
            .next()
            .map(|n| n.common.as_str())
            .and_then(non_empty)
    }

    /// All currency names joined by ", ", or `None` when the mapping is
    /// empty.
    pub fn currency_names(&self) -> Option<String> {
        joined(self.currencies.values().map(|c| c.name.as_str()))
    }

    /// All language names joined by ", ", or `None` when the mapping is
    /// empty.
    pub fn language_names(&self) -> Option<String> {
        joined(self.languages.values().map(String::as_str))
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

fn joined<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let list = values.collect::<Vec<_>>().join(", ");
    if list.is_empty() { None } else { Some(list) }
}
