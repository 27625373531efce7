//! View navigation state.

use super::Country;

/// Which panel is visible.
///
/// The application is a two-state machine: either the search/filter inputs
/// plus the country list, or the detail panel for one selected country.
/// `Detail` always carries its country, so the detail panel can never render
/// without a selection. The state is not persisted; a reload starts at
/// `List`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum View {
    /// Input fields and the country list (initial state).
    #[default]
    List,
    /// Full information for the selected country.
    Detail(Country),
}

impl View {
    /// Whether the list panel is showing.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }

    /// The selected country, when the detail panel is showing.
    pub fn selected(&self) -> Option<&Country> {
        match self {
            Self::Detail(country) => Some(country),
            Self::List => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn france() -> Country {
        serde_json::from_value(json!({
            "name": { "common": "France" },
            "capital": ["Paris"]
        }))
        .unwrap()
    }

    #[test]
    fn initial_state_is_list() {
        assert_eq!(View::default(), View::List);
        assert!(View::default().is_list());
        assert_eq!(View::default().selected(), None);
    }

    #[test]
    fn detail_carries_the_selected_country() {
        let view = View::Detail(france());
        assert!(!view.is_list());
        assert_eq!(view.selected().map(|c| c.first_capital()), Some(Some("Paris")));
    }
}
