//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the startup
//! fetch, following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{CountryDetail, CountryList, FilterBar, Header};
use crate::config;
use crate::core::apply_filters;
use crate::models::{Country, Theme, View};
use crate::utils::fetch_json;

// ============================================================================
// Load Phase
// ============================================================================

/// Lifecycle of the single startup fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// Request in flight (or never resolving); the list stays empty.
    #[default]
    Loading,
    /// Dataset decoded and stored.
    Ready,
    /// Transport or decode failure; the list shows the error placeholder.
    Failed,
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; any child component can
/// access it with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The full country collection, fetched once at startup and never
    /// mutated afterwards; filtering derives new sequences from it.
    pub countries: RwSignal<Vec<Country>>,
    /// Startup fetch lifecycle.
    pub load_phase: RwSignal<LoadPhase>,
    /// Live search term, matched against common names.
    pub search_term: RwSignal<String>,
    /// Live region term, matched against regions.
    pub region_term: RwSignal<String>,
    /// Which panel is visible.
    pub view: RwSignal<View>,
    /// Current visual mode.
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Creates the context with default state, restoring the persisted
    /// theme before anything interactive renders.
    pub fn new() -> Self {
        let theme = Theme::load();
        theme.apply();

        Self {
            countries: RwSignal::new(Vec::new()),
            load_phase: RwSignal::new(LoadPhase::Loading),
            search_term: RwSignal::new(String::new()),
            region_term: RwSignal::new(String::new()),
            view: RwSignal::new(View::List),
            theme: RwSignal::new(theme),
        }
    }

    /// The collection narrowed by the live filter state: region filter
    /// first, then name search.
    pub fn visible_countries(&self) -> Vec<Country> {
        let region = self.region_term.get();
        let search = self.search_term.get();
        self.countries
            .with(|all| apply_filters(all, &region, &search))
    }

    /// Switch to the detail panel for one country.
    pub fn open_detail(&self, country: Country) {
        self.view.set(View::Detail(country));
    }

    /// Return to the list panel. Filter state is left untouched, so the
    /// previously narrowed list is still showing.
    pub fn close_detail(&self) {
        self.view.set(View::List);
    }

    /// Flip the theme, re-apply it to the document root, and persist the
    /// new preference.
    pub fn toggle_theme(&self) {
        let next = self.theme.get().toggled();
        next.apply();
        next.store();
        self.theme.set(next);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Startup Fetch
// ============================================================================

/// Launch the one startup fetch and store the outcome in the context.
///
/// No retry, no timeout: if the request hangs the load phase stays at
/// `Loading` and the list remains empty.
fn load_countries(ctx: AppContext) {
    spawn_local(async move {
        match fetch_json::<Vec<Country>>(&config::countries_url()).await {
            Ok(countries) => {
                ctx.countries.set(countries);
                ctx.load_phase.set(LoadPhase::Ready);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch countries: {}", e).into());
                ctx.load_phase.set(LoadPhase::Failed);
            }
        }
    });
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext (restoring the theme)
/// - Starts the one country fetch
/// - Renders the header plus whichever panel the view state selects
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    load_countries(ctx);

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Reload Page"</button>
                </div>
            }
        }>
            <Header />
            <main class="app-main">
                <Show
                    when=move || ctx.view.with(View::is_list)
                    fallback=move || view! { <CountryDetail /> }
                >
                    <FilterBar />
                    <CountryList />
                </Show>
            </main>
        </ErrorBoundary>
    }
}
