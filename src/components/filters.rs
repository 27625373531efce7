//! Search and region filter controls.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::REGION_OPTIONS;

stylance::import_crate_style!(css, "src/components/filters.module.css");

/// Input section: free-text name search plus a region dropdown.
///
/// Both controls write straight into the context signals and the list
/// derives from them, so every keystroke or selection re-narrows the
/// visible countries. Navigation does not touch these signals, which is why
/// coming back from the detail panel shows the same filtered list.
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let handle_search = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        ctx.search_term.set(input.value());
    };

    let handle_region = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let select = target.unchecked_into::<web_sys::HtmlSelectElement>();
        ctx.region_term.set(select.value());
    };

    view! {
        <section class=css::bar>
            <label class=css::searchField>
                <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                <input
                    type="text"
                    class=css::searchInput
                    placeholder="Search for a country..."
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || ctx.search_term.get()
                    on:input=handle_search
                />
            </label>

            <select
                class=css::regionSelect
                aria-label="Filter by region"
                prop:value=move || ctx.region_term.get()
                on:change=handle_region
            >
                <option value="">"Filter by Region"</option>
                {REGION_OPTIONS
                    .iter()
                    .map(|&region| view! { <option value=region>{region}</option> })
                    .collect_view()}
            </select>
        </section>
    }
}
