//! Country list panel: summary cards for the visible collection.

use leptos::prelude::*;

use crate::app::{AppContext, LoadPhase};
use crate::config::{FETCH_ERROR_TEXT, PLACEHOLDER};
use crate::models::Country;
use crate::utils::format_population;

stylance::import_crate_style!(css, "src/components/country_list.module.css");

/// Grid of summary cards for the countries passing the live filters.
///
/// While the startup fetch is in flight the collection is empty, so the
/// grid renders no cards. A failed fetch replaces the grid with a single
/// error message. Re-renders fully replace the previous content.
#[component]
pub fn CountryList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let visible = Signal::derive(move || ctx.visible_countries());

    view! {
        <Show
            when=move || ctx.load_phase.get() != LoadPhase::Failed
            fallback=|| view! { <p class=css::errorMessage>{FETCH_ERROR_TEXT}</p> }
        >
            <ul class=css::list>
                <For
                    each=move || visible.get()
                    key=|country| country.name.common.clone()
                    children=move |country| view! { <CountryCard country=country /> }
                />
            </ul>
        </Show>
    }
}

/// One clickable summary card. Activation opens the detail panel for this
/// country.
#[component]
fn CountryCard(country: Country) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let name = country.name.common.clone();
    let flag_src = country.flags.png.clone();
    let flag_alt = country.flag_alt();
    let population = format_population(country.population);
    let region = country.region.clone();
    let capital = country.first_capital().unwrap_or(PLACEHOLDER).to_string();
    let aria_label = format!("View details for {}", name);

    let handle_click = move |_: leptos::ev::MouseEvent| {
        ctx.open_detail(country.clone());
    };

    view! {
        <li
            class=css::card
            on:click=handle_click
            role="button"
            tabindex="0"
            aria-label=aria_label
        >
            <img class=css::flag src=flag_src alt=flag_alt loading="lazy" />
            <div class=css::info>
                <h2 class=css::name>{name}</h2>
                <p class=css::field>"Population: " {population}</p>
                <p class=css::field>"Region: " {region}</p>
                <p class=css::field>"Capital: " {capital}</p>
            </div>
        </li>
    }
}
