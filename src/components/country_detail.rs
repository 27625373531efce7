//! Country detail panel.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::PLACEHOLDER;
use crate::models::Country;
use crate::utils::format_population;

stylance::import_crate_style!(css, "src/components/country_detail.module.css");

/// Detail panel for the selected country, with a back control returning to
/// the list.
///
/// The view state machine only enters the detail state with a country
/// attached, so the body is always populated while this panel is mounted.
#[component]
pub fn CountryDetail() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let selected = Memo::new(move |_| ctx.view.with(|v| v.selected().cloned()));

    view! {
        <section class=css::panel>
            <button
                type="button"
                class=css::backButton
                on:click=move |_| ctx.close_detail()
            >
                <span class=css::backIcon aria-hidden="true"><Icon icon=ic::BACK /></span>
                "Back"
            </button>
            {move || {
                selected
                    .get()
                    .map(|country| view! { <CountryInfo country=country /> })
            }}
        </section>
    }
}

/// Full information block for one country. Each optional field falls back
/// to the placeholder on its own; one missing mapping never hides another.
#[component]
fn CountryInfo(country: Country) -> impl IntoView {
    let flag_src = country.flags.png.clone();
    let flag_alt = country.flag_alt();
    let name = country.name.common.clone();

    let native_name = or_placeholder(country.native_name().map(str::to_string));
    let population = format_population(country.population);
    let region = or_placeholder(country.region_name().map(str::to_string));
    let subregion = or_placeholder(country.subregion_name().map(str::to_string));
    let capital = or_placeholder(country.first_capital().map(str::to_string));
    let tld = or_placeholder(country.first_tld().map(str::to_string));
    let currencies = or_placeholder(country.currency_names());
    let languages = or_placeholder(country.language_names());
    let borders = country.borders.clone();

    view! {
        <div class=css::content>
            <img class=css::flag src=flag_src alt=flag_alt />
            <div class=css::info>
                <h2 class=css::name>{name}</h2>
                <ul class=css::fields>
                    <DetailField label="Native Name" value=native_name />
                    <DetailField label="Population" value=population />
                    <DetailField label="Region" value=region />
                    <DetailField label="Sub Region" value=subregion />
                    <DetailField label="Capital" value=capital />
                    <DetailField label="Top Level Domain" value=tld />
                    <DetailField label="Currencies" value=currencies />
                    <DetailField label="Languages" value=languages />
                </ul>
                <div class=css::borders>
                    <strong>"Border Countries: "</strong>
                    {if borders.is_empty() {
                        view! { <span class=css::noBorders>{PLACEHOLDER}</span> }.into_any()
                    } else {
                        borders
                            .into_iter()
                            .map(|code| view! { <span class=css::borderCode>{code}</span> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}

/// One labelled field row.
#[component]
fn DetailField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <li class=css::field>
            <strong>{label}</strong>
            ": "
            {value}
        </li>
    }
}

fn or_placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| PLACEHOLDER.to_string())
}
