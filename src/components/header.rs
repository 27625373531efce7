//! Application header with the theme toggle.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::Theme;

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Header bar: app title on the left, theme switch on the right.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class=css::bar>
            <h1 class=css::title>
                <span class=css::titleIcon aria-hidden="true"><Icon icon=ic::GLOBE /></span>
                {APP_NAME}
            </h1>
            <ThemeToggle />
        </header>
    }
}

/// Theme switch button.
///
/// `aria-checked` tracks the applied mode; the icon and label advertise the
/// mode the next activation selects (a sun and "Light Mode" while dark, a
/// moon and "Dark Mode" while light). Both are restored from the persisted
/// preference before the button is first rendered.
#[component]
fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dark = Signal::derive(move || ctx.theme.get().is_dark());
    let icon = Signal::derive(move || if is_dark.get() { ic::SUN } else { ic::MOON });
    let label = Signal::derive(move || match ctx.theme.get() {
        Theme::Dark => "Light Mode",
        Theme::Light => "Dark Mode",
    });

    view! {
        <button
            type="button"
            class=css::themeButton
            role="switch"
            aria-checked=move || is_dark.get().to_string()
            on:click=move |_| ctx.toggle_theme()
        >
            <span class=css::themeIcon aria-hidden="true">
                {move || view! { <Icon icon=icon.get() /> }}
            </span>
            {label}
        </button>
    }
}
