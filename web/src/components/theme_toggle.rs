use booking_core::theme::{ThemePreference, LIGHT_THEME_CLASS, THEME_STORAGE_KEY};
use leptos::prelude::*;

use crate::utils::browser;

fn apply(theme: ThemePreference) {
    if let Err(err) = browser::toggle_root_class(LIGHT_THEME_CLASS, theme.is_light()) {
        leptos::logging::warn!("could not apply theme: {}", err);
    }
}

/// Reads the stored preference on mount and persists every toggle.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    // Server render assumes dark; the effect corrects it after hydration.
    let theme = RwSignal::new(ThemePreference::Dark);

    Effect::new(move |_| {
        let stored = browser::storage_get(THEME_STORAGE_KEY).ok().flatten();
        let resolved = ThemePreference::resolve(stored.as_deref(), browser::prefers_light());
        apply(resolved);
        theme.set(resolved);
    });

    let on_toggle = move |_| {
        let next = theme.get_untracked().toggled();
        apply(next);
        if let Err(err) = browser::storage_set(THEME_STORAGE_KEY, next.as_str()) {
            leptos::logging::warn!("theme not persisted: {}", err);
        }
        theme.set(next);
    };

    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label="Toggle light and dark theme"
            aria-pressed=move || if theme.get().is_light() { "true" } else { "false" }
            on:click=on_toggle
        >
            {move || if theme.get().is_light() { "☀" } else { "☾" }}
        </button>
    }
}
