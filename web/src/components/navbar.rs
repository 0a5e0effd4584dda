use booking_core::viewport::{in_page_target, nav_href, NavHighlight, NAV_SECTIONS, NAV_THRESHOLD};
use leptos::prelude::*;

use crate::components::catalog::browse;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::use_page_state;
use crate::utils::browser;

fn nav_label(section: &str) -> &'static str {
    match section {
        "workshops" => "Workshops",
        "booking" => "Book",
        _ => "Home",
    }
}

fn scroll_to(href: &str) {
    if let Some(id) = in_page_target(href) {
        if let Err(err) = browser::smooth_scroll_to(id) {
            leptos::logging::warn!("scroll to #{} failed: {}", id, err);
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_page_state();
    let active = RwSignal::new(NavHighlight::default());

    Effect::new(move |_| {
        if !browser::has_intersection_observer() {
            return;
        }
        let result = browser::observe_ids(&NAV_SECTIONS, NAV_THRESHOLD, move |id, visible| {
            active.update(|nav| nav.observe(&id, visible));
        });
        if let Err(err) = result {
            leptos::logging::warn!("nav highlight disabled: {}", err);
        }
    });

    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <a href="#top" class="navbar__logo" on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to("#top");
                }>
                    "FOSSE Workshops"
                </a>

                <div class="navbar__links">
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|section| {
                            let href = nav_href(section);
                            let target = href.clone();
                            view! {
                                <a
                                    href=href
                                    class="navbar__link"
                                    class:is-active=move || active.with(|nav| nav.is_active(section))
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to(&target);
                                    }
                                >
                                    {nav_label(section)}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button type="button" class="navbar__link navbar__link--cta" on:click=move |_| browse(state)>
                        "Browse"
                    </button>
                    <ThemeToggle/>
                </div>
            </div>
        </nav>
    }
}
