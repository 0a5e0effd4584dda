use booking_core::viewport::{sticky_cta_hidden, STICKY_CTA_THRESHOLD};
use leptos::prelude::*;

use crate::state::use_page_state;
use crate::utils::browser;

/// Floating "Book now" button, tucked away while the booking form is on screen.
#[component]
pub fn StickyCta() -> impl IntoView {
    let state = use_page_state();
    let booking_in_view = state.booking_in_view;

    Effect::new(move |_| {
        if !browser::has_intersection_observer() {
            return;
        }
        let result = browser::observe_ids(&["booking"], STICKY_CTA_THRESHOLD, move |_, visible| {
            booking_in_view.set(visible);
        });
        if let Err(err) = result {
            leptos::logging::warn!("sticky CTA observer failed: {}", err);
        }
    });

    let hidden = move || sticky_cta_hidden(booking_in_view.get(), state.is_modal_open());

    view! {
        <a
            href="#booking"
            class="sticky-cta btn btn--primary"
            class:is-hidden=hidden
            aria-hidden=move || hidden().to_string()
            on:click=move |ev| {
                ev.prevent_default();
                if let Err(err) = browser::smooth_scroll_to("booking") {
                    leptos::logging::warn!("scroll to booking failed: {}", err);
                }
            }
        >
            "Book now"
        </a>
    }
}
