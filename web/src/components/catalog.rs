use booking_core::catalog::{pulse_schedule, FEATURED_COUNT, PULSE_DURATION};
use booking_core::ModalBody;
use leptos::prelude::*;

use crate::state::{use_page_state, PageState};
use crate::utils::browser;

/// Opens the catalog, scrolls to the workshops and pulses the featured cards.
pub fn browse(state: PageState) {
    if state.catalog.try_update(|c| c.show_all()) == Some(true) {
        leptos::logging::log!("catalog materialized");
    }
    if let Err(err) = browser::smooth_scroll_to("workshops") {
        leptos::logging::warn!("scroll failed: {}", err);
    }

    let pulsing = state.pulsing;
    for (index, delay) in pulse_schedule(FEATURED_COUNT) {
        set_timeout(
            move || {
                pulsing.try_update(|p| p.push(index));
                set_timeout(
                    move || {
                        pulsing.try_update(|p| p.retain(|i| *i != index));
                    },
                    PULSE_DURATION,
                );
            },
            delay,
        );
    }
}

#[component]
pub fn Catalog() -> impl IntoView {
    let state = use_page_state();
    let catalog = state.catalog;

    view! {
        <div class="catalog">
            <button
                type="button"
                class="btn btn--ghost catalog__show-all"
                class:is-hidden=move || catalog.with(|c| c.is_visible())
                on:click=move |_| {
                    catalog.update(|c| {
                        c.show_all();
                    });
                }
            >
                "Show all workshops"
            </button>

            <ul class="catalog__list" class:is-hidden=move || !catalog.with(|c| c.is_visible())>
                {move || {
                    catalog
                        .with(|c| c.cards())
                        .iter()
                        .map(|workshop| {
                            let payload = workshop.details_payload();
                            view! {
                                <li class="catalog__item">
                                    <img src=workshop.image alt="" loading="lazy"/>
                                    <div>
                                        <h4>{workshop.title}</h4>
                                        <p>{workshop.date} " · " {workshop.category} " · " {workshop.trainer}</p>
                                    </div>
                                    <button
                                        type="button"
                                        class="btn btn--ghost"
                                        on:click=move |_| state.open_modal(ModalBody::from_details(&payload))
                                    >
                                        "Details"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
