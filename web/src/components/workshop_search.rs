use booking_core::catalog::{card_id, featured};
use leptos::prelude::*;

use crate::components::tilt_card::TiltCard;
use crate::state::use_page_state;

/// Featured workshops with a live filter over title, trainer and category.
#[component]
pub fn WorkshopSearch() -> impl IntoView {
    let state = use_page_state();
    let search = state.search;
    let pulsing = state.pulsing;

    let on_details = move |payload: String| {
        state.open_modal(booking_core::ModalBody::from_details(&payload));
    };

    view! {
        <div class="search">
            <input
                type="search"
                class="search__input"
                placeholder="Search by title, trainer or category"
                aria-label="Search workshops"
                prop:value=move || search.with(|s| s.query().to_string())
                on:input=move |ev| search.update(|s| s.set_query(&event_target_value(&ev)))
            />

            <div class="workshop-grid">
                {featured()
                    .iter()
                    .enumerate()
                    .map(|(index, workshop)| {
                        let id = card_id(index);
                        let visible_id = id.clone();
                        let payload = workshop.details_payload();
                        view! {
                            <TiltCard
                                id=id
                                class="workshop-card"
                                pulse=Signal::derive(move || pulsing.with(|p| p.contains(&index)))
                                hidden=Signal::derive(move || !search.with(|s| s.is_visible(&visible_id)))
                            >
                                <img src=workshop.image alt=workshop.title loading="lazy"/>
                                <span class="workshop-card__category">{workshop.category}</span>
                                <h3 class="workshop-card__title">{workshop.title}</h3>
                                <p class="workshop-card__meta">{workshop.date} " · " {workshop.trainer}</p>
                                <button
                                    type="button"
                                    class="btn btn--ghost"
                                    on:click=move |_| on_details(payload.clone())
                                >
                                    "Details"
                                </button>
                            </TiltCard>
                        }
                    })
                    .collect_view()}
            </div>

            <p class="search__empty" class:is-hidden=move || search.with(|s| !s.visible_ids().is_empty())>
                "No workshops match your search."
            </p>
        </div>
    }
}
