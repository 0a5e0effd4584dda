use booking_core::modal::{trap_tab, FOCUSABLE_SELECTOR};
use booking_core::{ConfettiPiece, EffectId, ModalBody};
use leptos::prelude::*;

use crate::state::use_page_state;
use crate::utils::browser;

fn body_view(body: ModalBody) -> AnyView {
    match body {
        ModalBody::Empty => ().into_any(),
        ModalBody::BookingConfirmed(summary) => view! {
            <h2 id="modal-title">"Booking confirmed"</h2>
            <p>"We have saved your seat. Here is what you sent us:"</p>
            <dl class="summary">
                {summary
                    .into_iter()
                    .map(|(key, value)| view! { <dt>{key}</dt><dd>{value}</dd> })
                    .collect_view()}
            </dl>
        }
        .into_any(),
        ModalBody::WorkshopDetails { title, date, desc } => view! {
            <h2 id="modal-title">{title}</h2>
            <p class="modal__date">{date}</p>
            <p>{desc}</p>
        }
        .into_any(),
        ModalBody::Newsletter { email } => view! {
            <h2 id="modal-title">"You're subscribed"</h2>
            <p>"We'll send new workshop dates to " <strong>{email}</strong> "."</p>
        }
        .into_any(),
    }
}

/// Dialog with a focus trap, plus the confetti layer it celebrates with.
#[component]
pub fn ConfirmModal() -> impl IntoView {
    let state = use_page_state();
    let modal = state.modal;
    let confetti = state.confetti;
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    let is_open = move || modal.with(|m| m.is_open());

    // Escape closes from anywhere on the page.
    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.is_modal_open() {
            state.close_modal();
        }
    });
    on_cleanup(move || escape.remove());

    // Move focus inside once the dialog opens.
    Effect::new(move |_| {
        if !is_open() {
            return;
        }
        if let Some(dialog) = dialog_ref.get() {
            if let Some(first) = browser::focusables(&dialog, FOCUSABLE_SELECTOR).first() {
                if let Err(err) = first.focus() {
                    leptos::logging::warn!("could not focus dialog: {:?}", err);
                }
            }
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        let items = browser::focusables(&dialog, FOCUSABLE_SELECTOR);
        let active = browser::active_element()
            .and_then(|current| items.iter().position(|item| *item == current));
        if let Some(index) = trap_tab(active, items.len(), ev.shift_key()) {
            ev.prevent_default();
            if let Err(err) = items[index].focus() {
                leptos::logging::warn!("focus trap could not move focus: {:?}", err);
            }
        }
    };

    view! {
        <div class="modal" class:is-open=is_open aria-hidden=move || (!is_open()).to_string()>
            <div class="modal__backdrop" on:click=move |_| state.close_modal()></div>
            <div
                node_ref=dialog_ref
                class="modal__dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                on:keydown=on_keydown
            >
                <button type="button" class="modal__close" aria-label="Close" on:click=move |_| state.close_modal()>
                    "×"
                </button>
                <div class="modal__body">{move || body_view(modal.with(|m| m.body().clone()))}</div>
                <div class="modal__actions">
                    <button type="button" class="btn" on:click=move |_| state.close_modal()>
                        "Done"
                    </button>
                </div>
            </div>
        </div>

        <div class="confetti-layer" aria-hidden="true">
            <For
                each={move || confetti.get().iter().copied().collect::<Vec<(EffectId, ConfettiPiece)>>()}
                key=|(id, _)| *id
                children=|(_, piece)| {
                    view! {
                        <span
                            class="confetti"
                            style=format!("--tx: {}px; --ty: {}px; --rot: {}deg", piece.tx, piece.ty, piece.rot)
                        ></span>
                    }
                }
            />
        </div>
    }
}
