use leptos::prelude::*;

use crate::state::use_page_state;

#[component]
pub fn TimeSlotPicker() -> impl IntoView {
    let scheduler = use_page_state().scheduler;

    let on_slot = move |label: &'static str| {
        if let Some(Err(err)) = scheduler.try_update(|s| s.select_slot(label)) {
            leptos::logging::log!("slot not selectable: {}", err);
        }
    };

    view! {
        <div class="slots">
            <p class="slots__subtitle">
                {move || {
                    scheduler
                        .with(|s| s.selection().iso_date())
                        .map(|date| format!("Available times for {date}"))
                        .unwrap_or_else(|| "Pick a date to see available times".to_string())
                }}
            </p>

            <div class="slots__grid">
                {move || {
                    scheduler
                        .with(|s| s.slots())
                        .into_iter()
                        .map(|slot| {
                            let label = slot.label;
                            let selected = move || scheduler.with(|s| s.is_slot_selected(label));
                            view! {
                                <button
                                    type="button"
                                    class="slot"
                                    class:slot--unavailable=!slot.is_available
                                    class:slot--selected=selected
                                    disabled=!slot.is_available
                                    aria-pressed=move || selected().to_string()
                                    on:click=move |_| on_slot(label)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
