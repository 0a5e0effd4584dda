use booking_core::calendar::WEEKDAY_HEADERS;
use booking_core::DayCell;
use leptos::prelude::*;
use thaw::*;

use crate::state::use_page_state;

#[component]
pub fn CalendarPicker() -> impl IntoView {
    let state = use_page_state();
    let scheduler = state.scheduler;
    let ready = state.calendar_ready;

    let on_day = move |day: u32| {
        let result = scheduler.try_update(|s| s.select_day(day));
        if let Some(Err(err)) = result {
            leptos::logging::log!("day not selectable: {}", err);
        }
    };

    view! {
        <div class="calendar">
            <div class="calendar__header">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    attr:aria-label="Previous month"
                    on_click=move |_| scheduler.update(|s| s.advance_month(-1))
                >
                    "←"
                </Button>

                <div class="calendar__label" aria-live="polite">
                    {move || if ready.get() { scheduler.with(|s| s.cursor().label()) } else { String::new() }}
                </div>

                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    attr:aria-label="Next month"
                    on_click=move |_| scheduler.update(|s| s.advance_month(1))
                >
                    "→"
                </Button>
            </div>

            <div class="calendar__weekdays">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|name| view! { <div class="calendar__weekday">{*name}</div> })
                    .collect_view()}
            </div>

            <div class="calendar__days" role="grid">
                {move || {
                    if !ready.get() {
                        return view! { <div class="calendar__loading">"Loading calendar…"</div> }.into_any();
                    }
                    let grid = scheduler.with(|s| s.month_grid());
                    grid.cells
                        .into_iter()
                        .map(|cell| match cell {
                            DayCell::Blank => view! { <div class="day day--empty"></div> }.into_any(),
                            DayCell::Day(info) => {
                                let day = info.day;
                                let selected = move || scheduler.with(|s| s.is_selected(day));
                                view! {
                                    <button
                                        type="button"
                                        class="day"
                                        class:day--available=info.is_available
                                        class:day--unavailable=!info.is_available
                                        class:day--selected=selected
                                        disabled=!info.is_available
                                        aria-pressed=move || selected().to_string()
                                        on:click=move |_| on_day(day)
                                    >
                                        {day}
                                    </button>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>
    }
}
