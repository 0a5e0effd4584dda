use booking_core::effects::{PRICE_SWAP_DELAY, PROMO_FLASH};
use booking_core::pricing::DISCOUNT_LABEL;
use booking_core::{PricingMode, PromoOutcome};
use leptos::prelude::*;

use crate::components::ripple_button::RippleButton;
use crate::state::use_page_state;
use crate::utils::TaskSlot;

#[component]
pub fn PricingPanel() -> impl IntoView {
    let pricing = use_page_state().pricing;
    let swapping = RwSignal::new(false);
    let promo_code = RwSignal::new(String::new());
    let swap_task = TaskSlot::new();
    let flash_task = TaskSlot::new();

    let on_toggle = move |ev: leptos::ev::Event| {
        let mode = if event_target_checked(&ev) {
            PricingMode::Package
        } else {
            PricingMode::Single
        };
        swapping.set(true);
        swap_task.schedule(PRICE_SWAP_DELAY, move || {
            pricing.update(|p| {
                p.set_mode(mode);
            });
            swapping.set(false);
        });
    };

    let on_apply = move |_: web_sys::MouseEvent| {
        let code = promo_code.get_untracked();
        match pricing.try_update(|p| p.apply_promo(&code)) {
            Some(Ok(PromoOutcome::Applied { total })) => {
                leptos::logging::log!("promo applied, total now {}", total);
            }
            Some(Ok(PromoOutcome::AlreadyApplied { .. })) | None => {}
            Some(Err(err)) => {
                leptos::logging::log!("{}", err);
                flash_task.schedule(PROMO_FLASH, move || pricing.update(|p| p.clear_promo_flag()));
            }
        }
    };

    view! {
        <div class="pricing">
            <label class="pricing__toggle">
                <span>"One-time"</span>
                <input
                    type="checkbox"
                    role="switch"
                    prop:checked=move || pricing.with(|p| p.mode() == PricingMode::Package)
                    on:change=on_toggle
                />
                <span>"Package"</span>
            </label>

            <div class="pricing__cards">
                {move || {
                    pricing.with(|p| {
                        p.cards()
                            .iter()
                            .map(|card| {
                                let price = card.price(p.mode()).to_string();
                                view! {
                                    <div class="price-card" data-mode=p.mode().as_str()>
                                        <h3>{card.name.clone()}</h3>
                                        <p class="price" class:is-swapping=move || swapping.get()>
                                            {price}
                                        </p>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>

            <div class="promo">
                <input
                    type="text"
                    placeholder="Promo code"
                    aria-label="Promo code"
                    class:input--invalid=move || pricing.with(|p| p.is_promo_invalid())
                    prop:value=move || promo_code.get()
                    on:input=move |ev| promo_code.set(event_target_value(&ev))
                />
                <RippleButton on_click=Callback::new(on_apply)>"Apply"</RippleButton>
            </div>

            <p class="pricing__total">
                "Total: "
                <strong>{move || pricing.with(|p| p.formatted_total())}</strong>
                {move || {
                    (0..pricing.with(|p| p.badges()))
                        .map(|_| view! { <span class="badge">{DISCOUNT_LABEL}</span> })
                        .collect_view()
                }}
            </p>
        </div>
    }
}
