use booking_core::ModalBody;
use leptos::prelude::*;

use crate::state::use_page_state;

#[component]
pub fn Newsletter() -> impl IntoView {
    let state = use_page_state();
    let email = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get_untracked();
        if let Some(body) = ModalBody::newsletter(address.trim()) {
            state.open_modal(body);
            email.set(String::new());
        }
    };

    view! {
        <form class="newsletter" on:submit=on_submit>
            <label for="newsletter-email">"Get new workshops in your inbox"</label>
            <div class="newsletter__row">
                <input
                    id="newsletter-email"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button type="submit" class="btn">"Subscribe"</button>
            </div>
        </form>
    }
}
