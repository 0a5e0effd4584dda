use booking_core::Tilt;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Card that leans toward the pointer.
#[component]
pub fn TiltCard(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] hidden: Option<Signal<bool>>,
    #[prop(optional, into)] pulse: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let tilt = RwSignal::new(Tilt::default());

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let Some(card) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let px = (f64::from(ev.client_x()) - rect.left()) / rect.width();
        let py = (f64::from(ev.client_y()) - rect.top()) / rect.height();
        tilt.set(Tilt::from_pointer(px, py));
    };

    view! {
        <article
            id=id
            class=format!("card card--tilt {class}")
            class:is-hidden=move || hidden.map_or(false, |h| h.get())
            class:pulse=move || pulse.map_or(false, |p| p.get())
            style:transform=move || tilt.get().css()
            on:pointermove=on_pointer_move
            on:pointerleave=move |_| tilt.set(Tilt::default())
        >
            {children()}
        </article>
    }
}
