use booking_core::effects::{EffectId, EffectLayer, PointerOffset, RIPPLE_LIFETIME};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn offset_in_target(ev: &web_sys::MouseEvent) -> Option<PointerOffset> {
    let target = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = target.get_bounding_client_rect();
    Some(PointerOffset::within(
        f64::from(ev.client_x()),
        f64::from(ev.client_y()),
        rect.left(),
        rect.top(),
    ))
}

/// Button with a pointer-following glow and a click ripple.
#[component]
pub fn RippleButton(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] button_type: Option<String>,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
    #[prop(optional, into)] on_click: Option<Callback<web_sys::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let glow = RwSignal::new(PointerOffset::default());
    let ripples = RwSignal::new(EffectLayer::<PointerOffset>::new());
    on_cleanup(move || ripples.update(EffectLayer::clear));

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if let Some(offset) = offset_in_target(&ev) {
            glow.set(offset);
        }
    };

    let on_press = move |ev: web_sys::MouseEvent| {
        if let Some(offset) = offset_in_target(&ev) {
            let mut id = None;
            ripples.update(|layer| id = Some(layer.spawn(offset)));
            if let Some(id) = id {
                set_timeout(
                    move || {
                        ripples.try_update(|layer| layer.remove(id));
                    },
                    RIPPLE_LIFETIME,
                );
            }
        }
        if let Some(on_click) = on_click {
            on_click.run(ev);
        }
    };

    view! {
        <button
            type=button_type.unwrap_or_else(|| "button".to_string())
            class=format!("btn btn--ripple {class}")
            disabled=move || disabled.map_or(false, |d| d.get())
            style=move || {
                let at = glow.get();
                format!("--x: {}px; --y: {}px", at.x, at.y)
            }
            on:pointermove=on_pointer_move
            on:click=on_press
        >
            {children()}
            <For
                each={move || ripples.get().iter().copied().collect::<Vec<(EffectId, PointerOffset)>>()}
                key=|(id, _)| *id
                children=|(_, at)| {
                    view! {
                        <span class="ripple" style=format!("left: {}px; top: {}px", at.x, at.y)></span>
                    }
                }
            />
        </button>
    }
}
