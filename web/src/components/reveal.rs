use booking_core::viewport::Reveal as RevealState;
use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use booking_core::viewport::{RevealMode, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

#[cfg(not(feature = "ssr"))]
use crate::utils::browser;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let state = RwSignal::new(RevealState::default());
    let node = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        let Some(el) = node.get() else {
            return;
        };
        let mode = RevealMode::detect(browser::has_intersection_observer());
        if mode == RevealMode::ShowAll {
            state.set(RevealState::initial(mode));
            return;
        }

        let callback = Closure::wrap(Box::new(
            move |entries: web_sys::js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let mut next = state.get_untracked();
                    if next.observe(entry.is_intersecting()) {
                        observer.unobserve(&entry.target());
                        state.set(next);
                    }
                }
            },
        )
            as Box<dyn FnMut(web_sys::js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer.observe(&el),
            // Treat a failing observer like a missing one.
            Err(_) => state.set(RevealState::initial(RevealMode::ShowAll)),
        }
        callback.forget();
    });

    view! {
        <div
            node_ref=node
            class=format!("reveal {class}")
            class:is-visible=move || state.get().is_visible()
        >
            {children()}
        </div>
    }
}
