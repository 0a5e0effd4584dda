use booking_core::effects::{particle_field, Particle};
use leptos::prelude::*;

use crate::utils::browser;

/// Floating dots behind the booking form, resized with the window.
#[component]
pub fn ParticleField() -> impl IntoView {
    let particles = RwSignal::new(Vec::<Particle>::new());

    Effect::new(move |_| {
        let regenerate = move || {
            let width = browser::viewport_width();
            particles.set(particle_field(width, &mut rand::thread_rng()));
        };
        regenerate();

        // A newer resize cancels the frame a previous one asked for.
        let pending = StoredValue::new(None::<AnimationFrameRequestHandle>);
        let listener = window_event_listener(leptos::ev::resize, move |_| {
            if let Some(handle) = pending.try_update_value(Option::take).flatten() {
                handle.cancel();
            }
            match request_animation_frame_with_handle(regenerate) {
                Ok(handle) => pending.set_value(Some(handle)),
                Err(err) => leptos::logging::warn!("particle refresh not scheduled: {:?}", err),
            }
        });
        on_cleanup(move || listener.remove());
    });

    view! {
        <div class="particles" aria-hidden="true">
            {move || {
                particles
                    .get()
                    .into_iter()
                    .map(|p| {
                        let style = format!(
                            "left: {:.2}%; top: {:.2}%; --dur: {:.2}s",
                            p.left_pct,
                            p.top_pct,
                            p.duration_secs,
                        );
                        view! { <span style=style></span> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
