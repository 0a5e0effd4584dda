use leptos::prelude::*;

use crate::components::{
    browse, BookingForm, Catalog, ConfirmModal, Navbar, Newsletter, ParticleField, PricingPanel,
    Reveal, StickyCta, WorkshopSearch,
};
use crate::server::load_page_config;
use crate::state::{use_page_state, PageState};

#[component]
pub fn HomePage() -> impl IntoView {
    provide_context(PageState::new());
    let state = use_page_state();

    // The server does not know the visitor's timezone.
    Effect::new(move |_| state.start_calendar());

    let config = Resource::new(|| (), |_| load_page_config());
    Effect::new(move |_| match config.get() {
        Some(Ok(cfg)) => state.configure(&cfg),
        Some(Err(err)) => leptos::logging::warn!("using default page config: {}", err),
        None => {}
    });

    view! {
        <Navbar/>

        <header id="top" class="hero">
            <ParticleField/>
            <Reveal class="hero__content">
                <h1>"Hands-on open source workshops"</h1>
                <p>"Learn Python, Scilab and more from the people who build the tools."</p>
                <div class="hero__actions">
                    <a href="#booking" class="btn btn--primary">"Book a seat"</a>
                    <button type="button" class="btn btn--ghost" on:click=move |_| browse(state)>
                        "Browse workshops"
                    </button>
                </div>
            </Reveal>
        </header>

        <section id="workshops" class="section">
            <Reveal>
                <h2>"Featured workshops"</h2>
                <WorkshopSearch/>
                <Catalog/>
            </Reveal>
        </section>

        <section id="pricing" class="section">
            <Reveal>
                <h2>"Pricing"</h2>
                <PricingPanel/>
            </Reveal>
        </section>

        <section id="booking" class="section">
            <Reveal>
                <h2>"Book your workshop"</h2>
                <BookingForm/>
            </Reveal>
        </section>

        <footer class="footer">
            <Newsletter/>
        </footer>

        <StickyCta/>
        <ConfirmModal/>
    }
}
