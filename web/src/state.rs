//! Controllers shared across the page, owned in signals and handed out via
//! context.

use booking_core::catalog::featured_search;
use booking_core::effects::{confetti_burst, CONFETTI_LIFETIME};
use booking_core::{
    BookingForm, Catalog, ConfettiPiece, EffectLayer, LiveSearch, Modal, ModalBody, PageConfig,
    PricingPanel, Scheduler,
};
use leptos::prelude::*;

use crate::utils::browser;

#[derive(Clone, Copy)]
pub struct PageState {
    pub scheduler: RwSignal<Scheduler>,
    pub form: RwSignal<BookingForm>,
    pub pricing: RwSignal<PricingPanel>,
    pub search: RwSignal<LiveSearch>,
    pub catalog: RwSignal<Catalog>,
    pub modal: RwSignal<Modal<web_sys::HtmlElement>, LocalStorage>,
    pub confetti: RwSignal<EffectLayer<ConfettiPiece>>,
    /// Indices of featured cards currently pulsing.
    pub pulsing: RwSignal<Vec<usize>>,
    pub booking_in_view: RwSignal<bool>,
    /// False until the client has moved the calendar to its own local month.
    pub calendar_ready: RwSignal<bool>,
}

impl PageState {
    pub fn new() -> Self {
        let today = chrono::Local::now().date_naive();

        Self {
            scheduler: RwSignal::new(Scheduler::starting_at(today)),
            form: RwSignal::new(BookingForm::default()),
            pricing: RwSignal::new(PricingPanel::default()),
            search: RwSignal::new(featured_search()),
            catalog: RwSignal::new(Catalog::default()),
            modal: RwSignal::new_local(Modal::new()),
            confetti: RwSignal::new(EffectLayer::new()),
            pulsing: RwSignal::new(Vec::new()),
            booking_in_view: RwSignal::new(false),
            calendar_ready: RwSignal::new(false),
        }
    }

    /// Re-anchors the calendar on the browser's date. Call from an effect so
    /// the server render and hydration agree on the hidden placeholder.
    pub fn start_calendar(&self) {
        let today = chrono::Local::now().date_naive();
        self.scheduler.set(Scheduler::starting_at(today));
        self.calendar_ready.set(true);
    }

    pub fn configure(&self, config: &PageConfig) {
        self.form.update(|form| form.set_policy(config.schedule));
        self.pricing
            .update(|pricing| pricing.configure(config.base_price, config.promo_repeat));
    }

    pub fn open_modal(&self, body: ModalBody) {
        let previous = browser::active_element();
        self.modal.update(|modal| modal.open(previous, body));
    }

    pub fn close_modal(&self) {
        let restore = self.modal.try_update(|modal| modal.close()).flatten();
        if let Some(element) = restore {
            if let Err(err) = element.focus() {
                leptos::logging::warn!("could not restore focus: {:?}", err);
            }
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.with(|modal| modal.is_open())
    }

    /// Each piece removes itself after its animation ends.
    pub fn launch_confetti(&self, count: usize) {
        let pieces = confetti_burst(count, &mut rand::thread_rng());
        let mut ids = Vec::new();
        self.confetti.update(|layer| ids = layer.spawn_all(pieces));

        let confetti = self.confetti;
        for id in ids {
            set_timeout(
                move || {
                    confetti.try_update(|layer| layer.remove(id));
                },
                CONFETTI_LIFETIME,
            );
        }
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}
