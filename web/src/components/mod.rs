pub mod booking_form;
pub mod calendar_picker;
pub mod catalog;
pub mod confirm_modal;
pub mod navbar;
pub mod newsletter;
pub mod particles;
pub mod pricing_panel;
pub mod reveal;
pub mod ripple_button;
pub mod sticky_cta;
pub mod theme_toggle;
pub mod tilt_card;
pub mod time_slot_picker;
pub mod workshop_search;

// Re-export commonly used types
pub use booking_form::BookingForm;
pub use calendar_picker::CalendarPicker;
pub use catalog::{browse, Catalog};
pub use confirm_modal::ConfirmModal;
pub use navbar::Navbar;
pub use newsletter::Newsletter;
pub use particles::ParticleField;
pub use pricing_panel::PricingPanel;
pub use reveal::Reveal;
pub use ripple_button::RippleButton;
pub use sticky_cta::StickyCta;
pub use theme_toggle::ThemeToggle;
pub use tilt_card::TiltCard;
pub use time_slot_picker::TimeSlotPicker;
pub use workshop_search::WorkshopSearch;
