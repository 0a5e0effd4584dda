pub mod calendar;
pub mod catalog;
pub mod config;
pub mod effects;
pub mod error;
pub mod form;
pub mod modal;
pub mod pricing;
pub mod search;
pub mod selection;
pub mod slots;
pub mod theme;
pub mod validation;
pub mod viewport;

// Re-export commonly used types
pub use calendar::{render_month, CalendarCursor, DayAvailability, DayCell, MonthGrid};
pub use catalog::{Catalog, ModalBody, Workshop, WORKSHOPS};
pub use config::{PageConfig, PromoRepeat, SchedulePolicy};
pub use effects::{ConfettiPiece, EffectId, EffectLayer, Particle, PointerOffset, Tilt};
pub use error::{
    CalendarError, ConfigError, DetailsError, FormError, PromoError, SelectionError,
};
pub use form::{BookingForm, FieldSpec, FormCommand, FormEvent, FormSchema, Step, SubmissionState};
pub use modal::Modal;
pub use pricing::{PriceCard, PricingMode, PricingPanel, PromoOutcome};
pub use search::{LiveSearch, SearchCard};
pub use selection::{Scheduler, Selection};
pub use slots::{render_slots, SlotAvailability};
pub use theme::ThemePreference;
pub use validation::{FieldFlag, InputType, Rule};
pub use viewport::{NavHighlight, Reveal, RevealMode};
