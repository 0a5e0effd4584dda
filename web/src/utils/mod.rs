pub mod browser;
pub mod timers;

pub use timers::TaskSlot;
