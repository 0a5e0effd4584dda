use std::time::Duration;

use leptos::prelude::*;

/// A single pending timeout that is replaced, not stacked, when rescheduled.
#[derive(Clone, Copy)]
pub struct TaskSlot(StoredValue<Option<TimeoutHandle>>);

impl TaskSlot {
    /// The pending task is cancelled when the owning component is disposed.
    pub fn new() -> Self {
        let slot = Self(StoredValue::new(None));
        on_cleanup(move || slot.cancel());
        slot
    }

    pub fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) {
        self.cancel();
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => self.0.set_value(Some(handle)),
            Err(err) => leptos::logging::warn!("failed to schedule task: {:?}", err),
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.0.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}

impl Default for TaskSlot {
    fn default() -> Self {
        Self::new()
    }
}
