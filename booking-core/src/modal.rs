use crate::catalog::ModalBody;

/// Selector for elements the focus trap cycles through.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Open/closed dialog that remembers where focus was before it opened.
///
/// `F` is whatever handle the view layer uses for a focusable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal<F> {
    open: bool,
    return_focus: Option<F>,
    body: ModalBody,
}

impl<F> Modal<F> {
    pub fn new() -> Self {
        Self {
            open: false,
            return_focus: None,
            body: ModalBody::Empty,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn body(&self) -> &ModalBody {
        &self.body
    }

    /// Opening an already open dialog only swaps the body; the original
    /// focus target is kept.
    pub fn open(&mut self, previous_focus: Option<F>, body: ModalBody) {
        if !self.open {
            self.return_focus = previous_focus;
        }
        self.open = true;
        self.body = body;
    }

    /// Returns the element that should get focus back.
    pub fn close(&mut self) -> Option<F> {
        if !self.open {
            return None;
        }
        self.open = false;
        self.return_focus.take()
    }
}

impl<F> Default for Modal<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Where Tab should move inside the dialog, if the browser default must be
/// overridden. Only the two ends wrap.
pub fn trap_tab(active: Option<usize>, count: usize, shift: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (active, shift) {
        (Some(0), true) => Some(last),
        (Some(index), false) if index == last => Some(0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_restores_captured_focus_once() {
        let mut modal: Modal<&str> = Modal::new();
        assert_eq!(modal.close(), None);

        modal.open(Some("submit-button"), ModalBody::Empty);
        assert!(modal.is_open());
        modal.open(Some("inside-modal"), ModalBody::newsletter("a@b.co").unwrap());
        assert!(matches!(modal.body(), ModalBody::Newsletter { .. }));

        assert_eq!(modal.close(), Some("submit-button"));
        assert!(!modal.is_open());
        assert_eq!(modal.close(), None);
    }

    #[test]
    fn tab_wraps_only_at_the_ends() {
        assert_eq!(trap_tab(Some(0), 3, true), Some(2));
        assert_eq!(trap_tab(Some(2), 3, false), Some(0));
        assert_eq!(trap_tab(Some(1), 3, false), None);
        assert_eq!(trap_tab(Some(1), 3, true), None);
        assert_eq!(trap_tab(Some(0), 3, false), None);
        assert_eq!(trap_tab(None, 3, false), None);
        assert_eq!(trap_tab(Some(0), 0, true), None);
        // A single focusable element wraps onto itself both ways.
        assert_eq!(trap_tab(Some(0), 1, false), Some(0));
        assert_eq!(trap_tab(Some(0), 1, true), Some(0));
    }
}
