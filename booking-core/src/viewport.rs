use std::collections::BTreeSet;

/// Sections the navbar tracks, in page order.
pub const NAV_SECTIONS: [&str; 3] = ["top", "workshops", "booking"];

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
pub const NAV_THRESHOLD: f64 = 0.5;
pub const STICKY_CTA_THRESHOLD: f64 = 0.15;

/// How reveal elements become visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Wait for the element to scroll into view.
    Observe,
    /// No observer support; show everything straight away.
    ShowAll,
}

impl RevealMode {
    pub fn detect(has_intersection_observer: bool) -> Self {
        if has_intersection_observer {
            Self::Observe
        } else {
            Self::ShowAll
        }
    }
}

/// One-shot visibility: once revealed, an element stays revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    pub fn initial(mode: RevealMode) -> Self {
        Self {
            visible: mode == RevealMode::ShowAll,
        }
    }

    /// Returns true when observation can stop.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if is_intersecting {
            self.visible = true;
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Nav links whose sections are currently in view. Each section toggles on
/// its own, so leaving one deactivates its link even if no other takes over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavHighlight {
    active: BTreeSet<String>,
}

impl NavHighlight {
    pub fn observe(&mut self, section: &str, is_intersecting: bool) {
        if is_intersecting {
            self.active.insert(section.to_string());
        } else {
            self.active.remove(section);
        }
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active.contains(section)
    }
}

/// `href` of the nav link that tracks `section`.
pub fn nav_href(section: &str) -> String {
    format!("#{section}")
}

/// Only in-page anchors are smooth-scrolled.
pub fn in_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn sticky_cta_hidden(booking_in_view: bool, modal_open: bool) -> bool {
    booking_in_view || modal_open
}
