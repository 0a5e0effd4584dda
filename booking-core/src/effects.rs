//! Purely decorative effects: confetti, particles, ripples, tilt.
//!
//! Every transient element lives in an [`EffectLayer`] under its own id, and
//! the timer that removes it targets that id. A late timer therefore never
//! removes a newer element, and clearing the layer drops everything at once.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(700);
pub const CONFETTI_LIFETIME: Duration = Duration::from_millis(900);
pub const PRICE_SWAP_DELAY: Duration = Duration::from_millis(200);
pub const PROMO_FLASH: Duration = Duration::from_millis(400);
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1200);

/// Pieces fired when a booking is confirmed.
pub const CONFIRMATION_CONFETTI: usize = 36;

const MIN_PARTICLES: usize = 30;
const MAX_PARTICLES: usize = 80;
const PIXELS_PER_PARTICLE: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EffectId(u64);

/// Short-lived decorative elements keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectLayer<T> {
    next_id: u64,
    items: Vec<(EffectId, T)>,
}

impl<T> EffectLayer<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            items: Vec::new(),
        }
    }

    pub fn spawn(&mut self, item: T) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.items.push((id, item));
        id
    }

    pub fn spawn_all(&mut self, items: impl IntoIterator<Item = T>) -> Vec<EffectId> {
        items.into_iter().map(|item| self.spawn(item)).collect()
    }

    /// Returns false if the element was already gone.
    pub fn remove(&mut self, id: EffectId) -> bool {
        let before = self.items.len();
        self.items.retain(|(item_id, _)| *item_id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(EffectId, T)> {
        self.items.iter()
    }
}

impl<T> Default for EffectLayer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfettiPiece {
    /// px
    pub tx: f64,
    /// px
    pub ty: f64,
    /// deg
    pub rot: f64,
}

impl ConfettiPiece {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            tx: rng.gen_range(-200.0..200.0),
            ty: rng.gen_range(-180.0..100.0),
            rot: rng.gen_range(-360.0..360.0),
        }
    }
}

pub fn confetti_burst<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<ConfettiPiece> {
    (0..count).map(|_| ConfettiPiece::random(rng)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_secs: f64,
}

pub fn particle_count(viewport_width: f64) -> usize {
    let raw = (viewport_width / PIXELS_PER_PARTICLE).round();
    if raw.is_nan() || raw < MIN_PARTICLES as f64 {
        MIN_PARTICLES
    } else {
        (raw as usize).min(MAX_PARTICLES)
    }
}

pub fn particle_field<R: Rng + ?Sized>(viewport_width: f64, rng: &mut R) -> Vec<Particle> {
    (0..particle_count(viewport_width))
        .map(|_| Particle {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            duration_secs: rng.gen_range(4.0..10.0),
        })
        .collect()
}

/// Pointer position relative to an element's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub fn within(client_x: f64, client_y: f64, left: f64, top: f64) -> Self {
        Self {
            x: client_x - left,
            y: client_y - top,
        }
    }
}

/// 3D tilt for a card, in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// `px` and `py` are the pointer position as a fraction of the card size.
    pub fn from_pointer(px: f64, py: f64) -> Self {
        Self {
            rotate_x: (py - 0.5) * -6.0,
            rotate_y: (px - 0.5) * 8.0,
        }
    }

    pub fn css(&self) -> String {
        format!("rotateX({}deg) rotateY({}deg)", self.rotate_x, self.rotate_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn removal_targets_only_its_own_element() {
        let mut layer = EffectLayer::new();
        let first = layer.spawn("ripple-a");
        let second = layer.spawn("ripple-b");
        assert_ne!(first, second);

        assert!(layer.remove(first));
        // A stale timer firing twice must not touch the newer ripple.
        assert!(!layer.remove(first));
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.iter().next().map(|(id, _)| *id), Some(second));

        layer.clear();
        assert!(layer.is_empty());
        // Ids keep increasing after a clear.
        assert!(layer.spawn("ripple-c") > second);
    }

    #[test]
    fn confetti_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let burst = confetti_burst(CONFIRMATION_CONFETTI, &mut rng);
        assert_eq!(burst.len(), 36);
        for piece in &burst {
            assert!((-200.0..200.0).contains(&piece.tx));
            assert!((-180.0..100.0).contains(&piece.ty));
            assert!((-360.0..360.0).contains(&piece.rot));
        }
    }

    #[test]
    fn particle_count_is_clamped() {
        assert_eq!(particle_count(320.0), 30);
        assert_eq!(particle_count(1200.0), 50);
        assert_eq!(particle_count(1212.0), 51);
        assert_eq!(particle_count(4000.0), 80);
        assert_eq!(particle_count(f64::NAN), 30);

        let mut rng = StdRng::seed_from_u64(1);
        let field = particle_field(1200.0, &mut rng);
        assert_eq!(field.len(), 50);
        assert!(field
            .iter()
            .all(|p| (4.0..10.0).contains(&p.duration_secs) && (0.0..100.0).contains(&p.left_pct)));
    }

    #[test]
    fn tilt_is_neutral_at_the_center() {
        assert_eq!(Tilt::from_pointer(0.5, 0.5), Tilt::default());
        let corner = Tilt::from_pointer(1.0, 0.0);
        assert_eq!(corner.rotate_x, 3.0);
        assert_eq!(corner.rotate_y, 4.0);
        assert_eq!(corner.css(), "rotateX(3deg) rotateY(4deg)");
    }

    #[test]
    fn pointer_offset_is_relative() {
        let offset = PointerOffset::within(150.0, 90.0, 100.0, 40.0);
        assert_eq!(offset, PointerOffset { x: 50.0, y: 50.0 });
    }
}
