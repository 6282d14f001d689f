//! Transient ripple feedback for rail items.
//!
//! A ripple is purely decorative: it spawns on mouse-down at the pointer
//! offset, expands outward over a fixed number of animation frames, and
//! removes itself on completion. It never influences navigation or
//! active-state logic.

/// Number of ticks a ripple stays alive. At the runtime's fast animation
/// interval this lands close to the classic 600 ms ripple.
pub const RIPPLE_FRAMES: u8 = 5;

/// One in-flight ripple, owned by the item that spawned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ripple {
    /// Pointer offset within the item area where the ripple is centered.
    pub center: (u16, u16),
    /// Full diameter: the larger of the item's rendered width and height.
    pub diameter: u16,
    /// Frames elapsed since spawn.
    pub frame: u8,
}

impl Ripple {
    /// Animation progress in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        f32::from(self.frame) / f32::from(RIPPLE_FRAMES)
    }

    /// Current radius of the expanding wave, in cells. Grows past the
    /// item's own radius so the wave visibly washes over the whole row
    /// before it fades; the painter clips to the item area.
    pub fn current_radius(&self) -> f32 {
        f32::from(self.diameter) * self.progress()
    }

    fn is_done(&self) -> bool {
        self.frame >= RIPPLE_FRAMES
    }
}

/// The owned collection of a single item's live ripples.
///
/// Explicit creation via [`RippleSet::spawn`] and explicit
/// removal-on-completion inside [`RippleSet::advance`] keep teardown and
/// testing deterministic. Concurrent ripples are unbounded and mutually
/// independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RippleSet {
    ripples: Vec<Ripple>,
}

impl RippleSet {
    /// Spawns one ripple centered at `offset` within an item of the given
    /// rendered size. The diameter is the larger of width and height.
    pub fn spawn(&mut self, offset: (u16, u16), width: u16, height: u16) {
        self.ripples.push(Ripple {
            center: offset,
            diameter: width.max(height),
            frame: 0,
        });
    }

    /// Advances every live ripple by one frame and drops the completed
    /// ones. Returns whether any ripple is still animating.
    pub fn advance(&mut self) -> bool {
        for ripple in &mut self.ripples {
            ripple.frame = ripple.frame.saturating_add(1);
        }
        self.ripples.retain(|ripple| !ripple.is_done());
        !self.ripples.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        !self.ripples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Drops all live ripples. Used on container rebuild and teardown.
    pub fn clear(&mut self) {
        self.ripples.clear();
    }
}
