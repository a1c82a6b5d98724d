use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::element::{Content, Element};
use crate::layout::Rect;

/// Easing function for reveal transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A single animated reveal fraction.
#[derive(Debug, Clone)]
struct RevealAnim {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl RevealAnim {
    fn fraction_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    fn finished(&self, now: Instant) -> bool {
        self.from == self.to || now.saturating_duration_since(self.start) >= self.duration
    }
}

/// Animates reveal fractions toward the targets declared in the element
/// tree, keyed by reveal element id.
#[derive(Debug, Default)]
pub struct RevealState {
    anims: HashMap<String, RevealAnim>,
    /// When true, target changes complete instantly (accessibility).
    reduced_motion: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Returns true while any reveal is still interpolating.
    pub fn is_animating(&self) -> bool {
        let now = Instant::now();
        self.anims.values().any(|anim| !anim.finished(now))
    }

    /// Walk the tree and pick up target changes. The first sighting of a
    /// reveal element snaps to its target without animating; later target
    /// changes transition from the currently interpolated value.
    pub fn update(&mut self, root: &Element) {
        let now = Instant::now();
        self.update_element(root, now);
    }

    fn update_element(&mut self, element: &Element, now: Instant) {
        match &element.content {
            Content::Reveal {
                under,
                over,
                target,
                duration,
                easing,
            } => {
                self.observe(&element.id, *target, *duration, *easing, now);
                self.update_element(under, now);
                self.update_element(over, now);
            }
            Content::Children(children) => {
                for child in children {
                    self.update_element(child, now);
                }
            }
            _ => {}
        }
    }

    fn observe(&mut self, id: &str, target: f32, duration: Duration, easing: Easing, now: Instant) {
        match self.anims.get_mut(id) {
            None => {
                // First frame: rest at the target, no wipe.
                self.anims.insert(
                    id.to_string(),
                    RevealAnim {
                        from: target,
                        to: target,
                        start: now,
                        duration: Duration::ZERO,
                        easing,
                    },
                );
            }
            Some(anim) => {
                if (anim.to - target).abs() <= f32::EPSILON {
                    return;
                }
                let from = anim.fraction_at(now);
                let duration = if self.reduced_motion {
                    Duration::ZERO
                } else {
                    duration
                };
                *anim = RevealAnim {
                    from,
                    to: target,
                    start: now,
                    duration,
                    easing,
                };
                log::debug!("reveal {id}: {from:.3} -> {target:.3} over {duration:?}");
            }
        }
    }

    /// Current interpolated fraction for a reveal element.
    /// Returns None if the element has never been observed.
    pub fn fraction(&self, id: &str) -> Option<f32> {
        let anim = self.anims.get(id)?;
        Some(anim.fraction_at(Instant::now()))
    }

    /// Drop state for elements no longer in the tree.
    pub fn cleanup(&mut self, current_ids: &HashSet<String>) {
        self.anims.retain(|id, _| current_ids.contains(id));
    }
}

/// Collect all element IDs from the tree.
pub fn collect_element_ids(element: &Element) -> HashSet<String> {
    let mut ids = HashSet::new();
    collect_ids_recursive(element, &mut ids);
    ids
}

fn collect_ids_recursive(element: &Element, ids: &mut HashSet<String>) {
    ids.insert(element.id.clone());
    match &element.content {
        Content::Children(children) => {
            for child in children {
                collect_ids_recursive(child, ids);
            }
        }
        Content::Reveal { under, over, .. } => {
            collect_ids_recursive(under, ids);
            collect_ids_recursive(over, ids);
        }
        _ => {}
    }
}

/// Terminal cells are roughly twice as tall as they are wide; vertical
/// distances are weighted by this factor so the wipe looks circular.
const CELL_ASPECT: f32 = 2.0;

/// Circular clip applied to a reveal's over layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealMask {
    cx: f32,
    cy: f32,
    radius: f32,
}

impl RevealMask {
    /// Mask for a reveal element's rect at the given fraction. Fraction 1.0
    /// reaches the farthest corner; fraction 0.0 contains nothing.
    pub fn for_rect(rect: Rect, fraction: f32) -> Self {
        let cx = rect.x as f32 + rect.width.saturating_sub(1) as f32 / 2.0;
        let cy = rect.y as f32 + rect.height.saturating_sub(1) as f32 / 2.0;
        let half_w = rect.width as f32 / 2.0;
        let half_h = rect.height as f32 / 2.0 * CELL_ASPECT;
        let max_radius = (half_w * half_w + half_h * half_h).sqrt();
        Self {
            cx,
            cy,
            radius: fraction.clamp(0.0, 1.0) * max_radius,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        if self.radius <= 0.0 {
            return false;
        }
        let dx = x as f32 - self.cx;
        let dy = (y as f32 - self.cy) * CELL_ASPECT;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}
