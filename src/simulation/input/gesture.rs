//! Gesture tracking: per-pointer state between touch-start and touch-end.
//!
//! The tracker only classifies input. It returns a [`GestureOutcome`] and the
//! pane decides whether that outcome actually fractures anything.

use std::collections::HashMap;

use crate::rigid_body::Vec2;

/// Displacement a tracked pointer must exceed before it counts as a swipe
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// Swipe velocity = distance / elapsed ms * this
pub const SWIPE_VELOCITY_SCALE: f32 = 10.0;

/// One platform pointer/touch sample, in canvas coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub id: i32,
    pub x: f32,
    pub y: f32,
    pub time_ms: f64,
}

impl PointerInput {
    pub fn new(id: i32, x: f32, y: f32, time_ms: f64) -> Self {
        Self { id, x, y, time_ms }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// A tracked touch
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub id: i32,
    pub start: Vec2,
    pub last: Vec2,
    pub start_time_ms: f64,
}

/// A pointer motion long enough to give the fracture a direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeEvent {
    pub start: Vec2,
    pub end: Vec2,
    pub velocity: f32,
}

impl SwipeEvent {
    /// Direction of travel in radians
    pub fn angle(&self) -> f32 {
        (self.end - self.start).angle()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome {
    Idle,
    /// Break immediately at this point
    Tap(Vec2),
    /// Break at `origin` (where the swipe started) with directional bias
    Swipe { origin: Vec2, swipe: SwipeEvent },
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    pointers: HashMap<i32, Pointer>,
    swipe: Option<SwipeEvent>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a pointer. The first concurrent pointer (or every
    /// pointer when multi-touch is off) is a tap.
    pub fn pointer_down(&mut self, input: PointerInput, multi_touch: bool) -> GestureOutcome {
        let pos = input.pos();
        self.pointers.insert(
            input.id,
            Pointer {
                id: input.id,
                start: pos,
                last: pos,
                start_time_ms: input.time_ms,
            },
        );

        if !multi_touch || self.pointers.len() == 1 {
            GestureOutcome::Tap(pos)
        } else {
            GestureOutcome::Idle
        }
    }

    /// Update a tracked pointer. While the pane is intact, travelling more
    /// than [`SWIPE_THRESHOLD`] from the start point produces a swipe.
    pub fn pointer_move(&mut self, input: PointerInput, pane_intact: bool) -> GestureOutcome {
        let Some(pointer) = self.pointers.get_mut(&input.id) else {
            return GestureOutcome::Idle;
        };

        let pos = input.pos();
        let mut outcome = GestureOutcome::Idle;

        if pane_intact {
            let distance = (pos - pointer.start).length();
            if distance > SWIPE_THRESHOLD {
                // Same-timestamp samples would divide by zero; one ms already
                // saturates the velocity factor.
                let elapsed_ms = (input.time_ms - pointer.start_time_ms).max(1.0) as f32;
                let swipe = SwipeEvent {
                    start: pointer.start,
                    end: pos,
                    velocity: distance / elapsed_ms * SWIPE_VELOCITY_SCALE,
                };
                self.swipe = Some(swipe);
                outcome = GestureOutcome::Swipe { origin: pointer.start, swipe };
            }
        }

        pointer.last = pos;
        outcome
    }

    /// Stop tracking a pointer. The pending swipe goes away with the last one.
    pub fn pointer_up(&mut self, id: i32) {
        self.pointers.remove(&id);
        if self.pointers.is_empty() {
            self.swipe = None;
        }
    }

    pub fn clear(&mut self) {
        self.pointers.clear();
        self.swipe = None;
    }

    pub fn active_pointers(&self) -> usize {
        self.pointers.len()
    }

    pub fn pointer(&self, id: i32) -> Option<&Pointer> {
        self.pointers.get(&id)
    }

    pub fn pending_swipe(&self) -> Option<&SwipeEvent> {
        self.swipe.as_ref()
    }
}
