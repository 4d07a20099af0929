//! Pointer/touch gesture recognition with axis locking.
//!
//! A gesture moves through
//! `Idle → Tracking(Undecided) → Tracking(Horizontal | Vertical) → Idle`.
//!
//! While undecided, the pointer may wander inside a dead zone. As soon as it
//! leaves the dead zone on either axis, the axis is locked for the rest of the
//! gesture: horizontal if it moved further sideways than up or down, vertical
//! otherwise. Horizontal gestures belong to the gallery; vertical gestures
//! belong to the page and are passed through untouched.
//!
//! The recognizer knows nothing about slides. It reports previews and a final
//! [`Swipe`] decision, and the caller applies them to its own index.

use crate::models::Point;

/// Locked direction of a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Undecided,
    Horizontal,
    Vertical,
}

/// Transient state of one active gesture
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub origin: Point,
    pub current: Point,
    pub axis: Axis,
    /// Slide index when the gesture started
    pub baseline: usize,
}

impl DragState {
    /// Signed horizontal displacement since the gesture started
    pub fn delta_x(&self) -> f64 {
        self.current.x - self.origin.x
    }
}

/// Result of a pointer move
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No gesture in progress
    Idle,
    /// Still inside the dead zone
    Pending,
    /// Horizontal drag: preview the track and suppress native scrolling
    Preview { baseline: usize, delta_x: f64 },
    /// Vertical drag: leave it to the platform
    PassThrough,
}

/// Slide change requested by a finished horizontal gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Advance,
    Retreat,
    Stay,
}

/// Result of a gesture ending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOutcome {
    /// Nothing to commit (no gesture, vertical, or never left the dead zone)
    Inert,
    Commit(Swipe),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub dead_zone: f64,
    pub swipe_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            dead_zone: 10.0,
            swipe_threshold: 50.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: GestureConfig,
    drag: Option<DragState>,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self { config, drag: None }
    }

    /// Start tracking a gesture. Replaces any gesture still in flight.
    pub fn begin(&mut self, point: Point, baseline: usize) {
        if self.drag.is_some() {
            log::debug!("Gesture restarted before the previous one ended");
        }
        self.drag = Some(DragState {
            origin: point,
            current: point,
            axis: Axis::Undecided,
            baseline,
        });
    }

    pub fn update(&mut self, point: Point) -> MoveOutcome {
        let dead_zone = self.config.dead_zone;
        let Some(drag) = self.drag.as_mut() else {
            return MoveOutcome::Idle;
        };

        drag.current = point;

        if drag.axis == Axis::Undecided {
            let diff_x = (point.x - drag.origin.x).abs();
            let diff_y = (point.y - drag.origin.y).abs();
            if diff_x > dead_zone || diff_y > dead_zone {
                drag.axis = if diff_x > diff_y {
                    Axis::Horizontal
                } else {
                    Axis::Vertical
                };
                log::debug!("Gesture locked to {:?}", drag.axis);
            }
        }

        match drag.axis {
            Axis::Undecided => MoveOutcome::Pending,
            Axis::Horizontal => MoveOutcome::Preview {
                baseline: drag.baseline,
                delta_x: drag.delta_x(),
            },
            Axis::Vertical => MoveOutcome::PassThrough,
        }
    }

    /// Finish the gesture and decide on the slide change
    pub fn end(&mut self) -> EndOutcome {
        let Some(drag) = self.drag.take() else {
            return EndOutcome::Inert;
        };
        if drag.axis != Axis::Horizontal {
            return EndOutcome::Inert;
        }

        let diff = drag.delta_x();
        let threshold = self.config.swipe_threshold;
        let swipe = if diff < -threshold {
            Swipe::Advance
        } else if diff > threshold {
            Swipe::Retreat
        } else {
            Swipe::Stay
        };
        EndOutcome::Commit(swipe)
    }

    /// Abort the gesture. A horizontal drag still needs to snap back.
    pub fn cancel(&mut self) -> EndOutcome {
        match self.drag.take() {
            Some(drag) if drag.axis == Axis::Horizontal => EndOutcome::Commit(Swipe::Stay),
            _ => EndOutcome::Inert,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn axis(&self) -> Option<Axis> {
        self.drag.as_ref().map(|d| d.axis)
    }
}
