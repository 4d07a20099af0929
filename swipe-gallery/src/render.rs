//! Transition renderer: maps slide state to the presentation layer.
//!
//! The presentation contract is small: the track gets an inline
//! `transform` and `transition`, and one thumbnail carries the active class.
//! A [`Frame`] holds exactly that, and a [`Surface`] applies it.
//!
//! Frames come in two kinds:
//! - settled: animated, sitting on a whole slide;
//! - following: instantaneous, carrying the live drag delta.
//!
//! The animation is switched off by the first following frame itself, so a
//! gesture that never moves the track leaves the surface untouched. After a
//! following frame the next [`TransitionRenderer::commit`] is the only way
//! back to an animated track.

use std::time::Duration;

/// Everything the presentation layer needs for one visual state
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,
    /// Live finger offset in px, zero when settled
    pub drag_px: f64,
    /// Transition duration, `None` while following a drag
    pub transition: Option<Duration>,
    pub active_thumbnail: Option<usize>,
}

impl Frame {
    pub fn settled(index: usize, transition: Duration, thumbnail_count: usize) -> Self {
        Self {
            index,
            drag_px: 0.0,
            transition: Some(transition),
            active_thumbnail: (index < thumbnail_count).then_some(index),
        }
    }

    pub fn is_animated(&self) -> bool {
        self.transition.is_some()
    }

    /// Value for the track's inline `transform`
    pub fn track_transform(&self) -> String {
        let offset = self.index * 100;
        if self.is_animated() {
            format!("translateX(-{}%)", offset)
        } else {
            format!("translateX(calc(-{}% + {}px))", offset, self.drag_px)
        }
    }

    /// Value for the track's inline `transition`
    pub fn track_transition(&self) -> String {
        match self.transition {
            Some(duration) => format!("transform {}s ease", duration.as_secs_f64()),
            None => "none".to_string(),
        }
    }

    pub fn thumbnail_is_active(&self, index: usize) -> bool {
        self.active_thumbnail == Some(index)
    }
}

/// Presentation sink for rendered frames
pub trait Surface {
    fn apply(&mut self, frame: &Frame);
}

/// Renders slide state onto a [`Surface`]
#[derive(Debug)]
pub struct TransitionRenderer<S> {
    surface: S,
    transition: Duration,
    thumbnail_count: usize,
    last: Option<Frame>,
}

impl<S: Surface> TransitionRenderer<S> {
    pub fn new(surface: S, transition: Duration, thumbnail_count: usize) -> Self {
        Self {
            surface,
            transition,
            thumbnail_count,
            last: None,
        }
    }

    /// Settle on `index` with the animated transition
    pub fn commit(&mut self, index: usize) {
        let frame = Frame::settled(index, self.transition, self.thumbnail_count);
        self.emit(frame);
    }

    /// Track the finger 1:1 while a drag is undecided about its slide
    pub fn follow(&mut self, index: usize, drag_px: f64) {
        let frame = Frame {
            index,
            drag_px,
            transition: None,
            active_thumbnail: (index < self.thumbnail_count).then_some(index),
        };
        self.emit(frame);
    }

    /// True while the surface shows a live drag that still awaits its commit
    pub fn is_following(&self) -> bool {
        self.last.as_ref().is_some_and(|frame| !frame.is_animated())
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn emit(&mut self, frame: Frame) {
        self.surface.apply(&frame);
        self.last = Some(frame);
    }
}

/// Surface that keeps every frame, used by tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub frames: Vec<Frame>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn apply(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}
