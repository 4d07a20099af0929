//! Per-gallery controller tying state, gestures and rendering together.
//!
//! Every input ends in at most one call into the renderer:
//! - navigation (thumbnails, keys, resize settle) commits directly;
//! - pointer moves of a horizontal gesture emit live frames;
//! - the end of a horizontal gesture commits once, even when the slide
//!   does not change, so the track snaps back and regains its transition.
//!
//! The slide index never changes while a gesture is in flight.

use crate::debounce::Debounce;
use crate::gesture::{EndOutcome, GestureConfig, GestureRecognizer, MoveOutcome, Swipe};
use crate::models::{GalleryConfig, Point};
use crate::navigation::{NavKey, PointerScope};
use crate::render::{Frame, Surface, TransitionRenderer};
use crate::state::SlideIndex;
use web_time::Instant;

/// What the platform should do with the pointer move it just delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResponse {
    /// Suppress native scrolling for this move
    pub prevent_default: bool,
}

/// One gallery instance on the page
#[derive(Debug)]
pub struct GalleryController<S> {
    id: String,
    slides: SlideIndex,
    gesture: GestureRecognizer,
    renderer: TransitionRenderer<S>,
    scope: PointerScope,
    resize: Debounce,
}

impl<S: Surface> GalleryController<S> {
    /// Build a controller and render the first slide.
    ///
    /// Returns `None` when there is nothing to show.
    pub fn new(
        id: impl Into<String>,
        slide_count: usize,
        thumbnail_count: usize,
        surface: S,
        config: &GalleryConfig,
    ) -> Option<Self> {
        let id = id.into();
        let slides = SlideIndex::new(slide_count)?;

        if thumbnail_count != slide_count {
            log::warn!(
                "Gallery {}: {} slides but {} thumbnails",
                id,
                slide_count,
                thumbnail_count
            );
        }

        let mut controller = Self {
            id,
            slides,
            gesture: GestureRecognizer::new(GestureConfig {
                dead_zone: config.dead_zone,
                swipe_threshold: config.swipe_threshold,
            }),
            renderer: TransitionRenderer::new(surface, config.transition, thumbnail_count),
            scope: PointerScope::default(),
            resize: Debounce::new(config.resize_quiet),
        };
        controller.render();
        Some(controller)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn current_index(&self) -> usize {
        self.slides.current()
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_tracking()
    }

    pub fn scope(&self) -> PointerScope {
        self.scope
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.renderer.last_frame()
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// Jump to `index` and settle there. Out-of-range requests are ignored.
    pub fn set_index(&mut self, index: usize) -> bool {
        if self.navigation_blocked() {
            return false;
        }
        if !self.slides.set(index) {
            return false;
        }
        self.render();
        true
    }

    /// Activate thumbnail `index`; re-selecting the current one re-renders
    pub fn select_thumbnail(&mut self, index: usize) -> bool {
        self.set_index(index)
    }

    pub fn next(&mut self) -> bool {
        if self.navigation_blocked() || !self.slides.advance() {
            return false;
        }
        self.render();
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.navigation_blocked() || !self.slides.retreat() {
            return false;
        }
        self.render();
        true
    }

    /// Page-wide key press. Only acted on while this gallery is in scope.
    pub fn key_down(&mut self, key: NavKey) -> bool {
        if !self.scope.is_active() {
            return false;
        }
        match key {
            NavKey::Left => self.previous(),
            NavKey::Right => self.next(),
        }
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.scope.hovered = hovered;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.scope.focused = focused;
    }

    // ---------------------------------------------------------------------
    // Gestures
    // ---------------------------------------------------------------------

    pub fn pointer_down(&mut self, point: Point) {
        // A second touch displaces the running gesture, which still owes its commit
        if self.gesture.is_tracking() {
            let displaced = self.gesture.cancel();
            self.finish_gesture(displaced);
        }
        self.gesture.begin(point, self.slides.current());
    }

    pub fn pointer_move(&mut self, point: Point) -> MoveResponse {
        match self.gesture.update(point) {
            MoveOutcome::Preview { baseline, delta_x } => {
                self.renderer.follow(baseline, delta_x);
                MoveResponse {
                    prevent_default: true,
                }
            }
            MoveOutcome::Idle | MoveOutcome::Pending | MoveOutcome::PassThrough => {
                MoveResponse::default()
            }
        }
    }

    pub fn pointer_up(&mut self) {
        let outcome = self.gesture.end();
        self.finish_gesture(outcome);
    }

    pub fn pointer_cancel(&mut self) {
        let outcome = self.gesture.cancel();
        self.finish_gesture(outcome);
    }

    fn finish_gesture(&mut self, outcome: EndOutcome) {
        match outcome {
            EndOutcome::Inert => debug_assert!(!self.renderer.is_following()),
            EndOutcome::Commit(swipe) => {
                let changed = match swipe {
                    Swipe::Advance => self.slides.advance(),
                    Swipe::Retreat => self.slides.retreat(),
                    Swipe::Stay => false,
                };
                log::debug!(
                    "Gallery {}: swipe {:?} -> slide {} (changed: {})",
                    self.id,
                    swipe,
                    self.slides.current(),
                    changed
                );
                self.render();
            }
        }
    }

    // ---------------------------------------------------------------------
    // Resize settling
    // ---------------------------------------------------------------------

    /// Note a viewport resize; the settle render waits for the burst to end
    pub fn resize(&mut self, now: Instant) {
        self.resize.schedule(now);
    }

    pub fn settle_deadline(&self) -> Option<Instant> {
        self.resize.deadline()
    }

    /// Render the settle frame if the quiet period has passed.
    ///
    /// A settle that comes due mid-gesture is re-armed for another quiet
    /// period instead of firing.
    pub fn poll_settle(&mut self, now: Instant) -> bool {
        if !self.resize.poll(now) {
            return false;
        }
        if self.navigation_blocked() {
            log::debug!("Gallery {}: settle deferred during drag", self.id);
            self.resize.schedule(now);
            return false;
        }
        self.render();
        true
    }

    fn navigation_blocked(&self) -> bool {
        self.gesture.is_tracking()
    }

    fn render(&mut self) {
        self.renderer.commit(self.slides.current());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;
    use std::time::Duration;

    fn controller(slides: usize) -> GalleryController<RecordingSurface> {
        GalleryController::new(
            "wc-gallery-test",
            slides,
            slides,
            RecordingSurface::default(),
            &GalleryConfig::default(),
        )
        .unwrap()
    }

    fn frames(c: &GalleryController<RecordingSurface>) -> &[Frame] {
        &c.surface().frames
    }

    fn drag(c: &mut GalleryController<RecordingSurface>, path: &[(f64, f64)]) {
        c.pointer_down(Point::new(200.0, 300.0));
        for (dx, dy) in path {
            c.pointer_move(Point::new(200.0 + dx, 300.0 + dy));
        }
        c.pointer_up();
    }

    fn assert_invariants(c: &GalleryController<RecordingSurface>) {
        assert!(c.current_index() < c.slide_count());
        let frame = c.last_frame().unwrap();
        let active: Vec<usize> = (0..c.slide_count())
            .filter(|i| frame.thumbnail_is_active(*i))
            .collect();
        assert_eq!(active, vec![c.current_index()]);
    }

    #[test]
    fn test_empty_gallery_not_constructed() {
        let c = GalleryController::new(
            "empty",
            0,
            0,
            RecordingSurface::default(),
            &GalleryConfig::default(),
        );
        assert!(c.is_none());
    }

    #[test]
    fn test_initial_render() {
        let c = controller(3);
        assert_eq!(frames(&c).len(), 1);
        assert_eq!(frames(&c)[0].track_transform(), "translateX(-0%)");
        assert!(frames(&c)[0].thumbnail_is_active(0));
    }

    #[test]
    fn test_swipe_advances() {
        let mut c = controller(4);
        drag(&mut c, &[(-5.0, 0.0), (-20.0, 0.0), (-60.0, 0.0), (-80.0, 0.0)]);

        assert_eq!(c.current_index(), 1);
        let last = c.last_frame().unwrap();
        assert!(last.is_animated());
        assert_eq!(last.track_transform(), "translateX(-100%)");
        assert!(last.thumbnail_is_active(1));
        assert_invariants(&c);

        // initial + 3 live frames + 1 commit
        assert_eq!(frames(&c).len(), 5);
        assert_eq!(
            frames(&c)[3].track_transform(),
            "translateX(calc(-0% + -80px))"
        );
    }

    #[test]
    fn test_thumbnail_click() {
        let mut c = controller(4);
        assert!(c.select_thumbnail(2));
        assert_eq!(c.current_index(), 2);
        assert_eq!(frames(&c).len(), 2);
        assert!(frames(&c)[1].is_animated());
        assert_invariants(&c);

        // Re-selecting is an idempotent re-render
        assert!(c.select_thumbnail(2));
        assert_eq!(frames(&c).len(), 3);
        assert_eq!(frames(&c)[1], frames(&c)[2]);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut c = controller(3);
        assert!(!c.set_index(3));
        assert!(!c.select_thumbnail(99));
        assert_eq!(c.current_index(), 0);
        assert_eq!(frames(&c).len(), 1);
    }

    #[test]
    fn test_threshold_symmetry() {
        for (diff, expected) in [(-51.0, 2), (51.0, 0), (-49.0, 1), (49.0, 1), (-50.0, 1)] {
            let mut c = controller(4);
            c.set_index(1);
            drag(&mut c, &[(diff, 0.0)]);
            assert_eq!(c.current_index(), expected, "diff {}", diff);
            assert!(c.last_frame().unwrap().is_animated());
        }
    }

    #[test]
    fn test_rubber_band_at_bounds() {
        let mut c = controller(3);
        let before = frames(&c).len();
        drag(&mut c, &[(120.0, 0.0)]);
        assert_eq!(c.current_index(), 0);
        // one live frame, one commit
        assert_eq!(frames(&c).len(), before + 2);
        assert!(c.last_frame().unwrap().is_animated());

        c.set_index(2);
        drag(&mut c, &[(-120.0, 0.0)]);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.last_frame().unwrap().track_transform(), "translateX(-200%)");
    }

    #[test]
    fn test_dead_zone_gesture_is_no_op() {
        let mut c = controller(3);
        drag(&mut c, &[(4.0, 3.0), (-10.0, 10.0), (7.0, -2.0)]);
        assert_eq!(c.current_index(), 0);
        assert_eq!(frames(&c).len(), 1);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_vertical_pass_through() {
        let mut c = controller(3);
        c.pointer_down(Point::new(0.0, 0.0));
        let response = c.pointer_move(Point::new(2.0, 40.0));
        assert!(!response.prevent_default);
        // sideways motion after the lock does not take over
        let response = c.pointer_move(Point::new(-200.0, 45.0));
        assert!(!response.prevent_default);
        c.pointer_up();

        assert_eq!(c.current_index(), 0);
        assert_eq!(frames(&c).len(), 1);
    }

    #[test]
    fn test_horizontal_prevents_default() {
        let mut c = controller(3);
        c.pointer_down(Point::new(0.0, 0.0));
        assert!(!c.pointer_move(Point::new(-5.0, 0.0)).prevent_default);
        assert!(c.pointer_move(Point::new(-30.0, 2.0)).prevent_default);
        c.pointer_cancel();
        assert_eq!(c.current_index(), 0);
        assert!(c.last_frame().unwrap().is_animated());
    }

    #[test]
    fn test_index_frozen_during_drag() {
        let mut c = controller(3);
        c.set_hovered(true);
        c.pointer_down(Point::new(0.0, 0.0));
        c.pointer_move(Point::new(-30.0, 0.0));
        assert!(!c.key_down(NavKey::Right));
        assert!(!c.select_thumbnail(2));
        assert_eq!(c.current_index(), 0);
        c.pointer_up();
        assert!(c.key_down(NavKey::Right));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_keyboard_requires_scope() {
        let mut a = controller(3);
        let mut b = controller(3);
        a.set_hovered(true);
        assert!(a.scope().is_active());
        assert!(!b.scope().is_active());

        for c in [&mut a, &mut b] {
            c.key_down(NavKey::Right);
        }
        assert_eq!(a.current_index(), 1);
        assert_eq!(b.current_index(), 0);
        assert_eq!(frames(&b).len(), 1);

        a.set_hovered(false);
        b.set_focused(true);
        for c in [&mut a, &mut b] {
            c.key_down(NavKey::Left);
        }
        assert_eq!(a.current_index(), 1);
        assert_eq!(b.current_index(), 0);
    }

    #[test]
    fn test_keyboard_clamps() {
        let mut c = controller(2);
        c.set_focused(true);
        assert!(!c.key_down(NavKey::Left));
        assert!(c.key_down(NavKey::Right));
        assert!(!c.key_down(NavKey::Right));
        assert_eq!(c.current_index(), 1);
        assert_eq!(frames(&c).len(), 2);
    }

    #[test]
    fn test_resize_settles_once() {
        let mut c = controller(3);
        c.set_index(1);
        let start = Instant::now();
        let before = frames(&c).len();

        for step in 0..8u64 {
            let now = start + Duration::from_millis(step * 30);
            c.resize(now);
            assert!(!c.poll_settle(now));
        }
        let last = start + Duration::from_millis(210);
        assert_eq!(c.settle_deadline(), Some(last + Duration::from_millis(250)));
        assert!(!c.poll_settle(last + Duration::from_millis(249)));
        assert!(c.poll_settle(last + Duration::from_millis(250)));
        assert!(!c.poll_settle(last + Duration::from_secs(1)));

        assert_eq!(frames(&c).len(), before + 1);
        assert_eq!(c.last_frame().unwrap().track_transform(), "translateX(-100%)");
    }

    #[test]
    fn test_second_touch_settles_displaced_swipe() {
        let mut c = controller(3);
        c.pointer_down(Point::new(200.0, 100.0));
        c.pointer_move(Point::new(120.0, 100.0));
        let before = frames(&c).len();

        c.pointer_down(Point::new(300.0, 100.0));
        // the displaced drag snaps back right away
        assert_eq!(frames(&c).len(), before + 1);
        assert!(c.is_dragging());
        c.pointer_up();

        assert!(!c.is_dragging());
        assert_eq!(c.current_index(), 0);
        let last = c.last_frame().unwrap();
        assert!(last.is_animated());
        assert_eq!(last.track_transform(), "translateX(-0%)");
        assert_eq!(frames(&c).len(), before + 1);
    }

    #[test]
    fn test_second_touch_after_vertical_emits_nothing() {
        let mut c = controller(3);
        c.pointer_down(Point::new(0.0, 0.0));
        c.pointer_move(Point::new(1.0, 60.0));
        c.pointer_down(Point::new(0.0, 0.0));
        c.pointer_up();
        assert_eq!(frames(&c).len(), 1);
    }

    #[test]
    fn test_resize_due_during_vertical_drag_settles_later() {
        let mut c = controller(3);
        let start = Instant::now();
        let quiet = Duration::from_millis(250);
        let before = frames(&c).len();

        c.resize(start);
        c.pointer_down(Point::new(0.0, 0.0));
        c.pointer_move(Point::new(1.0, 60.0));
        assert!(!c.poll_settle(start + quiet));
        assert_eq!(c.settle_deadline(), Some(start + quiet * 2));
        c.pointer_up();

        assert!(!c.poll_settle(start + quiet + Duration::from_millis(100)));
        assert!(c.poll_settle(start + quiet * 2));
        assert_eq!(c.settle_deadline(), None);
        assert_eq!(frames(&c).len(), before + 1);
        assert!(c.last_frame().unwrap().is_animated());
    }

    #[test]
    fn test_invariants_under_mixed_input() {
        let mut c = controller(4);
        c.set_hovered(true);
        for round in 0..40usize {
            match (round * 7 + 3) % 6 {
                0 => drag(&mut c, &[(-90.0, 0.0)]),
                1 => drag(&mut c, &[(90.0, 3.0)]),
                2 => {
                    c.key_down(NavKey::Right);
                }
                3 => {
                    c.key_down(NavKey::Left);
                }
                4 => {
                    c.select_thumbnail(3);
                }
                _ => drag(&mut c, &[(0.0, 90.0)]),
            }
            assert_invariants(&c);
        }
    }
}
