//! Canvas state and pointer/key handling

use crate::clock::AnimationClock;
use crate::geom::{Color, Fleck, Point, Segment};
use crate::platform::{InputEvent, Key, MouseButton, ScrollDirection};
use crate::settings::Settings;

use super::collision::{self, CollisionResult, ShapeKind};
use super::trail::{Trail, pointer_color};
use super::view::View;

/// Flecks placed on a fresh canvas
pub fn default_flecks() -> Vec<Fleck> {
    vec![
        Fleck::new(30.0, 30.0, 20.0),
        Fleck::new(300.0, 300.0, 50.0),
        Fleck::new(500.0, 200.0, 40.0),
        Fleck::new(40.0, 50.0, 25.0),
        Fleck::new(240.0, 320.0, 30.0),
        Fleck::new(580.0, 270.0, 45.0),
    ]
}

/// Segments placed on a fresh canvas
pub fn default_segments() -> Vec<Segment> {
    vec![
        Segment::new(Point::new(100.0, 100.0), Point::new(200.0, 140.0)),
        Segment::new(Point::new(400.0, 60.0), Point::new(420.0, 180.0)),
        Segment::new(Point::new(80.0, 420.0), Point::new(260.0, 400.0)),
    ]
}

/// Everything the fleck canvas knows
#[derive(Debug, Clone)]
pub struct CanvasState {
    pub flecks: Vec<Fleck>,
    pub segments: Vec<Segment>,
    pub trail: Trail,
    pub view: View,
    pub clock: AnimationClock,
    /// Active grab (none unless a drag is in progress)
    pub collision: CollisionResult,
    /// Last pointer position (world)
    pub pointer: Point,
    /// Current pointer color
    pub pointer_color: Color,
    settings: Settings,
}

impl CanvasState {
    /// Canvas with the default shapes
    pub fn new(settings: &Settings) -> Self {
        Self::with_shapes(default_flecks(), default_segments(), settings)
    }

    pub fn with_shapes(flecks: Vec<Fleck>, segments: Vec<Segment>, settings: &Settings) -> Self {
        Self {
            flecks,
            segments,
            trail: Trail::new(settings.effective_trail_length()),
            view: View::default(),
            clock: settings.animation_clock(),
            collision: CollisionResult::default(),
            pointer: Point::ZERO,
            pointer_color: Color::GRAY,
            settings: settings.clone(),
        }
    }

    /// Hit-test a screen position against the canvas shapes
    pub fn hit_test_screen(&self, screen: Point) -> CollisionResult {
        self.hit_test_world(self.view.to_world(screen))
    }

    pub fn hit_test_world(&self, world: Point) -> CollisionResult {
        collision::hit_test(world, &self.flecks, &self.segments, self.settings.pick_radius)
    }

    pub fn is_dragging(&self) -> bool {
        self.collision.is_hit()
    }

    /// Route one input event. Returns true when a redraw is needed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Press { pos, button } => self.on_press(pos, button),
            InputEvent::Motion { pos } => self.on_motion(pos),
            InputEvent::Release { pos, button } => self.on_release(pos, button),
            InputEvent::Scroll { pos, direction } => self.on_scroll(pos, direction),
            InputEvent::Key(key) => self.on_key(key),
        }
    }

    /// Advance the animation by one timer tick
    pub fn animate(&mut self) -> bool {
        self.clock.tick()
    }

    fn on_press(&mut self, pos: Point, button: MouseButton) -> bool {
        if button != MouseButton::Primary {
            return false;
        }
        let world = self.view.to_world(pos);
        self.pointer = world;
        self.collision = self.hit_test_world(world);

        match self.collision.hit() {
            Some(hit) => {
                log::debug!("Grab {:?} #{} {:?}", hit.kind, hit.index, hit.sub);
            }
            None => self.view.begin_pan(pos),
        }
        true
    }

    fn on_motion(&mut self, pos: Point) -> bool {
        let world = self.view.to_world(pos);
        self.pointer = world;
        self.trail.record(world);

        if self.collision.is_hit() {
            self.drag_to(world);
        } else if self.view.is_panning() {
            self.view.drag_pan(pos);
        }

        let hovering = collision::hit_fleck(world, &self.flecks).is_some();
        self.pointer_color = pointer_color(hovering, self.settings.hover_color);
        true
    }

    fn on_release(&mut self, pos: Point, button: MouseButton) -> bool {
        if button != MouseButton::Primary {
            return false;
        }
        let world = self.view.to_world(pos);
        self.pointer = world;
        if self.collision.is_hit() {
            self.drag_to(world);
            self.collision = CollisionResult::None;
        }
        self.view.end_pan(pos);
        true
    }

    fn on_scroll(&mut self, pos: Point, direction: ScrollDirection) -> bool {
        let world = self.view.to_world(pos);
        if let Some(hit) = collision::hit_fleck(world, &self.flecks) {
            let delta = match direction {
                ScrollDirection::Up => self.settings.fleck_radius_step,
                ScrollDirection::Down => -self.settings.fleck_radius_step,
            };
            if let Some(fleck) = self.flecks.get_mut(hit.index) {
                fleck.resize(delta, self.settings.fleck_min_radius);
            }
            return true;
        }

        let factor = match direction {
            ScrollDirection::Up => self.settings.zoom_step,
            ScrollDirection::Down => 1.0 / self.settings.zoom_step,
        };
        self.view
            .zoom_at(pos, factor, self.settings.zoom_min, self.settings.zoom_max);
        true
    }

    fn on_key(&mut self, key: Key) -> bool {
        match key {
            Key::ResetView => {
                self.view.reset();
                true
            }
            _ => self.clock.apply_key(key),
        }
    }

    /// Move the grabbed shape so its origin sits at `world + offset`
    fn drag_to(&mut self, world: Point) {
        let Some(hit) = self.collision.hit().copied() else {
            return;
        };
        let origin = hit.origin_for(world);
        match hit.kind {
            ShapeKind::Fleck => {
                if let Some(fleck) = self.flecks.get_mut(hit.index) {
                    fleck.set_center(origin);
                }
            }
            ShapeKind::Segment => {
                if let (Some(segment), Some(sub)) = (self.segments.get_mut(hit.index), hit.sub) {
                    segment.set_handle(sub, origin);
                }
            }
            ShapeKind::Brick | ShapeKind::Paddle => {}
        }
    }
}
