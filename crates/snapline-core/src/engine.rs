//! The alignment engine: gesture state machine driving the matchers.

use crate::cache::GeometryCache;
use crate::config::GuideConfig;
use crate::error::AlignResult;
use crate::guides::GuideRegistry;
use crate::input::{CanvasEvent, TransformAction, TransformEvent};
use crate::matcher::{candidate_pool, snap_transform, snap_translation};
use crate::render::GuideRenderer;
use crate::scene::SnapScene;
use crate::shapes::ShapeId;

/// What the engine is currently tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        target: ShapeId,
    },
    Transforming {
        target: ShapeId,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Shape under gesture.
    pub fn target(&self) -> Option<ShapeId> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging { target } | GestureState::Transforming { target } => {
                Some(*target)
            }
        }
    }
}

/// Smart guides for one canvas.
///
/// Holds only its configuration and per-gesture state; the scene and the
/// overlay renderer are handed in with each event. Hosts that deliver
/// events from several threads wrap the whole engine in one `Mutex`.
#[derive(Debug, Default)]
pub struct AlignmentGuides {
    config: GuideConfig,
    cache: GeometryCache,
    registry: GuideRegistry,
    state: GestureState,
}

impl AlignmentGuides {
    /// Create an engine after validating `config`.
    pub fn new(config: GuideConfig) -> AlignResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Guides found for the current frame.
    pub fn registry(&self) -> &GuideRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }

    /// Snapping tolerance in canvas units at the scene's current zoom.
    pub fn margin<S: SnapScene>(&self, scene: &S) -> f64 {
        scene.world_tolerance(self.config.margin)
    }

    /// Dispatch a host event.
    pub fn handle_event<S, R>(&mut self, scene: &mut S, renderer: &mut R, event: &CanvasEvent)
    where
        S: SnapScene,
        R: GuideRenderer + ?Sized,
    {
        match event {
            CanvasEvent::Moving { target } => self.on_moving(scene, *target),
            CanvasEvent::Scaling(e) => self.on_transform(scene, e),
            CanvasEvent::Resizing(e) => self.on_transform(
                scene,
                &TransformEvent {
                    action: TransformAction::Resize,
                    ..*e
                },
            ),
            CanvasEvent::BeforeRender => self.before_render(renderer),
            CanvasEvent::AfterRender => self.after_render(renderer, scene.zoom()),
            CanvasEvent::MouseUp => self.on_mouse_up(scene),
        }
    }

    /// The host moved `target`: snap it and replace the current guides.
    pub fn on_moving<S: SnapScene>(&mut self, scene: &mut S, target: ShapeId) {
        let state = GestureState::Dragging { target };
        if self.state != state {
            log::debug!("drag started on {target}");
            self.state = state;
        }
        self.registry.clear();

        let pool = candidate_pool(scene, &mut self.cache, target, self.config.snap_to_canvas);
        let margin = self.margin(scene);
        match snap_translation(scene, &mut self.cache, target, &pool, margin) {
            Ok(guides) => self.registry.extend(guides),
            Err(err) => log::warn!("move snapping skipped: {err}"),
        }
    }

    /// The host scaled or resized a shape through one of its handles.
    pub fn on_transform<S: SnapScene>(&mut self, scene: &mut S, event: &TransformEvent) {
        let state = GestureState::Transforming {
            target: event.target,
        };
        if self.state != state {
            log::debug!("transform started on {} from {:?}", event.target, event.corner);
            self.state = state;
        }
        self.registry.clear();

        let uniform =
            scene.uniform_scaling() ^ self.config.uni_scale_key.is_pressed(&event.modifiers);
        let pool = candidate_pool(
            scene,
            &mut self.cache,
            event.target,
            self.config.snap_to_canvas,
        );
        let margin = self.margin(scene);
        let config = &self.config;
        match snap_transform(scene, event, &pool, margin, uniform, |corner| {
            config.origin_for(corner)
        }) {
            Ok(snap) => {
                self.registry.set_point_only(snap.point_only);
                self.registry.extend(snap.guides);
            }
            Err(err) => log::warn!("transform snapping skipped: {err}"),
        }
    }

    /// Clear the overlay before the host paints.
    pub fn before_render<R: GuideRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.clear_overlay();
    }

    /// Draw the current guides on top of the painted scene.
    pub fn after_render<R: GuideRenderer + ?Sized>(&self, renderer: &mut R, zoom: f64) {
        if self.state.is_idle() {
            return;
        }
        let close_v = self.config.close_v_line;
        let close_h = self.config.close_h_line;

        if self.registry.is_point_only() {
            let points = self.registry.points(close_v, close_h);
            if !points.is_empty() {
                renderer.draw_points(&points, zoom);
            }
            return;
        }
        if !close_v {
            for line in self.registry.vertical() {
                renderer.draw_vertical_line(line, zoom);
            }
        }
        if !close_h {
            for line in self.registry.horizontal() {
                renderer.draw_horizontal_line(line, zoom);
            }
        }
    }

    /// Pointer released: drop guides and cached geometry, repaint once more.
    pub fn on_mouse_up<S: SnapScene>(&mut self, scene: &mut S) {
        if let Some(target) = self.state.target() {
            log::debug!("gesture on {target} ended");
        }
        self.registry.clear();
        self.cache.clear();
        scene.request_render();
        self.state = GestureState::Idle;
    }
}
