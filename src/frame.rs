use crate::caster::{sensor_bar, Ray, RayCaster, Viewport};
use crate::color::Color;
use crate::config::{Config, ObstacleConfig};
use crate::controls::{self, Command, Effect, PointerMode};
use crate::geometry::Point;
use crate::scene::{Obstacle, Scene};
use crate::state::SimulationState;
use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub obstacles: Vec<Obstacle>,
    pub rays: Vec<Ray>,
    /// Ray colors in fan order
    pub sensor: Vec<Color>,
    pub source: Point,
    pub target: Point,
    pub status: String,
}

/// Frame driver seeded from the thread-local generator, as used by the window
pub type LiveFrame = Frame<ThreadRng>;

/// Owns the scene and parameters and runs one cast per tick
pub struct Frame<R: Rng> {
    pub scene: Scene,
    pub state: SimulationState,
    pub caster: RayCaster,
    obstacle_params: ObstacleConfig,
    pointer_mode: PointerMode,
    pending_regenerate: bool,
    rng: R,
}

impl LiveFrame {
    /// Build a driver backed by `rand::thread_rng`
    pub fn with_thread_rng(config: &Config, viewport: Viewport) -> Self {
        Frame::new(config, viewport, rand::thread_rng())
    }
}

impl<R: Rng> Frame<R> {
    /// Build the driver and generate the first scene
    pub fn new(config: &Config, viewport: Viewport, rng: R) -> Self {
        let mut frame = Frame {
            scene: Scene::new(),
            state: SimulationState::from_config(&config.simulation, &viewport),
            caster: RayCaster::new(viewport).with_falloff(config.lighting.falloff_distance),
            obstacle_params: config.obstacles.clone(),
            pointer_mode: config.simulation.pointer_mode,
            pending_regenerate: false,
            rng,
        };
        frame.regenerate();
        frame
    }

    pub fn viewport(&self) -> Viewport {
        self.caster.viewport
    }

    /// Apply an input command; any regeneration it asks for runs on the next tick
    pub fn handle(&mut self, command: Command) {
        let viewport = self.viewport();
        if controls::apply(&mut self.state, command, self.pointer_mode, &viewport) == Effect::Regenerate {
            debug!("{:?} requested a new scene", command);
            self.pending_regenerate = true;
        }
    }

    pub fn regenerate_pending(&self) -> bool {
        self.pending_regenerate
    }

    fn regenerate(&mut self) {
        let viewport = self.viewport();
        self.scene.regenerate(
            self.state.rect_count,
            self.state.circle_count,
            &viewport,
            &mut self.rng,
            &self.obstacle_params,
        );
        self.pending_regenerate = false;
    }

    /// Run one frame: at most one regeneration, then one full cast
    pub fn tick(&mut self) -> FrameOutput {
        if self.pending_regenerate {
            self.regenerate();
        }

        let rays = self.caster.cast(
            &self.scene,
            self.state.center,
            self.state.target,
            self.state.ray_count,
            self.state.cone_size,
        );

        FrameOutput {
            obstacles: self.scene.obstacles().copied().collect(),
            sensor: sensor_bar(&rays),
            rays,
            source: self.state.center,
            target: self.state.target,
            status: self.state.status_text(),
        }
    }

    /// Current scene as pretty JSON
    pub fn export_scene(&self) -> Result<String, String> {
        self.scene.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn frame() -> Frame<StdRng> {
        Frame::new(&Config::default(), Viewport::new(1280.0, 720.0), StdRng::seed_from_u64(5))
    }

    #[test]
    fn test_startup_generates_scene() {
        let f = frame();
        assert_eq!(f.scene.rects.len(), 5);
        assert_eq!(f.scene.circles.len(), 5);
        assert!(!f.regenerate_pending());
    }

    #[test]
    fn test_tick_output() {
        let mut f = frame();
        let out = f.tick();
        assert_eq!(out.rays.len(), 200);
        assert_eq!(out.sensor.len(), 200);
        assert_eq!(out.obstacles.len(), 10);
        assert_eq!(out.source, Point::new(640.0, 360.0));
        assert!(out.status.contains("Rays: 200"));
    }

    #[test]
    fn test_regeneration_deferred_to_tick() {
        let mut f = frame();
        let before = f.scene.clone();
        f.handle(Command::DoubleRects);
        assert!(f.regenerate_pending());
        assert_eq!(f.scene, before);

        let out = f.tick();
        assert!(!f.regenerate_pending());
        assert_eq!(f.scene.rects.len(), 10);
        assert_eq!(out.obstacles.len(), 15);
    }

    #[test]
    fn test_scene_stable_without_request() {
        let mut f = frame();
        let before = f.scene.clone();
        f.handle(Command::DoubleRays);
        f.handle(Command::Move(Direction::Left));
        f.tick();
        f.tick();
        assert_eq!(f.scene, before);
        assert_eq!(f.state.rays(), 400);
    }

    #[test]
    fn test_thread_rng_frame() {
        let mut f = LiveFrame::with_thread_rng(&Config::default(), Viewport::new(1280.0, 720.0));
        assert_eq!(f.scene.len(), 10);
        f.handle(Command::Regenerate);
        let out = f.tick();
        assert_eq!(out.obstacles.len(), 10);
        assert_eq!(out.rays.len(), 200);
    }

    #[test]
    fn test_export_scene() {
        let f = frame();
        let json = f.export_scene().unwrap();
        assert_eq!(Scene::from_json(&json).unwrap(), f.scene);
    }
}
