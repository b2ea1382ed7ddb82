use crate::caster::Viewport;
use crate::config::SimulationConfig;
use crate::geometry::Point;
use crate::scene::floor_count;
use serde::{Deserialize, Serialize};

pub const MIN_CONE_SIZE: f32 = 0.05;
pub const MAX_CONE_SIZE: f32 = 2.0;
/// Upper bound for the ray count so repeated doubling stays castable
pub const MAX_RAY_COUNT: f32 = 65536.0;

/// Direction the source can be nudged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in screen space (y grows downwards)
    pub fn offset(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// Mutable simulation parameters owned by the frame driver
///
/// Counts are stored as floats so that halving below one keeps a 0.5 floor
/// instead of collapsing to zero; they are floored wherever they are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Light source
    pub center: Point,
    /// Point the cone is aimed at
    pub target: Point,
    pub ray_count: f32,
    /// Cone width as a fraction of PI, in [0.05, 2.0]
    pub cone_size: f32,
    pub rect_count: f32,
    pub circle_count: f32,
    pub move_step: f32,
}

fn doubled(value: f32) -> f32 {
    value * 2.0
}

fn halved(value: f32) -> f32 {
    if value < 1.0 {
        0.5
    } else {
        value / 2.0
    }
}

impl SimulationState {
    /// Initial state with the source in the middle of the viewport, aiming right
    pub fn from_config(config: &SimulationConfig, viewport: &Viewport) -> Self {
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        SimulationState {
            center,
            target: Point::new(viewport.width, center.y),
            ray_count: config.ray_count.clamp(0.5, MAX_RAY_COUNT),
            cone_size: config.cone_size.clamp(MIN_CONE_SIZE, MAX_CONE_SIZE),
            rect_count: config.rect_count.max(0.5),
            circle_count: config.circle_count.max(0.5),
            move_step: config.move_step,
        }
    }

    pub fn double_rays(&mut self) {
        self.ray_count = doubled(self.ray_count).min(MAX_RAY_COUNT);
    }

    pub fn halve_rays(&mut self) {
        self.ray_count = halved(self.ray_count);
    }

    pub fn double_rects(&mut self) {
        self.rect_count = doubled(self.rect_count);
    }

    pub fn halve_rects(&mut self) {
        self.rect_count = halved(self.rect_count);
    }

    pub fn double_circles(&mut self) {
        self.circle_count = doubled(self.circle_count);
    }

    pub fn halve_circles(&mut self) {
        self.circle_count = halved(self.circle_count);
    }

    pub fn widen_cone(&mut self) {
        self.cone_size = (self.cone_size * 2.0).clamp(MIN_CONE_SIZE, MAX_CONE_SIZE);
    }

    pub fn narrow_cone(&mut self) {
        self.cone_size = (self.cone_size / 2.0).clamp(MIN_CONE_SIZE, MAX_CONE_SIZE);
    }

    pub fn set_center(&mut self, x: f32, y: f32) {
        self.center.set_to(x, y);
    }

    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target.set_to(x, y);
    }

    /// Nudge the source one step, keeping it on screen
    pub fn move_center(&mut self, direction: Direction, viewport: &Viewport) {
        let (dx, dy) = direction.offset();
        self.center.translate(dx * self.move_step, dy * self.move_step);
        self.center = viewport.clamp(self.center);
    }

    pub fn rays(&self) -> usize {
        floor_count(self.ray_count)
    }

    pub fn rects(&self) -> usize {
        floor_count(self.rect_count)
    }

    pub fn circles(&self) -> usize {
        floor_count(self.circle_count)
    }

    /// Summary of the current parameters and their key bindings
    pub fn status_text(&self) -> String {
        format!(
            "Rays: {} (use W + S to change)\n\
             Cone: {:.2} pi (use R + F to change)\n\
             Randomize Shapes: Spacebar\n\
             Rects: {} (use Q + A to change)\n\
             Circles: {} (use E + D to change)\n\
             Source: ({:.0}, {:.0})  Target: ({:.0}, {:.0})",
            self.rays(),
            self.cone_size,
            self.rects(),
            self.circles(),
            self.center.x,
            self.center.y,
            self.target.x,
            self.target.y
        )
    }
}
