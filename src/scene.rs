use crate::caster::Viewport;
use crate::color::Color;
use crate::config::ObstacleConfig;
use crate::geometry::{Circle, LineSegment, Point, Rect};
use crate::intersect::{line_to_circle, line_to_rect};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Geometry of a single obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect(Rect),
    Circle(Circle),
}

impl Shape {
    /// Intersection points between `line` and this shape's outline
    pub fn intersect(&self, line: &LineSegment) -> Vec<Point> {
        match self {
            Shape::Rect(rect) => line_to_rect(line, rect),
            Shape::Circle(circle) => line_to_circle(line, circle),
        }
    }
}

/// A tinted shape that blocks rays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub shape: Shape,
    pub color: Color,
}

impl Obstacle {
    pub fn new(shape: Shape, color: Color) -> Self {
        Obstacle { shape, color }
    }
}

/// All obstacles rays are cast against
///
/// Rectangles and circles are kept in separate lists, each in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub rects: Vec<Obstacle>,
    pub circles: Vec<Obstacle>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push(Obstacle::new(Shape::Rect(rect), color));
    }

    pub fn push_circle(&mut self, circle: Circle, color: Color) {
        self.circles.push(Obstacle::new(Shape::Circle(circle), color));
    }

    /// Rectangles first, then circles
    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.rects.iter().chain(self.circles.iter())
    }

    pub fn len(&self) -> usize {
        self.rects.len() + self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.circles.is_empty()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.circles.clear();
    }

    /// Replace every obstacle with a freshly randomized set
    ///
    /// Counts are floored. Sizes follow `floor(u^3 * size_span + size_min)`, which
    /// favours small shapes while still producing the odd large one.
    pub fn regenerate<R: Rng + ?Sized>(
        &mut self,
        rect_count: f32,
        circle_count: f32,
        viewport: &Viewport,
        rng: &mut R,
        params: &ObstacleConfig,
    ) {
        self.clear();

        for _ in 0..floor_count(rect_count) {
            let width = random_size(rng, params);
            let height = random_size(rng, params);
            let x = random_offset(rng, viewport.width - width);
            let y = random_offset(rng, viewport.height - height);
            let color = Color::random(rng, params.min_brightness);
            self.push_rect(Rect::new(x, y, width, height), color);
        }

        for _ in 0..floor_count(circle_count) {
            let radius = random_size(rng, params);
            let x = random_offset(rng, viewport.width - radius);
            let y = random_offset(rng, viewport.height - radius);
            let color = Color::random(rng, params.min_brightness);
            self.push_circle(Circle::new(x, y, radius), color);
        }

        debug!(
            "Regenerated scene: {} rects, {} circles in {}x{}",
            self.rects.len(),
            self.circles.len(),
            viewport.width,
            viewport.height
        );
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize scene: {}", e))
    }

    /// Parse a scene from JSON
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse scene: {}", e))
    }
}

/// Floor a fractional count; negative and NaN counts give zero
pub(crate) fn floor_count(count: f32) -> usize {
    if count.is_nan() || count < 1.0 {
        0
    } else {
        count.floor() as usize
    }
}

fn random_size<R: Rng + ?Sized>(rng: &mut R, params: &ObstacleConfig) -> f32 {
    let u: f32 = rng.gen();
    (u.powi(3) * params.size_span + params.size_min).floor()
}

/// Uniform integer offset in [0, span); a non-positive span pins to 0
fn random_offset<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    let u: f32 = rng.gen();
    (u * span.max(0.0)).floor()
}
