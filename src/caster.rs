use crate::color::{Color, BLACK};
use crate::geometry::{LineSegment, Point};
use crate::scene::{floor_count, Scene};
use log::trace;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Distance at which a lit ray fades to black
pub const DEFAULT_FALLOFF_DISTANCE: f32 = 800.0;

/// Screen area the scene lives in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Viewport { width, height }
    }

    /// Length of the diagonal; any ray this long leaves the screen
    pub fn max_distance(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    /// Clamp a point onto the screen rectangle
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(0.0, self.width.max(0.0)),
            p.y.clamp(0.0, self.height.max(0.0)),
        )
    }
}

/// A resolved ray and the light it carries back
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub segment: LineSegment,
    pub color: Color,
    /// Whether the ray stopped on an obstacle
    pub hit: bool,
}

/// Casts fans of rays through a scene
#[derive(Debug, Clone)]
pub struct RayCaster {
    pub viewport: Viewport,
    pub falloff_distance: f32,
}

impl RayCaster {
    pub fn new(viewport: Viewport) -> Self {
        RayCaster {
            viewport,
            falloff_distance: DEFAULT_FALLOFF_DISTANCE,
        }
    }

    pub fn with_falloff(mut self, falloff_distance: f32) -> Self {
        self.falloff_distance = falloff_distance;
        self
    }

    /// Angles of a fan of `floor(ray_count)` rays centred on the direction to `target`
    ///
    /// The fan spans `cone_fraction * PI` radians, first ray at the left edge and
    /// last ray at the right edge, spaced `cone / (n - 1)` apart. At a fraction
    /// of 2 the edges coincide. A single ray points straight at `target`.
    pub fn ray_angles(&self, source: Point, target: Point, ray_count: f32, cone_fraction: f32) -> Vec<f32> {
        let count = floor_count(ray_count);
        let target_angle = source.angle_to(target);
        let cone = cone_fraction * PI;

        match count {
            0 => Vec::new(),
            1 => vec![target_angle],
            n => {
                let step = cone / (n - 1) as f32;
                (0..n)
                    .map(|i| step * i as f32 + target_angle - cone / 2.0)
                    .collect()
            }
        }
    }

    /// Shorten `ray` to the nearest obstacle it meets
    ///
    /// Each obstacle is tested against the ray as it stands, so a hit only
    /// replaces the endpoint when it is strictly closer to `source`. Returns the
    /// color of the obstacle that was hit last, i.e. the nearest one.
    pub fn resolve(&self, ray: &mut LineSegment, source: Point, scene: &Scene) -> Option<Color> {
        let mut hit_color = None;
        let mut current = source.distance_to(ray.end());

        for obstacle in scene.obstacles() {
            let nearest = obstacle
                .shape
                .intersect(ray)
                .into_iter()
                .map(|p| (p, source.distance_to(p)))
                .fold(None, |best: Option<(Point, f32)>, (p, d)| match best {
                    Some((_, best_d)) if best_d <= d => best,
                    _ => Some((p, d)),
                });

            if let Some((point, dist)) = nearest {
                if dist < current {
                    ray.set_end(point);
                    current = dist;
                    hit_color = Some(obstacle.color);
                }
            }
        }

        hit_color
    }

    /// Light returned from a surface of color `base` at `distance`
    ///
    /// The darken percentage climbs linearly from -50 (brightened) close to the
    /// source up to 100 at the falloff distance, where the ray is black.
    ///
    /// The ratio is taken in f64 so round distances land on whole percentages.
    pub fn falloff_color(&self, base: Color, distance: f32) -> Color {
        let ratio = (2.0 * (distance as f64 / self.falloff_distance as f64) - 1.0).clamp(-0.5, 1.0);
        if ratio >= 1.0 {
            BLACK
        } else {
            base.darken((100.0 * ratio).floor() as i32)
        }
    }

    /// Cast a fan of rays from `source` towards `target` and resolve them against `scene`
    ///
    /// Results are in fan order, left edge first.
    pub fn cast(
        &self,
        scene: &Scene,
        source: Point,
        target: Point,
        ray_count: f32,
        cone_fraction: f32,
    ) -> Vec<Ray> {
        let max_dist = self.viewport.max_distance();

        let rays: Vec<Ray> = self
            .ray_angles(source, target, ray_count, cone_fraction)
            .into_iter()
            .map(|angle| {
                let end = Point::new(
                    source.x + max_dist * angle.cos(),
                    source.y + max_dist * angle.sin(),
                );
                let mut segment = LineSegment::from_points(source, end);

                match self.resolve(&mut segment, source, scene) {
                    Some(base) => Ray {
                        color: self.falloff_color(base, segment.length()),
                        segment,
                        hit: true,
                    },
                    None => Ray {
                        segment,
                        color: BLACK,
                        hit: false,
                    },
                }
            })
            .collect();

        trace!(
            "Cast {} rays against {} obstacles, {} hits",
            rays.len(),
            scene.len(),
            rays.iter().filter(|r| r.hit).count()
        );

        rays
    }
}

/// Per-ray colors in fan order, for the sensor bar strip
pub fn sensor_bar(rays: &[Ray]) -> Vec<Color> {
    rays.iter().map(|r| r.color).collect()
}
