#![allow(dead_code)]

use raylight::{Color, Point, Ray, RayCaster, Scene, Shape, Viewport};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Endpoint tolerance when comparing resolved rays
pub const EPS: f32 = 1e-2;

/// One expected ray in a scenario file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExpectedRay {
    pub end: Point,
    pub color: Color,
    pub hit: bool,
}

/// Cast scenario stored as JSON under test_data/
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioData {
    pub name: String,
    pub viewport: Viewport,
    pub scene: Scene,
    pub source: Point,
    pub target: Point,
    pub ray_count: f32,
    pub cone_size: f32,
    pub expected: Vec<ExpectedRay>,
}

/// Load a scenario from JSON file
pub fn load_scenario(path: &Path) -> Result<ScenarioData, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    let data: ScenarioData = serde_json::from_str(&contents)?;
    Ok(data)
}

/// All scenario files in `dir`, sorted by file name
pub fn load_all(dir: &str) -> Vec<ScenarioData> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .map(|rd| rd.filter_map(Result::ok).collect())
        .unwrap_or_default();
    entries.sort_by_key(|e| e.file_name());

    entries
        .iter()
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .map(|p| load_scenario(&p).unwrap_or_else(|e| panic!("{}: {}", p.display(), e)))
        .collect()
}

fn mirror_scenario(
    data: &ScenarioData,
    suffix: &str,
    point: impl Fn(Point) -> Point,
    shape: impl Fn(Shape) -> Shape,
) -> ScenarioData {
    let mut scene: Scene = data.scene.clone();
    for obstacle in scene.rects.iter_mut().chain(scene.circles.iter_mut()) {
        obstacle.shape = shape(obstacle.shape);
    }

    // Mirroring reverses the winding of the fan
    let expected = data
        .expected
        .iter()
        .rev()
        .map(|e| ExpectedRay {
            end: point(e.end),
            ..e.clone()
        })
        .collect();

    ScenarioData {
        name: format!("{}_{}", data.name, suffix),
        viewport: data.viewport,
        scene,
        source: point(data.source),
        target: point(data.target),
        ray_count: data.ray_count,
        cone_size: data.cone_size,
        expected,
    }
}

/// Mirror left-right across the viewport
pub fn flip_horizontal(data: &ScenarioData) -> ScenarioData {
    let w = data.viewport.width;
    mirror_scenario(
        data,
        "h_flip",
        |p| Point::new(w - p.x, p.y),
        |s| match s {
            Shape::Rect(mut r) => {
                r.x = w - r.x - r.width;
                Shape::Rect(r)
            }
            Shape::Circle(mut c) => {
                c.x = w - c.x;
                Shape::Circle(c)
            }
        },
    )
}

/// Mirror top-bottom across the viewport
pub fn flip_vertical(data: &ScenarioData) -> ScenarioData {
    let h = data.viewport.height;
    mirror_scenario(
        data,
        "v_flip",
        |p| Point::new(p.x, h - p.y),
        |s| match s {
            Shape::Rect(mut r) => {
                r.y = h - r.y - r.height;
                Shape::Rect(r)
            }
            Shape::Circle(mut c) => {
                c.y = h - c.y;
                Shape::Circle(c)
            }
        },
    )
}

/// Cast a scenario and compare against its expectations
pub fn run_scenario(data: &ScenarioData) -> Result<Vec<Ray>, String> {
    let caster = RayCaster::new(data.viewport);
    let rays = caster.cast(&data.scene, data.source, data.target, data.ray_count, data.cone_size);

    if rays.len() != data.expected.len() {
        return Err(format!(
            "{}: expected {} rays, got {}",
            data.name,
            data.expected.len(),
            rays.len()
        ));
    }

    for (i, (ray, expected)) in rays.iter().zip(&data.expected).enumerate() {
        let end = ray.segment.end();
        if (end.x - expected.end.x).abs() > EPS || (end.y - expected.end.y).abs() > EPS {
            return Err(format!(
                "{}: ray {} ends at ({}, {}), expected ({}, {})",
                data.name, i, end.x, end.y, expected.end.x, expected.end.y
            ));
        }
        if ray.segment.start() != data.source {
            return Err(format!("{}: ray {} does not start at the source", data.name, i));
        }
        if ray.color != expected.color || ray.hit != expected.hit {
            return Err(format!(
                "{}: ray {} is {:?} (hit: {}), expected {:?} (hit: {})",
                data.name, i, ray.color, ray.hit, expected.color, expected.hit
            ));
        }
    }

    Ok(rays)
}

/// Run the scenario as written plus its mirrored variants
pub fn run_all_variants(data: &ScenarioData) -> Result<(), String> {
    for variant in [data.clone(), flip_horizontal(data), flip_vertical(data)] {
        run_scenario(&variant)?;
    }
    Ok(())
}
