pub mod caster;
pub mod color;
pub mod config;
pub mod controls;
pub mod frame;
pub mod geometry;
pub mod intersect;
pub mod scene;
pub mod state;

pub use caster::{Ray, RayCaster, Viewport};
pub use color::Color;
pub use config::Config;
pub use controls::{Command, PointerMode};
pub use frame::{Frame, FrameOutput, LiveFrame};
pub use geometry::{Circle, LineSegment, Point, Rect};
pub use scene::{Obstacle, Scene, Shape};
pub use state::{Direction, SimulationState};
