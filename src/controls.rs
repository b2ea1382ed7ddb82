use crate::caster::Viewport;
use crate::state::{Direction, SimulationState};
use serde::{Deserialize, Serialize};

/// Which point follows the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerMode {
    /// Pointer aims the cone
    #[default]
    Target,
    /// Pointer drags the light source around
    Source,
}

/// Discrete input events, already decoded from whatever the input layer uses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    DoubleRays,
    HalveRays,
    DoubleRects,
    HalveRects,
    DoubleCircles,
    HalveCircles,
    WidenCone,
    NarrowCone,
    Regenerate,
    Move(Direction),
    PointerMoved { x: f32, y: f32 },
}

/// Follow-up work a command asks of the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Regenerate,
}

/// Apply `command` to `state`
///
/// Obstacle count changes and explicit randomize requests ask for a new scene;
/// nothing else does.
pub fn apply(
    state: &mut SimulationState,
    command: Command,
    pointer_mode: PointerMode,
    viewport: &Viewport,
) -> Effect {
    match command {
        Command::DoubleRays => state.double_rays(),
        Command::HalveRays => state.halve_rays(),
        Command::WidenCone => state.widen_cone(),
        Command::NarrowCone => state.narrow_cone(),
        Command::Move(direction) => state.move_center(direction, viewport),
        Command::PointerMoved { x, y } => match pointer_mode {
            PointerMode::Target => state.set_target(x, y),
            PointerMode::Source => state.set_center(x, y),
        },
        Command::DoubleRects => {
            state.double_rects();
            return Effect::Regenerate;
        }
        Command::HalveRects => {
            state.halve_rects();
            return Effect::Regenerate;
        }
        Command::DoubleCircles => {
            state.double_circles();
            return Effect::Regenerate;
        }
        Command::HalveCircles => {
            state.halve_circles();
            return Effect::Regenerate;
        }
        Command::Regenerate => return Effect::Regenerate,
    }
    Effect::None
}
