use arboard::Clipboard;
use env_logger::Env;
use log::{error, info, warn, LevelFilter};
use macroquad::prelude::*;
use raylight::{Command, Config, Direction, FrameOutput, LiveFrame, Shape, Viewport};
use std::sync::OnceLock;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Keys mapped to one-shot commands, fired on release
const KEY_BINDINGS: [(KeyCode, Command); 9] = [
    (KeyCode::W, Command::DoubleRays),
    (KeyCode::S, Command::HalveRays),
    (KeyCode::Q, Command::DoubleRects),
    (KeyCode::A, Command::HalveRects),
    (KeyCode::E, Command::DoubleCircles),
    (KeyCode::D, Command::HalveCircles),
    (KeyCode::R, Command::WidenCone),
    (KeyCode::F, Command::NarrowCone),
    (KeyCode::Space, Command::Regenerate),
];

/// Keys that move the source every frame while held
const MOVE_BINDINGS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

/// Configuration shared by the window setup and the main loop, read once
fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config = Config::load();
        apply_log_level(&config);
        config
    })
}

// Runs before `main`, so logging has to be up here
fn window_conf() -> Conf {
    init_logging();
    let config = config();
    Conf {
        window_title: config.visual.window_title.clone(),
        window_width: config.viewport.width as i32,
        window_height: config.viewport.height as i32,
        ..Default::default()
    }
}

fn to_screen_color(c: raylight::Color) -> Color {
    Color::from_rgba(c.r, c.g, c.b, 255)
}

/// Collect the commands produced by this frame's input
fn poll_input(last_mouse: &mut (f32, f32)) -> Vec<Command> {
    let mut commands: Vec<Command> = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_released(*key))
        .map(|(_, cmd)| *cmd)
        .collect();

    commands.extend(
        MOVE_BINDINGS
            .iter()
            .filter(|(key, _)| is_key_down(*key))
            .map(|(_, dir)| Command::Move(*dir)),
    );

    let mouse = mouse_position();
    if mouse != *last_mouse {
        *last_mouse = mouse;
        commands.push(Command::PointerMoved { x: mouse.0, y: mouse.1 });
    }

    commands
}

fn copy_scene_to_clipboard(frame: &LiveFrame) {
    let json = match frame.export_scene() {
        Ok(json) => json,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    match Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(e) = clipboard.set_text(json) {
                warn!("Failed to copy to clipboard: {}", e);
            } else {
                info!("Scene copied to clipboard");
                // Keep clipboard alive for a moment so clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
            }
        }
        Err(e) => warn!("Failed to access clipboard: {}", e),
    }
}

fn draw(out: &FrameOutput, config: &Config) {
    let visual = &config.visual;
    clear_background(Color::from_rgba(
        visual.background_r,
        visual.background_g,
        visual.background_b,
        255,
    ));

    for ray in &out.rays {
        let s = &ray.segment;
        draw_line(s.x1, s.y1, s.x2, s.y2, visual.line_width, to_screen_color(ray.color));
    }

    for obstacle in &out.obstacles {
        let color = to_screen_color(obstacle.color);
        match obstacle.shape {
            Shape::Rect(r) => draw_rectangle_lines(r.x, r.y, r.width, r.height, visual.line_width, color),
            Shape::Circle(c) => draw_circle_lines(c.x, c.y, c.radius, visual.line_width, color),
        }
    }

    draw_circle(out.source.x, out.source.y, visual.marker_radius, BLUE);
    draw_circle_lines(out.target.x, out.target.y, visual.marker_radius / 2.0, 2.0, WHITE);

    if visual.show_sensor_bar && !out.sensor.is_empty() {
        let bar_y = screen_height() - visual.sensor_bar_height;
        let cell = screen_width() / out.sensor.len() as f32;
        for (i, color) in out.sensor.iter().enumerate() {
            draw_rectangle(i as f32 * cell, bar_y, cell.max(1.0), visual.sensor_bar_height, to_screen_color(*color));
        }
    }

    for (i, line) in out.status.lines().enumerate() {
        draw_text(line, 10.0, 20.0 + i as f32 * 18.0, 18.0, LIGHTGRAY);
    }
}

/// Start logging before the config is read so its warnings are not lost
///
/// Without RUST_LOG the logger lets everything through and the config level is
/// applied afterwards via `log::set_max_level`.
fn init_logging() {
    let from_env = std::env::var_os("RUST_LOG").is_some();
    env_logger::Builder::from_env(Env::default().default_filter_or("trace")).init();
    if !from_env {
        log::set_max_level(LevelFilter::Info);
    }
}

fn apply_log_level(config: &Config) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    match config.logging.level_filter() {
        Some(level) => log::set_max_level(level),
        None => warn!("Unknown log level '{}', keeping info", config.logging.level),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();

    let viewport = Viewport::new(screen_width(), screen_height());
    info!("Viewport {}x{}", viewport.width, viewport.height);

    let mut frame = LiveFrame::with_thread_rng(config, viewport);
    let mut last_mouse = mouse_position();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::C) {
            copy_scene_to_clipboard(&frame);
        }

        for command in poll_input(&mut last_mouse) {
            frame.handle(command);
        }

        let out = frame.tick();
        draw(&out, config);

        next_frame().await
    }
}
