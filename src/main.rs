//! Fleck Canvas entry point
//!
//! The interactive canvases are driven by a host toolkit. Natively this
//! binary runs a headless scripted session over both canvases and logs what
//! happened; pass a settings JSON path as the first argument to override
//! the defaults.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use fleck_canvas::Settings;

    env_logger::init();
    log::info!("Fleck Canvas (headless) starting...");

    let settings = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map(|path| Settings::load(&path))
        .unwrap_or_default();

    demo::run_canvas(&settings);
    demo::run_arcade(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page embeds the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use fleck_canvas::canvas::CanvasState;
    use fleck_canvas::consts::SIM_DT;
    use fleck_canvas::geom::Point;
    use fleck_canvas::platform::{InputEvent, Key, MouseButton, ScrollDirection};
    use fleck_canvas::renderer::{render_canvas, render_game};
    use fleck_canvas::sim::{BallState, GamePhase, GameState, TickInput, tick};
    use fleck_canvas::{Settings, clock::FixedStep};

    /// Simulated frame time (60 Hz display)
    const FRAME_DT: f32 = 1.0 / 60.0;

    /// Drag a fleck, pan the view, zoom, and let the animation run
    pub fn run_canvas(settings: &Settings) {
        let mut canvas = CanvasState::new(settings);
        let mut timer = settings.animation_timer();

        let primary = MouseButton::Primary;
        let script = [
            InputEvent::Press { pos: Point::new(310.0, 290.0), button: primary },
            InputEvent::Motion { pos: Point::new(340.0, 260.0) },
            InputEvent::Motion { pos: Point::new(380.0, 240.0) },
            InputEvent::Release { pos: Point::new(380.0, 240.0), button: primary },
            InputEvent::Press { pos: Point::new(620.0, 460.0), button: primary },
            InputEvent::Motion { pos: Point::new(600.0, 440.0) },
            InputEvent::Release { pos: Point::new(590.0, 430.0), button: primary },
            InputEvent::Scroll { pos: Point::new(620.0, 460.0), direction: ScrollDirection::Up },
            InputEvent::Key(Key::Faster),
            InputEvent::Key(Key::Faster),
        ];

        let mut redraws = 0;
        for event in &script {
            if canvas.handle_event(event) {
                redraws += 1;
            }
            if timer.drive(FRAME_DT, &mut canvas.clock) {
                redraws += 1;
            }
        }
        for _ in 0..60 {
            if timer.drive(FRAME_DT, &mut canvas.clock) {
                redraws += 1;
            }
        }

        let list = render_canvas(&canvas);
        log::info!(
            "Canvas: fleck #1 at ({:.1}, {:.1}), shift ({:.1}, {:.1}), zoom {:.2}, phase {:.3}, {} redraws, {} draw commands",
            canvas.flecks[1].x,
            canvas.flecks[1].y,
            canvas.view.shift.x,
            canvas.view.shift.y,
            canvas.view.scale,
            canvas.clock.phase(),
            redraws,
            list.len()
        );

        timer.disconnect();
    }

    /// Let a paddle that tracks the ball play for a minute of game time
    pub fn run_arcade(settings: &Settings) {
        let mut state = GameState::new(settings);
        let mut clock = settings.animation_clock();
        let mut timer = FixedStep::new((SIM_DT * 1000.0).round() as u32);
        let mut input = TickInput::default();

        let frames = (60.0 / FRAME_DT) as u32;
        for _ in 0..frames {
            // Follow the ball, leading it slightly
            let ball = &state.ball;
            let target = match ball.state {
                BallState::Free => ball.pos.x + ball.vel.x * 0.05,
                BallState::Attached { .. } => state.playground.center().x,
            };
            input.apply_event(&InputEvent::Motion {
                pos: Point::new(target, 0.0),
            });
            if matches!(state.phase, GamePhase::Serve | GamePhase::Cleared) {
                input.apply_event(&InputEvent::Key(Key::Launch));
            }

            for _ in 0..timer.advance(FRAME_DT) {
                tick(&mut state, &input, SIM_DT);
                clock.tick();
                input.clear_one_shots();
            }
        }
        timer.disconnect();

        let list = render_game(&state, &clock);
        log::info!(
            "Arcade: {} ticks, {} bricks cleared, {} left, {} balls lost, {} draw commands",
            state.time_ticks,
            state.bricks_cleared,
            state.bricks.len(),
            state.balls_lost,
            list.len()
        );
    }
}
