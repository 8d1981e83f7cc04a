//! Fixed timestep simulation tick
//!
//! Advances the arcade deterministically: same seed and same inputs give
//! the same run.

use super::collision::{
    ball_brick_collision, ball_lost, ball_paddle_collision, ball_wall_collision, paddle_bounce,
    reflect_velocity,
};
use super::state::{BallState, Brick, GamePhase, GameState};
use crate::consts::*;
use crate::geom::{Point, Rect};
use crate::platform::{InputEvent, Key, MouseButton};

/// Largest deflection off the paddle edge (radians)
const PADDLE_MAX_ANGLE: f32 = 1.05;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Target paddle center x (from the pointer)
    pub target_x: Option<f32>,
    /// Launch ball (click/space)
    pub launch: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// Fold a host input event into this tick's commands
    pub fn apply_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Motion { pos } => self.target_x = Some(pos.x),
            InputEvent::Press {
                pos,
                button: MouseButton::Primary,
            } => {
                self.target_x = Some(pos.x);
                self.launch = true;
            }
            InputEvent::Key(Key::Launch) => self.launch = true,
            InputEvent::Key(Key::Halt) => self.pause = true,
            _ => {}
        }
    }

    /// Clear one-shot commands after they were processed
    pub fn clear_one_shots(&mut self) {
        self.launch = false;
        self.pause = false;
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        state.toggle_pause();
        log::debug!("Pause toggled: {:?}", state.phase);
    }
    if state.phase == GamePhase::Paused {
        return;
    }

    if !state.bricks_initialized {
        generate_bricks(state);
    }

    state.time_ticks += 1;

    if let Some(x) = input.target_x {
        move_paddle(state, x);
    }

    match state.phase {
        GamePhase::Serve | GamePhase::Cleared => {
            state.ball.update_attached(&state.paddle);
            if input.launch {
                if state.phase == GamePhase::Cleared {
                    generate_bricks(state);
                }
                let angle = state.launch_angle();
                state.ball.launch(state.ball_speed, angle);
                state.phase = GamePhase::Playing;
                log::debug!("Ball launched at {:.3} rad", angle);
            }
        }
        GamePhase::Playing => step_ball(state, dt),
        GamePhase::Paused => {}
    }
}

/// Center the paddle on `x`, keeping it inside the playground
pub fn move_paddle(state: &mut GameState, x: f32) {
    let half = state.paddle.s.x / 2.0;
    let min = state.playground.left() + half;
    let max = (state.playground.right() - half).max(min);
    state.paddle.p.x = x.clamp(min, max) - half;
}

/// Move the free ball and resolve at most one collision of each kind
fn step_ball(state: &mut GameState, dt: f32) {
    if !matches!(state.ball.state, BallState::Free) {
        return;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;
    ball.trail.record(ball.pos);

    // Walls
    if let Some(normal) = ball_wall_collision(ball.pos, ball.radius, &state.playground) {
        ball.vel = reflect_velocity(ball.vel, normal);
        let pg = &state.playground;
        let min = pg.left() + ball.radius;
        let max = (pg.right() - ball.radius).max(min);
        ball.pos.x = ball.pos.x.clamp(min, max);
        ball.pos.y = ball.pos.y.max(pg.top() + ball.radius);
    }

    // Paddle (only while falling)
    if ball.vel.y > 0.0 && ball_paddle_collision(ball.pos, ball.radius, &state.paddle) {
        let speed = ball.vel.length();
        ball.vel = paddle_bounce(ball.pos, &state.paddle, speed, PADDLE_MAX_ANGLE);
        ball.pos.y = state.paddle.top() - ball.radius;
    }

    // Bricks
    if let Some((index, normal)) = ball_brick_collision(ball.pos, ball.radius, &state.bricks) {
        ball.vel = reflect_velocity(ball.vel, normal);
        let brick = state.bricks.remove(index);
        state.bricks_cleared += 1;
        log::debug!("Brick {} removed, {} left", brick.id, state.bricks.len());

        if state.bricks.is_empty() {
            log::info!("All bricks cleared after {} ticks", state.time_ticks);
            state.ball.attach(&state.paddle);
            state.phase = GamePhase::Cleared;
            return;
        }
    }

    if ball_lost(state.ball.pos, state.ball.radius, &state.playground) {
        state.balls_lost += 1;
        log::info!("Ball lost ({} so far)", state.balls_lost);
        state.ball.attach(&state.paddle);
        state.phase = GamePhase::Serve;
    }
}

/// Lay out a fresh grid of bricks across the top of the playground
pub fn generate_bricks(state: &mut GameState) {
    state.bricks.clear();

    let cols = state.brick_cols.max(1);
    let pg = state.playground;
    let width = ((pg.s.x - BRICK_GAP * (cols + 1) as f32) / cols as f32).max(1.0);

    for row in 0..state.brick_rows {
        let color = state.row_color();
        let y = pg.top() + BRICK_TOP + row as f32 * (BRICK_HEIGHT + BRICK_GAP);
        let first = Rect::new(pg.left() + BRICK_GAP, y, width, BRICK_HEIGHT);
        for col in 0..cols {
            let brick = Brick {
                id: state.next_brick_id(),
                rect: first.translate(Point::new(col as f32 * (width + BRICK_GAP), 0.0)),
                color,
            };
            state.bricks.push(brick);
        }
    }

    state.bricks_initialized = true;
    log::info!(
        "Laid out {} bricks ({} x {}) in {:.0} x {:.0}",
        state.bricks.len(),
        state.brick_rows,
        cols,
        pg.s.x,
        pg.s.y
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Color;
    use crate::settings::Settings;

    fn launch() -> TickInput {
        TickInput {
            launch: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_bricks_laid_out_on_first_tick() {
        let mut state = GameState::new(&Settings::default());
        assert!(state.bricks.is_empty());
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.bricks_initialized);
        assert_eq!(state.bricks.len(), (BRICK_ROWS * BRICK_COLS) as usize);
        for brick in &state.bricks {
            assert!(brick.rect.left() >= state.playground.left());
            assert!(brick.rect.right() <= state.playground.right() + 1e-3);
        }
    }

    #[test]
    fn test_layout_uses_current_playground() {
        let mut state = GameState::new(&Settings::default());
        state.set_playground(Rect::new(0.0, 0.0, 320.0, 480.0));
        assert!(state.paddle.right() <= 320.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        let right = state.bricks.iter().map(|b| b.rect.right()).fold(0.0, f32::max);
        assert!(right <= 320.0 + 1e-3);
        assert!((state.ball.pos.x - state.paddle.center().x).abs() < 1e-4);
    }

    #[test]
    fn test_serve_to_playing() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Serve);
        assert!(!state.ball.is_free());

        tick(&mut state, &launch(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.ball.is_free());
        assert!(state.ball.vel.y < 0.0);
        assert!((state.ball.vel.length() - state.ball_speed).abs() < 1e-3);
    }

    #[test]
    fn test_attached_ball_follows_paddle() {
        let mut state = GameState::new(&Settings::default());
        let input = TickInput {
            target_x: Some(100.0),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert!((state.paddle.center().x - 100.0).abs() < 1e-4);
        assert!((state.ball.pos.x - 100.0).abs() < 1e-4);
        assert!(state.ball.pos.y < state.paddle.top());
    }

    #[test]
    fn test_paddle_clamped_to_playground() {
        let mut state = GameState::new(&Settings::default());
        move_paddle(&mut state, -1000.0);
        assert_eq!(state.paddle.left(), state.playground.left());
        move_paddle(&mut state, 1e6);
        assert!((state.paddle.right() - state.playground.right()).abs() < 1e-3);
    }

    #[test]
    fn test_ball_brick_collision_removes_one_brick() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &TickInput::default(), SIM_DT);
        let before = state.bricks.len();

        // Aim the ball straight up at the bottom of a bottom-row brick
        let target = *state.bricks.last().expect("bricks");
        state.ball.state = BallState::Free;
        state.ball.pos = Point::new(
            target.rect.center().x,
            target.rect.bottom() + state.ball.radius + 1.0,
        );
        state.ball.vel = Point::new(0.0, -state.ball_speed);
        state.phase = GamePhase::Playing;

        tick(&mut state, &TickInput::default(), SIM_DT);

        assert_eq!(state.bricks.len(), before - 1);
        assert_eq!(state.bricks_cleared, 1);
        assert!(state.bricks.iter().all(|b| b.id != target.id));
        assert!(state.ball.vel.y > 0.0, "ball reflects downward");
        assert!(!state.hit_test(target.rect.center()).is_hit());
    }

    #[test]
    fn test_last_brick_clears_level() {
        let mut state = GameState::new(&Settings::default());
        state.bricks_initialized = true;
        state.bricks = vec![Brick {
            id: 99,
            rect: Rect::new(300.0, 100.0, 40.0, 18.0),
            color: Color::RED,
        }];
        state.ball.state = BallState::Free;
        state.ball.pos = Point::new(320.0, 125.0);
        state.ball.vel = Point::new(0.0, -state.ball_speed);
        state.phase = GamePhase::Playing;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Cleared);
        assert!(state.bricks.is_empty());
        assert!(!state.ball.is_free());

        // Next launch relays the grid
        tick(&mut state, &launch(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bricks.len(), (BRICK_ROWS * BRICK_COLS) as usize);
    }

    #[test]
    fn test_ball_bounces_off_paddle() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &TickInput::default(), SIM_DT);
        state.ball.state = BallState::Free;
        state.ball.pos = Point::new(state.paddle.center().x, state.paddle.top() - 2.0);
        state.ball.vel = Point::new(0.0, state.ball_speed);
        state.phase = GamePhase::Playing;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.ball.vel.y < 0.0);
        assert!(state.ball.pos.y <= state.paddle.top() - state.ball.radius + 1e-3);
    }

    #[test]
    fn test_ball_lost_returns_to_serve() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &TickInput::default(), SIM_DT);
        state.ball.state = BallState::Free;
        state.ball.pos = Point::new(10.0, state.playground.bottom() + 20.0);
        state.ball.vel = Point::new(0.0, state.ball_speed);
        state.phase = GamePhase::Playing;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.balls_lost, 1);
        assert_eq!(state.phase, GamePhase::Serve);
        assert!(!state.ball.is_free());
    }

    #[test]
    fn test_pause_roundtrip() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &launch(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Paused);
        let frozen = state.ball.pos;
        let ticks = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.pos, frozen);
        assert_eq!(state.time_ticks, ticks);

        tick(&mut state, &pause, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ball_stays_inside_side_walls() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &TickInput::default(), SIM_DT);
        state.bricks.clear();
        state.bricks.push(Brick {
            id: 1,
            rect: Rect::new(600.0, 0.0, 1.0, 1.0),
            color: Color::RED,
        });
        state.ball.state = BallState::Free;
        state.ball.pos = Point::new(state.playground.right() - 7.0, 200.0);
        state.ball.vel = Point::new(state.ball_speed, -10.0);
        state.phase = GamePhase::Playing;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.pos.x + state.ball.radius <= state.playground.right());
    }

    #[test]
    fn test_playground_narrower_than_ball() {
        let mut state = GameState::new(&Settings::default());
        tick(&mut state, &TickInput::default(), SIM_DT);
        state.set_playground(Rect::new(0.0, 0.0, 10.0, 480.0));
        state.ball.state = BallState::Free;
        state.ball.pos = Point::new(5.0, 300.0);
        state.ball.vel = Point::new(state.ball_speed, 0.0);
        state.phase = GamePhase::Playing;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.ball.vel.x < 0.0);
        assert_eq!(state.ball.pos.x, state.playground.left() + state.ball.radius);
    }

    #[test]
    fn test_determinism() {
        let settings = Settings::default();
        let mut a = GameState::new(&settings);
        let mut b = GameState::new(&settings);

        let inputs = [
            TickInput {
                target_x: Some(200.0),
                ..Default::default()
            },
            launch(),
            TickInput {
                target_x: Some(420.0),
                ..Default::default()
            },
            TickInput::default(),
        ];
        for _ in 0..50 {
            for input in &inputs {
                tick(&mut a, input, SIM_DT);
                tick(&mut b, input, SIM_DT);
            }
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.bricks.len(), b.bricks.len());
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_apply_event() {
        let mut input = TickInput::default();
        input.apply_event(&InputEvent::Motion {
            pos: Point::new(123.0, 4.0),
        });
        assert_eq!(input.target_x, Some(123.0));
        input.apply_event(&InputEvent::Key(Key::Launch));
        input.apply_event(&InputEvent::Key(Key::Halt));
        assert!(input.launch && input.pause);
        input.clear_one_shots();
        assert!(!input.launch && !input.pause);
        assert_eq!(input.target_x, Some(123.0));
    }
}
