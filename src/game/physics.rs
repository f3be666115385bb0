use std::f32::consts::FRAC_1_SQRT_2;

use super::state::{Aim, MatchState, Side, Vec2};

/// Events raised by a single ball tick, consumed synchronously by the match
/// loop (no global event channel).
#[derive(Debug, Default, Clone, Copy)]
pub struct TickEvents {
    pub wall_bounce: bool,
    /// Paddle that caught the ball this tick.
    pub capture: Option<Side>,
    /// Side that scored this tick. At most one per tick.
    pub scorer: Option<Side>,
}

/// Advance the ball by one frame. `dt_ms` is the wall-clock milliseconds
/// elapsed since the previous frame; negative values clamp to zero.
///
/// Order matters and mirrors the game rules: motion first (carried by the
/// owner, or reflect-then-integrate when free), then scoring, then capture.
/// Scoring is skipped while the ball is paused, so a ball parked past the
/// goal line after a score cannot re-score from its stale position.
pub fn update_ball(state: &mut MatchState, dt_ms: f32) -> TickEvents {
    let mut events = TickEvents::default();
    let dt = dt_ms.max(0.0);

    if !state.ball.paused {
        match state.ball.owner {
            Some(owner) => {
                // The owner carries the ball at its leading edge. Velocity is
                // untouched until the paddle fires.
                state.ball.position = carried_position(state, owner);
            }
            None => {
                if near_vertical_bound(state) {
                    state.ball.velocity.y = -state.ball.velocity.y;
                    events.wall_bounce = true;
                }
                let velocity = state.ball.velocity;
                state.ball.position += velocity * dt;
            }
        }

        if state.ball.position.x <= 0.0 {
            // Past the left edge uncaught: the right side scores.
            state.ball.pause();
            events.scorer = Some(Side::Right);
        } else if state.ball.position.x >= state.field_width {
            state.ball.pause();
            events.scorer = Some(Side::Left);
        }
    }

    // A free ball can be caught; the left paddle is tested first and wins a
    // degenerate same-frame double match. A goal this tick takes precedence.
    if state.ball.owner.is_none() && events.scorer.is_none() {
        let ball = state.ball.position;

        let left = &state.left_paddle;
        let right = &state.right_paddle;
        if ball.x <= left.width
            && ball.y >= left.position.y
            && ball.y <= left.position.y + left.height
        {
            state.ball.owner = Some(Side::Left);
            events.capture = Some(Side::Left);
        } else if ball.x >= state.field_width - right.width
            && ball.y >= right.position.y
            && ball.y <= right.position.y + right.height
        {
            state.ball.owner = Some(Side::Right);
            events.capture = Some(Side::Right);
        }
    }

    events
}

fn carried_position(state: &MatchState, owner: Side) -> Vec2 {
    let paddle = state.paddle(owner);
    let offset = Vec2::new(
        match owner {
            Side::Left => paddle.width,
            Side::Right => 0.0,
        },
        state.ball_size,
    );
    paddle.position + offset
}

fn near_vertical_bound(state: &MatchState) -> bool {
    let y = state.ball.position.y;
    y - state.ball_margin <= 0.0 || y + state.ball_margin >= state.field_height
}

/// Move a paddle vertically. The y position clamps into the field and the x
/// position is re-pinned to the paddle's edge every call. Never errors.
pub fn move_paddle(state: &mut MatchState, side: Side, dy: f32) {
    let field_width = state.field_width;
    let field_height = state.field_height;
    let paddle = state.paddle_mut(side);

    paddle.position.y = (paddle.position.y + dy).clamp(0.0, field_height - paddle.height);
    paddle.snap_to_side(field_width);
}

/// Fire the ball from a paddle. Silently ignored unless that paddle is the
/// current owner. The shot direction comes from the paddle's side and aim;
/// diagonals use 1/sqrt(2) per axis so every shot leaves at exactly
/// `fire_speed` regardless of direction. Firing releases ownership.
pub fn fire(state: &mut MatchState, side: Side) {
    if state.ball.owner != Some(side) {
        return;
    }

    let direction = match (side, state.paddle(side).aim) {
        (Side::Left, Aim::Up) => Vec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        (Side::Left, Aim::Center) => Vec2::new(1.0, 0.0),
        (Side::Left, Aim::Down) => Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        (Side::Right, Aim::Up) => Vec2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        (Side::Right, Aim::Center) => Vec2::new(-1.0, 0.0),
        (Side::Right, Aim::Down) => Vec2::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
    };

    state.ball.velocity = direction * state.fire_speed;
    state.ball.owner = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;

    fn state() -> MatchState {
        MatchState::new(&PhysicsConfig::default())
    }

    fn free_ball_at(state: &mut MatchState, x: f32, y: f32, vx: f32, vy: f32) {
        state.ball.position = Vec2::new(x, y);
        state.ball.velocity = Vec2::new(vx, vy);
        state.ball.owner = None;
        state.ball.start();
    }

    #[test]
    fn test_free_ball_integrates_velocity() {
        let mut state = state();
        free_ball_at(&mut state, 500.0, 500.0, -1.0, -1.0);

        let events = update_ball(&mut state, 16.0);

        assert_eq!(state.ball.position, Vec2::new(484.0, 484.0));
        assert!(!events.wall_bounce);
        assert_eq!(events.capture, None);
        assert_eq!(events.scorer, None);
    }

    #[test]
    fn test_negative_dt_clamps_to_zero() {
        let mut state = state();
        free_ball_at(&mut state, 500.0, 500.0, -1.0, -1.0);

        update_ball(&mut state, -16.0);

        assert_eq!(state.ball.position, Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_ball_reflects_near_top() {
        let mut state = state();
        // Within one margin-width of the top bound
        free_ball_at(&mut state, 500.0, 20.0, 1.0, -1.0);

        let events = update_ball(&mut state, 10.0);

        assert!(events.wall_bounce);
        // vy negated before integration: 20 + 1.0 * 10
        assert_eq!(state.ball.position, Vec2::new(510.0, 30.0));
        assert_eq!(state.ball.velocity, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_ball_reflects_near_bottom() {
        let mut state = state();
        let near_bottom = state.field_height - 20.0;
        free_ball_at(&mut state, 500.0, near_bottom, 1.0, 1.0);

        let events = update_ball(&mut state, 10.0);

        assert!(events.wall_bounce);
        assert_eq!(state.ball.velocity, Vec2::new(1.0, -1.0));
        assert_eq!(state.ball.position.y, near_bottom - 10.0);
    }

    #[test]
    fn test_left_paddle_captures_ball_in_window() {
        let mut state = state();
        state.left_paddle.position.y = 400.0;
        // Inside the capture plane (x <= 170) and the catch window
        free_ball_at(&mut state, 180.0, 450.0, -1.0, 0.0);

        let events = update_ball(&mut state, 16.0);

        assert_eq!(state.ball.position.x, 164.0);
        assert_eq!(events.capture, Some(Side::Left));
        assert_eq!(state.ball.owner, Some(Side::Left));
    }

    #[test]
    fn test_captured_ball_rides_owner_not_velocity() {
        let mut state = state();
        state.left_paddle.position.y = 400.0;
        state.ball.owner = Some(Side::Left);
        state.ball.velocity = Vec2::new(-1.0, 0.0);
        state.ball.position = Vec2::new(164.0, 450.0);

        update_ball(&mut state, 16.0);

        // paddle position + (paddle width, ball size), velocity untouched
        assert_eq!(
            state.ball.position,
            Vec2::new(state.left_paddle.width, 400.0 + state.ball_size)
        );
        assert_eq!(state.ball.velocity, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_ball_outside_catch_window_is_not_captured() {
        let mut state = state();
        state.left_paddle.position.y = 400.0;
        // Past the capture plane but above the paddle
        free_ball_at(&mut state, 160.0, 100.0, -1.0, 0.0);

        let events = update_ball(&mut state, 16.0);

        assert_eq!(events.capture, None);
        assert_eq!(state.ball.owner, None);
    }

    #[test]
    fn test_left_paddle_wins_degenerate_double_match() {
        let mut state = state();
        // Shrink the field until the capture planes overlap
        state.field_width = 300.0;
        state.left_paddle.position.y = 100.0;
        state.right_paddle.position.y = 100.0;
        state.right_paddle.snap_to_side(300.0);
        free_ball_at(&mut state, 150.0, 150.0, 0.0, 0.0);

        let events = update_ball(&mut state, 16.0);

        assert_eq!(events.capture, Some(Side::Left));
        assert_eq!(state.ball.owner, Some(Side::Left));
    }

    #[test]
    fn test_goal_on_left_edge_pauses_and_credits_right() {
        let mut state = state();
        state.left_paddle.position.y = 600.0;
        free_ball_at(&mut state, 5.0, 100.0, -1.0, 0.0);

        let events = update_ball(&mut state, 16.0);

        assert_eq!(events.scorer, Some(Side::Right));
        assert!(state.ball.paused);
        // No capture once a goal has been signalled
        assert_eq!(events.capture, None);
    }

    #[test]
    fn test_goal_on_right_edge_credits_left() {
        let mut state = state();
        state.right_paddle.position.y = 600.0;
        let x = state.field_width - 5.0;
        free_ball_at(&mut state, x, 100.0, 1.0, 0.0);

        let events = update_ball(&mut state, 16.0);

        assert_eq!(events.scorer, Some(Side::Left));
        assert!(state.ball.paused);
    }

    #[test]
    fn test_paused_ball_does_not_rescore() {
        let mut state = state();
        free_ball_at(&mut state, 5.0, 100.0, -1.0, 0.0);
        state.left_paddle.position.y = 600.0;

        let first = update_ball(&mut state, 16.0);
        assert_eq!(first.scorer, Some(Side::Right));
        let position = state.ball.position;

        // Same stale position, still paused: no motion, no second goal
        let second = update_ball(&mut state, 16.0);
        assert_eq!(second.scorer, None);
        assert_eq!(state.ball.position, position);
    }

    #[test]
    fn test_move_clamps_to_field() {
        let mut state = state();

        let step = state.paddle_step;
        for _ in 0..200 {
            move_paddle(&mut state, Side::Left, -step);
        }
        assert_eq!(state.left_paddle.position.y, 0.0);

        for _ in 0..200 {
            move_paddle(&mut state, Side::Left, step);
        }
        assert_eq!(
            state.left_paddle.position.y,
            state.field_height - state.left_paddle.height
        );
    }

    #[test]
    fn test_fire_without_ownership_is_ignored() {
        let mut state = state();
        free_ball_at(&mut state, 500.0, 500.0, -1.0, -1.0);

        fire(&mut state, Side::Left);

        assert_eq!(state.ball.velocity, Vec2::new(-1.0, -1.0));
        assert_eq!(state.ball.owner, None);
    }

    #[test]
    fn test_fire_directions_match_side_and_aim() {
        let mut state = state();

        state.ball.owner = Some(Side::Left);
        state.left_paddle.aim = Aim::Down;
        fire(&mut state, Side::Left);
        let v = state.ball.velocity;
        assert!((v.x - 0.7071).abs() < 1e-3 && (v.y - 0.7071).abs() < 1e-3);
        assert_eq!(state.ball.owner, None);

        state.ball.owner = Some(Side::Right);
        state.right_paddle.aim = Aim::Down;
        fire(&mut state, Side::Right);
        let v = state.ball.velocity;
        assert!((v.x + 0.7071).abs() < 1e-3 && (v.y - 0.7071).abs() < 1e-3);
    }

    #[test]
    fn test_fired_speed_is_uniform_across_aims() {
        for side in [Side::Left, Side::Right] {
            for aim in [Aim::Up, Aim::Center, Aim::Down] {
                let mut state = state();
                state.ball.owner = Some(side);
                state.paddle_mut(side).aim = aim;

                fire(&mut state, side);

                let speed = state.ball.velocity.length();
                assert!(
                    (speed - state.fire_speed).abs() < 1e-5,
                    "{side:?}/{aim:?} fired at {speed}"
                );
            }
        }
    }
}
