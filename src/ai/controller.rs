use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AiConfig;
use crate::game::state::{Aim, MatchState, Side};
use crate::game::physics;

/// Controller state. Deadlines and the jitter counter live here so the whole
/// machine is advanced by comparing against the frame timestamp: no timers,
/// nothing to cancel, and tests can drive it with synthetic clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AiState {
    /// Take one step toward the ball, then wait.
    Following,
    /// Idle until the re-follow deadline fires, unless we own the ball.
    /// `resume_at` is armed on the first waiting tick.
    Waiting { resume_at: Option<u64> },
    /// Fake "thinking": jitter the paddle a few times on a fixed cadence,
    /// then pick a random aim and fire.
    Aiming {
        repeats_remaining: u8,
        next_step_at: u64,
    },
}

/// Drives one paddle. Call `update` once per frame with the milliseconds
/// elapsed since match start; between deadlines the call is a no-op, which
/// is what throttles the machine below frame rate.
pub struct AiController {
    side: Side,
    state: AiState,
    rng: StdRng,
    follow_delay_ms: u64,
    jitter_interval_ms: u64,
    aim_repeats_min: u8,
    aim_repeats_max: u8,
}

impl AiController {
    pub fn new(side: Side, config: &AiConfig) -> Self {
        Self::with_rng(side, config, StdRng::from_entropy())
    }

    pub fn with_rng(side: Side, config: &AiConfig, rng: StdRng) -> Self {
        Self {
            side,
            state: AiState::Following,
            rng,
            follow_delay_ms: config.follow_delay_ms,
            jitter_interval_ms: config.jitter_interval_ms,
            aim_repeats_min: config.aim_repeats_min,
            aim_repeats_max: config.aim_repeats_max.max(config.aim_repeats_min),
        }
    }

    /// Back to square one, for a rematch. Any pending deadline is dropped
    /// with the state it belonged to.
    pub fn reset(&mut self) {
        self.state = AiState::Following;
    }

    pub fn update(&mut self, now_ms: u64, state: &mut MatchState) {
        match self.state {
            AiState::Following => self.follow_ball(state),
            AiState::Waiting { resume_at } => self.wait(now_ms, resume_at, state),
            AiState::Aiming {
                repeats_remaining,
                next_step_at,
            } => self.aim(now_ms, repeats_remaining, next_step_at, state),
        }
    }

    /// One paddle step toward the ball, using the same step distance a
    /// human input produces so the chase speed is fair.
    fn follow_ball(&mut self, state: &mut MatchState) {
        let paddle_y = state.paddle(self.side).position.y;
        let step = if state.ball.position.y >= paddle_y + state.ball_size {
            state.paddle_step
        } else {
            -state.paddle_step
        };
        physics::move_paddle(state, self.side, step);

        self.state = AiState::Waiting { resume_at: None };
    }

    fn wait(&mut self, now_ms: u64, resume_at: Option<u64>, state: &mut MatchState) {
        // Caught the ball: start lining up the shot immediately, no delay.
        if state.ball.owner == Some(self.side) {
            let repeats = self
                .rng
                .gen_range(self.aim_repeats_min..=self.aim_repeats_max);
            self.state = AiState::Aiming {
                repeats_remaining: repeats,
                next_step_at: now_ms,
            };
            return;
        }

        match resume_at {
            None => {
                self.state = AiState::Waiting {
                    resume_at: Some(now_ms + self.follow_delay_ms),
                };
            }
            Some(deadline) if now_ms >= deadline => {
                self.state = AiState::Following;
            }
            Some(_) => {}
        }
    }

    fn aim(&mut self, now_ms: u64, repeats_remaining: u8, next_step_at: u64, state: &mut MatchState) {
        if now_ms < next_step_at {
            return;
        }

        if repeats_remaining == 0 {
            let aim = Aim::from_sign(self.rng.gen_range(-1..=1));
            state.paddle_mut(self.side).aim = aim;
            physics::fire(state, self.side);
            self.state = AiState::Following;
            return;
        }

        // Random vertical twitch, one human-sized step either way.
        let step = if self.rng.gen_bool(0.5) {
            state.paddle_step
        } else {
            -state.paddle_step
        };
        physics::move_paddle(state, self.side, step);

        self.state = AiState::Aiming {
            repeats_remaining: repeats_remaining - 1,
            next_step_at: now_ms + self.jitter_interval_ms,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AiConfig, PhysicsConfig};
    use crate::game::state::Vec2;

    fn controller(side: Side) -> AiController {
        AiController::with_rng(side, &AiConfig::default(), StdRng::seed_from_u64(7))
    }

    fn match_state() -> MatchState {
        MatchState::new(&PhysicsConfig::default())
    }

    #[test]
    fn test_following_steps_toward_ball_then_waits() {
        let mut ai = controller(Side::Right);
        let mut state = match_state();
        let start_y = state.right_paddle.position.y;
        // Ball well below the paddle
        state.ball.position = Vec2::new(600.0, state.field_height - 50.0);

        ai.update(0, &mut state);

        assert_eq!(state.right_paddle.position.y, start_y + state.paddle_step);
        assert_eq!(ai.state, AiState::Waiting { resume_at: None });
    }

    #[test]
    fn test_following_steps_up_when_ball_above() {
        let mut ai = controller(Side::Right);
        let mut state = match_state();
        let start_y = state.right_paddle.position.y;
        state.ball.position = Vec2::new(600.0, 0.0);

        ai.update(0, &mut state);

        assert_eq!(state.right_paddle.position.y, start_y - state.paddle_step);
    }

    #[test]
    fn test_waiting_resumes_following_after_delay() {
        let mut ai = controller(Side::Right);
        let mut state = match_state();

        ai.update(0, &mut state); // Following -> Waiting
        ai.update(10, &mut state); // arms the deadline at 10 + 400
        assert_eq!(ai.state, AiState::Waiting { resume_at: Some(410) });

        ai.update(409, &mut state); // early poll, still waiting
        assert_eq!(ai.state, AiState::Waiting { resume_at: Some(410) });

        ai.update(410, &mut state);
        assert_eq!(ai.state, AiState::Following);
    }

    #[test]
    fn test_waiting_with_ownership_aims_immediately() {
        let mut ai = controller(Side::Right);
        let mut state = match_state();
        ai.state = AiState::Waiting { resume_at: Some(5_000) };
        state.ball.owner = Some(Side::Right);

        ai.update(100, &mut state);

        match ai.state {
            AiState::Aiming {
                repeats_remaining,
                next_step_at,
            } => {
                assert!((5..=10).contains(&repeats_remaining));
                // First jitter step is due right away, not after the delay
                assert_eq!(next_step_at, 100);
            }
            other => panic!("expected Aiming, got {other:?}"),
        }
    }

    #[test]
    fn test_someone_elses_ball_does_not_trigger_aiming() {
        let mut ai = controller(Side::Right);
        let mut state = match_state();
        ai.state = AiState::Waiting { resume_at: None };
        state.ball.owner = Some(Side::Left);

        ai.update(100, &mut state);

        assert_eq!(ai.state, AiState::Waiting { resume_at: Some(500) });
    }

    #[test]
    fn test_aiming_jitters_then_fires_unit_shot() {
        let mut ai = controller(Side::Right);
        let mut state = match_state();
        state.ball.owner = Some(Side::Right);
        ai.state = AiState::Aiming {
            repeats_remaining: 3,
            next_step_at: 0,
        };

        let mut now = 0;
        let mut jitter_moves = 0;
        loop {
            let before = state.right_paddle.position.y;
            ai.update(now, &mut state);
            if state.right_paddle.position.y != before {
                jitter_moves += 1;
            }
            if ai.state == AiState::Following {
                break;
            }
            now += 250;
        }

        assert_eq!(jitter_moves, 3);
        assert_eq!(state.ball.owner, None);
        let speed = state.ball.velocity.length();
        assert!((speed - state.fire_speed).abs() < 1e-5);
        // Shot leaves the right paddle moving left
        assert!(state.ball.velocity.x < 0.0);
    }

    #[test]
    fn test_aiming_is_noop_between_deadlines() {
        let mut ai = controller(Side::Right);
        let mut state = match_state();
        state.ball.owner = Some(Side::Right);
        ai.state = AiState::Aiming {
            repeats_remaining: 2,
            next_step_at: 1_000,
        };
        let y = state.right_paddle.position.y;

        // Frame-rate re-entries before the deadline do nothing
        for now in [0, 400, 999] {
            ai.update(now, &mut state);
            assert_eq!(state.right_paddle.position.y, y);
            assert_eq!(state.ball.owner, Some(Side::Right));
        }
    }

    #[test]
    fn test_reset_returns_to_following() {
        let mut ai = controller(Side::Right);
        ai.state = AiState::Aiming {
            repeats_remaining: 4,
            next_step_at: 9_999,
        };

        ai.reset();

        assert_eq!(ai.state, AiState::Following);
    }
}
