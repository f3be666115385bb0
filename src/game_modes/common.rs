//! Helpers shared by the vs-AI and local 2-player loops.

use std::time::{Duration, Instant};

use crate::game::physics;
use crate::game::state::{Aim, MatchState, Side};
use crate::game::PaddleCommand;

/// Sleep away whatever is left of the frame so the loop runs at the
/// configured frame rate. Call at the end of each iteration with the
/// `Instant` taken at its start.
pub fn limit_frame_rate(frame_start: Instant, target_fps: u64) {
    let frame_duration = Duration::from_millis(1000 / target_fps.max(1));
    let elapsed = frame_start.elapsed();
    if elapsed < frame_duration {
        std::thread::sleep(frame_duration - elapsed);
    }
}

/// Apply one discrete input command to a paddle. Invalid commands (firing
/// without the ball) fall through silently inside the operations themselves.
pub fn apply_paddle_command(state: &mut MatchState, side: Side, command: PaddleCommand) {
    match command {
        PaddleCommand::MoveUp => physics::move_paddle(state, side, -state.paddle_step),
        PaddleCommand::MoveDown => physics::move_paddle(state, side, state.paddle_step),
        PaddleCommand::AimUp => state.paddle_mut(side).aim = Aim::Up,
        PaddleCommand::AimDown => state.paddle_mut(side).aim = Aim::Down,
        PaddleCommand::ClearAim => state.paddle_mut(side).aim = Aim::Center,
        PaddleCommand::Fire => physics::fire(state, side),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;

    #[test]
    fn test_commands_map_to_paddle_operations() {
        let mut state = MatchState::new(&PhysicsConfig::default());
        let start_y = state.left_paddle.position.y;

        apply_paddle_command(&mut state, Side::Left, PaddleCommand::MoveUp);
        assert_eq!(state.left_paddle.position.y, start_y - state.paddle_step);

        apply_paddle_command(&mut state, Side::Left, PaddleCommand::AimDown);
        assert_eq!(state.left_paddle.aim, Aim::Down);

        apply_paddle_command(&mut state, Side::Left, PaddleCommand::ClearAim);
        assert_eq!(state.left_paddle.aim, Aim::Center);

        // Fire without the ball is silently ignored
        let velocity = state.ball.velocity;
        apply_paddle_command(&mut state, Side::Left, PaddleCommand::Fire);
        assert_eq!(state.ball.velocity, velocity);
    }
}
