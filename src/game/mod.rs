pub mod input;
pub mod physics;
pub mod state;

pub use input::{poll_input, InputAction, KeyMap, PaddleCommand};
pub use physics::{update_ball, TickEvents};
pub use state::{Aim, Ball, MatchState, Paddle, Side, Vec2};
