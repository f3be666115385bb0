use std::ops::{Add, AddAssign, Mul};

use crate::config::PhysicsConfig;

/// 2D position/velocity value. Copies only; no live references to internal
/// state ever leave the game module.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Which edge a paddle guards. Doubles as the ball's owner handle: the ball
/// never holds a reference to a paddle, only the side it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Vertical bias applied to the next shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aim {
    Up,
    #[default]
    Center,
    Down,
}

impl Aim {
    /// Build an aim from the -1/0/+1 convention. Out-of-range values clamp
    /// into the valid set instead of erroring.
    pub fn from_sign(sign: i8) -> Aim {
        match sign {
            i8::MIN..=-1 => Aim::Up,
            0 => Aim::Center,
            1..=i8::MAX => Aim::Down,
        }
    }

}

#[derive(Debug, Clone)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Paddle currently carrying the ball. While set, the ball's position is
    /// derived from that paddle each tick and velocity is left alone.
    pub owner: Option<Side>,
    pub paused: bool,
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            owner: None,
            paused: false,
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn start(&mut self) {
        self.paused = false;
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub position: Vec2,
    pub side: Side,
    pub aim: Aim,
    /// Horizontal thickness. Also the depth of the capture plane measured
    /// from the paddle's screen edge.
    pub width: f32,
    /// Vertical extent: both the clamp range and the catch window.
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32, physics: &PhysicsConfig) -> Self {
        let mut paddle = Self {
            position: Vec2::new(0.0, y),
            side,
            aim: Aim::Center,
            width: physics.paddle_width,
            height: physics.paddle_height,
        };
        paddle.snap_to_side(physics.virtual_width);
        paddle
    }

    /// Pin x to this paddle's edge. Re-applied on every move so x is never
    /// cumulative.
    pub fn snap_to_side(&mut self, field_width: f32) {
        self.position.x = match self.side {
            Side::Left => 0.0,
            Side::Right => field_width - self.width,
        };
    }
}

/// All mutable match state in one aggregate, passed explicitly to the update
/// functions and command handlers.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub ball: Ball,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub left_score: u8,
    pub right_score: u8,
    pub game_over: bool,
    pub winner: Option<Side>,
    pub field_width: f32,
    pub field_height: f32,
    pub ball_size: f32,
    pub ball_margin: f32,
    pub paddle_step: f32,
    pub fire_speed: f32,
    pub winning_score: u8,
}

impl MatchState {
    pub fn new(physics: &PhysicsConfig) -> Self {
        let field_width = physics.virtual_width;
        let field_height = physics.virtual_height;
        let center_y = field_height / 2.0 - physics.paddle_height / 2.0;

        let ball = Ball::new(
            Vec2::new(field_width / 2.0, field_height / 2.0),
            // Opening serve drifts toward the left player until someone
            // catches it. Fired shots are exactly fire_speed; this one is
            // diagonal at fire_speed per axis.
            Vec2::new(-1.0, -1.0) * physics.fire_speed,
        );

        Self {
            ball,
            left_paddle: Paddle::new(Side::Left, center_y, physics),
            right_paddle: Paddle::new(Side::Right, center_y, physics),
            left_score: 0,
            right_score: 0,
            game_over: false,
            winner: None,
            field_width,
            field_height,
            ball_size: physics.ball_size,
            ball_margin: physics.ball_margin,
            paddle_step: physics.paddle_step,
            fire_speed: physics.fire_speed,
            winning_score: physics.winning_score,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }

    /// Consume a goal signalled by the ball tick: bump the scorer's counter,
    /// then hand the ball to the paddle that was scored against and resume
    /// motion. On a match win the ball stays paused.
    pub fn handle_goal(&mut self, scorer: Side) {
        let counter = match scorer {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        };
        *counter += 1;

        if *counter >= self.winning_score {
            self.game_over = true;
            self.winner = Some(scorer);
            return;
        }

        self.ball.owner = Some(scorer.opposite());
        self.ball.start();
    }

    /// Full reset for a rematch: scores, ball, paddles, aim.
    pub fn reset_match(&mut self) {
        self.left_score = 0;
        self.right_score = 0;
        self.game_over = false;
        self.winner = None;

        self.ball.position = Vec2::new(self.field_width / 2.0, self.field_height / 2.0);
        self.ball.velocity = Vec2::new(-1.0, -1.0) * self.fire_speed;
        self.ball.owner = None;
        self.ball.start();

        let center_y = self.field_height / 2.0 - self.left_paddle.height / 2.0;
        self.left_paddle.position.y = center_y;
        self.left_paddle.aim = Aim::Center;
        self.right_paddle.position.y = center_y;
        self.right_paddle.aim = Aim::Center;
    }
}
