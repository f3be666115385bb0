// AI opponent: the catch/aim/fire state machine

mod controller;

pub use controller::AiController;
