use std::io;
use std::time::Instant;

use ratatui::Terminal;

use super::common::{apply_paddle_command, limit_frame_rate};
use crate::ai::AiController;
use crate::config::Config;
use crate::debug;
use crate::game::physics;
use crate::game::{poll_input, InputAction, KeyMap, MatchState, Side};
use crate::ui::{self, OverlayMessage};

/// Single-player loop: the human drives the left paddle, the AI controller
/// drives the right one.
pub fn run_game_vs_ai<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    debug::log("GAME_START", "single player vs AI");

    let mut match_state = MatchState::new(&config.physics);
    let mut ai = AiController::new(Side::Right, &config.ai);
    let keys = KeyMap::from_bindings(&config.keybindings);

    let match_start = Instant::now();
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_secs_f32() * 1000.0;
        last_frame = now;

        for action in poll_input(&keys)? {
            match action {
                InputAction::Quit => return Ok(()),
                InputAction::Rematch => {
                    if match_state.game_over {
                        debug::log("REMATCH", "restarting match");
                        match_state.reset_match();
                        ai.reset();
                    }
                }
                InputAction::Command(Side::Left, command) => {
                    apply_paddle_command(&mut match_state, Side::Left, command);
                }
                // The AI owns the right paddle
                InputAction::Command(Side::Right, _) => {}
            }
        }

        if !match_state.game_over {
            let events = physics::update_ball(&mut match_state, dt_ms);
            if events.wall_bounce {
                debug::log("BOUNCE", "ball reflected off a wall");
            }
            if let Some(side) = events.capture {
                debug::log("CAPTURE", &format!("{side:?} caught the ball"));
            }
            if let Some(scorer) = events.scorer {
                debug::log("GOAL", &format!("{scorer:?} scored"));
                match_state.handle_goal(scorer);
            }

            ai.update(match_start.elapsed().as_millis() as u64, &mut match_state);
        }

        let overlay = game_over_overlay(&match_state);
        terminal.draw(|f| ui::render(f, &match_state, &config.display, overlay.as_ref()))?;

        limit_frame_rate(now, config.display.target_fps);
    }
}

fn game_over_overlay(state: &MatchState) -> Option<OverlayMessage> {
    if !state.game_over {
        return None;
    }

    let footer = "R to Rematch  |  Q to Quit".to_string();
    Some(match state.winner {
        Some(Side::Left) => {
            OverlayMessage::success(vec!["YOU WIN!".to_string(), String::new(), footer])
        }
        _ => OverlayMessage::info(vec!["BOT WINS".to_string(), String::new(), footer]),
    })
}
