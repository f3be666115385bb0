use std::io;
use std::time::Instant;

use ratatui::Terminal;

use super::common::{apply_paddle_command, limit_frame_rate};
use crate::config::Config;
use crate::debug;
use crate::game::physics;
use crate::game::{poll_input, InputAction, KeyMap, MatchState, Side};
use crate::ui::{self, OverlayMessage};

/// Local 2-player loop: both paddles on one keyboard, no AI.
pub fn run_game_local<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<(), io::Error> {
    debug::log("GAME_START", "local 2-player mode");

    let mut match_state = MatchState::new(&config.physics);
    let keys = KeyMap::from_bindings(&config.keybindings);

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
                    }
                }
                InputAction::Command(side, command) => {
                    apply_paddle_command(&mut match_state, side, command);
                }
            }
        }

        if !match_state.game_over {
            let events = physics::update_ball(&mut match_state, dt_ms);
            if let Some(scorer) = events.scorer {
                debug::log("GOAL", &format!("{scorer:?} scored"));
                match_state.handle_goal(scorer);
            }
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

    let winner_text = match state.winner {
        Some(Side::Left) => "LEFT WINS",
        Some(Side::Right) => "RIGHT WINS",
        None => "GAME OVER",
    };
    Some(OverlayMessage::info(vec![
        winner_text.to_string(),
        String::new(),
        "R to Rematch  |  Q to Quit".to_string(),
    ]))
}
