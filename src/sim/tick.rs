//! Per-frame entry points
//!
//! A front end calls [`tick`] once per frame and [`apply`] for every input it
//! receives, both with the same monotonic millisecond clock.

use serde::{Deserialize, Serialize};

use super::session::{PlayerMode, Session};
use super::state::GamePhase;
use crate::error::TransitionError;

/// A discrete input from the player(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// Pick single or dual mode (intro screen)
    SelectMode(PlayerMode),
    /// Type a character into a name box
    TypeChar { slot: usize, ch: char },
    /// Delete the last character of a name box
    Backspace { slot: usize },
    /// Accept the typed names
    ConfirmNames,
    /// Begin the current player's turn
    Start,
    /// The scoring key
    Press,
    /// Move on after time is up
    Next,
    /// Open the reset confirmation prompt
    RequestReset,
    ConfirmReset,
    CancelReset,
}

/// Refresh the running countdown for this frame
pub fn tick(session: &mut Session, now_ms: u64) {
    if session.model.tick(now_ms) && !session.times_up {
        session.times_up = true;
        if let Some(player) = session.model.current_player() {
            log::info!("Time's up for {} ({} points)", player.name(), player.score());
        }
    }
}

/// Apply one input. A rejected input never changes phase, turn or scores.
pub fn apply(session: &mut Session, input: Input, now_ms: u64) -> Result<(), TransitionError> {
    if session.reset_prompt {
        return match input {
            Input::ConfirmReset => {
                session.reset();
                Ok(())
            }
            Input::CancelReset => {
                session.reset_prompt = false;
                Ok(())
            }
            _ => Err(TransitionError::ResetPending),
        };
    }

    match input {
        Input::SelectMode(mode) => select_mode(session, mode),
        Input::TypeChar { slot, ch } => {
            let max_len = session.settings.max_name_len;
            let buffer = name_buffer_mut(session, slot)?;
            // Enter and other control keys never end up in a name
            if !ch.is_control() && buffer.chars().count() < max_len {
                buffer.push(ch);
            }
            Ok(())
        }
        Input::Backspace { slot } => {
            name_buffer_mut(session, slot)?.pop();
            Ok(())
        }
        Input::ConfirmNames => {
            if session.mode.is_none() {
                return Err(TransitionError::ModeNotSelected);
            }
            session.model.confirm_names(&session.name_buffers[..])
        }
        Input::Start => {
            session.model.start_round(now_ms)?;
            session.times_up = false;
            Ok(())
        }
        Input::Press => {
            tick(session, now_ms);
            let key = session.model.turn();
            session.model.score_current()?;
            session.markers.spawn(key);
            Ok(())
        }
        Input::Next => {
            tick(session, now_ms);
            session.model.finish_turn()?;
            session.times_up = false;
            Ok(())
        }
        Input::RequestReset => {
            if session.mode.is_none() {
                return Err(TransitionError::ModeNotSelected);
            }
            session.reset_prompt = true;
            Ok(())
        }
        Input::ConfirmReset | Input::CancelReset => Err(TransitionError::NoResetPending),
    }
}

fn select_mode(session: &mut Session, mode: PlayerMode) -> Result<(), TransitionError> {
    if session.mode.is_some() {
        return Err(TransitionError::ModeAlreadySelected);
    }
    let count = mode.player_count();
    session.model.add_players(count)?;
    session.mode = Some(mode);
    session.name_buffers = vec![String::new(); count];
    session.markers.reset(count);
    log::info!("{} selected", mode.as_str());
    Ok(())
}

fn name_buffer_mut(session: &mut Session, slot: usize) -> Result<&mut String, TransitionError> {
    if session.mode.is_none() {
        return Err(TransitionError::ModeNotSelected);
    }
    if session.model.phase() != GamePhase::Intro {
        return Err(TransitionError::NameEntryClosed);
    }
    session
        .name_buffers
        .get_mut(slot)
        .ok_or(TransitionError::UnknownPlayer(slot))
}
