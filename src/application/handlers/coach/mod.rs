//! Coach handlers.

mod coach_turn;

pub use coach_turn::{CoachTurnCommand, CoachTurnError, CoachTurnHandler, CoachTurnResult};
