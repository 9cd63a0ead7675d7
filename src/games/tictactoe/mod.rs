//! Tic-tac-toe with move history and time travel.

pub mod action;
pub mod contracts;
pub mod history;
pub mod invariants;
mod position;
pub mod rules;
pub mod session;
pub mod types;

pub use action::{Action, ActionError, MoveError};
pub use history::{HistoryEntry, HistoryError, HistoryOrder, Step};
pub use position::Position;
pub use rules::{LINES, Line};
pub use session::{GameSession, MAX_STEPS};
pub use types::{Board, GameStatus, Hand, Player, Square};
