//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameSession, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Step N > 0 was played by X when N is odd and by O when N is even, and
/// the turn flag matches the parity of the pointer.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let alternates = session.history().iter().skip(1).all(|step| {
            let expected = if step.step_number() % 2 == 1 {
                Player::X
            } else {
                Player::O
            };
            step.player() == Some(expected)
        });

        alternates && session.x_is_next() == (session.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "Players alternate starting with X and the turn matches the step"
    }
}
