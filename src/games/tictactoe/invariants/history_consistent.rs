//! History consistency invariant: steps are numbered by position.

use super::super::GameSession;
use super::Invariant;

/// Invariant: History is a well-formed numbered sequence.
///
/// History is never empty, step 0 is the blank starting board with no
/// move attached, every step's number equals its index, and the pointer
/// names a recorded step.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        let Some(start) = history.first() else {
            return false;
        };

        let start_is_blank = start.hand().is_none()
            && start.player().is_none()
            && start.board().occupied_count() == 0;

        let numbered = history
            .iter()
            .enumerate()
            .all(|(index, step)| step.step_number() == index);

        start_is_blank && numbered && session.step_number() < history.len()
    }

    fn description() -> &'static str {
        "History starts blank and step numbers match positions"
    }
}
