//! Properties a session must satisfy after every accepted move.
//!
//! `Session::submit` re-checks [`SessionInvariants`] in debug builds. Each
//! property is a zero-sized type so it can also be asserted on its own.

use crate::player::Player;
use crate::rules::Rules;
use crate::session::{Phase, Session};

/// A named predicate over a state `S`.
pub trait Invariant<S> {
    /// True when `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that failed to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", invariant)]
pub struct InvariantViolation {
    /// Statement of the failed property.
    pub invariant: &'static str,
}

/// Several invariants evaluated in one pass.
pub trait InvariantSet<S> {
    /// Evaluates every member and reports all failures, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, invariant)| InvariantViolation { invariant })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X moves first and players alternate.
///
/// X's marker count equals O's or exceeds it by one, and while a move is
/// expected the side to move matches those counts.
pub struct AlternatingTurn;

impl<R: Rules> Invariant<Session<R>> for AlternatingTurn {
    fn holds(session: &Session<R>) -> bool {
        let x = session.board().count(Player::X);
        let o = session.board().count(Player::O);
        let balanced = x == o || x == o + 1;

        let expected = if x == o { Player::X } else { Player::O };
        match session.phase() {
            Phase::AwaitingMove(player) => balanced && player == expected,
            _ => balanced,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: every history entry is occupied and nothing else is.
pub struct HistoryConsistent;

impl<R: Rules> Invariant<Session<R>> for HistoryConsistent {
    fn holds(session: &Session<R>) -> bool {
        let board = session.board();
        let occupied = board.iter().filter(|(_, c)| !c.is_empty()).count();
        occupied == session.history().len()
            && session
                .history()
                .iter()
                .all(|&coord| board.get(coord).is_some_and(|c| !c.is_empty()))
    }

    fn description() -> &'static str {
        "Move history matches the occupied cells"
    }
}

/// Invariant: the variant's own structural check holds.
pub struct RulesConsistent;

impl<R: Rules> Invariant<Session<R>> for RulesConsistent {
    fn holds(session: &Session<R>) -> bool {
        R::is_consistent(session.board())
    }

    fn description() -> &'static str {
        "Board is consistent with the variant's rules"
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (AlternatingTurn, HistoryConsistent, RulesConsistent);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Coord};
    use crate::error::MoveError;

    #[derive(Debug, Clone)]
    struct Open;

    impl Rules for Open {
        type Move = Coord;
        const NAME: &'static str = "open";
        const ROWS: usize = 2;
        const COLS: usize = 2;

        fn validate(board: &Board, mv: &Coord) -> Result<Coord, MoveError> {
            board.cell_at(mv.row, mv.col).map(|_| *mv)
        }

        fn is_winner(_board: &Board, _player: Player) -> bool {
            false
        }
    }

    #[test]
    fn test_invariants_hold_for_new_session() {
        let session = Session::<Open>::new();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut session = Session::<Open>::new();
        session.submit(Coord::new(0, 0)).unwrap();
        session.submit(Coord::new(1, 1)).unwrap();
        session.submit(Coord::new(0, 1)).unwrap();
        assert!(AlternatingTurn::holds(&session));
        assert!(HistoryConsistent::holds(&session));
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_violation_names_invariant() {
        let violation = InvariantViolation {
            invariant: <AlternatingTurn as Invariant<Session<Open>>>::description(),
        };
        assert!(violation.invariant.contains("alternate"));
        assert!(violation.to_string().starts_with("Invariant violated: "));
    }
}
