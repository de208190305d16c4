use crate::chess::IllegalAction;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The lifecycle of a chess game.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "UPPERCASE")]
pub enum GameState {
    #[default]
    #[display(fmt = "active")]
    Active,
    #[display(fmt = "checkmate")]
    Checkmate,
    #[display(fmt = "stalemate")]
    Stalemate,
    #[display(fmt = "resigned")]
    Resigned,
}

/// What the position looks like for the side to move after a move is applied.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Verdict {
    #[display(fmt = "ongoing")]
    Ongoing,
    #[display(fmt = "checkmate")]
    Checkmate,
    #[display(fmt = "stalemate")]
    Stalemate,
}

/// Something that happened to a game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Event {
    #[display(fmt = "move applied, {_0}")]
    MoveApplied(Verdict),
    #[display(fmt = "resigned")]
    Resigned,
}

impl GameState {
    /// Whether the game still accepts moves.
    #[inline(always)]
    pub fn is_active(&self) -> bool {
        *self == GameState::Active
    }

    /// Whether the game has ended.
    #[inline(always)]
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// The state the game is in after an [`Event`].
    ///
    /// Every event is rejected once the game has ended.
    pub fn transition(self, event: Event) -> Result<Self, IllegalAction> {
        use GameState::*;

        match (self, event) {
            (Active, Event::MoveApplied(Verdict::Ongoing)) => Ok(Active),
            (Active, Event::MoveApplied(Verdict::Checkmate)) => Ok(Checkmate),
            (Active, Event::MoveApplied(Verdict::Stalemate)) => Ok(Stalemate),
            (Active, Event::Resigned) => Ok(Resigned),
            (s @ (Checkmate | Stalemate | Resigned), _) => Err(IllegalAction::GameNotActive(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn games_start_active() {
        assert_eq!(GameState::default(), GameState::Active);
        assert!(GameState::default().is_active());
    }

    #[proptest]
    fn state_is_either_active_or_terminal(s: GameState) {
        assert_ne!(s.is_active(), s.is_terminal());
    }

    #[test]
    fn active_game_transitions_according_to_the_verdict() {
        use GameState::*;

        assert_eq!(Active.transition(Event::MoveApplied(Verdict::Ongoing)), Ok(Active));
        assert_eq!(Active.transition(Event::MoveApplied(Verdict::Checkmate)), Ok(Checkmate));
        assert_eq!(Active.transition(Event::MoveApplied(Verdict::Stalemate)), Ok(Stalemate));
    }

    #[test]
    fn active_game_may_be_resigned() {
        assert_eq!(GameState::Active.transition(Event::Resigned), Ok(GameState::Resigned));
    }

    #[proptest]
    fn terminal_states_reject_every_event(#[filter(#s.is_terminal())] s: GameState, e: Event) {
        assert_eq!(s.transition(e), Err(IllegalAction::GameNotActive(s)));
    }

    #[test]
    fn game_state_serializes_to_its_uppercase_name() {
        assert_eq!(serde_json::to_string(&GameState::Active).unwrap(), "\"ACTIVE\"");
        assert_eq!(serde_json::to_string(&GameState::Resigned).unwrap(), "\"RESIGNED\"");
    }

    #[proptest]
    fn deserializing_serialized_game_state_is_an_identity(s: GameState) {
        assert_eq!(serde_json::from_str::<GameState>(&serde_json::to_string(&s)?)?, s);
    }
}
