use crate::chess::{Board, Color, Event, GameState, Move, Moves, Square, Verdict};
use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::instrument;

/// The reason why an action was rejected by the [`Game`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[error(ignore)]
pub enum IllegalAction {
    #[display(fmt = "there is no piece on square `{_0}`")]
    NoPieceAtSource(Square),

    #[display(fmt = "it is not the turn of the {_0} player")]
    WrongTurn(Color),

    #[display(fmt = "move `{_0}` is illegal in this position")]
    MoveNotLegal(Move),

    #[display(fmt = "the game is no longer active, it ended in {_0}")]
    GameNotActive(GameState),
}

/// Deserializes `null` as the default value.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A game of chess between two players taking turns on the same [`Board`].
///
/// Missing or `null` fields deserialize to their value in a new game.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(default, deserialize_with = "or_default")]
    board: Board,
    #[serde(default, deserialize_with = "or_default")]
    team_turn: Color,
    #[serde(default, deserialize_with = "or_default")]
    game_state: GameState,
}

impl Game {
    /// A game in the standard starting position, with white to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current [`Board`].
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the [`Board`].
    #[inline(always)]
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.team_turn
    }

    /// Overrides the side to move.
    #[inline(always)]
    pub fn set_turn(&mut self, side: Color) {
        self.team_turn = side;
    }

    /// The current [`GameState`].
    #[inline(always)]
    pub fn state(&self) -> GameState {
        self.game_state
    }

    /// Overrides the [`GameState`].
    #[inline(always)]
    pub fn set_state(&mut self, state: GameState) {
        self.game_state = state;
    }

    /// The legal moves of the piece on a [`Square`], or `None` if the square is empty.
    ///
    /// Moves are legal if they don't leave the king of the moving side in check,
    /// regardless of whose turn it is.
    pub fn moves(&self, whence: Square) -> Option<Moves> {
        let piece = self.board[whence]?;
        let mut board = self.board;

        Some(
            piece
                .moves(&self.board, whence)
                .into_iter()
                .filter(|&m| !board.speculate(m).is_check(piece.color()))
                .collect(),
        )
    }

    /// An iterator over the legal moves of the side to move.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.board
            .iter()
            .filter(|(p, _)| p.color() == self.team_turn)
            .flat_map(|(_, sq)| self.moves(sq).unwrap_or_default())
    }

    /// Whether the side of a [`Color`] has any legal move.
    fn can_move(&self, side: Color) -> bool {
        let mut board = self.board;

        self.board
            .iter()
            .filter(|(p, _)| p.color() == side)
            .any(|(p, whence)| {
                p.moves(&self.board, whence)
                    .into_iter()
                    .any(|m| !board.speculate(m).is_check(side))
            })
    }

    /// Whether the king of a [`Color`] is in check.
    ///
    /// # Panics
    ///
    /// Panics if there is no king of that color on the board.
    #[inline(always)]
    pub fn is_check(&self, side: Color) -> bool {
        self.board.is_check(side)
    }

    /// Whether the king of a [`Color`] is in check and there's no legal move to escape it.
    pub fn is_checkmate(&self, side: Color) -> bool {
        self.is_check(side) && !self.can_move(side)
    }

    /// Whether a [`Color`] is not in check but has no legal moves either.
    pub fn is_stalemate(&self, side: Color) -> bool {
        !self.is_check(side) && !self.can_move(side)
    }

    /// The winning side, if any.
    ///
    /// After a checkmate the side to move has lost,
    /// whereas after a resignation the side to move is the one who resigned.
    pub fn winner(&self) -> Option<Color> {
        match self.game_state {
            GameState::Checkmate | GameState::Resigned => Some(!self.team_turn),
            GameState::Active | GameState::Stalemate => None,
        }
    }

    /// The [`Verdict`] for the side to move.
    fn verdict(&self) -> Verdict {
        let side = self.team_turn;
        if self.can_move(side) {
            Verdict::Ongoing
        } else if self.is_check(side) {
            Verdict::Checkmate
        } else {
            Verdict::Stalemate
        }
    }

    /// Plays a [`Move`] if legal, otherwise returns the reason why not.
    ///
    /// The game is left untouched if the move is rejected.
    #[instrument(level = "trace", skip(self), err)]
    pub fn play(&mut self, m: Move) -> Result<(), IllegalAction> {
        if !self.game_state.is_active() {
            return Err(IllegalAction::GameNotActive(self.game_state));
        }

        let piece = self.board[m.whence()].ok_or(IllegalAction::NoPieceAtSource(m.whence()))?;

        if piece.color() != self.team_turn {
            return Err(IllegalAction::WrongTurn(piece.color()));
        }

        if !self.moves(m.whence()).unwrap_or_default().contains(&m) {
            return Err(IllegalAction::MoveNotLegal(m));
        }

        let mut next = Game {
            board: self.board,
            team_turn: !self.team_turn,
            game_state: self.game_state,
        };

        next.board.apply(m);
        next.game_state = self
            .game_state
            .transition(Event::MoveApplied(next.verdict()))?;

        *self = next;
        Ok(())
    }

    /// Resigns the game on behalf of a [`Color`].
    ///
    /// The resigning side is recorded as the side to move.
    #[instrument(level = "trace", skip(self), err)]
    pub fn resign(&mut self, side: Color) -> Result<(), IllegalAction> {
        self.game_state = self.game_state.transition(Event::Resigned)?;
        self.team_turn = side;
        Ok(())
    }
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Game {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{prelude::*, sample::Selector};

        (0..64usize, any::<Selector>())
            .prop_map(|(plies, selector)| {
                let mut game = Game::new();

                for _ in 0..plies {
                    let moves: Vec<_> = game.legal_moves().collect();
                    match selector.try_select(moves) {
                        None => break,
                        Some(m) => game.play(m).unwrap(),
                    }
                }

                game
            })
            .boxed()
    }
}
