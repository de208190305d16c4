use crate::chess::{Color, File, Move, Moves, Piece, Rank, Role, Square};
use crate::util::Enum;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::ops::{Deref, Index};
use std::str::FromStr;

/// The chess board.
///
/// Serializes as 8 rows, from the first to the eighth rank, each holding 8
/// cells, from the a-file to the h-file.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(transparent)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

/// The standard starting layout.
impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }
}

impl Board {
    /// A board with no pieces on it.
    #[inline(always)]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Lays out the standard 32 pieces, removing everything else.
    pub fn reset(&mut self) {
        use Role::*;
        const BACK: [Role; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        self.clear();

        for c in Color::iter() {
            for (f, r) in File::iter().zip(BACK) {
                self.set(Square::new(f, Rank::back(c)), Some(Piece::new(c, r)));
                self.set(Square::new(f, Rank::pawns(c)), Some(Piece::new(c, Pawn)));
            }
        }
    }

    /// Removes every piece.
    #[inline(always)]
    pub fn clear(&mut self) {
        *self = Board::empty();
    }

    /// Places a piece on a square, or empties it, returning what stood there before.
    #[inline(always)]
    pub fn set(&mut self, sq: Square, p: Option<Piece>) -> Option<Piece> {
        let cell = &mut self.squares[sq.rank().repr() as usize][sq.file().repr() as usize];
        std::mem::replace(cell, p)
    }

    /// An iterator over all pieces on the board.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(|sq| Some((self[sq]?, sq)))
    }

    /// [`Square`] occupied by a the king of a [`Color`].
    #[inline(always)]
    pub fn king(&self, side: Color) -> Option<Square> {
        let king = Piece::new(side, Role::King);
        self.iter().find_map(|(p, sq)| (p == king).then_some(sq))
    }

    /// The candidate moves of the piece on the given [`Square`], if any.
    ///
    /// Candidates may leave the king of the moving side in check.
    #[inline(always)]
    pub fn moves(&self, sq: Square) -> Moves {
        match self[sq] {
            Some(p) => p.moves(self, sq),
            None => Moves::new(),
        }
    }

    /// Whether any piece of a [`Color`] could move onto the given [`Square`].
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.iter()
            .filter(|(p, _)| p.color() == by)
            .any(|(p, whence)| p.moves(self, whence).iter().any(|m| m.whither() == sq))
    }

    /// Whether the king of a [`Color`] is attacked.
    ///
    /// # Panics
    ///
    /// Panics if there is no king of that color on the board.
    #[track_caller]
    pub fn is_check(&self, side: Color) -> bool {
        match self.king(side) {
            Some(king) => self.is_attacked(king, !side),
            None => panic!("expected the {side} king to be on the board"),
        }
    }

    /// Moves a piece, promoting it if so specified, and returns the captured piece, if any.
    ///
    /// The destination is emptied if there is no piece on the source square.
    pub fn apply(&mut self, m: Move) -> Option<Piece> {
        let piece = self.set(m.whence(), None).map(|p| {
            match Option::<Role>::from(m.promotion()) {
                Some(r) => Piece::new(p.color(), r),
                None => p,
            }
        });

        self.set(m.whither(), piece)
    }

    /// Applies a move temporarily.
    ///
    /// The board is restored to exactly its previous state, including any
    /// captured piece, once the returned [`Speculation`] is dropped.
    #[inline(always)]
    pub fn speculate(&mut self, m: Move) -> Speculation<'_> {
        let whence = self[m.whence()];
        let whither = self[m.whither()];
        self.apply(m);

        Speculation {
            board: self,
            m,
            whence,
            whither,
        }
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.rank().repr() as usize][sq.file().repr() as usize]
    }
}

/// A [`Board`] on which a [`Move`] has been applied until dropped.
#[derive(Debug)]
pub struct Speculation<'a> {
    board: &'a mut Board,
    m: Move,
    whence: Option<Piece>,
    whither: Option<Piece>,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl Drop for Speculation<'_> {
    #[inline(always)]
    fn drop(&mut self) {
        self.board.set(self.m.whither(), self.whither);
        self.board.set(self.m.whence(), self.whence);
    }
}

/// Prints the piece placement field of the [FEN].
///
/// The alternate form prints a diagram from white's point of view instead.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for r in Rank::iter().rev() {
                write!(f, "{r} ")?;
                for file in File::iter() {
                    match self[Square::new(file, r)] {
                        Some(p) => write!(f, " {p:#}")?,
                        None => f.write_str(" ·")?,
                    }
                }

                f.write_char('\n')?;
            }

            f.write_str("  ")?;
            for file in File::iter() {
                write!(f, " {file}")?;
            }

            return Ok(());
        }

        for r in Rank::iter().rev() {
            let mut skip = 0;
            for file in File::iter() {
                match self[Square::new(file, r)] {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{skip}")?;
                            skip = 0;
                        }

                        write!(f, "{p}")?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{skip}")?;
            }

            if r != Rank::First {
                f.write_char('/')?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Board`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected exactly 8 ranks separated by `/`")]
    InvalidSyntax,
    #[display(fmt = "failed to parse piece placement")]
    InvalidPlacement,
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks: Vec<_> = s.split('/').rev().collect();
        if ranks.len() != 8 {
            return Err(ParseBoardError::InvalidSyntax);
        }

        let mut board = Board::empty();
        for (r, segment) in Rank::iter().zip(ranks) {
            let mut files = File::iter();
            for c in segment.chars() {
                let mut buffer = [0; 4];

                if let Some(skip @ 1..=8) = c.to_digit(10) {
                    for _ in 0..skip {
                        files.next().ok_or(ParseBoardError::InvalidPlacement)?;
                    }
                } else if let Ok(p) = c.encode_utf8(&mut buffer).parse() {
                    let file = files.next().ok_or(ParseBoardError::InvalidPlacement)?;
                    board.set(Square::new(file, r), Some(p));
                } else {
                    return Err(ParseBoardError::InvalidPlacement);
                }
            }

            if files.next().is_some() {
                return Err(ParseBoardError::InvalidPlacement);
            }
        }

        Ok(board)
    }
}
