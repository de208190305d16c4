use crate::chess::{movegen, Board, Color, Moves, Role, Square};
use derive_more::{Constructor, Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    #[serde(rename = "pieceColor")]
    color: Color,
    #[serde(rename = "pieceType")]
    role: Role,
}

impl Piece {
    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The candidate moves of this piece standing on `whence`.
    ///
    /// Candidates follow the movement rules of the piece alone, in particular
    /// they may leave the king of its own [`Color`] in check.
    pub fn moves(&self, board: &Board, whence: Square) -> Moves {
        match self.role {
            Role::Pawn => movegen::pawn(board, whence, self.color),
            Role::Knight => movegen::knight(board, whence, self.color),
            Role::Bishop => movegen::bishop(board, whence, self.color),
            Role::Rook => movegen::rook(board, whence, self.color),
            Role::Queen => movegen::queen(board, whence, self.color),
            Role::King => movegen::king(board, whence, self.color),
        }
    }
}

/// Prints the piece in FEN, uppercase for white and lowercase for black.
///
/// The alternate form prints the unicode figurine instead.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            let figurine = match (self.color, self.role) {
                (Color::White, Role::Pawn) => '♙',
                (Color::White, Role::Knight) => '♘',
                (Color::White, Role::Bishop) => '♗',
                (Color::White, Role::Rook) => '♖',
                (Color::White, Role::Queen) => '♕',
                (Color::White, Role::King) => '♔',
                (Color::Black, Role::Pawn) => '♟',
                (Color::Black, Role::Knight) => '♞',
                (Color::Black, Role::Bishop) => '♝',
                (Color::Black, Role::Rook) => '♜',
                (Color::Black, Role::Queen) => '♛',
                (Color::Black, Role::King) => '♚',
            };

            f.write_char(figurine)
        } else {
            let mut symbol = self.role.to_string();
            if self.color == Color::White {
                symbol.make_ascii_uppercase();
            }

            f.write_str(&symbol)
        }
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece, expected one of `PNBRQKpnbrqk`")]
pub struct ParsePieceError;

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = match s {
            "P" | "N" | "B" | "R" | "Q" | "K" => Color::White,
            "p" | "n" | "b" | "r" | "q" | "k" => Color::Black,
            _ => return Err(ParsePieceError),
        };

        let role = s.to_lowercase().parse().map_err(|_| ParsePieceError)?;
        Ok(Piece::new(color, role))
    }
}
