//! Candidate move generation, one function per [`Role`][`crate::chess::Role`].
//!
//! Candidates follow the movement rules of a piece alone and do not account
//! for whether the move leaves the king of the moving side in check.

use crate::chess::{Board, Color, Move, Promotion, Rank, Square};
use arrayvec::ArrayVec;

/// The candidate moves of a single piece.
///
/// A queen in the middle of an empty board has 27 of them, the most any piece can have.
pub type Moves = ArrayVec<Move, 32>;

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[rustfmt::skip]
const ADJACENT: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

#[rustfmt::skip]
const KNIGHT: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

/// Walks each direction until blocked, capturing the first enemy piece in the way.
fn slide(board: &Board, whence: Square, side: Color, directions: &[(i8, i8)], moves: &mut Moves) {
    for &(rows, cols) in directions {
        let mut next = whence.shift(rows, cols);
        while let Some(whither) = next {
            match board[whither] {
                None => moves.push(Move::new(whence, whither, Promotion::None)),
                Some(p) => {
                    if p.color() != side {
                        moves.push(Move::new(whence, whither, Promotion::None));
                    }

                    break;
                }
            }

            next = whither.shift(rows, cols);
        }
    }
}

/// Jumps straight to each offset not occupied by a friendly piece.
fn leap(board: &Board, whence: Square, side: Color, offsets: &[(i8, i8)], moves: &mut Moves) {
    for &(rows, cols) in offsets {
        if let Some(whither) = whence.shift(rows, cols) {
            if board[whither].map_or(true, |p| p.color() != side) {
                moves.push(Move::new(whence, whither, Promotion::None));
            }
        }
    }
}

/// Pushes a pawn move, expanded into every promotion on the opponent's back rank.
fn advance(whence: Square, whither: Square, side: Color, moves: &mut Moves) {
    if whither.rank() == Rank::back(!side) {
        for p in Promotion::CHOICES {
            moves.push(Move::new(whence, whither, p));
        }
    } else {
        moves.push(Move::new(whence, whither, Promotion::None));
    }
}

/// Candidate moves of a pawn.
pub fn pawn(board: &Board, whence: Square, side: Color) -> Moves {
    let forward = match side {
        Color::White => 1,
        Color::Black => -1,
    };

    let mut moves = Moves::new();

    if let Some(one) = whence.shift(forward, 0).filter(|&sq| board[sq].is_none()) {
        advance(whence, one, side, &mut moves);

        if whence.rank() == Rank::pawns(side) {
            if let Some(two) = one.shift(forward, 0).filter(|&sq| board[sq].is_none()) {
                moves.push(Move::new(whence, two, Promotion::None));
            }
        }
    }

    for cols in [-1, 1] {
        if let Some(diagonal) = whence.shift(forward, cols) {
            if board[diagonal].is_some_and(|p| p.color() != side) {
                advance(whence, diagonal, side, &mut moves);
            }
        }
    }

    moves
}

/// Candidate moves of a knight.
pub fn knight(board: &Board, whence: Square, side: Color) -> Moves {
    let mut moves = Moves::new();
    leap(board, whence, side, &KNIGHT, &mut moves);
    moves
}

/// Candidate moves of a bishop.
pub fn bishop(board: &Board, whence: Square, side: Color) -> Moves {
    let mut moves = Moves::new();
    slide(board, whence, side, &DIAGONAL, &mut moves);
    moves
}

/// Candidate moves of a rook.
pub fn rook(board: &Board, whence: Square, side: Color) -> Moves {
    let mut moves = Moves::new();
    slide(board, whence, side, &ORTHOGONAL, &mut moves);
    moves
}

/// Candidate moves of a queen.
pub fn queen(board: &Board, whence: Square, side: Color) -> Moves {
    let mut moves = Moves::new();
    slide(board, whence, side, &ORTHOGONAL, &mut moves);
    slide(board, whence, side, &DIAGONAL, &mut moves);
    moves
}

/// Candidate moves of a king.
pub fn king(board: &Board, whence: Square, side: Color) -> Moves {
    let mut moves = Moves::new();
    leap(board, whence, side, &ADJACENT, &mut moves);
    moves
}
