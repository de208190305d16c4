use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use crate::util::Enum;
use derive_more::{Display, Error, From};
use std::{fmt, ops::RangeInclusive, str::FromStr};

/// A square on the chess board.
///
/// Squares are addressed by `(row, col)`, both 1-based, where the row is the
/// [`Rank`] and the column is the [`File`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        Self::from_repr(f.repr() | r.repr() << 3)
    }

    /// Constructs [`Square`] from 1-based `(row, col)` coordinates, if on the board.
    #[inline(always)]
    pub fn from_coords(row: u8, col: u8) -> Option<Self> {
        let r = Rank::try_from_repr(row.checked_sub(1)?)?;
        let f = File::try_from_repr(col.checked_sub(1)?)?;
        Some(Square::new(f, r))
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::from_repr(self.repr() & 0b111)
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::from_repr(self.repr() >> 3)
    }

    /// The 1-based row of this square.
    #[inline(always)]
    pub fn row(&self) -> u8 {
        self.rank().repr() + 1
    }

    /// The 1-based column of this square.
    #[inline(always)]
    pub fn col(&self) -> u8 {
        self.file().repr() + 1
    }

    /// The square `rows` ranks up and `cols` files right of this one, if still on the board.
    #[inline(always)]
    pub fn shift(&self, rows: i8, cols: i8) -> Option<Self> {
        let row = u8::try_from(self.row() as i16 + rows as i16).ok()?;
        let col = u8::try_from(self.col() as i16 + cols as i16).ok()?;
        Square::from_coords(row, col)
    }
}

unsafe impl Enum for Square {
    const RANGE: RangeInclusive<Self> = Square::A1..=Square::H8;

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square")]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn square_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Square>>(), size_of::<Square>());
    }

    #[proptest]
    fn new_constructs_square_from_pair_of_file_and_rank(sq: Square) {
        assert_eq!(Square::new(sq.file(), sq.rank()), sq);
    }

    #[proptest]
    fn from_coords_constructs_square_from_row_and_col(sq: Square) {
        assert_eq!(Square::from_coords(sq.row(), sq.col()), Some(sq));
    }

    #[proptest]
    fn row_and_col_are_one_based(sq: Square) {
        assert!((1..=8).contains(&sq.row()));
        assert!((1..=8).contains(&sq.col()));
    }

    #[proptest]
    fn from_coords_fails_if_off_the_board(
        row: u8,
        #[filter(!(1..=8).contains(&#row) || !(1..=8).contains(&#col))] col: u8,
    ) {
        assert_eq!(Square::from_coords(row, col), None);
    }

    #[test]
    fn rows_count_ranks_and_cols_count_files() {
        assert_eq!(Square::from_coords(1, 1), Some(Square::A1));
        assert_eq!(Square::from_coords(1, 8), Some(Square::H1));
        assert_eq!(Square::from_coords(8, 1), Some(Square::A8));
        assert_eq!(Square::from_coords(4, 5), Some(Square::E4));
    }

    #[proptest]
    fn shifting_square_by_zero_is_an_identity(sq: Square) {
        assert_eq!(sq.shift(0, 0), Some(sq));
    }

    #[proptest]
    fn shifting_square_back_and_forth_is_an_identity(
        sq: Square,
        #[strategy(-7i8..=7)] rows: i8,
        #[strategy(-7i8..=7)] cols: i8,
    ) {
        if let Some(s) = sq.shift(rows, cols) {
            assert_eq!(s.shift(-rows, -cols), Some(sq));
            assert_eq!(s.row() as i8 - sq.row() as i8, rows);
            assert_eq!(s.col() as i8 - sq.col() as i8, cols);
        }
    }

    #[test]
    fn shifting_square_off_the_board_fails() {
        assert_eq!(Square::A1.shift(-1, 0), None);
        assert_eq!(Square::A1.shift(0, -1), None);
        assert_eq!(Square::H8.shift(1, 0), None);
        assert_eq!(Square::H8.shift(0, 1), None);
        assert_eq!(Square::E4.shift(2, 1), Some(Square::F6));
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[proptest]
    fn parsing_square_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c))] c: char,
        r: Rank,
    ) {
        assert_eq!(
            [c.to_string(), r.to_string()].concat().parse::<Square>(),
            Err(ParseSquareError::InvalidFile(ParseFileError))
        );
    }

    #[proptest]
    fn parsing_square_fails_if_rank_invalid(
        f: File,
        #[filter(!('1'..='8').contains(&#c))] c: char,
    ) {
        assert_eq!(
            [f.to_string(), c.to_string()].concat().parse::<Square>(),
            Err(ParseSquareError::InvalidRank(ParseRankError))
        );
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.len() != 2)] s: String) {
        assert_eq!(s.parse::<Square>().ok(), None);
    }
}
