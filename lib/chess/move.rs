use crate::chess::{ParsePromotionError, ParseSquareError, Promotion, Square};
use derive_more::{Constructor, Display, Error, From};
use std::str::FromStr;

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[display(fmt = "{}{}{}", _0, _1, _2)]
pub struct Move(Square, Square, Promotion);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// The [`Promotion`] specifier.
    #[inline(always)]
    pub fn promotion(&self) -> Promotion {
        self.2
    }

    /// Whether this is a promotion move.
    #[inline(always)]
    pub fn is_promotion(&self) -> bool {
        self.promotion() != Promotion::None
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move")]
    InvalidSquare(ParseSquareError),
    #[display(fmt = "failed to parse move")]
    InvalidPromotion(ParsePromotionError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        let j = s.char_indices().nth(4).map_or_else(|| s.len(), |(j, _)| j);

        Ok(Move(s[..i].parse()?, s[i..j].parse()?, s[j..].parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn move_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<Move>>(), size_of::<Move>());
    }

    #[proptest]
    fn move_has_a_source_square(a: Square, b: Square, p: Promotion) {
        assert_eq!(Move::new(a, b, p).whence(), a);
    }

    #[proptest]
    fn move_has_a_destination_square(a: Square, b: Square, p: Promotion) {
        assert_eq!(Move::new(a, b, p).whither(), b);
    }

    #[proptest]
    fn move_has_a_promotion_specifier(a: Square, b: Square, p: Promotion) {
        assert_eq!(Move::new(a, b, p).promotion(), p);
        assert_eq!(Move::new(a, b, p).is_promotion(), p != Promotion::None);
    }

    #[proptest]
    fn moves_that_differ_in_promotion_are_distinct(
        a: Square,
        b: Square,
        p: Promotion,
        #[filter(#p != #q)] q: Promotion,
    ) {
        assert_ne!(Move::new(a, b, p), Move::new(a, b, q));
    }

    #[test]
    fn move_prints_in_pure_coordinate_notation() {
        let m = Move::new(Square::E7, Square::E8, Promotion::Queen);
        assert_eq!(m.to_string(), "e7e8q");

        let m = Move::new(Square::G1, Square::F3, Promotion::None);
        assert_eq!(m.to_string(), "g1f3");
    }

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_fails_if_promotion_invalid(
        m: Move,
        #[filter(!["", "n", "b", "r", "q"].contains(&#s.as_str()))] s: String,
    ) {
        let p = Move::new(m.whence(), m.whither(), Promotion::None);
        assert!([p.to_string(), s].concat().parse::<Move>().is_err());
    }

    #[proptest]
    fn parsing_move_fails_if_too_short(#[strategy("[a-h1-8]{0,3}")] s: String) {
        assert!(s.parse::<Move>().is_err());
    }
}
