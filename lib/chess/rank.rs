use crate::chess::Color;
use crate::util::Enum;
use derive_more::{Display, Error};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
}

impl Rank {
    /// The rank where the pieces of a [`Color`] start.
    #[inline(always)]
    pub fn back(side: Color) -> Self {
        match side {
            Color::White => Rank::First,
            Color::Black => Rank::Eighth,
        }
    }

    /// The rank where the pawns of a [`Color`] start.
    #[inline(always)]
    pub fn pawns(side: Color) -> Self {
        match side {
            Color::White => Rank::Second,
            Color::Black => Rank::Seventh,
        }
    }
}

unsafe impl Enum for Rank {
    const RANGE: RangeInclusive<Self> = Rank::First..=Rank::Eighth;

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse rank, expected digit in the range `(1..=8)`")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            _ => Err(ParseRankError),
        }
    }
}
