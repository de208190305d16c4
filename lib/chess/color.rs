use crate::util::Enum;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{Not, RangeInclusive};

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[derive(Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Color {
    #[default]
    #[display(fmt = "white")]
    White,
    #[display(fmt = "black")]
    Black,
}

unsafe impl Enum for Color {
    const RANGE: RangeInclusive<Self> = Color::White..=Color::Black;

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.mirror()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
        assert_ne!(!c, c);
    }

    #[test]
    fn white_moves_first() {
        assert_eq!(Color::default(), Color::White);
    }

    #[proptest]
    fn color_serializes_to_its_uppercase_name(c: Color) {
        let name = c.to_string().to_uppercase();
        assert_eq!(serde_json::to_string(&c)?, format!("\"{name}\""));
    }

    #[proptest]
    fn deserializing_serialized_color_is_an_identity(c: Color) {
        assert_eq!(serde_json::from_str::<Color>(&serde_json::to_string(&c)?)?, c);
    }
}
