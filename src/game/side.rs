use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::board::Cell;
use crate::error::ParseSideError;

/// One of the two players.
///
/// `A` is the engine's side and always the maximizer; `B` is the opponent and
/// always the minimizer. Scores are reported from `A`'s point of view no
/// matter which side is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the other side
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Side::A
    }

    /// Convert side to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Side::A => Cell::A,
            Side::B => Cell::B,
        }
    }

    /// Board symbol used by the text format
    pub fn symbol(self) -> char {
        match self {
            Side::A => 'X',
            Side::B => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "x" | "max" | "ai" => Ok(Side::A),
            "b" | "o" | "min" | "human" => Ok(Side::B),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_side() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other(), Side::A);
    }

    #[test]
    fn test_only_a_maximizes() {
        assert!(Side::A.is_maximizing());
        assert!(!Side::B.is_maximizing());
    }

    #[test]
    fn test_parse_side() {
        assert_eq!("a".parse::<Side>().unwrap(), Side::A);
        assert_eq!("X".parse::<Side>().unwrap(), Side::A);
        assert_eq!("human".parse::<Side>().unwrap(), Side::B);
        assert!("c".parse::<Side>().is_err());
    }
}
