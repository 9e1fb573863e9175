//! Move representation.

use crate::{Color, Piece, Square};
use std::fmt;

/// A single requested move: which piece of which color goes from where to
/// where. Legality is decided by the engine, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece, color: Color) -> Self {
        Move {
            from,
            to,
            piece,
            color,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
