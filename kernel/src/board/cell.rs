//! Cell tokens and sides.
//!
//! Digit encoding matches the grid file format: `0` empty, `1` black,
//! `2` white, `3` blocked. White moves first and heads for the top-left
//! corner; black heads for the bottom-right corner.

/// A single board cell token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = 2,
    /// Never occupied; a jump over it is illegal.
    Blocked = 3,
}

impl Cell {
    /// Convert from a grid digit. Returns `None` for anything outside `0..=3`.
    #[must_use]
    pub const fn from_digit(d: u8) -> Option<Self> {
        match d {
            0 => Some(Self::Empty),
            1 => Some(Self::Black),
            2 => Some(Self::White),
            3 => Some(Self::Blocked),
            _ => None,
        }
    }

    /// Convert to the grid digit.
    #[must_use]
    pub const fn to_digit(self) -> u8 {
        self as u8
    }

    /// The side owning this cell, if it holds a piece.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::White => Some(Side::White),
            Self::Black => Some(Side::Black),
            Self::Empty | Self::Blocked => None,
        }
    }

    /// True for a piece of either side. Only pieces can be jumped over.
    #[must_use]
    pub const fn is_piece(self) -> bool {
        matches!(self, Self::White | Self::Black)
    }

    /// Swap white and black; empty and blocked are unchanged.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
            other => other,
        }
    }
}

/// One of the two opposing sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The cell token for this side's pieces.
    #[must_use]
    pub const fn piece(self) -> Cell {
        match self {
            Self::White => Cell::White,
            Self::Black => Cell::Black,
        }
    }

    /// `(row, col)` of the corner this side's pieces head for.
    #[must_use]
    pub const fn target_corner(self, size: usize) -> (usize, usize) {
        match self {
            Self::White => (0, 0),
            Self::Black => (size - 1, size - 1),
        }
    }

    /// Lower-case label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}
