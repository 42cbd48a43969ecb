//! Board squares with value semantics and algebraic notation.

use std::fmt;
use std::str::FromStr;

use crate::error::PositionError;

/// A square on the chess board, encoded as a `u8` in LERF format.
///
/// Index = rank * 8 + file, so A1 = 0, B1 = 1, ..., H8 = 63. Both axes are
/// zero-based internally and one-based in algebraic notation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a zero-based file and rank.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::OutOfBoard`] if either axis is outside `0..=7`.
    pub fn new(file: i32, rank: i32) -> Result<Square, PositionError> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Ok(Square((rank * 8 + file) as u8))
        } else {
            Err(PositionError::OutOfBoard { file, rank })
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parse a two-character algebraic label such as `"E4"` (file letter is
    /// case-insensitive).
    ///
    /// # Errors
    ///
    /// Malformed text yields [`PositionError::Malformed`]; a letter past `H` or
    /// a digit outside `1..=8` maps off the board and yields
    /// [`PositionError::OutOfBoard`].
    pub fn from_algebraic(s: &str) -> Result<Square, PositionError> {
        let mut chars = s.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(PositionError::Malformed { text: s.to_string() });
        };
        if !letter.is_ascii_alphabetic() || !digit.is_ascii_digit() {
            return Err(PositionError::Malformed { text: s.to_string() });
        }

        let file = letter.to_ascii_uppercase() as i32 - 'A' as i32;
        let rank = digit as i32 - '1' as i32;
        Square::new(file, rank)
    }

    /// Return the algebraic label, e.g. `"A1"`.
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the zero-based file (0 = A).
    #[inline]
    pub const fn file(self) -> i32 {
        (self.0 % 8) as i32
    }

    /// Return the zero-based rank (0 = rank 1).
    #[inline]
    pub const fn rank(self) -> i32 {
        (self.0 / 8) as i32
    }

    /// Return the square displaced by `(df, dr)`, or `None` if it leaves the board.
    pub fn offset(self, df: i32, dr: i32) -> Option<Square> {
        let file = self.file().checked_add(df)?;
        let rank = self.rank().checked_add(dr)?;
        Square::new(file, rank).ok()
    }

    /// Return `true` if both squares lie on the same rank.
    #[inline]
    pub const fn same_rank(self, other: Square) -> bool {
        self.rank() == other.rank()
    }

    /// Return `true` if both squares lie on the same file.
    #[inline]
    pub const fn same_file(self, other: Square) -> bool {
        self.file() == other.file()
    }

    /// Return `true` if both squares lie on a common diagonal.
    ///
    /// A square shares a (degenerate) diagonal with itself.
    #[inline]
    pub const fn same_diagonal(self, other: Square) -> bool {
        (self.file() - other.file()).abs() == (self.rank() - other.rank()).abs()
    }

    /// Return `|Δfile| + |Δrank|`.
    #[inline]
    pub const fn manhattan_distance(self, other: Square) -> i32 {
        (self.file() - other.file()).abs() + (self.rank() - other.rank()).abs()
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    // Named squares used by the rules and by setup code
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + self.file() as u8) as char;
        write!(f, "{letter}{}", self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

impl FromStr for Square {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Square, PositionError> {
        Square::from_algebraic(s)
    }
}
