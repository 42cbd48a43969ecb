//! The chess board: an 8x8 mailbox of optional pieces plus line-of-sight queries.

use std::fmt;

use crate::color::Color;
use crate::error::{LineError, PositionError};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout from the A file to the H file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The geometric lines along which obstruction can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Diagonal,
    File,
    Rank,
}

/// Piece placement on the 64 squares.
///
/// `Board` is `Copy`: speculative positions are built on a copy and either
/// committed by assignment or dropped.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Cell contents, indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            for (color, back, pawns) in [(Color::White, 0u8, 1u8), (Color::Black, 7, 6)] {
                if let Some(sq) = Square::from_index(back * 8 + file) {
                    board.set_piece(sq, Some(Piece::new(kind, color, sq)));
                }
                if let Some(sq) = Square::from_index(pawns * 8 + file) {
                    board.set_piece(sq, Some(Piece::new(PieceKind::Pawn, color, sq)));
                }
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Overwrite a square. No chess legality is checked.
    ///
    /// A stored piece has its square set to `sq`.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.index()] = piece.map(|p| p.at(sq));
    }

    /// Overwrite the square at zero-based `(file, rank)`.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::OutOfBoard`] if the coordinates leave the grid.
    pub fn set_piece_at(&mut self, file: i32, rank: i32, piece: Option<Piece>) -> Result<(), PositionError> {
        let sq = Square::new(file, rank)?;
        self.set_piece(sq, piece);
        Ok(())
    }

    /// Return a snapshot of every piece of `color`, in rank-major scan order
    /// (A1, B1, ..., H1, A2, ...).
    pub fn pieces_of(&self, color: Color) -> Vec<Piece> {
        self.cells
            .iter()
            .flatten()
            .filter(|p| p.color() == color)
            .copied()
            .collect()
    }

    /// Return the number of pieces of `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().flatten().filter(|p| p.color() == color).count()
    }

    /// Locate the king of `color` by scanning the board.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.cells
            .iter()
            .flatten()
            .find(|p| p.color() == color && p.kind() == PieceKind::King)
            .map(|p| p.square())
    }

    /// Move the piece on `from` to `to`, setting its moved flag and dropping
    /// whatever stood on `to`. Returns the captured piece.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let captured = self.cells[to.index()];
        let mover = self.cells[from.index()].take();
        self.cells[to.index()] = mover.map(|p| p.moved_to(to));
        captured
    }

    /// Return whether any occupied square lies strictly between `from` and `to`
    /// along `line`.
    ///
    /// Identical or adjacent endpoints are never obstructed.
    ///
    /// # Errors
    ///
    /// Returns [`LineError`] if the two squares do not share `line`.
    pub fn is_obstructed(&self, from: Square, to: Square, line: Line) -> Result<bool, LineError> {
        let aligned = match line {
            Line::Diagonal => from.same_diagonal(to),
            Line::File => from.same_file(to),
            Line::Rank => from.same_rank(to),
        };
        if !aligned {
            return Err(LineError { from, to, line });
        }

        let df = (to.file() - from.file()).signum();
        let dr = (to.rank() - from.rank()).signum();
        let steps = (to.file() - from.file()).abs().max((to.rank() - from.rank()).abs());
        if steps <= 1 {
            return Ok(false);
        }

        Ok((1..steps)
            .filter_map(|i| from.offset(df * i, dr * i))
            .any(|sq| self.is_occupied(sq)))
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cells.iter().flatten())
            .finish()
    }
}

/// Wrapper for drawing a board as a Unicode grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

const FILES: &str = "    A   B   C   D   E   F   G   H";

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "{FILES}")?;
        writeln!(f, "  ┏━━━┳━━━┳━━━┳━━━┳━━━┳━━━┳━━━┳━━━┓")?;
        for rank in (0..8).rev() {
            write!(f, "{} ┃", rank + 1)?;
            for file in 0..8 {
                match Square::new(file, rank).ok().and_then(|sq| board.piece(sq)) {
                    Some(piece) => write!(f, " {piece} ┃")?,
                    None => write!(f, "   ┃")?,
                }
            }
            writeln!(f, " {}", rank + 1)?;
            if rank > 0 {
                writeln!(f, "  ┣━━━╋━━━╋━━━╋━━━╋━━━╋━━━╋━━━╋━━━┫")?;
            }
        }
        writeln!(f, "  ┗━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┻━━━┛")?;
        write!(f, "{FILES}")
    }
}
