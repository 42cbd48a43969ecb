//! Turn state: the board, the side to move, the king cache, and ordinary moves.

use tracing::{debug, trace};

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A game in progress.
///
/// `Game` never flips the side to move on its own: the driver calls
/// [`pass_turn`](Game::pass_turn) once after each successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current: Color,
    /// Cached king squares, indexed by [`Color::index()`].
    kings: [Option<Square>; Color::COUNT],
    turn_number: u32,
    /// `(start, destination)` of the latest action that moved a piece.
    last_move: Option<(Square, Square)>,
    /// `(start, destination)` of the latest pawn double step, if that was the
    /// latest action. Gates en passant.
    pub(crate) double_step: Option<(Square, Square)>,
}

impl Game {
    /// Start a new game from the standard position with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position(), Color::White)
    }

    /// Start from an arbitrary placement. Kings are located by scanning.
    pub fn from_board(board: Board, current: Color) -> Game {
        Game {
            kings: [board.find_king(Color::White), board.find_king(Color::Black)],
            board,
            current,
            turn_number: 1,
            last_move: None,
            double_step: None,
        }
    }

    /// Return the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the side to move.
    #[inline]
    pub fn current_color(&self) -> Color {
        self.current
    }

    /// Override the side to move (setup and tests).
    pub fn set_current_color(&mut self, color: Color) {
        self.current = color;
    }

    /// Return the turn counter, starting at 1.
    #[inline]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Return the cached king square of `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// Return `(start, destination)` of the latest action that moved a piece.
    #[inline]
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// Return the recorded pawn double step, if any.
    #[inline]
    pub fn last_double_step(&self) -> Option<(Square, Square)> {
        self.double_step
    }

    /// Overwrite the pawn double-step record (setup and tests).
    pub fn set_last_double_step(&mut self, step: Option<(Square, Square)>) {
        self.double_step = step;
    }

    /// Overwrite one square, keeping the king cache in sync.
    pub fn place(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(old) = self.board.piece(sq) {
            if old.kind() == PieceKind::King && self.kings[old.color().index()] == Some(sq) {
                self.kings[old.color().index()] = None;
            }
        }
        self.board.set_piece(sq, piece);
        if let Some(new) = piece {
            if new.kind() == PieceKind::King {
                self.kings[new.color().index()] = Some(sq);
            }
        }
    }

    /// Hand the move to the other side and advance the turn counter.
    pub fn pass_turn(&mut self) {
        self.current = self.current.flip();
        self.turn_number += 1;
        debug!(turn = self.turn_number, mover = %self.current, "turn passed");
    }

    /// Return `true` if any opposing piece can move onto the king of `color`.
    ///
    /// A side without a king on the board is never in check.
    pub fn is_check(&self, color: Color) -> bool {
        self.king_in_check(&self.board, color, self.king_square(color))
    }

    /// Play an ordinary move for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if `start` is empty, holds an opposing piece,
    /// cannot reach `end` by its pattern, or the move would leave the mover's
    /// king attacked. The game is unchanged on error.
    pub fn turn(&mut self, start: Square, end: Square) -> Result<(), MoveError> {
        let piece = self.board.piece(start).ok_or(MoveError::EmptySquare { from: start })?;
        if piece.color() != self.current {
            return Err(MoveError::NotYourPiece {
                from: start,
                found: piece.color(),
                mover: self.current,
            });
        }

        let (board, king) = self.speculate(start, end)?;
        self.board = board;
        self.kings[piece.color().index()] = king;
        self.last_move = Some((start, end));
        self.double_step = is_double_step(piece, start, end).then_some((start, end));

        debug!(%start, %end, piece = %piece.kind(), color = %piece.color(), "move played");
        Ok(())
    }

    /// Build the position after moving the piece on `start` to `end`, and the
    /// mover's king square in it. Validates the pattern and self-check safety
    /// without touching the live board.
    pub(crate) fn speculate(&self, start: Square, end: Square) -> Result<(Board, Option<Square>), MoveError> {
        let piece = self.board.piece(start).ok_or(MoveError::EmptySquare { from: start })?;
        if !piece.is_valid_move(&self.board, end) {
            return Err(MoveError::InvalidPattern {
                kind: piece.kind(),
                from: start,
                to: end,
            });
        }

        let mut candidate = self.board;
        candidate.relocate(start, end);
        let king = if piece.kind() == PieceKind::King {
            Some(end)
        } else {
            self.king_square(piece.color())
        };

        if self.king_in_check(&candidate, piece.color(), king) {
            trace!(%start, %end, "rejected: exposes king");
            return Err(MoveError::ExposesKing { from: start, to: end });
        }
        Ok((candidate, king))
    }

    /// Check test against an arbitrary (possibly speculative) board.
    pub(crate) fn king_in_check(&self, board: &Board, color: Color, king: Option<Square>) -> bool {
        king.is_some_and(|sq| board.is_attacked(sq, color.flip()))
    }

    pub(crate) fn commit(&mut self, board: Board, color: Color, king: Option<Square>, last_move: (Square, Square)) {
        self.board = board;
        self.kings[color.index()] = king;
        self.last_move = Some(last_move);
        self.double_step = None;
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn is_double_step(piece: Piece, start: Square, end: Square) -> bool {
    piece.kind() == PieceKind::Pawn && start.same_file(end) && start.manhattan_distance(end) == 2
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn piece(kind: PieceKind, color: Color, at: &str) -> Option<Piece> {
        Some(Piece::new(kind, color, sq(at)))
    }

    #[test]
    fn new_game_state() {
        let game = Game::new();
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.turn_number(), 1);
        assert_eq!(game.king_square(Color::White), Some(Square::E1));
        assert_eq!(game.king_square(Color::Black), Some(Square::E8));
        assert!(!game.is_check(Color::White));
        assert!(!game.is_check(Color::Black));
    }

    #[test]
    fn turn_rejections() {
        let mut game = Game::new();
        assert_eq!(game.turn(sq("A3"), sq("A4")), Err(MoveError::EmptySquare { from: sq("A3") }));
        assert!(matches!(
            game.turn(sq("A7"), sq("A5")),
            Err(MoveError::NotYourPiece { found: Color::Black, mover: Color::White, .. })
        ));
        assert!(matches!(
            game.turn(sq("A2"), sq("A5")),
            Err(MoveError::InvalidPattern { kind: PieceKind::Pawn, .. })
        ));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn turn_moves_piece_and_keeps_mover() {
        let mut game = Game::new();
        game.turn(sq("A2"), sq("A4")).unwrap();
        assert!(game.board().piece(sq("A2")).is_none());
        assert_eq!(game.board().piece(sq("A4")).map(|p| p.kind()), Some(PieceKind::Pawn));
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.turn_number(), 1);
        assert_eq!(game.last_double_step(), Some((sq("A2"), sq("A4"))));

        game.turn(sq("B1"), sq("C3")).unwrap();
        assert_eq!(game.last_double_step(), None);
        assert_eq!(game.last_move(), Some((sq("B1"), sq("C3"))));
    }

    #[test]
    fn pass_turn_flips_once() {
        let mut game = Game::new();
        game.pass_turn();
        assert_eq!(game.current_color(), Color::Black);
        assert_eq!(game.turn_number(), 2);
        game.pass_turn();
        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.turn_number(), 3);
    }

    #[test]
    fn king_cache_follows_king_moves() {
        let mut game = Game::new();
        game.turn(sq("E2"), sq("E4")).unwrap();
        game.turn(sq("E1"), sq("E2")).unwrap();
        assert_eq!(game.king_square(Color::White), Some(sq("E2")));
    }

    #[test]
    fn misplaced_kings_are_in_check() {
        let mut game = Game::new();
        game.place(sq("E2"), piece(PieceKind::King, Color::Black, "E2"));
        game.place(sq("E7"), piece(PieceKind::King, Color::White, "E7"));
        assert_eq!(game.king_square(Color::White), Some(sq("E7")));
        assert!(game.is_check(Color::White));
        assert!(game.is_check(Color::Black));
    }

    #[test]
    fn place_over_king_clears_cache() {
        let mut game = Game::new();
        game.place(Square::E1, None);
        assert_eq!(game.king_square(Color::White), None);
        assert!(!game.is_check(Color::White));
    }

    #[test]
    fn pinned_piece_cannot_expose_king() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, piece(PieceKind::King, Color::White, "E1"));
        board.set_piece(sq("E2"), piece(PieceKind::Bishop, Color::White, "E2"));
        board.set_piece(sq("E8"), piece(PieceKind::Rook, Color::Black, "E8"));
        board.set_piece(Square::A8, piece(PieceKind::King, Color::Black, "A8"));
        let mut game = Game::from_board(board, Color::White);
        let before = game.clone();

        assert_eq!(
            game.turn(sq("E2"), sq("D3")),
            Err(MoveError::ExposesKing { from: sq("E2"), to: sq("D3") })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, piece(PieceKind::King, Color::White, "E1"));
        board.set_piece(sq("D8"), piece(PieceKind::Rook, Color::Black, "D8"));
        let mut game = Game::from_board(board, Color::White);

        assert!(matches!(game.turn(Square::E1, Square::D1), Err(MoveError::ExposesKing { .. })));
        assert_eq!(game.king_square(Color::White), Some(Square::E1));
        game.turn(Square::E1, Square::F1).unwrap();
        assert_eq!(game.king_square(Color::White), Some(Square::F1));
    }

    #[test]
    fn capture_that_fails_safety_restores_the_victim() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, piece(PieceKind::King, Color::White, "E1"));
        board.set_piece(sq("E2"), piece(PieceKind::Rook, Color::White, "E2"));
        board.set_piece(sq("D2"), piece(PieceKind::Knight, Color::Black, "D2"));
        board.set_piece(sq("E7"), piece(PieceKind::Queen, Color::Black, "E7"));
        let mut game = Game::from_board(board, Color::White);

        // Rook E2 is pinned; it cannot leave the file, even to capture.
        let before = *game.board();
        assert!(game.turn(sq("E2"), sq("D2")).is_err());
        assert_eq!(*game.board(), before);
        // Capturing the pinner along the file is fine.
        game.turn(sq("E2"), sq("E7")).unwrap();
        assert_eq!(game.board().piece(sq("E7")).map(|p| p.color()), Some(Color::White));
    }
}
