//! The turn/promotion/checkmate state machine wrapping one [`Board`], plus
//! the coordinate mapping used by external callers.

use bitchess_core::{Color, Move, Piece, PromotionPiece, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, MoveError, PromotionError, ValidSquares};
use crate::state::{GameState, StateError};

/// An external board coordinate: row 0 is rank 8, column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Coord { row, col }
    }
}

/// The previous move in external coordinates, kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMove {
    pub from: Coord,
    pub to: Coord,
}

/// Where the game stands between actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move may act.
    Playing,
    /// A pawn reached its promotion rank on the given square; the turn does
    /// not pass until the promotion choice arrives.
    PendingPromotion(Square),
    /// Terminal: the given color has been checkmated.
    Checkmate(Color),
}

/// Reasons a game-level action is rejected. Game and board state are
/// unchanged after any of them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("not {0}'s turn")]
    WrongTurn(Color),
    #[error("a promotion is pending and must be resolved first")]
    PromotionPending,
    #[error("game over: {0} is checkmated")]
    GameOver(Color),
    #[error("coordinate ({row}, {col}) is off the board")]
    InvalidCoordinate { row: u8, col: u8 },
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error(transparent)]
    Promotion(#[from] PromotionError),
}

/// One chess game: a [`Board`] plus turn, cached FEN, last-move record and
/// the promotion/checkmate state machine.
#[derive(Debug, Clone)]
pub struct Game {
    turn: Color,
    fen: String,
    status: GameStatus,
    last_move: Option<LastMove>,
    board: Board,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game in the starting position, white to move.
    pub fn new() -> Self {
        let board = Board::new();
        let fen = board.generate_fen();
        Game {
            turn: Color::White,
            fen,
            status: GameStatus::Playing,
            last_move: None,
            board,
        }
    }

    fn square_at(coord: Coord) -> Result<Square, GameError> {
        if coord.row > 7 || coord.col > 7 {
            return Err(GameError::InvalidCoordinate {
                row: coord.row,
                col: coord.col,
            });
        }
        // row 0 is rank 8 as seen from white
        // SAFETY: both components are 0-7
        Ok(unsafe { Square::from_index_unchecked((7 - coord.row) * 8 + coord.col) })
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Playing => Ok(()),
            GameStatus::PendingPromotion(_) => Err(GameError::PromotionPending),
            GameStatus::Checkmate(mated) => Err(GameError::GameOver(mated)),
        }
    }

    fn ensure_turn(&self, color: Color) -> Result<(), GameError> {
        if self.turn != color {
            return Err(GameError::WrongTurn(color));
        }
        Ok(())
    }

    /// Moves a piece of `color` between two external coordinates.
    ///
    /// A legal move flips the turn, unless the mover's pawn now waits on
    /// its promotion rank, in which case the game enters
    /// [`GameStatus::PendingPromotion`] and the turn stays.
    pub fn move_piece(
        &mut self,
        from: Coord,
        to: Coord,
        piece: Piece,
        color: Color,
    ) -> Result<(), GameError> {
        self.ensure_playing()?;
        self.ensure_turn(color)?;

        let mv = Move::new(Self::square_at(from)?, Self::square_at(to)?, piece, color);
        let landing = mv.to;
        self.board.make_move(mv)?;
        self.fen = self.board.generate_fen();
        self.last_move = Some(LastMove { from, to });

        if piece == Piece::Pawn && self.board.can_promote_pawn(color) {
            self.status = GameStatus::PendingPromotion(landing);
            return Ok(());
        }

        self.turn = color.opposite();
        if let Some(mated) = self.board.checkmate() {
            self.status = GameStatus::Checkmate(mated);
        }
        Ok(())
    }

    /// Resolves a pending promotion for `color`, flipping the turn and
    /// evaluating checkmate on the post-promotion position.
    pub fn promote_pawn(
        &mut self,
        color: Color,
        promotion: PromotionPiece,
    ) -> Result<(), GameError> {
        if let GameStatus::Checkmate(mated) = self.status {
            return Err(GameError::GameOver(mated));
        }
        self.ensure_turn(color)?;

        self.board.promote_pawn(color, promotion)?;
        self.fen = self.board.generate_fen();
        self.turn = color.opposite();
        self.status = match self.board.checkmate() {
            Some(mated) => GameStatus::Checkmate(mated),
            None => GameStatus::Playing,
        };
        Ok(())
    }

    /// Legal destinations for the piece of `color` standing on `at`, split
    /// into quiet moves and captures.
    pub fn valid_squares(
        &mut self,
        at: Coord,
        piece: Piece,
        color: Color,
    ) -> Result<ValidSquares, GameError> {
        self.ensure_playing()?;
        self.ensure_turn(color)?;
        Ok(self.board.valid_squares(Self::square_at(at)?, piece, color)?)
    }

    /// True when a pawn of `color` stands on its promotion rank.
    pub fn can_promote_pawn(&self, color: Color) -> bool {
        self.board.can_promote_pawn(color)
    }

    /// The cached FEN placement field for the current position.
    pub fn fen(&self) -> &str {
        &self.fen
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current state-machine status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The checkmated color, if the game has ended.
    pub fn checkmate(&self) -> Option<Color> {
        self.board.checkmate()
    }

    /// The previous move in external coordinates, if any.
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Read access to the underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Serializes the game for persistence.
    pub fn to_state(&self) -> GameState {
        GameState {
            turn: self.turn,
            fen: self.fen.clone(),
            checkmate: self.board.checkmate(),
            last_move: self.last_move,
            pending_promotion: match self.status {
                GameStatus::PendingPromotion(square) => Some(square),
                _ => None,
            },
            board: self.board.to_state(),
        }
    }

    /// Rebuilds a game from a persisted state.
    pub fn from_state(state: &GameState) -> Result<Self, StateError> {
        let board = Board::from_state(&state.board)?;
        let status = if let Some(mated) = board.checkmate() {
            GameStatus::Checkmate(mated)
        } else if let Some(square) = state.pending_promotion {
            GameStatus::PendingPromotion(square)
        } else {
            GameStatus::Playing
        };
        Ok(Game {
            turn: state.turn,
            fen: state.fen.clone(),
            status,
            last_move: state.last_move,
            board,
        })
    }
}
