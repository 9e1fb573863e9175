//! Bitboard chess rules engine.
//!
//! The engine maintains one position as twelve 64-bit occupancy sets,
//! generates legal moves per piece, detects check and checkmate, and
//! enforces castling, en passant, and promotion. A single snapshot slot
//! backs both the rejection of illegal trial moves and the probe/revert
//! loops used for legality filtering and checkmate search.
//!
//! The engine is synchronous and does no I/O. The intended life cycle is
//! load -> one mutation -> persist: a caller decodes a stored [`GameState`],
//! rebuilds a [`Game`], performs one action, and serializes the result
//! back. Callers that mutate the same stored game concurrently must
//! serialize access themselves.

mod bitboard;
mod board;
mod game;
pub mod movegen;
mod state;

pub use bitboard::{Bitboard, BitboardIter};
pub use board::{Board, CastlingRights, MoveError, PromotionError, ValidSquares, Wing};
pub use game::{Coord, Game, GameError, GameStatus, LastMove};
pub use state::{
    decode_word, decode_words, encode_word, encode_words, BoardState, GameState, StateError,
};
