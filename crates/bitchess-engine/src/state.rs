//! Persisted game state and the word codec.
//!
//! A game is stored as one serializable snapshot per opaque game id. The
//! 64-bit occupancy and en-passant words travel as base64 strings of their
//! big-endian bytes; everything else is plain data. The engine itself never
//! talks to the store, it only produces and consumes these values.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bitchess_core::{Color, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::LastMove;

/// Errors decoding a persisted payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("payload is not valid base64: {0}")]
    InvalidEncoding(#[from] base64::DecodeError),
    #[error("payload is {actual} bytes, expected {expected}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Encodes one 64-bit word as base64 of its big-endian bytes.
pub fn encode_word(word: u64) -> String {
    STANDARD.encode(word.to_be_bytes())
}

/// Decodes one base64-encoded 64-bit word.
pub fn decode_word(payload: &str) -> Result<u64, StateError> {
    let bytes = STANDARD.decode(payload)?;
    if bytes.len() != 8 {
        return Err(StateError::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        });
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes);
    Ok(u64::from_be_bytes(buf))
}

/// Encodes a sequence of words as base64 of their concatenated big-endian
/// bytes.
pub fn encode_words(words: &[u64]) -> String {
    let mut bytes = Vec::with_capacity(words.len() * 8);
    for word in words {
        bytes.extend_from_slice(&word.to_be_bytes());
    }
    STANDARD.encode(bytes)
}

/// Decodes exactly `N` words from a base64 payload.
pub fn decode_words<const N: usize>(payload: &str) -> Result<[u64; N], StateError> {
    let bytes = STANDARD.decode(payload)?;
    if bytes.len() != N * 8 {
        return Err(StateError::InvalidLength {
            expected: N * 8,
            actual: bytes.len(),
        });
    }
    let mut words = [0u64; N];
    for (i, chunk) in bytes.chunks_exact(8).enumerate() {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        words[i] = u64::from_be_bytes(buf);
    }
    Ok(words)
}

/// Serialized board contents: the live copy and the snapshot copy of the
/// twelve occupancy words, the six castling flags and the two en-passant
/// words, plus the recorded checkmate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Twelve occupancy words: white pawn..king, then black pawn..king.
    pub pieces: String,
    pub white_king_moved: bool,
    pub black_king_moved: bool,
    pub white_kingside_rook_lost: bool,
    pub white_queenside_rook_lost: bool,
    pub black_kingside_rook_lost: bool,
    pub black_queenside_rook_lost: bool,
    pub white_en_passant: String,
    pub black_en_passant: String,
    pub checkmate: Option<Color>,
    pub prev_pieces: String,
    pub prev_white_king_moved: bool,
    pub prev_black_king_moved: bool,
    pub prev_white_kingside_rook_lost: bool,
    pub prev_white_queenside_rook_lost: bool,
    pub prev_black_kingside_rook_lost: bool,
    pub prev_black_queenside_rook_lost: bool,
    pub prev_white_en_passant: String,
    pub prev_black_en_passant: String,
}

/// Serialized game wrapper around [`BoardState`]: turn, cached FEN, the
/// last-move record, and the pending-promotion square if the game was
/// stored mid-promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub turn: Color,
    pub fen: String,
    pub checkmate: Option<Color>,
    pub last_move: Option<LastMove>,
    pub pending_promotion: Option<Square>,
    pub board: BoardState,
}
