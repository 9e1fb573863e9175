//! Per-piece destination-set generation.
//!
//! Each generator maps a source square plus the relevant occupancy sets to
//! a bitboard of reachable destinations. Sliders are ray-cast and stop at
//! the first occupied square, which stays in the set as a capture unless it
//! is friendly. Fixed-offset pieces are masked so no step wraps around a
//! file edge; rank overflow falls off the 64-bit word by itself.

use bitchess_core::{Color, Square};

use crate::Bitboard;

/// Pawn pushes and captures from `from`.
///
/// `capturable` is the opponent's occupancy plus its en-passant target
/// square, so the diagonal pattern covers en-passant captures too.
pub fn pawn_moves(from: Square, color: Color, occupied: Bitboard, capturable: Bitboard) -> Bitboard {
    let origin = Bitboard::from_square(from);
    let empty = !occupied;
    let mut moves = Bitboard::EMPTY;

    let (single, start_rank) = match color {
        Color::White => (origin.north(), Bitboard::RANK_2),
        Color::Black => (origin.south(), Bitboard::RANK_7),
    };
    if (single & empty).is_not_empty() {
        moves |= single;
        // double push only from the starting rank, through an empty square
        if (origin & start_rank).is_not_empty() {
            let double = match color {
                Color::White => single.north(),
                Color::Black => single.south(),
            };
            if (double & empty).is_not_empty() {
                moves |= double;
            }
        }
    }

    moves | (pawn_attacks(from, color) & capturable)
}

/// The squares a pawn on `from` attacks, independent of occupancy.
pub fn pawn_attacks(from: Square, color: Color) -> Bitboard {
    let origin = Bitboard::from_square(from);
    match color {
        Color::White => origin.north_west() | origin.north_east(),
        Color::Black => origin.south_west() | origin.south_east(),
    }
}

/// Rook destinations: rays in the four orthogonal directions.
pub fn rook_moves(from: Square, occupied: Bitboard, friendly: Bitboard) -> Bitboard {
    let mut moves = Bitboard::EMPTY;

    for dir in [1i8, -1, 8, -8] {
        let mut pos = from.index() as i8;
        loop {
            pos += dir;
            if !(0..64).contains(&pos) {
                break;
            }
            // a horizontal step that lands on the far file wrapped an edge
            if dir == 1 && pos % 8 == 0 {
                break;
            }
            if dir == -1 && (pos + 1) % 8 == 0 {
                break;
            }

            let mask = Bitboard::new(1u64 << pos);
            if (friendly & mask).is_not_empty() {
                break;
            }
            moves |= mask;
            if (occupied & mask).is_not_empty() {
                break;
            }
        }
    }

    moves
}

/// Bishop destinations: rays in the four diagonal directions.
pub fn bishop_moves(from: Square, occupied: Bitboard, friendly: Bitboard) -> Bitboard {
    let mut moves = Bitboard::EMPTY;

    for dir in [7i8, 9, -7, -9] {
        let mut pos = from.index() as i8;
        loop {
            let prev = pos;
            pos += dir;
            if !(0..64).contains(&pos) {
                break;
            }
            // a diagonal step moves exactly one file; any other delta wrapped
            if (prev % 8 - pos % 8).abs() != 1 {
                break;
            }

            let mask = Bitboard::new(1u64 << pos);
            if (friendly & mask).is_not_empty() {
                break;
            }
            moves |= mask;
            if (occupied & mask).is_not_empty() {
                break;
            }
        }
    }

    moves
}

/// Knight destinations: eight fixed offsets, each gated by a file mask that
/// rejects jumps wrapping past the a/b or g/h files.
pub fn knight_moves(from: Square, friendly: Bitboard) -> Bitboard {
    let origin = Bitboard::from_square(from);

    let moves = ((origin & Bitboard::NOT_FILE_H) << 17)
        | ((origin & Bitboard::NOT_FILE_A) << 15)
        | ((origin & Bitboard::NOT_FILE_GH) << 10)
        | ((origin & Bitboard::NOT_FILE_AB) << 6)
        | ((origin & Bitboard::NOT_FILE_GH) >> 6)
        | ((origin & Bitboard::NOT_FILE_AB) >> 10)
        | ((origin & Bitboard::NOT_FILE_H) >> 15)
        | ((origin & Bitboard::NOT_FILE_A) >> 17);

    moves & !friendly
}

/// King destinations: the eight adjacent squares.
pub fn king_moves(from: Square, friendly: Bitboard) -> Bitboard {
    let origin = Bitboard::from_square(from);

    let moves = origin.north()
        | origin.south()
        | origin.east()
        | origin.west()
        | origin.north_east()
        | origin.north_west()
        | origin.south_east()
        | origin.south_west();

    moves & !friendly
}

/// Queen destinations: the union of rook and bishop rays.
pub fn queen_moves(from: Square, occupied: Bitboard, friendly: Bitboard) -> Bitboard {
    rook_moves(from, occupied, friendly) | bishop_moves(from, occupied, friendly)
}
