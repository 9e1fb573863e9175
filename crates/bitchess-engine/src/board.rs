//! The bitboard engine: occupancy, the move commit/rejection protocol,
//! check and checkmate detection, castling, en passant, and promotion.

use bitchess_core::{Color, Move, Piece, PromotionPiece, Square};
use thiserror::Error;

use crate::movegen;
use crate::state::{decode_word, decode_words, encode_word, encode_words, BoardState, StateError};
use crate::Bitboard;

/// Castling wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Wing {
    Kingside = 0,
    Queenside = 1,
}

/// The six castling-rights flags: per color, whether the king has ever
/// moved and whether each corner rook has moved or been captured.
///
/// `Default` means full rights, matching the starting position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    king_moved: [bool; 2],
    rook_lost: [[bool; 2]; 2],
}

impl CastlingRights {
    /// Whether the king of `color` has ever moved.
    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    /// Whether `color`'s rook on `wing` has moved or been captured.
    #[inline]
    pub fn rook_lost(&self, color: Color, wing: Wing) -> bool {
        self.rook_lost[color.index()][wing as usize]
    }

    fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    fn mark_rook_lost(&mut self, color: Color, wing: Wing) {
        self.rook_lost[color.index()][wing as usize] = true;
    }

    /// Records a rook of `color` leaving, or being captured on, one of its
    /// home corners. Any other square is ignored.
    fn mark_rook_square(&mut self, color: Color, square: Square) {
        match color {
            Color::White => {
                if square == Square::H1 {
                    self.mark_rook_lost(color, Wing::Kingside);
                } else if square == Square::A1 {
                    self.mark_rook_lost(color, Wing::Queenside);
                }
            }
            Color::Black => {
                if square == Square::H8 {
                    self.mark_rook_lost(color, Wing::Kingside);
                } else if square == Square::A8 {
                    self.mark_rook_lost(color, Wing::Queenside);
                }
            }
        }
    }
}

/// One level of undo: the full copy restored when a trial or rejected move
/// is reverted. Probing always applies then immediately reverts, so a
/// single slot is sufficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    pieces: [[Bitboard; 6]; 2],
    rights: CastlingRights,
    en_passant: [Bitboard; 2],
}

/// Reasons a move is rejected. The board is unchanged after any of them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("source and destination are the same square")]
    InvalidSquare,
    #[error("no {color} {piece} on {square}")]
    NoPieceAtSource {
        color: Color,
        piece: Piece,
        square: Square,
    },
    #[error("{piece} cannot reach {to}")]
    IllegalDestination { piece: Piece, to: Square },
    #[error("move would leave own king in check")]
    SelfCheckViolation,
    #[error("game over: {0} is checkmated")]
    GameOver(Color),
}

/// Reasons a promotion is rejected. The board is unchanged after any of
/// them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PromotionError {
    #[error("no {0} pawn on the promotion rank")]
    NoCandidate(Color),
    #[error("more than one {0} pawn on the promotion rank")]
    AmbiguousCandidate(Color),
    #[error("game over: {0} is checkmated")]
    GameOver(Color),
}

/// Legal destinations reported to a frontend, split into quiet moves and
/// captures, each in ascending square order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidSquares {
    pub quiet: Vec<Square>,
    pub capture: Vec<Square>,
}

/// Geometry of one castling move.
struct CastleLane {
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
    /// Squares strictly between king and rook, all of which must be empty.
    between: Bitboard,
    /// King origin, transit, and destination, none of which may be attacked.
    safe: [Square; 3],
}

/// The bitboard chess engine.
///
/// Twelve occupancy sets (piece type x color), the castling-rights flags,
/// per-color en-passant targets, and a single snapshot slot. Every mutating
/// operation either commits completely or restores the snapshot; a rejected
/// call leaves the board bit-for-bit as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: [[Bitboard; 6]; 2],
    rights: CastlingRights,
    en_passant: [Bitboard; 2],
    snapshot: Snapshot,
    checkmate: Option<Color>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board in the standard starting position.
    pub fn new() -> Self {
        let white = [
            Bitboard::RANK_2,          // pawns
            Bitboard::new(0x42),       // knights on b1, g1
            Bitboard::new(0x24),       // bishops on c1, f1
            Bitboard::new(0x81),       // rooks on a1, h1
            Bitboard::new(0x08),       // queen on d1
            Bitboard::new(0x10),       // king on e1
        ];
        let black = [
            Bitboard::RANK_7,
            Bitboard::new(0x42 << 56),
            Bitboard::new(0x24 << 56),
            Bitboard::new(0x81 << 56),
            Bitboard::new(0x08 << 56),
            Bitboard::new(0x10 << 56),
        ];
        let pieces = [white, black];
        let rights = CastlingRights::default();
        let en_passant = [Bitboard::EMPTY; 2];

        Board {
            pieces,
            rights,
            en_passant,
            snapshot: Snapshot {
                pieces,
                rights,
                en_passant,
            },
            checkmate: None,
        }
    }

    /// The occupancy set for one piece type of one color.
    #[inline]
    pub fn pieces_of(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// All squares occupied by `color`.
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces[color.index()]
            .iter()
            .fold(Bitboard::EMPTY, |acc, bb| acc | *bb)
    }

    /// All occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by(Color::White) | self.occupied_by(Color::Black)
    }

    /// The piece and color on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        for color in [Color::White, Color::Black] {
            for piece in Piece::ALL {
                if self.pieces_of(color, piece).contains(square) {
                    return Some((piece, color));
                }
            }
        }
        None
    }

    /// The checkmated color, if the game has ended.
    #[inline]
    pub fn checkmate(&self) -> Option<Color> {
        self.checkmate
    }

    /// The en-passant target set left by `color`'s last double push.
    #[inline]
    pub fn en_passant(&self, color: Color) -> Bitboard {
        self.en_passant[color.index()]
    }

    /// The current castling-rights flags.
    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.rights
    }

    fn live(&self) -> Snapshot {
        Snapshot {
            pieces: self.pieces,
            rights: self.rights,
            en_passant: self.en_passant,
        }
    }

    fn commit(&mut self) {
        self.snapshot = self.live();
    }

    fn restore(&mut self) {
        let Snapshot {
            pieces,
            rights,
            en_passant,
        } = self.snapshot;
        self.pieces = pieces;
        self.rights = rights;
        self.en_passant = en_passant;
    }

    /// Pseudo-legal destination set for a piece of `color` standing on
    /// `from`. Castling is not included here; it is offered separately as a
    /// special king destination.
    pub fn moves_from(&self, from: Square, piece: Piece, color: Color) -> Bitboard {
        let occupied = self.occupied();
        let friendly = self.occupied_by(color);
        match piece {
            Piece::Pawn => {
                let them = color.opposite();
                let capturable = self.occupied_by(them) | self.en_passant[them.index()];
                movegen::pawn_moves(from, color, occupied, capturable)
            }
            Piece::Knight => movegen::knight_moves(from, friendly),
            Piece::Bishop => movegen::bishop_moves(from, occupied, friendly),
            Piece::Rook => movegen::rook_moves(from, occupied, friendly),
            Piece::Queen => movegen::queen_moves(from, occupied, friendly),
            Piece::King => movegen::king_moves(from, friendly),
        }
    }

    /// True when any piece of `by` attacks `square`.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        let occupied = self.occupied();
        let friendly = self.occupied_by(by);
        let target = Bitboard::from_square(square);

        for piece in Piece::ALL {
            let mut attacks = Bitboard::EMPTY;
            for from in self.pieces_of(by, piece) {
                attacks |= match piece {
                    Piece::Pawn => movegen::pawn_attacks(from, by),
                    Piece::Knight => movegen::knight_moves(from, friendly),
                    Piece::Bishop => movegen::bishop_moves(from, occupied, friendly),
                    Piece::Rook => movegen::rook_moves(from, occupied, friendly),
                    Piece::Queen => movegen::queen_moves(from, occupied, friendly),
                    Piece::King => movegen::king_moves(from, friendly),
                };
            }
            if (attacks & target).is_not_empty() {
                return true;
            }
        }
        false
    }

    /// True when `color`'s king is attacked by the opponent.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.pieces_of(color, Piece::King).lsb_square() {
            Some(king) => self.is_square_attacked(king, color.opposite()),
            None => false,
        }
    }

    fn castle_lane(color: Color, wing: Wing) -> CastleLane {
        match (color, wing) {
            (Color::White, Wing::Kingside) => CastleLane {
                king_from: Square::E1,
                king_to: Square::G1,
                rook_from: Square::H1,
                rook_to: Square::F1,
                between: Bitboard::from_square(Square::F1) | Bitboard::from_square(Square::G1),
                safe: [Square::E1, Square::F1, Square::G1],
            },
            (Color::White, Wing::Queenside) => CastleLane {
                king_from: Square::E1,
                king_to: Square::C1,
                rook_from: Square::A1,
                rook_to: Square::D1,
                between: Bitboard::from_square(Square::B1)
                    | Bitboard::from_square(Square::C1)
                    | Bitboard::from_square(Square::D1),
                safe: [Square::E1, Square::D1, Square::C1],
            },
            (Color::Black, Wing::Kingside) => CastleLane {
                king_from: Square::E8,
                king_to: Square::G8,
                rook_from: Square::H8,
                rook_to: Square::F8,
                between: Bitboard::from_square(Square::F8) | Bitboard::from_square(Square::G8),
                safe: [Square::E8, Square::F8, Square::G8],
            },
            (Color::Black, Wing::Queenside) => CastleLane {
                king_from: Square::E8,
                king_to: Square::C8,
                rook_from: Square::A8,
                rook_to: Square::D8,
                between: Bitboard::from_square(Square::B8)
                    | Bitboard::from_square(Square::C8)
                    | Bitboard::from_square(Square::D8),
                safe: [Square::E8, Square::D8, Square::C8],
            },
        }
    }

    /// True when `color` may castle on `wing` in the current position.
    pub fn can_castle(&self, color: Color, wing: Wing) -> bool {
        if self.rights.king_moved(color) || self.rights.rook_lost(color, wing) {
            return false;
        }
        let lane = Self::castle_lane(color, wing);
        if !self.pieces_of(color, Piece::Rook).contains(lane.rook_from) {
            return false;
        }
        if (self.occupied() & lane.between).is_not_empty() {
            return false;
        }
        let them = color.opposite();
        lane.safe.iter().all(|&sq| !self.is_square_attacked(sq, them))
    }

    /// Castling destination squares currently available to `color`'s king.
    pub fn castling_destinations(&self, color: Color) -> Bitboard {
        let mut moves = Bitboard::EMPTY;
        for wing in [Wing::Kingside, Wing::Queenside] {
            if self.can_castle(color, wing) {
                moves.set(Self::castle_lane(color, wing).king_to);
            }
        }
        moves
    }

    /// Relocates king and rook together. Castling is a king move, so the
    /// rights flags are spent with it.
    fn execute_castle(&mut self, color: Color, wing: Wing) {
        let lane = Self::castle_lane(color, wing);
        let side = &mut self.pieces[color.index()];
        side[Piece::King.index()].clear(lane.king_from);
        side[Piece::King.index()].set(lane.king_to);
        side[Piece::Rook.index()].clear(lane.rook_from);
        side[Piece::Rook.index()].set(lane.rook_to);
        self.rights.mark_king_moved(color);
        self.rights.mark_rook_lost(color, wing);
    }

    /// Removes whatever `color` piece occupies `square`.
    fn remove_piece(&mut self, color: Color, square: Square) {
        for piece in Piece::ALL {
            if self.pieces_of(color, piece).contains(square) {
                self.pieces[color.index()][piece.index()].clear(square);
                if piece == Piece::Rook {
                    self.rights.mark_rook_square(color, square);
                }
                return;
            }
        }
    }

    /// Applies `m` without the self-check test or snapshot bookkeeping.
    ///
    /// All validation happens before the first mutation, so an error leaves
    /// the board untouched.
    fn apply(&mut self, m: &Move) -> Result<(), MoveError> {
        if m.from == m.to {
            return Err(MoveError::InvalidSquare);
        }
        if !self.pieces_of(m.color, m.piece).contains(m.from) {
            return Err(MoveError::NoPieceAtSource {
                color: m.color,
                piece: m.piece,
                square: m.from,
            });
        }

        if m.piece == Piece::King {
            for wing in [Wing::Kingside, Wing::Queenside] {
                let lane = Self::castle_lane(m.color, wing);
                if m.from == lane.king_from && m.to == lane.king_to && self.can_castle(m.color, wing)
                {
                    self.execute_castle(m.color, wing);
                    return Ok(());
                }
            }
        }

        if !self.moves_from(m.from, m.piece, m.color).contains(m.to) {
            return Err(MoveError::IllegalDestination {
                piece: m.piece,
                to: m.to,
            });
        }

        let them = m.color.opposite();
        if self.occupied_by(them).contains(m.to) {
            self.remove_piece(them, m.to);
        } else if m.piece == Piece::Pawn && self.en_passant[them.index()].contains(m.to) {
            // the captured pawn sits one rank behind the target square
            let victim = match m.color {
                Color::White => m.to.index() - 8,
                Color::Black => m.to.index() + 8,
            };
            // SAFETY: an en-passant target is always on rank 3 or 6
            let victim = unsafe { Square::from_index_unchecked(victim) };
            self.remove_piece(them, victim);
        }

        let mover = &mut self.pieces[m.color.index()][m.piece.index()];
        mover.clear(m.from);
        mover.set(m.to);

        match m.piece {
            Piece::King => self.rights.mark_king_moved(m.color),
            Piece::Rook => self.rights.mark_rook_square(m.color, m.from),
            Piece::Pawn => {
                let from = m.from.index() as i8;
                let to = m.to.index() as i8;
                if (from - to).abs() == 16 {
                    // double push: the skipped square becomes the target
                    let skipped = ((from + to) / 2) as u8;
                    self.en_passant[m.color.index()] = Bitboard::new(1u64 << skipped);
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Validates and commits one move.
    ///
    /// The mover's en-passant window closes at the start of the move. The
    /// move is applied tentatively; if the resulting position leaves the
    /// mover's own king attacked, the snapshot is restored and nothing is
    /// committed. A committed move becomes the new snapshot, after which the
    /// opponent is evaluated for checkmate, unless a pawn of the mover now
    /// waits on its promotion rank (evaluation is deferred to the
    /// promotion).
    pub fn make_move(&mut self, m: Move) -> Result<(), MoveError> {
        if let Some(mated) = self.checkmate {
            return Err(MoveError::GameOver(mated));
        }

        self.en_passant[m.color.index()] = Bitboard::EMPTY;
        if let Err(err) = self.apply(&m) {
            self.restore();
            return Err(err);
        }
        if self.is_in_check(m.color) {
            self.restore();
            return Err(MoveError::SelfCheckViolation);
        }
        self.commit();

        if m.piece == Piece::Pawn && self.can_promote_pawn(m.color) {
            return Ok(());
        }
        self.evaluate_checkmate(m.color.opposite());
        Ok(())
    }

    fn evaluate_checkmate(&mut self, color: Color) {
        if self.is_in_check(color) && self.is_checkmated(color) {
            self.checkmate = Some(color);
        }
    }

    /// Exhaustive escape search: probes every pseudo-legal move of `color`
    /// through the snapshot and reports whether each one leaves the king in
    /// check. Never more than one level deep.
    fn is_checkmated(&mut self, color: Color) -> bool {
        for m in self.pseudo_legal_moves(color) {
            let applied = self.apply(&m).is_ok();
            let escapes = applied && !self.is_in_check(color);
            self.restore();
            if escapes {
                return false;
            }
        }
        true
    }

    fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in Piece::ALL {
            for from in self.pieces_of(color, piece) {
                for to in self.moves_from(from, piece, color) {
                    moves.push(Move::new(from, to, piece, color));
                }
            }
        }
        moves
    }

    fn promotion_candidates(&self, color: Color) -> Bitboard {
        let rank = match color {
            Color::White => Bitboard::RANK_8,
            Color::Black => Bitboard::RANK_1,
        };
        self.pieces_of(color, Piece::Pawn) & rank
    }

    /// True when a pawn of `color` stands on its promotion rank.
    pub fn can_promote_pawn(&self, color: Color) -> bool {
        self.promotion_candidates(color).is_not_empty()
    }

    /// Replaces the single promotion-rank pawn of `color` with the chosen
    /// piece on the same square, then evaluates the opponent for checkmate.
    ///
    /// Single-move granularity means at most one candidate can exist; zero
    /// or several candidates are rejected without touching the board.
    pub fn promote_pawn(
        &mut self,
        color: Color,
        promotion: PromotionPiece,
    ) -> Result<(), PromotionError> {
        if let Some(mated) = self.checkmate {
            return Err(PromotionError::GameOver(mated));
        }
        let candidates = self.promotion_candidates(color);
        match candidates.count() {
            0 => return Err(PromotionError::NoCandidate(color)),
            1 => {}
            _ => return Err(PromotionError::AmbiguousCandidate(color)),
        }

        let side = &mut self.pieces[color.index()];
        side[Piece::Pawn.index()] &= !candidates;
        side[promotion.piece().index()] |= candidates;
        self.commit();

        self.evaluate_checkmate(color.opposite());
        Ok(())
    }

    /// Legal destinations from `from` for a frontend, split into quiet
    /// moves and captures. Each candidate is probed individually through
    /// the snapshot; for a king, available castling destinations are
    /// appended to the quiet list.
    pub fn valid_squares(
        &mut self,
        from: Square,
        piece: Piece,
        color: Color,
    ) -> Result<ValidSquares, MoveError> {
        if !self.pieces_of(color, piece).contains(from) {
            return Err(MoveError::NoPieceAtSource {
                color,
                piece,
                square: from,
            });
        }

        let destinations = self.moves_from(from, piece, color);
        let them = color.opposite();
        let enemy = self.occupied_by(them) | self.en_passant[them.index()];

        let mut result = ValidSquares {
            quiet: self.probe_destinations(from, piece, color, destinations & !enemy),
            capture: self.probe_destinations(from, piece, color, destinations & enemy),
        };
        if piece == Piece::King {
            result.quiet.extend(self.castling_destinations(color));
        }
        Ok(result)
    }

    /// Keeps only the candidate destinations whose move does not leave the
    /// mover's king in check.
    fn probe_destinations(
        &mut self,
        from: Square,
        piece: Piece,
        color: Color,
        candidates: Bitboard,
    ) -> Vec<Square> {
        let mut legal = Vec::new();
        for to in candidates {
            let m = Move::new(from, to, piece, color);
            if self.apply(&m).is_ok() && !self.is_in_check(color) {
                legal.push(to);
            }
            self.restore();
        }
        legal
    }

    /// The FEN piece-placement field for the current position, rank 8 down
    /// to rank 1, empty runs length-encoded.
    pub fn generate_fen(&self) -> String {
        let mut grid = [None::<char>; 64];
        for color in [Color::White, Color::Black] {
            for piece in Piece::ALL {
                for sq in self.pieces_of(color, piece) {
                    grid[sq.index() as usize] = Some(piece.to_fen_char(color));
                }
            }
        }

        let mut fen = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match grid[rank * 8 + file] {
                    Some(c) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }
        fen
    }

    /// Serializes the full board state, snapshot included.
    pub fn to_state(&self) -> BoardState {
        BoardState {
            pieces: encode_words(&flatten(&self.pieces)),
            white_king_moved: self.rights.king_moved(Color::White),
            black_king_moved: self.rights.king_moved(Color::Black),
            white_kingside_rook_lost: self.rights.rook_lost(Color::White, Wing::Kingside),
            white_queenside_rook_lost: self.rights.rook_lost(Color::White, Wing::Queenside),
            black_kingside_rook_lost: self.rights.rook_lost(Color::Black, Wing::Kingside),
            black_queenside_rook_lost: self.rights.rook_lost(Color::Black, Wing::Queenside),
            white_en_passant: encode_word(self.en_passant[Color::White.index()].0),
            black_en_passant: encode_word(self.en_passant[Color::Black.index()].0),
            checkmate: self.checkmate,
            prev_pieces: encode_words(&flatten(&self.snapshot.pieces)),
            prev_white_king_moved: self.snapshot.rights.king_moved(Color::White),
            prev_black_king_moved: self.snapshot.rights.king_moved(Color::Black),
            prev_white_kingside_rook_lost: self
                .snapshot
                .rights
                .rook_lost(Color::White, Wing::Kingside),
            prev_white_queenside_rook_lost: self
                .snapshot
                .rights
                .rook_lost(Color::White, Wing::Queenside),
            prev_black_kingside_rook_lost: self
                .snapshot
                .rights
                .rook_lost(Color::Black, Wing::Kingside),
            prev_black_queenside_rook_lost: self
                .snapshot
                .rights
                .rook_lost(Color::Black, Wing::Queenside),
            prev_white_en_passant: encode_word(self.snapshot.en_passant[Color::White.index()].0),
            prev_black_en_passant: encode_word(self.snapshot.en_passant[Color::Black.index()].0),
        }
    }

    /// Rebuilds a board from its serialized state.
    pub fn from_state(state: &BoardState) -> Result<Self, StateError> {
        let pieces = unflatten(decode_words::<12>(&state.pieces)?);
        let rights = CastlingRights {
            king_moved: [state.white_king_moved, state.black_king_moved],
            rook_lost: [
                [
                    state.white_kingside_rook_lost,
                    state.white_queenside_rook_lost,
                ],
                [
                    state.black_kingside_rook_lost,
                    state.black_queenside_rook_lost,
                ],
            ],
        };
        let en_passant = [
            Bitboard::new(decode_word(&state.white_en_passant)?),
            Bitboard::new(decode_word(&state.black_en_passant)?),
        ];

        let snapshot = Snapshot {
            pieces: unflatten(decode_words::<12>(&state.prev_pieces)?),
            rights: CastlingRights {
                king_moved: [state.prev_white_king_moved, state.prev_black_king_moved],
                rook_lost: [
                    [
                        state.prev_white_kingside_rook_lost,
                        state.prev_white_queenside_rook_lost,
                    ],
                    [
                        state.prev_black_kingside_rook_lost,
                        state.prev_black_queenside_rook_lost,
                    ],
                ],
            },
            en_passant: [
                Bitboard::new(decode_word(&state.prev_white_en_passant)?),
                Bitboard::new(decode_word(&state.prev_black_en_passant)?),
            ],
        };

        Ok(Board {
            pieces,
            rights,
            en_passant,
            snapshot,
            checkmate: state.checkmate,
        })
    }
}

/// Occupancy words in serialization order: white pawn..king, then black
/// pawn..king.
fn flatten(pieces: &[[Bitboard; 6]; 2]) -> [u64; 12] {
    let mut words = [0u64; 12];
    for (c, side) in pieces.iter().enumerate() {
        for (p, bb) in side.iter().enumerate() {
            words[c * 6 + p] = bb.0;
        }
    }
    words
}

fn unflatten(words: [u64; 12]) -> [[Bitboard; 6]; 2] {
    let mut pieces = [[Bitboard::EMPTY; 6]; 2];
    for (i, word) in words.iter().enumerate() {
        pieces[i / 6][i % 6] = Bitboard::new(*word);
    }
    pieces
}
