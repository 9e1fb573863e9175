//! End-to-end flows through the public `Game` surface: full games, the
//! promotion state machine, and the persist/restore cycle.

use bitchess_core::{Color, Piece, PromotionPiece, Square};
use bitchess_engine::{
    encode_word, encode_words, Board, BoardState, Coord, Game, GameError, GameState, GameStatus,
    MoveError,
};

fn c(square: &str) -> Coord {
    let sq = Square::from_algebraic(square).unwrap();
    Coord::new(7 - sq.rank(), sq.file())
}

fn play(game: &mut Game, piece: Piece, color: Color, from: &str, to: &str) {
    game.move_piece(c(from), c(to), piece, color)
        .unwrap_or_else(|e| panic!("{} {} {}{} rejected: {}", color, piece, from, to, e));
}

/// Builds a game from raw occupancy words (white pawn..king, then black
/// pawn..king), full castling rights, no en passant.
fn custom_game(words: [u64; 12], turn: Color) -> Game {
    let pieces = encode_words(&words);
    let empty = encode_word(0);
    let board = BoardState {
        pieces: pieces.clone(),
        white_king_moved: false,
        black_king_moved: false,
        white_kingside_rook_lost: false,
        white_queenside_rook_lost: false,
        black_kingside_rook_lost: false,
        black_queenside_rook_lost: false,
        white_en_passant: empty.clone(),
        black_en_passant: empty.clone(),
        checkmate: None,
        prev_pieces: pieces,
        prev_white_king_moved: false,
        prev_black_king_moved: false,
        prev_white_kingside_rook_lost: false,
        prev_white_queenside_rook_lost: false,
        prev_black_kingside_rook_lost: false,
        prev_black_queenside_rook_lost: false,
        prev_white_en_passant: empty.clone(),
        prev_black_en_passant: empty,
    };
    let fen = Board::from_state(&board).unwrap().generate_fen();
    Game::from_state(&GameState {
        turn,
        fen,
        checkmate: None,
        last_move: None,
        pending_promotion: None,
        board,
    })
    .unwrap()
}

fn bit(square: &str) -> u64 {
    1u64 << Square::from_algebraic(square).unwrap().index()
}

#[test]
fn opening_move_updates_fen_and_turn() {
    let mut game = Game::new();
    play(&mut game, Piece::Pawn, Color::White, "e2", "e4");
    assert_eq!(game.fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR");
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn initial_knight_has_two_quiet_destinations() {
    let mut game = Game::new();
    let moves = game
        .valid_squares(c("b1"), Piece::Knight, Color::White)
        .unwrap();
    assert_eq!(
        moves.quiet,
        vec![
            Square::from_algebraic("a3").unwrap(),
            Square::from_algebraic("c3").unwrap()
        ]
    );
    assert!(moves.capture.is_empty());
}

#[test]
fn fools_mate_ends_the_game_for_every_action() {
    let mut game = Game::new();
    play(&mut game, Piece::Pawn, Color::White, "f2", "f3");
    play(&mut game, Piece::Pawn, Color::Black, "e7", "e5");
    play(&mut game, Piece::Pawn, Color::White, "g2", "g4");
    play(&mut game, Piece::Queen, Color::Black, "d8", "h4");

    assert_eq!(game.checkmate(), Some(Color::White));
    assert_eq!(game.status(), GameStatus::Checkmate(Color::White));

    // every subsequent action by either color is rejected
    let err = game
        .move_piece(c("a2"), c("a3"), Piece::Pawn, Color::White)
        .unwrap_err();
    assert_eq!(err, GameError::GameOver(Color::White));
    let err = game
        .move_piece(c("a7"), c("a6"), Piece::Pawn, Color::Black)
        .unwrap_err();
    assert_eq!(err, GameError::GameOver(Color::White));
    let err = game
        .promote_pawn(Color::Black, PromotionPiece::Queen)
        .unwrap_err();
    assert_eq!(err, GameError::GameOver(Color::White));
    let err = game
        .valid_squares(c("a7"), Piece::Pawn, Color::Black)
        .unwrap_err();
    assert_eq!(err, GameError::GameOver(Color::White));
}

#[test]
fn kingside_castle_in_a_real_game() {
    let mut game = Game::new();
    play(&mut game, Piece::Pawn, Color::White, "e2", "e4");
    play(&mut game, Piece::Pawn, Color::Black, "e7", "e5");
    play(&mut game, Piece::Knight, Color::White, "g1", "f3");
    play(&mut game, Piece::Knight, Color::Black, "b8", "c6");
    play(&mut game, Piece::Bishop, Color::White, "f1", "c4");
    play(&mut game, Piece::Bishop, Color::Black, "f8", "c5");

    // the castle is offered as a king destination
    let moves = game
        .valid_squares(c("e1"), Piece::King, Color::White)
        .unwrap();
    assert!(moves.quiet.contains(&Square::G1));

    play(&mut game, Piece::King, Color::White, "e1", "g1");
    let board = game.board();
    assert_eq!(board.piece_at(Square::G1), Some((Piece::King, Color::White)));
    assert_eq!(board.piece_at(Square::F1), Some((Piece::Rook, Color::White)));
    assert_eq!(board.piece_at(Square::E1), None);
    assert_eq!(board.piece_at(Square::H1), None);
    assert_eq!(game.turn(), Color::Black);
}

#[test]
fn en_passant_capture_through_the_game_surface() {
    let mut game = Game::new();
    play(&mut game, Piece::Pawn, Color::White, "e2", "e4");
    play(&mut game, Piece::Pawn, Color::Black, "a7", "a6");
    play(&mut game, Piece::Pawn, Color::White, "e4", "e5");
    play(&mut game, Piece::Pawn, Color::Black, "d7", "d5");

    // the skipped square is offered as a capture
    let moves = game
        .valid_squares(c("e5"), Piece::Pawn, Color::White)
        .unwrap();
    assert!(moves
        .capture
        .contains(&Square::from_algebraic("d6").unwrap()));

    play(&mut game, Piece::Pawn, Color::White, "e5", "d6");
    let board = game.board();
    assert_eq!(
        board.piece_at(Square::from_algebraic("d6").unwrap()),
        Some((Piece::Pawn, Color::White))
    );
    assert_eq!(board.piece_at(Square::from_algebraic("d5").unwrap()), None);
}

#[test]
fn promotion_state_machine_holds_the_turn() {
    let mut game = custom_game(
        [
            bit("b7"),
            0,
            0,
            0,
            0,
            bit("e1"),
            0,
            0,
            0,
            0,
            0,
            bit("h8"),
        ],
        Color::White,
    );

    play(&mut game, Piece::Pawn, Color::White, "b7", "b8");
    assert_eq!(game.status(), GameStatus::PendingPromotion(Square::B8));
    assert_eq!(game.turn(), Color::White);
    assert!(game.can_promote_pawn(Color::White));

    // no move by anyone until the promotion is resolved
    let err = game
        .move_piece(c("e1"), c("e2"), Piece::King, Color::White)
        .unwrap_err();
    assert_eq!(err, GameError::PromotionPending);
    let err = game
        .move_piece(c("h8"), c("h7"), Piece::King, Color::Black)
        .unwrap_err();
    assert_eq!(err, GameError::PromotionPending);

    // the promotion must come from the side that pushed the pawn
    let err = game
        .promote_pawn(Color::Black, PromotionPiece::Queen)
        .unwrap_err();
    assert_eq!(err, GameError::WrongTurn(Color::Black));

    game.promote_pawn(Color::White, PromotionPiece::Queen)
        .unwrap();
    assert_eq!(game.turn(), Color::Black);
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(
        game.board().piece_at(Square::B8),
        Some((Piece::Queen, Color::White))
    );
}

#[test]
fn pending_promotion_survives_persistence() {
    let mut game = custom_game(
        [
            bit("b7"),
            0,
            0,
            0,
            0,
            bit("e1"),
            0,
            0,
            0,
            0,
            0,
            bit("h8"),
        ],
        Color::White,
    );
    play(&mut game, Piece::Pawn, Color::White, "b7", "b8");

    let json = serde_json::to_string(&game.to_state()).unwrap();
    let state: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(state.pending_promotion, Some(Square::B8));

    let mut restored = Game::from_state(&state).unwrap();
    assert_eq!(restored.status(), GameStatus::PendingPromotion(Square::B8));
    let err = restored
        .move_piece(c("e1"), c("e2"), Piece::King, Color::White)
        .unwrap_err();
    assert_eq!(err, GameError::PromotionPending);

    restored
        .promote_pawn(Color::White, PromotionPiece::Rook)
        .unwrap();
    assert_eq!(
        restored.board().piece_at(Square::B8),
        Some((Piece::Rook, Color::White))
    );
}

#[test]
fn serialized_snapshot_reproduces_fen_and_legal_moves() {
    let mut game = Game::new();
    play(&mut game, Piece::Pawn, Color::White, "e2", "e4");
    play(&mut game, Piece::Pawn, Color::Black, "e7", "e5");
    play(&mut game, Piece::Knight, Color::White, "g1", "f3");

    let json = serde_json::to_string(&game.to_state()).unwrap();
    let state: GameState = serde_json::from_str(&json).unwrap();
    let mut restored = Game::from_state(&state).unwrap();

    assert_eq!(restored.fen(), game.fen());
    assert_eq!(restored.turn(), game.turn());
    assert_eq!(restored.last_move(), game.last_move());

    // every piece of the side to move reports identical legal destinations
    for index in 0..64 {
        let square = Square::from_index(index).unwrap();
        if let Some((piece, color)) = game.board().piece_at(square) {
            if color != game.turn() {
                continue;
            }
            let at = Coord::new(7 - square.rank(), square.file());
            let original = game.valid_squares(at, piece, color).unwrap();
            let reloaded = restored.valid_squares(at, piece, color).unwrap();
            assert_eq!(original, reloaded, "moves differ on {}", square);
        }
    }
}

#[test]
fn rejected_actions_leave_the_fen_untouched() {
    let mut game = Game::new();
    let fen = game.fen().to_string();

    assert!(game
        .move_piece(c("e7"), c("e5"), Piece::Pawn, Color::Black)
        .is_err());
    assert!(game
        .move_piece(Coord::new(8, 0), c("e4"), Piece::Pawn, Color::White)
        .is_err());
    assert!(game
        .move_piece(c("e2"), c("d3"), Piece::Pawn, Color::White)
        .is_err());
    assert!(matches!(
        game.promote_pawn(Color::White, PromotionPiece::Queen)
            .unwrap_err(),
        GameError::Promotion(_)
    ));

    assert_eq!(game.fen(), fen);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn self_check_rejection_reports_typed_error() {
    let mut game = Game::new();
    play(&mut game, Piece::Pawn, Color::White, "e2", "e4");
    play(&mut game, Piece::Pawn, Color::Black, "e7", "e6");
    play(&mut game, Piece::Pawn, Color::White, "d2", "d4");
    play(&mut game, Piece::Bishop, Color::Black, "f8", "b4");

    // the bishop on b4 checks e1; a move that ignores the check is rejected
    let fen = game.fen().to_string();
    let err = game
        .move_piece(c("d4"), c("d5"), Piece::Pawn, Color::White)
        .unwrap_err();
    assert_eq!(err, GameError::Move(MoveError::SelfCheckViolation));
    assert_eq!(game.fen(), fen);
}
