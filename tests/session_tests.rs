//! Session tests - timer-driven drops and cadence changes

use tui_blocks::core::{
    Board, DropCadence, GameEvent, GameState, NullFeedback, Piece, PieceSequence, Position,
    RecordingFeedback, Session, Shape,
};
use tui_blocks::types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn one_line_from_level_two() -> GameState {
    let mut cells = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    cells[19] = [Some(PieceKind::S); BOARD_WIDTH as usize];
    cells[19][0] = None;
    let i = Piece::new(PieceKind::I, Position::new(-2, 16))
        .with_shape(Shape::of(PieceKind::I).rotate_cw());
    GameState::from_parts(
        Board::from_cells(cells),
        i,
        Piece::new(PieceKind::O, Position::spawn()),
        900,
    )
}

#[test]
fn test_cadence_speeds_up_after_level_up() {
    let mut session = Session::from_state(
        one_line_from_level_two(),
        PieceSequence::repeat(PieceKind::O),
        DropCadence::default(),
    );
    let mut sink = RecordingFeedback::default();
    assert_eq!(session.drop_interval_ms(), 1000);

    // The first automatic drop lands the I and clears a line.
    assert!(session.tick(1000, &mut sink));
    assert_eq!(session.state().level, 2);
    assert_eq!(session.drop_interval_ms(), 800);
    assert!(sink.events.contains(&GameEvent::LevelUp(2)));

    // Time accumulated under the old cadence is gone.
    assert!(!session.tick(799, &mut sink));
    assert!(session.tick(1, &mut sink));
    assert_eq!(session.state().current.unwrap().position, Position::new(4, 1));
}

#[test]
fn test_reset_restores_base_cadence() {
    let mut session = Session::from_state(
        one_line_from_level_two(),
        PieceSequence::repeat(PieceKind::O),
        DropCadence::default(),
    );
    session.dispatch(GameAction::HardDrop, &mut NullFeedback);
    assert_eq!(session.drop_interval_ms(), 800);

    session.dispatch(GameAction::Reset, &mut NullFeedback);
    assert_eq!(session.state().level, 1);
    assert_eq!(session.drop_interval_ms(), 1000);
}

#[test]
fn test_custom_cadence() {
    let session = Session::new(PieceSequence::repeat(PieceKind::T), DropCadence::new(500, 0.5));
    assert_eq!(session.drop_interval_ms(), 500);
}

#[test]
fn test_snapshots_survive_later_transitions() {
    let mut session = Session::new(PieceSequence::repeat(PieceKind::L), DropCadence::default());
    let first = session.snapshot();

    session.dispatch(GameAction::HardDrop, &mut NullFeedback);
    session.dispatch(GameAction::MoveLeft, &mut NullFeedback);

    assert_eq!(first.board, Board::new());
    assert_ne!(session.state().board, Board::new());
}

#[test]
fn test_rejected_action_reports_no_change() {
    let mut session = Session::new(PieceSequence::repeat(PieceKind::O), DropCadence::default());
    let mut sink = RecordingFeedback::default();
    for _ in 0..4 {
        session.dispatch(GameAction::MoveLeft, &mut sink);
    }
    // O at x = 0 cannot move further left.
    assert!(!session.dispatch(GameAction::MoveLeft, &mut sink));
    assert_eq!(sink.events, vec![GameEvent::Moved; 4]);
}

#[test]
fn test_long_tick_drops_several_rows() {
    let mut session = Session::new(PieceSequence::repeat(PieceKind::O), DropCadence::default());
    assert!(session.tick(3500, &mut NullFeedback));
    assert_eq!(session.state().current.unwrap().position.y, 3);
}
