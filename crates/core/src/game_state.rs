//! Game state module - the immutable game aggregate and its reducer
//!
//! [`GameState::reduce`] is the whole game: it takes the current state, an
//! action and a piece source, and returns a brand-new state together with the
//! feedback events the transition produced. The input state is never touched.
//!
//! Running, paused and game-over are encoded by the `paused` / `game_over`
//! flags. While game over only `Reset` is accepted; while paused only `Pause`
//! (to resume) and `Reset` are.

use crate::{
    calculate_score, level_for_score, rotate, Board, EventList, GameEvent, Piece, PieceSource,
    Position,
};
use crate::types::GameAction;

/// Complete game state
///
/// Invariants kept by the reducer:
/// - `game_over` implies both piece slots are empty
/// - `level == level_for_score(score)`
/// - `score` only decreases through `Reset`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
    pub paused: bool,
}

/// Result of one reducer step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: EventList,
}

impl Transition {
    fn unchanged(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            events: EventList::new(),
        }
    }

    fn with_event(state: GameState, event: GameEvent) -> Self {
        let mut events = EventList::new();
        events.push(event);
        Self { state, events }
    }
}

impl GameState {
    /// Fresh game: empty board, two spawned pieces, score 0, level 1
    pub fn new<S: PieceSource + ?Sized>(source: &mut S) -> Self {
        let current = Piece::random(source, Position::spawn());
        let next = Piece::random(source, Position::spawn());
        Self {
            board: Board::new(),
            current: Some(current),
            next: Some(next),
            score: 0,
            level: 1,
            game_over: false,
            paused: false,
        }
    }

    /// Running state assembled from parts; the level follows from `score`
    pub fn from_parts(board: Board, current: Piece, next: Piece, score: u32) -> Self {
        Self {
            board,
            current: Some(current),
            next: Some(next),
            score,
            level: level_for_score(score),
            game_over: false,
            paused: false,
        }
    }

    /// Whether the game is neither paused nor over
    pub fn is_running(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Guard rule: whether `action` may change this state at all
    pub fn accepts(&self, action: GameAction) -> bool {
        match action {
            GameAction::Reset => true,
            _ if self.game_over => false,
            GameAction::Pause => true,
            _ => !self.paused,
        }
    }

    /// The board with the current piece drawn in, clipped to the board
    pub fn visible_board(&self) -> Board {
        match self.current {
            Some(piece) => self.board.merge(&piece.shape, piece.position, piece.kind),
            None => self.board,
        }
    }

    /// Compute the state that follows `action`
    ///
    /// Rejected moves, rotations into walls and guarded actions all return a
    /// state equal to `self` with no events.
    pub fn reduce<S: PieceSource + ?Sized>(&self, action: GameAction, source: &mut S) -> Transition {
        if !self.accepts(action) {
            return Transition::unchanged(self);
        }

        match action {
            GameAction::MoveLeft => self.shift(-1),
            GameAction::MoveRight => self.shift(1),
            GameAction::Rotate => self.rotate(),
            GameAction::MoveDown => self.move_down(source),
            GameAction::HardDrop => self.hard_drop(source),
            GameAction::Pause => {
                let paused = !self.paused;
                let state = Self {
                    paused,
                    ..self.clone()
                };
                Transition::with_event(state, GameEvent::PauseToggled { paused })
            }
            GameAction::Reset => {
                log::debug!("reset at score {} level {}", self.score, self.level);
                Transition::with_event(Self::new(source), GameEvent::Reset)
            }
        }
    }

    fn replace_current(&self, piece: Piece) -> Self {
        Self {
            current: Some(piece),
            ..self.clone()
        }
    }

    fn shift(&self, dx: i8) -> Transition {
        let Some(piece) = self.current else {
            return Transition::unchanged(self);
        };

        let target = piece.position.offset(dx, 0);
        if self.board.collides(&piece.shape, target) {
            return Transition::unchanged(self);
        }
        Transition::with_event(self.replace_current(piece.at(target)), GameEvent::Moved)
    }

    fn rotate(&self) -> Transition {
        let Some(piece) = self.current else {
            return Transition::unchanged(self);
        };

        // No kicks: the rotated shape must fit at the current anchor.
        let shape = rotate(&piece);
        if self.board.collides(&shape, piece.position) {
            return Transition::unchanged(self);
        }
        Transition::with_event(
            self.replace_current(piece.with_shape(shape)),
            GameEvent::Rotated,
        )
    }

    fn move_down<S: PieceSource + ?Sized>(&self, source: &mut S) -> Transition {
        let Some(piece) = self.current else {
            return Transition::unchanged(self);
        };

        let target = piece.position.offset(0, 1);
        if !self.board.collides(&piece.shape, target) {
            return Transition {
                state: self.replace_current(piece.at(target)),
                events: EventList::new(),
            };
        }

        self.land(piece, source, EventList::new())
    }

    fn hard_drop<S: PieceSource + ?Sized>(&self, source: &mut S) -> Transition {
        let Some(piece) = self.current else {
            return Transition::unchanged(self);
        };

        let mut position = piece.position;
        while !self.board.collides(&piece.shape, position.offset(0, 1)) {
            position = position.offset(0, 1);
        }

        let mut events = EventList::new();
        events.push(GameEvent::HardDrop);
        self.land(piece.at(position), source, events)
    }

    /// Merge, clear, score, promote the next piece and check for game over
    fn land<S: PieceSource + ?Sized>(
        &self,
        piece: Piece,
        source: &mut S,
        mut events: EventList,
    ) -> Transition {
        let merged = self.board.merge(&piece.shape, piece.position, piece.kind);
        let (board, lines) = merged.clear_lines();
        let score = self.score.saturating_add(calculate_score(lines, self.level));
        let level = level_for_score(score);

        events.push(GameEvent::Landed);
        if lines > 0 {
            log::debug!("cleared {} line(s) at level {}, score {}", lines, self.level, score);
            events.push(GameEvent::LinesCleared(lines));
        }
        if level > self.level {
            log::debug!("level up: {} -> {}", self.level, level);
            events.push(GameEvent::LevelUp(level));
        }

        let promoted = match self.next {
            Some(next) => next,
            None => Piece::random(source, Position::spawn()),
        };
        let fresh = Piece::random(source, Position::spawn());

        // Both the promoted piece and the one after it must fit at spawn.
        let blocked = board.collides(&promoted.shape, promoted.position)
            || board.collides(&fresh.shape, fresh.position);

        if blocked {
            log::debug!("game over with score {}", score);
            events.push(GameEvent::GameOver { score });
            return Transition {
                state: Self {
                    board,
                    current: None,
                    next: None,
                    score,
                    level,
                    game_over: true,
                    paused: self.paused,
                },
                events,
            };
        }

        log::trace!(
            "landed {} at ({}, {}), next {}",
            piece.kind.letter(),
            piece.position.x,
            piece.position.y,
            fresh.kind.letter()
        );
        Transition {
            state: Self {
                board,
                current: Some(promoted),
                next: Some(fresh),
                score,
                level,
                game_over: false,
                paused: self.paused,
            },
            events,
        }
    }
}
