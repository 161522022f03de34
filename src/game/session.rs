use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::{
    dictionary::SharedDictionary,
    game::{
        grid::GridGenerator,
        path::{MoveRejection, PathState, PathTracker},
        scorer::Scorer,
        validator::{Outcome, SubmittedWords, WordValidator},
    },
    models::{Board, CellIndex},
};

/// Default capacity of a session's event channel
pub const DEFAULT_EVENT_BUFFER: usize = 64;

/// Events a session emits for whatever is rendering it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    WordSubmitted {
        outcome: Outcome,
        /// Running score after the outcome was applied
        score: u32,
        /// Points the word itself earned (0 unless accepted)
        points: u32,
    },
    InvalidMove {
        index: CellIndex,
        reason: MoveRejection,
    },
    NewGame {
        board: Board,
    },
    SelectionChanged {
        path: Vec<CellIndex>,
        word: String,
    },
    DictionaryUnavailable {
        reason: String,
    },
}

/// One game's worth of state, from one new game to the next.
///
/// All operations run synchronously; the only shared piece is the read-only dictionary.
pub struct GameSession {
    id: Uuid,
    board: Board,
    path: PathTracker,
    submitted: SubmittedWords,
    score: u32,
    dictionary: SharedDictionary,
    events: broadcast::Sender<GameEvent>,
}

impl GameSession {
    /// Start a session on a known board
    #[cfg(test)]
    pub fn with_board(board: Board, dictionary: SharedDictionary) -> Self {
        Self::with_buffer(board, dictionary, DEFAULT_EVENT_BUFFER)
    }

    pub fn with_buffer(board: Board, dictionary: SharedDictionary, buffer: usize) -> Self {
        let (events, _) = broadcast::channel(buffer.max(1));
        let id = Uuid::new_v4();
        tracing::info!(session_id = %id, "Creating game session");
        Self {
            id,
            board,
            path: PathTracker::new(),
            submitted: SubmittedWords::new(),
            score: 0,
            dictionary,
            events,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn path_state(&self) -> PathState {
        self.path.state()
    }

    pub fn submitted_words(&self) -> &SubmittedWords {
        &self.submitted
    }

    pub fn dictionary_loaded(&self) -> bool {
        self.dictionary.is_loaded()
    }

    /// Receive every event this session emits from now on
    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.events.subscribe()
    }

    /// The word spelled by the current selection
    pub fn current_word(&self) -> String {
        self.board.word_for(self.path.path())
    }

    pub fn select_cell(&mut self, index: CellIndex) -> Result<(), MoveRejection> {
        match self.path.select_cell(index) {
            Ok(()) => {
                tracing::debug!(session_id = %self.id, index, "Cell selected");
                self.emit_selection();
                Ok(())
            }
            Err(reason) => {
                tracing::debug!(session_id = %self.id, index, %reason, "Invalid move");
                self.emit(GameEvent::InvalidMove { index, reason });
                Err(reason)
            }
        }
    }

    /// Validate the current selection, apply scoring, and start the next word
    pub fn submit_word(&mut self) -> Outcome {
        let word = self.current_word();
        let outcome = WordValidator::validate(&word, self.dictionary.get(), &self.submitted);

        let points = match &outcome {
            Outcome::Accepted(accepted) => {
                self.submitted.insert(accepted);
                Scorer::score_word(accepted)
            }
            _ => 0,
        };
        self.score = Scorer::apply_outcome(self.score, &outcome);

        tracing::info!(
            session_id = %self.id,
            word = %word,
            outcome = ?outcome,
            score = self.score,
            "Word submitted"
        );

        self.emit(GameEvent::WordSubmitted {
            outcome: outcome.clone(),
            score: self.score,
            points,
        });

        self.path.reset();
        self.emit_selection();
        outcome
    }

    pub fn clear_selection(&mut self) {
        self.path.reset();
        self.emit_selection();
    }

    /// Replace the board and reset all per-game state
    pub fn new_game(&mut self) {
        self.new_game_with(&mut rand::rng());
    }

    pub fn new_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board = GridGenerator::generate_with(rng);
        self.submitted.clear();
        self.score = 0;

        tracing::info!(session_id = %self.id, "New game started");
        self.emit(GameEvent::NewGame {
            board: self.board.clone(),
        });
        self.path.reset();
        self.emit_selection();
    }

    fn emit_selection(&self) {
        self.emit(GameEvent::SelectionChanged {
            path: self.path.path().to_vec(),
            word: self.current_word(),
        });
    }

    fn emit(&self, event: GameEvent) {
        // No subscribers is fine; callers also get results directly
        let _ = self.events.send(event);
    }
}
