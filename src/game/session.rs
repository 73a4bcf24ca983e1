use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    dictionary::Dictionary,
    effects::{EffectKind, EffectSink, WakeLock, WakeLockState},
    game::{PuzzleGenerator, PuzzleSettings, SelectionTracker},
    models::{Position, Puzzle, Word},
};

/// Result of releasing a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// No selection was in progress.
    Inactive,
    /// The selected letters spell none of the remaining words.
    NoMatch { candidate: String },
    /// A word was found; `complete` is set when it was the last one.
    WordFound {
        index: usize,
        word: Word,
        complete: bool,
    },
}

/// One player's game: the current puzzle snapshot plus the drag in progress.
pub struct GameSession {
    puzzle: Puzzle,
    selection: SelectionTracker,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    wake_lock: WakeLock,
    effects: Arc<dyn EffectSink>,
}

impl GameSession {
    /// Start a session with a freshly generated puzzle
    pub fn new(dictionary: &Dictionary, settings: PuzzleSettings, effects: Arc<dyn EffectSink>) -> Self {
        Self::with_puzzle(PuzzleGenerator::generate(dictionary, settings), effects)
    }

    pub fn with_puzzle(puzzle: Puzzle, effects: Arc<dyn EffectSink>) -> Self {
        Self {
            puzzle,
            selection: SelectionTracker::new(),
            started_at: Utc::now(),
            completed_at: None,
            wake_lock: WakeLock::default(),
            effects,
        }
    }

    /// Throw away the current puzzle and generate a new one.
    pub fn new_game(&mut self, dictionary: &Dictionary, settings: PuzzleSettings) {
        self.puzzle = PuzzleGenerator::generate(dictionary, settings);
        self.selection = SelectionTracker::new();
        self.started_at = Utc::now();
        self.completed_at = None;

        tracing::debug!(
            "New {}x{} puzzle with {} words",
            settings.grid_size(),
            settings.grid_size(),
            self.puzzle.words.len()
        );
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn selection_path(&self) -> &[Position] {
        self.selection.path()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Time from the start of the game until it was completed, or until now.
    pub fn elapsed(&self) -> chrono::Duration {
        self.completed_at.unwrap_or_else(Utc::now) - self.started_at
    }

    pub fn begin_selection(&mut self, point: Position) -> bool {
        self.selection.begin(&self.puzzle.grid, point)
    }

    pub fn update_selection(&mut self, point: Position) -> bool {
        self.selection.update(&self.puzzle.grid, point)
    }

    /// Release the current selection. On a match, the word and its cells are
    /// marked found in a new puzzle snapshot that replaces the current one.
    pub fn end_selection(&mut self) -> SelectionOutcome {
        if !self.selection.is_active() {
            return SelectionOutcome::Inactive;
        }

        let candidate = self.selection.candidate(&self.puzzle.grid);
        let Some(found) = self.selection.end(&self.puzzle) else {
            return SelectionOutcome::NoMatch { candidate };
        };

        let Some(next) = self.puzzle.with_word_found(found.index) else {
            return SelectionOutcome::NoMatch { candidate };
        };
        self.puzzle = next;

        tracing::info!(
            "Found word {} ({} remaining)",
            found.text,
            self.puzzle.remaining()
        );
        self.effects.play_effect(EffectKind::WordFound);

        let complete = self.puzzle.is_complete();
        if complete {
            self.completed_at = Some(Utc::now());
            tracing::info!(
                "Puzzle complete in {}s",
                self.elapsed().num_seconds()
            );
            self.effects.play_effect(EffectKind::PuzzleComplete);
        }

        SelectionOutcome::WordFound {
            index: found.index,
            word: self.puzzle.words[found.index].clone(),
            complete,
        }
    }

    pub fn wake_lock(&self) -> WakeLockState {
        self.wake_lock.state()
    }

    pub fn report_wake_lock(&mut self, state: WakeLockState) {
        self.wake_lock.report(state);
    }
}
