use crate::models::{Direction, Grid, Position, Puzzle};

/// Cells on the straight line from `start` to `end`, both ends included.
///
/// Drags that are neither horizontal, vertical nor exactly diagonal collapse
/// to just the two endpoints.
pub fn compute_path(start: Position, end: Position) -> Vec<Position> {
    let dx = end.x as isize - start.x as isize;
    let dy = end.y as isize - start.y as isize;

    let Some(direction) = Direction::from_delta(dx, dy) else {
        return if dx == 0 && dy == 0 {
            vec![start]
        } else {
            vec![start, end]
        };
    };

    let steps = dx.abs().max(dy.abs());
    let (x_inc, y_inc) = direction.delta();

    (0..=steps)
        .map(|k| {
            Position::new(
                (start.x as isize + k * x_inc) as usize,
                (start.y as isize + k * y_inc) as usize,
            )
        })
        .collect()
}

/// A match produced when a selection is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    /// Index of the word in the puzzle's sorted word list.
    pub index: usize,
    pub text: String,
}

/// Tracks one drag gesture over the grid.
#[derive(Debug, Default, Clone)]
pub struct SelectionTracker {
    anchor: Option<Position>,
    path: Vec<Position>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    /// Current selection path, empty when no drag is in progress.
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Start a selection at `point`. Returns false, leaving no selection
    /// active, if `point` is off the grid.
    pub fn begin(&mut self, grid: &Grid, point: Position) -> bool {
        if !grid.contains(point) {
            self.clear();
            return false;
        }
        self.anchor = Some(point);
        self.path = vec![point];
        true
    }

    /// Recompute the path from the anchor to `point`. Ignored when no
    /// selection is active or `point` is off the grid, so the last good path
    /// survives until release.
    pub fn update(&mut self, grid: &Grid, point: Position) -> bool {
        match self.anchor {
            Some(anchor) if grid.contains(point) => {
                self.path = compute_path(anchor, point);
                true
            }
            _ => false,
        }
    }

    /// Release the selection and look up its letters, forwards then
    /// backwards, among the words not found yet. The selection is cleared
    /// whatever the outcome.
    pub fn end(&mut self, puzzle: &Puzzle) -> Option<WordMatch> {
        if !self.is_active() {
            return None;
        }
        let path = std::mem::take(&mut self.path);
        self.clear();

        let forward = puzzle.grid.read_letters(&path);
        let backward: String = forward.chars().rev().collect();

        [forward, backward].into_iter().find_map(|candidate| {
            puzzle.find_unfound(&candidate).map(|index| WordMatch {
                index,
                text: candidate,
            })
        })
    }

    /// Letters currently under the selection.
    pub fn candidate(&self, grid: &Grid) -> String {
        grid.read_letters(&self.path)
    }

    fn clear(&mut self) {
        self.anchor = None;
        self.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cell, Word};

    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    fn puzzle(rows: &[&str], words: Vec<Word>) -> Puzzle {
        Puzzle {
            grid: Grid::from_rows(
                rows.iter()
                    .map(|row| row.chars().map(Cell::new).collect())
                    .collect(),
            ),
            words,
        }
    }

    #[test]
    fn test_diagonal_path() {
        assert_eq!(
            compute_path(pos(0, 0), pos(3, 3)),
            vec![pos(0, 0), pos(1, 1), pos(2, 2), pos(3, 3)]
        );
    }

    #[test]
    fn test_vertical_path() {
        let path = compute_path(pos(2, 0), pos(2, 5));
        assert_eq!(path, (0..=5).map(|y| pos(2, y)).collect::<Vec<_>>());
    }

    #[test]
    fn test_reverse_paths() {
        assert_eq!(
            compute_path(pos(3, 1), pos(0, 1)),
            vec![pos(3, 1), pos(2, 1), pos(1, 1), pos(0, 1)]
        );
        assert_eq!(
            compute_path(pos(0, 2), pos(2, 0)),
            vec![pos(0, 2), pos(1, 1), pos(2, 0)]
        );
    }

    #[test]
    fn test_off_line_path_collapses_to_endpoints() {
        assert_eq!(compute_path(pos(0, 0), pos(3, 1)), vec![pos(0, 0), pos(3, 1)]);
    }

    #[test]
    fn test_single_cell_path() {
        assert_eq!(compute_path(pos(1, 1), pos(1, 1)), vec![pos(1, 1)]);
    }

    #[test]
    fn test_begin_outside_grid_is_ignored() {
        let puzzle = puzzle(&["AB", "CD"], Vec::new());
        let mut tracker = SelectionTracker::new();

        assert!(!tracker.begin(&puzzle.grid, pos(2, 0)));
        assert!(!tracker.is_active());
        assert!(!tracker.update(&puzzle.grid, pos(1, 1)));
        assert!(tracker.path().is_empty());
    }

    #[test]
    fn test_update_outside_grid_keeps_last_path() {
        let puzzle = puzzle(&["SOL", "XXX", "XXX"], vec![Word::new("SOL", (0..3).map(|x| pos(x, 0)).collect())]);
        let mut tracker = SelectionTracker::new();

        tracker.begin(&puzzle.grid, pos(0, 0));
        tracker.update(&puzzle.grid, pos(2, 0));
        assert!(!tracker.update(&puzzle.grid, pos(5, 0)));
        assert_eq!(tracker.candidate(&puzzle.grid), "SOL");

        let found = tracker.end(&puzzle).unwrap();
        assert_eq!(found.index, 0);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_reverse_selection_matches() {
        let puzzle = puzzle(&["SOL", "XXX", "XXX"], vec![Word::new("SOL", (0..3).map(|x| pos(x, 0)).collect())]);
        let mut tracker = SelectionTracker::new();

        tracker.begin(&puzzle.grid, pos(2, 0));
        tracker.update(&puzzle.grid, pos(0, 0));
        assert_eq!(tracker.candidate(&puzzle.grid), "LOS");
        assert_eq!(
            tracker.end(&puzzle),
            Some(WordMatch {
                index: 0,
                text: "SOL".to_string()
            })
        );
    }

    #[test]
    fn test_no_match_clears_selection() {
        let puzzle = puzzle(&["SOL", "XXX", "XXX"], vec![Word::new("SOL", (0..3).map(|x| pos(x, 0)).collect())]);
        let mut tracker = SelectionTracker::new();

        tracker.begin(&puzzle.grid, pos(0, 0));
        tracker.update(&puzzle.grid, pos(0, 2));
        assert_eq!(tracker.end(&puzzle), None);
        assert!(!tracker.is_active());
        assert!(tracker.path().is_empty());
        assert_eq!(tracker.end(&puzzle), None);
    }

    #[test]
    fn test_found_words_are_skipped() {
        let mut words = vec![Word::new("SOL", (0..3).map(|x| pos(x, 0)).collect())];
        words[0].found = true;
        let puzzle = puzzle(&["SOL", "XXX", "XXX"], words);
        let mut tracker = SelectionTracker::new();

        tracker.begin(&puzzle.grid, pos(0, 0));
        tracker.update(&puzzle.grid, pos(2, 0));
        assert_eq!(tracker.end(&puzzle), None);
    }

    #[test]
    fn test_erratic_drag_tests_two_letters() {
        // (0,0) -> (2,1) is off-line, so only "S" and "Y" are read.
        let puzzle = puzzle(
            &["SOL", "XXY", "XXX"],
            vec![Word::new("SY", vec![pos(0, 0), pos(2, 1)])],
        );
        let mut tracker = SelectionTracker::new();

        tracker.begin(&puzzle.grid, pos(0, 0));
        tracker.update(&puzzle.grid, pos(2, 1));
        assert_eq!(tracker.path(), [pos(0, 0), pos(2, 1)]);
        assert_eq!(tracker.end(&puzzle).map(|m| m.index), Some(0));
    }
}
