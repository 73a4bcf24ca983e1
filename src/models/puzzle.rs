use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A cell coordinate, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move `steps` cells along `direction`, or `None` when that leaves a
    /// `size` x `size` grid.
    pub fn offset(self, direction: Direction, steps: usize, size: usize) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = self.x as isize + dx * steps as isize;
        let y = self.y as isize + dy * steps as isize;

        let in_bounds = |v: isize| v >= 0 && (v as usize) < size;
        if in_bounds(x) && in_bounds(y) {
            Some(Position::new(x as usize, y as usize))
        } else {
            None
        }
    }
}

/// One of the eight straight-line directions a word can run in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    UpLeft,
    UpRight,
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
    ];

    /// Unit step `(dx, dy)`; `y` grows downwards.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
            Direction::DownRight => (1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
        }
    }

    /// Inverse of [`Direction::delta`].
    pub fn from_delta(dx: isize, dy: isize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.delta() == (dx.signum(), dy.signum()))
            .filter(|_| dx == 0 || dy == 0 || dx.abs() == dy.abs())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cell {
    pub letter: char,
    /// Index into the puzzle's word list of the word that claimed this cell.
    pub found_word_index: Option<usize>,
}

impl Cell {
    pub fn new(letter: char) -> Self {
        Self {
            letter,
            found_word_index: None,
        }
    }
}

/// Square letter grid indexed `[row][col]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self { rows }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size() && pos.y < self.size()
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.rows.get(pos.y).and_then(|row| row.get(pos.x))
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Concatenate the letters along `path`, skipping positions off the grid.
    pub fn read_letters(&self, path: &[Position]) -> String {
        path.iter()
            .filter_map(|pos| self.get(*pos))
            .map(|cell| cell.letter)
            .collect()
    }

    /// Copy of this grid with `positions` claimed by `word_index`. Cells that
    /// already belong to another word keep their original owner.
    pub fn with_claimed(&self, positions: &[Position], word_index: usize) -> Grid {
        let mut rows = self.rows.clone();
        for pos in positions {
            if let Some(cell) = rows.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
                cell.found_word_index.get_or_insert(word_index);
            }
        }
        Grid { rows }
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        &self.rows[pos.y][pos.x]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub found: bool,
    /// Cells spelling `text` in forward order.
    pub positions: Vec<Position>,
}

impl Word {
    pub fn new(text: impl Into<String>, positions: Vec<Position>) -> Self {
        Self {
            text: text.into(),
            found: false,
            positions,
        }
    }
}

/// A generated grid together with the words hidden in it, sorted by text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: Vec<Word>,
}

impl Puzzle {
    /// Number of words not yet found.
    pub fn remaining(&self) -> usize {
        self.words.iter().filter(|word| !word.found).count()
    }

    /// True once every word has been found. An empty word list never completes.
    pub fn is_complete(&self) -> bool {
        !self.words.is_empty() && self.words.iter().all(|word| word.found)
    }

    /// Index of the first unfound word whose text is exactly `text`.
    pub fn find_unfound(&self, text: &str) -> Option<usize> {
        self.words
            .iter()
            .position(|word| !word.found && word.text == text)
    }

    /// Next snapshot with word `index` marked found and its cells claimed.
    /// Returns `None` if the index is unknown or the word was already found.
    pub fn with_word_found(&self, index: usize) -> Option<Puzzle> {
        let word = self.words.get(index).filter(|word| !word.found)?;

        let grid = self.grid.with_claimed(&word.positions, index);
        let mut words = self.words.clone();
        words[index].found = true;

        Some(Puzzle { grid, words })
    }
}
