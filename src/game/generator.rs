use rand::{seq::SliceRandom, Rng};

use crate::{
    dictionary::Dictionary,
    game::PuzzleSettings,
    models::{Cell, Direction, Grid, Position, Puzzle, Word},
    utils::letters::{collate, random_filler},
};

type Letters = Vec<Vec<Option<char>>>;

pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Generate a new puzzle from the dictionary using the thread-local RNG
    pub fn generate(dictionary: &Dictionary, settings: PuzzleSettings) -> Puzzle {
        let mut rng = rand::rng();
        Self::generate_with_rng(dictionary.words(), settings, &mut rng)
    }

    /// Hide up to `settings.num_words()` words in a fresh grid and pad the rest
    /// with filler letters. Words that find no room are skipped.
    pub fn generate_with_rng(
        words: &[String],
        settings: PuzzleSettings,
        rng: &mut impl Rng,
    ) -> Puzzle {
        let size = settings.grid_size();
        let mut letters: Letters = vec![vec![None; size]; size];

        let mut candidates: Vec<&String> = words.iter().collect();
        candidates.shuffle(rng);

        let mut placed = Vec::new();
        let mut attempted = 0;

        for word in candidates
            .into_iter()
            .filter(|word| word.chars().count() <= size)
            .take(settings.num_words())
        {
            attempted += 1;
            let chars: Vec<char> = word.chars().collect();
            match Self::place_word(&chars, &mut letters, rng) {
                Some(positions) => placed.push(Word::new(word.as_str(), positions)),
                None => tracing::debug!("No room for word {} in {}x{} grid", word, size, size),
            }
        }

        tracing::debug!(
            "Placed {} of {} candidate words ({} requested)",
            placed.len(),
            attempted,
            settings.num_words()
        );

        let grid = Self::fill(letters, rng);
        placed.sort_by(|a, b| collate(&a.text, &b.text));

        Puzzle {
            grid,
            words: placed,
        }
    }

    /// Try every direction in random order; within a direction, scan all
    /// anchors starting from a random offset. Commits the first fit.
    fn place_word(chars: &[char], letters: &mut Letters, rng: &mut impl Rng) -> Option<Vec<Position>> {
        let size = letters.len();
        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        for direction in directions {
            let start_x = rng.random_range(0..size);
            let start_y = rng.random_range(0..size);

            for i in 0..size * size {
                let anchor = Position::new((start_x + i / size) % size, (start_y + i) % size);

                if let Some(positions) = Self::fit(chars, letters, anchor, direction) {
                    for (pos, &letter) in positions.iter().zip(chars) {
                        letters[pos.y][pos.x] = Some(letter);
                    }
                    return Some(positions);
                }
            }
        }

        None
    }

    /// Positions the word would occupy from `anchor`, if every cell is in
    /// bounds and either empty or already holding the same letter.
    fn fit(
        chars: &[char],
        letters: &Letters,
        anchor: Position,
        direction: Direction,
    ) -> Option<Vec<Position>> {
        let size = letters.len();
        chars
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                let pos = anchor.offset(direction, i, size)?;
                match letters[pos.y][pos.x] {
                    Some(existing) if existing != letter => None,
                    _ => Some(pos),
                }
            })
            .collect()
    }

    fn fill(letters: Letters, rng: &mut impl Rng) -> Grid {
        let mut rows = Vec::with_capacity(letters.len());
        for row in letters {
            let mut cells = Vec::with_capacity(row.len());
            for letter in row {
                let letter = match letter {
                    Some(letter) => letter,
                    None => random_filler(rng),
                };
                cells.push(Cell::new(letter));
            }
            rows.push(cells);
        }
        Grid::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::letters::FILLER_ALPHABET;
    use rand::{rngs::StdRng, SeedableRng};
    use std::cmp::Ordering;
    use std::collections::HashMap;

    fn settings(num_words: usize, grid_size: usize) -> PuzzleSettings {
        PuzzleSettings::new(num_words, grid_size).unwrap()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn assert_placement_valid(puzzle: &Puzzle) {
        let size = puzzle.grid.size();
        for word in &puzzle.words {
            assert_eq!(word.positions.len(), word.text.chars().count());
            assert!(word.positions.iter().all(|pos| puzzle.grid.contains(*pos)));
            assert_eq!(puzzle.grid.read_letters(&word.positions), word.text);

            if let [first, second, ..] = word.positions[..] {
                let step = (
                    second.x as isize - first.x as isize,
                    second.y as isize - first.y as isize,
                );
                let direction = Direction::from_delta(step.0, step.1)
                    .unwrap_or_else(|| panic!("{} is not on a straight line", word.text));
                assert_eq!(direction.delta(), step, "{} skips cells", word.text);
                for pair in word.positions.windows(2) {
                    assert_eq!(pair[0].offset(direction, 1, size), Some(pair[1]));
                }
            }
        }
    }

    #[test]
    fn test_generated_words_are_valid() {
        let dictionary = Dictionary::builtin();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle =
                PuzzleGenerator::generate_with_rng(dictionary.words(), settings(8, 10), &mut rng);

            assert!(puzzle.words.len() <= 8);
            assert_placement_valid(&puzzle);
        }
    }

    #[test]
    fn test_overlaps_share_letters() {
        let dictionary = Dictionary::builtin();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            // A cramped grid forces crossings.
            let puzzle =
                PuzzleGenerator::generate_with_rng(dictionary.words(), settings(12, 7), &mut rng);

            let mut claimed: HashMap<Position, char> = HashMap::new();
            for word in &puzzle.words {
                for (pos, letter) in word.positions.iter().zip(word.text.chars()) {
                    let previous = claimed.insert(*pos, letter);
                    assert!(previous.map_or(true, |prev| prev == letter));
                }
            }
        }
    }

    #[test]
    fn test_grid_is_complete() {
        let dictionary = Dictionary::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let puzzle =
            PuzzleGenerator::generate_with_rng(dictionary.words(), settings(8, 10), &mut rng);

        assert_eq!(puzzle.grid.size(), 10);
        assert!(puzzle.grid.rows().iter().all(|row| row.len() == 10));

        let placed: Vec<Position> = puzzle
            .words
            .iter()
            .flat_map(|word| word.positions.iter().copied())
            .collect();
        for (y, row) in puzzle.grid.rows().iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                assert!(cell.found_word_index.is_none());
                if !placed.contains(&Position::new(x, y)) {
                    assert!(FILLER_ALPHABET.contains(&cell.letter));
                }
            }
        }
    }

    #[test]
    fn test_words_are_sorted() {
        let dictionary = Dictionary::builtin();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle =
                PuzzleGenerator::generate_with_rng(dictionary.words(), settings(10, 12), &mut rng);
            for pair in puzzle.words.windows(2) {
                assert_ne!(collate(&pair[0].text, &pair[1].text), Ordering::Greater);
            }
        }
    }

    #[test]
    fn test_single_word_end_to_end() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle =
                PuzzleGenerator::generate_with_rng(&words(&["SOL"]), settings(1, 3), &mut rng);

            assert_eq!(puzzle.grid.cells().count(), 9);
            assert_eq!(puzzle.words.len(), 1);

            let word = &puzzle.words[0];
            assert_eq!(word.text, "SOL");
            assert_eq!(word.positions.len(), 3);
            assert_eq!(puzzle.grid.read_letters(&word.positions), "SOL");
            assert_placement_valid(&puzzle);

            for (y, row) in puzzle.grid.rows().iter().enumerate() {
                for (x, cell) in row.iter().enumerate() {
                    if !word.positions.contains(&Position::new(x, y)) {
                        assert!(FILLER_ALPHABET.contains(&cell.letter));
                    }
                }
            }
        }
    }

    #[test]
    fn test_long_words_are_excluded() {
        let mut rng = StdRng::seed_from_u64(1);
        let puzzle = PuzzleGenerator::generate_with_rng(
            &words(&["BORBOLETA", "TARTARUGA", "SOL"]),
            settings(3, 4),
            &mut rng,
        );
        assert_eq!(puzzle.words.len(), 1);
        assert_eq!(puzzle.words[0].text, "SOL");
    }

    #[test]
    fn test_fewer_words_than_requested() {
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle =
            PuzzleGenerator::generate_with_rng(&words(&["GATO", "RATO"]), settings(10, 6), &mut rng);
        assert_eq!(puzzle.words.len(), 2);
    }

    #[test]
    fn test_huge_word_count_uses_whole_dictionary() {
        let mut rng = StdRng::seed_from_u64(4);
        let puzzle = PuzzleGenerator::generate_with_rng(
            &words(&["SOL"]),
            settings(usize::MAX, 3),
            &mut rng,
        );
        assert_eq!(puzzle.words.len(), 1);
        assert_placement_valid(&puzzle);
    }

    #[test]
    fn test_word_that_cannot_fit_is_skipped() {
        // A 1x1 grid holds a single letter; the second one-letter word only
        // fits if it is the same letter.
        let mut rng = StdRng::seed_from_u64(9);
        let puzzle =
            PuzzleGenerator::generate_with_rng(&words(&["A", "B"]), settings(2, 1), &mut rng);
        assert_eq!(puzzle.words.len(), 1);
        assert_eq!(puzzle.grid.cells().count(), 1);
        assert_placement_valid(&puzzle);
    }

    #[test]
    fn test_accented_words_keep_their_letters() {
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle =
            PuzzleGenerator::generate_with_rng(&words(&["MAÇÃ", "CORAÇÃO"]), settings(2, 7), &mut rng);
        assert_eq!(puzzle.words.len(), 2);
        assert_eq!(puzzle.words[0].text, "CORAÇÃO");
        assert_eq!(puzzle.words[0].positions.len(), 7);
        assert_placement_valid(&puzzle);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let dictionary = Dictionary::builtin();
        let first = PuzzleGenerator::generate_with_rng(
            dictionary.words(),
            settings(8, 10),
            &mut StdRng::seed_from_u64(11),
        );
        let second = PuzzleGenerator::generate_with_rng(
            dictionary.words(),
            settings(8, 10),
            &mut StdRng::seed_from_u64(11),
        );
        assert_eq!(first, second);
    }
}
