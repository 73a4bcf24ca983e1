pub mod puzzle;

pub use puzzle::{
    // Grid types
    Cell, Direction, Grid, Position,
    // Words and the puzzle snapshot
    Puzzle, Word,
};
