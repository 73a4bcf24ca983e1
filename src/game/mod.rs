// Game engine modules

pub mod generator;
pub mod selection;
pub mod session;
pub mod settings;

pub use generator::PuzzleGenerator;
pub use selection::{compute_path, SelectionTracker, WordMatch};
pub use session::{GameSession, SelectionOutcome};
pub use settings::{GameError, PuzzleSettings, SettingsLimits};
