pub mod aggregate;
pub mod drives;
pub mod engine;
pub mod error;
pub mod possession;
pub mod reconcile;
pub mod record;
pub mod roster;
pub mod tables;

pub use engine::compute_game;
pub use error::GameStatsError;
pub use record::GameRecord;
pub use roster::{NoRoster, RosterAnswer, RosterLookup};
pub use tables::GameSheet;
