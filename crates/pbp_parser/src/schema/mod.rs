pub mod game_clock;
pub mod penalty;
pub mod play_tags;
pub mod success;
pub mod teams;
pub mod yards;

pub use game_clock::*;
pub use penalty::*;
pub use play_tags::*;
pub use success::*;
pub use teams::*;
pub use yards::*;
