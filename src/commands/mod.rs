// src/commands/mod.rs

//! Command wrappers grouped by family, plus the argument builder they share.

pub mod args;
pub mod hashes;
pub mod lists;
pub mod sets;
pub mod sorted_sets;
pub mod strings;

pub use args::{Command, InsertPosition, ScoreBound};
pub use hashes::HashCommands;
pub use lists::ListCommands;
pub use sets::SetCommands;
pub use sorted_sets::SortedSetCommands;
pub use strings::StringCommands;
