// src/lib.rs

pub mod client;
pub mod commands;
pub mod config;
pub mod connection;
pub mod errors;
pub mod protocol;

// Re-export
pub use crate::client::Client;
pub use crate::commands::{InsertPosition, ScoreBound};
pub use crate::config::StoreConfig;
pub use crate::errors::{LazuliteError, Result, SuccessFlag};
