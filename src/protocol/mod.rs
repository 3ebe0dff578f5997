// src/protocol/mod.rs

pub mod frame;
pub mod reply;

pub use frame::{RespCodec, RespFrame};
