#![cfg_attr(not(feature = "std"), no_std)]

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use ui::*;
