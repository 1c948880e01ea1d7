#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod cell;
mod common;
mod config;
mod coordinate;
mod game;
#[cfg(feature = "std")]
mod logging;
mod ship;
mod simulate;
mod strategy;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, Squares};
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
pub use simulate::*;
pub use strategy::*;
