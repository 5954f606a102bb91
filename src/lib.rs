#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod manager;
pub mod prelude;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use manager::*;
pub use ship::*;
