pub mod common;
pub use common::*;

pub mod grant_round_manager;
pub use grant_round_manager::*;

pub mod grant_round;
pub use grant_round::*;
