pub mod initialize_manager;
pub use initialize_manager::*;

pub mod create_grant_round;
pub use create_grant_round::*;

pub mod grant_round_is_active;
pub use grant_round_is_active::*;

pub mod swap_and_donate;
pub use swap_and_donate::*;
