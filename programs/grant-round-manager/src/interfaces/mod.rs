pub mod exchange;
pub mod registry;
