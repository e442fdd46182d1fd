pub mod booking_manager;
pub mod cli;
pub mod cli_error;
pub mod data_store;
mod setup;
