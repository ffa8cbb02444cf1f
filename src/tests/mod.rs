pub mod common;

mod config_validation;
mod refresh_scheduler;
mod token_provider;
