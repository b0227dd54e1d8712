pub mod cli;
pub mod configuration;
pub mod error;
pub mod image;
pub mod logging;
pub mod output;
pub mod progress;
