pub mod badge;
pub mod config;
pub mod logging;
pub mod parser;
pub mod platform;
pub mod version;
