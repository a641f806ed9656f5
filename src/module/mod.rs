pub mod config;
pub mod core;
pub mod logger;
pub mod menu;
pub mod utils;
