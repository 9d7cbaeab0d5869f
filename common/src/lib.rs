pub mod config;
pub mod gomoku;
pub mod logger;
