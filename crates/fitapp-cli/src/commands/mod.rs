pub mod config;
pub mod onboard;
pub mod progress;
pub mod questions;
pub mod tip;
