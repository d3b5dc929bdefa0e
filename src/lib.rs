//! Noughts - two-player tic-tac-toe with a running score.
//!
//! The game rules live in [`noughts_core`]. This crate wires them to the
//! outside world:
//!
//! - **tui**: interactive terminal UI (ratatui + crossterm)
//! - **replay**: headless runs of a fixed move list
//! - **config**: TOML configuration
//! - **cli**: command-line parsing

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod replay;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use replay::{ReplayReport, replay};
