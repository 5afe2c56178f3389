//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! Players alternate dropping pieces into columns until one gets
//! four-in-a-row (horizontal, vertical, or diagonal) or the board fills.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state machine
//! - [`ui`] — Terminal UI: interactive game view and event loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
