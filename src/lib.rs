//! # Connect-N
//!
//! A configurable Connect-N board game for the terminal: variable board
//! dimensions and win length, human-vs-human or human-vs-AI play, and two
//! AI difficulty tiers. The terminal UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, line detection, rules, state machine
//! - [`ai`] — Agent trait, move policies, difficulty tiers
//! - [`ui`] — Terminal UI: setup screen and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
