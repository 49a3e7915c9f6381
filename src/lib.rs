//! # Connect Four Search
//!
//! Adversarial search over a 6x7 Connect Four board: minimax, alpha-beta,
//! and expectiminimax over a drift model in which a dropped piece may slide
//! into a neighbouring column.
//!
//! ## Modules
//!
//! - [`game`] — Board, sides, move generation, final scoring
//! - [`ai`] — Heuristic, chance model, searches, engine facade, agents
//! - [`session`] — Headless engine-vs-opponent games and match statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
