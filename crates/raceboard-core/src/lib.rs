//! # Raceboard Core Library
//!
//! Core logic for a live workshop leaderboard: teams race through a fixed
//! set of milestones while a session clock runs, and the board ranks them
//! as they go. The `raceboard` CLI is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Board**: a reducer over [`BoardState`] plus an owner that persists
//!   every change to a key-value store
//! - **Ranking**: stateless total order over a snapshot of teams
//! - **Timer**: wall-clock session stopwatch and a cancellable async ticker
//! - **Storage**: SQLite key-value store and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`Board`]: state owner, the only way to mutate teams
//! - [`SessionTimer`]: idle/running session clock
//! - [`Database`]: SQLite-backed [`KvStore`]
//! - [`Config`]: application configuration management

pub mod board;
pub mod error;
pub mod events;
pub mod feedback;
pub mod milestone;
pub mod ranking;
pub mod storage;
pub mod team;
pub mod timer;

/// Instants are always UTC wall-clock captures.
pub type Time = chrono::DateTime<chrono::Utc>;

pub use board::{Action, Board, BoardState, Ignored, Outcome, Persist, Transition};
pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use feedback::{announce, Cue, FeedbackSink};
pub use milestone::{Milestone, MilestoneId, Toggle};
pub use ranking::Standing;
pub use storage::{Config, Database, KvStore, MemoryStore};
pub use team::{Team, TeamId};
pub use timer::{format_elapsed, SessionState, SessionTicker, SessionTimer};
