//! # Flashdeck Architecture
//!
//! Flashdeck is a **UI-agnostic spaced-repetition library** with a terminal client on top.
//! The scheduling engine and the review session never touch stdout, the clock or the disk on
//! their own: the caller hands them time, cards and a place to record reviews.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints output, reads keys              │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves deck selectors, supplies the current time       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Loads decks, runs sessions, builds reports               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┐  ┌──────────────────────────┐
//! │  Core (scheduler, session)   │  │  Storage Layer (store/)  │
//! │  - Pure scheduling function  │  │  - DataStore trait       │
//! │  - Review state machine      │  │  - FileStore, InMemory   │
//! └──────────────────────────────┘  └──────────────────────────┘
//! ```
//!
//! ## The Core
//!
//! [`scheduler::schedule_review`] maps a card and a [`model::Rating`] to the card's next
//! scheduling state. [`session::ReviewSession`] walks the due cards of one deck through
//! `AwaitingReveal -> AwaitingRating -> ... -> SessionComplete`, calling the scheduler on each
//! rating and reporting one review per rating to a [`session::ReviewRecorder`].
//!
//! A session works on its own copy of the deck. Nothing reaches the store until the session is
//! committed; dropping it discards every change except the review counts already recorded.
//!
//! ## Testing Strategy
//!
//! 1. **Core** (`scheduler.rs`, `session.rs`): exhaustive unit tests with fixed timestamps and
//!    a fake recorder.
//! 2. **Commands** (`commands/*.rs`): business logic against `InMemoryStore`.
//! 3. **Store** (`store/fs.rs`): round trips through a temporary directory.
//! 4. **CLI** (`tests/`): the binary, driven through stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`scheduler`]: Interval and ease computation
//! - [`session`]: Review queue state machine
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Card`, `Deck`, `Rating`, `ReviewLog`)
//! - [`index`]: Deck selectors (`1`, `Spanish`, uuid)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod scheduler;
pub mod session;
pub mod store;
