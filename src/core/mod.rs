//! # Core Application Logic
//!
//! The chapter list screen's state machine. It knows nothing about any
//! specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (screen state)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Route / Navigator    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    API     │
//!            │  Adapter   │            │  (equran)  │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`chapter`]: The `Chapter` record and its display strings
//! - [`state`]: The `App` struct and the `ScreenState` lifecycle
//! - [`action`]: The `Action` enum and `update()`
//! - [`navigation`]: `Route` and the injected `Navigator`
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod chapter;
pub mod config;
pub mod navigation;
pub mod state;
