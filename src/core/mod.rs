//! # Core Application Logic
//!
//! This module contains minaret's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • schedule (selection) │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  timings   │      │    geo     │
//!     │  Adapter   │      │  provider  │      │ directory  │
//!     │ (ratatui)  │      │ (aladhan)  │      │  (static)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schedule`]: next-prayer selection and countdown formatting — the
//!   only real computation in the app, pure and clock-free
//! - [`state`]: the `App` struct — all application state in one place
//! - [`action`]: the `Action` enum — everything that can happen in the app
//! - [`config`]: layered TOML/env/CLI configuration

pub mod action;
pub mod config;
pub mod schedule;
pub mod state;
