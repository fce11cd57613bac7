//! # vroll
//!
//! `vroll` keeps a rolling window of numbered version directories. A *roll*
//! archives the lowest-numbered directory into `saveit/`, removes it, and
//! seeds a new highest-numbered directory by copying the current highest.
//!
//! ```text
//! before             after `vroll`
//! ├── 0001/          ├── 0002/
//! ├── 0002/          ├── 0003/
//! └── 0003/          ├── 0004/        (copy of 0003)
//!                    └── saveit/
//!                        └── 0001.tar.gz
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, installs logging, prints, exits        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - `RollApi<S>`: owns a store and its config                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - scan, plan, roll; return `CmdResult`                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - `VersionStore` trait; `FsStore`, `InMemoryStore`         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process,
//! and every operation takes its root explicitly rather than reading the
//! working directory.
//!
//! ## Module Overview
//!
//! - [`api`]: entry point for all operations
//! - [`commands`]: roll, plan and scan logic
//! - [`store`]: filesystem and in-memory backends
//! - [`model`]: version names, sets, labels and plans
//! - [`config`]: per-root `.vroll.json`
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
