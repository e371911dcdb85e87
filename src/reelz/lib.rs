//! # Reelz Architecture
//!
//! Reelz is a **UI-agnostic movie browsing library** with a terminal client on top.
//! Everything that decides what the user sees lives in the library; the binary only
//! parses arguments, reads lines, and prints rendered templates.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the shell, renders templates      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Controller (controller/)                              │
//! │  - Owns tab, query, loading flag and result set             │
//! │  - Notifies observers after every mutation                  │
//! │  - Computes the derived screen (cards, empty states)        │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Favorites (favorites.rs)    │ │  Data Source (source/)     │
//! │  - toggle / contains         │ │  - fetch_popular / search  │
//! │  - load / save via store/    │ │  - fixtures or HTTP        │
//! └──────────────────────────────┘ └────────────────────────────┘
//!                 │
//!                 ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FsStore (production), MemStore (testing)                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Model
//!
//! Nothing the user does in the browser flow produces a visible error. Storage reads
//! that fail yield an empty favorites list, source failures yield an empty result set,
//! and an empty query is ignored. Failures are logged through `tracing` instead.
//!
//! ## Module Overview
//!
//! - [`model`]: `Movie` and `Tab`
//! - [`store`]: key-value persistence capability
//! - [`favorites`]: the favorites collection and its store
//! - [`source`]: the async movie data source and its implementations
//! - [`controller`]: view state, observers and derived screens
//! - [`config`]: configuration file handling
//! - [`error`]: error types

pub mod config;
pub mod controller;
pub mod error;
pub mod favorites;
pub mod model;
pub mod source;
pub mod store;
