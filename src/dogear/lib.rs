//! # Dogear Architecture
//!
//! Dogear bookmarks directories under short names so you can flip back to
//! them later. The library owns the bookmark store and every rule about it;
//! the `dogear` binary is a thin client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, reads terminal input   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Load store → run one command → save if mutated           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - fold, unfold, find, like, list, recent, edit, clean, ... │
//! │  - Operates on BookmarkStore, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, codec.rs)                           │
//! │  - BookmarkStore, StoreBackend (file / memory)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Collaborators
//!
//! Anything the host provides goes through a trait in [`system`]:
//! directory checks and the working directory ([`system::Filesystem`]) and
//! the y/n prompts of interactive commands ([`system::Prompter`]). Commands
//! are tested against in-memory fakes of both.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: The bookmark collection and its persistence backends
//! - [`codec`]: The `name=path` line format
//! - [`model`]: The `Bookmark` type
//! - [`validation`]: Bookmark name rules
//! - [`config`]: Configuration and store path resolution
//! - [`system`]: Filesystem and prompt collaborators
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod system;
pub mod validation;
