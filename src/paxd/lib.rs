//! # paxd
//!
//! paxd manages PaX markings: five per-binary hardening toggles stored as the
//! `user.pax.flags` extended attribute on the executable itself. A kernel
//! with PaX xattr support reads that attribute at `exec` time.
//!
//! It does three things:
//! - **apply**: read `/etc/paxd.conf` and write the markings it lists,
//! - **show**: report the markings of ELF binaries, optionally over a tree,
//! - **set / clear**: mark or unmark files directly.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)              thin facade over commands  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - apply, show, set: return CmdResult, never print          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - PaxStore adapter over an AttributeBackend                │
//! │  - XattrBackend (production), MemBackend (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`flags`] and [`directive`] are pure and sit beside the layers.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: apply, show, set/clear
//! - [`directive`]: Configuration line parser
//! - [`flags`]: The flag alphabet, validation and display
//! - [`store`]: Attribute storage abstraction and implementations
//! - [`elf`]: ELF magic probe
//! - [`config`]: Runtime settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directive;
pub mod elf;
pub mod error;
pub mod flags;
pub mod store;
