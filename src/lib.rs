//! # API Reference Harness
//!
//! Turns a tree of loosely formatted Markdown API documentation into a
//! typed, queryable knowledge base.
//!
//! The pure extraction and query logic lives in [`apiref_core`]; this crate
//! adds the filesystem loader, configuration, logging, the snapshot writer
//! and the `apiref` command-line front end.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌───────────────┐
//! │   Loader    │──▶│  Extractors  │──▶│ KnowledgeBase │
//! │ walk + read │   │ title, table │   │ category→name │
//! └─────────────┘   └──────────────┘   └───────┬───────┘
//!                                              │
//!                          ┌───────────────────┤
//!                          ▼                   ▼
//!                   ┌─────────────┐     ┌────────────┐
//!                   │ QueryEngine │     │  Snapshot  │
//!                   │  CLI/shell  │     │   (JSON)   │
//!                   └─────────────┘     └────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`error`] | Load errors |
//! | [`loader`] | Documentation tree walker |
//! | [`ingest`] | Load + build orchestration |
//! | [`search`] | `search` command and result formatting |
//! | [`get`] | `get` command and record rendering |
//! | [`list`] | `list` and `categories` commands |
//! | [`export`] | JSON snapshot writer |
//! | [`shell`] | Interactive console |
//! | [`logging`] | `tracing` subscriber setup |

pub mod config;
pub mod error;
pub mod export;
pub mod get;
pub mod ingest;
pub mod list;
pub mod loader;
pub mod logging;
pub mod search;
pub mod shell;
