//! # API Reference Harness Core
//!
//! Pure logic for API Reference Harness: data models, the category table,
//! the Markdown section extractors, the knowledge base and its builder,
//! the query engine, and snapshot serialization.
//!
//! This crate performs no filesystem I/O. The application crate loads
//! [`models::Document`]s from disk and hands them to
//! [`knowledge::build`]; everything downstream operates on the in-memory
//! [`knowledge::KnowledgeBase`].
//!
//! ```text
//! Document ──▶ extract::* ──▶ KnowledgeBaseBuilder ──▶ KnowledgeBase
//!                                                        │
//!                                      ┌─────────────────┤
//!                                      ▼                 ▼
//!                                 QueryEngine        snapshot
//! ```

pub mod category;
pub mod extract;
pub mod knowledge;
pub mod markdown;
pub mod models;
pub mod query;
pub mod snapshot;

pub use extract::ExtractRules;
pub use knowledge::{build, BuildOptions, BuildReport, KnowledgeBase};
pub use models::{ApiDetail, ApiRecord, Document, Parameter, SearchHit};
pub use query::QueryEngine;
