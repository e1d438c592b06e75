//! Core data models used throughout API Reference Harness.
//!
//! These types represent the documents, extracted records, and query
//! projections that flow through the extraction and retrieval pipeline.

use serde::{Deserialize, Serialize};

/// A Markdown file as read by the loader, before extraction.
#[derive(Debug, Clone)]
pub struct Document {
    pub file_path: String,
    /// Path relative to the documentation root, `/`-separated.
    pub relative_path: String,
    pub category: String,
    pub content: String,
    pub title: Option<String>,
}

/// One row of a parameter table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

impl Parameter {
    pub fn new(name: &str, ty: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            ty: ty.to_string(),
            description: description.to_string(),
        }
    }
}

/// Structured knowledge extracted from one documented API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRecord {
    /// Heading text exactly as written, backticks included.
    pub title: String,
    pub summary: Option<String>,
    pub examples: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub inheritance: Option<String>,
    pub file_path: String,
    pub relative_path: String,
}

/// A search match, without the example bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub category: String,
    pub api_name: String,
    pub title: String,
    pub summary: Option<String>,
    pub parameters: Vec<Parameter>,
    pub inheritance: Option<String>,
    pub file_path: String,
}

/// Full result of an exact lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiDetail {
    pub category: String,
    pub api_name: String,
    #[serde(flatten)]
    pub record: ApiRecord,
}
