//! Build orchestration: loader → extractors → knowledge base.
//!
//! The whole tree is parsed fresh on every run. The returned
//! [`KnowledgeBase`] is read-only from here on.

use anyhow::{Context, Result};
use apiref_core::{build, BuildReport, KnowledgeBase};

use crate::config::Config;
use crate::loader;

pub fn build_knowledge_base(config: &Config) -> Result<(KnowledgeBase, BuildReport)> {
    let documents = loader::load_documents(&config.docs).with_context(|| {
        format!(
            "Failed to load documentation from {}",
            config.docs.root.display()
        )
    })?;

    let rules = config.extract.rules();
    let (kb, report) = build(&documents, &rules, config.index.build_options());

    tracing::info!(
        documents = documents.len(),
        indexed = report.indexed,
        untitled = report.untitled,
        dropped = report.dropped,
        overwritten = report.overwritten,
        "knowledge base built"
    );

    Ok((kb, report))
}
